use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier minted by the owning ledger's monotonic counter.
///
/// Ids stay unique for the whole lifetime of a ledger, including across
/// budget re-initializations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub(crate) fn from_seq(seq: u64) -> Self {
        Self(format!("EXP-{seq:06}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single recorded cost. Appended once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Decimal,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: ExpenseKind,
}

/// What kind of cost an expense is, with the kind-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpenseKind {
    /// Tied to a reservation. Always split evenly across the whole group.
    Booking {
        booking_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        booking_reference: Option<String>,
    },
    /// Freeform cost split among `shared_by` travelers, which may be a
    /// subset of the group.
    Additional {
        category: ExpenseCategory,
        shared_by: u32,
        per_person_cost: Decimal,
    },
}

impl Expense {
    pub fn is_booking(&self) -> bool {
        matches!(self.kind, ExpenseKind::Booking { .. })
    }

    /// Per-traveler share of this expense for a group of `group_size`.
    ///
    /// Booking expenses divide across everyone; additional expenses carry
    /// their own share, fixed at recording time.
    pub fn per_person(&self, group_size: u32) -> Decimal {
        match &self.kind {
            ExpenseKind::Booking { .. } => self.amount / Decimal::from(group_size.max(1)),
            ExpenseKind::Additional { per_person_cost, .. } => *per_person_cost,
        }
    }

    /// How many travelers this expense is split among.
    pub fn shared_by(&self, group_size: u32) -> u32 {
        match &self.kind {
            ExpenseKind::Booking { .. } => group_size,
            ExpenseKind::Additional { shared_by, .. } => *shared_by,
        }
    }
}

/// Category label for additional expenses.
///
/// Unknown labels are preserved verbatim as `Custom` rather than rejected,
/// so conversational callers can invent categories freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    Food,
    Shopping,
    Activities,
    Transport,
    Miscellaneous,
    Custom(String),
}

impl ExpenseCategory {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "food" => ExpenseCategory::Food,
            "shopping" => ExpenseCategory::Shopping,
            "activities" => ExpenseCategory::Activities,
            "transport" => ExpenseCategory::Transport,
            "miscellaneous" | "misc" | "" => ExpenseCategory::Miscellaneous,
            _ => ExpenseCategory::Custom(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Activities => "Activities",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Miscellaneous => "Miscellaneous",
            ExpenseCategory::Custom(label) => label,
        }
    }
}

impl From<String> for ExpenseCategory {
    fn from(raw: String) -> Self {
        ExpenseCategory::parse(&raw)
    }
}

impl From<ExpenseCategory> for String {
    fn from(category: ExpenseCategory) -> Self {
        category.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(ExpenseCategory::parse("FOOD"), ExpenseCategory::Food);
        assert_eq!(ExpenseCategory::parse(" misc "), ExpenseCategory::Miscellaneous);
        assert_eq!(
            ExpenseCategory::parse("Street Food Tour"),
            ExpenseCategory::Custom("Street Food Tour".into())
        );
    }

    #[test]
    fn expense_id_formats_with_sequence() {
        assert_eq!(ExpenseId::from_seq(7).as_str(), "EXP-000007");
        assert_eq!(ExpenseId::from_seq(123456).to_string(), "EXP-123456");
    }
}
