use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    expense::{Expense, ExpenseCategory, ExpenseId, ExpenseKind},
    report::{BudgetSetup, ExpenseReceipt},
};

/// In-memory record of one trip's budget and expenses.
///
/// A ledger belongs to exactly one trip-planning session. Every mutation
/// goes through `&mut self`, so a recording call appends the expense and
/// updates the aggregates as one unit; there is no partially applied state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    #[serde(default)]
    budget: Option<TripBudget>,
    next_expense_seq: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Budget state, present once `set_budget` has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripBudget {
    pub total_budget: Decimal,
    pub group_size: u32,
    pub per_person_budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub expenses: Vec<Expense>,
}

/// Clamps a requested traveler count to at least one, so per-person math
/// never divides by zero. The conversational caller gets a warning in the
/// logs instead of a failed call.
pub fn clamp_participants(requested: i64, what: &str) -> u32 {
    if requested < 1 {
        tracing::warn!(requested, what, "non-positive traveler count clamped to 1");
        1
    } else {
        u32::try_from(requested).unwrap_or(u32::MAX)
    }
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            budget: None,
            next_expense_seq: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.budget.is_some()
    }

    /// Read access to the budget state, or `Uninitialized` before `set_budget`.
    pub fn budget(&self) -> Result<&TripBudget, LedgerError> {
        self.budget.as_ref().ok_or(LedgerError::Uninitialized)
    }

    fn budget_mut(&mut self) -> Result<&mut TripBudget, LedgerError> {
        self.budget.as_mut().ok_or(LedgerError::Uninitialized)
    }

    /// (Re)initializes the budget. Prior expenses are discarded outright;
    /// this is an overwrite, not a merge. The expense id counter is not
    /// reset, keeping ids unique for the ledger's lifetime.
    pub fn set_budget(&mut self, total_budget: Decimal, group_size: u32) -> BudgetSetup {
        let group_size = group_size.max(1);
        let per_person_budget = total_budget / Decimal::from(group_size);
        self.budget = Some(TripBudget {
            total_budget,
            group_size,
            per_person_budget,
            spent: Decimal::ZERO,
            remaining: total_budget,
            expenses: Vec::new(),
        });
        self.touch();
        tracing::info!(%total_budget, group_size, "budget initialized");
        BudgetSetup {
            total_budget,
            group_size,
            per_person_budget,
        }
    }

    /// Appends a booking expense and updates `spent`/`remaining` in the
    /// same call. Booking costs always split across the whole group.
    pub fn record_booking_expense(
        &mut self,
        booking_type: String,
        booking_reference: Option<String>,
        amount: Decimal,
        description: String,
    ) -> Result<ExpenseReceipt, LedgerError> {
        self.budget()?;
        let id = self.next_expense_id();
        let budget = self.budget_mut()?;
        let shared_by = budget.group_size;
        let per_person_cost = amount / Decimal::from(shared_by);
        let expense = Expense {
            id: id.clone(),
            amount,
            description: description.clone(),
            recorded_at: Utc::now(),
            kind: ExpenseKind::Booking {
                booking_type,
                booking_reference,
            },
        };
        budget.expenses.push(expense);
        budget.spent += amount;
        budget.remaining = budget.total_budget - budget.spent;
        let receipt = ExpenseReceipt {
            expense_id: id,
            amount,
            description,
            per_person_cost,
            shared_by,
            total_spent: budget.spent,
            remaining_budget: budget.remaining,
        };
        self.touch();
        Ok(receipt)
    }

    /// Appends a freeform expense split among `shared_by` travelers.
    /// The per-person cost is fixed at recording time.
    pub fn record_additional_expense(
        &mut self,
        category: ExpenseCategory,
        amount: Decimal,
        description: String,
        shared_by: u32,
    ) -> Result<ExpenseReceipt, LedgerError> {
        self.budget()?;
        let id = self.next_expense_id();
        let budget = self.budget_mut()?;
        let shared_by = shared_by.max(1);
        let per_person_cost = amount / Decimal::from(shared_by);
        let expense = Expense {
            id: id.clone(),
            amount,
            description: description.clone(),
            recorded_at: Utc::now(),
            kind: ExpenseKind::Additional {
                category,
                shared_by,
                per_person_cost,
            },
        };
        budget.expenses.push(expense);
        budget.spent += amount;
        budget.remaining = budget.total_budget - budget.spent;
        let receipt = ExpenseReceipt {
            expense_id: id,
            amount,
            description,
            per_person_cost,
            shared_by,
            total_spent: budget.spent,
            remaining_budget: budget.remaining,
        };
        self.touch();
        Ok(receipt)
    }

    pub fn expense_count(&self) -> usize {
        self.budget
            .as_ref()
            .map(|budget| budget.expenses.len())
            .unwrap_or(0)
    }

    fn next_expense_id(&mut self) -> ExpenseId {
        self.next_expense_seq += 1;
        ExpenseId::from_seq(self.next_expense_seq)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn recording_before_set_budget_is_rejected() {
        let mut ledger = Ledger::new();
        let err = ledger
            .record_booking_expense("hotel".into(), None, dec!(1200), "Hotel".into())
            .unwrap_err();
        assert_eq!(err, LedgerError::Uninitialized);
        assert_eq!(ledger.expense_count(), 0);
    }

    #[test]
    fn spent_matches_expense_sum_after_every_call() {
        let mut ledger = Ledger::new();
        ledger.set_budget(dec!(50000), 2);
        ledger
            .record_booking_expense("hotel".into(), None, dec!(8000), "Hotel".into())
            .unwrap();
        ledger
            .record_additional_expense(ExpenseCategory::Food, dec!(1500), "Lunch".into(), 2)
            .unwrap();

        let budget = ledger.budget().unwrap();
        let sum: Decimal = budget.expenses.iter().map(|e| e.amount).sum();
        assert_eq!(budget.spent, sum);
        assert_eq!(budget.remaining, budget.total_budget - budget.spent);
    }

    #[test]
    fn reinitializing_discards_expenses_but_not_id_sequence() {
        let mut ledger = Ledger::new();
        ledger.set_budget(dec!(10000), 1);
        let first = ledger
            .record_booking_expense("taxi".into(), None, dec!(300), "Taxi".into())
            .unwrap();

        ledger.set_budget(dec!(20000), 2);
        assert_eq!(ledger.expense_count(), 0);
        assert_eq!(ledger.budget().unwrap().spent, Decimal::ZERO);

        let second = ledger
            .record_booking_expense("taxi".into(), None, dec!(300), "Taxi".into())
            .unwrap();
        assert_ne!(first.expense_id, second.expense_id);
    }

    #[test]
    fn clamp_participants_floors_at_one() {
        assert_eq!(clamp_participants(0, "group_size"), 1);
        assert_eq!(clamp_participants(-4, "shared_by"), 1);
        assert_eq!(clamp_participants(3, "group_size"), 3);
    }
}
