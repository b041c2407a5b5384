use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::expense::{Expense, ExpenseId};

/// Echo returned by budget initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSetup {
    pub total_budget: Decimal,
    pub group_size: u32,
    pub per_person_budget: Decimal,
}

/// Confirmation returned by every successful recording call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseReceipt {
    pub expense_id: ExpenseId,
    pub amount: Decimal,
    pub description: String,
    /// Share for one traveler: `amount / group_size` for bookings,
    /// `amount / shared_by` for additional expenses.
    pub per_person_cost: Decimal,
    pub shared_by: u32,
    pub total_spent: Decimal,
    pub remaining_budget: Decimal,
}

/// One row of the split breakdown, in recording order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLine {
    pub description: String,
    pub total_amount: Decimal,
    pub per_person: Decimal,
    pub shared_by: u32,
}

/// Per-person cost projection over the whole ledger.
///
/// Values are unrounded; apply [`SplitReport::rounded`] before showing them
/// to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    pub group_size: u32,
    pub per_person_bookings: Decimal,
    pub per_person_additional: Decimal,
    pub per_person_total: Decimal,
    pub per_person_budget: Decimal,
    pub per_person_remaining: Decimal,
    pub expense_details: Vec<SplitLine>,
}

impl SplitReport {
    /// Presentation copy with every amount rounded to two decimal places.
    pub fn rounded(&self) -> SplitReport {
        SplitReport {
            group_size: self.group_size,
            per_person_bookings: self.per_person_bookings.round_dp(2),
            per_person_additional: self.per_person_additional.round_dp(2),
            per_person_total: self.per_person_total.round_dp(2),
            per_person_budget: self.per_person_budget.round_dp(2),
            per_person_remaining: self.per_person_remaining.round_dp(2),
            expense_details: self
                .expense_details
                .iter()
                .map(|line| SplitLine {
                    description: line.description.clone(),
                    total_amount: line.total_amount.round_dp(2),
                    per_person: line.per_person.round_dp(2),
                    shared_by: line.shared_by,
                })
                .collect(),
        }
    }
}

/// Aggregated view of the ledger. Pure projection, no mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_budget: Decimal,
    pub group_size: u32,
    pub per_person_budget: Decimal,
    pub total_spent: Decimal,
    pub remaining_budget: Decimal,
    /// `spent / total_budget * 100`; zero when the budget itself is zero.
    pub budget_utilization_percent: Decimal,
    pub booking_expenses_total: Decimal,
    pub additional_expenses_total: Decimal,
    pub booking_breakdown: BTreeMap<String, Decimal>,
    pub category_breakdown: BTreeMap<String, Decimal>,
    pub total_expenses_count: usize,
}

/// Which expense kinds a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseFilter {
    Booking,
    Additional,
}

/// Chronological expense listing with the sum of the listed entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseListing {
    pub expense_count: usize,
    pub total_amount: Decimal,
    pub expenses: Vec<Expense>,
}
