//! Read-side aggregate views over the ledger.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::core::services::ServiceResult;
use crate::domain::expense::ExpenseKind;
use crate::domain::ledger::Ledger;
use crate::domain::report::{BudgetSummary, ExpenseFilter, ExpenseListing};

pub struct SummaryService;

impl SummaryService {
    /// Aggregated budget view: totals, utilization, and per-category and
    /// per-booking-type breakdowns. Pure read, identical across repeated
    /// calls with no intervening writes.
    pub fn get_budget_summary(ledger: &Ledger) -> ServiceResult<BudgetSummary> {
        let budget = ledger.budget()?;

        let mut booking_breakdown: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut category_breakdown: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut booking_expenses_total = Decimal::ZERO;
        let mut additional_expenses_total = Decimal::ZERO;

        for expense in &budget.expenses {
            match &expense.kind {
                ExpenseKind::Booking { booking_type, .. } => {
                    booking_expenses_total += expense.amount;
                    *booking_breakdown.entry(booking_type.clone()).or_default() += expense.amount;
                }
                ExpenseKind::Additional { category, .. } => {
                    additional_expenses_total += expense.amount;
                    *category_breakdown
                        .entry(category.label().to_string())
                        .or_default() += expense.amount;
                }
            }
        }

        let budget_utilization_percent = if budget.total_budget > Decimal::ZERO {
            budget.spent / budget.total_budget * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        Ok(BudgetSummary {
            total_budget: budget.total_budget,
            group_size: budget.group_size,
            per_person_budget: budget.per_person_budget,
            total_spent: budget.spent,
            remaining_budget: budget.remaining,
            budget_utilization_percent,
            booking_expenses_total,
            additional_expenses_total,
            booking_breakdown,
            category_breakdown,
            total_expenses_count: budget.expenses.len(),
        })
    }

    /// Chronological expense listing, optionally narrowed to one kind,
    /// with the sum of what is listed.
    pub fn get_expense_list(
        ledger: &Ledger,
        filter: Option<ExpenseFilter>,
    ) -> ServiceResult<ExpenseListing> {
        let budget = ledger.budget()?;
        let expenses: Vec<_> = budget
            .expenses
            .iter()
            .filter(|expense| match filter {
                Some(ExpenseFilter::Booking) => expense.is_booking(),
                Some(ExpenseFilter::Additional) => !expense.is_booking(),
                None => true,
            })
            .cloned()
            .collect();
        let total_amount = expenses.iter().map(|expense| expense.amount).sum();
        Ok(ExpenseListing {
            expense_count: expenses.len(),
            total_amount,
            expenses,
        })
    }
}
