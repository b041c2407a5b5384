//! Per-person cost projection over the ledger.

use rust_decimal::Decimal;

use crate::core::services::ServiceResult;
use crate::domain::expense::ExpenseKind;
use crate::domain::ledger::Ledger;
use crate::domain::report::{SplitLine, SplitReport};

pub struct SplitService;

impl SplitService {
    /// Derives what each traveler owes.
    ///
    /// Booking expenses divide evenly across the whole group; additional
    /// expenses contribute the per-person cost fixed when they were
    /// recorded. Nothing is rounded here; callers round for display.
    pub fn calculate_split(ledger: &Ledger) -> ServiceResult<SplitReport> {
        let budget = ledger.budget()?;
        let group_share = Decimal::from(budget.group_size);

        let mut per_person_bookings = Decimal::ZERO;
        let mut per_person_additional = Decimal::ZERO;
        let mut expense_details = Vec::with_capacity(budget.expenses.len());

        for expense in &budget.expenses {
            let (per_person, shared_by) = match &expense.kind {
                ExpenseKind::Booking { .. } => {
                    let share = expense.amount / group_share;
                    per_person_bookings += share;
                    (share, budget.group_size)
                }
                ExpenseKind::Additional {
                    shared_by,
                    per_person_cost,
                    ..
                } => {
                    per_person_additional += *per_person_cost;
                    (*per_person_cost, *shared_by)
                }
            };
            expense_details.push(SplitLine {
                description: expense.description.clone(),
                total_amount: expense.amount,
                per_person,
                shared_by,
            });
        }

        let per_person_total = per_person_bookings + per_person_additional;
        Ok(SplitReport {
            group_size: budget.group_size,
            per_person_bookings,
            per_person_additional,
            per_person_total,
            per_person_budget: budget.per_person_budget,
            per_person_remaining: budget.per_person_budget - per_person_total,
            expense_details,
        })
    }
}
