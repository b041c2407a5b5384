//! Budget initialization for a trip ledger.

use rust_decimal::Decimal;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::ledger::{clamp_participants, Ledger};
use crate::domain::report::BudgetSetup;

pub struct BudgetService;

impl BudgetService {
    /// Sets (or resets) the total budget and group size.
    ///
    /// A non-positive `group_size` is clamped to 1 rather than rejected, so
    /// the conversational flow is never interrupted. Re-initializing
    /// discards all previously recorded expenses.
    pub fn set_budget(
        ledger: &mut Ledger,
        total_budget: Decimal,
        group_size: i64,
    ) -> ServiceResult<BudgetSetup> {
        if total_budget < Decimal::ZERO {
            return Err(ServiceError::Invalid(
                "total budget must not be negative".into(),
            ));
        }
        let group_size = clamp_participants(group_size, "group_size");
        Ok(ledger.set_budget(total_budget, group_size))
    }
}
