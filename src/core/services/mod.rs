pub mod budget_service;
pub mod expense_service;
pub mod split_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use expense_service::{BookingCharge, ExpenseService, NewExpense};
pub use split_service::SplitService;
pub use summary_service::SummaryService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

impl ServiceError {
    /// Stable machine-readable tag for structured replies.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Ledger(inner) => inner.kind(),
            ServiceError::Invalid(_) => "invalid_input",
        }
    }
}
