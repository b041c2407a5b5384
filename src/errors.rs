use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no budget set; set a budget before recording or reporting expenses")]
    Uninitialized,
    #[error("an amount is required; supply one explicitly or via a resolvable booking reference")]
    AmountRequired,
    #[error("no booking found for reference {0}")]
    BookingNotFound(String),
}

impl LedgerError {
    /// Stable machine-readable tag for structured replies.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerError::Uninitialized => "uninitialized_ledger",
            LedgerError::AmountRequired => "amount_required",
            LedgerError::BookingNotFound(_) => "booking_not_found",
        }
    }
}
