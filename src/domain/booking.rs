use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// A completed reservation as reported by a booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub reference: String,
    pub booking_type: String,
    pub description: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    pub fn new(
        reference: impl Into<String>,
        booking_type: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            reference: reference.into(),
            booking_type: booking_type.into(),
            description: description.into(),
            amount,
            created_at: Utc::now(),
        }
    }
}

/// Amount and label resolved from a booking reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBooking {
    pub amount: Decimal,
    pub description: String,
}

/// Trait that abstracts how booking references resolve to charges.
pub trait BookingLookup {
    fn resolve(&self, reference: &str) -> Result<ResolvedBooking, LedgerError>;
}

/// In-memory directory of completed reservations for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDirectory {
    records: Vec<BookingRecord>,
}

impl BookingDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: BookingRecord) {
        tracing::info!(
            reference = %record.reference,
            booking_type = %record.booking_type,
            "booking recorded"
        );
        self.records.push(record);
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl BookingLookup for BookingDirectory {
    fn resolve(&self, reference: &str) -> Result<ResolvedBooking, LedgerError> {
        self.records
            .iter()
            .find(|record| record.reference == reference)
            .map(|record| ResolvedBooking {
                amount: record.amount,
                description: record.description.clone(),
            })
            .ok_or_else(|| LedgerError::BookingNotFound(reference.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn resolve_finds_recorded_booking() {
        let mut directory = BookingDirectory::new();
        directory.record(BookingRecord::new(
            "HTL-104",
            "hotel",
            "Seaview Inn - Goa",
            dec!(4500),
        ));

        let resolved = directory.resolve("HTL-104").unwrap();
        assert_eq!(resolved.amount, dec!(4500));
        assert_eq!(resolved.description, "Seaview Inn - Goa");
    }

    #[test]
    fn resolve_reports_missing_reference() {
        let directory = BookingDirectory::new();
        let err = directory.resolve("FLT-000").unwrap_err();
        assert_eq!(err, LedgerError::BookingNotFound("FLT-000".into()));
    }
}
