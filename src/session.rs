//! Session-scoped ownership of the ledger and booking directory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::booking::{BookingDirectory, BookingLookup, BookingRecord};
use crate::domain::ledger::Ledger;

/// State for one trip-planning conversation.
///
/// Each session owns exactly one ledger and one booking directory; sessions
/// never share them. All mutation goes through `&mut self`, which is what
/// keeps each recording call atomic with respect to the ledger aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSession {
    pub id: Uuid,
    ledger: Ledger,
    bookings: BookingDirectory,
}

impl TripSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            ledger: Ledger::new(),
            bookings: BookingDirectory::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn bookings(&self) -> &BookingDirectory {
        &self.bookings
    }

    /// How a completed reservation enters the session: the booking flow
    /// reports it here, and the recorder can later resolve it by reference.
    pub fn record_booking(&mut self, record: BookingRecord) {
        self.bookings.record(record);
    }

    /// Split borrow for callers that record against the ledger while
    /// resolving from the directory.
    pub fn parts_mut(&mut self) -> (&mut Ledger, &dyn BookingLookup) {
        (&mut self.ledger, &self.bookings)
    }
}

impl Default for TripSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use rust_decimal_macros::dec;

    #[test]
    fn sessions_own_independent_state() {
        let mut first = TripSession::new();
        let second = TripSession::new();
        assert_ne!(first.id, second.id);

        first.record_booking(BookingRecord::new("HTL-1", "hotel", "Hotel", dec!(1000)));
        assert_eq!(first.bookings().len(), 1);
        assert!(second.bookings().is_empty());
    }

    #[test]
    fn parts_mut_exposes_lookup_and_ledger_together() {
        let mut session = TripSession::new();
        session.record_booking(BookingRecord::new("FLT-9", "flight", "Flight", dec!(5500)));
        session.ledger_mut().set_budget(dec!(20000), 2);

        let (ledger, bookings) = session.parts_mut();
        let resolved = bookings.resolve("FLT-9").unwrap();
        ledger
            .record_booking_expense(
                "flight".into(),
                Some("FLT-9".into()),
                resolved.amount,
                resolved.description,
            )
            .unwrap();
        assert_eq!(session.ledger().budget().unwrap().spent, dec!(5500));

        let err = session.bookings().resolve("FLT-0").unwrap_err();
        assert_eq!(err, LedgerError::BookingNotFound("FLT-0".into()));
    }
}
