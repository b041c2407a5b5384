//! Value types for trip budgets, expenses, and bookings.

pub mod booking;
pub mod expense;
pub mod ledger;
pub mod report;

pub use booking::{BookingDirectory, BookingLookup, BookingRecord, ResolvedBooking};
pub use expense::{Expense, ExpenseCategory, ExpenseId, ExpenseKind};
pub use ledger::{clamp_participants, Ledger, TripBudget};
pub use report::{
    BudgetSetup, BudgetSummary, ExpenseFilter, ExpenseListing, ExpenseReceipt, SplitLine,
    SplitReport,
};
