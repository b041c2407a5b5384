//! Capability dispatch: structured intents routed to ledger operations.
//!
//! The chat layer turns a user request into a [`LedgerIntent`]; every intent
//! maps to exactly one ledger operation, and every outcome (success or
//! failure) comes back as a [`LedgerReply`] the conversation can relay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::services::{
    BookingCharge, BudgetService, ExpenseService, NewExpense, ServiceError, ServiceResult,
    SplitService, SummaryService,
};
use crate::domain::expense::ExpenseCategory;
use crate::domain::report::ExpenseFilter;
use crate::session::TripSession;

/// One budget-related request, as produced by the intent classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum LedgerIntent {
    SetBudget {
        total_budget: Decimal,
        #[serde(default = "default_group_size")]
        group_size: i64,
    },
    TrackBookingExpense {
        booking_type: String,
        #[serde(default)]
        booking_reference: Option<String>,
        #[serde(default)]
        amount: Option<Decimal>,
        #[serde(default)]
        description: Option<String>,
    },
    AddExpense {
        category: ExpenseCategory,
        amount: Decimal,
        description: String,
        #[serde(default)]
        shared_by: Option<i64>,
    },
    BudgetSummary,
    CalculateSplit,
    ExpenseList {
        #[serde(default)]
        filter: Option<ExpenseFilter>,
    },
}

fn default_group_size() -> i64 {
    1
}

/// Envelope the chat layer relays back to the user.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LedgerReply {
    Ok { data: serde_json::Value },
    Error { kind: String, message: String },
}

impl LedgerReply {
    pub fn is_ok(&self) -> bool {
        matches!(self, LedgerReply::Ok { .. })
    }
}

/// Routes an intent to its operation. Never panics; failures come back as
/// `LedgerReply::Error` so the conversation always has something to say.
pub fn dispatch(session: &mut TripSession, intent: LedgerIntent) -> LedgerReply {
    let result = match intent {
        LedgerIntent::SetBudget {
            total_budget,
            group_size,
        } => BudgetService::set_budget(session.ledger_mut(), total_budget, group_size)
            .and_then(reply_data),
        LedgerIntent::TrackBookingExpense {
            booking_type,
            booking_reference,
            amount,
            description,
        } => {
            let (ledger, bookings) = session.parts_mut();
            ExpenseService::track_booking_expense(
                ledger,
                bookings,
                BookingCharge {
                    booking_type,
                    booking_reference,
                    amount,
                    description,
                },
            )
            .and_then(reply_data)
        }
        LedgerIntent::AddExpense {
            category,
            amount,
            description,
            shared_by,
        } => ExpenseService::add_expense(
            session.ledger_mut(),
            NewExpense {
                category,
                amount,
                description,
                shared_by,
            },
        )
        .and_then(reply_data),
        LedgerIntent::BudgetSummary => {
            SummaryService::get_budget_summary(session.ledger()).and_then(reply_data)
        }
        LedgerIntent::CalculateSplit => {
            SplitService::calculate_split(session.ledger()).and_then(reply_data)
        }
        LedgerIntent::ExpenseList { filter } => {
            SummaryService::get_expense_list(session.ledger(), filter).and_then(reply_data)
        }
    };

    match result {
        Ok(reply) => reply,
        Err(err) => LedgerReply::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        },
    }
}

fn reply_data<T: Serialize>(value: T) -> ServiceResult<LedgerReply> {
    serde_json::to_value(value)
        .map(|data| LedgerReply::Ok { data })
        .map_err(|err| ServiceError::Invalid(err.to_string()))
}
