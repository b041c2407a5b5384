//! Recording of booking-linked and freeform expenses.

use rust_decimal::Decimal;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::booking::BookingLookup;
use crate::domain::expense::ExpenseCategory;
use crate::domain::ledger::{clamp_participants, Ledger};
use crate::domain::report::ExpenseReceipt;
use crate::errors::LedgerError;

/// Input for tracking a reservation cost.
#[derive(Debug, Clone, Default)]
pub struct BookingCharge {
    pub booking_type: String,
    pub booking_reference: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

/// Input for a freeform expense.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub description: String,
    /// Travelers splitting this expense; defaults to the whole group.
    pub shared_by: Option<i64>,
}

pub struct ExpenseService;

impl ExpenseService {
    /// Records a booking expense, resolving the amount from the charge or
    /// from the booking directory.
    ///
    /// Resolution order: an explicit amount always wins; a reference alone
    /// must resolve, and `BookingNotFound` propagates if it does not; with
    /// neither, the call fails with `AmountRequired`. When both are given,
    /// a successful lookup only enriches the description.
    pub fn track_booking_expense(
        ledger: &mut Ledger,
        bookings: &dyn BookingLookup,
        charge: BookingCharge,
    ) -> ServiceResult<ExpenseReceipt> {
        // Initialization is checked before any lookup so the caller is told
        // to set a budget first, not chased after booking references.
        ledger.budget()?;

        let BookingCharge {
            booking_type,
            booking_reference,
            amount,
            description,
        } = charge;

        if let Some(value) = amount {
            validate_amount(value)?;
        }

        let mut resolved_amount = amount;
        let mut resolved_description =
            description.unwrap_or_else(|| default_booking_description(&booking_type));

        if let Some(reference) = booking_reference.as_deref() {
            match bookings.resolve(reference) {
                Ok(resolved) => {
                    resolved_amount = Some(resolved_amount.unwrap_or(resolved.amount));
                    resolved_description = resolved.description;
                }
                Err(LedgerError::BookingNotFound(_)) if resolved_amount.is_some() => {
                    tracing::warn!(reference, "booking reference not found, using explicit amount");
                }
                Err(err) => return Err(err.into()),
            }
        }

        let amount = resolved_amount.ok_or(LedgerError::AmountRequired)?;
        let receipt = ledger.record_booking_expense(
            booking_type.clone(),
            booking_reference,
            amount,
            resolved_description,
        )?;
        tracing::info!(
            expense_id = %receipt.expense_id,
            booking_type = %booking_type,
            amount = %receipt.amount,
            remaining = %receipt.remaining_budget,
            "booking expense tracked"
        );
        Ok(receipt)
    }

    /// Records a freeform expense such as food, shopping, or activities.
    pub fn add_expense(ledger: &mut Ledger, expense: NewExpense) -> ServiceResult<ExpenseReceipt> {
        let group_size = i64::from(ledger.budget()?.group_size);
        validate_amount(expense.amount)?;

        let shared_by = clamp_participants(expense.shared_by.unwrap_or(group_size), "shared_by");
        let receipt = ledger.record_additional_expense(
            expense.category,
            expense.amount,
            expense.description,
            shared_by,
        )?;
        tracing::info!(
            expense_id = %receipt.expense_id,
            amount = %receipt.amount,
            shared_by,
            remaining = %receipt.remaining_budget,
            "expense added"
        );
        Ok(receipt)
    }
}

fn validate_amount(amount: Decimal) -> ServiceResult<()> {
    if amount < Decimal::ZERO {
        return Err(ServiceError::Invalid(
            "expense amount must not be negative".into(),
        ));
    }
    Ok(())
}

fn default_booking_description(booking_type: &str) -> String {
    let mut chars = booking_type.chars();
    match chars.next() {
        Some(first) => format!("{}{} booking", first.to_uppercase(), chars.as_str()),
        None => "Booking".to_string(),
    }
}
