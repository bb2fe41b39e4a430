//! Business-rule validation — run before any mutation reaches the store.
//!
//! Rules enforced, in order:
//! 1. The referenced user must exist (the resolver performs the lookup and
//!    passes the fact in, so ordering stays testable without a database).
//! 2. Amount must be strictly greater than zero.
//! 3. Description must be at least three characters after trimming.
//!
//! The first violated rule wins; a bad user reference is reported even when
//! amount and description are also invalid.

use crate::{error::LedgerError, models::NewExpense};

/// Minimum trimmed description length.
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Validate a creation payload against all three rules, in order.
///
/// # Errors
/// - [`LedgerError::UserNotFound`] if `user_exists` is false.
/// - [`LedgerError::InvalidAmount`] if the amount is not strictly positive.
/// - [`LedgerError::InvalidDescription`] if the trimmed description is too short.
pub fn validate_new_expense(user_exists: bool, input: &NewExpense) -> Result<(), LedgerError> {
    if !user_exists {
        return Err(LedgerError::UserNotFound(input.user_id));
    }
    validate_amount(input.amount)?;
    validate_description(&input.description)
}

/// Validate the mutable fields of an update payload.
///
/// User existence is not re-checked: `user_id` is immutable after creation.
pub fn validate_update(amount: f64, description: &str) -> Result<(), LedgerError> {
    validate_amount(amount)?;
    validate_description(description)
}

/// Amount must be strictly positive (NaN is rejected too).
pub fn validate_amount(amount: f64) -> Result<(), LedgerError> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

/// Trimmed description must be at least [`MIN_DESCRIPTION_LEN`] characters.
pub fn validate_description(description: &str) -> Result<(), LedgerError> {
    if description.trim().chars().count() >= MIN_DESCRIPTION_LEN {
        Ok(())
    } else {
        Err(LedgerError::InvalidDescription)
    }
}
