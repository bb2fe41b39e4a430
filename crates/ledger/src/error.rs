//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::MIN_DESCRIPTION_LEN;

/// Errors produced by the resolver set (validation + persistence).
#[derive(Debug, Error)]
pub enum LedgerError {
    // ------ Validation errors ------

    /// An expense references a user id that does not exist.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Amount must be strictly positive.
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(f64),

    /// Description too short after trimming.
    #[error("description must be at least {} characters after trimming", MIN_DESCRIPTION_LEN)]
    InvalidDescription,

    /// An update targeted an expense id that does not exist.
    #[error("expense not found: {0}")]
    ExpenseNotFound(Uuid),

    // ------ Store errors ------

    /// Persistence error from the db crate; the store is unreachable or
    /// rejected the query.  Never retried here.
    #[error("store unavailable: {0}")]
    Store(#[from] db::DbError),
}
