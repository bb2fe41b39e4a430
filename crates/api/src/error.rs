//! Error-to-response mapping.
//!
//! Domain violations come back as distinguishable JSON bodies
//! `{ "code": ..., "message": ... }`; store failures are logged and
//! surfaced as 503 with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use ledger::LedgerError;

/// Wrapper so `?` lifts a [`LedgerError`] straight out of a handler.
#[derive(Debug)]
pub struct ApiError(LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self.0 {
            LedgerError::UserNotFound(_) => {
                (StatusCode::NOT_FOUND, "USER_NOT_FOUND", self.0.to_string())
            }
            LedgerError::ExpenseNotFound(_) => (
                StatusCode::NOT_FOUND,
                "EXPENSE_NOT_FOUND",
                self.0.to_string(),
            ),
            LedgerError::InvalidAmount(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_AMOUNT",
                self.0.to_string(),
            ),
            LedgerError::InvalidDescription => (
                StatusCode::BAD_REQUEST,
                "INVALID_DESCRIPTION",
                self.0.to_string(),
            ),
            LedgerError::Store(err) => {
                error!("store error: {err}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "store unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({ "code": code, "message": message }));
        (status, body).into_response()
    }
}
