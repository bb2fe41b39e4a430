//! API-facing entity types.
//!
//! These are the shapes the transport layer serializes: camelCase field
//! names on the wire, in contrast to the snake_case row structs in the
//! `db` crate.  The `mapper` module converts between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A user as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Expense
// ---------------------------------------------------------------------------

/// An expense as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub description: String,
    /// Immutable after creation; set once from `NewExpense::user_id`.
    pub user_id: Uuid,
}

/// Input payload for creating an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub description: String,
    pub user_id: Uuid,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A transient message; lives only in process memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
}
