//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! API-facing entity types live in the `ledger` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// expenses
// ---------------------------------------------------------------------------

/// A persisted expense row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ExpenseRow {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub description: String,
    /// References `users.id`; checked by the service, not by the schema.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
