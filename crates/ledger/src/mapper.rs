//! Row ↔ entity mapping.
//!
//! Field renaming and numeric carry-over only — no validation, no I/O.
//! Rows keep `created_at` for ordering; the API entities do not expose it,
//! so the row-building direction takes it as an argument.

use chrono::{DateTime, Utc};
use db::models::{ExpenseRow, UserRow};

use crate::models::{Expense, User};

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            amount: row.amount,
            description: row.description,
            user_id: row.user_id,
        }
    }
}

/// Rebuild a user row from its API entity.
pub fn user_to_row(user: &User, created_at: DateTime<Utc>) -> UserRow {
    UserRow {
        id: user.id,
        name: user.name.clone(),
        created_at,
    }
}

/// Rebuild an expense row from its API entity.
pub fn expense_to_row(expense: &Expense, created_at: DateTime<Utc>) -> ExpenseRow {
    ExpenseRow {
        id: expense.id,
        name: expense.name.clone(),
        amount: expense.amount,
        description: expense.description.clone(),
        user_id: expense.user_id,
        created_at,
    }
}
