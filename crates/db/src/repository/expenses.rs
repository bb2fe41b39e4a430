//! Expense repository functions.

use chrono::Utc;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{models::ExpenseRow, DbError};

/// Insert a new expense and return the created row.
///
/// Takes any executor so the insert can share a transaction with the
/// user-existence check that precedes it.
pub async fn insert_expense<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
    amount: f64,
    description: &str,
    user_id: Uuid,
) -> Result<ExpenseRow, DbError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, ExpenseRow>(
        r#"
        INSERT INTO expenses (id, name, amount, description, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, amount, description, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(amount)
    .bind(description)
    .bind(user_id)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

/// Return all expenses in store-default order.
pub async fn list_expenses(pool: &PgPool) -> Result<Vec<ExpenseRow>, DbError> {
    let rows = sqlx::query_as::<_, ExpenseRow>(
        "SELECT id, name, amount, description, user_id, created_at FROM expenses",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return all expenses for one user ordered by creation time (newest first).
///
/// An unknown `user_id` simply yields an empty vec.
pub async fn list_expenses_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ExpenseRow>, DbError> {
    let rows = sqlx::query_as::<_, ExpenseRow>(
        r#"
        SELECT id, name, amount, description, user_id, created_at
        FROM expenses
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Sum of all expense amounts, computed by the store; 0 when none exist.
pub async fn sum_amounts(pool: &PgPool) -> Result<f64, DbError> {
    let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0) FROM expenses")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

/// Update amount and description of an expense in place.
///
/// Returns `None` if no row with that id exists; id, name, and user_id
/// are never touched.
pub async fn update_expense(
    pool: &PgPool,
    id: Uuid,
    amount: f64,
    description: &str,
) -> Result<Option<ExpenseRow>, DbError> {
    let row = sqlx::query_as::<_, ExpenseRow>(
        r#"
        UPDATE expenses
        SET amount = $1, description = $2
        WHERE id = $3
        RETURNING id, name, amount, description, user_id, created_at
        "#,
    )
    .bind(amount)
    .bind(description)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Permanently delete an expense by its primary key.
///
/// Returns the number of rows removed (0 or 1).  A missing id is not an
/// error here — the caller decides what "not affected" means.
pub async fn delete_expense(pool: &PgPool, id: Uuid) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
