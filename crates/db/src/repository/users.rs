//! User repository functions.

use chrono::Utc;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{models::UserRow, DbError};

/// Insert a new user and return the created row.
pub async fn insert_user(pool: &PgPool, name: &str) -> Result<UserRow, DbError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, name, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Return all users ordered by creation time (newest first).
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRow>, DbError> {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, created_at FROM users ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Check whether a user with the given id exists.
///
/// Takes any executor so the lookup can run inside the same transaction
/// as a dependent insert.
pub async fn user_exists<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<bool, DbError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
        .bind(id)
        .fetch_one(executor)
        .await?;

    Ok(exists)
}
