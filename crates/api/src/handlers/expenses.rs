use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use ledger::{Expense, NewExpense};

use crate::{ApiError, AppState};

#[derive(serde::Deserialize)]
pub struct UpdateExpenseDto {
    pub amount: f64,
    pub description: String,
}

#[derive(serde::Serialize)]
pub struct TotalResponse {
    pub total: f64,
}

#[derive(serde::Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.resolvers.list_expenses().await?;
    Ok(Json(expenses))
}

pub async fn list_by_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.resolvers.list_expenses_by_user(user_id).await?;
    Ok(Json(expenses))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = state.resolvers.create_expense(payload).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

pub async fn total(State(state): State<AppState>) -> Result<Json<TotalResponse>, ApiError> {
    let total = state.resolvers.total_expense().await?;
    Ok(Json(TotalResponse { total }))
}

pub async fn update(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateExpenseDto>,
) -> Result<Json<Expense>, ApiError> {
    let expense = state
        .resolvers
        .update_expense(id, payload.amount, &payload.description)
        .await?;
    Ok(Json(expense))
}

/// Deleting a missing id is a `deleted: false` result, not an error.
pub async fn delete(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.resolvers.delete_expense(id).await?;
    Ok(Json(DeleteResponse { deleted }))
}
