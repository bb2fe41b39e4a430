use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use ledger::User;

use crate::{ApiError, AppState};

#[derive(serde::Deserialize)]
pub struct CreateUserDto {
    pub name: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.resolvers.list_users().await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.resolvers.create_user(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
