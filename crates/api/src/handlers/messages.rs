use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use ledger::Message;

use crate::AppState;

#[derive(serde::Deserialize)]
pub struct CreateMessageDto {
    pub text: String,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Message>> {
    Json(state.resolvers.list_messages().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessageDto>,
) -> (StatusCode, Json<Message>) {
    let message = state.resolvers.add_message(&payload.text).await;
    (StatusCode::CREATED, Json(message))
}
