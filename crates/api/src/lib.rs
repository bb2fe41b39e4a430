//! `api` crate — HTTP/JSON transport over the ledger resolvers.
//!
//! Exposes:
//!   GET    /api/v1/users
//!   POST   /api/v1/users
//!   GET    /api/v1/users/:id/expenses
//!   GET    /api/v1/expenses
//!   POST   /api/v1/expenses
//!   GET    /api/v1/expenses/total
//!   PATCH  /api/v1/expenses/:id
//!   DELETE /api/v1/expenses/:id
//!   GET    /api/v1/messages
//!   POST   /api/v1/messages
//!
//! The transport only deserializes arguments and maps errors to responses;
//! all decision logic lives in the `ledger` crate.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use db::DbPool;
use ledger::Resolvers;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub resolvers: Arc<Resolvers>,
}

/// Build the application router with CORS and request tracing.
pub fn router(pool: DbPool) -> Router {
    let state = AppState {
        resolvers: Arc::new(Resolvers::new(pool)),
    };

    Router::new()
        .route(
            "/api/v1/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/api/v1/users/:id/expenses",
            get(handlers::expenses::list_by_user),
        )
        .route(
            "/api/v1/expenses",
            get(handlers::expenses::list).post(handlers::expenses::create),
        )
        .route("/api/v1/expenses/total", get(handlers::expenses::total))
        .route(
            "/api/v1/expenses/:id",
            axum::routing::patch(handlers::expenses::update).delete(handlers::expenses::delete),
        )
        .route(
            "/api/v1/messages",
            get(handlers::messages::list).post(handlers::messages::create),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the task is cancelled or the listener fails.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API server listening on {bind}");
    axum::serve(listener, router(pool)).await
}
