//! Router tests that never touch Postgres.
//!
//! The pool is created lazily and the exercised endpoints are backed by the
//! in-memory message store only, so no database is required.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_app() -> Router {
    let pool = db::pool::create_lazy_pool("postgres://postgres@localhost/expense_ledger_test")
        .expect("lazy pool");
    api::router(pool)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn add_message_returns_created_with_id() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/api/v1/messages", r#"{"text":"hello"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let message = body_json(response).await;
    assert_eq!(message["text"], "hello");
    assert!(message["id"].is_string());
}

#[tokio::test]
async fn messages_come_back_in_insertion_order() {
    // Clones of the router share the same state.
    let app = test_app();

    for text in ["one", "two", "three"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/messages",
                &format!(r#"{{"text":"{text}"}}"#),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get("/api/v1/messages"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(response).await;
    let texts: Vec<&str> = list
        .as_array()
        .expect("array")
        .iter()
        .map(|m| m["text"].as_str().expect("text"))
        .collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/v1/nonsense"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_message_payload_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/api/v1/messages", r#"{"nope":true}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
