use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tower::ServiceExt;

use kepegawaian::{
    config::config::Config, core::state::AppState, database::connect::run_migrations,
    routes::create_routers,
};

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        port: 0,
        server_ip: "127.0.0.1".to_string(),
        max_connections: 1,
        min_connections: 1,
        query_timeout_secs: 5,
    }
}

/// Build the real router over an in-memory SQLite store with the real
/// migrations applied, so tests exercise the same routing, binding and
/// envelope code production uses. The pool is capped at one connection so
/// every request sees the same in-memory database.
pub async fn build_test_app() -> Router {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1);

    let db = Database::connect(opt).await.expect("connect to sqlite");
    run_migrations(&db).await.expect("run migrations");

    let state = AppState {
        database: db,
        config: test_config(),
    };

    create_routers(Arc::new(state))
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
