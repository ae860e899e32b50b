#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use gestao_api::config::ServerConfig;
use gestao_api::router::build_app_router;
use gestao_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Same builder as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config).expect("test config is valid")
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(&body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(&body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PATCH, uri, Some(&body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw string body, for malformed-JSON cases.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Execute a GraphQL document against `/graphql/` and return the parsed
/// response (`data` and `errors`).
pub async fn graphql(app: Router, query: &str) -> Value {
    graphql_with_variables(app, query, json!({})).await
}

pub async fn graphql_with_variables(app: Router, query: &str, variables: Value) -> Value {
    let response = post_json(
        app,
        "/graphql/",
        json!({ "query": query, "variables": variables }),
    )
    .await;
    assert!(response.status().is_success(), "GraphQL transport failed");
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a cliente via REST and return its id.
pub async fn create_cliente(app: Router, nome: &str, email: &str) -> i64 {
    let response = post_json(
        app,
        "/clientes/",
        json!({ "nome": nome, "email": email, "telefone": "+5511999999999" }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a projeto via REST and return its id.
pub async fn create_projeto(app: Router, cliente_id: i64, nome: &str) -> i64 {
    let response = post_json(
        app,
        "/projetos/",
        json!({ "nome": nome, "descricao": "", "cliente": cliente_id }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create an atividade via REST and return its id.
pub async fn create_atividade(app: Router, projeto_id: i64, descricao: &str) -> i64 {
    let response = post_json(
        app,
        "/atividades/",
        json!({ "projeto": projeto_id, "descricao": descricao, "prazo": "2024-12-31" }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}
