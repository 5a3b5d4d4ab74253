//! JSON API integration tests.

mod common;

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use common::{create_test_app, PASSWORD, USERNAME};
use serde_json::json;
use std::sync::Arc;
use toolbox::types::{LoginRequest, TokenResponse};
use toolbox::{create_app, AppState, AuthService, ConfigManager};

fn create_test_server() -> TestServer {
    TestServer::new(create_test_app()).expect("Failed to create test server")
}

// =============================================================================
// Status endpoints
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_api_root() {
    let server = create_test_server();

    let response = server.get("/api").await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Stock Toolbox API is running"}));
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_json_success() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/login/json")
        .json(&json!({"username": USERNAME, "password": PASSWORD}))
        .await;

    response.assert_status_ok();
    let token: TokenResponse = response.json();
    assert_eq!(token.token_type, "bearer");
    assert!(!token.access_token.is_empty());
}

#[tokio::test]
async fn test_login_form_success() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/login")
        .form(&LoginRequest {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        })
        .await;

    response.assert_status_ok();
    let token: TokenResponse = response.json();
    assert_eq!(token.token_type, "bearer");
}

#[tokio::test]
async fn test_each_login_issues_a_new_token() {
    let server = create_test_server();
    let body = json!({"username": USERNAME, "password": PASSWORD});

    let first: TokenResponse = server.post("/api/auth/login/json").json(&body).await.json();
    let second: TokenResponse = server.post("/api/auth/login/json").json(&body).await.json();

    assert_ne!(first.access_token, second.access_token);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/login/json")
        .json(&json!({"username": USERNAME, "password": "wrong"}))
        .await;

    response.assert_status_unauthorized();
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE),
        Some(&HeaderValue::from_static("Bearer"))
    );
    response.assert_json(&json!({"error": "Incorrect username or password"}));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/login")
        .form(&LoginRequest {
            username: "nobody".to_string(),
            password: PASSWORD.to_string(),
        })
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_login_json_missing_field() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/login/json")
        .json(&json!({"username": USERNAME}))
        .await;

    assert!(response.status_code().is_client_error());
}

// =============================================================================
// CORS
// =============================================================================

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let server = create_test_server();

    let response = server
        .get("/health")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:5173"))
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some(&HeaderValue::from_static("true"))
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let server = create_test_server();

    let response = server
        .get("/health")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://evil.example"),
        )
        .await;

    response.assert_status_ok();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_follows_reloaded_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("toolbox.toml");
    std::fs::write(&path, "[cors]\nallowed_origins = [\"http://a.example\"]\n").unwrap();

    let manager = Arc::new(ConfigManager::new(&path).unwrap());
    let state = AppState {
        config_manager: manager.clone(),
        auth_service: Arc::new(AuthService::new(USERNAME, PASSWORD).unwrap()),
    };
    let server = TestServer::new(create_app(state)).unwrap();
    let origin = HeaderValue::from_static("http://b.example");

    let before = server
        .get("/health")
        .add_header(header::ORIGIN, origin.clone())
        .await;
    assert!(before
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());

    std::fs::write(&path, "[cors]\nallowed_origins = [\"http://b.example\"]\n").unwrap();
    manager.reload().unwrap();

    let after = server
        .get("/health")
        .add_header(header::ORIGIN, origin.clone())
        .await;
    assert_eq!(
        after.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&origin)
    );
}
