//! Server-rendered shell: guard redirects and the sign-in/sign-out flow.

mod common;

use axum::http::{header, StatusCode};
use axum_test::{TestResponse, TestServer};
use common::{create_test_app, PASSWORD, USERNAME};
use rstest::rstest;
use toolbox::types::LoginRequest;

fn create_test_server() -> TestServer {
    let mut server = TestServer::new(create_test_app()).expect("Failed to create test server");
    server.save_cookies();
    server
}

fn assert_redirect(response: &TestResponse, to: &str) {
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some(to)
    );
}

async fn sign_in(server: &TestServer) -> TestResponse {
    server
        .post("/login")
        .form(&LoginRequest {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
}

// =============================================================================
// Guard
// =============================================================================

#[rstest]
#[case("/toolbox")]
#[case("/stock-selector")]
#[case("/batch-backtest")]
#[case("/single-backtest")]
#[case("/strategy-management")]
#[tokio::test]
async fn test_protected_page_redirects_without_session(#[case] path: &str) {
    let server = create_test_server();

    let response = server.get(path).await;

    assert_redirect(&response, "/login");
}

#[rstest]
#[case("/toolbox", "toolbox")]
#[case("/stock-selector", "stock-selector")]
#[case("/batch-backtest", "batch-backtest")]
#[case("/single-backtest", "single-backtest")]
#[case("/strategy-management", "strategy-management")]
#[tokio::test]
async fn test_protected_page_renders_after_sign_in(#[case] path: &str, #[case] view: &str) {
    let server = create_test_server();
    sign_in(&server).await;

    let response = server.get(path).await;

    response.assert_status_ok();
    response.assert_text_contains(format!("data-view=\"{}\"", view));
}

#[rstest]
#[case(false)]
#[case(true)]
#[tokio::test]
async fn test_root_redirects_to_login(#[case] signed_in: bool) {
    let server = create_test_server();
    if signed_in {
        sign_in(&server).await;
    }

    assert_redirect(&server.get("/").await, "/login");
}

#[tokio::test]
async fn test_unknown_path_redirects_to_login() {
    let server = create_test_server();
    sign_in(&server).await;

    assert_redirect(&server.get("/no-such-page").await, "/login");
}

#[tokio::test]
async fn test_login_page_renders() {
    let server = create_test_server();

    let response = server.get("/login").await;

    response.assert_status_ok();
    response.assert_text_contains("data-view=\"login\"");
    response.assert_text_contains("action=\"/login\"");
}

// =============================================================================
// Sign in / sign out
// =============================================================================

#[tokio::test]
async fn test_sign_in_redirects_to_toolbox() {
    let server = create_test_server();

    let response = sign_in(&server).await;

    assert_redirect(&response, "/toolbox");
    let toolbox = server.get("/toolbox").await;
    toolbox.assert_status_ok();
    toolbox.assert_text_contains("欢迎使用股票交易系统");
    toolbox.assert_text_contains("href=\"/stock-selector\"");
}

#[tokio::test]
async fn test_bad_credentials_rerender_login() {
    let server = create_test_server();

    let response = server
        .post("/login")
        .form(&LoginRequest {
            username: USERNAME.to_string(),
            password: "wrong".to_string(),
        })
        .await;

    response.assert_status_unauthorized();
    response.assert_text_contains("data-view=\"login\"");
    response.assert_text_contains("Incorrect username or password");
    assert_redirect(&server.get("/toolbox").await, "/login");
}

#[tokio::test]
async fn test_sign_out_clears_session() {
    let server = create_test_server();
    sign_in(&server).await;
    server.get("/toolbox").await.assert_status_ok();

    let response = server.post("/logout").await;

    assert_redirect(&response, "/login");
    assert_redirect(&server.get("/toolbox").await, "/login");
    assert_redirect(&server.get("/stock-selector").await, "/login");
}

#[tokio::test]
async fn test_login_does_not_return_to_requested_page() {
    let server = create_test_server();
    assert_redirect(&server.get("/batch-backtest").await, "/login");

    assert_redirect(&sign_in(&server).await, "/toolbox");
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let server = create_test_server();
    sign_in(&server).await;

    let other = create_test_server();
    assert_redirect(&other.get("/toolbox").await, "/login");
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_tool_page_links_back_to_toolbox() {
    let server = create_test_server();
    sign_in(&server).await;

    let response = server.get("/batch-backtest").await;

    response.assert_status_ok();
    response.assert_text_contains("批量回测功能开发中...");
    response.assert_text_contains("href=\"/toolbox\"");
}

#[tokio::test]
async fn test_strategy_tab_query() {
    let server = create_test_server();
    sign_in(&server).await;

    let strategies = server.get("/strategy-management").await;
    strategies.assert_status_ok();
    strategies.assert_text_contains("双线策略");

    let metrics = server
        .get("/strategy-management")
        .add_query_param("tab", "metrics")
        .await;
    metrics.assert_status_ok();
    metrics.assert_text_contains("MACD指标");
    assert!(!metrics.text().contains("双线策略"));
}

#[tokio::test]
async fn test_unknown_tab_falls_back_to_strategies() {
    let server = create_test_server();
    sign_in(&server).await;

    let response = server
        .get("/strategy-management")
        .add_query_param("tab", "bogus")
        .await;

    response.assert_status_ok();
    response.assert_text_contains("双线策略");
}
