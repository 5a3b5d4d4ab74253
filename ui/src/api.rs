//! API client for the toolbox server

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// Server the browser build talks to
pub const API_BASE: &str = "http://localhost:3000";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Token issued by a successful sign-in
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

/// Sign in and return the issued token.
///
/// The error is a message fit for the login screen.
pub async fn login(base_url: &str, username: &str, password: &str) -> Result<TokenResponse, String> {
    let resp = Request::post(&format!("{}/api/auth/login/json", base_url))
        .json(&LoginRequest { username, password })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    resp.json::<TokenResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
