use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// JSON API, nested under `/api`.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(crate::api::handlers::health::root))
        .route("/auth/login", post(crate::api::handlers::auth::login))
        .route(
            "/auth/login/json",
            post(crate::api::handlers::auth::login_json),
        )
}
