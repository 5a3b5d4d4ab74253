use crate::{
    types::{LoginRequest, Result, TokenResponse},
    AppState,
};
use axum::{extract::State, Form, Json};

/// Login with a form body (`username`, `password`)
pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    issue(&state, &payload).map(Json)
}

/// Login with a JSON body
pub async fn login_json(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    issue(&state, &payload).map(Json)
}

fn issue(state: &AppState, payload: &LoginRequest) -> Result<TokenResponse> {
    state
        .auth_service
        .authenticate(&payload.username, &payload.password)
}
