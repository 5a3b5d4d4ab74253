//! Server-rendered shell pages
//!
//! Every browser request builds a fresh [`Shell`] over the request's session
//! snapshot and asks it to open the requested path. The route guard runs each
//! time, so a credential cleared on one request is seen by the next.
//!
//! - `GET <path>` renders the view, or answers `303 See Other` when the shell
//!   settled somewhere else (root, unknown paths, missing credential)
//! - `GET /strategy-management?tab=metrics` selects a tab
//! - `POST /login` signs in with the configured account
//! - `POST /logout` signs out

/// HTML rendering of shell screens.
pub mod render;
/// Cookie session bridge.
pub mod session;

use crate::types::{AppError, LoginRequest, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use toolbox_shell::{Action, Shell, StrategyTab, ViewId, TOOLBOX_PATH};
use tower_sessions::Session as CookieSession;

use self::session::SessionSnapshot;

/// Query parameters understood by the page handlers.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Strategy page tab, `strategies` or `metrics`
    pub tab: Option<String>,
}

/// Render the page for the request path, or redirect to where the shell settled.
pub async fn show(
    method: Method,
    uri: Uri,
    cookie: CookieSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let snapshot = SessionSnapshot::load(&cookie).await;
    let mut shell = Shell::new(snapshot.session());
    let navigation = shell.open(uri.path());

    if navigation.location != uri.path() {
        return Ok(Redirect::to(navigation.location).into_response());
    }

    if shell.current_view() == ViewId::StrategyManagement {
        if let Some(tab) = query.tab.as_deref() {
            match tab.parse::<StrategyTab>() {
                Ok(tab) => {
                    shell.dispatch(Action::SelectTab(tab))?;
                }
                Err(e) => tracing::debug!(error = %e, "Ignoring tab parameter"),
            }
        }
    }

    Ok(Html(render::page(&shell.screen())).into_response())
}

/// Sign in from the login form.
///
/// Success stores the issued token in the browser session and redirects to
/// the toolbox. Bad credentials re-render the login page with the message.
pub async fn login(
    State(state): State<AppState>,
    cookie: CookieSession,
    Form(form): Form<LoginRequest>,
) -> Result<Response> {
    let snapshot = SessionSnapshot::load(&cookie).await;
    let mut shell = Shell::new(snapshot.session());

    match state
        .auth_service
        .authenticate(&form.username, &form.password)
    {
        Ok(token) => {
            let transition = shell.dispatch(Action::SubmitCredential(token.access_token))?;
            snapshot.persist(&cookie).await?;
            Ok(Redirect::to(transition.location().unwrap_or(TOOLBOX_PATH)).into_response())
        }
        Err(AppError::Auth(message)) => {
            shell.dispatch(Action::SignInFailed(message))?;
            Ok((
                StatusCode::UNAUTHORIZED,
                Html(render::page(&shell.screen())),
            )
                .into_response())
        }
        Err(other) => Err(other),
    }
}

/// Sign out and return to the login page.
pub async fn logout(cookie: CookieSession) -> Result<Response> {
    let snapshot = SessionSnapshot::load(&cookie).await;
    let mut shell = Shell::new(snapshot.session());

    let navigation = shell.sign_out();
    snapshot.persist(&cookie).await?;

    Ok(Redirect::to(navigation.location).into_response())
}
