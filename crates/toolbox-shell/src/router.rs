//! Path resolution and navigation history.

use crate::guard::{self, Guarded};
use crate::route::{self, Access, Route, ViewId, LOGIN_PATH, ROOT_PATH};
use crate::session::Session;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

// Redirect targets are public, so one hop always settles; the bound only
// guards against a miswired table.
const MAX_REDIRECTS: usize = 4;

/// A request to show the view at `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub path: String,
}

impl NavigationIntent {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Intent targeting `view`'s route.
    pub fn to(view: ViewId) -> Self {
        Self::new(view.path())
    }
}

/// Why a request did not render the route it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectReason {
    /// The root path, which always forwards to login.
    Root,
    /// A protected route requested without a credential.
    Unauthenticated,
    /// No route matched.
    NotFound,
}

impl fmt::Display for RedirectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RedirectReason::Root => "root",
            RedirectReason::Unauthenticated => "unauthenticated",
            RedirectReason::NotFound => "not found",
        };
        f.write_str(s)
    }
}

/// Single-step result of matching a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(&'static Route),
    Redirect {
        to: &'static str,
        reason: RedirectReason,
    },
}

/// Settled result of a navigation: what the user ends up looking at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Path that was asked for.
    pub requested: String,
    /// Path actually shown after redirects.
    pub location: &'static str,
    pub view: ViewId,
    /// First redirect taken, if any.
    pub redirect: Option<RedirectReason>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        self.redirect.is_some()
    }
}

/// Back/forward stack of settled locations.
#[derive(Debug, Default, Clone)]
struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    fn push(&mut self, location: &str) {
        if self.current() == Some(location) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(location.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    fn back(&mut self) -> Option<String> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.current().map(str::to_string)
    }

    fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.current().map(str::to_string)
    }

    fn replace_current(&mut self, location: &str) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = location.to_string(),
            None => self.push(location),
        }
    }
}

/// Maps paths to views, running the guard on every protected resolution.
#[derive(Debug, Clone)]
pub struct Router {
    session: Session,
    history: History,
}

impl Router {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            history: History::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The route table this router serves.
    pub fn routes(&self) -> &'static [Route] {
        &route::ROUTES
    }

    /// Current settled location, if anything has been navigated to yet.
    pub fn location(&self) -> Option<&str> {
        self.history.current()
    }

    /// Match `path` one step, consulting the guard for protected routes.
    pub fn resolve(&self, path: &str) -> Resolution {
        if path == ROOT_PATH {
            return Resolution::Redirect {
                to: LOGIN_PATH,
                reason: RedirectReason::Root,
            };
        }

        let Some(route) = route::lookup(path) else {
            return Resolution::Redirect {
                to: LOGIN_PATH,
                reason: RedirectReason::NotFound,
            };
        };

        match route.access {
            Access::Public => Resolution::Render(route),
            Access::Protected => match guard::authorize(&self.session, || route) {
                Guarded::Granted(route) => Resolution::Render(route),
                Guarded::Redirect(to) => Resolution::Redirect {
                    to,
                    reason: RedirectReason::Unauthenticated,
                },
            },
        }
    }

    /// Follow redirects from `path` to the route that finally renders.
    pub fn settle(&self, path: &str) -> Navigation {
        let mut target = path;
        let mut first_reason = None;

        for _ in 0..MAX_REDIRECTS {
            match self.resolve(target) {
                Resolution::Render(route) => {
                    return Navigation {
                        requested: path.to_string(),
                        location: route.path,
                        view: route.view,
                        redirect: first_reason,
                    };
                }
                Resolution::Redirect { to, reason } => {
                    debug!(from = target, to, %reason, "Redirecting");
                    first_reason.get_or_insert(reason);
                    target = to;
                }
            }
        }

        let login = ViewId::Login.route();
        Navigation {
            requested: path.to_string(),
            location: login.path,
            view: login.view,
            redirect: first_reason,
        }
    }

    /// Resolve `intent` and record the settled location in history.
    pub fn navigate(&mut self, intent: NavigationIntent) -> Navigation {
        let navigation = self.settle(&intent.path);
        self.history.push(navigation.location);
        info!(
            requested = %navigation.requested,
            location = navigation.location,
            redirected = navigation.was_redirected(),
            "Navigated"
        );
        navigation
    }

    /// Step back in history. The guard runs again on the revisited path.
    pub fn back(&mut self) -> Option<Navigation> {
        let path = self.history.back()?;
        Some(self.revisit(&path))
    }

    /// Step forward in history. The guard runs again on the revisited path.
    pub fn forward(&mut self) -> Option<Navigation> {
        let path = self.history.forward()?;
        Some(self.revisit(&path))
    }

    fn revisit(&mut self, path: &str) -> Navigation {
        let navigation = self.settle(path);
        if navigation.location != path {
            self.history.replace_current(navigation.location);
        }
        navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Router {
        let session = Session::in_memory();
        session.set_credential("t1").unwrap();
        Router::new(session)
    }

    #[test]
    fn test_root_redirects_regardless_of_session() {
        for router in [Router::new(Session::in_memory()), signed_in()] {
            assert_eq!(
                router.resolve("/"),
                Resolution::Redirect {
                    to: LOGIN_PATH,
                    reason: RedirectReason::Root
                }
            );
        }
    }

    #[test]
    fn test_unknown_path_falls_through_to_login() {
        let nav = signed_in().settle("/reports");
        assert_eq!(nav.view, ViewId::Login);
        assert_eq!(nav.redirect, Some(RedirectReason::NotFound));
    }

    #[test]
    fn test_protected_denied_without_credential() {
        let router = Router::new(Session::in_memory());
        let nav = router.settle("/batch-backtest");
        assert_eq!(nav.location, LOGIN_PATH);
        assert_eq!(nav.redirect, Some(RedirectReason::Unauthenticated));
    }

    #[test]
    fn test_login_renders_even_when_signed_in() {
        let nav = signed_in().settle(LOGIN_PATH);
        assert_eq!(nav.view, ViewId::Login);
        assert!(!nav.was_redirected());
    }

    #[test]
    fn test_navigate_records_settled_location() {
        let mut router = Router::new(Session::in_memory());
        assert!(router.location().is_none());
        router.navigate(NavigationIntent::new("/toolbox"));
        assert_eq!(router.location(), Some(LOGIN_PATH));
    }

    #[test]
    fn test_back_and_forward() {
        let mut router = signed_in();
        router.navigate(NavigationIntent::to(ViewId::Toolbox));
        router.navigate(NavigationIntent::to(ViewId::StockSelector));

        assert_eq!(router.back().unwrap().view, ViewId::Toolbox);
        assert!(router.back().is_none());
        assert_eq!(router.forward().unwrap().view, ViewId::StockSelector);
        assert!(router.forward().is_none());
    }

    #[test]
    fn test_back_after_sign_out_is_guarded() {
        let mut router = signed_in();
        router.navigate(NavigationIntent::to(ViewId::Toolbox));
        router.navigate(NavigationIntent::to(ViewId::SingleBacktest));
        router.session().clear_credential().unwrap();

        let nav = router.back().unwrap();
        assert_eq!(nav.view, ViewId::Login);
        assert_eq!(router.location(), Some(LOGIN_PATH));
    }

    #[test]
    fn test_new_navigation_truncates_forward_history() {
        let mut router = signed_in();
        router.navigate(NavigationIntent::to(ViewId::Toolbox));
        router.navigate(NavigationIntent::to(ViewId::StockSelector));
        router.back();
        router.navigate(NavigationIntent::to(ViewId::BatchBacktest));
        assert!(router.forward().is_none());
    }
}
