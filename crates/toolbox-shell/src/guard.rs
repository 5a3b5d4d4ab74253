//! Route guard.
//!
//! A guard decision is made fresh on every call. Nothing is cached between
//! resolutions, so a sign-out is observed by the very next protected request.

use crate::route::{Access, LOGIN_PATH};
use crate::session::Session;

/// Outcome of checking a session against a route's access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Decide whether `session` may render a route with `access`.
pub fn decide(session: &Session, access: Access) -> Decision {
    match access {
        Access::Public => Decision::Allow,
        Access::Protected if session.is_authenticated() => Decision::Allow,
        Access::Protected => Decision::Deny,
    }
}

/// Result of [`authorize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    /// The credential was present; holds the rendered view.
    Granted(V),
    /// The credential was absent; redirect to this path.
    Redirect(&'static str),
}

impl<V> Guarded<V> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Guarded::Granted(_))
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Guarded<U> {
        match self {
            Guarded::Granted(v) => Guarded::Granted(f(v)),
            Guarded::Redirect(to) => Guarded::Redirect(to),
        }
    }
}

/// Wrap a protected render.
///
/// `render` is only invoked when the session holds a credential; its output is
/// returned unchanged. Otherwise the caller is sent to the login path. The
/// credential is read once and never modified.
pub fn authorize<V>(session: &Session, render: impl FnOnce() -> V) -> Guarded<V> {
    match decide(session, Access::Protected) {
        Decision::Allow => Guarded::Granted(render()),
        Decision::Deny => Guarded::Redirect(LOGIN_PATH),
    }
}
