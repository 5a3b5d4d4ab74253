//! Event loop glue between views, router and session.

use crate::error::Result;
use crate::route::{ViewId, LOGIN_PATH, ROOT_PATH, TOOLBOX_PATH};
use crate::router::{Navigation, NavigationIntent, Router};
use crate::screen::Screen;
use crate::session::Session;
use crate::view::{self, Action, Intent, View};
use tracing::{debug, info, warn};

/// Effect of dispatching an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Same view, possibly with new local state.
    Stay,
    Moved(Navigation),
}

impl Transition {
    /// Location to show after the transition, if it changed.
    pub fn location(&self) -> Option<&'static str> {
        match self {
            Transition::Stay => None,
            Transition::Moved(nav) => Some(nav.location),
        }
    }
}

/// One user's running shell: the current view plus the router that produced it.
///
/// A new shell starts at the root path and is therefore showing the login view.
pub struct Shell {
    router: Router,
    current: Box<dyn View>,
}

impl Shell {
    pub fn new(session: Session) -> Self {
        let mut router = Router::new(session);
        let navigation = router.navigate(NavigationIntent::new(ROOT_PATH));
        Self {
            current: view::instantiate(navigation.view),
            router,
        }
    }

    pub fn session(&self) -> &Session {
        self.router.session()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current_view(&self) -> ViewId {
        self.current.id()
    }

    /// Location currently shown.
    pub fn location(&self) -> &str {
        self.router.location().unwrap_or(LOGIN_PATH)
    }

    pub fn screen(&self) -> Screen {
        self.current.render()
    }

    /// Navigate to `path`.
    ///
    /// The guard always runs. When the settled view is the one already shown,
    /// its instance and local state are kept.
    pub fn open(&mut self, path: &str) -> Navigation {
        let navigation = self.router.navigate(NavigationIntent::new(path));
        self.show(&navigation);
        navigation
    }

    /// Step back through history, re-running the guard.
    pub fn back(&mut self) -> Option<Navigation> {
        let navigation = self.router.back()?;
        self.show(&navigation);
        Some(navigation)
    }

    /// Step forward through history, re-running the guard.
    pub fn forward(&mut self) -> Option<Navigation> {
        let navigation = self.router.forward()?;
        self.show(&navigation);
        Some(navigation)
    }

    /// Feed a user action to the current view and apply its intent.
    pub fn dispatch(&mut self, action: Action) -> Result<Transition> {
        let view = self.current.id();
        debug!(%view, action = action.name(), "Dispatching action");

        match self.current.handle(action)? {
            None => Ok(Transition::Stay),
            Some(Intent::Navigate(intent)) => Ok(Transition::Moved(self.open(&intent.path))),
            Some(Intent::SignIn(token)) => self.sign_in(token).map(Transition::Moved),
            Some(Intent::SignOut) => Ok(Transition::Moved(self.sign_out())),
        }
    }

    /// Store `token` and go to the toolbox.
    pub fn sign_in(&mut self, token: String) -> Result<Navigation> {
        self.session().set_credential(token)?;
        info!("Signed in");
        Ok(self.open(TOOLBOX_PATH))
    }

    /// Drop the credential and go to login.
    ///
    /// Always ends on the login view, even when the store cannot be cleared.
    pub fn sign_out(&mut self) -> Navigation {
        match self.session().clear_credential() {
            Ok(()) => info!("Signed out"),
            Err(e) => warn!(error = %e, "Credential could not be cleared on sign-out"),
        }
        self.open(LOGIN_PATH)
    }

    fn show(&mut self, navigation: &Navigation) {
        if self.current.id() != navigation.view {
            self.current = view::instantiate(navigation.view);
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Session::in_memory())
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("location", &self.location())
            .field("view", &self.current.id())
            .finish()
    }
}
