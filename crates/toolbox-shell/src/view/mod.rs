//! The shell's views.
//!
//! Each view renders a [`Screen`] and turns user [`Action`]s into an optional
//! [`Intent`]. Views never touch the session or the router themselves; the
//! [`Shell`](crate::Shell) applies intents.

mod login;
mod placeholder;
mod strategy;
mod toolbox;

pub use login::LoginView;
pub use placeholder::PlaceholderView;
pub use strategy::{StrategyManagementView, StrategyTab};
pub use toolbox::ToolboxView;

use crate::error::{Error, Result};
use crate::route::ViewId;
use crate::router::NavigationIntent;
use crate::screen::Screen;
use serde::Serialize;

/// Something the user did on a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Action {
    /// A credential was obtained from the authentication endpoint.
    SubmitCredential(String),
    /// The authentication endpoint refused the sign-in.
    SignInFailed(String),
    /// Go to another view.
    Open(ViewId),
    SignOut,
    SelectTab(StrategyTab),
}

impl Action {
    /// Short name for logs and errors. Never includes the credential.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SubmitCredential(_) => "submit-credential",
            Action::SignInFailed(_) => "sign-in-failed",
            Action::Open(_) => "open",
            Action::SignOut => "sign-out",
            Action::SelectTab(_) => "select-tab",
        }
    }
}

/// What a view asks the shell to do in response to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Navigate(NavigationIntent),
    /// Store the credential, then go to the toolbox.
    SignIn(String),
    /// Drop the credential, then go to login.
    SignOut,
}

/// A screen the shell can show.
pub trait View: Send + Sync {
    fn id(&self) -> ViewId;

    fn render(&self) -> Screen;

    /// React to `action`. Local state (such as the selected tab) may change;
    /// anything affecting the session or location comes back as an [`Intent`].
    fn handle(&mut self, action: Action) -> Result<Option<Intent>>;
}

/// Fresh instance of the view for `id`.
pub fn instantiate(id: ViewId) -> Box<dyn View> {
    match id {
        ViewId::Login => Box::new(LoginView::new()),
        ViewId::Toolbox => Box::new(ToolboxView),
        ViewId::StockSelector | ViewId::BatchBacktest | ViewId::SingleBacktest => {
            Box::new(PlaceholderView::new(id))
        }
        ViewId::StrategyManagement => Box::new(StrategyManagementView::new()),
    }
}

pub(crate) fn unsupported(view: ViewId, action: &Action) -> Error {
    Error::UnsupportedAction {
        view,
        action: action.name(),
    }
}
