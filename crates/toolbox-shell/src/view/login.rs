use super::{unsupported, Action, Intent, View};
use crate::error::Result;
use crate::route::ViewId;
use crate::screen::{Block, Screen};

/// Sign-in screen.
#[derive(Debug, Default, Clone)]
pub struct LoginView {
    error: Option<String>,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message from the last failed sign-in.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl View for LoginView {
    fn id(&self) -> ViewId {
        ViewId::Login
    }

    fn render(&self) -> Screen {
        Screen::new(ViewId::Login, "股票交易系统").with_block(Block::LoginForm {
            title: "登录".to_string(),
            error: self.error.clone(),
        })
    }

    fn handle(&mut self, action: Action) -> Result<Option<Intent>> {
        match action {
            Action::SubmitCredential(token) => {
                self.error = None;
                Ok(Some(Intent::SignIn(token)))
            }
            Action::SignInFailed(message) => {
                self.error = Some(message);
                Ok(None)
            }
            other => Err(unsupported(ViewId::Login, &other)),
        }
    }
}
