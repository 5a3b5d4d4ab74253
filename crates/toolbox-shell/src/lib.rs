//! # toolbox-shell
//!
//! Session-gated routing and view state for the stock toolbox front-end.
//!
//! The crate has no opinion on how screens are drawn. It decides *which* view a
//! path shows for the current session, and what happens when the user acts on
//! it. Front-ends (the axum server, the Leptos browser build) draw the resulting
//! [`Screen`] and feed [`Action`]s back in.
//!
//! ## Quick Start
//!
//! ```rust
//! use toolbox_shell::{Action, Session, Shell, ViewId};
//!
//! let mut shell = Shell::new(Session::in_memory());
//!
//! // Nobody is signed in, so protected paths land on the login view.
//! assert_eq!(shell.open("/toolbox").view, ViewId::Login);
//!
//! // A credential from the authentication endpoint opens the toolbox.
//! shell.dispatch(Action::SubmitCredential("t1".into())).unwrap();
//! assert_eq!(shell.current_view(), ViewId::Toolbox);
//!
//! // Signing out is observed by the very next navigation.
//! shell.dispatch(Action::SignOut).unwrap();
//! assert_eq!(shell.open("/stock-selector").view, ViewId::Login);
//! ```
//!
//! ## Layout
//!
//! ```text
//!   Action ──► View ──► Intent ──► Shell ──┬──► Session (KeyValueStore)
//!                                          └──► Router ──► guard ──► View
//! ```

#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod guard;
pub mod route;
pub mod router;
pub mod screen;
pub mod session;
pub mod shell;
pub mod storage;
pub mod view;

// Re-exports for convenience
pub use error::{Error, Result};
pub use guard::{authorize, Decision, Guarded};
pub use route::{Access, Route, ViewId, LOGIN_PATH, ROOT_PATH, ROUTES, TOOLBOX_PATH};
pub use router::{Navigation, NavigationIntent, RedirectReason, Resolution, Router};
pub use screen::Screen;
pub use session::{Credential, Session, TOKEN_KEY};
pub use shell::{Shell, Transition};
pub use storage::{FileStore, KeyValueStore, MemoryStore, UnavailableStore};
pub use view::{Action, Intent, StrategyTab, View};
