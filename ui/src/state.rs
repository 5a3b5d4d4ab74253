//! Shell state for the browser

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use std::sync::Arc;
use toolbox_shell::{Action, Error, KeyValueStore, Screen, Session, Shell, ViewId};
use wasm_bindgen::JsValue;

/// `window.localStorage` as the session store.
///
/// A browser without local storage (or with it blocked) fails every
/// operation, which the session treats as signed out.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> toolbox_shell::Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| Error::Storage("localStorage is not available".to_string()))
    }
}

fn js_error(err: JsValue) -> Error {
    Error::Storage(format!("{:?}", err))
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> toolbox_shell::Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> toolbox_shell::Result<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> toolbox_shell::Result<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

/// The running shell plus the screen it currently shows
#[derive(Clone, Copy)]
pub struct ShellState {
    shell: StoredValue<Shell>,
    /// Screen of the current view
    pub screen: RwSignal<Screen>,
}

impl ShellState {
    pub fn new() -> Self {
        let shell = Shell::new(Session::new(Arc::new(BrowserStore)));
        let screen = shell.screen();
        Self {
            shell: StoredValue::new(shell),
            screen: RwSignal::new(screen),
        }
    }

    /// Open `path` and return where the shell settled.
    pub fn open(&self, path: &str) -> &'static str {
        let opened = self.shell.try_update_value(|shell| {
            let navigation = shell.open(path);
            (navigation.location, shell.screen())
        });

        match opened {
            Some((location, screen)) => {
                self.screen.set(screen);
                location
            }
            None => toolbox_shell::LOGIN_PATH,
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.shell
            .try_with_value(|shell| shell.current_view())
            .unwrap_or(ViewId::Login)
    }

    /// Feed `action` to the current view; returns the new location if it moved.
    pub fn dispatch(&self, action: Action) -> toolbox_shell::Result<Option<&'static str>> {
        let outcome = self.shell.try_update_value(|shell| {
            let transition = shell.dispatch(action);
            (transition, shell.screen())
        });

        let Some((transition, screen)) = outcome else {
            return Ok(None);
        };
        self.screen.set(screen);
        Ok(transition?.location())
    }

    /// Dispatch and follow any resulting navigation.
    ///
    /// Failures are shown on the login screen when it is current, logged otherwise.
    pub fn act(&self, action: Action, navigate: &impl Fn(&str, NavigateOptions)) {
        match self.dispatch(action) {
            Ok(Some(location)) => navigate(location, NavigateOptions::default()),
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, "Action failed");
                if self.current_view() == ViewId::Login {
                    let _ = self.dispatch(Action::SignInFailed(e.to_string()));
                }
            }
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

