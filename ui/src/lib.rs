//! Stock Toolbox browser front-end
//!
//! Runs the same shell as the server, with the session kept in
//! `window.localStorage` under `token`. Every browser path goes through the
//! shell, so the route guard runs on each navigation, history moves included.

pub mod api;
pub mod components;
pub mod state;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    path, NavigateOptions,
};

use components::ScreenView;
use state::ShellState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(ShellState::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <ShellOutlet /> }>
                <Route path=path!("/*any") view=ShellOutlet />
            </Routes>
        </Router>
    }
}

/// Opens the browser location in the shell and follows its redirects
#[component]
fn ShellOutlet() -> impl IntoView {
    let state = expect_context::<ShellState>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let path = location.pathname.get();
        let settled = state.open(&path);
        if settled != path {
            tracing::debug!(requested = %path, location = settled, "Redirecting");
            navigate(
                settled,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { <ScreenView /> }
}
