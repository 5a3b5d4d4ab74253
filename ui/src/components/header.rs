//! Header component

use super::ControlButton;
use crate::state::ShellState;
use leptos::prelude::*;

/// Title bar with the current screen's header controls
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<ShellState>();

    view! {
        <header class="shell-header">
            <h1>{move || state.screen.with(|s| s.title.clone())}</h1>
            <nav>
                {move || {
                    state
                        .screen
                        .with(|s| s.header.clone())
                        .into_iter()
                        .map(|control| view! { <ControlButton control=control /> })
                        .collect_view()
                }}
            </nav>
        </header>
    }
}
