use crate::state::ShellState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use toolbox_shell::screen::Control;

/// A screen control. Controls without an action render but do nothing.
#[component]
pub fn ControlButton(control: Control) -> impl IntoView {
    let state = expect_context::<ShellState>();
    let navigate = use_navigate();
    let class = format!("btn btn-{}", control.emphasis.as_str());
    let action = control.action;

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| {
                if let Some(action) = action.clone() {
                    state.act(action, &navigate);
                }
            }
        >
            {control.label}
        </button>
    }
}
