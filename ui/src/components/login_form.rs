//! Sign-in form

use crate::api::{self, API_BASE};
use crate::state::ShellState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use toolbox_shell::Action;

/// Posts the credentials to the sign-in API and hands the outcome to the shell
#[component]
pub fn LoginForm(title: String, error: Option<String>) -> impl IntoView {
    let state = expect_context::<ShellState>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let navigate = navigate.clone();

        spawn_local(async move {
            is_loading.set(true);
            let result = api::login(API_BASE, &username_val, &password_val).await;
            is_loading.set(false);

            let action = match result {
                Ok(token) => Action::SubmitCredential(token.access_token),
                Err(message) => Action::SignInFailed(message),
            };
            state.act(action, &navigate);
        });
    };

    view! {
        <form class="login" on:submit=on_submit>
            <h2>{title.clone()}</h2>
            <label for="username">"用户名"</label>
            <input
                id="username"
                type="text"
                required=true
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <label for="password">"密码"</label>
            <input
                id="password"
                type="password"
                required=true
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn-primary" type="submit" disabled=move || is_loading.get()>
                {title}
            </button>
            {error.map(|message| view! { <div class="error" role="alert">{message}</div> })}
        </form>
    }
}
