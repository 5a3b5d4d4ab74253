use super::{CardView, ControlButton, Header, LoginForm};
use crate::state::ShellState;
use leptos::prelude::*;
use toolbox_shell::screen::{Block, Control, Emphasis};

/// The current screen: header bar plus its blocks
#[component]
pub fn ScreenView() -> impl IntoView {
    let state = expect_context::<ShellState>();

    view! {
        <Header />
        <main class="shell-main" data-view=move || state.screen.with(|s| s.view.as_str())>
            {move || {
                state
                    .screen
                    .with(|s| s.blocks.clone())
                    .into_iter()
                    .map(block_view)
                    .collect_view()
            }}
        </main>
    }
}

fn block_view(block: Block) -> AnyView {
    match block {
        Block::Heading { text } => view! { <h2>{text}</h2> }.into_any(),
        Block::LoginForm { title, error } => {
            view! { <LoginForm title=title error=error /> }.into_any()
        }
        Block::Placeholder {
            title,
            subtitle,
            controls,
        } => view! {
            <section class="placeholder">
                <h2>{title}</h2>
                <p>{subtitle}</p>
                {controls
                    .into_iter()
                    .map(|control| view! { <ControlButton control=control /> })
                    .collect_view()}
            </section>
        }
        .into_any(),
        Block::Tabs { tabs, active } => view! {
            <nav class="tabs">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let emphasis = if tab.tab == active {
                            Emphasis::Primary
                        } else {
                            Emphasis::Default
                        };
                        let control = Control::new(tab.label, tab.action, emphasis);
                        view! { <ControlButton control=control /> }
                    })
                    .collect_view()}
            </nav>
        }
        .into_any(),
        Block::CardGroup { title, cards } => view! {
            <section>
                {title.map(|title| view! { <h3>{title}</h3> })}
                <div class="cards">
                    {cards
                        .into_iter()
                        .map(|card| view! { <CardView card=card /> })
                        .collect_view()}
                </div>
            </section>
        }
        .into_any(),
    }
}
