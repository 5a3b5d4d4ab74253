use super::ControlButton;
use crate::state::ShellState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use toolbox_shell::screen::Card;

/// One catalogue card. Cards with a select action are clickable as a whole.
#[component]
pub fn CardView(card: Card) -> impl IntoView {
    let state = expect_context::<ShellState>();
    let navigate = use_navigate();
    let on_select = card.on_select;
    let clickable = on_select.is_some();
    let class = match card.accent {
        Some(tone) => format!("card accent-{}", tone.as_str()),
        None => "card".to_string(),
    };

    let tag = card.tag.map(|tag| {
        view! { <span class=format!("tag tag-{}", tag.tone.as_str())>{tag.label}</span> }
    });
    let note = card.note.map(|note| view! { <p class="note">{note}</p> });
    let controls = card
        .controls
        .into_iter()
        .map(|control| view! { <ControlButton control=control /> })
        .collect_view();

    view! {
        <div
            class=class
            class:clickable=clickable
            id=card.id
            on:click=move |_| {
                if let Some(action) = on_select.clone() {
                    state.act(action, &navigate);
                }
            }
        >
            <h4>{card.title}</h4>
            {tag}
            <p>{card.description}</p>
            {note}
            <div class="controls">{controls}</div>
        </div>
    }
}
