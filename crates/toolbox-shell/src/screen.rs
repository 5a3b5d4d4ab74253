//! Presentational description of a rendered view.
//!
//! A [`Screen`] is what a front-end draws. It holds text, layout blocks and the
//! [`Action`]s wired to controls, and nothing else. The server turns it into
//! HTML, the browser build into Leptos components.

use crate::route::ViewId;
use crate::view::{Action, StrategyTab};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub view: ViewId,
    /// Header title.
    pub title: String,
    /// Controls shown in the header bar, such as sign-out.
    pub header: Vec<Control>,
    pub blocks: Vec<Block>,
}

impl Screen {
    pub fn new(view: ViewId, title: impl Into<String>) -> Self {
        Self {
            view,
            title: title.into(),
            header: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn with_header(mut self, control: Control) -> Self {
        self.header.push(control);
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Every action reachable from this screen, header first.
    pub fn actions(&self) -> Vec<&Action> {
        let mut actions: Vec<&Action> = self
            .header
            .iter()
            .filter_map(|c| c.action.as_ref())
            .collect();
        for block in &self.blocks {
            block.collect_actions(&mut actions);
        }
        actions
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    Heading {
        text: String,
    },
    /// Sign-in form with the last failure message.
    LoginForm {
        title: String,
        error: Option<String>,
    },
    /// "Under construction" notice with its way out.
    Placeholder {
        title: String,
        subtitle: String,
        controls: Vec<Control>,
    },
    Tabs {
        tabs: Vec<TabLabel>,
        active: StrategyTab,
    },
    CardGroup {
        title: Option<String>,
        cards: Vec<Card>,
    },
}

impl Block {
    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        match self {
            Block::Heading { .. } | Block::LoginForm { .. } => {}
            Block::Placeholder { controls, .. } => {
                out.extend(controls.iter().filter_map(|c| c.action.as_ref()));
            }
            Block::Tabs { tabs, .. } => out.extend(tabs.iter().map(|t| &t.action)),
            Block::CardGroup { cards, .. } => {
                for card in cards {
                    out.extend(card.on_select.iter());
                    out.extend(card.controls.iter().filter_map(|c| c.action.as_ref()));
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabLabel {
    pub tab: StrategyTab,
    pub label: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tag: Option<Tag>,
    /// Colour the card is drawn in.
    pub accent: Option<Tone>,
    /// Secondary line, e.g. a metric's parameters.
    pub note: Option<String>,
    pub controls: Vec<Control>,
    /// Action fired when the whole card is clicked.
    pub on_select: Option<Action>,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tag: None,
            accent: None,
            note: None,
            controls: Vec::new(),
            on_select: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Orange,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Blue => "blue",
            Tone::Green => "green",
            Tone::Orange => "orange",
        }
    }
}

/// A button. Controls without an action are drawn but inert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub label: String,
    pub action: Option<Action>,
    pub emphasis: Emphasis,
}

impl Control {
    pub fn new(label: impl Into<String>, action: Action, emphasis: Emphasis) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
            emphasis,
        }
    }

    pub fn inert(label: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            label: label.into(),
            action: None,
            emphasis,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Primary,
    Default,
    Danger,
}

impl Emphasis {
    pub fn as_str(self) -> &'static str {
        match self {
            Emphasis::Primary => "primary",
            Emphasis::Default => "default",
            Emphasis::Danger => "danger",
        }
    }
}
