use super::{unsupported, Action, Intent, View};
use crate::catalog::{placeholder_text, RETURN_LABEL};
use crate::error::Result;
use crate::route::ViewId;
use crate::router::NavigationIntent;
use crate::screen::{Block, Control, Emphasis, Screen};

/// Notice page for a tool that is not built yet. Its only exit is back to the toolbox.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderView {
    id: ViewId,
}

impl PlaceholderView {
    pub fn new(id: ViewId) -> Self {
        Self { id }
    }
}

impl View for PlaceholderView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn render(&self) -> Screen {
        let (title, subtitle) = placeholder_text(self.id).unwrap_or(("", ""));
        Screen::new(self.id, title).with_block(Block::Placeholder {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            controls: vec![Control::new(
                RETURN_LABEL,
                Action::Open(ViewId::Toolbox),
                Emphasis::Primary,
            )],
        })
    }

    fn handle(&mut self, action: Action) -> Result<Option<Intent>> {
        match action {
            Action::Open(ViewId::Toolbox) => {
                Ok(Some(Intent::Navigate(NavigationIntent::to(ViewId::Toolbox))))
            }
            other => Err(unsupported(self.id, &other)),
        }
    }
}
