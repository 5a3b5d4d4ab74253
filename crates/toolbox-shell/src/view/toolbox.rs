use super::{unsupported, Action, Intent, View};
use crate::catalog::{SIGN_OUT_LABEL, TOOLS};
use crate::error::Result;
use crate::route::ViewId;
use crate::router::NavigationIntent;
use crate::screen::{Block, Card, Control, Emphasis, Screen};

/// Tool launcher: the hub every tool returns to.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolboxView;

impl View for ToolboxView {
    fn id(&self) -> ViewId {
        ViewId::Toolbox
    }

    fn render(&self) -> Screen {
        let cards = TOOLS
            .iter()
            .map(|tool| Card {
                accent: Some(tool.tone),
                on_select: Some(Action::Open(tool.target)),
                ..Card::new(tool.id, tool.title, tool.description)
            })
            .collect();

        Screen::new(ViewId::Toolbox, "个人工具箱")
            .with_header(Control::new(
                SIGN_OUT_LABEL,
                Action::SignOut,
                Emphasis::Danger,
            ))
            .with_block(Block::Heading {
                text: "欢迎使用股票交易系统".to_string(),
            })
            .with_block(Block::CardGroup { title: None, cards })
    }

    fn handle(&mut self, action: Action) -> Result<Option<Intent>> {
        match action {
            Action::Open(target) if TOOLS.iter().any(|t| t.target == target) => {
                Ok(Some(Intent::Navigate(NavigationIntent::to(target))))
            }
            Action::SignOut => Ok(Some(Intent::SignOut)),
            other => Err(unsupported(ViewId::Toolbox, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tool_card_opens_its_view() {
        let mut view = ToolboxView;
        let screen = view.render();
        let targets: Vec<_> = screen
            .actions()
            .into_iter()
            .filter_map(|a| match a {
                Action::Open(id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(
            targets,
            vec![
                ViewId::StockSelector,
                ViewId::BatchBacktest,
                ViewId::SingleBacktest
            ]
        );

        for target in targets {
            assert_eq!(
                view.handle(Action::Open(target)).unwrap(),
                Some(Intent::Navigate(NavigationIntent::to(target)))
            );
        }
    }

    #[test]
    fn test_tool_cards_carry_colour_not_ids() {
        let screen = ToolboxView.render();
        let cards = screen
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::CardGroup { cards, .. } => Some(cards),
                _ => None,
            })
            .unwrap();

        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.tag.is_none() && c.accent.is_some()));
    }

    #[test]
    fn test_sign_out() {
        assert_eq!(
            ToolboxView.handle(Action::SignOut).unwrap(),
            Some(Intent::SignOut)
        );
    }

    #[test]
    fn test_rejects_views_it_does_not_launch() {
        assert!(ToolboxView
            .handle(Action::Open(ViewId::StrategyManagement))
            .is_err());
        assert!(ToolboxView
            .handle(Action::SubmitCredential("t".to_string()))
            .is_err());
    }
}
