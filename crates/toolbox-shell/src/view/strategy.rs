use super::{unsupported, Action, Intent, View};
use crate::catalog::{StrategyKind, METRICS, SIGN_OUT_LABEL, STRATEGIES};
use crate::error::Result;
use crate::route::ViewId;
use crate::screen::{Block, Card, Control, Emphasis, Screen, TabLabel, Tag, Tone};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tabs of the strategy management page. Purely local render state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyTab {
    #[default]
    Strategies,
    Metrics,
}

impl StrategyTab {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyTab::Strategies => "strategies",
            StrategyTab::Metrics => "metrics",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StrategyTab::Strategies => "策略管理",
            StrategyTab::Metrics => "指标管理",
        }
    }
}

impl FromStr for StrategyTab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "strategies" => Ok(StrategyTab::Strategies),
            "metrics" => Ok(StrategyTab::Metrics),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

/// Strategy and metric catalogue with a tab switch.
#[derive(Debug, Default, Clone)]
pub struct StrategyManagementView {
    tab: StrategyTab,
}

impl StrategyManagementView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> StrategyTab {
        self.tab
    }

    fn strategy_group(kind: StrategyKind) -> Block {
        let (title, tag, tone) = match kind {
            StrategyKind::System => ("系统默认策略", "系统", Tone::Blue),
            StrategyKind::Custom => ("用户自定义策略", "自定义", Tone::Green),
        };
        let cards = STRATEGIES
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| {
                let controls = match kind {
                    StrategyKind::System => vec![Control::inert("详情", Emphasis::Default)],
                    StrategyKind::Custom => vec![
                        Control::inert("编辑", Emphasis::Default),
                        Control::inert("删除", Emphasis::Danger),
                    ],
                };
                Card {
                    tag: Some(Tag {
                        label: tag.to_string(),
                        tone,
                    }),
                    controls,
                    ..Card::new(s.id, s.name, s.description)
                }
            })
            .collect();
        Block::CardGroup {
            title: Some(title.to_string()),
            cards,
        }
    }

    fn metric_group() -> Block {
        let cards = METRICS
            .iter()
            .map(|m| Card {
                note: Some(m.params.to_string()),
                ..Card::new(m.id, m.name, m.description)
            })
            .collect();
        Block::CardGroup {
            title: Some("系统指标列表".to_string()),
            cards,
        }
    }
}

impl View for StrategyManagementView {
    fn id(&self) -> ViewId {
        ViewId::StrategyManagement
    }

    fn render(&self) -> Screen {
        let tabs = [StrategyTab::Strategies, StrategyTab::Metrics]
            .into_iter()
            .map(|tab| TabLabel {
                tab,
                label: tab.label().to_string(),
                action: Action::SelectTab(tab),
            })
            .collect();

        let screen = Screen::new(ViewId::StrategyManagement, "策略管理")
            .with_header(Control::new(
                SIGN_OUT_LABEL,
                Action::SignOut,
                Emphasis::Danger,
            ))
            .with_block(Block::Heading {
                text: "策略与指标管理".to_string(),
            })
            .with_block(Block::Tabs {
                tabs,
                active: self.tab,
            });

        match self.tab {
            StrategyTab::Strategies => screen
                .with_block(Self::strategy_group(StrategyKind::System))
                .with_block(Self::strategy_group(StrategyKind::Custom)),
            StrategyTab::Metrics => screen.with_block(Self::metric_group()),
        }
    }

    fn handle(&mut self, action: Action) -> Result<Option<Intent>> {
        match action {
            Action::SelectTab(tab) => {
                self.tab = tab;
                Ok(None)
            }
            Action::SignOut => Ok(Some(Intent::SignOut)),
            other => Err(unsupported(ViewId::StrategyManagement, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_ids(screen: &Screen) -> Vec<String> {
        screen
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::CardGroup { cards, .. } => Some(cards),
                _ => None,
            })
            .flatten()
            .map(|c| c.id.clone())
            .collect()
    }

    #[test]
    fn test_defaults_to_strategies_tab() {
        let view = StrategyManagementView::new();
        assert_eq!(view.tab(), StrategyTab::Strategies);
        assert_eq!(
            card_ids(&view.render()),
            vec!["double-line", "single-pin", "brick-chart", "custom-1"]
        );
    }

    #[test]
    fn test_switching_tab_is_local() {
        let mut view = StrategyManagementView::new();
        let intent = view.handle(Action::SelectTab(StrategyTab::Metrics)).unwrap();
        assert!(intent.is_none());
        assert_eq!(card_ids(&view.render()).len(), 7);
    }

    #[test]
    fn test_exposes_sign_out() {
        let mut view = StrategyManagementView::new();
        assert!(view.render().actions().contains(&&Action::SignOut));
        assert_eq!(view.handle(Action::SignOut).unwrap(), Some(Intent::SignOut));
        assert!(view.handle(Action::Open(ViewId::Toolbox)).is_err());
    }

    #[test]
    fn test_tab_parses() {
        assert_eq!("metrics".parse::<StrategyTab>().unwrap(), StrategyTab::Metrics);
        assert!("charts".parse::<StrategyTab>().is_err());
    }
}
