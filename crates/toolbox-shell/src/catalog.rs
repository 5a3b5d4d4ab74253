//! Static content shown by the shell's views.
//!
//! Everything here is display data. None of the tools, strategies or metrics
//! listed is backed by an implementation yet.

use crate::route::ViewId;
use crate::screen::Tone;

/// A launcher entry on the toolbox page.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub target: ViewId,
    pub tone: Tone,
}

pub const TOOLS: [Tool; 3] = [
    Tool {
        id: "stock-selector",
        title: "选股工具",
        description: "智能选股分析",
        target: ViewId::StockSelector,
        tone: Tone::Blue,
    },
    Tool {
        id: "batch-backtest",
        title: "批量回测工具",
        description: "策略回测分析",
        target: ViewId::BatchBacktest,
        tone: Tone::Green,
    },
    Tool {
        id: "single-backtest",
        title: "个股回测工具",
        description: "个股买卖点分析",
        target: ViewId::SingleBacktest,
        tone: Tone::Orange,
    },
];

/// Whether a strategy ships with the system or is user-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    System,
    Custom,
}

#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: StrategyKind,
    pub description: &'static str,
}

pub const STRATEGIES: [Strategy; 4] = [
    Strategy {
        id: "double-line",
        name: "双线策略",
        kind: StrategyKind::System,
        description: "基于两条移动平均线的交叉信号，适用于趋势判断",
    },
    Strategy {
        id: "single-pin",
        name: "单针策略",
        kind: StrategyKind::System,
        description: "基于K线形态的反转信号，适用于短期反转判断",
    },
    Strategy {
        id: "brick-chart",
        name: "砖型图策略",
        kind: StrategyKind::System,
        description: "基于价格突破的趋势信号，适用于趋势跟踪",
    },
    Strategy {
        id: "custom-1",
        name: "自定义策略 1",
        kind: StrategyKind::Custom,
        description: "（规划中，先不实现）用户可自定义策略组合",
    },
];

/// A technical indicator listed on the metrics tab.
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static str,
}

pub const METRICS: [Metric; 7] = [
    Metric {
        id: "close-price",
        name: "当日收盘价",
        description: "股票当日交易结束时的价格",
        params: "参数：无",
    },
    Metric {
        id: "retail-cost",
        name: "散户成本线",
        description: "反映散户平均持仓成本",
        params: "参数：计算周期",
    },
    Metric {
        id: "main-cost",
        name: "大哥成本线",
        description: "反映主力资金平均持仓成本",
        params: "参数：计算周期",
    },
    Metric {
        id: "kdj",
        name: "KDJ指标",
        description: "随机指标，用于判断股票超买超卖",
        params: "参数：周期、平滑参数",
    },
    Metric {
        id: "ma",
        name: "MA指标",
        description: "移动平均线，反映价格趋势",
        params: "参数：周期",
    },
    Metric {
        id: "volume-ma",
        name: "成交量MA",
        description: "成交量移动平均线，反映成交量趋势",
        params: "参数：周期",
    },
    Metric {
        id: "macd",
        name: "MACD指标",
        description: "指数平滑异同移动平均线，用于判断价格动能",
        params: "参数：快线周期、慢线周期、信号周期",
    },
];

/// Title and notice text of a placeholder tool page.
pub fn placeholder_text(view: ViewId) -> Option<(&'static str, &'static str)> {
    match view {
        ViewId::StockSelector => Some(("选股工具", "选股功能开发中...")),
        ViewId::BatchBacktest => Some(("批量回测工具", "批量回测功能开发中...")),
        ViewId::SingleBacktest => Some(("个股回测工具", "个股回测功能开发中...")),
        _ => None,
    }
}

pub const SIGN_OUT_LABEL: &str = "退出登录";
pub const RETURN_LABEL: &str = "返回工具箱";
