//! Static route table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Path of the sign-in view. Every redirect lands here.
pub const LOGIN_PATH: &str = "/login";
/// Path of the tool launcher, the first stop after signing in.
pub const TOOLBOX_PATH: &str = "/toolbox";
/// Root path, always redirected to [`LOGIN_PATH`].
pub const ROOT_PATH: &str = "/";

/// Identifies one of the shell's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Login,
    Toolbox,
    StockSelector,
    BatchBacktest,
    SingleBacktest,
    StrategyManagement,
}

impl ViewId {
    /// All views in route-table order.
    pub const ALL: [ViewId; 6] = [
        ViewId::Login,
        ViewId::Toolbox,
        ViewId::StockSelector,
        ViewId::BatchBacktest,
        ViewId::SingleBacktest,
        ViewId::StrategyManagement,
    ];

    /// The route serving this view.
    pub fn route(self) -> &'static Route {
        // ROUTES holds exactly one entry per view, in ALL order
        &ROUTES[self as usize]
    }

    /// URL path of this view.
    pub fn path(self) -> &'static str {
        self.route().path
    }

    /// Whether the view requires a session credential.
    pub fn is_protected(self) -> bool {
        self.route().access == Access::Protected
    }

    /// Stable kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Login => "login",
            ViewId::Toolbox => "toolbox",
            ViewId::StockSelector => "stock-selector",
            ViewId::BatchBacktest => "batch-backtest",
            ViewId::SingleBacktest => "single-backtest",
            ViewId::StrategyManagement => "strategy-management",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown view: {}", s))
    }
}

/// Who may render a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Anyone.
    Public,
    /// Only sessions holding a credential.
    Protected,
}

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub view: ViewId,
    pub access: Access,
}

impl Route {
    const fn new(path: &'static str, view: ViewId, access: Access) -> Self {
        Self { path, view, access }
    }
}

/// The shell's route table, fixed for the life of the process.
pub static ROUTES: [Route; 6] = [
    Route::new(LOGIN_PATH, ViewId::Login, Access::Public),
    Route::new(TOOLBOX_PATH, ViewId::Toolbox, Access::Protected),
    Route::new("/stock-selector", ViewId::StockSelector, Access::Protected),
    Route::new("/batch-backtest", ViewId::BatchBacktest, Access::Protected),
    Route::new("/single-backtest", ViewId::SingleBacktest, Access::Protected),
    Route::new(
        "/strategy-management",
        ViewId::StrategyManagement,
        Access::Protected,
    ),
];

/// Exact-match lookup of `path` in [`ROUTES`].
pub fn lookup(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_view_ids() {
        for (route, id) in ROUTES.iter().zip(ViewId::ALL) {
            assert_eq!(route.view, id);
            assert_eq!(id.route(), route);
        }
    }

    #[test]
    fn test_only_login_is_public() {
        let public: Vec<_> = ROUTES
            .iter()
            .filter(|r| r.access == Access::Public)
            .map(|r| r.path)
            .collect();
        assert_eq!(public, vec![LOGIN_PATH]);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("/toolbox").unwrap().view, ViewId::Toolbox);
        assert!(lookup("/toolbox/").is_none());
        assert!(lookup("/Toolbox").is_none());
        assert!(lookup(ROOT_PATH).is_none());
    }

    #[test]
    fn test_view_id_parses_its_own_name() {
        for id in ViewId::ALL {
            assert_eq!(id.as_str().parse::<ViewId>().unwrap(), id);
            assert_eq!(id.path(), format!("/{}", id));
        }
        assert!("dashboard".parse::<ViewId>().is_err());
    }
}
