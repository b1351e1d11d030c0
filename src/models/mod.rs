pub mod session;
pub mod navigation;
pub mod dashboard;

pub use session::Session;
pub use navigation::{NavItem, NAV_ITEMS};
pub use dashboard::{
    AlertSeverity, ChangeType, DashboardSnapshot, FilterSet, RefreshState, RefreshStatus,
    TradeAlert, TradeMetric, TradeRoute, TrendingProduct,
};
