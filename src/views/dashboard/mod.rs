mod dashboard_view;
mod filter_controls;
mod trade_volume_card;
mod trending_products_chart;
mod world_trade_map;
mod alerts_feed;

pub use dashboard_view::DashboardView;
pub use filter_controls::FilterControls;
pub use trade_volume_card::TradeVolumeCard;
pub use trending_products_chart::TrendingProductsChart;
pub use world_trade_map::WorldTradeMap;
pub use alerts_feed::AlertsFeed;
