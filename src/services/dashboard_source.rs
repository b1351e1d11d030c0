// ============================================================================
// FUENTE DE DATOS DEL DASHBOARD (mock)
// ============================================================================
// No hay backend: la "respuesta" se construye en memoria cuando vence la
// latencia simulada.
// ============================================================================

use crate::error::RefreshError;
use crate::models::dashboard::{
    AlertSeverity, ChangeType, DashboardSnapshot, FilterSet, TradeAlert, TradeMetric,
    TradeRoute, TrendingProduct,
};

pub const KNOWN_REGIONS: &[&str] = &["APAC", "EMEA", "AMERICAS"];

pub trait DashboardSource {
    fn load(&self, filters: &FilterSet) -> Result<DashboardSnapshot, RefreshError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockDashboardSource;

impl DashboardSource for MockDashboardSource {
    fn load(&self, filters: &FilterSet) -> Result<DashboardSnapshot, RefreshError> {
        let region = match filters.region() {
            Some(region) if !KNOWN_REGIONS.contains(&region) => {
                return Err(RefreshError::InvalidFilter {
                    key: "region".to_string(),
                    value: region.to_string(),
                });
            }
            region => region,
        };

        let in_region = |r: &str| region.map_or(true, |wanted| wanted == r);
        Ok(DashboardSnapshot {
            metrics: trade_volume_metrics(),
            trending_products: trending_products(),
            routes: trade_routes().into_iter().filter(|route| in_region(route.region.as_str())).collect(),
            alerts: trade_alerts().into_iter().filter(|alert| in_region(alert.region.as_str())).collect(),
        })
    }
}

fn metric(title: &str, value: &str, change: &str, change_type: ChangeType, icon: &str, color: &str) -> TradeMetric {
    TradeMetric {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        change_type,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

pub fn trade_volume_metrics() -> Vec<TradeMetric> {
    vec![
        metric("Total Trade Volume", "$2.4T", "+12.5%", ChangeType::Positive, "TrendingUp", "bg-primary"),
        metric("Active Trade Routes", "1,247", "+8.3%", ChangeType::Positive, "Route", "bg-secondary"),
        metric("New Suppliers", "342", "+15.2%", ChangeType::Positive, "Building2", "bg-success"),
        metric("Price Alerts", "28", "-5.1%", ChangeType::Negative, "AlertTriangle", "bg-warning"),
    ]
}

fn trending_products() -> Vec<TrendingProduct> {
    [
        ("Semiconductors", "8542", 412.7, 18.4),
        ("Lithium-ion Batteries", "8507", 128.3, 24.1),
        ("Crude Petroleum", "2709", 1080.5, -3.2),
        ("Soybeans", "1201", 64.9, 6.7),
        ("Solar Panels", "8541", 52.1, 31.5),
    ]
    .into_iter()
    .map(|(name, hs_code, volume_billions, growth_pct)| TrendingProduct {
        name: name.to_string(),
        hs_code: hs_code.to_string(),
        volume_billions,
        growth_pct,
    })
    .collect()
}

fn trade_routes() -> Vec<TradeRoute> {
    [
        ("Shanghai", "Los Angeles", "APAC", 284.2),
        ("Singapore", "Rotterdam", "APAC", 196.8),
        ("Rotterdam", "New York", "EMEA", 151.3),
        ("Hamburg", "Shanghai", "EMEA", 138.9),
        ("Santos", "Qingdao", "AMERICAS", 97.4),
        ("Houston", "Antwerp", "AMERICAS", 88.6),
    ]
    .into_iter()
    .map(|(origin, destination, region, volume_billions)| TradeRoute {
        origin: origin.to_string(),
        destination: destination.to_string(),
        region: region.to_string(),
        volume_billions,
    })
    .collect()
}

fn trade_alerts() -> Vec<TradeAlert> {
    [
        (1, "Tariff change", "New tariff schedule announced for steel imports", "AMERICAS", AlertSeverity::Warning, 12),
        (2, "Port congestion", "Average berth wait at Singapore above 3 days", "APAC", AlertSeverity::Critical, 34),
        (3, "Price spike", "Lithium carbonate spot price up 9% week over week", "APAC", AlertSeverity::Warning, 58),
        (4, "New supplier", "12 verified suppliers added for HS 8541", "EMEA", AlertSeverity::Info, 95),
        (5, "Regulation", "Updated due-diligence rules for battery imports", "EMEA", AlertSeverity::Info, 140),
    ]
    .into_iter()
    .map(|(id, title, message, region, severity, minutes_ago)| TradeAlert {
        id,
        title: title.to_string(),
        message: message.to_string(),
        region: region.to_string(),
        severity,
        minutes_ago,
    })
    .collect()
}
