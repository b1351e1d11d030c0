use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// FILTROS
// ============================================================================

pub const FILTER_REGION: &str = "region";
pub const FILTER_TIME_RANGE: &str = "timeRange";
pub const FILTER_CATEGORY: &str = "category";

/// Filtros activos del dashboard. Se reemplazan completos en cada cambio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(BTreeMap<String, String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Región seleccionada; "all" o ausente significa sin restricción
    pub fn region(&self) -> Option<&str> {
        self.get(FILTER_REGION).filter(|r| !r.is_empty() && *r != "all")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// ESTADO DE RECARGA
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshStatus {
    Idle,
    Loading,
    /// Solo alcanzable desde `Loading`. No bloquea la UI.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshState {
    pub last_updated: DateTime<Utc>,
    pub status: RefreshStatus,
}

impl RefreshState {
    pub fn idle(now: DateTime<Utc>) -> Self {
        Self { last_updated: now, status: RefreshStatus::Idle }
    }

    pub fn is_loading(&self) -> bool {
        self.status == RefreshStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RefreshStatus::Failed { error } => Some(error),
            _ => None,
        }
    }
}

// ============================================================================
// DATOS (mock) DEL DASHBOARD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeMetric {
    pub title: String,
    pub value: String,
    pub change: String,
    pub change_type: ChangeType,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingProduct {
    pub name: String,
    pub hs_code: String,
    pub volume_billions: f64,
    pub growth_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRoute {
    pub origin: String,
    pub destination: String,
    pub region: String,
    pub volume_billions: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAlert {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub region: String,
    pub severity: AlertSeverity,
    pub minutes_ago: u32,
}

/// Conjunto de datos que pinta el dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub metrics: Vec<TradeMetric>,
    pub trending_products: Vec<TrendingProduct>,
    pub routes: Vec<TradeRoute>,
    pub alerts: Vec<TradeAlert>,
}
