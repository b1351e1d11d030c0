// ============================================================================
// CONSTANTES - Rutas, claves de storage y tiempos por defecto
// ============================================================================

/// Clave del token de sesión en localStorage
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";

pub const HOME_ROUTE: &str = "/dashboard";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const SEARCH_ROUTE: &str = "/global-trade-search";
pub const SETTINGS_ROUTE: &str = "/settings";
pub const HELP_ROUTE: &str = "/help";
pub const TERMS_ROUTE: &str = "/terms";
pub const PRIVACY_ROUTE: &str = "/privacy";

/// Latencia simulada al aplicar filtros
pub const DEFAULT_FILTER_LATENCY_MS: u32 = 1000;
/// Latencia simulada del botón "Refresh"
pub const DEFAULT_REFRESH_LATENCY_MS: u32 = 1500;
/// Tick silencioso del timestamp (30 segundos)
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 30 * 1000;

/// `lg` de Tailwind: por encima, layout de dos paneles
pub const DEFAULT_TWO_PANE_BREAKPOINT_PX: u32 = 1024;
/// `md` de Tailwind: por debajo, navegación en menú móvil
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;

pub const APP_NAME: &str = "TradeFlow Analytics";
pub const DEMO_USER_NAME: &str = "Trade Analyst";
pub const DEMO_USER_EMAIL: &str = "analyst@tradeflow.com";
