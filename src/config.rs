use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::utils::constants::{
    DEFAULT_FILTER_LATENCY_MS, DEFAULT_MOBILE_BREAKPOINT_PX, DEFAULT_REFRESH_LATENCY_MS,
    DEFAULT_TICK_INTERVAL_MS, DEFAULT_TWO_PANE_BREAKPOINT_PX, HOME_ROUTE, LOGIN_ROUTE,
    REGISTER_ROUTE, STORAGE_KEY_AUTH_TOKEN,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub refresh: RefreshConfig,
    pub session: SessionConfig,
    pub layout: LayoutConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            refresh: RefreshConfig::default(),
            session: SessionConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Latencias simuladas y periodo del tick del dashboard (milisegundos)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub filter_latency_ms: u32,
    pub refresh_latency_ms: u32,
    pub tick_interval_ms: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            filter_latency_ms: DEFAULT_FILTER_LATENCY_MS,
            refresh_latency_ms: DEFAULT_REFRESH_LATENCY_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub token_key: String,
    pub login_route: String,
    pub register_route: String,
    pub home_route: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: STORAGE_KEY_AUTH_TOKEN.to_string(),
            login_route: LOGIN_ROUTE.to_string(),
            register_route: REGISTER_ROUTE.to_string(),
            home_route: HOME_ROUTE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Rutas donde el shell no se renderiza
    pub fn is_auth_route(&self, path: &str) -> bool {
        path == self.login_route || path == self.register_route
    }
}

/// Breakpoints en píxeles CSS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub two_pane_min_width: u32,
    pub mobile_max_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            two_pane_min_width: DEFAULT_TWO_PANE_BREAKPOINT_PX,
            mobile_max_width: DEFAULT_MOBILE_BREAKPOINT_PX,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_vars(|key| match key {
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "FILTER_LATENCY_MS" => option_env!("FILTER_LATENCY_MS"),
            "REFRESH_LATENCY_MS" => option_env!("REFRESH_LATENCY_MS"),
            "TICK_INTERVAL_MS" => option_env!("TICK_INTERVAL_MS"),
            "AUTH_TOKEN_KEY" => option_env!("AUTH_TOKEN_KEY"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de pares clave/valor.
    /// Una configuración inválida se descarta entera: se usan los valores por defecto.
    pub fn from_vars<'a>(var: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = RefreshConfig::default();
        let parsed = |key: &str, fallback: u32| {
            var(key).and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
        };
        let config = Self {
            environment: var("ENVIRONMENT").unwrap_or("development").to_string(),
            enable_logging: var("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            refresh: RefreshConfig {
                filter_latency_ms: parsed("FILTER_LATENCY_MS", defaults.filter_latency_ms),
                refresh_latency_ms: parsed("REFRESH_LATENCY_MS", defaults.refresh_latency_ms),
                tick_interval_ms: parsed("TICK_INTERVAL_MS", defaults.tick_interval_ms),
            },
            session: SessionConfig {
                token_key: var("AUTH_TOKEN_KEY")
                    .unwrap_or(STORAGE_KEY_AUTH_TOKEN).to_string(),
                ..SessionConfig::default()
            },
            layout: LayoutConfig::default(),
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("⚠️ Configuración de entorno inválida ({}), usando valores por defecto", e);
                Self::default()
            }
        }
    }

    /// Parsea una configuración JSON (campos ausentes toman el valor por defecto)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "refresh.tick_interval_ms",
                reason: "debe ser mayor que 0".to_string(),
            });
        }
        if self.session.token_key.is_empty() {
            return Err(ConfigError::Invalid {
                field: "session.token_key",
                reason: "no puede estar vacío".to_string(),
            });
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_timings() {
        let config = AppConfig::default();
        assert_eq!(config.refresh.filter_latency_ms, 1000);
        assert_eq!(config.refresh.refresh_latency_ms, 1500);
        assert_eq!(config.refresh.tick_interval_ms, 30000);
        assert_eq!(config.session.token_key, "authToken");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"refresh": {"tick_interval_ms": 5000}}"#)
            .expect("valid config");
        assert_eq!(config.refresh.tick_interval_ms, 5000);
        assert_eq!(config.refresh.refresh_latency_ms, 1500);
        assert_eq!(config.session.login_route, "/login");
    }

    #[test]
    fn zero_tick_is_rejected() {
        let err = AppConfig::from_json(r#"{"refresh": {"tick_interval_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "refresh.tick_interval_ms", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(AppConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn env_vars_override_defaults() {
        let config = AppConfig::from_vars(|key| match key {
            "ENVIRONMENT" => Some("production"),
            "FILTER_LATENCY_MS" => Some("250"),
            _ => None,
        });
        assert!(config.is_production());
        assert_eq!(config.refresh.filter_latency_ms, 250);
        assert_eq!(config.refresh.tick_interval_ms, 30000);
    }

    #[test]
    fn zero_tick_from_env_falls_back_to_defaults() {
        let config = AppConfig::from_vars(|key| match key {
            "TICK_INTERVAL_MS" => Some("0"),
            "FILTER_LATENCY_MS" => Some("250"),
            _ => None,
        });
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.refresh.tick_interval_ms, 30000);
    }

    #[test]
    fn empty_token_key_from_env_falls_back_to_defaults() {
        let config = AppConfig::from_vars(|key| (key == "AUTH_TOKEN_KEY").then_some(""));
        assert_eq!(config.session.token_key, "authToken");
    }

    #[test]
    fn env_config_is_always_valid() {
        assert!(AppConfig::from_env().validate().is_ok());
    }

    #[test]
    fn auth_routes() {
        let session = SessionConfig::default();
        assert!(session.is_auth_route("/login"));
        assert!(session.is_auth_route("/register"));
        assert!(!session.is_auth_route("/login/"));
        assert!(!session.is_auth_route("/dashboard"));
    }
}
