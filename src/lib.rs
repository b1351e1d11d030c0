// ============================================================================
// TRADEFLOW ANALYTICS - CLIENTE WEB (YEW + WASM)
// ============================================================================
// Capas:
// - Models: datos de sesión, navegación y dashboard
// - Services: almacén de credenciales, router, scheduler, fuente de datos
// - State: SessionState, MobileMenuController, DashboardRefreshController
// - ViewModels: reglas puras de visibilidad y layout
// - Hooks/Views: componentes Yew que solo pintan estado
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod context;
pub mod hooks;
pub mod routes;
pub mod views;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = &*config::CONFIG;
    if config.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    }
    log::info!("🚀 {} ({})", utils::constants::APP_NAME, config.environment);

    yew::Renderer::<views::App>::new().render();
}
