// ============================================================================
// COURIER PWA - FRONTEND MVVM (Yew + stores reactivos)
// ============================================================================
// - Views / Components: function components Yew (sin lógica de negocio)
// - Hooks: puente entre componentes y stores (context + suscripción)
// - ViewModels: transiciones async contra los servicios
// - State: reducers puros + ReactiveStore
// - Routing: rutas, guard y navegación (History API)
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod routing;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod views;
pub mod utils;

#[cfg(test)]
mod test_support;

use crate::components::App;
use crate::config::CONFIG;

/// Inicializa panic hook + logging y monta la app en <body>
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() && !CONFIG.is_production() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Courier PWA ({}) -> {}", CONFIG.environment, CONFIG.api_url);

    yew::Renderer::<App>::new().render();
}
