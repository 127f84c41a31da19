mod app;
mod components;
mod config;
mod hooks;
mod layouts;
mod models;
mod routes;
mod services;
mod session;
mod utils;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }

    log::info!(
        "🚀 Agenda de Exames iniciando ({})",
        config::CONFIG.environment
    );

    yew::Renderer::<App>::new().render();
}
