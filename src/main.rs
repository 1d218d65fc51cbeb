mod components;
mod config;
mod hooks;
mod models;
mod services;
mod state;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Route Planner starting...");

    yew::Renderer::<App>::new().render();
}
