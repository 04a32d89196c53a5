mod app;
mod components;
mod hooks;
mod pages;
mod routes;
mod services;

use app::{App, AppProps};

fn main() {
    services::logging::init(log::LevelFilter::Info);
    let config = app::load_config();
    services::logging::init(config.log_level());
    log::info!(
        "Starting life planner under {} ({} mode)",
        config.base_path,
        config.mode()
    );
    if let Err(e) = app::redirect_bare_base(&config.base_path) {
        log::warn!("Could not normalize entry path: {:#}", e);
    }
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
