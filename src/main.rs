//! Game Catalog Frontend Entry Point

mod models;
mod error;
mod config;
mod filter;
mod paging;
mod route;
mod catalog;
mod view_model;
mod commands;
mod router;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::CatalogConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match commands::load_config() {
        Ok(config) => (config, None),
        Err(err) => (CatalogConfig::default(), Some(err)),
    };
    if let Err(err) = rolling_logger::init(config.log_level(), config.log_capacity) {
        web_sys::console::error_1(&format!("[APP] Logger already set: {}", err).into());
    }
    if let Some(err) = config_error {
        log::warn!("[APP] Ignoring host config: {}", err);
    }

    log::info!("[APP] Starting, catalog at {}", config.data_url);
    mount_to_body(move || view! { <App config=config /> });
}
