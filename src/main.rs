//! Task List Frontend Entry Point

mod app;
mod browser;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod signals;
mod storage;
#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use error::ConfigError;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_document();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(err) = rolling_logger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", err).into());
    }
    match &loaded {
        Ok(_) => log::debug!("Loaded config: {:?}", config),
        Err(ConfigError::Missing(_)) => {}
        Err(err) => log::warn!("Using default config: {}", err),
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Recent log lines, callable from the devtools console
#[wasm_bindgen]
pub fn task_list_logs() -> String {
    rolling_logger::recent().join("\n")
}
