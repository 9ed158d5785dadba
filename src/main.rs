//! GEKKO Results Dashboard
//!
//! Entry point: panic hook, logging, configuration, then mount.

use leptos::*;

use gekko_dashboard::{App, DashboardConfig};

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = match DashboardConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::from_location(), Some(e)),
    };

    let level = config.level().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Failed to initialize logging: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("ignoring inline config: {}", e);
    }

    // Mount the app to the document body
    mount_to_body(move || view! { <App config=config /> });
}
