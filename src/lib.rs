use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod time_utils;

/// Wire up panic reporting and logging, then mount the trading screen.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));
    domain::logging::init_logger(Box::new(app::LeptosLogger::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 trade simulator starting (synthetic data only)",
    );

    leptos::mount_to_body(app::App);
}

/// Override simulator tunables from the host page before (or after) mount.
/// Malformed JSON is rejected and leaves the current configuration in place.
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsValue> {
    use leptos::SignalSet;

    let config: config::SimConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?;
    global_state::globals().sim_config.set(config);
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("⚙️ config applied (tick {} ms)", config.tick_interval_ms),
    );
    Ok(())
}
