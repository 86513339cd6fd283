//! Gravity Engine - falling, draggable DOM elements driven by a 2D rigid-body
//! simulation in WASM
//!
//! Architecture:
//! - core/          - Logging backend, RNG
//! - domain/        - Configuration, body options, correlation labels
//! - systems/       - Rigid-body physics, drag, debug wireframe
//! - simulation/    - Zone orchestration, item binding, context
//! - api/           - Browser bindings

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook + console logging at `info`
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::install(log::Level::Info);
    log::info!("gravity engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Change console log verbosity ("off", "error", "warn", "info", "debug", "trace")
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = crate::core::logging::parse_level(level).map_err(|e| JsValue::from_str(&e))?;
    log::set_max_level(filter);
    Ok(())
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{GravityContext, GravityItem, GravityZone, PerfStats};
pub use domain::config::ZoneConfig;
pub use domain::options::BodyOptions;
pub use simulation::{SimulationContext, ZoneCore};
