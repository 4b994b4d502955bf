//! Tilt Text Engine - falling text labels steered by device tilt, in WASM
//!
//! Architecture:
//! - core/       - Logging macros, math helpers, Vec2
//! - domain/     - Config, fonts, orientation readings and the gravity mapping
//! - systems/    - Physics world, walls, text bodies, orientation source
//! - simulation/ - Scene: one frame = step + gravity + display list
//! - api/        - Browser bindings (canvas, DOM events, sensor, `Demo`)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("tilt-text engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Build a demo from an optional JSON config and start its frame loop.
#[wasm_bindgen]
pub fn start_demo(config_json: Option<String>) -> Result<Demo, JsValue> {
    let demo = Demo::new(config_json)?;
    demo.start()?;
    Ok(demo)
}

// Re-export main types
pub use api::wasm::Demo;
pub use domain::config::{ConfigError, DemoConfig};
pub use domain::font::FontDescriptor;
pub use domain::orientation::{map_orientation_to_gravity, GravityVector, OrientationReading};
pub use simulation::{DrawCommand, FrameStats, Scene};
pub use systems::orientation::{OrientationError, OrientationSource};
