//! Framealign WASM - WebAssembly bindings for framealign-core
//!
//! This crate exposes the frame reconciliation functions to a JavaScript
//! viewer host.
//!
//! # Module Structure
//!
//! - `types` - Frame handle and flat geometry conversions
//! - `mapping` - Center resolution, point/polygon mapping, footprints
//! - `align` - Frame-pair alignment for overlays and crop decisions
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImageFrame, map_polygon, set_log_level } from '@framealign/wasm';
//!
//! await init();
//! set_log_level('debug');
//!
//! const mask = new JsImageFrame(10000, 7500, 1.0, 1.0);
//! const source = new JsImageFrame(40000, 30000, 0.25, 0.25);
//! const outline = map_polygon([0, 7500, 10000, 7500, 10000, 0, 0, 0], mask, source);
//! ```

use wasm_bindgen::prelude::*;

mod align;
mod mapping;
mod types;

// Re-export public types
pub use align::JsFrameAlignment;
pub use mapping::{
    center_difference, intersect_footprints, map_point, map_polygon, rect_to_polygon,
    resolve_center, transform_polygon,
};
pub use types::JsImageFrame;

/// Initialize the WASM module (called automatically on load)
///
/// Installs the panic hook and routes `log` records to the browser console
/// at `warn` level.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Warn) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "framealign: console logger not installed: {}",
            e
        )));
    }
}

/// Set the console log level ("off", "error", "warn", "info", "debug", "trace").
///
/// Unknown names fall back to "warn".
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    log::set_max_level(parse_level(level));
}

fn parse_level(name: &str) -> log::LevelFilter {
    name.parse().unwrap_or(log::LevelFilter::Warn)
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
