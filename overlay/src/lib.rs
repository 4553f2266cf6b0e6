//! Browser overlay host for the tiled text watermark.
//!
//! This crate is compiled to WebAssembly. It binds a full-viewport canvas that
//! ignores pointer input, repaints it with the [`watermark`] renderer whenever a
//! parameter changes, and persists settings to `localStorage`. The page's
//! configuration controls call the [`engine::Engine`] setters directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `wasm_bindgen` engine and the testable [`engine::EngineCore`] |
//! | [`surface`] | [`watermark::Surface`] over `CanvasRenderingContext2d` |
//! | [`storage`] | [`watermark::SettingsStore`] over `localStorage` |

pub mod engine;
pub mod storage;
pub mod surface;

use wasm_bindgen::prelude::*;

/// Install the panic hook and route `tracing`/`log` records to the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {err}")));
    }
}
