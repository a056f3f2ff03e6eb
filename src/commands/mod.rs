//! Browser Command Wrappers
//!
//! Thin bindings to the browser APIs the app needs, organized by domain.

mod config;
mod fetch;
mod history;
mod clipboard;
mod image;

use wasm_bindgen::prelude::*;

use crate::error::CatalogError;

// Re-export all public items
pub use config::*;
pub use fetch::*;
pub use history::*;
pub use clipboard::*;
pub use image::*;

fn window() -> Result<web_sys::Window, CatalogError> {
    web_sys::window().ok_or_else(|| CatalogError::Browser("no global window".to_string()))
}

/// Render a thrown JS value as text for error payloads
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
