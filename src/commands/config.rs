//! Config Commands
//!
//! Reads the optional `window.__CATALOG_CONFIG__` object set by the host page.

use wasm_bindgen::JsValue;

use super::{describe, window};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

const CONFIG_GLOBAL: &str = "__CATALOG_CONFIG__";

/// Host-provided configuration, or defaults when none is set
pub fn load_config() -> CatalogResult<CatalogConfig> {
    let win = window()?;
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| CatalogError::Config(describe(&e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(CatalogConfig::default());
    }

    serde_wasm_bindgen::from_value::<CatalogConfig>(value)
        .map(CatalogConfig::normalized)
        .map_err(|e| CatalogError::Config(e.to_string()))
}
