//! Clipboard Commands
//!
//! Frontend wrapper for the async clipboard API.

use wasm_bindgen_futures::JsFuture;

use super::{describe, window};
use crate::error::{CatalogError, CatalogResult};

/// Write plain text to the system clipboard
pub async fn write_clipboard(text: &str) -> CatalogResult<()> {
    let clipboard = window()
        .map_err(|e| CatalogError::Clipboard(e.to_string()))?
        .navigator()
        .clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| CatalogError::Clipboard(describe(&e)))
}
