//! Image Preloading
//!
//! Offscreen image probe used by lazily loaded card images.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::describe;
use crate::error::{CatalogError, CatalogResult};

/// Start loading `src` in a detached `<img>` and run `on_load` once it has
/// arrived. If the image never loads the callback never runs.
pub fn preload_image<F>(src: &str, on_load: F) -> CatalogResult<()>
where
    F: FnOnce() + 'static,
{
    let probe = web_sys::HtmlImageElement::new().map_err(|e| CatalogError::Browser(describe(&e)))?;
    let callback = Closure::once_into_js(on_load);
    probe.set_onload(Some(callback.unchecked_ref()));
    probe.set_src(src);
    Ok(())
}
