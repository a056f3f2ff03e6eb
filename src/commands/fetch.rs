//! Catalog Fetch
//!
//! `CatalogSource` backed by `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::{describe, window};
use crate::catalog::CatalogSource;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{parse_catalog, Item};

/// Fetches the static item list over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_items(&self) -> CatalogResult<Vec<Item>> {
        let body = fetch_text(&self.url).await?;
        parse_catalog(&body)
    }
}

/// GET `url` and return the body as text
pub async fn fetch_text(url: &str) -> CatalogResult<String> {
    let fetch_err = |e: JsValue| CatalogError::Fetch(format!("{}: {}", url, describe(&e)));

    let response = JsFuture::from(window()?.fetch_with_str(url)).await.map_err(fetch_err)?;
    let response: Response = response.dyn_into().map_err(fetch_err)?;
    if !response.ok() {
        return Err(CatalogError::Fetch(format!("HTTP {} from {}", response.status(), url)));
    }

    let text = JsFuture::from(response.text().map_err(fetch_err)?).await.map_err(fetch_err)?;
    text.as_string()
        .ok_or_else(|| CatalogError::Parse(format!("{} did not return text", url)))
}
