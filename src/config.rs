//! Runtime Configuration
//!
//! Settings read once at startup. Every field has a default, so a host page
//! only needs to override what it cares about.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Where the item list is fetched from
    pub data_url: String,
    /// Cards per page
    pub page_size: usize,
    /// Page-number buttons shown at once
    pub page_window: usize,
    /// Quiet period before a search input re-renders (0 = immediate)
    pub search_debounce_ms: u32,
    /// Route through `#/...` instead of the history API
    pub hash_routing: bool,
    pub log_level: String,
    /// Records kept by the in-memory logger
    pub log_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_url: "/games.json".to_string(),
            page_size: 8,
            page_window: 4,
            search_debounce_ms: 150,
            hash_routing: false,
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str::<Self>(json)
            .map(Self::normalized)
            .map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Clamp values that would break paging
    pub fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self.page_window = self.page_window.max(1);
        self
    }

    /// Unknown level names fall back to `info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CatalogConfig::from_json(r#"{"page_size": 12, "hash_routing": true}"#).unwrap();
        assert_eq!(config.page_size, 12);
        assert!(config.hash_routing);
        assert_eq!(config.data_url, "/games.json");
        assert_eq!(config.page_window, 4);
    }

    #[test]
    fn test_zero_sizes_are_clamped() {
        let config = CatalogConfig::from_json(r#"{"page_size": 0, "page_window": 0}"#).unwrap();
        assert_eq!(config.page_size, 1);
        assert_eq!(config.page_window, 1);
    }

    #[test]
    fn test_invalid_json() {
        let err = CatalogConfig::from_json(r#"{"page_size": "lots"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_log_level() {
        let mut config = CatalogConfig::default();
        assert_eq!(config.log_level(), LevelFilter::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), LevelFilter::Info);
    }
}
