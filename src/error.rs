//! Frontend Errors
//!
//! One error type for the whole catalog. Payloads are plain strings so the
//! error can be cloned into signals and shared futures.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog resource could not be fetched
    #[error("failed to fetch catalog: {0}")]
    Fetch(String),
    /// The catalog resource was fetched but is not a valid item list
    #[error("failed to parse catalog: {0}")]
    Parse(String),
    /// Writing to the clipboard was refused or unsupported
    #[error("failed to copy to clipboard: {0}")]
    Clipboard(String),
    /// A browser API needed by the app is missing or threw
    #[error("browser API unavailable: {0}")]
    Browser(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    /// Fetch and parse failures both mean the catalog could not be loaded
    pub fn is_load_error(&self) -> bool {
        matches!(self, CatalogError::Fetch(_) | CatalogError::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_kinds() {
        assert!(CatalogError::Fetch("offline".into()).is_load_error());
        assert!(CatalogError::Parse("bad json".into()).is_load_error());
        assert!(!CatalogError::Clipboard("denied".into()).is_load_error());
    }

    #[test]
    fn test_display() {
        let err = CatalogError::Fetch("HTTP 404 from /games.json".into());
        assert_eq!(err.to_string(), "failed to fetch catalog: HTTP 404 from /games.json");
    }
}
