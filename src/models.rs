//! Frontend Models
//!
//! Catalog entries as served by the static `games.json` resource.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Always a string; numeric ids in the source are converted on load
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "description")]
    pub desc: String,
    #[serde(default)]
    pub category: String,
    /// Card image (`thumbnail` in some catalogs)
    #[serde(default, alias = "thumbnail")]
    pub image: String,
    /// Resource embedded by the detail view
    #[serde(default)]
    pub url: String,
}

impl Item {
    /// Case-insensitive match against title or description.
    /// `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.desc.to_lowercase().contains(needle)
    }

    /// URL safe to put in an iframe, if any
    pub fn embed_url(&self) -> Option<&str> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        match scheme_of(url) {
            Some(scheme) if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") => Some(url),
            Some(_) => None,
            None => Some(url),
        }
    }
}

/// Scheme of an absolute URL (`https` in `https://..`), `None` for relative ones
fn scheme_of(url: &str) -> Option<&str> {
    let end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'))?;
    if !url[end..].starts_with(':') {
        return None;
    }
    let scheme = &url[..end];
    let valid = scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    // Anything with a colon that is not a clean scheme is treated as hostile
    Some(if valid { scheme } else { url })
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}

/// Parse the catalog resource body
pub fn parse_catalog(json: &str) -> CatalogResult<Vec<Item>> {
    serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(url: &str) -> Item {
        Item {
            id: "1".to_string(),
            title: "Block Drop".to_string(),
            desc: "Stack the falling blocks".to_string(),
            category: "Puzzle".to_string(),
            image: String::new(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_parse_catalog() {
        let json = r#"[
            {"id": "tetra", "title": "Tetra", "desc": "Blocks", "category": "Puzzle",
             "image": "/img/tetra.png", "url": "/play/tetra/"},
            {"id": 7, "title": "Snake", "description": "Eat apples", "category": "Arcade",
             "thumbnail": "/img/snake.png", "url": "https://games.example/snake"}
        ]"#;

        let items = parse_catalog(json).expect("valid catalog");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "tetra");
        assert_eq!(items[1].id, "7");
        assert_eq!(items[1].desc, "Eat apples");
        assert_eq!(items[1].image, "/img/snake.png");
    }

    #[test]
    fn test_parse_catalog_rejects_garbage() {
        let err = parse_catalog("{\"not\": \"a list\"}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(parse_catalog("<html>").is_err());
    }

    #[test]
    fn test_matches_query() {
        let item = make_item("/play");
        assert!(item.matches_query("block"));
        assert!(item.matches_query("falling"));
        assert!(!item.matches_query("zz"));
    }

    #[test]
    fn test_embed_url_allows_http_and_relative() {
        assert_eq!(make_item("https://games.example/a").embed_url(), Some("https://games.example/a"));
        assert_eq!(make_item("HTTP://games.example/a").embed_url(), Some("HTTP://games.example/a"));
        assert_eq!(make_item("/play/a/index.html").embed_url(), Some("/play/a/index.html"));
        assert_eq!(make_item("play/a?x=1:2").embed_url(), Some("play/a?x=1:2"));
    }

    #[test]
    fn test_embed_url_blocks_other_schemes() {
        assert_eq!(make_item("javascript:alert(1)").embed_url(), None);
        assert_eq!(make_item(" JavaScript:alert(1)").embed_url(), None);
        assert_eq!(make_item("data:text/html,<b>x</b>").embed_url(), None);
        assert_eq!(make_item("").embed_url(), None);
    }
}
