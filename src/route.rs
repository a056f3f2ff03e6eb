//! Routes
//!
//! The navigation surface: `/`, `/category/<name>`, `/game/<id>`.
//! Anything else is `NotFound`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same reserved set as JavaScript's `encodeURIComponent`
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Decoded category name
    Category(String),
    /// Decoded item id
    Game(String),
    /// The raw path that matched nothing
    NotFound(String),
}

impl Route {
    /// Match a path against the known route shapes. Query strings and
    /// fragments are ignored, as are leading/trailing slashes.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }

        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("category"), Some(name), None) if !name.is_empty() => Route::Category(decode(name)),
            (Some("game"), Some(id), None) if !id.is_empty() => Route::Game(decode(id)),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Resolve from `location.pathname` and `location.hash`.
    /// In hash mode only a `#/...` fragment is read; the page may be served
    /// from any path, so anything else is the home list.
    pub fn from_location(pathname: &str, hash: &str, hash_routing: bool) -> Self {
        let fragment = hash.strip_prefix('#').filter(|f| f.starts_with('/'));
        match (fragment, hash_routing) {
            (Some(fragment), _) => Self::parse(fragment),
            (None, true) => Route::Home,
            (None, false) => Self::parse(pathname),
        }
    }

    /// Canonical, percent-encoded path
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category(name) => format!("/category/{}", encode(name)),
            Route::Game(id) => format!("/game/{}", encode(id)),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Link target for the given routing mode
    pub fn href(&self, hash_routing: bool) -> String {
        if hash_routing {
            format!("#{}", self.to_path())
        } else {
            self.to_path()
        }
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
