//! Lazy Image Component
//!
//! Shows a placeholder until an offscreen probe has loaded the real image.

use leptos::prelude::*;

use crate::commands;

/// 1x1 transparent GIF
const PLACEHOLDER: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
) -> impl IntoView {
    let (loaded, set_loaded) = signal(None::<String>);

    if !src.is_empty() {
        let resolved = src.clone();
        if let Err(err) = commands::preload_image(&src, move || {
            let _ = set_loaded.try_set(Some(resolved));
        }) {
            log::warn!("[IMAGE] Cannot preload {}: {}", src, err);
        }
    }

    view! {
        <img
            class="thumb"
            class:loaded=move || loaded.with(Option::is_some)
            src=move || loaded.get().unwrap_or_else(|| PLACEHOLDER.to_string())
            alt=alt
        />
    }
}
