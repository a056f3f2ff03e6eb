//! Status Views
//!
//! Loading, not-found and load-error placeholders for the view region.

use leptos::prelude::*;

use crate::components::NavLink;
use crate::context::use_app_context;
use crate::error::CatalogError;
use crate::route::Route;

/// Log lines shown under a load error
const ERROR_LOG_LINES: usize = 10;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! { <p class="loading">"Loading games..."</p> }
}

/// Shown for unknown paths and unknown game ids alike
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"404 Not Found"</h2>
            <p><NavLink to=Route::Home>"⬅ Back to list"</NavLink></p>
        </section>
    }
}

/// The catalog could not be loaded; offers a manual retry
#[component]
pub fn LoadErrorView(error: CatalogError) -> impl IntoView {
    let ctx = use_app_context();
    let recent = rolling_logger::global()
        .map(|logger| logger.recent(ERROR_LOG_LINES))
        .unwrap_or_default()
        .into_iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    let title = if error.is_load_error() { "Could not load games" } else { "Something went wrong" };

    view! {
        <section class="load-error">
            <h2>{title}</h2>
            <p class="error-message">{error.to_string()}</p>
            <button class="primary-btn" on:click=move |_| ctx.reload()>"Retry"</button>
            <details>
                <summary>"Details"</summary>
                <pre class="error-log">{recent}</pre>
            </details>
        </section>
    }
}
