//! History Commands
//!
//! Location reads, `pushState` and the `popstate` listener.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{describe, window};
use crate::error::{CatalogError, CatalogResult};
use crate::route::Route;

/// Route for the current `window.location`
pub fn current_route(hash_routing: bool) -> Route {
    match window() {
        Ok(win) => {
            let location = win.location();
            let pathname = location.pathname().unwrap_or_default();
            let hash = location.hash().unwrap_or_default();
            Route::from_location(&pathname, &hash, hash_routing)
        }
        Err(_) => Route::Home,
    }
}

/// Full address of the current page
pub fn current_href() -> CatalogResult<String> {
    window()?
        .location()
        .href()
        .map_err(|e| CatalogError::Browser(describe(&e)))
}

/// Push a new history entry without reloading
pub fn push_history(href: &str) -> CatalogResult<()> {
    let history = window()?
        .history()
        .map_err(|e| CatalogError::Browser(describe(&e)))?;
    history
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
        .map_err(|e| CatalogError::Browser(describe(&e)))
}

/// Call `on_change` with the new route on back/forward navigation.
/// Hash routing also listens to `hashchange` for hand-edited fragments.
pub fn bind_history_listener<F>(hash_routing: bool, on_change: F) -> CatalogResult<()>
where
    F: Fn(Route) + 'static,
{
    let win = window()?;
    let on_event = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_change(current_route(hash_routing));
    });

    let callback = on_event.as_ref().unchecked_ref();
    win.add_event_listener_with_callback("popstate", callback)
        .map_err(|e| CatalogError::Browser(describe(&e)))?;
    if hash_routing {
        win.add_event_listener_with_callback("hashchange", callback)
            .map_err(|e| CatalogError::Browser(describe(&e)))?;
    }
    // Lives as long as the page
    on_event.forget();
    Ok(())
}
