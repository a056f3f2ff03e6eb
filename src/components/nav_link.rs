//! Nav Link Component
//!
//! Anchor that routes in-page instead of reloading.

use leptos::prelude::*;

use crate::route::Route;
use crate::router::use_router;

/// In-page link to `to`
///
/// Plain clicks are intercepted and routed; modified clicks (new tab,
/// new window) fall through to the browser.
#[component]
pub fn NavLink(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = router.href(&to);
    let target = to.clone();
    let is_active = move || router.is_active(&to);

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.default_prevented()
            || ev.button() != 0
            || ev.meta_key()
            || ev.ctrl_key()
            || ev.shift_key()
            || ev.alt_key()
        {
            return;
        }
        ev.prevent_default();
        router.navigate(target.clone());
    };

    view! {
        <a href=href class=class class:active=is_active on:click=on_click>
            {children()}
        </a>
    }
}
