//! Search Box Component
//!
//! Text input feeding the query pipeline. Every box shares the same query,
//! so typing in one updates the others.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::context::use_app_context;
use crate::filter::{is_current_query, normalize_query};
use crate::router::use_router;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn SearchBox(
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let delay_ms = ctx.config().search_debounce_ms;
    // Dropping a pending Timeout cancels it
    let pending: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    // A navigation supersedes any search still waiting on the timer
    let route = use_router().route();
    Effect::new(move |_| {
        route.track();
        pending.set_value(None);
    });

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        store.query().set(raw.clone());

        let query = normalize_query(&raw);
        if delay_ms == 0 {
            pending.set_value(None);
            ctx.search(query);
        } else {
            let timeout = Timeout::new(delay_ms, move || {
                if !is_current_query(&query, &store.query().get_untracked()) {
                    log::debug!("[SEARCH] Dropping stale query {:?}", query);
                    return;
                }
                log::debug!("[SEARCH] Query {:?}", query);
                ctx.search(query);
            });
            pending.set_value(Some(timeout));
        }
    };

    view! {
        <input
            type="search"
            class=class
            placeholder=placeholder
            prop:value=move || store.query().get()
            on:input=on_input
        />
    }
}
