//! Copy Address Component
//!
//! Footer button copying the current page address, with a short-lived
//! success/failure indicator.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{use_ui_store, CopyStatus, UiStateStoreFields};

/// How long the indicator stays up
const STATUS_RESET_MS: u32 = 2000;

#[component]
pub fn CopyAddress() -> impl IntoView {
    let store = use_ui_store();
    // Replacing the Timeout cancels the previous click's reset
    let reset: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let on_copy = move |_| {
        spawn_local(async move {
            let result = match commands::current_href() {
                Ok(href) => commands::write_clipboard(&href).await,
                Err(err) => Err(err),
            };
            let status = match result {
                Ok(()) => CopyStatus::Copied,
                Err(err) => {
                    log::warn!("[CLIPBOARD] {}", err);
                    CopyStatus::Failed
                }
            };
            store.copy_status().set(status);
            let timeout = Timeout::new(STATUS_RESET_MS, move || store.copy_status().set(CopyStatus::Idle));
            let _ = reset.try_set_value(Some(timeout));
        });
    };

    let label = move || match store.copy_status().get() {
        CopyStatus::Idle => "Copy address",
        CopyStatus::Copied => "Copied!",
        CopyStatus::Failed => "Copy failed",
    };

    view! {
        <button
            class="copy-btn"
            class:copied=move || store.copy_status().get() == CopyStatus::Copied
            class:failed=move || store.copy_status().get() == CopyStatus::Failed
            on:click=on_copy
        >
            {label}
        </button>
    }
}
