//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Result of the last "copy address" click
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

/// UI state shared by components that are not parent and child
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Raw text shared by every search box
    pub query: String,
    /// Distinct categories for the sidebar
    pub categories: Vec<String>,
    pub copy_status: CopyStatus,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
