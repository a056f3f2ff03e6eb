//! Category Navigation Component
//!
//! Sidebar list: "All" followed by every distinct category.

use leptos::prelude::*;

use crate::components::NavLink;
use crate::route::Route;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn CategoryNav() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <ul class="category-list">
            <li><NavLink to=Route::Home>"All"</NavLink></li>
            <For
                each=move || store.categories().get()
                key=|category| category.clone()
                children=move |category| {
                    view! {
                        <li>
                            <NavLink to=Route::Category(category.clone())>{category}</NavLink>
                        </li>
                    }
                }
            />
        </ul>
    }
}
