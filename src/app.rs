//! Game Catalog App
//!
//! Root component: top bar, category sidebar, view region and footer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CategoryNav, CopyAddress, NavLink, RouteView, SearchBox};
use crate::config::CatalogConfig;
use crate::context::AppContext;
use crate::filter::distinct_sorted_categories;
use crate::route::Route;
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let store = Store::new(UiState::default());
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    provide_context(ctx.router);

    ctx.router.listen();

    // Build the category list once the catalog is in (and again on retry)
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let catalog = ctx.catalog();
        spawn_local(async move {
            match catalog.load().await {
                Ok(items) => {
                    let categories: Vec<String> = distinct_sorted_categories(&items)
                        .into_iter()
                        .filter(|category| !category.is_empty())
                        .collect();
                    log::debug!("[APP] {} categories", categories.len());
                    store.categories().set(categories);
                }
                Err(err) => log::warn!("[APP] Categories unavailable: {}", err),
            }
        });
    });

    // A navigation replaces search results, so drop the stale query
    let route = ctx.router.route();
    Effect::new(move |_| {
        route.track();
        store.query().set(String::new());
    });

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <NavLink to=Route::Home class="brand">"Game Catalog"</NavLink>
                <SearchBox placeholder="Search games..." class="search-top" />
            </header>

            <div class="content">
                <aside class="sidebar">
                    <SearchBox placeholder="Search" class="search-side" />
                    <h3>"Categories"</h3>
                    <CategoryNav />
                </aside>

                <main class="main-content">
                    <RouteView />
                </main>
            </div>

            <footer class="footer">
                <CopyAddress />
            </footer>
        </div>
    }
}
