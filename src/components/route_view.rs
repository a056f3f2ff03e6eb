//! Route View Component
//!
//! The view region. Re-resolves whenever the request changes (navigation
//! or search) or a retry is triggered.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{GameDetail, GameList, LoadErrorView, LoadingView, NotFound};
use crate::context::use_app_context;
use crate::error::CatalogError;
use crate::view_model::{resolve, ViewModel};

#[derive(Clone, Debug, PartialEq)]
enum ViewState {
    Loading,
    Ready(ViewModel),
    Failed(CatalogError),
}

#[component]
pub fn RouteView() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(ViewState::Loading);

    Effect::new(move |_| {
        let request = ctx.request.get();
        let attempt = ctx.reload_trigger.get();
        let ticket = ctx.begin_navigation();
        let catalog = ctx.catalog();

        if catalog.cached().is_none() {
            set_state.set(ViewState::Loading);
        }

        spawn_local(async move {
            let next = match catalog.load().await {
                Ok(items) => ViewState::Ready(resolve(&items, &request)),
                Err(err) => {
                    log::error!("[APP] Cannot render {:?} (attempt {}): {}", request, attempt, err);
                    ViewState::Failed(err)
                }
            };
            if ctx.is_current(ticket) {
                set_state.set(next);
            } else {
                log::debug!("[APP] Dropping stale render for {:?}", request);
            }
        });
    });

    view! {
        <div class="view-region">
            {move || match state.get() {
                ViewState::Loading => view! { <LoadingView /> }.into_any(),
                ViewState::Failed(error) => view! { <LoadErrorView error=error /> }.into_any(),
                ViewState::Ready(ViewModel::Listing(listing)) => view! { <GameList listing=listing /> }.into_any(),
                ViewState::Ready(ViewModel::Detail(item)) => view! { <GameDetail item=item /> }.into_any(),
                ViewState::Ready(ViewModel::NotFound) => view! { <NotFound /> }.into_any(),
            }}
        </div>
    }
}
