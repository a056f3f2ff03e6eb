//! Game List Component
//!
//! Card grid for one listing, paged locally. A new listing means a new
//! component, so the page always starts at 1.

use leptos::prelude::*;

use crate::components::{GameCard, Pagination};
use crate::context::use_app_context;
use crate::paging::{clamp_page, paginate, total_pages};
use crate::view_model::Listing;

#[component]
pub fn GameList(listing: Listing) -> impl IntoView {
    let config = use_app_context().config();
    let Listing { heading, items } = listing;

    let heading = heading.map(|text| view! { <h2 class="listing-title">{text}</h2> });

    if items.is_empty() {
        return view! {
            {heading}
            <h2 class="empty">"No games found"</h2>
        }
        .into_any();
    }

    let page_size = config.page_size;
    let total = total_pages(items.len(), page_size);
    let (page, set_page) = signal(1usize);
    let items = StoredValue::new(items);

    let on_select = Callback::new(move |requested: usize| {
        set_page.set(clamp_page(requested, total));
    });

    // Keyed by position too, ids are not guaranteed unique
    let visible = move || {
        let current = page.get();
        items.with_value(|all| {
            paginate(all, current, page_size)
                .iter()
                .cloned()
                .enumerate()
                .map(|(offset, item)| ((current - 1) * page_size + offset, item))
                .collect::<Vec<_>>()
        })
    };

    view! {
        {heading}
        <div class="grid">
            <For
                each=visible
                key=|(position, item)| (*position, item.id.clone())
                children=move |(_, item)| view! { <GameCard item=item /> }
            />
        </div>
        {(total > 1).then(|| view! {
            <Pagination current=page total=total window=config.page_window on_select=on_select />
        })}
    }
    .into_any()
}
