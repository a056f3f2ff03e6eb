//! Pagination Component
//!
//! Prev / numbered window / next buttons for the listing view.

use leptos::prelude::*;

use crate::paging::PaginationControls;

#[component]
pub fn Pagination(
    current: ReadSignal<usize>,
    total: usize,
    window: usize,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let controls = move || PaginationControls::new(current.get(), total, window);

    view! {
        <nav class="pagination">
            <button
                class="page-btn prev"
                disabled=move || controls().prev.is_none()
                on:click=move |_| {
                    if let Some(page) = controls().prev {
                        on_select.run(page);
                    }
                }
            >
                "« Prev"
            </button>
            {move || {
                controls()
                    .pages
                    .into_iter()
                    .map(|link| {
                        let number = link.number;
                        view! {
                            <button
                                class="page-btn"
                                class:active=link.active
                                on:click=move |_| on_select.run(number)
                            >
                                {number}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="page-btn next"
                disabled=move || controls().next.is_none()
                on:click=move |_| {
                    if let Some(page) = controls().next {
                        on_select.run(page);
                    }
                }
            >
                "Next »"
            </button>
        </nav>
    }
}
