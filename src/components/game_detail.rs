//! Game Detail Component
//!
//! Title, description and the embedded game.

use leptos::prelude::*;

use crate::components::NavLink;
use crate::models::Item;
use crate::route::Route;

#[component]
pub fn GameDetail(item: Item) -> impl IntoView {
    // Only http(s) and relative URLs make it into the frame
    let frame = match item.embed_url() {
        Some(url) => {
            let url = url.to_string();
            view! {
                <div class="game-frame">
                    <iframe src=url title=item.title.clone() width="100%" height="600"></iframe>
                </div>
            }
            .into_any()
        }
        None => {
            log::warn!("[DETAIL] Refusing to embed {:?} for {}", item.url, item.id);
            view! { <p class="embed-blocked">"This game cannot be embedded."</p> }.into_any()
        }
    };

    view! {
        <article class="game-detail">
            <h2>{item.title}</h2>
            <p>{item.desc}</p>
            {frame}
            <p><NavLink to=Route::Home>"⬅ Back to list"</NavLink></p>
        </article>
    }
}
