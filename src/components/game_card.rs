use leptos::prelude::*;

use crate::components::{LazyImage, NavLink};
use crate::models::Item;
use crate::route::Route;

#[component]
pub fn GameCard(item: Item) -> impl IntoView {
    let Item { id, title, desc, image, .. } = item;
    let alt = title.clone();

    view! {
        <article class="game-card">
            <LazyImage src=image alt=alt />
            <h3>{title}</h3>
            <p>{desc}</p>
            <NavLink to=Route::Game(id) class="primary-btn">"Play Now"</NavLink>
        </article>
    }
}
