//! Product cards. Clicking a card's image, or pressing Enter/Space on the
//! focused card, opens its recipe.

use leptos::prelude::*;

use crate::app::PageState;
use crate::catalog::{Product, PRODUCTS};
use crate::handlers;

#[component]
pub fn ProductGrid(page: PageState) -> impl IntoView {
    view! {
        <section id="produtos" class="section products">
            <h2>"Produtos"</h2>
            <div class="product-grid">
                {PRODUCTS
                    .iter()
                    .map(|product| view! { <ProductCard page=page product=*product /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(page: PageState, product: Product) -> impl IntoView {
    view! {
        <article
            class="product-card"
            tabindex="0"
            data-recipe-id=product.recipe_id
            on:keydown=move |ev| {
                if matches!(ev.key().as_str(), "Enter" | " ") {
                    ev.prevent_default();
                    handlers::open_recipe(page, &product);
                }
            }
        >
            <img
                src=product.image
                alt=product.name
                loading="lazy"
                on:click=move |_| handlers::open_recipe(page, &product)
            />
            <h3 class="product-name">{product.name}</h3>
            <p class="product-blurb">{product.blurb}</p>
        </article>
    }
}
