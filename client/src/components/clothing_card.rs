//! Card showing one garment; actions are passed in as children.

#[cfg(test)]
#[path = "clothing_card_test.rs"]
mod clothing_card_test;

use leptos::prelude::*;

use crate::net::types::ClothingItem;

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Category, color and size joined for the card subtitle.
pub fn details_line(item: &ClothingItem) -> String {
    [&item.category, &item.color, &item.size]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
pub fn ClothingCard(item: ClothingItem, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let details = details_line(&item);
    let price = item.price.map(format_price);
    let image = item
        .image_url
        .clone()
        .map(|src| view! { <img class="clothing-card__image" src=src alt=item.name.clone()/> });

    view! {
        <article class="clothing-card">
            {image}
            <h3 class="clothing-card__name">{item.name.clone()}</h3>
            <p class="clothing-card__details">{details}</p>
            {price.map(|p| view! { <p class="clothing-card__price">{p}</p> })}
            <div class="clothing-card__actions">{children.map(|c| c())}</div>
        </article>
    }
}
