//! Styler area: personal wardrobe plus the partner shop.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wardrobe is the signed-in user's `/stylerclothes` collection. The
//! shop lists partner items with a favorite toggle and a one-item checkout.
//! Favorites live on the identity, so a toggle updates the session and the
//! reactive auth mirror follows.

#[cfg(test)]
#[path = "styler_test.rs"]
mod styler_test;

use leptos::prelude::*;

use crate::components::clothing_card::ClothingCard;
use crate::components::clothing_editor::{ClothingEditor, delete_and_reload};
use crate::components::toasts::{notify_error, notify_success};
use crate::net::api::Catalog;
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{ClothingItem, PaymentReceipt, PaymentRequest};
use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;

pub const CURRENCY: &str = "usd";

/// Flip the favorite flag on `clothing_id` and store the returned list on
/// the session identity.
///
/// # Errors
///
/// Returns the pipeline error; the identity is unchanged in that case.
pub async fn toggle_favorite(client: &HttpClient, clothing_id: &str, favorited: bool) -> Result<Vec<String>, ApiError> {
    let users = client.users();
    let favorites = if favorited {
        users.remove_favorite(clothing_id).await?
    } else {
        users.add_favorite(clothing_id).await?
    };
    if let Some(mut identity) = client.session().identity() {
        identity.favorites.clone_from(&favorites);
        client.session().update_identity(identity);
    }
    Ok(favorites)
}

pub fn checkout_request(item: &ClothingItem) -> PaymentRequest {
    PaymentRequest {
        amount: item.price.unwrap_or_default(),
        currency: CURRENCY.to_owned(),
        item_ids: vec![item.id.clone()],
    }
}

/// Pay for a single item.
///
/// # Errors
///
/// Returns the pipeline error.
pub async fn buy(client: &HttpClient, item: &ClothingItem) -> Result<PaymentReceipt, ApiError> {
    client.payments().pay(&checkout_request(item)).await
}

#[component]
pub fn StylerPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let wardrobe = RwSignal::new(Vec::<ClothingItem>::new());
    let shop = RwSignal::new(Vec::<ClothingItem>::new());
    let loading = RwSignal::new(true);

    let load_client = client.clone();
    Effect::new(move || {
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            match client.clothes(Catalog::Styler).list().await {
                Ok(items) => wardrobe.set(items),
                Err(e) => notify_error(toasts, "load wardrobe", &e),
            }
            match client.clothes(Catalog::Partner).list().await {
                Ok(items) => shop.set(items),
                Err(e) => notify_error(toasts, "load shop", &e),
            }
            loading.set(false);
        });
    });

    let has_favorite = |a: &AuthState, id: &str| a.user.as_ref().is_some_and(|u| u.favorites.iter().any(|f| f == id));
    let is_favorite = move |id: &str| auth.with(|a| has_favorite(a, id));
    let was_favorite = move |id: &str| auth.with_untracked(|a| has_favorite(a, id));

    let remove_client = client.clone();
    let on_remove = move |id: String| {
        let client = remove_client.clone();
        leptos::task::spawn_local(async move {
            match delete_and_reload(&client, Catalog::Styler, &id).await {
                Ok(items) => wardrobe.set(items),
                Err(e) => notify_error(toasts, "remove wardrobe item", &e),
            }
        });
    };

    let favorite_client = client.clone();
    let on_favorite = move |id: String, favorited: bool| {
        let client = favorite_client.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = toggle_favorite(&client, &id, favorited).await {
                notify_error(toasts, "toggle favorite", &e);
            }
        });
    };

    let on_buy = move |item: ClothingItem| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match buy(&client, &item).await {
                Ok(receipt) => notify_success(toasts, format!("Order {} {}", receipt.id, receipt.status)),
                Err(e) => notify_error(toasts, "checkout", &e),
            }
        });
    };

    let wardrobe_card = move |item: ClothingItem| {
        let id = item.id.clone();
        let on_remove = on_remove.clone();
        view! {
            <ClothingCard item=item>
                <button class="btn btn--danger" on:click=move |_| on_remove(id.clone())>"Remove"</button>
            </ClothingCard>
        }
    };

    let shop_card = move |item: ClothingItem| {
        let id = item.id.clone();
        let fav_id = id.clone();
        let on_favorite = on_favorite.clone();
        let on_buy = on_buy.clone();
        let buy_item = item.clone();
        view! {
            <ClothingCard item=item>
                <button
                    class="btn"
                    on:click=move |_| on_favorite(id.clone(), was_favorite(&id))
                >
                    {move || if is_favorite(&fav_id) { "★ Saved" } else { "☆ Save" }}
                </button>
                <button class="btn btn--primary" on:click=move |_| on_buy(buy_item.clone())>"Buy"</button>
            </ClothingCard>
        }
    };

    view! {
        <section class="page styler">
            <h1>"My wardrobe"</h1>
            {move || {
                if loading.get() {
                    view! { <p class="page__status">"Loading…"</p> }.into_any()
                } else if wardrobe.with(Vec::is_empty) {
                    view! { <p class="page__empty">"Your wardrobe is empty."</p> }.into_any()
                } else {
                    let cards = wardrobe.get().into_iter().map(wardrobe_card.clone()).collect_view();
                    view! { <div class="card-grid">{cards}</div> }.into_any()
                }
            }}
            <ClothingEditor catalog=Catalog::Styler on_saved=Callback::new(move |items| wardrobe.set(items))/>

            <h2>"Shop"</h2>
            {move || {
                if shop.with(Vec::is_empty) {
                    view! { <p class="page__empty">"Nothing for sale right now."</p> }.into_any()
                } else {
                    let cards = shop.get().into_iter().map(shop_card.clone()).collect_view();
                    view! { <div class="card-grid">{cards}</div> }.into_any()
                }
            }}
        </section>
    }
}
