//! Partner area: sale catalog and sales analytics.
//!
//! Unapproved partners can open the page; the backend answers their catalog
//! writes with 403, which surfaces as a toast carrying the backend message.

#[cfg(test)]
#[path = "partner_test.rs"]
mod partner_test;

use leptos::prelude::*;

use crate::components::clothing_card::{ClothingCard, format_price};
use crate::components::clothing_editor::{ClothingEditor, delete_and_reload};
use crate::components::toasts::notify_error;
use crate::net::api::Catalog;
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{ClothingItem, PartnerAnalytics};
use crate::state::toasts::ToastState;

/// Catalog and analytics, fetched one after the other.
///
/// # Errors
///
/// Returns the first failing request.
pub async fn load_dashboard(client: &HttpClient) -> Result<(Vec<ClothingItem>, PartnerAnalytics), ApiError> {
    let items = client.clothes(Catalog::Partner).list().await?;
    let analytics = client.partners().analytics().await?;
    Ok((items, analytics))
}

#[component]
pub fn PartnerPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let items = RwSignal::new(Vec::<ClothingItem>::new());
    let analytics = RwSignal::new(PartnerAnalytics::default());
    let loading = RwSignal::new(true);

    let load_client = client.clone();
    Effect::new(move || {
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            match load_dashboard(&client).await {
                Ok((list, stats)) => {
                    items.set(list);
                    analytics.set(stats);
                }
                Err(e) => notify_error(toasts, "load partner dashboard", &e),
            }
            loading.set(false);
        });
    });

    let on_delete = move |id: String| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match delete_and_reload(&client, Catalog::Partner, &id).await {
                Ok(list) => items.set(list),
                Err(e) => notify_error(toasts, "delete catalog item", &e),
            }
        });
    };

    let card = move |item: ClothingItem| {
        let id = item.id.clone();
        let on_delete = on_delete.clone();
        view! {
            <ClothingCard item=item>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>"Delete"</button>
            </ClothingCard>
        }
    };

    view! {
        <section class="page partner">
            <h1>"My catalog"</h1>
            <div class="stat-grid">
                <div class="stat">"Items: " {move || analytics.get().total_items}</div>
                <div class="stat">"Sales: " {move || analytics.get().total_sales}</div>
                <div class="stat">"Revenue: " {move || format_price(analytics.get().revenue)}</div>
                <div class="stat">"Views: " {move || analytics.get().views}</div>
            </div>
            <Show when=move || !analytics.with(|a| a.top_items.is_empty())>
                <h2>"Top sellers"</h2>
                <ol class="top-items">
                    <For each=move || analytics.get().top_items key=|top| top.id.clone() let:top>
                        <li>{top.name.clone()} " (" {top.sales} ")"</li>
                    </For>
                </ol>
            </Show>
            {move || {
                if loading.get() {
                    view! { <p class="page__status">"Loading…"</p> }.into_any()
                } else if items.with(Vec::is_empty) {
                    view! { <p class="page__empty">"No items listed yet."</p> }.into_any()
                } else {
                    let cards = items.get().into_iter().map(card.clone()).collect_view();
                    view! { <div class="card-grid">{cards}</div> }.into_any()
                }
            }}
            <ClothingEditor catalog=Catalog::Partner on_saved=Callback::new(move |list| items.set(list))/>
        </section>
    }
}
