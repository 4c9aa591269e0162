//! Occasion planner: upcoming events, a create form, and outfit
//! suggestions per event.

#[cfg(test)]
#[path = "occasions_test.rs"]
mod occasions_test;

use leptos::prelude::*;

use crate::components::clothing_card::ClothingCard;
use crate::components::field_error::FieldError;
use crate::components::toasts::{notify_error, notify_success};
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{ClothingItem, Occasion, OccasionDraft};
use crate::state::toasts::ToastState;
use crate::util::validation::{FieldErrors, OccasionForm, validate_occasion};

/// Oldest date first; ISO dates sort lexically.
pub fn sort_by_date(occasions: &mut [Occasion]) {
    occasions.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
}

async fn reload(client: &HttpClient) -> Result<Vec<Occasion>, ApiError> {
    let mut list = client.occasions().list().await?;
    sort_by_date(&mut list);
    Ok(list)
}

/// Create `draft` and return the refreshed, date-ordered list.
///
/// # Errors
///
/// Returns the first failing request.
pub async fn create_and_reload(client: &HttpClient, draft: &OccasionDraft) -> Result<Vec<Occasion>, ApiError> {
    client.occasions().create(draft).await?;
    reload(client).await
}

/// Delete occasion `id` and return the refreshed list.
///
/// # Errors
///
/// Returns the first failing request.
pub async fn delete_and_reload(client: &HttpClient, id: &str) -> Result<Vec<Occasion>, ApiError> {
    client.occasions().delete(id).await?;
    reload(client).await
}

#[component]
pub fn OccasionsPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let occasions = RwSignal::new(Vec::<Occasion>::new());
    let loading = RwSignal::new(true);
    let suggestions = RwSignal::new(None::<(String, Vec<ClothingItem>)>);

    let title = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let load_client = client.clone();
    Effect::new(move || {
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            match reload(&client).await {
                Ok(list) => occasions.set(list),
                Err(e) => notify_error(toasts, "load occasions", &e),
            }
            loading.set(false);
        });
    });

    let create_client = client.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = OccasionForm {
            title: title.get_untracked(),
            date: date.get_untracked(),
            location: location.get_untracked(),
            notes: notes.get_untracked(),
        };
        let draft = match validate_occasion(&form) {
            Ok(draft) => draft,
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);
        let client = create_client.clone();
        leptos::task::spawn_local(async move {
            match create_and_reload(&client, &draft).await {
                Ok(list) => {
                    for field in [title, date, location, notes] {
                        field.set(String::new());
                    }
                    occasions.set(list);
                    notify_success(toasts, "Occasion saved");
                }
                Err(e) => notify_error(toasts, "create occasion", &e),
            }
            busy.set(false);
        });
    };

    let delete_client = client.clone();
    let on_delete = move |id: String| {
        let client = delete_client.clone();
        leptos::task::spawn_local(async move {
            match delete_and_reload(&client, &id).await {
                Ok(list) => occasions.set(list),
                Err(e) => notify_error(toasts, "delete occasion", &e),
            }
        });
    };

    let on_suggest = move |occasion: Occasion| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.occasions().suggestions(&occasion.id).await {
                Ok(items) => suggestions.set(Some((occasion.title, items))),
                Err(e) => notify_error(toasts, "occasion suggestions", &e),
            }
        });
    };

    let row = move |occasion: Occasion| {
        let id = occasion.id.clone();
        let on_delete = on_delete.clone();
        let on_suggest = on_suggest.clone();
        let suggest_target = occasion.clone();
        view! {
            <li class="occasion">
                <strong>{occasion.title.clone()}</strong>
                " · "
                <span>{occasion.date.clone()}</span>
                {occasion.location.clone().map(|l| view! { <span class="occasion__location">" · " {l}</span> })}
                {occasion.notes.clone().map(|n| view! { <p class="occasion__notes">{n}</p> })}
                <button class="btn" on:click=move |_| on_suggest(suggest_target.clone())>"Suggest outfit"</button>
                <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>"Delete"</button>
            </li>
        }
    };

    let field = move |label: &'static str, kind: &'static str, name: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-label">
                {label}
                <input
                    class="form-input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <FieldError errors=errors field=name/>
        }
    };

    view! {
        <section class="page occasions">
            <h1>"Occasions"</h1>
            {move || {
                if loading.get() {
                    view! { <p class="page__status">"Loading…"</p> }.into_any()
                } else if occasions.with(Vec::is_empty) {
                    view! { <p class="page__empty">"No occasions planned."</p> }.into_any()
                } else {
                    let cards = occasions.get().into_iter().map(row.clone()).collect_view();
                    view! { <ul class="occasion-list">{cards}</ul> }.into_any()
                }
            }}
            {move || {
                suggestions
                    .get()
                    .map(|(title, items)| {
                        view! {
                            <div class="suggestions">
                                <h2>"Ideas for " {title}</h2>
                                <div class="card-grid">
                                    {items
                                        .into_iter()
                                        .map(|item| view! { <ClothingCard item=item/> })
                                        .collect_view()}
                                </div>
                                <button class="btn" on:click=move |_| suggestions.set(None)>"Close"</button>
                            </div>
                        }
                    })
            }}
            <form class="occasion-form" on:submit=on_submit>
                <h2>"Plan an occasion"</h2>
                {field("Title", "text", "title", title)}
                {field("Date", "date", "date", date)}
                {field("Location", "text", "location", location)}
                {field("Notes", "text", "notes", notes)}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Save"</button>
            </form>
        </section>
    }
}
