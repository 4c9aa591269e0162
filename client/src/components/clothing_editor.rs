//! Form for adding a garment to a wardrobe or partner catalog.

#[cfg(test)]
#[path = "clothing_editor_test.rs"]
mod clothing_editor_test;

use leptos::prelude::*;

use super::field_error::FieldError;
use super::image_picker::ImagePicker;
use super::toasts::{notify_error, notify_success};
use crate::net::api::Catalog;
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{ClothingDraft, ClothingItem};
use crate::state::toasts::ToastState;
use crate::util::validation::{ClothingForm, FieldErrors, validate_clothing};

/// Create `draft` in `catalog` and return the refreshed list.
///
/// # Errors
///
/// Propagates the first failing request; nothing is re-fetched after a
/// failed create.
pub async fn create_and_reload(
    client: &HttpClient,
    catalog: Catalog,
    draft: &ClothingDraft,
) -> Result<Vec<ClothingItem>, ApiError> {
    let api = client.clothes(catalog);
    api.create(draft).await?;
    api.list().await
}

/// Delete item `id` from `catalog` and return the refreshed list.
///
/// # Errors
///
/// Propagates the first failing request.
pub async fn delete_and_reload(client: &HttpClient, catalog: Catalog, id: &str) -> Result<Vec<ClothingItem>, ApiError> {
    let api = client.clothes(catalog);
    api.delete(id).await?;
    api.list().await
}

/// Add-garment form. `on_saved` receives the refreshed list.
#[component]
pub fn ClothingEditor(catalog: Catalog, on_saved: Callback<Vec<ClothingItem>>) -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let color = RwSignal::new(String::new());
    let size = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ClothingForm {
            name: name.get_untracked(),
            category: category.get_untracked(),
            color: color.get_untracked(),
            size: size.get_untracked(),
            price: price.get_untracked(),
            image_url: image_url.get_untracked(),
        };
        let draft = match validate_clothing(&form) {
            Ok(draft) => draft,
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match create_and_reload(&client, catalog, &draft).await {
                Ok(items) => {
                    for field in [name, category, color, size, price, image_url] {
                        field.set(String::new());
                    }
                    notify_success(toasts, format!("Added {}", draft.name));
                    on_saved.run(items);
                }
                Err(e) => notify_error(toasts, "create clothing", &e),
            }
            busy.set(false);
        });
    };

    let input = move |label: &'static str, field: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-label">
                {label}
                <input
                    class="form-input"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <FieldError errors=errors field=field/>
        }
    };

    view! {
        <form class="clothing-editor" on:submit=on_submit>
            <h3>"Add item"</h3>
            {input("Name", "name", name)}
            {input("Category", "category", category)}
            {input("Color", "color", color)}
            {input("Size", "size", size)}
            {input("Price", "price", price)}
            <ImagePicker value=image_url label="Image"/>
            <FieldError errors=errors field="image_url"/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving…" } else { "Save" }}
            </button>
        </form>
    }
}
