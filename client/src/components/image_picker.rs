//! File input that uploads the picked image and stores its URL.

use std::sync::Arc;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use super::toasts::{notify_error, notify_success};
use crate::net::upload::ImageUploader;
use crate::state::toasts::ToastState;

/// Uploads through the configured [`ImageUploader`] and writes the resulting
/// URL into `value`. The URL can also be typed by hand.
#[component]
pub fn ImagePicker(value: RwSignal<String>, label: &'static str) -> impl IntoView {
    let uploader = expect_context::<Arc<dyn ImageUploader>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let uploading = RwSignal::new(false);
    let mode = uploader.describe();

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            uploading.set(true);
            let uploader = uploader.clone();
            leptos::task::spawn_local(async move {
                let result = match crate::net::upload::read_web_file(&file).await {
                    Ok(upload) => uploader.upload(upload).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(url) => {
                        value.set(url);
                        notify_success(toasts, "Image uploaded");
                    }
                    Err(e) => notify_error(toasts, "image upload", &e),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &uploader, toasts);
        }
    };

    view! {
        <div class="image-picker">
            <label class="form-label">{label}</label>
            <input
                class="form-input"
                type="url"
                placeholder="https://"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <input
                class="image-picker__file"
                type="file"
                accept="image/*"
                title=format!("Upload {mode}")
                disabled=move || uploading.get()
                on:change=on_change
            />
            <Show when=move || uploading.get()>
                <span class="image-picker__status">"Uploading…"</span>
            </Show>
            <Show when=move || !value.get().is_empty()>
                <img class="image-picker__preview" src=move || value.get() alt="Preview"/>
            </Show>
        </div>
    }
}
