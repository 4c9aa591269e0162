//! Inline validation message under a form field.

use leptos::prelude::*;

use crate::util::validation::FieldErrors;

#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    let message = move || errors.with(|errs| errs.get(field).cloned());
    view! {
        <Show when=move || message().is_some()>
            <p class="field-error">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}
