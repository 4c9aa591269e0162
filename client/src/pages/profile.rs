//! Profile editor for any signed-in account.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::components::image_picker::ImagePicker;
use crate::components::toasts::{notify_error, notify_success};
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{Identity, ProfileUpdate};
use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::validation::{FieldErrors, ProfileForm, validate_profile};

/// Form prefilled from the current identity.
pub fn form_from_identity(identity: &Identity) -> ProfileForm {
    ProfileForm {
        name: identity.name.clone().unwrap_or_default(),
        phone: identity.phone.clone().unwrap_or_default(),
        avatar: identity.avatar.clone().unwrap_or_default(),
    }
}

/// Save the profile and replace the session identity with the result.
///
/// # Errors
///
/// Returns the pipeline error; the identity is unchanged in that case.
pub async fn save_profile(client: &HttpClient, update: &ProfileUpdate) -> Result<Identity, ApiError> {
    let identity = client.users().update_profile(update).await?;
    client.session().update_identity(identity.clone());
    Ok(identity)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let initial = auth.with_untracked(|a| a.user.as_ref().map(form_from_identity)).unwrap_or_default();
    let name = RwSignal::new(initial.name);
    let phone = RwSignal::new(initial.phone);
    let avatar = RwSignal::new(initial.avatar);
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProfileForm { name: name.get_untracked(), phone: phone.get_untracked(), avatar: avatar.get_untracked() };
        let update = match validate_profile(&form) {
            Ok(update) => update,
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match save_profile(&client, &update).await {
                Ok(_) => notify_success(toasts, "Profile updated"),
                Err(e) => notify_error(toasts, "update profile", &e),
            }
            busy.set(false);
        });
    };

    let email = move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let role = move || auth.with(|a| a.user.as_ref().map(|u| u.role.as_str()).unwrap_or_default());

    view! {
        <section class="page profile">
            <h1>"Profile"</h1>
            <p class="profile__meta">{email} " · " {role}</p>
            <form class="profile-form" on:submit=on_submit>
                <label class="form-label">
                    "Name"
                    <input
                        class="form-input"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="name"/>
                <label class="form-label">
                    "Phone"
                    <input
                        class="form-input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="phone"/>
                <ImagePicker value=avatar label="Avatar"/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving…" } else { "Save" }}
                </button>
            </form>
        </section>
    }
}
