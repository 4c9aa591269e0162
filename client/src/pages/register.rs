//! Registration page for stylers and partners.
//!
//! Partners start unapproved; the backend still issues a token, and the
//! pending status is shown in the nav bar until an admin approves them.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::components::toasts::{notify_error, notify_success};
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::RegisterRequest;
use crate::paths;
use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;
use crate::util::auth::signed_in_landing;
use crate::util::validation::{FieldErrors, REGISTERABLE_ROLES, RegisterForm, validate_register};

/// Create the account and start a session with the issued token.
///
/// # Errors
///
/// Returns the backend failure (e.g. email already taken).
pub async fn submit_register(client: &HttpClient, request: &RegisterRequest) -> Result<(), ApiError> {
    let response = client.auth().register(request).await?;
    client.session().login(&response.token, response.user);
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(landing) = signed_in_landing(&auth.get()) {
            navigate(landing, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(REGISTERABLE_ROLES[0].to_owned());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            role: role.get_untracked(),
        };
        let request = match validate_register(&form) {
            Ok(request) => request,
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match submit_register(&client, &request).await {
                Ok(()) => notify_success(toasts, "Welcome to FitFlow"),
                Err(e) => notify_error(toasts, "register", &e),
            }
            busy.set(false);
        });
    };

    let text_input = move |kind: &'static str, placeholder: &'static str, field: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="form-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError errors=errors field=field/>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {text_input("text", "Full name", "name", name)}
                    {text_input("email", "you@example.com", "email", email)}
                    {text_input("password", "Password", "password", password)}
                    {text_input("password", "Confirm password", "confirm_password", confirm)}
                    <select
                        class="form-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {REGISTERABLE_ROLES
                            .iter()
                            .map(|r| view! { <option value=*r>{*r}</option> })
                            .collect_view()}
                    </select>
                    <FieldError errors=errors field="role"/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating…" } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=paths::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
