//! Login page: email + password against `/auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login hands the backend's token and user to
//! `Session::login`, which persists the credential and navigates to the
//! role's landing view. Signed-in visitors are bounced to that view.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::components::toasts::{notify, notify_error};
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::LoginRequest;
use crate::paths;
use crate::state::auth::AuthState;
use crate::state::toasts::{ToastKind, ToastState};
use crate::util::auth::signed_in_landing;
use crate::util::validation::{FieldErrors, validate_login};

/// Authenticate and start the session.
///
/// # Errors
///
/// Returns the backend failure; the session is untouched in that case.
pub async fn submit_login(client: &HttpClient, request: &LoginRequest) -> Result<(), ApiError> {
    let response = client.auth().login(&request.email, &request.password).await?;
    client.session().login(&response.token, response.user);
    Ok(())
}

/// Message for a failed login. A 401 here means bad credentials, not an
/// expired session.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Invalid email or password.".to_owned(),
        ApiError::Status { status: 400, message } if message.is_empty() => "Invalid email or password.".to_owned(),
        other => other.user_message(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(landing) = signed_in_landing(&auth.get()) {
            navigate(landing, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
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
            if let Err(e) = submit_login(&client, &request).await {
                if matches!(e, ApiError::Unauthorized) {
                    notify(toasts, ToastKind::Error, login_error_message(&e));
                } else {
                    notify_error(toasts, "login", &e);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"FitFlow"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="form-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="email"/>
                    <input
                        class="form-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="password"/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in…" } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=paths::REGISTER>"Register"</a>
                </p>
            </div>
        </div>
    }
}
