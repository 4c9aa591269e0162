//! Toast stack and the helpers pages use to raise notifications.
//!
//! ERROR HANDLING
//! ==============
//! Every caught API failure goes through [`notify_error`], which logs it and
//! shows the user-facing text. Nothing is swallowed silently.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::toasts::{ToastKind, ToastState};

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let ttl = std::time::Duration::from_millis(u64::from(crate::state::toasts::TOAST_TTL_MS));
        gloo_timers::future::sleep(ttl).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

/// Log `err` under `context` and show its user-facing message.
pub fn notify_error(toasts: RwSignal<ToastState>, context: &str, err: &ApiError) {
    warn!("{context}: {err}");
    if err.is_user_visible() {
        notify(toasts, ToastKind::Error, err.user_message());
    }
}

/// Fixed stack rendering the current toasts; click to dismiss.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <div
                    class=toast.kind.class()
                    on:click=move |_| toasts.update(|state| state.dismiss(toast.id))
                >
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
