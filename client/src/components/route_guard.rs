//! Role gate wrapped around every protected page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardOutcome, evaluate};

/// Render `children` only when the signed-in user holds one of `roles`.
///
/// While the session resolves a neutral placeholder is shown. Anonymous
/// visitors are sent to login; other roles to their own landing view.
#[component]
pub fn RouteGuard(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let outcome = Memo::new(move |_| evaluate(&auth.get(), roles));

    Effect::new(move || {
        if let Some(path) = outcome.get().redirect() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let placeholder = move || {
        let text = match outcome.get() {
            GuardOutcome::Pending => "Loading…",
            GuardOutcome::Denied { .. } => "You do not have access to this page.",
            GuardOutcome::RedirectToLogin | GuardOutcome::Allow => "",
        };
        view! { <p class="guard-placeholder">{text}</p> }
    };

    view! {
        <Show when=move || outcome.get() == GuardOutcome::Allow fallback=placeholder>
            {children()}
        </Show>
    }
}
