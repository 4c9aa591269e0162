//! Admin approvals queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists accounts awaiting approval. Every approve/reject is followed by a
//! full re-fetch of the queue; rows are never removed locally.

#[cfg(test)]
#[path = "approvals_test.rs"]
mod approvals_test;

use leptos::prelude::*;

use crate::components::toasts::{notify_error, notify_success};
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::PendingUser;
use crate::state::approvals::{ApprovalsState, Decision, EMPTY_MESSAGE};
use crate::state::toasts::ToastState;

/// Fetch the pending queue.
///
/// # Errors
///
/// Returns the pipeline error.
pub async fn load_pending(client: &HttpClient) -> Result<Vec<PendingUser>, ApiError> {
    client.admin().pending_users().await
}

/// What followed an accepted decision.
#[derive(Debug, PartialEq)]
pub enum Decided {
    Reloaded(Vec<PendingUser>),
    /// The decision was applied but the queue fetch failed.
    ReloadFailed(ApiError),
}

/// Apply `decision` to account `id`, then re-fetch the queue.
///
/// # Errors
///
/// Returns the decision's own failure; the queue is not re-fetched then.
pub async fn decide_and_reload(client: &HttpClient, decision: Decision, id: &str) -> Result<Decided, ApiError> {
    match decision {
        Decision::Approve => client.admin().approve_user(id).await?,
        Decision::Reject => client.admin().reject_user(id).await?,
    }
    Ok(match load_pending(client).await {
        Ok(items) => Decided::Reloaded(items),
        Err(e) => Decided::ReloadFailed(e),
    })
}

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(ApprovalsState::default());

    let load_client = client.clone();
    Effect::new(move || {
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            match load_pending(&client).await {
                Ok(items) => state.update(|s| s.loaded(items)),
                Err(e) => {
                    notify_error(toasts, "load pending users", &e);
                    state.update(ApprovalsState::failed);
                }
            }
        });
    });

    let decide = move |decision: Decision, id: String| {
        if state.with_untracked(|s| s.busy_id.is_some()) {
            return;
        }
        state.update(|s| s.busy_id = Some(id.clone()));
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match decide_and_reload(&client, decision, &id).await {
                Ok(Decided::Reloaded(items)) => {
                    notify_success(toasts, decision.done_message());
                    state.update(|s| s.loaded(items));
                }
                Ok(Decided::ReloadFailed(e)) => {
                    notify_success(toasts, decision.done_message());
                    notify_error(toasts, "reload pending users", &e);
                    state.update(|s| s.settled(&id));
                }
                Err(e) => {
                    notify_error(toasts, "approval decision", &e);
                    state.update(ApprovalsState::failed);
                }
            }
        });
    };

    let row = move |user: PendingUser| {
        let id = user.id.clone();
        let busy_id = id.clone();
        let busy = move || state.with(|s| s.is_busy(&busy_id) || s.is_settled(&busy_id));
        let approve = decide.clone();
        let reject = decide.clone();
        let approve_id = id.clone();
        view! {
            <tr>
                <td>{user.name.clone().unwrap_or_default()}</td>
                <td>{user.email.clone()}</td>
                <td>{user.role.as_str()}</td>
                <td>{user.created_at.clone().unwrap_or_default()}</td>
                <td class="approvals__actions">
                    <button
                        class="btn btn--primary"
                        disabled=busy.clone()
                        on:click=move |_| approve(Decision::Approve, approve_id.clone())
                    >
                        {Decision::Approve.label()}
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=busy
                        on:click=move |_| reject(Decision::Reject, id.clone())
                    >
                        {Decision::Reject.label()}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <section class="page approvals">
            <h1>"Pending approvals"</h1>
            {move || {
                let current = state.get();
                if current.loading {
                    view! { <p class="page__status">"Loading…"</p> }.into_any()
                } else if current.is_empty() {
                    view! { <p class="page__empty">{EMPTY_MESSAGE}</p> }.into_any()
                } else {
                    let rows = current.items.into_iter().map(row.clone()).collect_view();
                    view! {
                        <table class="approvals__table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Registered"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
