//! Admin overview: every account, counted by role.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::toasts::notify_error;
use crate::net::http::HttpClient;
use crate::net::types::{Identity, Role};
use crate::paths;
use crate::state::toasts::ToastState;

/// Account totals shown above the user table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserSummary {
    pub admins: usize,
    pub stylers: usize,
    pub partners: usize,
    pub awaiting_approval: usize,
}

pub fn summarize(users: &[Identity]) -> UserSummary {
    users.iter().fold(UserSummary::default(), |mut acc, user| {
        match user.role {
            Role::Admin => acc.admins += 1,
            Role::Styler => acc.stylers += 1,
            Role::Partner => acc.partners += 1,
        }
        if !user.is_approved {
            acc.awaiting_approval += 1;
        }
        acc
    })
}

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let users = RwSignal::new(Vec::<Identity>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.admin().users().await {
                Ok(list) => users.set(list),
                Err(e) => notify_error(toasts, "load users", &e),
            }
            loading.set(false);
        });
    });

    let summary = Memo::new(move |_| users.with(|list| summarize(list)));

    view! {
        <section class="page admin-home">
            <h1>"Admin overview"</h1>
            <div class="stat-grid">
                <div class="stat">"Stylers: " {move || summary.get().stylers}</div>
                <div class="stat">"Partners: " {move || summary.get().partners}</div>
                <div class="stat">"Admins: " {move || summary.get().admins}</div>
                <div class="stat">
                    <a href=paths::ADMIN_APPROVALS>"Awaiting approval: " {move || summary.get().awaiting_approval}</a>
                </div>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__status">"Loading…"</p> }>
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Approved"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || users.get() key=|user| user.id.clone() let:user>
                            <tr>
                                <td>{user.display_name().to_owned()}</td>
                                <td>{user.email.clone()}</td>
                                <td>{user.role.as_str()}</td>
                                <td>{if user.is_approved { "yes" } else { "no" }}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
