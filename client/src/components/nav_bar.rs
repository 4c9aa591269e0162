//! Top navigation with role-specific links and logout.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::net::http::HttpClient;
use crate::net::types::Role;
use crate::paths;
use crate::state::auth::AuthState;

/// `(path, label)` pairs shown to a signed-in `role`.
pub fn nav_links(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Admin => &[
            (paths::ADMIN_HOME, "Overview"),
            (paths::ADMIN_APPROVALS, "Approvals"),
            (paths::PROFILE, "Profile"),
        ],
        Role::Styler => &[
            (paths::STYLER_HOME, "Wardrobe"),
            (paths::OCCASIONS, "Occasions"),
            (paths::PROFILE, "Profile"),
        ],
        Role::Partner => &[
            (paths::PARTNER_HOME, "Catalog"),
            (paths::STYLER_HOME, "Shop"),
            (paths::OCCASIONS, "Occasions"),
            (paths::PROFILE, "Profile"),
        ],
    }
}

/// Header bar; renders nothing useful until someone is signed in.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<HttpClient>();

    let on_logout = move |_| client.session().logout();

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=paths::HOME>"FitFlow"</a>
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        let links = nav_links(user.role)
                            .iter()
                            .map(|(href, label)| view! { <a class="nav-bar__link" href=*href>{*label}</a> })
                            .collect_view();
                        view! {
                            <nav class="nav-bar__links">{links}</nav>
                            <span class="nav-bar__user">
                                {user.display_name().to_owned()}
                                {(!user.is_approved).then_some(" (pending approval)")}
                            </span>
                        }
                    })
            }}
            <Show when=move || auth.get().user.is_some()>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>"Log out"</button>
            </Show>
        </header>
    }
}
