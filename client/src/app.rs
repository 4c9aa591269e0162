//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session, the HTTP client and the uploader once and
//! shares them through context. A session listener mirrors every status
//! change into the `AuthState` signal that guards and components read.

use std::sync::Arc;

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::components::toasts::ToastHost;
use crate::config::AppConfig;
use crate::net::http::HttpClient;
use crate::net::transport::BrowserTransport;
use crate::net::types::Role;
use crate::net::upload::select_uploader;
use crate::pages::{
    admin::AdminHomePage, approvals::ApprovalsPage, home::HomePage, login::LoginPage, occasions::OccasionsPage,
    partner::PartnerPage, profile::ProfilePage, register::RegisterPage, styler::StylerPage,
};
use crate::paths;
use crate::state::auth::AuthState;
use crate::state::session::{Session, SessionStatus};
use crate::state::toasts::ToastState;
use crate::state::token_store::default_token_store;
use crate::util::navigation::{NavigationBridge, RouterNavigator};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        warn!("config: {e}; falling back to defaults");
        AppConfig::default()
    });

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let navigator = RouterNavigator::new();

    let session = Arc::new(Session::new(default_token_store(), Arc::new(navigator)));
    session.subscribe(Arc::new(move |status: &SessionStatus| auth.set(AuthState::from_status(status))));
    let client = HttpClient::new(&config.api_base_url, Arc::new(BrowserTransport), session);
    let uploader = select_uploader(&config, &client);

    provide_context(auth);
    provide_context(toasts);
    provide_context(client.clone());
    provide_context(uploader);

    // Resolve the stored credential once the app is running in the browser.
    Effect::new(move || {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            client.session().refresh(&client).await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fitflow.css"/>
        <Title text="FitFlow"/>

        <Router>
            <NavigationBridge navigator=navigator/>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RouteGuard roles=paths::ADMIN_ROLES><AdminHomePage/></RouteGuard> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("approvals"))
                        view=|| view! { <RouteGuard roles=paths::ADMIN_ROLES><ApprovalsPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("styler")
                        view=|| view! { <RouteGuard roles=paths::SHOPPER_ROLES><StylerPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("partner")
                        view=|| view! { <RouteGuard roles=paths::PARTNER_ROLES><PartnerPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("occasions")
                        view=|| view! { <RouteGuard roles=paths::SHOPPER_ROLES><OccasionsPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RouteGuard roles=Role::ALL><ProfilePage/></RouteGuard> }
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
