//! Router-backed [`Navigator`] for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` lives outside the component tree and cannot call
//! `use_navigate` itself. It writes the requested path into a signal; the
//! [`NavigationBridge`] mounted inside `<Router>` performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Navigator;

/// Navigator that defers to [`NavigationBridge`].
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    target: RwSignal<Option<String>>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        Self { target: RwSignal::new(None) }
    }

    pub fn target(&self) -> RwSignal<Option<String>> {
        self.target
    }
}

impl Default for RouterNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        self.target.set(Some(path.to_owned()));
    }
}

/// Performs navigations requested through a [`RouterNavigator`]. Must be
/// rendered inside `<Router>`.
#[component]
pub fn NavigationBridge(navigator: RouterNavigator) -> impl IntoView {
    let navigate = use_navigate();
    let target = navigator.target();
    Effect::new(move || {
        let Some(path) = target.get() else {
            return;
        };
        target.set(None);
        navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}
