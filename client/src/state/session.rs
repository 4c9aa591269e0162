//! Session lifecycle for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is created once in `App`, injected through Leptos context, and
//! shared with the HTTP pipeline. It owns the in-memory [`Identity`] and is
//! the only writer of the [`TokenStore`].
//!
//! STATES
//! ======
//! `Unknown` → `Loading` → `Authenticated(identity)` | `Anonymous`.
//!
//! ORDERING
//! ========
//! Every login, logout and invalidation bumps a monotonic epoch. Requests
//! remember the epoch they were sent under; a 401 from an older epoch is
//! ignored so a late failure cannot wipe out a newer login. State is fully
//! cleared and listeners notified before any navigation is requested.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::logging::{log, warn};

use super::token_store::TokenStore;
use crate::net::http::HttpClient;
use crate::net::types::Identity;
use crate::paths;

/// Where the session currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionStatus {
    /// Nothing checked yet.
    #[default]
    Unknown,
    /// Identity fetch in flight.
    Loading,
    Authenticated(Identity),
    Anonymous,
}

impl SessionStatus {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// `false` while the outcome is still pending.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Authenticated(_) | Self::Anonymous)
    }
}

/// Requests route changes on behalf of the session.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Callback run after every state change.
pub type SessionListener = Arc<dyn Fn(&SessionStatus) + Send + Sync>;

/// Token plus the epoch it belongs to, read atomically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialSnapshot {
    pub token: Option<String>,
    pub epoch: u64,
}

struct SessionInner {
    status: SessionStatus,
    epoch: u64,
}

/// Explicit session manager; see the module docs.
pub struct Session {
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    inner: Mutex<SessionInner>,
    listeners: Mutex<Vec<SessionListener>>,
}

impl Session {
    pub fn new(tokens: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            tokens,
            navigator,
            inner: Mutex::new(SessionInner { status: SessionStatus::Unknown, epoch: 0 }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().status.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.lock().status.identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.lock().status, SessionStatus::Authenticated(_))
    }

    pub fn epoch(&self) -> u64 {
        self.lock().epoch
    }

    /// Current token and epoch, for attaching to an outbound request.
    pub fn credential(&self) -> CredentialSnapshot {
        let inner = self.lock();
        CredentialSnapshot { token: self.tokens.get(), epoch: inner.epoch }
    }

    /// Register `listener` and immediately replay the current status to it.
    pub fn subscribe(&self, listener: SessionListener) {
        listener(&self.status());
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    fn notify(&self, status: &SessionStatus) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(status);
        }
    }

    /// Resolve the session from the stored credential.
    ///
    /// Without a credential the session becomes `Anonymous` immediately.
    /// Otherwise the identity is fetched; any failure clears the credential.
    /// A result that arrives after a newer login/logout is discarded.
    pub async fn refresh(&self, client: &HttpClient) {
        let epoch = {
            let mut inner = self.lock();
            if self.tokens.get().is_none() {
                inner.status = SessionStatus::Anonymous;
                None
            } else {
                inner.status = SessionStatus::Loading;
                Some(inner.epoch)
            }
        };
        let Some(epoch) = epoch else {
            log!("session: no stored credential, anonymous");
            self.notify(&SessionStatus::Anonymous);
            return;
        };
        self.notify(&SessionStatus::Loading);

        let result = client.auth().profile().await;

        let status = {
            let mut inner = self.lock();
            if inner.epoch != epoch {
                log!("session: discarding identity fetched under epoch {epoch}");
                return;
            }
            match result {
                Ok(identity) => inner.status = SessionStatus::Authenticated(identity),
                Err(e) => {
                    warn!("session: identity fetch failed, clearing credential: {e}");
                    self.tokens.clear();
                    inner.status = SessionStatus::Anonymous;
                    inner.epoch += 1;
                }
            }
            inner.status.clone()
        };
        self.notify(&status);
    }

    /// Start a session with a token and identity the backend just issued,
    /// then go to the role's landing view.
    pub fn login(&self, token: &str, identity: Identity) {
        let landing = identity.role.landing_path();
        let status = {
            let mut inner = self.lock();
            self.tokens.set(token);
            inner.status = SessionStatus::Authenticated(identity);
            inner.epoch += 1;
            inner.status.clone()
        };
        log!("session: logged in, landing on {landing}");
        self.notify(&status);
        self.navigator.navigate(landing);
    }

    /// End the session and go to the login view.
    pub fn logout(&self) {
        self.clear();
        log!("session: logged out");
        self.notify(&SessionStatus::Anonymous);
        self.navigator.navigate(paths::LOGIN);
    }

    /// Drop the session after the backend rejected a request sent under
    /// `epoch`. Returns `false` (and changes nothing) when a newer session
    /// has started since.
    pub fn invalidate(&self, epoch: u64) -> bool {
        {
            let mut inner = self.lock();
            if inner.epoch != epoch {
                log!("session: ignoring stale 401 from epoch {epoch} (current {})", inner.epoch);
                return false;
            }
            self.tokens.clear();
            inner.status = SessionStatus::Anonymous;
            inner.epoch += 1;
        }
        warn!("session: backend rejected credential, signing out");
        self.notify(&SessionStatus::Anonymous);
        self.navigator.navigate(paths::LOGIN);
        true
    }

    /// Replace the in-memory identity after a profile change. No-op unless
    /// authenticated.
    pub fn update_identity(&self, identity: Identity) {
        let status = {
            let mut inner = self.lock();
            if !matches!(inner.status, SessionStatus::Authenticated(_)) {
                return;
            }
            inner.status = SessionStatus::Authenticated(identity);
            inner.status.clone()
        };
        self.notify(&status);
    }

    fn clear(&self) {
        let mut inner = self.lock();
        self.tokens.clear();
        inner.status = SessionStatus::Anonymous;
        inner.epoch += 1;
    }
}
