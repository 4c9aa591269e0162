//! Shared fixtures for unit tests: scripted transport, recording navigator,
//! and a client wired to an in-memory session.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::net::types::{Identity, Role};
use crate::state::session::{Navigator, Session};
use crate::state::token_store::{MemoryTokenStore, TokenStore};

pub const API: &str = "http://api.test";

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    before_reply: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl MockTransport {
    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body.to_string())));
    }

    pub fn push_status(&self, status: u16) {
        self.push_text(status, "");
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn push_error(&self, err: ApiError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Run `hook` once, after the next request is recorded and before its
    /// reply is returned.
    pub fn before_next_reply(&self, hook: impl FnOnce() + Send + 'static) {
        *self.before_reply.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request sent")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        let hook = self.before_reply.lock().unwrap().take();
        if let Some(hook) = hook {
            hook();
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// Navigator that remembers every requested path.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.paths().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

/// Client plus handles to everything it touches.
pub struct Harness {
    pub client: HttpClient,
    pub transport: Arc<MockTransport>,
    pub tokens: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_tokens(MemoryTokenStore::default())
    }

    pub fn with_token(token: &str) -> Self {
        Self::with_tokens(MemoryTokenStore::with_token(token))
    }

    fn with_tokens(tokens: MemoryTokenStore) -> Self {
        let transport = Arc::new(MockTransport::default());
        let tokens = Arc::new(tokens);
        let navigator = Arc::new(RecordingNavigator::default());
        let session = Arc::new(Session::new(tokens.clone(), navigator.clone()));
        let client = HttpClient::new(API, transport.clone(), session);
        Self { client, transport, tokens, navigator }
    }

    pub fn session(&self) -> &Arc<Session> {
        self.client.session()
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }
}

pub fn identity(id: &str, role: Role) -> Identity {
    Identity {
        id: id.to_owned(),
        email: format!("{id}@fitflow.test"),
        role,
        name: Some(format!("User {id}")),
        phone: None,
        avatar: None,
        is_approved: true,
        favorites: Vec::new(),
    }
}

pub fn identity_json(id: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "email": format!("{id}@fitflow.test"),
        "role": role,
        "name": format!("User {id}"),
        "isApproved": true
    })
}
