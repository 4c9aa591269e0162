//! The single request pipeline every backend call goes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Outbound: attach `Authorization: Bearer <token>` when the session holds a
//! credential. Inbound: a 401 invalidates the session (credential and
//! identity cleared, redirect to login) before the error reaches the
//! caller, so pages never special-case it. Every other failure passes
//! through unchanged.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{FormPart, HttpRequest, HttpResponse, Method, RequestBody, Transport};
use crate::state::session::Session;

/// Shared handle to the backend. Cheap to clone.
#[derive(Clone)]
pub struct HttpClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    session: Arc<Session>,
}

impl HttpClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, session: Arc<Session>) -> Self {
        Self { base_url: Arc::from(base_url.trim_end_matches('/')), transport, session }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Raw transport, for third-party calls that must not carry the
    /// backend credential.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Send a request through the pipeline and return the successful
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] after invalidating the session on
    /// 401, [`ApiError::StaleSession`] when the 401 belongs to a session that
    /// has since been replaced, the classified status error for other non-2xx
    /// responses, or the transport's network error.
    pub async fn send(&self, method: Method, path: &str, body: RequestBody) -> Result<HttpResponse, ApiError> {
        let credential = self.session.credential();
        let mut request = HttpRequest::new(method, self.url(path)).with_body(body);
        if let Some(token) = credential.token.as_deref() {
            request = request.with_header("Authorization", &bearer(token));
        }

        let response = self.transport.send(request).await?;
        if response.status == 401 {
            return Err(if self.session.invalidate(credential.epoch) {
                ApiError::Unauthorized
            } else {
                ApiError::StaleSession
            });
        }
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }

    /// `GET` and decode a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::send`]; also [`ApiError::Parse`] on a malformed body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path, RequestBody::Empty).await?;
        decode(&response)
    }

    /// `POST` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get_json`].
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(Method::Post, path, encode(body)?).await?;
        decode(&response)
    }

    /// `PUT` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get_json`].
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(Method::Put, path, encode(body)?).await?;
        decode(&response)
    }

    /// Send a body-less request and ignore the reply body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.send(method, path, RequestBody::Empty).await.map(|_| ())
    }

    /// `POST` a multipart form and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get_json`].
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, parts: Vec<FormPart>) -> Result<T, ApiError> {
        let response = self.send(Method::Post, path, RequestBody::Multipart(parts)).await?;
        decode(&response)
    }
}

/// `Authorization` header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn encode<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub(crate) fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
}
