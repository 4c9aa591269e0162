//! Error type shared by the HTTP pipeline, typed API clients, and uploads.
//!
//! ERROR HANDLING
//! ==============
//! API helpers never catch these; the user-facing action that started the
//! request turns them into a notification via [`ApiError::user_message`].
//! `Unauthorized` is special: by the time a caller sees it the session has
//! already been invalidated by the HTTP wrapper. `StaleSession` is a 401
//! that arrived after a newer login; the current session is untouched and
//! nothing is shown to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a backend or image-hosting request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401.
    #[error("not authenticated")]
    Unauthorized,

    /// The backend answered 401 to a request sent under an older session.
    #[error("stale 401 from a previous session")]
    StaleSession,

    /// The backend answered 403 (role or approval rejected).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Any other non-success status.
    #[error("request failed: status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The image hosting service rejected an upload.
    #[error("upload rejected: {0}")]
    Upload(String),

    /// Browser-only functionality invoked during server rendering.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "error")]
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-success response, pulling `message` from a JSON body
    /// when the backend sends one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_default();
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(message),
            _ => Self::Status { status, message },
        }
    }

    /// Text suitable for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            Self::StaleSession => String::new(),
            Self::Forbidden(message) if !message.is_empty() => message.clone(),
            Self::Forbidden(_) => "You are not allowed to do that.".to_owned(),
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status, .. } => format!("Request failed (status {status})."),
            Self::Network(_) => "Network error, please try again.".to_owned(),
            Self::Parse(_) => "Unexpected response from the server.".to_owned(),
            Self::Upload(message) => format!("Image upload failed: {message}"),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }

    /// Whether the failure deserves a notification. Stale 401s do not.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::StaleSession)
    }
}

fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|m| !m.trim().is_empty())
}
