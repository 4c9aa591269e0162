//! Raw HTTP transport behind the request pipeline.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning [`ApiError::Unavailable`] since the
//! backend is only called from the browser.
//!
//! DESIGN
//! ======
//! The transport knows nothing about sessions or status codes. Credential
//! attachment and 401 handling live one layer up in `net::http`, so tests
//! can script responses with a mock transport and observe the pipeline.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::ApiError;

/// HTTP verbs the backend uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file picked for upload, held in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One field of a multipart form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

impl FormPart {
    pub fn text(name: &str, value: &str) -> Self {
        Self::Text { name: name.to_owned(), value: value.to_owned() }
    }

    pub fn file(name: &str, file: UploadFile) -> Self {
        Self::File { name: name.to_owned(), file }
    }
}

/// Request payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Pre-serialized JSON text.
    Json(String),
    Multipart(Vec<FormPart>),
}

/// A fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: RequestBody::Empty }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        if matches!(body, RequestBody::Json(_)) {
            self.headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        self.body = body;
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body text of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over the network.
///
/// Futures are not `Send`: browser fetch handles live on the single UI
/// thread.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Perform `request` and return whatever status the server produced.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Method as FetchMethod, RequestBuilder};

    use super::{ApiError, FormPart, HttpRequest, HttpResponse, Method, RequestBody};

    fn network(e: impl std::fmt::Display) -> ApiError {
        ApiError::Network(e.to_string())
    }

    fn js_network(e: wasm_bindgen::JsValue) -> ApiError {
        ApiError::Network(format!("{e:?}"))
    }

    pub(super) async fn send(request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => FetchMethod::GET,
            Method::Post => FetchMethod::POST,
            Method::Put => FetchMethod::PUT,
            Method::Delete => FetchMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(raw) => builder.body(raw),
            RequestBody::Multipart(parts) => builder.body(form_data(&parts)?),
        }
        .map_err(network)?;

        let resp = built.send().await.map_err(network)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network)?;
        Ok(HttpResponse { status, body })
    }

    fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(js_network)?;
        for part in parts {
            match part {
                FormPart::Text { name, value } => {
                    form.append_with_str(name, value).map_err(js_network)?;
                }
                FormPart::File { name, file } => {
                    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                    let sequence = js_sys::Array::new();
                    sequence.push(&bytes);
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&file.content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                        .map_err(js_network)?;
                    form.append_with_blob_and_filename(name, &blob, &file.file_name)
                        .map_err(js_network)?;
                }
            }
        }
        Ok(form)
    }
}
