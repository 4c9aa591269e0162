//! Image upload with a pluggable destination.
//!
//! DESIGN
//! ======
//! Pages only see [`ImageUploader`]. When Cloudinary is configured images go
//! straight to the hosting service over the raw transport (no backend
//! credential leaves the app); otherwise they are proxied through the
//! backend via the authenticated pipeline. A missing image-hosting setup is
//! therefore never fatal.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::sync::Arc;

use serde::Deserialize;

use super::error::ApiError;
use super::http::HttpClient;
use super::transport::{FormPart, HttpRequest, Method, RequestBody, Transport, UploadFile};
use crate::config::{AppConfig, CloudinaryConfig};

/// Stores an image and returns its public URL.
#[async_trait::async_trait(?Send)]
pub trait ImageUploader: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ApiError::Upload`] when the host rejects the file, or the
    /// transport/pipeline error.
    async fn upload(&self, file: UploadFile) -> Result<String, ApiError>;

    /// Short label for logs and the upload form.
    fn describe(&self) -> &'static str;
}

/// Pick the upload strategy for `config`.
pub fn select_uploader(config: &AppConfig, client: &HttpClient) -> Arc<dyn ImageUploader> {
    match &config.cloudinary {
        Some(cloudinary) => Arc::new(CloudinaryUploader::new(cloudinary.clone(), client.transport().clone())),
        None => Arc::new(BackendUploader::new(client.clone(), &config.upload_path)),
    }
}

// =============================================================================
// DIRECT (CLOUDINARY)
// =============================================================================

pub struct CloudinaryUploader {
    config: CloudinaryConfig,
    transport: Arc<dyn Transport>,
}

#[derive(Debug, Deserialize)]
struct CloudinaryResponse {
    secure_url: Option<String>,
    error: Option<CloudinaryError>,
}

#[derive(Debug, Deserialize)]
struct CloudinaryError {
    message: String,
}

pub fn cloudinary_endpoint(cloud_name: &str) -> String {
    format!("https://api.cloudinary.com/v1_1/{cloud_name}/image/upload")
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }
}

#[async_trait::async_trait(?Send)]
impl ImageUploader for CloudinaryUploader {
    async fn upload(&self, file: UploadFile) -> Result<String, ApiError> {
        let parts = vec![
            FormPart::file("file", file),
            FormPart::text("upload_preset", &self.config.upload_preset),
        ];
        let request = HttpRequest::new(Method::Post, cloudinary_endpoint(&self.config.cloud_name))
            .with_body(RequestBody::Multipart(parts));
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let message = serde_json::from_str::<CloudinaryResponse>(&response.body)
                .ok()
                .and_then(|parsed| parsed.error)
                .map_or_else(|| format!("status {}", response.status), |error| error.message);
            return Err(ApiError::Upload(message));
        }

        let parsed: CloudinaryResponse = serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))?;
        if let Some(error) = parsed.error {
            return Err(ApiError::Upload(error.message));
        }
        parsed
            .secure_url
            .ok_or_else(|| ApiError::Upload(format!("status {}", response.status)))
    }

    fn describe(&self) -> &'static str {
        "direct"
    }
}

// =============================================================================
// BACKEND-PROXIED
// =============================================================================

pub struct BackendUploader {
    client: HttpClient,
    path: String,
}

#[derive(Debug, Deserialize)]
struct BackendUploadResponse {
    #[serde(alias = "secure_url", alias = "imageUrl")]
    url: String,
}

impl BackendUploader {
    pub fn new(client: HttpClient, path: &str) -> Self {
        Self { client, path: path.to_owned() }
    }
}

#[async_trait::async_trait(?Send)]
impl ImageUploader for BackendUploader {
    async fn upload(&self, file: UploadFile) -> Result<String, ApiError> {
        let resp: BackendUploadResponse = self
            .client
            .post_multipart(&self.path, vec![FormPart::file("image", file)])
            .await?;
        Ok(resp.url)
    }

    fn describe(&self) -> &'static str {
        "via server"
    }
}

/// Read a browser `File` picked in an `<input type="file">`.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the browser fails to read the file.
#[cfg(feature = "hydrate")]
pub async fn read_web_file(file: &web_sys::File) -> Result<UploadFile, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile { file_name: file.name(), content_type: file.type_(), bytes })
}
