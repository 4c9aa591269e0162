//! Client configuration baked in at build time.
//!
//! DESIGN
//! ======
//! Values come from `FITFLOW_*` environment variables captured with
//! `option_env!` so the SSR and WASM builds see the same settings. Parsing is
//! a pure function over a lookup closure so tests never touch process env.
//!
//! Image hosting is optional: when either Cloudinary value is missing the
//! client falls back to backend-proxied uploads instead of failing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_UPLOAD_PATH: &str = "/upload";

pub const API_URL_VAR: &str = "FITFLOW_API_URL";
pub const UPLOAD_PATH_VAR: &str = "FITFLOW_UPLOAD_PATH";
pub const CLOUD_NAME_VAR: &str = "FITFLOW_CLOUDINARY_CLOUD_NAME";
pub const UPLOAD_PRESET_VAR: &str = "FITFLOW_CLOUDINARY_UPLOAD_PRESET";

/// Configuration errors detected while parsing client settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must start with '/', got {value:?}")]
    InvalidPath { var: &'static str, value: String },
}

/// Credentials for direct uploads to Cloudinary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

/// Settings every page reads from context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash.
    pub api_base_url: String,
    /// Backend path accepting proxied image uploads.
    pub upload_path: String,
    /// Direct-upload settings, `None` when image hosting is not configured.
    pub cloudinary: Option<CloudinaryConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            upload_path: DEFAULT_UPLOAD_PATH.to_owned(),
            cloudinary: None,
        }
    }
}

impl AppConfig {
    /// Build config from variables captured when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured URL or path is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_URL_VAR => option_env!("FITFLOW_API_URL"),
                UPLOAD_PATH_VAR => option_env!("FITFLOW_UPLOAD_PATH"),
                CLOUD_NAME_VAR => option_env!("FITFLOW_CLOUDINARY_CLOUD_NAME"),
                UPLOAD_PRESET_VAR => option_env!("FITFLOW_CLOUDINARY_UPLOAD_PRESET"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is not http(s) or the upload path is
    /// not absolute.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base_url = match get(API_URL_VAR) {
            Some(url) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidUrl { var: API_URL_VAR, value: url });
                }
                url.trim_end_matches('/').to_owned()
            }
            None => DEFAULT_API_URL.to_owned(),
        };

        let upload_path = match get(UPLOAD_PATH_VAR) {
            Some(path) if path.starts_with('/') => path,
            Some(path) => return Err(ConfigError::InvalidPath { var: UPLOAD_PATH_VAR, value: path }),
            None => DEFAULT_UPLOAD_PATH.to_owned(),
        };

        let cloudinary = match (get(CLOUD_NAME_VAR), get(UPLOAD_PRESET_VAR)) {
            (Some(cloud_name), Some(upload_preset)) => Some(CloudinaryConfig { cloud_name, upload_preset }),
            _ => None,
        };

        Ok(Self { api_base_url, upload_path, cloudinary })
    }

    /// Whether images can be sent straight to the hosting service.
    pub fn direct_upload_enabled(&self) -> bool {
        self.cloudinary.is_some()
    }
}
