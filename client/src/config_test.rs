use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
    assert_eq!(cfg.upload_path, DEFAULT_UPLOAD_PATH);
    assert!(!cfg.direct_upload_enabled());
}

#[test]
fn from_lookup_trims_trailing_slash_from_api_url() {
    let cfg = AppConfig::from_lookup(lookup(&[(API_URL_VAR, "https://api.fitflow.test/v1/")])).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.fitflow.test/v1");
}

#[test]
fn from_lookup_rejects_non_http_api_url() {
    let err = AppConfig::from_lookup(lookup(&[(API_URL_VAR, "ftp://nope")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUrl { var: API_URL_VAR, value: "ftp://nope".to_owned() });
}

#[test]
fn from_lookup_rejects_relative_upload_path() {
    let err = AppConfig::from_lookup(lookup(&[(UPLOAD_PATH_VAR, "upload")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPath { .. }));
}

#[test]
fn from_lookup_enables_cloudinary_when_both_values_present() {
    let cfg = AppConfig::from_lookup(lookup(&[(CLOUD_NAME_VAR, "demo"), (UPLOAD_PRESET_VAR, "unsigned")])).unwrap();
    assert_eq!(
        cfg.cloudinary,
        Some(CloudinaryConfig { cloud_name: "demo".to_owned(), upload_preset: "unsigned".to_owned() })
    );
    assert!(cfg.direct_upload_enabled());
}

#[test]
fn from_lookup_disables_cloudinary_when_preset_missing() {
    let cfg = AppConfig::from_lookup(lookup(&[(CLOUD_NAME_VAR, "demo")])).unwrap();
    assert_eq!(cfg.cloudinary, None);
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = AppConfig::from_lookup(lookup(&[(CLOUD_NAME_VAR, "  "), (UPLOAD_PRESET_VAR, "p"), (API_URL_VAR, "")]))
        .unwrap();
    assert_eq!(cfg.cloudinary, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
}
