use super::*;
use crate::test_helpers::Harness;
use futures::executor::block_on;
use serde_json::json;

fn photo() -> UploadFile {
    UploadFile { file_name: "look.jpg".to_owned(), content_type: "image/jpeg".to_owned(), bytes: vec![0xff, 0xd8] }
}

fn cloudinary() -> CloudinaryConfig {
    CloudinaryConfig { cloud_name: "demo".to_owned(), upload_preset: "fitflow".to_owned() }
}

// =============================================================
// Strategy selection
// =============================================================

#[test]
fn select_uploader_goes_direct_when_cloudinary_configured() {
    let h = Harness::new();
    let config = AppConfig { cloudinary: Some(cloudinary()), ..AppConfig::default() };
    assert_eq!(select_uploader(&config, &h.client).describe(), "direct");
}

#[test]
fn select_uploader_falls_back_to_backend_without_cloudinary() {
    let h = Harness::new();
    assert_eq!(select_uploader(&AppConfig::default(), &h.client).describe(), "via server");
}

// =============================================================
// Direct upload
// =============================================================

#[test]
fn cloudinary_upload_posts_file_and_preset_without_credential() {
    let h = Harness::with_token("t1");
    h.transport.push_json(200, json!({ "secure_url": "https://res.cloudinary.com/demo/look.jpg" }));
    let uploader = CloudinaryUploader::new(cloudinary(), h.transport.clone());

    let url = block_on(uploader.upload(photo())).unwrap();

    assert_eq!(url, "https://res.cloudinary.com/demo/look.jpg");
    let req = h.transport.last_request();
    assert_eq!(req.url, "https://api.cloudinary.com/v1_1/demo/image/upload");
    assert_eq!(req.header("Authorization"), None);
    assert_eq!(
        req.body,
        RequestBody::Multipart(vec![FormPart::file("file", photo()), FormPart::text("upload_preset", "fitflow")])
    );
}

#[test]
fn cloudinary_error_object_becomes_upload_error() {
    let h = Harness::new();
    h.transport.push_json(400, json!({ "error": { "message": "Upload preset not found" } }));
    let uploader = CloudinaryUploader::new(cloudinary(), h.transport.clone());

    let err = block_on(uploader.upload(photo())).unwrap_err();

    assert_eq!(err, ApiError::Upload("Upload preset not found".to_owned()));
}

#[test]
fn cloudinary_html_error_page_is_upload_error_with_status() {
    let h = Harness::new();
    h.transport.push_text(502, "<html><body>Bad Gateway</body></html>");
    let uploader = CloudinaryUploader::new(cloudinary(), h.transport.clone());

    let err = block_on(uploader.upload(photo())).unwrap_err();

    assert_eq!(err, ApiError::Upload("status 502".to_owned()));
}

// =============================================================
// Backend-proxied upload
// =============================================================

#[test]
fn backend_upload_goes_through_authenticated_pipeline() {
    let h = Harness::with_token("t1");
    h.transport.push_json(200, json!({ "url": "https://cdn.fitflow.test/look.jpg" }));
    let uploader = BackendUploader::new(h.client.clone(), "/upload");

    let url = block_on(uploader.upload(photo())).unwrap();

    assert_eq!(url, "https://cdn.fitflow.test/look.jpg");
    let req = h.transport.last_request();
    assert_eq!(req.url, "http://api.test/upload");
    assert_eq!(req.header("Authorization"), Some("Bearer t1"));
}
