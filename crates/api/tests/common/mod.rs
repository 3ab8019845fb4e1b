use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use civica_api::config::{ServerConfig, StorageBackend};
use civica_api::router::build_app_router;
use civica_api::state::AppState;
use civica_classifier::ClassifierClient;
use civica_db::models::profile::CreateProfile;
use civica_db::repositories::ProfileRepo;
use civica_storage::LocalStorage;

/// Build a test `ServerConfig` with safe defaults.
///
/// The classifier points at an unroutable address with a short timeout,
/// so every classification attempt degrades to "unavailable" quickly.
/// The upload size cap is lowered to 1 KiB so oversize rejection can be
/// tested without multi-megabyte request bodies.
pub fn test_config(upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        classifier_url: "http://127.0.0.1:1".to_string(),
        classifier_timeout: Duration::from_millis(200),
        storage: StorageBackend::Local {
            upload_dir: upload_dir.to_string_lossy().into_owned(),
            public_base_url: "http://localhost:3000/uploads".to_string(),
        },
        max_upload_bytes: 1024,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This calls the same [`build_app_router`] that `main.rs` uses, so
/// integration tests exercise the production middleware stack (CORS,
/// request ID, timeout, tracing, panic recovery). Uploaded images land
/// in a per-test temporary directory.
pub fn build_test_app(pool: PgPool) -> Router {
    let upload_dir = tempfile::tempdir()
        .expect("failed to create temp upload dir")
        .keep();
    let config = test_config(&upload_dir);

    let storage = Arc::new(LocalStorage::new(
        upload_dir,
        "http://localhost:3000/uploads",
    ));
    let classifier = Arc::new(ClassifierClient::new(
        config.classifier_url.clone(),
        config.classifier_timeout,
    ));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
        classifier,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the given URI.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a pre-built `multipart/form-data` body.
pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Multipart body builder
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Build a `multipart/form-data` request body from text fields and an
/// optional image part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    image: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((filename, content_type, bytes)) = image {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a citizen profile and return its id.
pub async fn create_citizen(pool: &PgPool, email: &str) -> i64 {
    let profile = ProfileRepo::insert(
        pool,
        &CreateProfile {
            email: email.to_string(),
            full_name: "Test Citizen".to_string(),
            phone: None,
            role: None,
        },
    )
    .await
    .unwrap();
    profile.id
}

/// Insert an admin profile and return its id.
pub async fn create_admin(pool: &PgPool, email: &str) -> i64 {
    let profile = ProfileRepo::insert(
        pool,
        &CreateProfile {
            email: email.to_string(),
            full_name: "Test Admin".to_string(),
            phone: None,
            role: Some("admin".to_string()),
        },
    )
    .await
    .unwrap();
    profile.id
}
