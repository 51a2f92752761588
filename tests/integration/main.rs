//! Integration tests for the catalog backend.
//!
//! The Firestore connectivity tests require real GCP credentials and are
//! ignored by default. Run with: cargo test --test integration -- --ignored
//!
//! Everything else runs offline against the in-process router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use catalog_backend::api::{create_router, AppState};
use catalog_backend::config::Config;
use catalog_backend::firebase;

/// Config pointing at a credential file that does not exist.
fn config_without_credentials() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 5000,
        credentials_path: "tests/fixtures/no-such-serviceAccountKey.json".to_string(),
        firestore_database: "catalog".to_string(),
        rust_log: "info".to_string(),
    }
}

/// Config pointing at the fixture credential file.
fn config_with_fixture_credentials() -> Config {
    Config {
        credentials_path: format!(
            "{}/tests/fixtures/service-account.json",
            env!("CARGO_MANIFEST_DIR")
        ),
        ..config_without_credentials()
    }
}

#[tokio::test]
async fn root_serves_fixed_text() {
    let app = create_router(AppState::new(None));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Python Backend is Running!");
}

#[tokio::test]
async fn health_serves_fixed_json() {
    let app = create_router(AppState::new(None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "status": "success",
            "message": "Python backend is connected!"
        })
    );
}

#[tokio::test]
async fn health_is_input_independent() {
    // Same response no matter what headers the client sends.
    for headers in [
        vec![],
        vec![("x-forwarded-for", "10.0.0.1")],
        vec![("accept", "application/xml"), ("x-custom", "anything")],
    ] {
        let app = create_router(AppState::new(None));

        let mut builder = Request::builder().uri("/api/health");
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Python backend is connected!");
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = create_router(AppState::new(None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cross_origin_requests_are_permitted() {
    let app = create_router(AppState::new(None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://catalog.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn startup_without_credential_file_degrades_cleanly() {
    let config = config_without_credentials();

    let handle = firebase::connect_firestore(&config).await.unwrap();

    assert!(handle.is_none());

    // The server still comes up and serves both routes in this mode.
    let app = create_router(AppState::new(handle));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_context_survives_repeated_initialization() {
    let config = config_with_fixture_credentials();
    let key_path = std::path::Path::new(&config.credentials_path);

    let first = firebase::initialize_app(key_path).await.unwrap();
    let second = firebase::initialize_app(key_path).await.unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.project_id(), "catalog-demo");
    assert_eq!(
        first.client_email(),
        "backend@catalog-demo.iam.gserviceaccount.com"
    );
}

/// Requires a real service-account key and network access to GCP.
#[tokio::test]
#[ignore = "requires GCP credentials"]
async fn connects_to_named_firestore_database() {
    let config = match std::env::var("CATALOG_CREDENTIALS_PATH") {
        Ok(path) => Config {
            credentials_path: path,
            ..config_without_credentials()
        },
        Err(_) => {
            println!("Skipping: CATALOG_CREDENTIALS_PATH not set");
            return;
        }
    };

    let handle = firebase::connect_firestore(&config)
        .await
        .expect("Firestore connection failed")
        .expect("credential file not found");

    assert_eq!(handle.database_id(), config.firestore_database);
}
