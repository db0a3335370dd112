//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use stride_server::{
    config::{StorageSettings, WebSettings},
    connect_store, create_router,
    state::AppState,
};
use stride_storage::LocalStorageContext;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const LANDING_MARKER: &str = "<h1>Exercise tracker</h1>";

/// Router over a fresh file-backed database plus throwaway web assets
pub struct TestApp {
    pub router: Router,
    pub storage: LocalStorageContext,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();

        let views_dir = temp_dir.path().join("views");
        let public_dir = temp_dir.path().join("public");
        std::fs::create_dir_all(&views_dir).unwrap();
        std::fs::create_dir_all(&public_dir).unwrap();
        std::fs::write(
            views_dir.join("index.html"),
            format!("<html><body>{}</body></html>", LANDING_MARKER),
        )
        .unwrap();
        std::fs::write(public_dir.join("style.css"), "body { margin: 0; }").unwrap();

        let storage = connect_store(&StorageSettings {
            database_url: format!("sqlite://{}", temp_dir.path().join("db/test.db").display()),
            max_connections: 5,
        })
        .await
        .unwrap();

        let app_state = AppState::new(Arc::new(storage.clone()));
        let router = create_router(
            app_state,
            &WebSettings {
                views_dir,
                public_dir,
            },
        );

        Self {
            router,
            storage,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request, returning the status and raw body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = self.send(request).await;
        (status, parse_json(&body))
    }

    /// POST an urlencoded form, as the landing page does
    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, parse_json(&body))
    }

    pub async fn post_json(&self, uri: &str, json: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(json).unwrap()))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, parse_json(&body))
    }

    /// Create a user through the API and return its `_id`
    pub async fn create_user(&self, username: &str) -> String {
        let (status, body) = self
            .post_form("/api/users", &format!("username={}", username))
            .await;
        assert_eq!(status, StatusCode::OK);
        body["_id"].as_str().unwrap().to_string()
    }

    /// Record an exercise through the API on a `YYYY-MM-DD` date
    pub async fn add_exercise(&self, user_id: &str, description: &str, duration: i64, date: &str) {
        let (status, _) = self
            .post_form(
                &format!("/api/users/{}/exercises", user_id),
                &format!(
                    "description={}&duration={}&date={}",
                    description, duration, date
                ),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
}

pub fn parse_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| {
        panic!(
            "expected a JSON body, got {:?}",
            String::from_utf8_lossy(body)
        )
    })
}

/// Test data
pub mod fixtures {
    pub const TEST_USERNAME: &str = "fcc_test";
}
