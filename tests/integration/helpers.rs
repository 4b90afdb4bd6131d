//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

use checkin_core::config::AppConfig;
use checkin_storage::AppendFileSink;

/// The five fields of a well-formed check-in.
pub const VALID_FORM: &str =
    "hostname=srv1&intip=10.0.0.5&extip=203.0.113.9&mydate=2024-01-01&note=ok";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Path of the target file inside the scratch directory
    pub target: PathBuf,
    /// Scratch directory; removed on drop
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application writing into a fresh temp directory
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application from a config; the target file is always
    /// redirected into the temp directory
    pub fn with_config(mut config: AppConfig) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join(&config.storage.target_file);
        config.storage.target_file = target.to_string_lossy().into_owned();

        Self::build(config, target, dir)
    }

    /// Create a test application whose target file lives in a directory
    /// that does not exist, so the file can never be created
    pub fn with_uncreatable_target() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("missing").join("host-check-in.txt");
        let mut config = AppConfig::default();
        config.storage.target_file = target.to_string_lossy().into_owned();

        Self::build(config, target, dir)
    }

    fn build(config: AppConfig, target: PathBuf, dir: TempDir) -> Self {
        let sink = Arc::new(AppendFileSink::from_config(&config.storage));
        let state = checkin_api::AppState::new(config.clone(), sink);
        let router = checkin_api::build_app(state);

        Self {
            router,
            config,
            target,
            _dir: dir,
        }
    }

    /// Contents of the target file, or `None` if it was never created
    pub fn target_contents(&self) -> Option<String> {
        std::fs::read_to_string(&self.target).ok()
    }

    /// POST a URL-encoded form body
    pub async fn post_form(&self, path: &str, body: &str) -> TestResponse {
        self.request(
            "POST",
            path,
            Some("application/x-www-form-urlencoded"),
            body.to_string(),
        )
        .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: String,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Plain-text body
    pub body: String,
}
