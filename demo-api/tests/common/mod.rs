#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use demo_api::{open_store, router, AppState};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// In-process HTTP test client wrapping an Axum `Router`.
///
/// Uses `tower::ServiceExt::oneshot` to dispatch requests without binding
/// to a TCP port.
pub struct TestApp {
    router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestApp {
    /// Fresh file-backed store in a temporary directory, schema applied.
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("items.db").display());
        let pool = open_store(&url, 4).await.expect("failed to open store");
        Self {
            router: router(AppState::new(pool.clone())),
            pool,
            _dir: dir,
        }
    }

    pub fn get(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::GET, path)
    }

    pub fn post(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::POST, path)
    }

    pub fn request(&self, method: Method, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, method, path)
    }

    /// POST a `{name, description}` body and return the created item as JSON.
    pub async fn create_item(&self, name: &str, description: &str) -> Value {
        let resp = self
            .post("/items")
            .json(&serde_json::json!({ "name": name, "description": description }))
            .send()
            .await;
        resp.assert_status(StatusCode::OK);
        resp.json_value()
    }
}

/// Builder for constructing and sending a test HTTP request.
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: Method, path: &str) -> Self {
        Self {
            app,
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Set the request body as JSON. Also sets Content-Type to `application/json`.
    pub fn json(mut self, body: &impl Serialize) -> Self {
        self.body = Some(serde_json::to_vec(body).unwrap());
        self.headers
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());
        self
    }

    /// Set a raw request body without touching headers.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.insert(name, value.parse().unwrap());
        self
    }

    pub async fn send(self) -> TestResponse {
        let body = match self.body {
            Some(b) => Body::from(b),
            None => Body::empty(),
        };

        let mut builder = Request::builder().method(self.method).uri(&self.path);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(body).unwrap();

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.body)
        );
        self
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("response body is not the expected JSON")
    }

    pub fn json_value(&self) -> Value {
        self.json()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
