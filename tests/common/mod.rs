//! Shared harness: the full router over an in-memory database and a
//! temporary upload directory.

#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use erudio_kernel::settings::Settings;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PUBLIC_URL: &str = "http://erudio.test";
pub const BOUNDARY: &str = "erudio-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub upload_dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

pub async fn spawn_app() -> TestApp {
    let upload_dir = tempfile::tempdir().unwrap();

    let mut settings = Settings::default();
    settings.server.public_url = PUBLIC_URL.to_string();
    settings.file_storage.upload_dir = upload_dir.path().to_string_lossy().into_owned();
    settings.file_storage.max_upload_bytes = 64 * 1024;

    let pool = erudio_db::connect_in_memory().await.unwrap();
    let registry = erudio_app::build_registry(&pool, &settings).unwrap();
    erudio_app::migrate(&pool, &registry).await.unwrap();

    TestApp {
        router: erudio_http::build_router(&registry, &settings),
        upload_dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_as(&self, uri: &str, accept: &str) -> TestResponse {
        self.send(
            Request::get(uri)
                .header(header::ACCEPT, accept)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: &str,
        accept: &str,
        body: impl Into<Body>,
    ) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::ACCEPT, accept)
                .body(body.into())
                .unwrap(),
        )
        .await
    }

    pub async fn upload(&self, uri: &str, parts: &[(&str, &str, &str)]) -> TestResponse {
        self.send(
            Request::post(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await
    }
}

/// `(field name, file name, contents)` parts encoded as multipart/form-data.
pub fn multipart_body(parts: &[(&str, &str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, file_name, contents) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
        body.extend_from_slice(contents.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn person_json(first_name: &str) -> serde_json::Value {
    serde_json::json!({
        "first_name": first_name,
        "last_name": "Costa",
        "address": "Uberlandia - Minas Gerais - Brasil",
        "gender": "Male"
    })
}

pub fn book_json(title: &str) -> serde_json::Value {
    serde_json::json!({
        "author": "Michael C. Feathers",
        "launch_date": "2017-11-29",
        "price": 49.0,
        "title": title
    })
}
