mod common;

use axum::http::{header, StatusCode};
use common::{spawn_app, PUBLIC_URL};

#[tokio::test]
async fn upload_then_download() {
    let app = spawn_app().await;

    let response = app
        .upload("/file/upload", &[("file", "notes.txt", "hello erudio")])
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    let body = response.json();
    assert_eq!(body["file_name"], "notes.txt");
    assert_eq!(body["file_type"], "text/plain");
    assert_eq!(body["size"], 12);
    assert_eq!(
        body["file_download_uri"],
        format!("{}/file/downloadFile/notes.txt", PUBLIC_URL)
    );
    assert!(app.upload_dir.path().join("notes.txt").exists());

    let download = app.get("/file/downloadFile/notes.txt").await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(download.content_type(), "text/plain");
    assert_eq!(
        download.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"notes.txt\""
    );
    assert_eq!(&download.body[..], b"hello erudio");
}

#[tokio::test]
async fn unknown_extension_downloads_as_octet_stream() {
    let app = spawn_app().await;
    app.upload("/file/upload", &[("file", "blob.zzqx", "\u{1}\u{2}")])
        .await;

    let download = app.get("/file/downloadFile/blob.zzqx").await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(download.content_type(), "application/octet-stream");
}

#[tokio::test]
async fn multiple_upload_keeps_order() {
    let app = spawn_app().await;

    let response = app
        .upload(
            "/file/uploadMultipleFiles",
            &[
                ("files", "a.txt", "first"),
                ("files", "b.txt", "second"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["file_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}

#[tokio::test]
async fn duplicate_upload_overwrites() {
    let app = spawn_app().await;
    app.upload("/file/upload", &[("file", "same.txt", "one")])
        .await;
    app.upload("/file/upload", &[("file", "same.txt", "two")])
        .await;

    let download = app.get("/file/downloadFile/same.txt").await;
    assert_eq!(&download.body[..], b"two");
}

#[tokio::test]
async fn traversal_is_rejected_and_missing_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .upload("/file/upload", &[("file", "../escape.txt", "x")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], "unsupported_operation");
    assert!(!app
        .upload_dir
        .path()
        .parent()
        .unwrap()
        .join("escape.txt")
        .exists());

    let response = app.get("/file/downloadFile/missing.pdf").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"]["code"], "file_not_found");
}

#[tokio::test]
async fn missing_file_part_is_bad_request() {
    let app = spawn_app().await;
    let response = app
        .upload("/file/upload", &[("attachment", "a.txt", "x")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_upload_is_refused() {
    let app = spawn_app().await;
    let big = "a".repeat(128 * 1024);
    let response = app
        .upload("/file/upload", &[("file", "big.txt", big.as_str())])
        .await;
    assert!(response.status.is_client_error(), "{}", response.status);
    assert!(!app.upload_dir.path().join("big.txt").exists());
}
