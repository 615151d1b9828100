mod common;

use axum::http::StatusCode;
use common::spawn_app;

async fn number(uri: &str) -> f64 {
    let app = spawn_app().await;
    let response = app.get(uri).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    response.json().as_f64().unwrap()
}

#[tokio::test]
async fn operations_return_numbers() {
    assert_eq!(number("/sum/5/3").await, 8.0);
    assert_eq!(number("/subtraction/5/3").await, 2.0);
    assert_eq!(number("/multiplication/2.5/4").await, 10.0);
    assert_eq!(number("/division/9/3").await, 3.0);
    assert_eq!(number("/mean/5/6").await, 5.5);
    assert_eq!(number("/squareRoot/81").await, 9.0);
}

#[tokio::test]
async fn comma_is_a_decimal_separator() {
    assert_eq!(number("/sum/1,5/1,5").await, 3.0);
}

#[tokio::test]
async fn non_numeric_and_undefined_are_bad_requests() {
    let app = spawn_app().await;

    let response = app.get("/sum/five/3").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"]["code"], "unsupported_operation");
    assert_eq!(body["error"]["message"], "Please set a numeric value!");

    assert_eq!(
        app.get("/division/1/0").await.status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.get("/squareRoot/-4").await.status,
        StatusCode::BAD_REQUEST
    );
}
