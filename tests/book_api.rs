mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{book_json, spawn_app, PUBLIC_URL};

#[tokio::test]
async fn book_crud_round() {
    let app = spawn_app().await;

    let created = app
        .send_json(Method::POST, "/book", book_json("Working Effectively with Legacy Code"))
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let created = created.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["launch_date"], "2017-11-29");
    assert_eq!(created["price"], 49.0);
    assert_eq!(created["links"][0]["href"], format!("{}/book/{}", PUBLIC_URL, id));

    let mut change = book_json("Refactoring");
    change["id"] = serde_json::json!(id);
    change["price"] = serde_json::json!(88.5);
    let updated = app.send_json(Method::PUT, "/book", change).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["title"], "Refactoring");

    let found = app.get(&format!("/book/{}", id)).await.json();
    assert_eq!(found["price"], 88.5);

    let deleted = app
        .send(
            Request::delete(format!("/book/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(
        app.get(&format!("/book/{}", id)).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn listing_sorts_by_title() {
    let app = spawn_app().await;
    for title in ["Clean Code", "Agile", "Refactoring"] {
        app.send_json(Method::POST, "/book", book_json(title)).await;
    }

    let body = app.get("/book?size=2&direction=desc").await.json();
    let titles: Vec<&str> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Refactoring", "Clean Code"]);
    assert_eq!(body["page"]["total_pages"], 2);
}

#[tokio::test]
async fn null_missing_and_malformed() {
    let app = spawn_app().await;

    let response = app
        .send(Request::post("/book").body(Body::empty()).unwrap())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], "required_object_is_null");

    assert_eq!(app.get("/book/31337").await.status, StatusCode::NOT_FOUND);

    let response = app
        .send_json(
            Method::POST,
            "/book",
            serde_json::json!({ "title": "No date", "launch_date": "yesterday" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn book_as_xml() {
    let app = spawn_app().await;
    let created = app
        .send_json(Method::POST, "/book", book_json("Clean Code"))
        .await
        .json();

    let response = app
        .get_as(&format!("/book/{}", created["id"]), "application/xml")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type(), "application/xml");
    let text = response.text();
    assert!(text.starts_with("<book>"), "unexpected xml: {}", text);
    assert!(text.contains("<launch_date>2017-11-29</launch_date>"));
}
