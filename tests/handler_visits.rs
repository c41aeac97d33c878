mod common;

use axum::http::StatusCode;
use common::{create_link, create_test_app};
use serde_json::Value;

#[tokio::test]
async fn test_list_visits_after_redirect() {
    let app = create_test_app();
    create_link(&app.server, "https://example.com", "exmpl").await;

    app.server
        .get("/r/exmpl")
        .add_header("User-Agent", "test-ua")
        .await;

    let response = app
        .server
        .get("/api/link_visits")
        .add_query_param("range", "[0,10]")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-range"), "links 0-0/1");

    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[0]["link_id"], 1);
    assert_eq!(body[0]["ip"], "127.0.0.1");
    assert_eq!(body[0]["user_agent"], "test-ua");
    assert_eq!(body[0]["referer"], "");
    assert_eq!(body[0]["status"], 302);

    let created_at = body[0]["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_list_visits_newest_first_and_paged() {
    let app = create_test_app();
    create_link(&app.server, "https://example.com", "exmpl").await;

    for _ in 0..3 {
        app.server.get("/r/exmpl").await;
    }

    let response = app
        .server
        .get("/api/link_visits")
        .add_query_param("range", "[1,5]")
        .await;

    assert_eq!(response.header("content-range"), "links 1-2/3");

    let ids: Vec<i64> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_list_visits_invalid_range() {
    let app = create_test_app();

    let response = app
        .server
        .get("/api/link_visits")
        .add_query_param("range", "[0;10]")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "invalid range format");
}

#[tokio::test]
async fn test_delete_visit() {
    let app = create_test_app();
    create_link(&app.server, "https://example.com", "exmpl").await;
    app.server.get("/r/exmpl").await;
    app.server.get("/r/exmpl").await;

    let response = app.server.delete("/api/link_visits/1").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get("/api/link_visits").await;
    assert_eq!(response.header("content-range"), "links 0-0/1");
    assert_eq!(response.json::<Vec<Value>>()[0]["id"], 2);

    // Missing visit is still 204.
    let response = app.server.delete("/api/link_visits/99").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_deleting_link_removes_its_visits() {
    let app = create_test_app();
    create_link(&app.server, "https://example.com", "exmpl").await;
    app.server.get("/r/exmpl").await;

    app.server.delete("/api/links/1").await;

    let response = app.server.get("/api/link_visits").await;
    assert_eq!(response.header("content-range"), "links 0-0/0");
    assert!(response.json::<Vec<Value>>().is_empty());
}
