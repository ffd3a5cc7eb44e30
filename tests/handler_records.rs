mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use news_dashboard::api::handlers::records_handler;
use serde_json::Value;

fn make_server() -> TestServer {
    let app = Router::new()
        .route("/api/records", get(records_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_records_default_page() {
    let server = make_server();

    let response = server.get("/api/records").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["page_size"], 25);
    assert_eq!(json["pagination"]["total_items"], 8);
    assert_eq!(json["pagination"]["total_pages"], 1);

    assert_eq!(json["columns"][1], "title");
    assert_eq!(json["rows"].as_array().unwrap().len(), 8);
    assert_eq!(json["rows"][0][1], "Markets rally");
}

#[tokio::test]
async fn test_records_keep_column_order_and_empty_cells() {
    let server = make_server();

    let json = server.get("/api/records").await.json::<Value>();

    let columns = json["columns"].as_array().unwrap();
    let award_night = &json["rows"][4];
    assert_eq!(award_night.as_array().unwrap().len(), columns.len());
    assert_eq!(award_night[6], "");
}

#[tokio::test]
async fn test_records_filter_by_topic() {
    let server = make_server();

    let json = server
        .get("/api/records")
        .add_query_param("topic", "tech")
        .await
        .json::<Value>();

    assert_eq!(json["pagination"]["total_items"], 2);
    let rows = json["rows"].as_array().unwrap();
    assert!(rows.iter().all(|r| r[2] == "tech"));
}

#[tokio::test]
async fn test_records_topic_filter_is_exact() {
    let server = make_server();

    let json = server
        .get("/api/records")
        .add_query_param("topic", "Tech")
        .await
        .json::<Value>();

    assert_eq!(json["pagination"]["total_items"], 0);
    assert!(json["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_records_page_past_end_is_empty() {
    let server = make_server();

    let json = server
        .get("/api/records")
        .add_query_param("page", "2")
        .add_query_param("page_size", "10")
        .await
        .json::<Value>();

    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["total_items"], 8);
    assert!(json["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_records_invalid_page_size() {
    let server = make_server();

    let response = server
        .get("/api/records")
        .add_query_param("page_size", "5")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_records_page_zero() {
    let server = make_server();

    let response = server.get("/api/records").add_query_param("page", "0").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_records_non_numeric_page() {
    let server = make_server();

    let response = server
        .get("/api/records")
        .add_query_param("page", "two")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
