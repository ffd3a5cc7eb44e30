mod common;

use axum::{
    Router,
    routing::{get, patch},
};
use axum_test::TestServer;
use news_dashboard::api::handlers::patch_window_handler;
use news_dashboard::web::handlers::dashboard_handler;
use serde_json::json;

fn make_server() -> TestServer {
    let app = Router::new()
        .route("/", get(dashboard_handler))
        .route("/api/window", patch(patch_window_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_dashboard_renders_tabs() {
    let server = make_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    for tab in ["Summary", "Date published", "Topics", "States", "Countries"] {
        assert!(html.contains(tab), "missing tab {tab}");
    }
}

#[tokio::test]
async fn test_dashboard_renders_tables_and_panes() {
    let server = make_server();

    let html = server.get("/").await.text();

    assert!(html.contains("Articles with Publication Date"));
    assert!(html.contains("87.50%"));
    assert!(html.contains("Total Published Articles"));
    assert!(html.contains("0 (Date: 2021-03-02)"));
    assert!(html.contains("Texas"));
    assert!(html.contains("United States of America"));
    assert!(html.contains(r#"min="2021-03-01""#));
    assert!(html.contains(r#"max="2021-03-05""#));
}

#[tokio::test]
async fn test_dashboard_reflects_current_window() {
    let server = make_server();

    server
        .patch("/api/window")
        .json(&json!({ "start": "2022-06-01", "end": "2022-06-30" }))
        .await
        .assert_status_ok();

    let html = server.get("/").await.text();

    assert!(html.contains(r#"value="2022-06-01""#));
    assert!(html.contains("no data between 2022-06-01 and 2022-06-30"));
    assert!(!html.contains("Total Published Articles"));
}

#[tokio::test]
async fn test_dashboard_renders_all_data_table() {
    let server = make_server();

    let html = server.get("/").await.text();

    assert!(html.contains("All data"));
    assert!(html.contains(r#"<table id="records" class="sortable" data-total="8""#));
    for column in ["publication_date", "title", "topic", "sentiment_score"] {
        assert!(html.contains(&format!("<th>{column}</th>")), "missing column {column}");
    }
    for title in ["Markets rally", "Election recap", "Archive piece"] {
        assert!(html.contains(title), "missing row {title}");
    }
    assert!(html.contains(r#"<button type="button" id="records-next" disabled>"#));
}

#[tokio::test]
async fn test_dashboard_tables_are_sortable() {
    let server = make_server();

    let html = server.get("/").await.text();

    assert_eq!(html.matches(r#"class="sortable""#).count(), 6);
    assert!(html.contains(r#"<table id="window-days" class="sortable">"#));
}
