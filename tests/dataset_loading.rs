mod common;

use std::path::PathBuf;

use news_dashboard::config::Config;
use news_dashboard::domain::entities::DatasetOrigin;
use news_dashboard::server::load_dashboard;

fn config(dataset_path: PathBuf) -> Config {
    Config {
        dataset_path: dataset_path.to_string_lossy().into_owned(),
        // Nothing listens on the discard port, so a fallback fails fast.
        dataset_url: "http://127.0.0.1:9/extended_dataset.csv".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        fetch_timeout_seconds: 1,
        fetch_retries: 0,
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("news-dashboard-{}-{name}", std::process::id()))
}

#[tokio::test]
async fn test_load_dashboard_from_local_file() {
    let path = temp_path("local.csv");
    tokio::fs::write(&path, common::SAMPLE_CSV).await.unwrap();

    let dashboard = load_dashboard(&config(path.clone())).await.unwrap();

    assert_eq!(dashboard.dataset().len(), 8);
    assert!(matches!(
        dashboard.dataset().origin,
        DatasetOrigin::LocalFile(_)
    ));
    assert_eq!(dashboard.series().total(), 7);

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_load_dashboard_missing_column_fails() {
    let path = temp_path("no-topic.csv");
    tokio::fs::write(
        &path,
        "publication_date,city,state,country\n2021-03-01,Unknown,Unknown,Unknown\n",
    )
    .await
    .unwrap();

    let err = load_dashboard(&config(path.clone())).await.unwrap_err();
    assert!(format!("{err:#}").contains("topic"));

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_load_dashboard_without_dates_fails() {
    let path = temp_path("no-dates.csv");
    tokio::fs::write(
        &path,
        "publication_date,topic,city,state,country\nUnknown,sport,Unknown,Unknown,Unknown\n",
    )
    .await
    .unwrap();

    let err = load_dashboard(&config(path.clone())).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to aggregate dataset"));

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_load_dashboard_missing_file_and_unreachable_fallback_fails() {
    let path = temp_path("does-not-exist.csv");

    let err = load_dashboard(&config(path)).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load dataset"));
}
