#![allow(dead_code)]

use std::sync::Arc;

use news_dashboard::application::services::DashboardService;
use news_dashboard::domain::entities::DatasetOrigin;
use news_dashboard::infrastructure::dataset::parse_dataset;
use news_dashboard::state::AppState;

/// Eight articles over 2021-03-01..=2021-03-05, with 2021-03-02 missing.
///
/// Daily counts: 03-01 = 2, 03-02 = 0, 03-03 = 3, 03-04 = 1, 03-05 = 1.
/// One row has an unknown date and is excluded from the series.
pub const SAMPLE_CSV: &str = "\
publication_date,title,topic,city,state,country,sentiment_score
2021-03-01 08:15,Markets rally,business,New York,New York,United States of America,0.4
2021-03-01 17:40,Cup final,sport,Unknown,Unknown,United Kingdom,0.8
2021-03-03 09:00,New phone,tech,Austin,Texas,United States of America,0.2
2021-03-03 12:30,Budget vote,politics,Unknown,California,Unknown,-0.3
2021-03-03 21:05,Award night,entertainment,Unknown,Unknown,Unknown,
2021-03-04 06:45,Chip shortage,tech,Unknown,Unknown,Germany,-0.1
2021-03-05 10:10,Election recap,politics,Unknown,Texas,United States of America,0.0
Unknown,Archive piece,business,Unknown,Unknown,Unknown,0.1
";

pub fn create_dashboard(csv: &str) -> Arc<DashboardService> {
    let dataset = parse_dataset(csv, DatasetOrigin::Inline).unwrap();
    Arc::new(DashboardService::new(dataset).unwrap())
}

pub fn create_test_state() -> AppState {
    AppState::new(create_dashboard(SAMPLE_CSV)).unwrap()
}
