//! DTOs for topic and location breakdowns.

use serde::Serialize;

use crate::domain::locations::PlaceCount;
use crate::domain::topics::TopicShare;

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub items: Vec<TopicShare>,
}

#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub total: usize,
    pub items: Vec<PlaceCount>,
}

impl From<&[PlaceCount]> for PlacesResponse {
    fn from(items: &[PlaceCount]) -> Self {
        Self {
            total: items.iter().map(|p| p.count).sum(),
            items: items.to_vec(),
        }
    }
}
