use serde::Serialize;

use crate::domain::discovery::Discovery;

/// Discovery as rendered on the timeline and detail pages.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub discoverer: Option<String>,
    pub discovery_year: i32,
    pub discovery_date: String,
    pub significance: Option<String>,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
}

impl From<Discovery> for DiscoveryDto {
    fn from(value: Discovery) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            description: value.description,
            discoverer: value.discoverer,
            discovery_year: value.discovery_year,
            discovery_date: value.discovery_date.to_string(),
            significance: value.significance,
            image_url: value.image_url.map(Into::into),
            source_url: value.source_url,
        }
    }
}
