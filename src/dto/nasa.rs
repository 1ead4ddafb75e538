use serde::Serialize;

/// Normalized third-party search result for the explorer grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NasaItem {
    /// Opaque identifier assigned by the upstream archive.
    pub nasa_id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Year extracted from the record's creation date.
    pub year: Option<i32>,
}

/// Normalized third-party search result presented as an article teaser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleItem {
    pub nasa_id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub slug: String,
    /// `YYYY-MM-DD` prefix of the record's creation date.
    pub date: String,
}
