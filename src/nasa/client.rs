use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::config::NasaConfig;

/// Failures from the image-search endpoint.
///
/// None of these retry; callers log and surface an empty list or an error
/// flag at the page boundary.
#[derive(Debug, Error)]
pub enum NasaClientError {
    #[error("image search transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("image search returned status {0}")]
    Status(u16),
    #[error("image search returned malformed JSON: {0}")]
    Malformed(String),
}

/// Raw search response: `collection.items` carries the records.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub collection: SearchCollection,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchCollection {
    #[serde(default)]
    pub items: Vec<SearchRecord>,
}

/// One loosely-typed search result. Either array may be empty or missing;
/// the normalizer decides what is usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRecord {
    #[serde(default)]
    pub data: Vec<RecordData>,
    #[serde(default)]
    pub links: Vec<RecordLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordData {
    #[serde(default)]
    pub nasa_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordLink {
    #[serde(default)]
    pub href: String,
}

/// Client for NASA's public image-search API.
///
/// The endpoint requires no authentication. Endpoint, timeout and page size
/// come from an explicit [`NasaConfig`] rather than ambient globals.
#[derive(Clone)]
pub struct NasaSearchClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl NasaSearchClient {
    pub fn new(config: &NasaConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        }
    }

    /// Keyword query over image records, limited to the configured page size.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchRecord>, NasaClientError> {
        self.request(query, None).await
    }

    /// Keyword query restricted to records created in or after `year_start`.
    pub async fn search_since(
        &self,
        query: &str,
        year_start: i32,
    ) -> Result<Vec<SearchRecord>, NasaClientError> {
        self.request(query, Some(year_start)).await
    }

    async fn request(
        &self,
        query: &str,
        year_start: Option<i32>,
    ) -> Result<Vec<SearchRecord>, NasaClientError> {
        let url = format!("{}/search", self.base_url);
        let page_size = self.page_size.to_string();
        let mut params = vec![
            ("q", query.to_string()),
            ("media_type", "image".to_string()),
            ("page_size", page_size),
        ];
        if let Some(year) = year_start {
            params.push(("year_start", year.to_string()));
        }

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NasaClientError::Status(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| NasaClientError::Malformed(e.to_string()))?;
        Ok(body.collection.items)
    }
}
