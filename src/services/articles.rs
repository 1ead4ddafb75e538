use crate::dto::nasa::ArticleItem;
use crate::nasa::client::{NasaSearchClient, SearchRecord};
use crate::nasa::normalize;

use super::{ServiceError, ServiceResult};

const ARTICLE_QUERY: &str = "research";
const ARTICLE_YEAR_START: i32 = 2022;
const ARTICLE_LIMIT: usize = 15;

/// Normalizes raw search records into article teasers, keeping the first
/// usable fifteen.
pub fn article_teasers(records: &[SearchRecord]) -> Vec<ArticleItem> {
    records
        .iter()
        .filter_map(normalize::article_item)
        .take(ARTICLE_LIMIT)
        .collect()
}

/// Articles page content: recent NASA research imagery since 2022.
pub async fn show_articles(client: &NasaSearchClient) -> ServiceResult<Vec<ArticleItem>> {
    match client.search_since(ARTICLE_QUERY, ARTICLE_YEAR_START).await {
        Ok(records) => Ok(article_teasers(&records)),
        Err(e) => {
            log::error!("Failed to fetch articles: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nasa::client::{RecordData, RecordLink};

    fn record(nasa_id: &str, title: &str) -> SearchRecord {
        SearchRecord {
            data: vec![RecordData {
                nasa_id: nasa_id.to_string(),
                title: title.to_string(),
                description: None,
                date_created: Some("2023-06-15T00:00:00Z".to_string()),
            }],
            links: vec![RecordLink {
                href: format!("https://images-assets.nasa.gov/{nasa_id}/thumb.jpg"),
            }],
        }
    }

    #[test]
    fn keeps_at_most_fifteen_teasers() {
        let records: Vec<SearchRecord> = (0..24)
            .map(|i| record(&format!("id-{i}"), &format!("Record {i}")))
            .collect();
        assert_eq!(article_teasers(&records).len(), 15);
    }

    #[test]
    fn unusable_records_do_not_count_against_the_limit() {
        let mut records = vec![SearchRecord::default()];
        records.extend((0..3).map(|i| record(&format!("id-{i}"), &format!("Record {i}"))));

        let teasers = article_teasers(&records);
        assert_eq!(teasers.len(), 3);
        assert_eq!(teasers[0].date, "2023-06-15");
    }
}
