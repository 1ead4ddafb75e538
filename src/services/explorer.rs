use serde::Serialize;

use crate::dto::nasa::NasaItem;
use crate::nasa::client::{NasaSearchClient, SearchRecord};
use crate::nasa::normalize;

use super::{ServiceError, ServiceResult};

/// Tabs of the home page explorer grid.
pub const EXPLORER_TABS: &[&str] = &["All", "Planet", "Star", "Galaxy", "Nebula", "Exotic"];

/// One rendered explorer grid: the tab it was fetched for and its items.
#[derive(Debug, Clone, Serialize)]
pub struct ExplorerGrid {
    pub tab: String,
    pub items: Vec<NasaItem>,
}

/// Search query for an explorer tab. A couple of tabs alias to broader
/// queries because the literal tab name returns poor results.
pub fn query_for_tab(tab: &str) -> &str {
    match tab {
        "Exotic" => "quasar neutron star black hole",
        "Star" => "star cluster",
        "All" => "astronomy",
        other => other,
    }
}

/// Normalizes raw search records for the explorer grid, dropping unusable
/// ones.
pub fn explorer_items(records: &[SearchRecord]) -> Vec<NasaItem> {
    records.iter().filter_map(normalize::nasa_item).collect()
}

/// Explorer grid content for one tab.
pub async fn show_explorer(client: &NasaSearchClient, tab: &str) -> ServiceResult<Vec<NasaItem>> {
    match client.search(query_for_tab(tab)).await {
        Ok(records) => Ok(explorer_items(&records)),
        Err(e) => {
            log::error!("Failed to fetch explorer records for tab {tab}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
