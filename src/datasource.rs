//! The category listing can be served by the local catalog or by live
//! third-party search; configuration picks one at startup and everything
//! downstream consumes the same `Vec<ObjectCard>`.

use thiserror::Error;

use crate::domain::category::Category;
use crate::dto::objects::ObjectCard;
use crate::models::config::{AppConfig, ObjectSourceKind};
use crate::nasa::client::{NasaClientError, NasaSearchClient};
use crate::nasa::normalize;
use crate::repository::errors::RepositoryError;
use crate::repository::{DieselRepository, ObjectListQuery, ObjectReader};

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Search(#[from] NasaClientError),
}

/// Where category listings come from.
pub enum ObjectSource {
    /// Repository-backed: full records, server-side ordering, distances.
    Catalog(DieselRepository),
    /// NASA image search keyed by the category slug. Distance and
    /// constellation are always absent from this source.
    NasaSearch(NasaSearchClient),
}

impl ObjectSource {
    pub fn from_config(config: &AppConfig, repo: DieselRepository) -> Self {
        match config.object_source {
            ObjectSourceKind::Catalog => Self::Catalog(repo),
            ObjectSourceKind::NasaSearch => Self::NasaSearch(NasaSearchClient::new(&config.nasa)),
        }
    }

    /// Whether listings from this source carry a distance field. The
    /// distance sort control is hidden when they do not.
    pub fn supports_distance(&self) -> bool {
        matches!(self, Self::Catalog(_))
    }

    /// All listing cards for one category.
    pub async fn objects_for_category(
        &self,
        category: &Category,
    ) -> Result<Vec<ObjectCard>, DataSourceError> {
        match self {
            Self::Catalog(repo) => {
                let query = ObjectListQuery::default().category(category.id);
                let (_total, objects) = repo.list_objects(query)?;
                Ok(objects.into_iter().map(ObjectCard::from).collect())
            }
            Self::NasaSearch(client) => {
                let slug = category.slug.as_str();
                let records = client.search(slug).await?;
                Ok(records
                    .iter()
                    .filter_map(|record| normalize::object_card(record, slug))
                    .collect())
            }
        }
    }
}
