use chrono::NaiveDate;
use serde::Serialize;

use crate::dto::categories::CategoryDto;
use crate::dto::objects::{ObjectCard, ObjectDetailDto};
use crate::repository::{CategoryReader, DailyFactReader, ObjectListQuery, ObjectReader};

use super::{ServiceError, ServiceResult};

const RECENT_OBJECTS_LIMIT: i64 = 6;

/// Everything the home page renders besides the live explorer grid.
#[derive(Debug, Serialize)]
pub struct IndexPage {
    pub featured: Option<ObjectDetailDto>,
    pub daily_fact: Option<DailyFactView>,
    pub recent: Vec<ObjectCard>,
    pub categories: Vec<CategoryDto>,
}

/// Daily fact joined to its object; custom copy overrides the object's own.
#[derive(Debug, Serialize)]
pub struct DailyFactView {
    pub title: String,
    pub description: Option<String>,
    pub object: Option<ObjectCard>,
}

/// Core business logic for rendering the index page.
///
/// Fetches the hero object (today's featured pick with its fallback chain),
/// the daily fact for `today` joined to its object, the most recent
/// objects, and the category strip. Repository errors are translated into
/// `ServiceError` so that the HTTP route can remain a thin wrapper.
pub fn show_index<R>(repo: &R, today: NaiveDate) -> ServiceResult<IndexPage>
where
    R: ObjectReader + DailyFactReader + CategoryReader,
{
    let featured = match repo.featured_object(today) {
        Ok(featured) => featured.map(ObjectDetailDto::from),
        Err(e) => {
            log::error!("Failed to load featured object: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let daily_fact = match repo.fact_for_date(today) {
        Ok(fact) => fact.and_then(|fact| daily_fact_view(repo, fact)),
        Err(e) => {
            log::error!("Failed to load daily fact: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let recent = match repo.list_objects(ObjectListQuery::default().limit(RECENT_OBJECTS_LIMIT)) {
        Ok((_total, objects)) => objects.into_iter().map(ObjectCard::from).collect(),
        Err(e) => {
            log::error!("Failed to list recent objects: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let categories = match repo.list_categories() {
        Ok(categories) => categories.into_iter().map(CategoryDto::from).collect(),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(IndexPage {
        featured,
        daily_fact,
        recent,
        categories,
    })
}

fn daily_fact_view<R>(repo: &R, fact: crate::domain::daily_fact::DailyFact) -> Option<DailyFactView>
where
    R: ObjectReader,
{
    let object = fact
        .celestial_object_id
        .and_then(|id| match repo.get_object_by_id(id) {
            Ok(object) => object,
            Err(e) => {
                log::error!("Failed to load daily fact object: {e}");
                None
            }
        });

    let title = fact
        .custom_title
        .or_else(|| object.as_ref().map(|o| o.name.as_str().to_string()))?;
    let description = fact
        .custom_description
        .or_else(|| object.as_ref().and_then(|o| o.short_description.clone()));

    Some(DailyFactView {
        title,
        description,
        object: object.map(ObjectCard::from),
    })
}
