use crate::domain::types::{CategoryId, ObjectType};
use crate::dto::objects::ObjectCard;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{ObjectListQuery, ObjectReader};

use super::{ServiceError, ServiceResult};

/// Equality predicates accepted by the JSON listing endpoint.
#[derive(Debug, Default, Clone)]
pub struct ObjectFilter {
    pub category_id: Option<i32>,
    pub object_type: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
    pub page: Option<usize>,
}

/// JSON listing of objects, newest first, filtered by equality predicates.
/// Unknown type names and non-positive category ids are bad input, not
/// server errors.
pub fn list_objects<R>(repo: &R, filter: ObjectFilter) -> ServiceResult<Vec<ObjectCard>>
where
    R: ObjectReader,
{
    let mut query = ObjectListQuery::default();

    if let Some(category_id) = filter.category_id {
        match CategoryId::new(category_id) {
            Ok(category_id) => query = query.category(category_id),
            Err(_) => return Err(ServiceError::NotFound),
        }
    }

    if let Some(ref type_name) = filter.object_type {
        match ObjectType::try_from(type_name.as_str()) {
            Ok(object_type) => query = query.object_type(object_type),
            Err(_) => return Err(ServiceError::NotFound),
        }
    }

    if let Some(featured) = filter.featured {
        query = query.featured(featured);
    }
    if let Some(limit) = filter.limit {
        query = query.limit(limit);
    }
    if let Some(page) = filter.page {
        query = query.paginate(page, DEFAULT_ITEMS_PER_PAGE);
    }

    match repo.list_objects(query) {
        Ok((_total, objects)) => Ok(objects.into_iter().map(ObjectCard::from).collect()),
        Err(e) => {
            log::error!("Failed to list objects: {e}");
            Err(ServiceError::Internal)
        }
    }
}
