use crate::dto::categories::CategoryDto;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// All categories for the listing page, ordered by name.
pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// The category a listing page is for. An unknown slug is a not-found
/// condition rendered by the route, never a blank page.
pub fn find_category<R>(repo: &R, slug: &str) -> ServiceResult<crate::domain::category::Category>
where
    R: CategoryReader,
{
    let slug = match crate::domain::types::Slug::new(slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_category_by_slug(&slug) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
