use serde::Serialize;

use crate::domain::category::Category;

/// Category as rendered in the listing strip and headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub image_url: Option<String>,
    pub object_count: Option<i32>,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            slug: value.slug.into_inner(),
            name: value.name.into_inner(),
            description: value.description,
            icon_name: value.icon_name,
            image_url: value.image_url.map(Into::into),
            object_count: value.object_count,
        }
    }
}
