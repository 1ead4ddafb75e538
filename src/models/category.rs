use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::{CategoryName, ImageUrl, Slug, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub image_url: Option<String>,
    pub object_count: Option<i32>,
    pub featured_object_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            slug: Slug::new(category.slug)?,
            name: CategoryName::new(category.name)?,
            description: category.description,
            icon_name: category.icon_name,
            image_url: category.image_url.map(ImageUrl::new).transpose()?,
            object_count: category.object_count,
            featured_object_id: category
                .featured_object_id
                .map(TryInto::try_into)
                .transpose()?,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            slug: category.slug.into_inner(),
            name: category.name.into_inner(),
            description: category.description,
            icon_name: category.icon_name,
            image_url: category.image_url.map(ImageUrl::into_inner),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
