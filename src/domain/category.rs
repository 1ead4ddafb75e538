use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, ImageUrl, ObjectId, Slug};

/// Canonical category record for the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub slug: Slug,
    pub name: CategoryName,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub image_url: Option<ImageUrl>,
    pub object_count: Option<i32>,
    pub featured_object_id: Option<ObjectId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub slug: Slug,
    pub name: CategoryName,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub image_url: Option<ImageUrl>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
