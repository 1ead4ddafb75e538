use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, ImageUrl, LightYears, ObjectId, ObjectName, ObjectType, Slug,
};

/// A celestial object in the catalog.
///
/// Physical quantities such as mass and radius are stored as free text
/// (e.g. "1.989 × 10^30 kg") because the upstream data mixes units freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialObject {
    pub id: ObjectId,
    pub slug: Slug,
    pub name: ObjectName,
    pub object_type: ObjectType,
    pub category_id: Option<CategoryId>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub discovery_year: Option<i32>,
    pub discoverer: Option<String>,
    pub discovery_story: Option<String>,
    pub distance_light_years: Option<LightYears>,
    pub constellation: Option<String>,
    pub mass: Option<String>,
    pub radius: Option<String>,
    pub temperature: Option<String>,
    pub age: Option<String>,
    pub primary_image_url: Option<ImageUrl>,
    pub thumbnail_url: Option<ImageUrl>,
    pub is_featured: bool,
    pub featured_date: Option<NaiveDate>,
    pub view_count: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`CelestialObject`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCelestialObject {
    pub slug: Slug,
    pub name: ObjectName,
    pub object_type: ObjectType,
    pub category_id: Option<CategoryId>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub discovery_year: Option<i32>,
    pub discoverer: Option<String>,
    pub discovery_story: Option<String>,
    pub distance_light_years: Option<LightYears>,
    pub constellation: Option<String>,
    pub mass: Option<String>,
    pub radius: Option<String>,
    pub temperature: Option<String>,
    pub age: Option<String>,
    pub primary_image_url: Option<ImageUrl>,
    pub thumbnail_url: Option<ImageUrl>,
    pub is_featured: bool,
    pub featured_date: Option<NaiveDate>,
}
