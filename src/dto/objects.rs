use serde::Serialize;

use crate::domain::object::CelestialObject;

/// Listing-card view of a celestial object.
///
/// Both data sources produce this shape: the catalog fills every field it
/// has, the third-party search source leaves distance and constellation
/// empty because the upstream API does not carry them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectCard {
    pub name: String,
    pub slug: String,
    pub object_type: String,
    pub type_label: String,
    pub thumbnail_url: Option<String>,
    pub discovery_year: Option<i32>,
    pub distance_light_years: Option<f64>,
    pub short_description: Option<String>,
    pub constellation: Option<String>,
}

impl From<CelestialObject> for ObjectCard {
    fn from(value: CelestialObject) -> Self {
        Self {
            name: value.name.into_inner(),
            slug: value.slug.into_inner(),
            object_type: value.object_type.as_str().to_string(),
            type_label: value.object_type.label().to_string(),
            thumbnail_url: value.thumbnail_url.map(Into::into),
            discovery_year: value.discovery_year,
            distance_light_years: value.distance_light_years.map(|d| d.get()),
            short_description: value.short_description,
            constellation: value.constellation,
        }
    }
}

/// Full view of a celestial object for the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectDetailDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub object_type: String,
    pub type_label: String,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub discovery_year: Option<i32>,
    pub discoverer: Option<String>,
    pub discovery_story: Option<String>,
    pub distance_light_years: Option<f64>,
    pub constellation: Option<String>,
    pub mass: Option<String>,
    pub radius: Option<String>,
    pub temperature: Option<String>,
    pub age: Option<String>,
    pub primary_image_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl From<CelestialObject> for ObjectDetailDto {
    fn from(value: CelestialObject) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            slug: value.slug.into_inner(),
            object_type: value.object_type.as_str().to_string(),
            type_label: value.object_type.label().to_string(),
            short_description: value.short_description,
            detailed_description: value.detailed_description,
            discovery_year: value.discovery_year,
            discoverer: value.discoverer,
            discovery_story: value.discovery_story,
            distance_light_years: value.distance_light_years.map(|d| d.get()),
            constellation: value.constellation,
            mass: value.mass,
            radius: value.radius,
            temperature: value.temperature,
            age: value.age,
            primary_image_url: value.primary_image_url.map(Into::into),
            thumbnail_url: value.thumbnail_url.map(Into::into),
        }
    }
}
