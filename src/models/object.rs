use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::object::{
    CelestialObject as DomainCelestialObject, NewCelestialObject as DomainNewCelestialObject,
};
use crate::domain::types::{ImageUrl, LightYears, ObjectName, ObjectType, Slug, TypeConstraintError};

/// Diesel model representing the `celestial_objects` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::celestial_objects)]
pub struct CelestialObject {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub object_type: String,
    pub category_id: Option<i32>,
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
    pub is_featured: bool,
    pub featured_date: Option<NaiveDate>,
    pub view_count: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`CelestialObject`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::celestial_objects)]
pub struct NewCelestialObject {
    pub slug: String,
    pub name: String,
    pub object_type: String,
    pub category_id: Option<i32>,
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
    pub is_featured: bool,
    pub featured_date: Option<NaiveDate>,
}

impl TryFrom<CelestialObject> for DomainCelestialObject {
    type Error = TypeConstraintError;

    fn try_from(object: CelestialObject) -> Result<Self, Self::Error> {
        Ok(Self {
            id: object.id.try_into()?,
            slug: Slug::new(object.slug)?,
            name: ObjectName::new(object.name)?,
            object_type: ObjectType::try_from(object.object_type)?,
            category_id: object.category_id.map(TryInto::try_into).transpose()?,
            short_description: object.short_description,
            detailed_description: object.detailed_description,
            discovery_year: object.discovery_year,
            discoverer: object.discoverer,
            discovery_story: object.discovery_story,
            distance_light_years: object
                .distance_light_years
                .map(LightYears::new)
                .transpose()?,
            constellation: object.constellation,
            mass: object.mass,
            radius: object.radius,
            temperature: object.temperature,
            age: object.age,
            primary_image_url: object.primary_image_url.map(ImageUrl::new).transpose()?,
            thumbnail_url: object.thumbnail_url.map(ImageUrl::new).transpose()?,
            is_featured: object.is_featured,
            featured_date: object.featured_date,
            view_count: object.view_count,
            created_at: object.created_at,
            updated_at: object.updated_at,
        })
    }
}

impl From<DomainNewCelestialObject> for NewCelestialObject {
    fn from(object: DomainNewCelestialObject) -> Self {
        Self {
            slug: object.slug.into_inner(),
            name: object.name.into_inner(),
            object_type: object.object_type.as_str().to_string(),
            category_id: object.category_id.map(|id| id.get()),
            short_description: object.short_description,
            detailed_description: object.detailed_description,
            discovery_year: object.discovery_year,
            discoverer: object.discoverer,
            discovery_story: object.discovery_story,
            distance_light_years: object.distance_light_years.map(LightYears::get),
            constellation: object.constellation,
            mass: object.mass,
            radius: object.radius,
            temperature: object.temperature,
            age: object.age,
            primary_image_url: object.primary_image_url.map(ImageUrl::into_inner),
            thumbnail_url: object.thumbnail_url.map(ImageUrl::into_inner),
            is_featured: object.is_featured,
            featured_date: object.featured_date,
        }
    }
}
