use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::discovery::{Discovery as DomainDiscovery, NewDiscovery as DomainNewDiscovery};
use crate::domain::types::{ImageUrl, NonEmptyString, TypeConstraintError};

/// Diesel model representing the `discoveries` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::discoveries)]
pub struct Discovery {
    pub id: i32,
    pub celestial_object_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub discoverer: Option<String>,
    pub discovery_year: i32,
    pub discovery_date: NaiveDate,
    pub significance: Option<String>,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Discovery`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::discoveries)]
pub struct NewDiscovery {
    pub celestial_object_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub discoverer: Option<String>,
    pub discovery_year: i32,
    pub discovery_date: NaiveDate,
    pub significance: Option<String>,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Discovery> for DomainDiscovery {
    type Error = TypeConstraintError;

    fn try_from(discovery: Discovery) -> Result<Self, Self::Error> {
        Ok(Self {
            id: discovery.id.try_into()?,
            celestial_object_id: discovery
                .celestial_object_id
                .map(TryInto::try_into)
                .transpose()?,
            title: NonEmptyString::new_for_field(discovery.title, "discovery title")?,
            description: discovery.description,
            discoverer: discovery.discoverer,
            discovery_year: discovery.discovery_year,
            discovery_date: discovery.discovery_date,
            significance: discovery.significance,
            image_url: discovery.image_url.map(ImageUrl::new).transpose()?,
            source_url: discovery.source_url,
            created_at: discovery.created_at,
        })
    }
}

impl From<DomainNewDiscovery> for NewDiscovery {
    fn from(discovery: DomainNewDiscovery) -> Self {
        Self {
            celestial_object_id: discovery.celestial_object_id.map(|id| id.get()),
            title: discovery.title.into_inner(),
            description: discovery.description,
            discoverer: discovery.discoverer,
            discovery_year: discovery.discovery_year,
            discovery_date: discovery.discovery_date,
            significance: discovery.significance,
            image_url: discovery.image_url.map(ImageUrl::into_inner),
            source_url: discovery.source_url,
            created_at: discovery.created_at,
        }
    }
}
