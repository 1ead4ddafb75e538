use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{DiscoveryId, ImageUrl, NonEmptyString, ObjectId};

/// A historical discovery tied to a celestial object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discovery {
    pub id: DiscoveryId,
    pub celestial_object_id: Option<ObjectId>,
    pub title: NonEmptyString,
    pub description: Option<String>,
    pub discoverer: Option<String>,
    pub discovery_year: i32,
    pub discovery_date: NaiveDate,
    pub significance: Option<String>,
    pub image_url: Option<ImageUrl>,
    pub source_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Discovery`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDiscovery {
    pub celestial_object_id: Option<ObjectId>,
    pub title: NonEmptyString,
    pub description: Option<String>,
    pub discoverer: Option<String>,
    pub discovery_year: i32,
    pub discovery_date: NaiveDate,
    pub significance: Option<String>,
    pub image_url: Option<ImageUrl>,
    pub source_url: Option<String>,
    pub created_at: NaiveDateTime,
}
