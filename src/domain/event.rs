use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{EventId, ImageUrl, NonEmptyString, ObjectId};

/// An astronomical event (eclipse, meteor shower, transit, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: NonEmptyString,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_year: Option<i32>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub visibility_info: Option<String>,
    pub related_object_id: Option<ObjectId>,
    pub image_url: Option<ImageUrl>,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: NonEmptyString,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_year: Option<i32>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub visibility_info: Option<String>,
    pub related_object_id: Option<ObjectId>,
    pub image_url: Option<ImageUrl>,
    pub created_at: NaiveDateTime,
}
