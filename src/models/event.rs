use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::event::{Event as DomainEvent, NewEvent as DomainNewEvent};
use crate::domain::types::{ImageUrl, NonEmptyString, TypeConstraintError};

/// Diesel model representing the `events` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::events)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_year: Option<i32>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub visibility_info: Option<String>,
    pub related_object_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Event`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::events)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_year: Option<i32>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub visibility_info: Option<String>,
    pub related_object_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Event> for DomainEvent {
    type Error = TypeConstraintError;

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        Ok(Self {
            id: event.id.try_into()?,
            title: NonEmptyString::new_for_field(event.title, "event title")?,
            description: event.description,
            event_type: event.event_type,
            event_date: event.event_date,
            event_year: event.event_year,
            is_recurring: event.is_recurring,
            recurrence_pattern: event.recurrence_pattern,
            visibility_info: event.visibility_info,
            related_object_id: event.related_object_id.map(TryInto::try_into).transpose()?,
            image_url: event.image_url.map(ImageUrl::new).transpose()?,
            created_at: event.created_at,
        })
    }
}

impl From<DomainNewEvent> for NewEvent {
    fn from(event: DomainNewEvent) -> Self {
        Self {
            title: event.title.into_inner(),
            description: event.description,
            event_type: event.event_type,
            event_date: event.event_date,
            event_year: event.event_year,
            is_recurring: event.is_recurring,
            recurrence_pattern: event.recurrence_pattern,
            visibility_info: event.visibility_info,
            related_object_id: event.related_object_id.map(|id| id.get()),
            image_url: event.image_url.map(ImageUrl::into_inner),
            created_at: event.created_at,
        }
    }
}
