use serde::Serialize;

use crate::domain::event::Event;

/// Sky event as rendered on the timeline page.
#[derive(Debug, Clone, Serialize)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<String>,
    pub event_year: Option<i32>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub visibility_info: Option<String>,
    pub image_url: Option<String>,
}

impl From<Event> for EventDto {
    fn from(value: Event) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            description: value.description,
            event_type: value.event_type,
            event_date: value.event_date.map(|d| d.to_string()),
            event_year: value.event_year,
            is_recurring: value.is_recurring,
            recurrence_pattern: value.recurrence_pattern,
            visibility_info: value.visibility_info,
            image_url: value.image_url.map(Into::into),
        }
    }
}
