use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{FactId, ObjectId};

/// The object-of-the-day entry for a calendar date.
///
/// Custom title/description override the referenced object's own copy when
/// present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFact {
    pub id: FactId,
    pub celestial_object_id: Option<ObjectId>,
    pub fact_date: NaiveDate,
    pub custom_title: Option<String>,
    pub custom_description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`DailyFact`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDailyFact {
    pub celestial_object_id: Option<ObjectId>,
    pub fact_date: NaiveDate,
    pub custom_title: Option<String>,
    pub custom_description: Option<String>,
    pub created_at: NaiveDateTime,
}
