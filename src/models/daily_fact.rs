use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::daily_fact::{DailyFact as DomainDailyFact, NewDailyFact as DomainNewDailyFact};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `daily_facts` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::daily_facts)]
pub struct DailyFact {
    pub id: i32,
    pub celestial_object_id: Option<i32>,
    pub fact_date: NaiveDate,
    pub custom_title: Option<String>,
    pub custom_description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`DailyFact`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::daily_facts)]
pub struct NewDailyFact {
    pub celestial_object_id: Option<i32>,
    pub fact_date: NaiveDate,
    pub custom_title: Option<String>,
    pub custom_description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<DailyFact> for DomainDailyFact {
    type Error = TypeConstraintError;

    fn try_from(fact: DailyFact) -> Result<Self, Self::Error> {
        Ok(Self {
            id: fact.id.try_into()?,
            celestial_object_id: fact
                .celestial_object_id
                .map(TryInto::try_into)
                .transpose()?,
            fact_date: fact.fact_date,
            custom_title: fact.custom_title,
            custom_description: fact.custom_description,
            created_at: fact.created_at,
        })
    }
}

impl From<DomainNewDailyFact> for NewDailyFact {
    fn from(fact: DomainNewDailyFact) -> Self {
        Self {
            celestial_object_id: fact.celestial_object_id.map(|id| id.get()),
            fact_date: fact.fact_date,
            custom_title: fact.custom_title,
            custom_description: fact.custom_description,
            created_at: fact.created_at,
        }
    }
}
