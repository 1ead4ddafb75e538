use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::daily_fact::{DailyFact, NewDailyFact};
use crate::models::daily_fact::{DailyFact as DbDailyFact, NewDailyFact as DbNewDailyFact};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DailyFactReader, DailyFactWriter, DieselRepository};

impl DailyFactReader for DieselRepository {
    fn fact_for_date(&self, date: NaiveDate) -> RepositoryResult<Option<DailyFact>> {
        use crate::schema::daily_facts;

        let mut conn = self.conn()?;

        let fact = daily_facts::table
            .filter(daily_facts::fact_date.eq(date))
            .first::<DbDailyFact>(&mut conn)
            .optional()?;

        let fact = fact.map(TryInto::try_into).transpose()?;
        Ok(fact)
    }
}

impl DailyFactWriter for DieselRepository {
    fn create_fact(&self, fact: &NewDailyFact) -> RepositoryResult<usize> {
        use crate::schema::daily_facts;

        let mut conn = self.conn()?;
        let db_fact: DbNewDailyFact = fact.clone().into();

        let affected = diesel::insert_into(daily_facts::table)
            .values(db_fact)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
