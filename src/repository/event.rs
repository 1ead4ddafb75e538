use diesel::prelude::*;

use crate::domain::event::{Event, NewEvent};
use crate::models::event::{Event as DbEvent, NewEvent as DbNewEvent};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, EventReader, EventWriter};

impl EventReader for DieselRepository {
    fn list_events(&self) -> RepositoryResult<Vec<Event>> {
        use crate::schema::events;

        let mut conn = self.conn()?;

        let items = events::table
            .order(events::event_date.asc())
            .load::<DbEvent>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Event>, _>>()?;

        Ok(items)
    }
}

impl EventWriter for DieselRepository {
    fn create_event(&self, event: &NewEvent) -> RepositoryResult<usize> {
        use crate::schema::events;

        let mut conn = self.conn()?;
        let db_event: DbNewEvent = event.clone().into();

        let affected = diesel::insert_into(events::table)
            .values(db_event)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
