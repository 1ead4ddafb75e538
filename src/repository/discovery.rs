use diesel::prelude::*;

use crate::domain::discovery::{Discovery, NewDiscovery};
use crate::domain::types::ObjectId;
use crate::models::discovery::{Discovery as DbDiscovery, NewDiscovery as DbNewDiscovery};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, DiscoveryReader, DiscoveryWriter};

impl DiscoveryReader for DieselRepository {
    fn list_discoveries(&self) -> RepositoryResult<Vec<Discovery>> {
        use crate::schema::discoveries;

        let mut conn = self.conn()?;

        let items = discoveries::table
            .order(discoveries::discovery_year.desc())
            .load::<DbDiscovery>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Discovery>, _>>()?;

        Ok(items)
    }

    fn discoveries_for_object(&self, object_id: ObjectId) -> RepositoryResult<Vec<Discovery>> {
        use crate::schema::discoveries;

        let mut conn = self.conn()?;

        let items = discoveries::table
            .filter(discoveries::celestial_object_id.eq(object_id.get()))
            .order(discoveries::discovery_year.desc())
            .load::<DbDiscovery>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Discovery>, _>>()?;

        Ok(items)
    }
}

impl DiscoveryWriter for DieselRepository {
    fn create_discovery(&self, discovery: &NewDiscovery) -> RepositoryResult<usize> {
        use crate::schema::discoveries;

        let mut conn = self.conn()?;
        let db_discovery: DbNewDiscovery = discovery.clone().into();

        let affected = diesel::insert_into(discoveries::table)
            .values(db_discovery)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
