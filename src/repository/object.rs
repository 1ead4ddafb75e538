use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::object::{CelestialObject, NewCelestialObject};
use crate::domain::types::{ObjectId, Slug};
use crate::models::object::{CelestialObject as DbCelestialObject, NewCelestialObject as DbNewCelestialObject};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ObjectListQuery, ObjectReader, ObjectWriter};

impl ObjectReader for DieselRepository {
    fn list_objects(
        &self,
        query: ObjectListQuery,
    ) -> RepositoryResult<(usize, Vec<CelestialObject>)> {
        use crate::schema::celestial_objects;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = celestial_objects::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(category_id) = query.category_id {
                items = items.filter(celestial_objects::category_id.eq(category_id.get()));
            }
            if let Some(object_type) = query.object_type {
                items = items.filter(celestial_objects::object_type.eq(object_type.as_str()));
            }
            if let Some(featured) = query.featured {
                items = items.filter(celestial_objects::is_featured.eq(featured));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        } else if let Some(limit) = query.limit {
            items = items.limit(limit);
        }

        let items = items
            .order(celestial_objects::created_at.desc())
            .load::<DbCelestialObject>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CelestialObject>, _>>()?;

        Ok((total, items))
    }

    fn get_object_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<CelestialObject>> {
        use crate::schema::celestial_objects;

        let mut conn = self.conn()?;

        let object = celestial_objects::table
            .filter(celestial_objects::slug.eq(slug.as_str()))
            .first::<DbCelestialObject>(&mut conn)
            .optional()?;

        let object = object.map(TryInto::try_into).transpose()?;
        Ok(object)
    }

    fn get_object_by_id(&self, id: ObjectId) -> RepositoryResult<Option<CelestialObject>> {
        use crate::schema::celestial_objects;

        let mut conn = self.conn()?;

        let object = celestial_objects::table
            .filter(celestial_objects::id.eq(id.get()))
            .first::<DbCelestialObject>(&mut conn)
            .optional()?;

        let object = object.map(TryInto::try_into).transpose()?;
        Ok(object)
    }

    fn featured_object(&self, today: NaiveDate) -> RepositoryResult<Option<CelestialObject>> {
        use crate::schema::celestial_objects;

        let mut conn = self.conn()?;

        // Today's scheduled pick first.
        let object = celestial_objects::table
            .filter(celestial_objects::is_featured.eq(true))
            .filter(celestial_objects::featured_date.eq(today))
            .first::<DbCelestialObject>(&mut conn)
            .optional()?;

        // Fall back to the most recently featured object.
        let object = match object {
            Some(object) => Some(object),
            None => celestial_objects::table
                .filter(celestial_objects::is_featured.eq(true))
                .order(celestial_objects::featured_date.desc())
                .first::<DbCelestialObject>(&mut conn)
                .optional()?,
        };

        // As a last resort, show the newest object.
        let object = match object {
            Some(object) => Some(object),
            None => celestial_objects::table
                .order(celestial_objects::created_at.desc())
                .first::<DbCelestialObject>(&mut conn)
                .optional()?,
        };

        let object = object.map(TryInto::try_into).transpose()?;
        Ok(object)
    }
}

impl ObjectWriter for DieselRepository {
    fn create_object(&self, object: &NewCelestialObject) -> RepositoryResult<usize> {
        use crate::schema::celestial_objects;

        let mut conn = self.conn()?;
        let db_object: DbNewCelestialObject = object.clone().into();

        let affected = diesel::insert_into(celestial_objects::table)
            .values(db_object)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
