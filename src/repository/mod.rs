use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::daily_fact::{DailyFact, NewDailyFact};
use crate::domain::discovery::{Discovery, NewDiscovery};
use crate::domain::event::{Event, NewEvent};
use crate::domain::object::{CelestialObject, NewCelestialObject};
use crate::domain::types::{CategoryId, ObjectId, ObjectType, Slug};
use crate::pagination::Pagination;
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod daily_fact;
pub mod discovery;
pub mod errors;
pub mod event;
pub mod object;
#[cfg(test)]
pub mod test;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing celestial objects.
///
/// Mirrors the equality predicates the pages need: by category, by type, by
/// featured flag, newest first, limited.
#[derive(Debug, Clone, Default)]
pub struct ObjectListQuery {
    pub category_id: Option<CategoryId>,
    pub object_type: Option<ObjectType>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
    pub pagination: Option<Pagination>,
}

impl ObjectListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn object_type(mut self, object_type: ObjectType) -> Self {
        self.object_type = Some(object_type);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its slug.
    fn get_category_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize>;
}

/// Read-only operations for celestial objects.
pub trait ObjectReader {
    /// List objects matching the supplied query, newest first.
    fn list_objects(&self, query: ObjectListQuery)
    -> RepositoryResult<(usize, Vec<CelestialObject>)>;
    /// Retrieve an object by its slug.
    fn get_object_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<CelestialObject>>;
    /// Retrieve an object by its identifier.
    fn get_object_by_id(&self, id: ObjectId) -> RepositoryResult<Option<CelestialObject>>;
    /// The hero object for a given date: today's featured pick, else the
    /// most recently featured object, else the newest object overall.
    fn featured_object(&self, today: NaiveDate) -> RepositoryResult<Option<CelestialObject>>;
}

/// Write operations for celestial objects.
pub trait ObjectWriter {
    /// Persist a new celestial object.
    fn create_object(&self, object: &NewCelestialObject) -> RepositoryResult<usize>;
}

/// Read-only operations for discovery records.
pub trait DiscoveryReader {
    /// List all discoveries, most recent year first.
    fn list_discoveries(&self) -> RepositoryResult<Vec<Discovery>>;
    /// Discoveries attached to one object, most recent year first.
    fn discoveries_for_object(&self, object_id: ObjectId) -> RepositoryResult<Vec<Discovery>>;
}

/// Write operations for discovery records.
pub trait DiscoveryWriter {
    /// Persist a new discovery.
    fn create_discovery(&self, discovery: &NewDiscovery) -> RepositoryResult<usize>;
}

/// Read-only operations for sky events.
pub trait EventReader {
    /// List all events ordered by date.
    fn list_events(&self) -> RepositoryResult<Vec<Event>>;
}

/// Write operations for sky events.
pub trait EventWriter {
    /// Persist a new event.
    fn create_event(&self, event: &NewEvent) -> RepositoryResult<usize>;
}

/// Read-only operations for daily facts.
pub trait DailyFactReader {
    /// The fact for a given calendar date, if one is scheduled.
    fn fact_for_date(&self, date: NaiveDate) -> RepositoryResult<Option<DailyFact>>;
}

/// Write operations for daily facts.
pub trait DailyFactWriter {
    /// Persist a new daily fact.
    fn create_fact(&self, fact: &NewDailyFact) -> RepositoryResult<usize>;
}
