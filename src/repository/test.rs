use chrono::NaiveDate;

use crate::domain::category::Category;
use crate::domain::daily_fact::DailyFact;
use crate::domain::discovery::Discovery;
use crate::domain::event::Event;
use crate::domain::object::CelestialObject;
use crate::domain::types::{CategoryId, ObjectId, Slug};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CategoryReader, DailyFactReader, DiscoveryReader, EventReader, ObjectListQuery, ObjectReader,
};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    categories: Vec<Category>,
    objects: Vec<CelestialObject>,
    discoveries: Vec<Discovery>,
    events: Vec<Event>,
    facts: Vec<DailyFact>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, objects: Vec<CelestialObject>) -> Self {
        Self {
            categories,
            objects,
            discoveries: Vec::new(),
            events: Vec::new(),
            facts: Vec::new(),
        }
    }

    pub fn with_discoveries(mut self, discoveries: Vec<Discovery>) -> Self {
        self.discoveries = discoveries;
        self
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn with_facts(mut self, facts: Vec<DailyFact>) -> Self {
        self.facts = facts;
        self
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut items = self.categories.clone();
        items.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(items)
    }

    fn get_category_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Category>> {
        Ok(self
            .categories
            .iter()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}

impl ObjectReader for TestRepository {
    fn list_objects(
        &self,
        query: ObjectListQuery,
    ) -> RepositoryResult<(usize, Vec<CelestialObject>)> {
        let mut items: Vec<CelestialObject> = self.objects.clone();
        if let Some(category_id) = query.category_id {
            items.retain(|o| o.category_id == Some(category_id));
        }
        if let Some(object_type) = query.object_type {
            items.retain(|o| o.object_type == object_type);
        }
        if let Some(featured) = query.featured {
            items.retain(|o| o.is_featured == featured);
        }
        let total = items.len();
        if let Some(pagination) = &query.pagination {
            items = items
                .into_iter()
                .skip(pagination.offset() as usize)
                .take(pagination.limit() as usize)
                .collect();
        } else if let Some(limit) = query.limit {
            items.truncate(limit as usize);
        }
        Ok((total, items))
    }

    fn get_object_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<CelestialObject>> {
        Ok(self.objects.iter().find(|o| &o.slug == slug).cloned())
    }

    fn get_object_by_id(&self, id: ObjectId) -> RepositoryResult<Option<CelestialObject>> {
        Ok(self.objects.iter().find(|o| o.id == id).cloned())
    }

    fn featured_object(&self, today: NaiveDate) -> RepositoryResult<Option<CelestialObject>> {
        let todays = self
            .objects
            .iter()
            .find(|o| o.is_featured && o.featured_date == Some(today));
        let fallback = self
            .objects
            .iter()
            .filter(|o| o.is_featured)
            .max_by_key(|o| o.featured_date);
        Ok(todays.or(fallback).or(self.objects.first()).cloned())
    }
}

impl DiscoveryReader for TestRepository {
    fn list_discoveries(&self) -> RepositoryResult<Vec<Discovery>> {
        let mut items = self.discoveries.clone();
        items.sort_by(|a, b| b.discovery_year.cmp(&a.discovery_year));
        Ok(items)
    }

    fn discoveries_for_object(&self, object_id: ObjectId) -> RepositoryResult<Vec<Discovery>> {
        Ok(self
            .discoveries
            .iter()
            .filter(|d| d.celestial_object_id == Some(object_id))
            .cloned()
            .collect())
    }
}

impl EventReader for TestRepository {
    fn list_events(&self) -> RepositoryResult<Vec<Event>> {
        let mut items = self.events.clone();
        items.sort_by_key(|e| e.event_date);
        Ok(items)
    }
}

impl DailyFactReader for TestRepository {
    fn fact_for_date(&self, date: NaiveDate) -> RepositoryResult<Option<DailyFact>> {
        Ok(self.facts.iter().find(|f| f.fact_date == date).cloned())
    }
}
