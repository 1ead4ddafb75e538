use serde::Serialize;

use crate::domain::types::Slug;
use crate::dto::discoveries::DiscoveryDto;
use crate::dto::objects::{ObjectCard, ObjectDetailDto};
use crate::repository::{DiscoveryReader, ObjectListQuery, ObjectReader};

use super::{ServiceError, ServiceResult};

const RELATED_OBJECTS_LIMIT: usize = 4;

/// Everything the object detail page renders.
#[derive(Debug, Serialize)]
pub struct ObjectPage {
    pub object: ObjectDetailDto,
    pub related: Vec<ObjectCard>,
    pub discoveries: Vec<DiscoveryDto>,
}

/// Detail page for one object: the full record, a handful of other objects
/// of the same type with the current one filtered out, and the discoveries
/// attached to it.
pub fn show_object<R>(repo: &R, slug: &str) -> ServiceResult<ObjectPage>
where
    R: ObjectReader + DiscoveryReader,
{
    let slug = match Slug::new(slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let object = match repo.get_object_by_slug(&slug) {
        Ok(Some(object)) => object,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get object: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let related = match repo.list_objects(ObjectListQuery::default().object_type(object.object_type))
    {
        Ok((_total, objects)) => objects
            .into_iter()
            .filter(|o| o.id != object.id)
            .take(RELATED_OBJECTS_LIMIT)
            .map(ObjectCard::from)
            .collect(),
        Err(e) => {
            log::error!("Failed to list related objects: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let discoveries = match repo.discoveries_for_object(object.id) {
        Ok(discoveries) => discoveries.into_iter().map(DiscoveryDto::from).collect(),
        Err(e) => {
            log::error!("Failed to list discoveries for object: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(ObjectPage {
        object: object.into(),
        related,
        discoveries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discovery::Discovery;
    use crate::domain::object::CelestialObject;
    use crate::domain::types::{
        DiscoveryId, NonEmptyString, ObjectId, ObjectName, ObjectType, Slug,
    };
    use crate::repository::test::TestRepository;
    use chrono::{DateTime, NaiveDate};

    fn sample_object(id: i32, name: &str, object_type: ObjectType) -> CelestialObject {
        CelestialObject {
            id: ObjectId::new(id).unwrap(),
            slug: Slug::derive(name).unwrap(),
            name: ObjectName::new(name).unwrap(),
            object_type,
            category_id: None,
            short_description: None,
            detailed_description: None,
            discovery_year: None,
            discoverer: None,
            discovery_story: None,
            distance_light_years: None,
            constellation: None,
            mass: None,
            radius: None,
            temperature: None,
            age: None,
            primary_image_url: None,
            thumbnail_url: None,
            is_featured: false,
            featured_date: None,
            view_count: None,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn sample_discovery(id: i32, object_id: i32, title: &str) -> Discovery {
        Discovery {
            id: DiscoveryId::new(id).unwrap(),
            celestial_object_id: Some(ObjectId::new(object_id).unwrap()),
            title: NonEmptyString::new(title).unwrap(),
            description: None,
            discoverer: None,
            discovery_year: 1610,
            discovery_date: NaiveDate::from_ymd_opt(1610, 1, 7).unwrap(),
            significance: None,
            image_url: None,
            source_url: None,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn related_excludes_the_object_itself() {
        let repo = TestRepository::new(
            vec![],
            vec![
                sample_object(1, "Mars", ObjectType::Planet),
                sample_object(2, "Jupiter", ObjectType::Planet),
                sample_object(3, "Vega", ObjectType::Star),
            ],
        );

        let page = show_object(&repo, "mars").unwrap();
        assert_eq!(page.object.name, "Mars");
        assert_eq!(page.related.len(), 1);
        assert_eq!(page.related[0].name, "Jupiter");
    }

    #[test]
    fn includes_discoveries_for_the_object() {
        let repo = TestRepository::new(vec![], vec![sample_object(1, "Jupiter", ObjectType::Planet)])
            .with_discoveries(vec![
                sample_discovery(1, 1, "Galilean moons"),
                sample_discovery(2, 99, "Somewhere else"),
            ]);

        let page = show_object(&repo, "jupiter").unwrap();
        assert_eq!(page.discoveries.len(), 1);
        assert_eq!(page.discoveries[0].title, "Galilean moons");
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let repo = TestRepository::new(vec![], vec![]);
        assert_eq!(
            show_object(&repo, "nibiru").unwrap_err(),
            ServiceError::NotFound
        );
    }
}
