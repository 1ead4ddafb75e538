use serde::Serialize;

use crate::dto::discoveries::DiscoveryDto;
use crate::dto::events::EventDto;
use crate::repository::{DiscoveryReader, EventReader};

use super::{ServiceError, ServiceResult};

/// Discoveries and sky events rendered on the timeline page.
#[derive(Debug, Serialize)]
pub struct TimelinePage {
    pub discoveries: Vec<DiscoveryDto>,
    pub events: Vec<EventDto>,
}

/// Timeline page: all discoveries most recent year first, plus the sky
/// events calendar.
pub fn show_timeline<R>(repo: &R) -> ServiceResult<TimelinePage>
where
    R: DiscoveryReader + EventReader,
{
    let discoveries = match repo.list_discoveries() {
        Ok(discoveries) => discoveries.into_iter().map(DiscoveryDto::from).collect(),
        Err(e) => {
            log::error!("Failed to list discoveries: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let events = match repo.list_events() {
        Ok(events) => events.into_iter().map(EventDto::from).collect(),
        Err(e) => {
            log::error!("Failed to list events: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(TimelinePage {
        discoveries,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discovery::Discovery;
    use crate::domain::types::{DiscoveryId, NonEmptyString};
    use crate::repository::test::TestRepository;
    use chrono::{DateTime, NaiveDate};

    fn sample_discovery(id: i32, title: &str, year: i32) -> Discovery {
        Discovery {
            id: DiscoveryId::new(id).unwrap(),
            celestial_object_id: None,
            title: NonEmptyString::new(title).unwrap(),
            description: None,
            discoverer: None,
            discovery_year: year,
            discovery_date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            significance: None,
            image_url: None,
            source_url: None,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn discoveries_are_most_recent_first() {
        let repo = TestRepository::new(vec![], vec![]).with_discoveries(vec![
            sample_discovery(1, "Neptune", 1846),
            sample_discovery(2, "First exoplanet", 1995),
        ]);

        let page = show_timeline(&repo).unwrap();
        assert_eq!(page.discoveries[0].title, "First exoplanet");
        assert_eq!(page.discoveries[1].title, "Neptune");
        assert!(page.events.is_empty());
    }
}
