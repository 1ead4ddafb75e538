//! Pure list composition for category pages: a static filter table per
//! category slug plus one of three sort comparators. Recomputed in full on
//! every parameter change, no caching.

use serde::{Deserialize, Serialize};

use crate::domain::types::ObjectType;
use crate::dto::objects::ObjectCard;

/// One selectable filter chip: a label and the object types it admits.
/// An empty type set admits everything.
#[derive(Debug, Clone, Copy)]
pub struct TypeFilter {
    pub label: &'static str,
    pub types: &'static [ObjectType],
}

const ALL: TypeFilter = TypeFilter {
    label: "All",
    types: &[],
};

const PLANET_FILTERS: &[TypeFilter] = &[
    ALL,
    TypeFilter {
        label: "Planets",
        types: &[ObjectType::Planet],
    },
    TypeFilter {
        label: "Exoplanets",
        types: &[ObjectType::Exoplanet],
    },
    TypeFilter {
        label: "Moons",
        types: &[ObjectType::Moon],
    },
];

const STAR_FILTERS: &[TypeFilter] = &[
    ALL,
    TypeFilter {
        label: "Stars",
        types: &[ObjectType::Star],
    },
];

const GALAXY_FILTERS: &[TypeFilter] = &[
    ALL,
    TypeFilter {
        label: "Galaxies",
        types: &[ObjectType::Galaxy],
    },
];

const NEBULA_FILTERS: &[TypeFilter] = &[
    ALL,
    TypeFilter {
        label: "Nebulas",
        types: &[ObjectType::Nebula],
    },
];

const BLACK_HOLE_FILTERS: &[TypeFilter] = &[
    ALL,
    TypeFilter {
        label: "Black Holes",
        types: &[ObjectType::BlackHole],
    },
];

const ASTEROID_FILTERS: &[TypeFilter] = &[
    ALL,
    TypeFilter {
        label: "Asteroids",
        types: &[ObjectType::Asteroid],
    },
    TypeFilter {
        label: "Comets",
        types: &[ObjectType::Comet],
    },
];

const COMET_FILTERS: &[TypeFilter] = &[
    ALL,
    TypeFilter {
        label: "Comets",
        types: &[ObjectType::Comet],
    },
];

const CONSTELLATION_FILTERS: &[TypeFilter] = &[
    ALL,
    TypeFilter {
        label: "Constellations",
        types: &[ObjectType::Constellation],
    },
];

const UNKNOWN_FILTERS: &[TypeFilter] = &[ALL];

/// Filter chips for a category page. Unknown slugs get a lone "All" chip,
/// so composition degrades to the identity filter.
pub fn filters_for(category_slug: &str) -> &'static [TypeFilter] {
    match category_slug {
        "planets" => PLANET_FILTERS,
        "stars" => STAR_FILTERS,
        "galaxies" => GALAXY_FILTERS,
        "nebulas" => NEBULA_FILTERS,
        "black-holes" => BLACK_HOLE_FILTERS,
        "asteroids" => ASTEROID_FILTERS,
        "comets" => COMET_FILTERS,
        "constellations" => CONSTELLATION_FILTERS,
        _ => UNKNOWN_FILTERS,
    }
}

/// Sort order requested by the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending name; equal names keep their input order.
    #[default]
    Name,
    /// Descending discovery year; a missing year counts as 0 and sorts last.
    Discovery,
    /// Ascending distance; a missing distance counts as infinite and sorts
    /// last. When no item carries a distance the order is unchanged.
    Distance,
}

/// Filters then sorts a listing. Pure: the result depends only on the
/// inputs, and the sort is stable.
pub fn compose(
    items: Vec<ObjectCard>,
    category_slug: &str,
    filter_index: usize,
    sort_key: SortKey,
) -> Vec<ObjectCard> {
    let filters = filters_for(category_slug);
    let allowed = filters.get(filter_index).map(|f| f.types).unwrap_or(&[]);

    let mut items: Vec<ObjectCard> = if filter_index == 0 || allowed.is_empty() {
        items
    } else {
        items
            .into_iter()
            .filter(|item| allowed.iter().any(|t| t.as_str() == item.object_type))
            .collect()
    };

    match sort_key {
        SortKey::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Discovery => items.sort_by(|a, b| {
            let a_year = a.discovery_year.unwrap_or(0);
            let b_year = b.discovery_year.unwrap_or(0);
            b_year.cmp(&a_year)
        }),
        SortKey::Distance => items.sort_by(|a, b| {
            let a_dist = a.distance_light_years.unwrap_or(f64::INFINITY);
            let b_dist = b.distance_light_years.unwrap_or(f64::INFINITY);
            a_dist.total_cmp(&b_dist)
        }),
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, object_type: &str, year: Option<i32>, distance: Option<f64>) -> ObjectCard {
        ObjectCard {
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            object_type: object_type.to_string(),
            type_label: object_type.to_string(),
            thumbnail_url: None,
            discovery_year: year,
            distance_light_years: distance,
            short_description: None,
            constellation: None,
        }
    }

    fn names(items: &[ObjectCard]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn name_sort_is_ascending_and_stable() {
        let items = vec![
            card("Ceres", "asteroid", Some(2015), None),
            card("Ceres", "asteroid", None, None),
            card("Ariel", "moon", Some(1986), None),
        ];
        let out = compose(items, "asteroids", 0, SortKey::Name);
        assert_eq!(names(&out), ["Ariel", "Ceres", "Ceres"]);
        assert_eq!(out[1].discovery_year, Some(2015));
        assert_eq!(out[2].discovery_year, None);
    }

    #[test]
    fn discovery_sort_is_descending_with_missing_year_last() {
        let items = vec![
            card("Ceres", "asteroid", Some(2015), None),
            card("Ceres", "asteroid", None, None),
            card("Ariel", "moon", Some(1986), None),
        ];
        let out = compose(items, "asteroids", 0, SortKey::Discovery);
        assert_eq!(
            out.iter().map(|i| i.discovery_year).collect::<Vec<_>>(),
            [Some(2015), Some(1986), None]
        );
    }

    #[test]
    fn distance_sort_is_ascending_with_missing_last() {
        let items = vec![
            card("Vega", "star", None, Some(25.0)),
            card("Sirius", "star", None, None),
            card("Proxima", "star", None, Some(4.2)),
        ];
        let out = compose(items, "stars", 0, SortKey::Distance);
        assert_eq!(names(&out), ["Proxima", "Vega", "Sirius"]);
    }

    #[test]
    fn distance_sort_without_distances_keeps_order() {
        let items = vec![
            card("Vega", "star", None, None),
            card("Sirius", "star", None, None),
        ];
        let out = compose(items, "stars", 0, SortKey::Distance);
        assert_eq!(names(&out), ["Vega", "Sirius"]);
    }

    #[test]
    fn comet_category_has_no_asteroid_chip() {
        let labels: Vec<&str> = filters_for("comets").iter().map(|f| f.label).collect();
        assert_eq!(labels, ["All", "Comets"]);

        let items = vec![
            card("Halley", "comet", None, None),
            card("Ceres", "asteroid", None, None),
        ];
        let out = compose(items, "comets", 1, SortKey::Name);
        assert_eq!(names(&out), ["Halley"]);
    }

    #[test]
    fn filter_restricts_to_allowed_types() {
        let items = vec![
            card("Mars", "planet", None, None),
            card("Europa", "moon", None, None),
            card("Kepler-452b", "exoplanet", None, None),
        ];
        let out = compose(items, "planets", 3, SortKey::Name);
        assert_eq!(names(&out), ["Europa"]);
    }

    #[test]
    fn index_zero_passes_everything() {
        let items = vec![
            card("Mars", "planet", None, None),
            card("Europa", "moon", None, None),
        ];
        let out = compose(items.clone(), "planets", 0, SortKey::Name);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn unknown_slug_is_identity_filter() {
        let items = vec![
            card("Mars", "planet", None, None),
            card("Vega", "star", None, None),
        ];
        let out = compose(items.clone(), "wormholes", 5, SortKey::Name);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let items = vec![
            card("Ceres", "asteroid", Some(2015), None),
            card("Ariel", "moon", Some(1986), None),
        ];
        let once = compose(items, "asteroids", 0, SortKey::Name);
        let twice = compose(once.clone(), "asteroids", 0, SortKey::Name);
        assert_eq!(once, twice);
    }
}
