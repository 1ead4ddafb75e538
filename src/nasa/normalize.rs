//! Maps loosely-typed search records into the view shapes the pages render.
//!
//! One contract for every consumer: a record is usable only when both its
//! `data` and `links` arrays are non-empty, and unusable or unsluggable
//! records are skipped rather than aborting the page.

use crate::domain::types::Slug;
use crate::dto::nasa::{ArticleItem, NasaItem};
use crate::dto::objects::ObjectCard;
use crate::nasa::client::{RecordData, RecordLink, SearchRecord};

/// Substituted when the upstream record carries no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided by NASA.";

fn usable(record: &SearchRecord) -> Option<(&RecordData, &RecordLink)> {
    let data = record.data.first()?;
    let link = record.links.first()?;
    if data.title.is_empty() || link.href.is_empty() {
        return None;
    }
    Some((data, link))
}

fn description_of(data: &RecordData) -> String {
    data.description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DESCRIPTION_PLACEHOLDER)
        .to_string()
}

/// Year component of an ISO creation date ("2023-04-01T..." -> 2023).
fn year_of(date_created: Option<&str>) -> Option<i32> {
    date_created?.get(0..4)?.parse().ok()
}

/// `YYYY-MM-DD` prefix of an ISO creation date.
fn date_prefix(date_created: Option<&str>) -> Option<String> {
    let date = date_created?;
    date.get(0..10).map(str::to_string)
}

/// Normalizes one record for the explorer grid.
pub fn nasa_item(record: &SearchRecord) -> Option<NasaItem> {
    let (data, link) = usable(record)?;
    Some(NasaItem {
        nasa_id: data.nasa_id.clone(),
        title: data.title.clone(),
        description: description_of(data),
        image_url: link.href.clone(),
        year: year_of(data.date_created.as_deref()),
    })
}

/// Normalizes one record into a category listing card.
///
/// The upstream archive knows nothing about our taxonomy, so `object_type`
/// echoes the requested category slug. Distance and constellation stay
/// empty; the archive supplies neither.
pub fn object_card(record: &SearchRecord, category_slug: &str) -> Option<ObjectCard> {
    let (data, link) = usable(record)?;
    let slug = Slug::derive(&data.title).ok()?;
    Some(ObjectCard {
        name: data.title.clone(),
        slug: slug.into_inner(),
        object_type: category_slug.to_string(),
        type_label: label_from_slug(category_slug),
        thumbnail_url: Some(link.href.clone()),
        discovery_year: year_of(data.date_created.as_deref()),
        distance_light_years: None,
        short_description: Some(description_of(data)),
        constellation: None,
    })
}

/// Normalizes one record into an article teaser.
pub fn article_item(record: &SearchRecord) -> Option<ArticleItem> {
    let (data, link) = usable(record)?;
    let slug = Slug::derive(&data.title).ok()?;
    Some(ArticleItem {
        nasa_id: data.nasa_id.clone(),
        title: data.title.clone(),
        description: description_of(data),
        image_url: link.href.clone(),
        slug: slug.into_inner(),
        date: date_prefix(data.date_created.as_deref()).unwrap_or_default(),
    })
}

fn label_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
