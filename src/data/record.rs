//! Canonical record shapes. Field names are the compatibility surface for the app
//! that consumes the JSON, so they keep the source API's camelCase spelling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::price::PriceStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// The search API sends `startPoint` as `[longitude, latitude]`.
    pub fn from_start_point(start_point: &[f64]) -> Self {
        Self {
            latitude: start_point.get(1).copied().unwrap_or(0.0),
            longitude: start_point.first().copied().unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    pub register_possible: bool,
    pub is_sold_out: bool,
    pub is_race_day_passed: bool,
}

/// Convenience flags for the app. Always computed from the record's other inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFlags {
    pub is_available: bool,
    pub is_premium: bool,
    pub is_beginner_friendly: bool,
    pub is_scenic: bool,
    pub has_reviews: bool,
    pub has_early_bird: bool,
}

impl DerivedFlags {
    /// `tag_slugs` are the raw tag labels, before localization.
    pub fn compute<S: AsRef<str>>(
        status: &RegistrationStatus,
        tag_slugs: &[S],
        reviews_count: u64,
        early_bird_days_left: Option<i64>,
    ) -> Self {
        let has_tag = |wanted: &str| tag_slugs.iter().any(|slug| slug.as_ref() == wanted);
        Self {
            is_available: status.register_possible
                && !status.is_sold_out
                && !status.is_race_day_passed,
            is_premium: has_tag("premium") || has_tag("boston-marathon-qualifier"),
            is_beginner_friendly: has_tag("beginner-friendly"),
            is_scenic: has_tag("scenic") || has_tag("nature"),
            has_reviews: reviews_count > 0,
            has_early_bird: early_bird_days_left.is_some_and(|days| days > 0),
        }
    }
}

/// One search-API event after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalMarathonRecord {
    pub id: String,
    pub title: String,

    pub date_next_race: String,
    pub str_date_next_race: String,
    pub str_date_range_next_race_week_day: String,
    pub first_race_date: Value,
    pub last_race_date: Value,

    pub city: String,
    pub country: String,
    pub country_code: String,
    pub location: String,
    pub continent: String,
    pub start_point: Vec<f64>,
    pub coordinates: Coordinates,

    pub race_type: String,
    pub race_type_label: String,
    pub distance: Value,
    pub unique_distances: Vec<Value>,
    pub race_distances: Vec<Value>,
    pub main_distance: Value,

    pub image: String,
    pub image_small: String,
    pub image_extra_small: String,
    pub thumbnail: String,

    pub min_price: i64,
    pub min_price_formatted: String,
    pub price_status: PriceStatus,
    pub early_bird_days_left: Option<i64>,

    pub surface: String,
    pub course_difficulty: String,

    pub tags: Vec<String>,
    pub participants_estimate: Option<String>,

    pub rating: f64,
    pub reviews_count: u64,

    pub self_link: String,
    pub website: String,

    #[serde(flatten)]
    pub registration: RegistrationStatus,
    #[serde(flatten)]
    pub flags: DerivedFlags,

    /// Attached later by the visa merge; absent from freshly normalized output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa: Option<u32>,
}

impl CanonicalMarathonRecord {
    /// "city, country", whichever half is present, or empty.
    pub fn display_location(city: &str, country: &str) -> String {
        match (city.is_empty(), country.is_empty()) {
            (false, false) => format!("{city}, {country}"),
            (false, true) => city.to_string(),
            (true, false) => country.to_string(),
            (true, true) => String::new(),
        }
    }
}

/// One event from the Korean race calendar (list + detail page merged).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KoreaMarathonRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub day_of_week: String,
    pub start_time: String,
    pub distances: String,
    pub region: String,
    pub venue: String,
    pub organizer: String,
    pub representative: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub registration_start_date: String,
    pub registration_end_date: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

/// One event from the federation calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FederationEvent {
    pub event_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub country_code: Option<String>,
    pub city: Option<String>,
    pub distances: Vec<String>,
    pub aims_url: Option<String>,
}
