//! Raw search-API record → [`CanonicalMarathonRecord`].
//!
//! Past events are dropped; everything else is localized, priced and flagged.
//! A record whose fields cannot be read is reported as an error for that record
//! only; [`normalize_all`] logs it and carries on with the batch.

mod fields;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{info, warn};

use crate::data::record::{CanonicalMarathonRecord, Coordinates, DerivedFlags, RegistrationStatus};
use crate::extract::{estimate_participants, parse_iso_date, Price};
use crate::net::Fetch;
use crate::tables::{label_for, Category, CityLocalizer};

use fields::Fields;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NormalizeError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("field `{field}` has an unusable value: {value}")]
    InvalidField { field: &'static str, value: String },
}

/// Per-run inputs that are not part of the record.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext {
    /// Events strictly before this date are dropped.
    pub today: NaiveDate,
    /// Source currency → won.
    pub krw_rate: f64,
}

pub fn normalize<F: Fetch>(
    raw: &Value,
    ctx: &NormalizeContext,
    localizer: &mut CityLocalizer<F>,
) -> Result<Option<CanonicalMarathonRecord>, NormalizeError> {
    let fields = Fields::new(raw)?;

    let date_next_race = fields.string("dateNextRace");
    if let Some(race_date) = parse_iso_date(&date_next_race) {
        if race_date < ctx.today {
            return Ok(None);
        }
    }

    let raw_city = fields.string("city");
    let raw_country = fields.string("country");
    let city = localizer.localize(&raw_city);
    let country = label_for(Category::Country, &raw_country);
    let location = CanonicalMarathonRecord::display_location(&city, &country);

    let start_point = fields
        .number_list("startPoint")?
        .unwrap_or_else(|| vec![0.0, 0.0]);
    let coordinates = Coordinates::from_start_point(&start_point);

    let race_type = fields.string("raceType");
    let distance = fields.raw("distance");
    let unique_distances = fields.list("uniqueDistances");
    let main_distance = unique_distances
        .first()
        .cloned()
        .unwrap_or_else(|| distance.clone());

    let image = fields.string("image");
    let image_small = fields.string("imageSmall");
    let image_extra_small = fields.string("imageExtraSmall");
    let thumbnail = [&image_small, &image_extra_small, &image]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .cloned()
        .unwrap_or_default();
    let price = Price::from_source(fields.float("minPrice")?, ctx.krw_rate);

    let tag_slugs = fields.tag_labels("tags");
    let tags = tag_slugs
        .iter()
        .map(|slug| label_for(Category::Tag, slug))
        .collect();

    let registration = RegistrationStatus {
        register_possible: fields.flag("registerPossible"),
        is_sold_out: fields.flag("isSoldOut"),
        is_race_day_passed: fields.flag("isRaceDayPassed"),
    };
    let reviews_count = fields.count("reviewsCount")?;
    let early_bird_days_left = fields.integer("earlyBirdDaysLeft")?;
    let flags = DerivedFlags::compute(&registration, &tag_slugs, reviews_count, early_bird_days_left);

    Ok(Some(CanonicalMarathonRecord {
        id: fields.id(),
        title: fields.string("title"),
        str_date_next_race: fields.string("strDateNextRace"),
        str_date_range_next_race_week_day: fields.string("strDateRangeNextRaceWeekDay"),
        first_race_date: fields.raw("firstRaceDate"),
        last_race_date: fields.raw("lastRaceDate"),
        date_next_race,
        continent: label_for(Category::Continent, &raw_country),
        country_code: fields.string("countryCode"),
        city,
        country,
        location,
        start_point,
        coordinates,
        race_type_label: label_for(Category::RaceType, &race_type),
        race_type,
        distance,
        unique_distances,
        race_distances: fields.list("raceDistances"),
        main_distance,
        image,
        image_small,
        image_extra_small,
        thumbnail,
        min_price: price.amount(),
        min_price_formatted: price.formatted(),
        price_status: price.status(),
        early_bird_days_left,
        surface: label_for(Category::Surface, &fields.string("surface")),
        course_difficulty: label_for(Category::Difficulty, &fields.string("courseDifficulty")),
        participants_estimate: estimate_participants(&tag_slugs).map(str::to_string),
        tags,
        rating: fields.float("rating")?.unwrap_or(0.0),
        reviews_count,
        self_link: fields.string("selfLink"),
        website: fields.string("website"),
        registration,
        flags,
        visa: None,
    }))
}

#[derive(Debug, Default)]
pub struct NormalizeOutcome {
    pub records: Vec<CanonicalMarathonRecord>,
    pub past_events: usize,
    pub failed: usize,
}

/// Normalizes a batch. A bad record is logged with its 1-based index and skipped.
pub fn normalize_all<F: Fetch>(
    raws: &[Value],
    ctx: &NormalizeContext,
    localizer: &mut CityLocalizer<F>,
) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();
    for (index, raw) in raws.iter().enumerate() {
        match normalize(raw, ctx, localizer) {
            Ok(Some(record)) => outcome.records.push(record),
            Ok(None) => outcome.past_events += 1,
            Err(err) => {
                outcome.failed += 1;
                let id = raw.get("id").cloned().unwrap_or_default();
                warn!(
                    record = index + 1,
                    id = %id,
                    error = %err,
                    "skipping record"
                );
            }
        }
        if (index + 1) % 500 == 0 {
            info!(done = index + 1, total = raws.len(), "normalizing");
        }
    }
    info!(
        kept = outcome.records.len(),
        past = outcome.past_events,
        failed = outcome.failed,
        translated = localizer.cache().len(),
        "normalization finished"
    );
    outcome
}
