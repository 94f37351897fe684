//! Field extractors: small pure functions that turn one loosely formatted input
//! into one normalized value. None of them fail; malformed input yields a
//! conservative default (`None`, empty string, or the input unchanged).

pub mod dates;
pub mod distances;
pub mod image;
pub mod participants;
pub mod price;
pub mod visa;

pub use dates::{
    extract_start_time, normalize_date, parse_day_range, parse_iso_date, parse_month_header,
    split_registration_period, DEFAULT_LISTING_YEAR,
};
pub use distances::{filter_distances, map_federation_distances, ALLOWED_DISTANCES};
pub use image::{
    collect_image_candidates, hero_image_fallback, is_image_url, pick_hero_image,
    select_hero_image, FALLBACK_IMAGES,
};
pub use participants::estimate_participants;
pub use price::{extract_price, round_to_hundreds, Price};
pub use visa::parse_visa_text;
