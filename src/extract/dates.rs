//! Date helpers for the calendar sources.
//!
//! Normalizers return the input unchanged when it does not match a known shape;
//! callers check with [`parse_iso_date`] whether a value was actually normalized.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Year assumed for list-page dates written as "M/D".
pub const DEFAULT_LISTING_YEAR: i32 = 2026;

const PERIOD_SEPARATOR: char = '~';

fn month_day_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})").expect("valid M/D regex"))
}

fn long_form_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]{4})년\s*([0-9]{1,2})월\s*([0-9]{1,2})일")
            .expect("valid long-form date regex")
    })
}

fn start_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"출발시간:\s*([0-9]{1,2}:[0-9]{2})").expect("valid start time regex")
    })
}

fn iso(year: i32, month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.format("%Y-%m-%d").to_string())
}

/// "2/8" (with `year`) or "2026년2월8일" → "2026-02-08". Anything else is returned as is.
pub fn normalize_date(raw: &str, year: i32) -> String {
    if let Some(caps) = month_day_re().captures(raw) {
        let month = caps[1].parse().unwrap_or(0);
        let day = caps[2].parse().unwrap_or(0);
        return iso(year, month, day).unwrap_or_else(|| raw.to_string());
    }
    if let Some(caps) = long_form_re().captures(raw) {
        let parsed_year = caps[1].parse().unwrap_or(0);
        let month = caps[2].parse().unwrap_or(0);
        let day = caps[3].parse().unwrap_or(0);
        return iso(parsed_year, month, day).unwrap_or_else(|| raw.to_string());
    }
    raw.to_string()
}

/// "2025년10월28일~2026년2월1일" → ("2025-10-28", "2026-02-01").
///
/// Empty input gives two empty strings; input without exactly one separator comes
/// back whole in the first slot.
pub fn split_registration_period(period: &str, year: i32) -> (String, String) {
    if period.is_empty() {
        return (String::new(), String::new());
    }
    let parts: Vec<&str> = period.split(PERIOD_SEPARATOR).collect();
    if parts.len() != 2 {
        return (period.to_string(), String::new());
    }
    (
        normalize_date(parts[0].trim(), year),
        normalize_date(parts[1].trim(), year),
    )
}

/// Date component of an ISO-8601 date or date-time, with or without offset.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|stamp| stamp.date())
}

/// "출발시간: 8:30" inside the detail page's date/time cell.
pub fn extract_start_time(datetime_text: &str) -> Option<String> {
    start_time_re()
        .captures(datetime_text)
        .map(|caps| caps[1].to_string())
}

/// "January 2026" → (1, 2026).
pub fn parse_month_header(text: &str) -> Option<(u32, i32)> {
    let mut parts = text.split_whitespace();
    let month_name = parts.next()?;
    let year = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = match month_name {
        "January" => 1,
        "February" => 2,
        "March" => 3,
        "April" => 4,
        "May" => 5,
        "June" => 6,
        "July" => 7,
        "August" => 8,
        "September" => 9,
        "October" => 10,
        "November" => 11,
        "December" => 12,
        _ => return None,
    };
    Some((month, year))
}

/// "7", "7-8" or "7–8" (en dash) → first and last day of the event.
pub fn parse_day_range(text: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = text.split(['-', '\u{2013}']).collect();
    let start = parts.first()?.trim().parse().ok()?;
    let end = parts.last()?.trim().parse().ok()?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_date_shapes_normalize() {
        assert_eq!(normalize_date("2/8", 2026), "2026-02-08");
        assert_eq!(normalize_date("12/25(목)", 2025), "2025-12-25");
        assert_eq!(normalize_date("2026년2월8일", 2000), "2026-02-08");
        assert_eq!(normalize_date("2026년 10월 3일 오전", 2000), "2026-10-03");
    }

    #[test]
    fn unrecognized_or_impossible_dates_come_back_unchanged() {
        assert_eq!(normalize_date("미정", 2026), "미정");
        assert_eq!(normalize_date("13/45", 2026), "13/45");
        assert_eq!(normalize_date("", 2026), "");
    }

    #[test]
    fn registration_period_splits_on_tilde() {
        assert_eq!(
            split_registration_period("2025년10월28일~2026년2월1일", 2026),
            ("2025-10-28".to_string(), "2026-02-01".to_string())
        );
        assert_eq!(
            split_registration_period("선착순 마감", 2026),
            ("선착순 마감".to_string(), String::new())
        );
        assert_eq!(split_registration_period("", 2026), (String::new(), String::new()));
    }

    #[test]
    fn iso_dates_with_and_without_time() {
        let expected = NaiveDate::from_ymd_opt(2026, 4, 19);
        assert_eq!(parse_iso_date("2026-04-19"), expected);
        assert_eq!(parse_iso_date("2026-04-19T07:30:00"), expected);
        assert_eq!(parse_iso_date("2026-04-19T07:30:00.000Z"), expected);
        assert_eq!(parse_iso_date("2026-04-19T07:30:00+09:00"), expected);
        assert_eq!(parse_iso_date("April 19"), None);
    }

    #[test]
    fn federation_calendar_helpers() {
        assert_eq!(parse_month_header("March 2026"), Some((3, 2026)));
        assert_eq!(parse_month_header("Marzo 2026"), None);
        assert_eq!(parse_day_range("7"), Some((7, 7)));
        assert_eq!(parse_day_range("7\u{2013}8"), Some((7, 8)));
        assert_eq!(parse_day_range("tbc"), None);
        assert_eq!(extract_start_time("2026년3월1일 출발시간: 8:30"), Some("8:30".to_string()));
    }
}
