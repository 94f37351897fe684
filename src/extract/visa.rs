//! Visa-free stay duration from the free-text policy column of the visa table.
//!
//! The text is written by hand ("90일", "180일 중 90일", "6개월", "X", ...), so this is
//! a best-effort heuristic. Same input always gives the same answer.

use std::sync::OnceLock;

use regex::Regex;

/// Stay lengths that policies use most often; preferred when several numbers appear.
pub const COMMON_STAY_PERIODS: [u32; 4] = [30, 60, 90, 180];

/// Numbers up to this value are list markers or footnote numbers, not durations.
const NOISE_CEILING: u32 = 5;
const DAYS_PER_MONTH: u32 = 30;

const REQUIRED_MARKER: char = 'X';
const DAY_UNIT: &str = "일";
const WINDOW_MARKERS: [&str; 2] = ["중", "이내"];

fn day_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]+)일").expect("valid day count regex"))
}

fn month_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]+)\s*개월").expect("valid month count regex"))
}

fn integer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("valid integer regex"))
}

/// Number of visa-free days, or `None` when a visa is required or nothing usable is found.
pub fn parse_visa_text(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.to_uppercase().starts_with(REQUIRED_MARKER) {
        return None;
    }

    let has_day_unit = text.contains(DAY_UNIT);

    // "180일 중 90일", "6개월중 누적 90일": the last day count is the allowance.
    if has_day_unit && WINDOW_MARKERS.iter().any(|marker| text.contains(marker)) {
        let days: Vec<u32> = day_count_re()
            .captures_iter(text)
            .filter_map(|caps| caps[1].parse().ok())
            .collect();
        if let Some(&last) = days.last() {
            return Some(last);
        }
    }

    if !has_day_unit {
        if let Some(months) = month_count_re()
            .captures(text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        {
            return Some(months.saturating_mul(DAYS_PER_MONTH));
        }
    }

    let mut numbers: Vec<u32> = integer_re()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .filter(|&n| n > NOISE_CEILING)
        .collect();

    match numbers.len() {
        0 => None,
        1 => Some(numbers[0]),
        _ => {
            if let Some(&period) = COMMON_STAY_PERIODS.iter().find(|&&p| numbers.contains(&p)) {
                return Some(period);
            }
            numbers.sort_unstable();
            Some(numbers[numbers.len() / 2])
        }
    }
}
