//! Federation race calendar: month headers followed by event items, one page.

use std::sync::OnceLock;
use std::time::Duration;

use chrono::{NaiveDate, SecondsFormat, Utc};
use scraper::{ElementRef, Html, Selector};
use tracing::info;

use super::html::{cached, compact_text};
use crate::data::dataset::FederationCalendar;
use crate::data::record::FederationEvent;
use crate::extract::dates::{parse_day_range, parse_month_header};
use crate::extract::distances::map_federation_distances;
use crate::net::{Fetch, FetchError, Request};

pub const FEDERATION_SOURCE_LABEL: &str = "aims-worldrunning.org";

const MONTH_HEADER_CLASS: &str = "calendar-month-header";

#[derive(Debug, Clone)]
pub struct FederationSettings {
    pub url: String,
    pub timeout: Duration,
}

fn calendar_entries_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, ".calendar-month-header, .calendar-item")
}

fn date_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, ".calendar-date")
}

fn race_link_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, ".calendar-race-name a")
}

fn country_code_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, ".calendar-country-code")
}

fn supinfo_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, ".calendar-supinfo")
}

/// Events in page order. Items before the first month header, and items without a
/// date cell, are skipped; "tbc" or unreadable days leave both dates `None`.
pub fn parse_calendar(html: &str) -> Vec<FederationEvent> {
    let document = Html::parse_document(html);
    let mut current_month: Option<(u32, i32)> = None;
    let mut events = Vec::new();

    for element in document.select(calendar_entries_selector()) {
        if element
            .value()
            .classes()
            .any(|class| class == MONTH_HEADER_CLASS)
        {
            if let Some(month) = parse_month_header(&compact_text(element)) {
                current_month = Some(month);
            }
            continue;
        }
        let Some((month, year)) = current_month else {
            continue;
        };
        if let Some(event) = parse_item(element, month, year) {
            events.push(event);
        }
    }
    events
}

fn parse_item(item: ElementRef<'_>, month: u32, year: i32) -> Option<FederationEvent> {
    let date_text = compact_text(item.select(date_selector()).next()?);
    let (start_date, end_date) = if date_text.eq_ignore_ascii_case("tbc") {
        (None, None)
    } else {
        parse_day_range(&date_text)
            .map(|(start, end)| (iso_day(year, month, start), iso_day(year, month, end)))
            .unwrap_or((None, None))
    };

    let race_link = item.select(race_link_selector()).next();
    let country_code = item.select(country_code_selector()).next().map(compact_text);
    let distances = item
        .select(supinfo_selector())
        .next()
        .map(|supinfo| {
            let text = compact_text(supinfo);
            let code = country_code.as_deref().unwrap_or_default();
            let remainder = if code.is_empty() {
                text
            } else {
                text.replacen(code, "", 1)
            };
            map_federation_distances(remainder.trim())
        })
        .unwrap_or_default();

    Some(FederationEvent {
        event_name: race_link.map(compact_text),
        start_date,
        end_date,
        country_code,
        city: None,
        distances,
        aims_url: race_link
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string),
    })
}

fn iso_day(year: i32, month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.format("%Y-%m-%d").to_string())
}

pub fn collect_federation<F: Fetch>(
    fetcher: &F,
    settings: &FederationSettings,
) -> Result<FederationCalendar, FetchError> {
    let request = Request::get(settings.url.clone())
        .with_charset("utf-8")
        .with_timeout(settings.timeout);
    let html = fetcher.fetch(&request)?;
    let events = parse_calendar(&html);
    info!(events = events.len(), "federation calendar parsed");
    Ok(FederationCalendar {
        source: FEDERATION_SOURCE_LABEL.to_string(),
        updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        events,
    })
}
