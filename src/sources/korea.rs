//! Korean race calendar: one list page plus a detail page per upcoming event.
//!
//! The site is EUC-KR and table based; fields are found by cell widths on the list
//! page and by row labels on the detail page.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use super::html::{cached, compact_text, spaced_text};
use crate::data::record::KoreaMarathonRecord;
use crate::extract::dates::{
    extract_start_time, normalize_date, parse_iso_date, split_registration_period,
};
use crate::extract::distances::filter_distances;
use crate::extract::image::fetch_hero_image;
use crate::extract::price::{extract_price, format_won_plain};
use crate::net::{Fetch, FetchError, Request};

#[derive(Debug, Clone)]
pub struct CalendarSettings {
    /// Directory holding `list.php` and `view.php`.
    pub base_url: String,
    /// Recorded in the output metadata.
    pub source_url: String,
    pub charset: String,
    pub timeout: Duration,
    pub hero_timeout: Duration,
    pub delay: Duration,
    /// Year for list-page dates, which carry only month and day.
    pub listing_year: i32,
}

impl CalendarSettings {
    fn list_request(&self) -> Request {
        Request::get(format!("{}/list.php", self.base_url))
            .with_charset(&self.charset)
            .with_timeout(self.timeout)
    }

    fn detail_request(&self, id: &str) -> Request {
        Request::get(format!("{}/view.php", self.base_url))
            .with_query(vec![("no".to_string(), id.to_string())])
            .with_charset(&self.charset)
            .with_timeout(self.timeout)
    }
}

/// One row of the list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingEntry {
    pub id: String,
    pub title: String,
    /// "M/D" as printed, or empty.
    pub date: String,
    pub day_of_week: String,
    pub distances: String,
    pub location: String,
    pub organizer: String,
    pub phone: String,
    pub website: String,
}

/// Labelled fields of a detail page. `None` means the row was absent, which lets
/// the list-page value stand in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDetail {
    pub title: Option<String>,
    pub representative: Option<String>,
    pub email: Option<String>,
    pub datetime: Option<String>,
    pub phone: Option<String>,
    pub distances: Option<String>,
    pub region: Option<String>,
    pub venue: Option<String>,
    pub organizer: Option<String>,
    pub registration_period: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    /// "35000원", taken from the description.
    pub price: Option<String>,
}

fn detail_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"view\.php\?no=([0-9]+)").expect("valid detail link regex"))
}

fn month_day_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]{1,2}/[0-9]{1,2})").expect("valid M/D regex"))
}

fn weekday_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((.)\)").expect("valid weekday regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"☎?([0-9\-]+)").expect("valid phone regex"))
}

fn mail_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"mail_url=([^'"&]+)"#).expect("valid mail link regex"))
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<br\s*/?>").expect("valid line break regex"))
}

fn markup_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid markup tag regex"))
}

fn anchor_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, "a[href]")
}

fn distance_font_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, r##"font[color="#990000"]"##)
}

fn date_cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, r#"td[width="18%"]"#)
}

fn location_cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, r#"td[width="19%"]"#)
}

fn organizer_cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, r#"td[width="30%"]"#)
}

fn homepage_link_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, r#"a[target="_new"][href^="http"]"#)
}

fn row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, "tr")
}

fn cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    cached(&SEL, "td")
}

/// Every distinct event linked from the list page, in page order.
pub fn parse_list_page(html: &str) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);

    // Document position of every node, for "first distance label after this link".
    let position: HashMap<_, usize> = document
        .root_element()
        .descendants()
        .enumerate()
        .map(|(index, node)| (node.id(), index))
        .collect();
    let distance_labels: Vec<(usize, String)> = document
        .select(distance_font_selector())
        .filter_map(|font| Some((*position.get(&font.id())?, compact_text(font))))
        .collect();

    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    for anchor in document.select(anchor_selector()) {
        let Some(id) = anchor
            .value()
            .attr("href")
            .and_then(|href| detail_link_re().captures(href))
            .map(|caps| caps[1].to_string())
        else {
            continue;
        };
        if !seen.insert(id.clone()) {
            continue;
        }

        let title = compact_text(anchor);
        if title.is_empty() {
            continue;
        }

        let anchor_position = position.get(&anchor.id()).copied().unwrap_or(0);
        let distances = distance_labels
            .iter()
            .find(|(at, _)| *at > anchor_position)
            .map(|(_, label)| label.clone())
            .unwrap_or_default();

        let mut entry = ListingEntry {
            id,
            title,
            distances,
            ..ListingEntry::default()
        };
        if let Some(row) = enclosing_row(anchor) {
            fill_from_row(&mut entry, row);
        }
        entries.push(entry);
    }
    entries
}

fn enclosing_row(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "tr")
}

fn fill_from_row(entry: &mut ListingEntry, row: ElementRef<'_>) {
    if let Some(cell) = row.select(date_cell_selector()).next() {
        let text = compact_text(cell);
        if let Some(caps) = month_day_re().captures(&text) {
            entry.date = caps[1].to_string();
        }
        if let Some(caps) = weekday_re().captures(&text) {
            entry.day_of_week = caps[1].to_string();
        }
    }

    if let Some(cell) = row.select(location_cell_selector()).next() {
        entry.location = compact_text(cell);
    }

    if let Some(cell) = row.select(organizer_cell_selector()).next() {
        let text = spaced_text(cell);
        if let Some(caps) = phone_re().captures(&text) {
            entry.phone = caps[1].to_string();
        }
        entry.organizer = text.split('☎').next().unwrap_or_default().trim().to_string();
    }

    if let Some(link) = row.select(homepage_link_selector()).next() {
        entry.website = link.value().attr("href").unwrap_or_default().to_string();
    }
}

/// Labelled rows of a detail page; unknown labels are ignored and a repeated label
/// keeps its last value.
pub fn parse_detail_page(html: &str) -> EventDetail {
    let document = Html::parse_document(html);
    let mut detail = EventDetail::default();

    for row in document.select(row_selector()) {
        let cells: Vec<ElementRef<'_>> = row.select(cell_selector()).collect();
        let [label_cell, value_cell, ..] = cells.as_slice() else {
            continue;
        };
        let value_cell = *value_cell;
        let slot = match compact_text(*label_cell).as_str() {
            "대회명" => &mut detail.title,
            "대표자명" => &mut detail.representative,
            "E-mail" => {
                detail.email = Some(email_value(value_cell));
                continue;
            }
            "대회일시" => &mut detail.datetime,
            "전화번호" => &mut detail.phone,
            "대회종목" => &mut detail.distances,
            "대회지역" => &mut detail.region,
            "대회장소" => &mut detail.venue,
            "주최단체" => &mut detail.organizer,
            "접수기간" => &mut detail.registration_period,
            "홈페이지" => {
                detail.website = Some(link_or_text(value_cell));
                continue;
            }
            "기타소개" => {
                detail.description = Some(description_text(value_cell));
                continue;
            }
            _ => continue,
        };
        *slot = Some(compact_text(value_cell));
    }

    detail.price = detail
        .description
        .as_deref()
        .and_then(extract_price)
        .map(format_won_plain);
    detail
}

fn link_or_text(cell: ElementRef<'_>) -> String {
    cell.select(anchor_selector())
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(str::to_string)
        .unwrap_or_else(|| compact_text(cell))
}

fn email_value(cell: ElementRef<'_>) -> String {
    let Some(link) = cell.select(anchor_selector()).next() else {
        return compact_text(cell);
    };
    let href = link.value().attr("href").unwrap_or_default();
    mail_url_re()
        .captures(href)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| compact_text(cell))
}

/// Cell markup with `<br>` as newlines and every other tag removed.
fn description_text(cell: ElementRef<'_>) -> String {
    let markup = cell.inner_html();
    let with_breaks = line_break_re().replace_all(&markup, "\n");
    let plain = markup_tag_re().replace_all(&with_breaks, "");
    plain.replace("&nbsp;", " ").trim().to_string()
}

/// Detail values win over list values whenever the detail row exists.
pub fn merge_event(
    listing: &ListingEntry,
    detail: EventDetail,
    image: String,
    year: i32,
) -> KoreaMarathonRecord {
    let period = detail.registration_period.unwrap_or_default();
    let (registration_start_date, registration_end_date) = split_registration_period(&period, year);
    let distances = detail.distances.unwrap_or_else(|| listing.distances.clone());

    KoreaMarathonRecord {
        id: listing.id.clone(),
        title: detail.title.unwrap_or_else(|| listing.title.clone()),
        date: normalize_date(&listing.date, year),
        day_of_week: listing.day_of_week.clone(),
        start_time: detail
            .datetime
            .as_deref()
            .and_then(extract_start_time)
            .unwrap_or_default(),
        distances: filter_distances(&distances),
        region: detail.region.unwrap_or_default(),
        venue: detail.venue.unwrap_or_else(|| listing.location.clone()),
        organizer: detail.organizer.unwrap_or_else(|| listing.organizer.clone()),
        representative: detail.representative.unwrap_or_default(),
        phone: detail.phone.unwrap_or_else(|| listing.phone.clone()),
        email: detail.email.unwrap_or_default(),
        website: detail.website.unwrap_or_else(|| listing.website.clone()),
        registration_start_date,
        registration_end_date,
        price: detail.price.unwrap_or_default(),
        description: detail.description.unwrap_or_default(),
        image,
    }
}

#[derive(Debug, Default)]
pub struct KoreaOutcome {
    pub records: Vec<KoreaMarathonRecord>,
    pub listed: usize,
    pub past_events: usize,
    pub failed: usize,
}

/// Fetches the list page, drops past events and enriches the rest from their
/// detail pages and homepages. Only a failed list page is an error.
pub fn collect_korea<F: Fetch>(
    fetcher: &F,
    settings: &CalendarSettings,
    today: NaiveDate,
) -> Result<KoreaOutcome, FetchError> {
    let listing_html = fetcher.fetch(&settings.list_request())?;
    let listings = parse_list_page(&listing_html);
    info!(listed = listings.len(), "calendar list parsed");

    let mut outcome = KoreaOutcome {
        listed: listings.len(),
        ..KoreaOutcome::default()
    };
    let upcoming: Vec<&ListingEntry> = listings
        .iter()
        .filter(|listing| {
            let date = normalize_date(&listing.date, settings.listing_year);
            parse_iso_date(&date).map_or(true, |date| date >= today)
        })
        .collect();
    outcome.past_events = listings.len() - upcoming.len();
    info!(upcoming = upcoming.len(), "fetching detail pages");

    for (index, listing) in upcoming.iter().enumerate() {
        let detail = match fetcher.fetch(&settings.detail_request(&listing.id)) {
            Ok(html) => parse_detail_page(&html),
            Err(err) => {
                outcome.failed += 1;
                warn!(id = %listing.id, title = %listing.title, error = %err, "detail page failed; skipping");
                pause(settings.delay);
                continue;
            }
        };
        pause(settings.delay);

        let homepage = detail
            .website
            .clone()
            .unwrap_or_else(|| listing.website.clone());
        let image = fetch_hero_image(
            fetcher,
            Request::get(homepage.clone()).with_timeout(settings.hero_timeout),
            &listing.id,
        );
        if !homepage.trim().is_empty() {
            pause(settings.delay);
        }

        outcome
            .records
            .push(merge_event(listing, detail, image, settings.listing_year));
        if (index + 1) % 10 == 0 {
            info!(done = index + 1, total = upcoming.len(), "detail pages");
        }
    }

    info!(collected = outcome.records.len(), failed = outcome.failed, "calendar finished");
    Ok(outcome)
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_HTML: &str = r##"
        <table>
          <tr>
            <td width="18%">3/15<br>(일)</td>
            <td><a href="view.php?no=101">서울 하프 마라톤</a><br>
                <font size="2" color="#990000">하프,10km</font></td>
            <td width="19%">여의도공원</td>
            <td width="30%">서울육상연맹<br>☎02-123-4567</td>
            <td><a href="https://seoulhalf.example" target="_new">홈</a></td>
          </tr>
          <tr>
            <td width="18%">4/2(목)</td>
            <td><a href="view.php?no=102">춘천 마라톤</a></td>
            <td width="19%">춘천</td>
            <td width="30%">강원도</td>
          </tr>
          <tr><td><a href="view.php?no=101">중복 링크</a></td></tr>
        </table>"##;

    #[test]
    fn list_rows_are_read_by_cell_width() {
        let entries = parse_list_page(LIST_HTML);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.title != "중복 링크"));

        let first = &entries[0];
        assert_eq!(first.id, "101");
        assert_eq!(first.title, "서울 하프 마라톤");
        assert_eq!(first.date, "3/15");
        assert_eq!(first.day_of_week, "일");
        assert_eq!(first.distances, "하프,10km");
        assert_eq!(first.location, "여의도공원");
        assert_eq!(first.organizer, "서울육상연맹");
        assert_eq!(first.phone, "02-123-4567");
        assert_eq!(first.website, "https://seoulhalf.example");

        let second = &entries[1];
        assert_eq!(second.date, "4/2");
        assert_eq!(second.day_of_week, "목");
        assert_eq!(second.phone, "");
        assert_eq!(second.organizer, "강원도");
        assert_eq!(second.website, "");
    }

    const DETAIL_HTML: &str = r#"
        <table>
          <tr><td>대회명</td><td>제10회 서울 하프 마라톤</td></tr>
          <tr><td>E-mail</td><td><a href="javascript:mail('x')?mail_url=run@example.kr&amp;y=1">메일</a></td></tr>
          <tr><td>대회일시</td><td>2026년3월15일 출발시간: 8:30</td></tr>
          <tr><td>접수기간</td><td>2026년1월1일~2026년2월28일</td></tr>
          <tr><td>홈페이지</td><td><a href="https://seoulhalf.example/">seoulhalf</a></td></tr>
          <tr><td>기타소개</td><td>참가비: 하프 35,000원<br/>기념품&nbsp;제공</td></tr>
        </table>"#;

    #[test]
    fn detail_rows_are_read_by_label() {
        let detail = parse_detail_page(DETAIL_HTML);
        assert_eq!(detail.title.as_deref(), Some("제10회 서울 하프 마라톤"));
        assert_eq!(detail.email.as_deref(), Some("run@example.kr"));
        assert_eq!(detail.website.as_deref(), Some("https://seoulhalf.example/"));
        assert_eq!(detail.description.as_deref(), Some("참가비: 하프 35,000원\n기념품 제공"));
        assert_eq!(detail.price.as_deref(), Some("35000원"));
        assert_eq!(detail.region, None);
    }

    #[test]
    fn merge_prefers_detail_and_normalizes_dates() {
        let listing = parse_list_page(LIST_HTML).remove(0);
        let detail = parse_detail_page(DETAIL_HTML);
        let record = merge_event(&listing, detail, "https://img.example/x.jpg".to_string(), 2026);

        assert_eq!(record.title, "제10회 서울 하프 마라톤");
        assert_eq!(record.date, "2026-03-15");
        assert_eq!(record.start_time, "8:30");
        assert_eq!(record.distances, "하프,10km");
        assert_eq!(record.venue, "여의도공원");
        assert_eq!(record.registration_start_date, "2026-01-01");
        assert_eq!(record.registration_end_date, "2026-02-28");
        assert_eq!(record.price, "35000원");
    }
}
