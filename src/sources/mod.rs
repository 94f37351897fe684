//! Scraped calendar sources: the Korean race calendar and the federation calendar.
//! Both degrade field by field: missing markup yields an empty value, never an error.

pub mod federation;
mod html;
pub mod korea;

pub use federation::{collect_federation, parse_calendar, FederationSettings};
pub use korea::{
    collect_korea, merge_event, parse_detail_page, parse_list_page, CalendarSettings,
    EventDetail, KoreaOutcome, ListingEntry,
};
