//! Marathon event aggregation: exhaustive collection from a capped search API,
//! two scraped race calendars, field extraction and normalization into canonical
//! records, and a visa-data merge over the written datasets.

pub mod cli;
pub mod collect;
pub mod config;
pub mod data;
pub mod extract;
pub mod logging;
pub mod net;
pub mod normalize;
pub mod pipeline;
pub mod sources;
pub mod stats;
pub mod tables;
