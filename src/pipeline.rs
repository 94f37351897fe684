//! Run orchestration: one function per source, each ending with files on disk.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, SecondsFormat};
use tracing::{info, warn};

use crate::collect::ExhaustiveCollector;
use crate::config::RunConfig;
use crate::data::dataset::{
    write_json, CalendarDump, CalendarMetadata, DatasetError, DumpMetadata, NormalizedDump,
    RawDump,
};
use crate::data::visa::{merge_visa_file, MergeReport};
use crate::net::{Fetch, FetchError, Offline};
use crate::normalize::{normalize_all, NormalizeContext};
use crate::sources::{collect_federation, collect_korea};
use crate::stats::{render_samples, DatasetStats};
use crate::tables::CityLocalizer;

pub const RAW_DUMP_FILE: &str = "marathons_global_raw.json";
pub const NORMALIZED_DUMP_FILE: &str = "marathons_global.json";
pub const KOREA_DUMP_FILE: &str = "marathons_korea.json";
pub const FEDERATION_DUMP_FILE: &str = "aims_marathons.json";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("failed to fetch the {what}: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: FetchError,
    },
}

#[derive(Debug)]
pub struct GlobalRunSummary {
    pub requests: usize,
    pub failed_requests: usize,
    pub collected: usize,
    pub normalized: usize,
    pub past_events: usize,
    pub failed_records: usize,
    /// Both `None` when the collection came back empty and nothing was written.
    pub raw_path: Option<PathBuf>,
    pub normalized_path: Option<PathBuf>,
    pub stats: Option<DatasetStats>,
    pub samples: String,
    pub visa_reports: Vec<(PathBuf, MergeReport)>,
}

fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Search API: collect → raw dump → normalize → dump → statistics → visa merge.
pub fn run_global<F: Fetch>(
    fetcher: &F,
    config: &RunConfig,
    today: NaiveDate,
) -> Result<GlobalRunSummary, PipelineError> {
    let report = ExhaustiveCollector::new(fetcher, &config.search, &config.plan).collect();
    let mut summary = GlobalRunSummary {
        requests: report.requests(),
        failed_requests: report.failed(),
        collected: report.records.len(),
        normalized: 0,
        past_events: 0,
        failed_records: 0,
        raw_path: None,
        normalized_path: None,
        stats: None,
        samples: String::new(),
        visa_reports: Vec::new(),
    };
    if report.records.is_empty() {
        warn!("collection returned no records; nothing written");
        return Ok(summary);
    }

    let raw_path = config.data_dir.join(RAW_DUMP_FILE);
    let raw = RawDump::new(report.records);
    write_json(&raw_path, &raw)?;
    info!(path = %raw_path.display(), records = raw.count, "raw dump written");

    let offline = Offline;
    let translator: &dyn Fetch = if config.translate_cities {
        fetcher
    } else {
        &offline
    };
    let mut localizer = CityLocalizer::new(translator, config.translator.clone());
    let ctx = NormalizeContext {
        today,
        krw_rate: config.krw_rate,
    };
    let outcome = normalize_all(&raw.results, &ctx, &mut localizer);

    let normalized_path = config.data_dir.join(NORMALIZED_DUMP_FILE);
    let dump = NormalizedDump {
        metadata: DumpMetadata {
            total_count: outcome.records.len(),
            parsed_count: outcome.records.len(),
            fetched_at: timestamp(),
            api_url: config.search.url.clone(),
            currency: config.currency.clone(),
        },
        marathons: outcome.records,
    };
    write_json(&normalized_path, &dump)?;
    info!(path = %normalized_path.display(), records = dump.marathons.len(), "normalized dump written");

    summary.normalized = dump.marathons.len();
    summary.past_events = outcome.past_events;
    summary.failed_records = outcome.failed;
    summary.stats = Some(DatasetStats::compute(&dump.marathons));
    summary.samples = render_samples(&dump.marathons);
    summary.visa_reports = merge_visa_into(
        &[raw_path.as_path(), normalized_path.as_path()],
        &config.visa_path,
    );
    summary.raw_path = Some(raw_path);
    summary.normalized_path = Some(normalized_path);
    Ok(summary)
}

/// Visa merge as a post-processing step; failures are reported, never fatal.
fn merge_visa_into(datasets: &[&Path], visa_path: &Path) -> Vec<(PathBuf, MergeReport)> {
    if !visa_path.exists() {
        warn!(path = %visa_path.display(), "visa table not found; skipping visa merge");
        return Vec::new();
    }
    let mut reports = Vec::new();
    for dataset in datasets {
        match merge_visa_file(dataset, visa_path) {
            Ok(report) => {
                info!(
                    dataset = %dataset.display(),
                    matched = report.matched,
                    unmatched = report.unmatched,
                    "visa data merged"
                );
                reports.push((dataset.to_path_buf(), report));
            }
            Err(err) => warn!(dataset = %dataset.display(), error = %err, "visa merge failed"),
        }
    }
    reports
}

#[derive(Debug)]
pub struct KoreaRunSummary {
    pub listed: usize,
    pub past_events: usize,
    pub failed: usize,
    pub written: usize,
    pub path: PathBuf,
}

pub fn run_korea<F: Fetch>(
    fetcher: &F,
    config: &RunConfig,
    today: NaiveDate,
) -> Result<KoreaRunSummary, PipelineError> {
    let outcome =
        collect_korea(fetcher, &config.korea, today).map_err(|source| PipelineError::Fetch {
            what: "race calendar list page",
            source,
        })?;

    let path = config.data_dir.join(KOREA_DUMP_FILE);
    let dump = CalendarDump {
        metadata: CalendarMetadata {
            total_count: outcome.records.len(),
            fetched_at: timestamp(),
            source: config.korea.source_url.clone(),
        },
        marathons: outcome.records,
    };
    write_json(&path, &dump)?;

    Ok(KoreaRunSummary {
        listed: outcome.listed,
        past_events: outcome.past_events,
        failed: outcome.failed,
        written: dump.marathons.len(),
        path,
    })
}

#[derive(Debug)]
pub struct FederationRunSummary {
    pub events: usize,
    pub path: PathBuf,
}

pub fn run_federation<F: Fetch>(
    fetcher: &F,
    config: &RunConfig,
) -> Result<FederationRunSummary, PipelineError> {
    let calendar =
        collect_federation(fetcher, &config.federation).map_err(|source| PipelineError::Fetch {
            what: "federation calendar",
            source,
        })?;
    let path = config.data_dir.join(FEDERATION_DUMP_FILE);
    write_json(&path, &calendar)?;
    Ok(FederationRunSummary {
        events: calendar.events.len(),
        path,
    })
}
