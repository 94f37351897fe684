use std::path::PathBuf;

use chrono::Local;

use crate::config::RunConfig;
use crate::data::visa::{merge_visa_file, MergeReport};
use crate::net::HttpFetcher;
use crate::pipeline::{self, NORMALIZED_DUMP_FILE};

const USAGE: &str = "usage: pacenote <global|korea|aims|merge-visa [dataset-file] [visa-file]>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Global,
    Korea,
    Aims,
    MergeVisa,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("global") => Some(Command::Global),
        Some("korea") => Some(Command::Korea),
        Some("aims") => Some(Command::Aims),
        Some("merge-visa") => Some(Command::MergeVisa),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };
    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return 1;
        }
    };
    match command {
        Command::Global => handle_global(&config),
        Command::Korea => handle_korea(&config),
        Command::Aims => handle_aims(&config),
        Command::MergeVisa => handle_merge_visa(args, &config),
    }
}

fn http_fetcher() -> Option<HttpFetcher> {
    match HttpFetcher::new() {
        Ok(fetcher) => Some(fetcher),
        Err(err) => {
            eprintln!("failed to build HTTP client: {err}");
            None
        }
    }
}

fn handle_global(config: &RunConfig) -> i32 {
    let Some(fetcher) = http_fetcher() else {
        return 1;
    };
    let summary = match pipeline::run_global(&fetcher, config, Local::now().date_naive()) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("global run failed: {err}");
            return 1;
        }
    };

    println!(
        "collected {} unique records in {} requests ({} failed)",
        summary.collected, summary.requests, summary.failed_requests
    );
    let (Some(raw_path), Some(normalized_path)) = (&summary.raw_path, &summary.normalized_path)
    else {
        println!("no records collected; nothing written");
        return 0;
    };
    println!(
        "normalized {} records ({} past events dropped, {} failed)",
        summary.normalized, summary.past_events, summary.failed_records
    );
    if let Some(stats) = &summary.stats {
        print!("{}", stats.render());
    }
    print!("{}", summary.samples);
    for (path, report) in &summary.visa_reports {
        print_merge_report(path, report);
    }
    println!("wrote {}", raw_path.display());
    println!("wrote {}", normalized_path.display());
    0
}

fn handle_korea(config: &RunConfig) -> i32 {
    let Some(fetcher) = http_fetcher() else {
        return 1;
    };
    match pipeline::run_korea(&fetcher, config, Local::now().date_naive()) {
        Ok(summary) => {
            println!(
                "listed {} events, {} already past, {} failed",
                summary.listed, summary.past_events, summary.failed
            );
            println!("wrote {} ({} events)", summary.path.display(), summary.written);
            0
        }
        Err(err) => {
            eprintln!("race calendar run failed: {err}");
            1
        }
    }
}

fn handle_aims(config: &RunConfig) -> i32 {
    let Some(fetcher) = http_fetcher() else {
        return 1;
    };
    match pipeline::run_federation(&fetcher, config) {
        Ok(summary) => {
            println!("wrote {} ({} events)", summary.path.display(), summary.events);
            0
        }
        Err(err) => {
            eprintln!("federation calendar run failed: {err}");
            1
        }
    }
}

fn handle_merge_visa(args: &[String], config: &RunConfig) -> i32 {
    let file = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(NORMALIZED_DUMP_FILE);
    let dataset_path = config.data_dir.join(file);
    let visa_path = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.visa_path.clone());

    match merge_visa_file(&dataset_path, &visa_path) {
        Ok(report) => {
            print_merge_report(&dataset_path, &report);
            0
        }
        Err(err) => {
            eprintln!("visa merge failed: {err}");
            1
        }
    }
}

fn print_merge_report(path: &std::path::Path, report: &MergeReport) {
    println!(
        "visa merge {}: {} records ({}), matched={}, unmatched={}, visa_free={}, visa_required={}, no_data={}",
        path.display(),
        report.total,
        report.shape,
        report.matched,
        report.unmatched,
        report.visa_free,
        report.visa_required,
        report.no_data
    );
    if !report.unmatched_countries.is_empty() {
        let codes: Vec<&str> = report.unmatched_countries.iter().map(String::as_str).collect();
        println!("  unmatched country codes: {}", codes.join(", "));
    }
}
