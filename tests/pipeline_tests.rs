mod common;

use std::fs;
use std::time::Duration;

use chrono::NaiveDate;
use common::{page, plan, search_settings, unique_temp_dir, ScriptedFetch, SEARCH_URL};
use pacenote::config::RunConfig;
use pacenote::pipeline::{
    run_federation, run_global, run_korea, PipelineError, FEDERATION_DUMP_FILE,
    KOREA_DUMP_FILE, NORMALIZED_DUMP_FILE, RAW_DUMP_FILE,
};
use serde_json::{json, Value};

fn test_config(dir: &std::path::Path) -> RunConfig {
    let mut config = RunConfig::default();
    config.data_dir = dir.to_path_buf();
    config.visa_path = dir.join("visa.json");
    config.search = search_settings(1000);
    config.plan = plan(&["asia"], &["full_marathon"], &[], false);
    config.translate_cities = false;
    config.translator.delay = Duration::ZERO;
    config.korea.delay = Duration::ZERO;
    config
}

fn read(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("file should exist")).expect("json")
}

#[test]
fn global_run_writes_both_dumps_and_merges_visa() {
    let dir = unique_temp_dir("pipeline-global");
    let config = test_config(&dir);
    fs::write(
        &config.visa_path,
        json!({"response": {"body": {"items": {"item": [
            {"country_iso_alp2": "JP", "gnrl_pspt_visa_cn": "90일"}
        ]}}}})
        .to_string(),
    )
    .expect("visa fixture");

    let fetch = ScriptedFetch::new()
        .respond(
            SEARCH_URL,
            &[("continent", "asia")],
            page(
                2,
                &[
                    json!({"id": "tokyo", "title": "Tokyo Marathon", "city": "Tokyo",
                           "country": "Japan", "countryCode": "JP",
                           "dateNextRace": "2026-03-01", "minPrice": 100,
                           "raceType": "full_marathon"}),
                    json!({"id": "old", "title": "Old Race", "country": "Japan",
                           "countryCode": "JP", "dateNextRace": "2025-11-01"}),
                ],
            ),
        )
        .respond(SEARCH_URL, &[], page(0, &[]));
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");

    let summary = run_global(&fetch, &config, today).expect("run should succeed");

    assert_eq!(summary.collected, 2);
    assert_eq!(summary.normalized, 1);
    assert_eq!(summary.past_events, 1);
    assert_eq!(summary.visa_reports.len(), 2);

    let raw = read(&dir.join(RAW_DUMP_FILE));
    assert_eq!(raw["count"], 2);
    assert_eq!(raw["results"][1]["visa"], 90);

    let normalized = read(&dir.join(NORMALIZED_DUMP_FILE));
    assert_eq!(normalized["metadata"]["total_count"], 1);
    assert_eq!(normalized["metadata"]["parsed_count"], 1);
    assert_eq!(normalized["metadata"]["currency"], "EUR");
    assert_eq!(normalized["metadata"]["api_url"], SEARCH_URL);
    let tokyo = &normalized["marathons"][0];
    assert_eq!(tokyo["city"], "도쿄");
    assert_eq!(tokyo["minPrice"], 145_000);
    assert_eq!(tokyo["visa"], 90);

    let stats = summary.stats.expect("stats for a non-empty run");
    assert_eq!(stats.total, 1);
    assert_eq!(stats.top_countries, vec![("일본".to_string(), 1)]);
    assert!(summary.samples.contains("Tokyo Marathon"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn empty_collection_writes_nothing() {
    let dir = unique_temp_dir("pipeline-empty");
    let config = test_config(&dir);
    let fetch = ScriptedFetch::new();
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");

    let summary = run_global(&fetch, &config, today).expect("run should succeed");

    assert_eq!(summary.collected, 0);
    assert_eq!(summary.failed_requests, 2);
    assert!(summary.raw_path.is_none());
    assert!(!dir.join(RAW_DUMP_FILE).exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_visa_table_skips_merge() {
    let dir = unique_temp_dir("pipeline-novisa");
    let config = test_config(&dir);
    let fetch = ScriptedFetch::new().respond(
        SEARCH_URL,
        &[("continent", "asia")],
        page(1, &[json!({"id": "a", "countryCode": "JP"})]),
    );
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");

    let summary = run_global(&fetch, &config, today).expect("run should succeed");

    assert!(summary.visa_reports.is_empty());
    let normalized = read(&dir.join(NORMALIZED_DUMP_FILE));
    assert!(normalized["marathons"][0].get("visa").is_none());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn calendar_runs_write_their_files() {
    let dir = unique_temp_dir("pipeline-calendars");
    let mut config = test_config(&dir);
    config.korea.base_url = "http://calendar.test".to_string();
    config.federation.url = "https://federation.test/calendar.html".to_string();

    let fetch = ScriptedFetch::new()
        .respond(
            "http://calendar.test/list.php",
            &[],
            r#"<table><tr><td width="18%">12/31(목)</td>
               <td><a href="view.php?no=9">송년 마라톤</a></td></tr></table>"#,
        )
        .respond(
            "http://calendar.test/view.php",
            &[("no", "9")],
            "<table><tr><td>대회지역</td><td>서울</td></tr></table>",
        )
        .respond(
            "https://federation.test/calendar.html",
            &[],
            r#"<div class="calendar-month-header">May 2026</div>"#,
        );
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");

    let korea = run_korea(&fetch, &config, today).expect("calendar run");
    assert_eq!(korea.written, 1);
    let dump = read(&dir.join(KOREA_DUMP_FILE));
    assert_eq!(dump["metadata"]["total_count"], 1);
    assert_eq!(dump["metadata"]["source"], config.korea.source_url);
    assert_eq!(dump["marathons"][0]["date"], "2026-12-31");
    assert_eq!(dump["marathons"][0]["region"], "서울");

    let federation = run_federation(&fetch, &config).expect("federation run");
    assert_eq!(federation.events, 0);
    let calendar = read(&dir.join(FEDERATION_DUMP_FILE));
    assert_eq!(calendar["events"], json!([]));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unreachable_federation_page_is_fatal() {
    let dir = unique_temp_dir("pipeline-federation-down");
    let config = test_config(&dir);
    let err = run_federation(&ScriptedFetch::new(), &config).expect_err("no route");
    assert!(matches!(err, PipelineError::Fetch { .. }));
    let _ = fs::remove_dir_all(dir);
}
