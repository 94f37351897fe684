mod common;

use common::{page, plan, raw_event, search_settings, ScriptedFetch, SEARCH_URL};
use pacenote::collect::{record_id, ExhaustiveCollector, Partition};

fn ids(records: &[serde_json::Value]) -> Vec<String> {
    records.iter().filter_map(record_id).collect()
}

#[test]
fn under_cap_continents_are_queried_once_and_first_copy_wins() {
    let fetch = ScriptedFetch::new()
        .respond(
            SEARCH_URL,
            &[("continent", "asia")],
            page(2, &[raw_event("a", "Japan", "A from asia"), raw_event("b", "Japan", "B")]),
        )
        .respond(
            SEARCH_URL,
            &[("continent", "africa")],
            page(2, &[raw_event("a", "Kenya", "A from africa"), raw_event("c", "Kenya", "C")]),
        )
        .respond(SEARCH_URL, &[], page(1, &[raw_event("d", "Peru", "D")]));
    let settings = search_settings(1000);
    let plan = plan(&["asia", "africa"], &["full_marathon"], &[], false);

    let report = ExhaustiveCollector::new(&fetch, &settings, &plan).collect();

    assert_eq!(ids(&report.records), vec!["a", "b", "c", "d"]);
    assert_eq!(report.records[0]["title"], "A from asia");
    assert_eq!(report.requests(), 3);
    assert!(fetch
        .calls()
        .iter()
        .all(|request| request.query_value("raceType").is_none()));
    assert_eq!(report.outcomes[1].new, 1, "the repeated id is not counted as new");
}

#[test]
fn over_cap_partitions_split_by_race_type_then_discovered_country() {
    let fetch = ScriptedFetch::new()
        .respond(
            SEARCH_URL,
            &[("continent", "europe")],
            page(
                10,
                &[
                    raw_event("e1", "Germany", "E1"),
                    raw_event("e2", "France", "E2"),
                    raw_event("e3", "Germany", "E3"),
                ],
            ),
        )
        .respond(
            SEARCH_URL,
            &[("continent", "asia")],
            page(1, &[raw_event("x", "Japan", "X")]),
        )
        .respond(
            SEARCH_URL,
            &[("continent", "europe"), ("raceType", "full_marathon")],
            page(2, &[raw_event("e1", "Germany", "E1"), raw_event("e4", "Italy", "E4")]),
        )
        .respond(
            SEARCH_URL,
            &[("continent", "europe"), ("raceType", "half_marathon")],
            page(
                6,
                &[
                    raw_event("e5", "Germany", "E5"),
                    raw_event("e6", "France", "E6"),
                    raw_event("e7", "Spain", "E7"),
                ],
            ),
        )
        .respond(
            SEARCH_URL,
            &[("country", "France"), ("raceType", "half_marathon")],
            page(1, &[raw_event("e6", "France", "E6")]),
        )
        .respond(
            SEARCH_URL,
            &[("country", "Germany"), ("raceType", "half_marathon")],
            page(2, &[raw_event("e5", "Germany", "E5"), raw_event("e8", "Germany", "E8")]),
        )
        .respond(
            SEARCH_URL,
            &[("country", "Italy"), ("raceType", "half_marathon")],
            page(0, &[]),
        )
        .respond(
            SEARCH_URL,
            &[("country", "Spain"), ("raceType", "half_marathon")],
            page(2, &[raw_event("e7", "Spain", "E7"), raw_event("e9", "Spain", "E9")]),
        )
        .respond(SEARCH_URL, &[], page(0, &[]));
    let settings = search_settings(3);
    let plan = plan(
        &["europe", "asia"],
        &["full_marathon", "half_marathon"],
        &[],
        false,
    );

    let report = ExhaustiveCollector::new(&fetch, &settings, &plan).collect();

    assert_eq!(
        ids(&report.records),
        vec!["e1", "e2", "e3", "x", "e4", "e5", "e6", "e7", "e8", "e9"]
    );

    // The splitting set is every country seen so far, including other continents.
    let country_queries: Vec<String> = fetch
        .calls()
        .iter()
        .filter_map(|request| request.query_value("country").map(str::to_string))
        .collect();
    assert_eq!(country_queries, vec!["France", "Germany", "Italy", "Japan", "Spain"]);

    // Japan has no route: that leaf fails and contributes nothing.
    assert_eq!(report.failed(), 1);
    let failed = report
        .outcomes
        .iter()
        .find(|outcome| outcome.failed)
        .expect("one failed partition");
    assert_eq!(
        failed.partition,
        Partition::country("Japan").with_race_type("half_marathon")
    );
    assert!(report.truncated_leaves().is_empty());
    assert!(report.discovered_countries.contains("Spain"));
}

#[test]
fn full_race_type_partition_is_not_split_further() {
    let fetch = ScriptedFetch::new()
        .respond(
            SEARCH_URL,
            &[("continent", "europe")],
            page(5, &[raw_event("e1", "Germany", "E1")]),
        )
        .respond(
            SEARCH_URL,
            &[("continent", "europe"), ("raceType", "full_marathon")],
            page(1, &[raw_event("e2", "Germany", "E2")]),
        )
        .respond(SEARCH_URL, &[], page(0, &[]));
    let settings = search_settings(1000);
    let plan = plan(&["europe"], &["full_marathon"], &[], false);

    let report = ExhaustiveCollector::new(&fetch, &settings, &plan).collect();

    assert_eq!(ids(&report.records), vec!["e1", "e2"]);
    assert!(report.outcomes[0].truncated, "reported count exceeds received rows");
    assert!(fetch
        .calls()
        .iter()
        .all(|request| request.query_value("country").is_none()));
}

#[test]
fn failed_and_malformed_partitions_contribute_nothing() {
    let fetch = ScriptedFetch::new()
        .fail(SEARCH_URL, &[("continent", "asia")], 500)
        .respond(SEARCH_URL, &[("continent", "africa")], "<html>maintenance</html>")
        .respond(
            SEARCH_URL,
            &[("continent", "europe")],
            page(1, &[raw_event("e1", "Germany", "E1")]),
        )
        .respond(SEARCH_URL, &[], page(0, &[]));
    let settings = search_settings(1000);
    let plan = plan(&["asia", "africa", "europe"], &["full_marathon"], &[], false);

    let report = ExhaustiveCollector::new(&fetch, &settings, &plan).collect();

    assert_eq!(ids(&report.records), vec!["e1"]);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.requests(), 4);
}

#[test]
fn country_sweep_and_catch_all_queries_run_last() {
    let fetch = ScriptedFetch::new()
        .respond(
            SEARCH_URL,
            &[("continent", "asia")],
            page(1, &[raw_event("a", "Japan", "A")]),
        )
        .respond(
            SEARCH_URL,
            &[("country", "Japan")],
            page(2, &[raw_event("a", "Japan", "A again"), raw_event("b", "Japan", "B")]),
        )
        .respond(SEARCH_URL, &[], page(1, &[raw_event("c", "", "C")]))
        .respond(
            SEARCH_URL,
            &[("continent", "Oceania")],
            page(1, &[raw_event("d", "Australia", "D")]),
        );
    let settings = search_settings(1000);
    let plan = plan(&["asia"], &["full_marathon"], &["Oceania"], true);

    let report = ExhaustiveCollector::new(&fetch, &settings, &plan).collect();

    assert_eq!(ids(&report.records), vec!["a", "b", "c", "d"]);
    assert_eq!(report.records[0]["title"], "A");
    let labels: Vec<String> = report
        .outcomes
        .iter()
        .map(|outcome| outcome.partition.label())
        .collect();
    assert_eq!(labels, vec!["asia", "Japan", "all", "Oceania"]);
    assert!(!report.discovered_countries.contains(""));
}

#[test]
fn every_request_carries_base_params_and_headers() {
    let fetch = ScriptedFetch::new().respond(SEARCH_URL, &[], page(0, &[]));
    let settings = search_settings(1000);
    let plan = plan(&[], &[], &[], false);

    let report = ExhaustiveCollector::new(&fetch, &settings, &plan).collect();

    assert!(report.records.is_empty());
    let calls = fetch.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query_value("sport"), Some("running"));
    assert_eq!(calls[0].query_value("all"), Some("true"));
    assert_eq!(calls[0].query_value("currency"), Some("EUR"));
    assert_eq!(calls[0].headers[0].0, "Accept");
}

#[test]
fn null_count_or_results_are_read_as_absent() {
    let fetch = ScriptedFetch::new()
        .respond(
            SEARCH_URL,
            &[("continent", "asia")],
            serde_json::json!({"count": null, "results": [raw_event("a", "Japan", "A")]})
                .to_string(),
        )
        .respond(
            SEARCH_URL,
            &[("continent", "africa")],
            serde_json::json!({"count": 0, "results": null}).to_string(),
        )
        .respond(SEARCH_URL, &[], page(0, &[]));
    let settings = search_settings(1000);
    let plan = plan(&["asia", "africa"], &["full_marathon"], &[], false);

    let report = ExhaustiveCollector::new(&fetch, &settings, &plan).collect();

    assert_eq!(ids(&report.records), vec!["a"]);
    assert_eq!(report.failed(), 0);
    assert!(!report.outcomes[0].truncated);
    assert_eq!(report.outcomes[1].received, 0);
}
