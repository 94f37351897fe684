#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pacenote::collect::{PartitionPlan, SearchSettings};
use pacenote::net::{Fetch, FetchError, Request};
use serde_json::{json, Value};

pub const SEARCH_URL: &str = "https://search.test/api";

/// Query keys every search request carries; routes match on the rest.
const BASE_KEYS: [&str; 3] = ["sport", "all", "currency"];

struct Route {
    url: String,
    filters: Vec<(String, String)>,
    response: Result<String, u16>,
}

/// In-memory `Fetch`: answers from registered routes and records every request.
/// A request without a route gets HTTP 404.
#[derive(Default)]
pub struct ScriptedFetch {
    routes: Vec<Route>,
    calls: RefCell<Vec<Request>>,
}

impl ScriptedFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, filters: &[(&str, &str)], body: impl Into<String>) -> Self {
        self.routes.push(Route {
            url: url.to_string(),
            filters: to_pairs(filters),
            response: Ok(body.into()),
        });
        self
    }

    pub fn fail(mut self, url: &str, filters: &[(&str, &str)], status: u16) -> Self {
        self.routes.push(Route {
            url: url.to_string(),
            filters: to_pairs(filters),
            response: Err(status),
        });
        self
    }

    pub fn calls(&self) -> Vec<Request> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|request| request.url == url)
            .count()
    }
}

fn to_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    pairs.sort();
    pairs
}

impl Fetch for ScriptedFetch {
    fn fetch(&self, request: &Request) -> Result<String, FetchError> {
        self.calls.borrow_mut().push(request.clone());

        let mut filters: Vec<(String, String)> = request
            .query
            .iter()
            .filter(|(key, _)| !BASE_KEYS.contains(&key.as_str()))
            .cloned()
            .collect();
        filters.sort();

        let route = self
            .routes
            .iter()
            .find(|route| route.url == request.url && route.filters == filters);
        match route.map(|route| &route.response) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status {
                status: *status,
                url: request.url.clone(),
            }),
            None => Err(FetchError::Status {
                status: 404,
                url: request.url.clone(),
            }),
        }
    }
}

pub fn search_settings(cap: usize) -> SearchSettings {
    SearchSettings {
        url: SEARCH_URL.to_string(),
        base_params: vec![
            ("sport".to_string(), "running".to_string()),
            ("all".to_string(), "true".to_string()),
            ("currency".to_string(), "EUR".to_string()),
        ],
        headers: vec![("Accept".to_string(), "application/json".to_string())],
        timeout: Duration::from_secs(1),
        cap,
        delay: Duration::ZERO,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn plan(continents: &[&str], race_types: &[&str], catch_all: &[&str], sweep: bool) -> PartitionPlan {
    PartitionPlan {
        continents: strings(continents),
        race_types: strings(race_types),
        catch_all_continents: strings(catch_all),
        sweep_countries: sweep,
    }
}

/// Minimal search-API record.
pub fn raw_event(id: &str, country: &str, title: &str) -> Value {
    json!({"id": id, "country": country, "title": title})
}

/// Search response body with an explicit reported `count`.
pub fn page(count: usize, results: &[Value]) -> String {
    json!({"count": count, "results": results}).to_string()
}

pub fn unique_temp_dir(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("pacenote-{name}-{stamp}"));
    std::fs::create_dir_all(&dir).expect("temp dir should be created");
    dir
}
