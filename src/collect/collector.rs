use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use super::partition::{Partition, PartitionPlan};
use super::state::CollectionState;
use crate::net::{Fetch, Request};

/// Response rows the search endpoint returns at most.
pub const DEFAULT_RESULT_CAP: usize = 1000;

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub url: String,
    /// Sent with every query, before the partition filters.
    pub base_params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub cap: usize,
    /// Pause after every request.
    pub delay: Duration,
}

impl SearchSettings {
    fn request_for(&self, partition: &Partition) -> Request {
        let mut query = self.base_params.clone();
        query.extend(partition.query_pairs());
        let mut request = Request::get(self.url.clone())
            .with_query(query)
            .with_timeout(self.timeout);
        for (name, value) in &self.headers {
            request = request.with_header(name, value);
        }
        request
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchPage {
    #[serde(default, deserialize_with = "null_as_default")]
    count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    results: Vec<Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchPage {
    /// The endpoint reported more matches than it returned.
    fn is_truncated(&self, cap: usize) -> bool {
        self.count > self.results.len() as u64 || self.results.len() > cap
    }
}

/// What one partition query contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOutcome {
    pub partition: Partition,
    /// `count` as reported by the endpoint.
    pub reported: u64,
    pub received: usize,
    /// Records whose id had not been seen before.
    pub new: usize,
    pub truncated: bool,
    pub failed: bool,
}

#[derive(Debug, Default)]
pub struct CollectionReport {
    pub records: Vec<Value>,
    pub outcomes: Vec<PartitionOutcome>,
    pub discovered_countries: BTreeSet<String>,
}

impl CollectionReport {
    pub fn requests(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.failed).count()
    }

    /// Leaf partitions that were still over the cap after every split.
    pub fn truncated_leaves(&self) -> Vec<&PartitionOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.truncated && outcome.partition.country.is_some())
            .collect()
    }
}

/// Runs one collection: a fixed sequence of phases, each splitting only the
/// partitions that the previous phase found truncated.
///
/// 1. one query per planned continent;
/// 2. truncated continents are re-queried per race type;
/// 3. truncated (continent, race type) pairs are re-queried per (country, race type),
///    over every country seen in any response so far;
/// 4. optionally every discovered country once without a race type;
/// 5. the catch-all queries: no filter at all, then each catch-all continent.
pub struct ExhaustiveCollector<'a, F> {
    fetcher: &'a F,
    settings: &'a SearchSettings,
    plan: &'a PartitionPlan,
    state: CollectionState,
    countries: BTreeSet<String>,
    outcomes: Vec<PartitionOutcome>,
}

impl<'a, F: Fetch> ExhaustiveCollector<'a, F> {
    pub fn new(fetcher: &'a F, settings: &'a SearchSettings, plan: &'a PartitionPlan) -> Self {
        Self {
            fetcher,
            settings,
            plan,
            state: CollectionState::new(),
            countries: BTreeSet::new(),
            outcomes: Vec::new(),
        }
    }

    pub fn collect(mut self) -> CollectionReport {
        let plan = self.plan;

        let mut over_cap_continents = Vec::new();
        for continent in &plan.continents {
            if self.query(Partition::continent(continent)) {
                over_cap_continents.push(continent.clone());
            }
        }

        let mut over_cap_pairs = Vec::new();
        for continent in &over_cap_continents {
            info!(continent = %continent, "over the cap; splitting by race type");
            for race_type in &plan.race_types {
                if self.query(Partition::continent(continent).with_race_type(race_type)) {
                    over_cap_pairs.push((continent.clone(), race_type.clone()));
                }
            }
        }

        for (continent, race_type) in &over_cap_pairs {
            let countries: Vec<String> = self.countries.iter().cloned().collect();
            info!(
                continent = %continent,
                race_type = %race_type,
                countries = countries.len(),
                "over the cap; splitting by country"
            );
            for country in &countries {
                if self.query(Partition::country(country).with_race_type(race_type)) {
                    warn!(
                        country = %country,
                        race_type = %race_type,
                        "leaf partition still over the cap; some records are unreachable"
                    );
                }
            }
        }

        if plan.sweep_countries {
            let countries: Vec<String> = self.countries.iter().cloned().collect();
            info!(countries = countries.len(), "sweeping discovered countries");
            for country in &countries {
                self.query(Partition::country(country));
            }
        }

        self.query(Partition::all());
        for continent in &plan.catch_all_continents {
            self.query(Partition::continent(continent));
        }

        info!(
            unique = self.state.len(),
            requests = self.outcomes.len(),
            "collection finished"
        );
        CollectionReport {
            records: self.state.into_records(),
            outcomes: self.outcomes,
            discovered_countries: self.countries,
        }
    }

    /// Queries one partition and merges its rows. Returns whether the response was
    /// truncated; a failed query counts as not truncated and contributes nothing.
    fn query(&mut self, partition: Partition) -> bool {
        let request = self.settings.request_for(&partition);
        let label = partition.label();
        let page = self.fetch_page(&request, &label);
        self.pause();

        let Some(page) = page else {
            self.outcomes.push(PartitionOutcome {
                partition,
                reported: 0,
                received: 0,
                new: 0,
                truncated: false,
                failed: true,
            });
            return false;
        };

        let truncated = page.is_truncated(self.settings.cap);
        let received = page.results.len();
        let mut new = 0;
        for record in page.results {
            if let Some(country) = record
                .get("country")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|country| !country.is_empty())
            {
                self.countries.insert(country.to_string());
            }
            if self.state.insert(record) {
                new += 1;
            }
        }

        if truncated {
            warn!(
                partition = %label,
                reported = page.count,
                received,
                "row-count mismatch: response truncated"
            );
        }
        info!(
            partition = %label,
            reported = page.count,
            received,
            new,
            total = self.state.len(),
            "partition merged"
        );

        self.outcomes.push(PartitionOutcome {
            partition,
            reported: page.count,
            received,
            new,
            truncated,
            failed: false,
        });
        truncated
    }

    fn fetch_page(&self, request: &Request, label: &str) -> Option<SearchPage> {
        let body = match self.fetcher.fetch(request) {
            Ok(body) => body,
            Err(err) => {
                warn!(partition = %label, error = %err, "partition query failed; skipping");
                return None;
            }
        };
        match serde_json::from_str::<SearchPage>(&body) {
            Ok(page) => Some(page),
            Err(err) => {
                warn!(partition = %label, error = %err, "partition response is not valid JSON; skipping");
                None
            }
        }
    }

    fn pause(&self) {
        if !self.settings.delay.is_zero() {
            thread::sleep(self.settings.delay);
        }
    }
}
