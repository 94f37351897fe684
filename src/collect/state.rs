use std::collections::HashSet;

use serde_json::Value;

/// Id of a raw search record. The API sends strings, but integer ids are accepted
/// too; anything else (or an empty string) has no id.
pub fn record_id(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Every unique record seen so far, in first-seen order. The first copy of an id
/// wins; later copies are ignored even if their content differs.
#[derive(Debug, Default)]
pub struct CollectionState {
    records: Vec<Value>,
    seen: HashSet<String>,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the record was new. Records without an id are dropped.
    pub fn insert(&mut self, record: Value) -> bool {
        let Some(id) = record_id(&record) else {
            return false;
        };
        if !self.seen.insert(id) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Value> {
        self.records
    }
}
