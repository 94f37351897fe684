//! Dataset containers written to disk and the JSON read/write helpers they share.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::{CanonicalMarathonRecord, FederationEvent, KoreaMarathonRecord};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize dataset for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Raw search results exactly as collected, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDump {
    pub count: usize,
    pub results: Vec<Value>,
}

impl RawDump {
    pub fn new(results: Vec<Value>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpMetadata {
    /// Records written to the dump.
    pub total_count: usize,
    /// Records that survived normalization.
    pub parsed_count: usize,
    pub fetched_at: String,
    pub api_url: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDump {
    pub metadata: DumpMetadata,
    pub marathons: Vec<CanonicalMarathonRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMetadata {
    pub total_count: usize,
    pub fetched_at: String,
    pub source: String,
}

/// Korean race calendar output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDump {
    pub metadata: CalendarMetadata,
    pub marathons: Vec<KoreaMarathonRecord>,
}

/// Federation calendar output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FederationCalendar {
    pub source: String,
    pub updated_at: String,
    pub events: Vec<FederationEvent>,
}

/// Pretty-printed UTF-8 JSON, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DatasetError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| DatasetError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DatasetError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_json_value(path: &Path) -> Result<Value, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
