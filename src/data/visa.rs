//! Attaches visa-free stay lengths to an existing dataset file.
//!
//! The dataset is edited as untyped JSON so every field it already carries (and the
//! container shape, `marathons` or `results`) survives untouched; each record gains
//! exactly one `visa` field: an integer day count or `null`.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dataset::{read_json_value, write_json, DatasetError};
use crate::extract::visa::parse_visa_text;

pub const VISA_FIELD: &str = "visa";
pub const COUNTRY_CODE_FIELD: &str = "countryCode";

#[derive(Debug, thiserror::Error)]
pub enum VisaError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("failed to read visa source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse visa source: {0}")]
    SourceParse(#[source] serde_json::Error),
    #[error("dataset has neither a `marathons` nor a `results` array")]
    UnknownShape,
}

/// One row of the public visa dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaEntry {
    #[serde(default)]
    pub country_iso_alp2: Option<String>,
    #[serde(default)]
    pub country_nm: Option<String>,
    #[serde(default)]
    pub gnrl_pspt_visa_cn: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct VisaSource {
    #[serde(default)]
    response: VisaResponse,
}

#[derive(Debug, Default, Deserialize)]
struct VisaResponse {
    #[serde(default)]
    body: VisaBody,
}

#[derive(Debug, Default, Deserialize)]
struct VisaBody {
    #[serde(default)]
    items: VisaItems,
}

#[derive(Debug, Default, Deserialize)]
struct VisaItems {
    #[serde(default)]
    item: Vec<VisaEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisaAllowance {
    VisaFree(u32),
    Required,
    /// The country is listed but its text carries no usable stay length.
    NoData,
}

impl VisaAllowance {
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::NoData;
        }
        if trimmed.to_uppercase().starts_with('X') {
            return Self::Required;
        }
        match parse_visa_text(trimmed) {
            Some(days) => Self::VisaFree(days),
            None => Self::NoData,
        }
    }

    pub fn days(self) -> Option<u32> {
        match self {
            Self::VisaFree(days) => Some(days),
            Self::Required | Self::NoData => None,
        }
    }
}

/// Visa rows indexed by upper-cased ISO alpha-2 code. A later row for the same code
/// replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct VisaTable {
    by_code: HashMap<String, VisaEntry>,
}

impl VisaTable {
    pub fn from_entries(entries: impl IntoIterator<Item = VisaEntry>) -> Self {
        let mut by_code = HashMap::new();
        for entry in entries {
            let Some(code) = entry
                .country_iso_alp2
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_uppercase)
            else {
                continue;
            };
            by_code.insert(code, entry);
        }
        Self { by_code }
    }

    pub fn from_json_str(text: &str) -> Result<Self, VisaError> {
        let source: VisaSource = serde_json::from_str(text).map_err(VisaError::SourceParse)?;
        Ok(Self::from_entries(source.response.body.items.item))
    }

    pub fn load(path: &Path) -> Result<Self, VisaError> {
        let text = fs::read_to_string(path).map_err(|source| VisaError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// `None` when the code is not in the table at all.
    pub fn allowance_for(&self, country_code: &str) -> Option<VisaAllowance> {
        let entry = self.by_code.get(&country_code.trim().to_uppercase())?;
        Some(VisaAllowance::from_text(
            entry.gnrl_pspt_visa_cn.as_deref().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetShape {
    Marathons,
    Results,
}

impl DatasetShape {
    pub fn key(self) -> &'static str {
        match self {
            Self::Marathons => "marathons",
            Self::Results => "results",
        }
    }

    pub fn detect(dataset: &Value) -> Option<Self> {
        [Self::Marathons, Self::Results]
            .into_iter()
            .find(|shape| dataset.get(shape.key()).is_some_and(Value::is_array))
    }
}

impl fmt::Display for DatasetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub shape: DatasetShape,
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub visa_free: usize,
    pub visa_required: usize,
    pub no_data: usize,
    pub unmatched_countries: BTreeSet<String>,
}

impl MergeReport {
    fn new(shape: DatasetShape) -> Self {
        Self {
            shape,
            total: 0,
            matched: 0,
            unmatched: 0,
            visa_free: 0,
            visa_required: 0,
            no_data: 0,
            unmatched_countries: BTreeSet::new(),
        }
    }
}

/// Sets `visa` on every record of `dataset` in place.
pub fn merge_visa(dataset: &mut Value, table: &VisaTable) -> Result<MergeReport, VisaError> {
    let shape = DatasetShape::detect(dataset).ok_or(VisaError::UnknownShape)?;
    let mut report = MergeReport::new(shape);
    let Some(records) = dataset
        .get_mut(shape.key())
        .and_then(Value::as_array_mut)
    else {
        return Err(VisaError::UnknownShape);
    };

    for record in records.iter_mut() {
        report.total += 1;
        let Some(fields) = record.as_object_mut() else {
            report.unmatched += 1;
            continue;
        };

        let code = fields
            .get(COUNTRY_CODE_FIELD)
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let allowance = if code.is_empty() {
            None
        } else {
            table.allowance_for(&code)
        };

        match allowance {
            Some(allowance) => {
                report.matched += 1;
                match allowance {
                    VisaAllowance::VisaFree(_) => report.visa_free += 1,
                    VisaAllowance::Required => report.visa_required += 1,
                    VisaAllowance::NoData => report.no_data += 1,
                }
                fields.insert(VISA_FIELD.to_string(), allowance.days().into());
            }
            None => {
                report.unmatched += 1;
                if !code.is_empty() {
                    report.unmatched_countries.insert(code);
                }
                fields.insert(VISA_FIELD.to_string(), Value::Null);
            }
        }
    }

    Ok(report)
}

/// Reads `dataset_path`, merges visa data from `visa_path` and rewrites the file.
pub fn merge_visa_file(dataset_path: &Path, visa_path: &Path) -> Result<MergeReport, VisaError> {
    let table = VisaTable::load(visa_path)?;
    let mut dataset = read_json_value(dataset_path)?;
    let report = merge_visa(&mut dataset, &table)?;
    write_json(dataset_path, &dataset)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(code: &str, text: &str) -> VisaEntry {
        VisaEntry {
            country_iso_alp2: Some(code.to_string()),
            country_nm: None,
            gnrl_pspt_visa_cn: Some(text.to_string()),
        }
    }

    #[test]
    fn allowance_distinguishes_required_from_missing_text() {
        assert_eq!(VisaAllowance::from_text("X"), VisaAllowance::Required);
        assert_eq!(VisaAllowance::from_text(""), VisaAllowance::NoData);
        assert_eq!(VisaAllowance::from_text("사증 필요"), VisaAllowance::NoData);
        assert_eq!(VisaAllowance::from_text("90일"), VisaAllowance::VisaFree(90));
    }

    #[test]
    fn table_keys_are_case_insensitive() {
        let table = VisaTable::from_entries([entry("jp", "90일"), entry("", "30일")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.allowance_for("JP"), Some(VisaAllowance::VisaFree(90)));
        assert_eq!(table.allowance_for("kr"), None);
    }

    #[test]
    fn merge_keeps_results_shape_and_other_fields() {
        let table = VisaTable::from_entries([entry("DE", "90일"), entry("CN", "X")]);
        let mut dataset = json!({
            "count": 3,
            "results": [
                {"id": "1", "countryCode": "de", "extra": {"nested": true}},
                {"id": "2", "countryCode": "CN"},
                {"id": "3", "countryCode": "ZZ"}
            ]
        });

        let report = merge_visa(&mut dataset, &table).expect("merge");
        assert_eq!(report.shape, DatasetShape::Results);
        assert_eq!((report.matched, report.unmatched), (2, 1));
        assert_eq!(report.visa_required, 1);
        assert!(report.unmatched_countries.contains("ZZ"));

        assert_eq!(dataset["count"], 3);
        assert_eq!(dataset["results"][0]["visa"], 90);
        assert_eq!(dataset["results"][0]["extra"]["nested"], true);
        assert!(dataset["results"][1]["visa"].is_null());
        assert!(dataset["results"][2]["visa"].is_null());
    }

    #[test]
    fn unknown_container_is_rejected() {
        let mut dataset = json!({"events": []});
        let err = merge_visa(&mut dataset, &VisaTable::default()).expect_err("no known key");
        assert!(matches!(err, VisaError::UnknownShape));
    }
}
