//! Tolerant accessors over one raw JSON object. Absent or null fields read as
//! defaults; a present field of an impossible type is an error for the record.

use serde_json::{Map, Value};

use super::NormalizeError;

pub(super) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(super) fn new(raw: &'a Value) -> Result<Self, NormalizeError> {
        raw.as_object()
            .map(|map| Self { map })
            .ok_or(NormalizeError::NotAnObject)
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    pub(super) fn id(&self) -> String {
        match self.present("id") {
            Some(Value::Number(id)) => id.to_string(),
            _ => self.string("id"),
        }
    }

    /// Strings as is, numbers rendered, anything else empty.
    pub(super) fn string(&self, key: &str) -> String {
        match self.present(key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => String::new(),
        }
    }

    pub(super) fn flag(&self, key: &str) -> bool {
        self.present(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub(super) fn raw(&self, key: &str) -> Value {
        self.present(key).cloned().unwrap_or(Value::Null)
    }

    pub(super) fn list(&self, key: &str) -> Vec<Value> {
        self.present(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    pub(super) fn float(&self, key: &'static str) -> Result<Option<f64>, NormalizeError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Number(number)) => Ok(number.as_f64()),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
            Some(Value::String(text)) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| invalid(key, &Value::String(text.clone()))),
            Some(other) => Err(invalid(key, other)),
        }
    }

    pub(super) fn integer(&self, key: &'static str) -> Result<Option<i64>, NormalizeError> {
        Ok(self.float(key)?.map(|value| value.trunc() as i64))
    }

    pub(super) fn count(&self, key: &'static str) -> Result<u64, NormalizeError> {
        Ok(self.integer(key)?.map_or(0, |value| value.max(0) as u64))
    }

    /// `None` when absent; every element must be numeric.
    pub(super) fn number_list(
        &self,
        key: &'static str,
    ) -> Result<Option<Vec<f64>>, NormalizeError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_f64().ok_or_else(|| invalid(key, item)))
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(invalid(key, other)),
        }
    }

    /// `label` of every tag object, in source order; malformed tags read as empty.
    pub(super) fn tag_labels(&self, key: &str) -> Vec<String> {
        let Some(items) = self.present(key).and_then(Value::as_array) else {
            return Vec::new();
        };
        items
            .iter()
            .map(|item| {
                item.get("label")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }
}

fn invalid(field: &'static str, value: &Value) -> NormalizeError {
    NormalizeError::InvalidField {
        field,
        value: value.to_string(),
    }
}
