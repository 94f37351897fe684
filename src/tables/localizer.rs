//! City-name localization: static table first, then a cached remote translation.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::{lookup, Category};
use crate::net::{Fetch, Request};

/// Memo of remote translations keyed by the source city name. Grows for the whole
/// run; the number of distinct cities in one collection is small.
#[derive(Debug, Clone, Default)]
pub struct TranslationCache {
    entries: HashMap<String, String>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct TranslationPayload {
    #[serde(default, rename = "responseData")]
    response_data: Option<TranslationData>,
}

#[derive(Debug, Default, Deserialize)]
struct TranslationData {
    #[serde(default, rename = "translatedText")]
    translated_text: Option<String>,
}

/// Settings for the remote translator.
#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    pub endpoint: String,
    pub language_pair: String,
    pub timeout: Duration,
    /// Pause after every remote call.
    pub delay: Duration,
}

#[derive(Debug)]
pub struct CityLocalizer<F> {
    fetcher: F,
    settings: TranslatorSettings,
    cache: TranslationCache,
    remote_calls: usize,
}

impl<F: Fetch> CityLocalizer<F> {
    pub fn new(fetcher: F, settings: TranslatorSettings) -> Self {
        Self::with_cache(fetcher, settings, TranslationCache::new())
    }

    pub fn with_cache(fetcher: F, settings: TranslatorSettings, cache: TranslationCache) -> Self {
        Self {
            fetcher,
            settings,
            cache,
            remote_calls: 0,
        }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn remote_calls(&self) -> usize {
        self.remote_calls
    }

    /// Table → cache → remote translator → original value.
    pub fn localize(&mut self, city: &str) -> String {
        if city.trim().is_empty() {
            return city.to_string();
        }
        if let Some(label) = lookup(Category::City, city) {
            return label.to_string();
        }
        if let Some(cached) = self.cache.lookup(city) {
            return cached.to_string();
        }

        let translated = self.translate_remote(city);
        self.cache.insert(city, translated.clone());
        if !self.settings.delay.is_zero() {
            thread::sleep(self.settings.delay);
        }
        translated
    }

    fn translate_remote(&mut self, city: &str) -> String {
        self.remote_calls += 1;
        let request = Request::get(self.settings.endpoint.clone())
            .with_query(vec![
                ("q".to_string(), city.to_string()),
                ("langpair".to_string(), self.settings.language_pair.clone()),
            ])
            .with_timeout(self.settings.timeout);

        let body = match self.fetcher.fetch(&request) {
            Ok(body) => body,
            Err(err) => {
                debug!(city, error = %err, "city translation unavailable; keeping original");
                return city.to_string();
            }
        };

        let payload: TranslationPayload = serde_json::from_str(&body).unwrap_or_default();
        match payload.response_data.and_then(|data| data.translated_text) {
            Some(translated) if !translated.trim().is_empty() && translated != city => translated,
            _ => city.to_string(),
        }
    }
}
