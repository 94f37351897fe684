//! Run configuration. Defaults are the production endpoints and politeness
//! settings; a handful of `PACENOTE_*` environment variables override them.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::collect::collector::DEFAULT_RESULT_CAP;
use crate::collect::{PartitionPlan, SearchSettings};
use crate::extract::DEFAULT_LISTING_YEAR;
use crate::sources::{CalendarSettings, FederationSettings};
use crate::tables::TranslatorSettings;

pub const SEARCH_API_URL: &str = "https://worldsmarathons.com/api/search";
pub const SEARCH_REFERER: &str = "https://worldsmarathons.com/";
pub const TRANSLATE_API_URL: &str = "https://api.mymemory.translated.net/get";
pub const KOREA_CALENDAR_BASE_URL: &str = "http://www.roadrun.co.kr/schedule";
pub const KOREA_CALENDAR_SOURCE: &str = "http://www.marathon.pe.kr/index_calendar.html";
pub const FEDERATION_CALENDAR_URL: &str = "https://aims-worldrunning.org/calendar.html";

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_KRW_RATE: f64 = 1450.0;
pub const DEFAULT_DELAY_MS: u64 = 300;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const VISA_FILE_NAME: &str = "visa.json";

pub const DATA_DIR_ENV: &str = "PACENOTE_DATA_DIR";
pub const VISA_PATH_ENV: &str = "PACENOTE_VISA_PATH";
pub const KRW_RATE_ENV: &str = "PACENOTE_KRW_RATE";
pub const DELAY_MS_ENV: &str = "PACENOTE_DELAY_MS";
pub const LISTING_YEAR_ENV: &str = "PACENOTE_LISTING_YEAR";
pub const PLAN_ENV: &str = "PACENOTE_PLAN";
pub const TRANSLATE_ENV: &str = "PACENOTE_TRANSLATE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read partition plan {}: {source}", path.display())]
    PlanRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse partition plan {}: {source}", path.display())]
    PlanParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    pub visa_path: PathBuf,
    pub currency: String,
    /// Source currency → won.
    pub krw_rate: f64,
    pub search: SearchSettings,
    pub plan: PartitionPlan,
    pub translator: TranslatorSettings,
    /// Off: unmapped cities keep their source spelling without a remote call.
    pub translate_cities: bool,
    pub korea: CalendarSettings,
    pub federation: FederationSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::with_values(
            PathBuf::from(DEFAULT_DATA_DIR),
            None,
            DEFAULT_KRW_RATE,
            Duration::from_millis(DEFAULT_DELAY_MS),
            DEFAULT_LISTING_YEAR,
        )
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let visa_path = lookup(VISA_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let krw_rate = parse_or(&lookup, KRW_RATE_ENV, DEFAULT_KRW_RATE, |rate: &f64| {
            rate.is_finite() && *rate > 0.0
        });
        let delay_ms = parse_or(&lookup, DELAY_MS_ENV, DEFAULT_DELAY_MS, |_| true);
        let listing_year = parse_or(&lookup, LISTING_YEAR_ENV, DEFAULT_LISTING_YEAR, |year| {
            (1900..=2200).contains(year)
        });

        let mut config = Self::with_values(
            data_dir,
            visa_path,
            krw_rate,
            Duration::from_millis(delay_ms),
            listing_year,
        );

        if let Some(path) = lookup(PLAN_ENV).filter(|value| !value.trim().is_empty()) {
            config.plan = load_plan(PathBuf::from(path))?;
        }
        if let Some(value) = lookup(TRANSLATE_ENV) {
            config.translate_cities = !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        Ok(config)
    }

    fn with_values(
        data_dir: PathBuf,
        visa_path: Option<PathBuf>,
        krw_rate: f64,
        delay: Duration,
        listing_year: i32,
    ) -> Self {
        let visa_path = visa_path.unwrap_or_else(|| data_dir.join(VISA_FILE_NAME));
        Self {
            data_dir,
            visa_path,
            currency: DEFAULT_CURRENCY.to_string(),
            krw_rate,
            search: SearchSettings {
                url: SEARCH_API_URL.to_string(),
                base_params: vec![
                    ("sport".to_string(), "running".to_string()),
                    ("all".to_string(), "true".to_string()),
                    ("currency".to_string(), DEFAULT_CURRENCY.to_string()),
                ],
                headers: vec![
                    ("Accept".to_string(), "application/json".to_string()),
                    ("Referer".to_string(), SEARCH_REFERER.to_string()),
                ],
                timeout: Duration::from_secs(30),
                cap: DEFAULT_RESULT_CAP,
                delay,
            },
            plan: PartitionPlan::default(),
            translator: TranslatorSettings {
                endpoint: TRANSLATE_API_URL.to_string(),
                language_pair: "en|ko".to_string(),
                timeout: Duration::from_secs(5),
                delay: delay / 3,
            },
            translate_cities: true,
            korea: CalendarSettings {
                base_url: KOREA_CALENDAR_BASE_URL.to_string(),
                source_url: KOREA_CALENDAR_SOURCE.to_string(),
                charset: "euc-kr".to_string(),
                timeout: Duration::from_secs(15),
                hero_timeout: Duration::from_secs(10),
                delay,
                listing_year,
            },
            federation: FederationSettings {
                url: FEDERATION_CALENDAR_URL.to_string(),
                timeout: Duration::from_secs(10),
            },
        }
    }
}

fn parse_or<T, L>(lookup: &L, key: &str, default: T, valid: impl Fn(&T) -> bool) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
    L: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warn!(variable = key, value = %raw, default = %default, "invalid value; using default");
            default
        }
    }
}

fn load_plan(path: PathBuf) -> Result<PartitionPlan, ConfigError> {
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) => return Err(ConfigError::PlanRead { path, source }),
    };
    PartitionPlan::from_yaml_str(&text).map_err(|source| ConfigError::PlanParse { path, source })
}
