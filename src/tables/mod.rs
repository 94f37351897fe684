//! Vocabulary lookups: raw source values (country, surface, tag, ...) to Korean labels.
//!
//! Every table is plain immutable data indexed once on first use. Unmapped keys fall
//! back to the original value, except race types (→ "기타") and continents (→ empty).
//! City names additionally go through [`CityLocalizer`], which can ask a remote
//! translator and remembers the answer for the rest of the run.

mod data;
pub mod localizer;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use localizer::{CityLocalizer, TranslationCache, TranslatorSettings};

/// Label used for race types the table does not know.
pub const OTHER_RACE_TYPE_LABEL: &str = "기타";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    RaceType,
    Surface,
    Difficulty,
    Tag,
    Country,
    Continent,
    City,
}

impl Category {
    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::RaceType => data::RACE_TYPE,
            Self::Surface => data::SURFACE,
            Self::Difficulty => data::DIFFICULTY,
            Self::Tag => data::TAG,
            Self::Country => data::COUNTRY,
            Self::Continent => data::CONTINENT,
            Self::City => data::CITY,
        }
    }

    fn slot(self) -> &'static OnceLock<HashMap<&'static str, &'static str>> {
        static RACE_TYPE: OnceLock<HashMap<&str, &str>> = OnceLock::new();
        static SURFACE: OnceLock<HashMap<&str, &str>> = OnceLock::new();
        static DIFFICULTY: OnceLock<HashMap<&str, &str>> = OnceLock::new();
        static TAG: OnceLock<HashMap<&str, &str>> = OnceLock::new();
        static COUNTRY: OnceLock<HashMap<&str, &str>> = OnceLock::new();
        static CONTINENT: OnceLock<HashMap<&str, &str>> = OnceLock::new();
        static CITY: OnceLock<HashMap<&str, &str>> = OnceLock::new();
        match self {
            Self::RaceType => &RACE_TYPE,
            Self::Surface => &SURFACE,
            Self::Difficulty => &DIFFICULTY,
            Self::Tag => &TAG,
            Self::Country => &COUNTRY,
            Self::Continent => &CONTINENT,
            Self::City => &CITY,
        }
    }

    fn index(self) -> &'static HashMap<&'static str, &'static str> {
        self.slot()
            .get_or_init(|| self.table().iter().copied().collect())
    }
}

/// Exact-match lookup without any fallback.
pub fn lookup(category: Category, key: &str) -> Option<&'static str> {
    category.index().get(key).copied()
}

/// Localized label with the per-category fallback described in the module docs.
pub fn label_for(category: Category, key: &str) -> String {
    if let Some(label) = lookup(category, key) {
        return label.to_string();
    }
    match category {
        Category::RaceType => OTHER_RACE_TYPE_LABEL.to_string(),
        Category::Continent => String::new(),
        _ => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_labels() {
        assert_eq!(label_for(Category::RaceType, "half_marathon"), "하프");
        assert_eq!(label_for(Category::Country, "Japan"), "일본");
        assert_eq!(label_for(Category::Continent, "Kenya"), "아프리카");
        assert_eq!(label_for(Category::Surface, "Trail"), "산길");
    }

    #[test]
    fn unknown_keys_fall_back_per_category() {
        assert_eq!(label_for(Category::RaceType, "relay"), OTHER_RACE_TYPE_LABEL);
        assert_eq!(label_for(Category::Continent, "Atlantis"), "");
        assert_eq!(label_for(Category::Country, "Atlantis"), "Atlantis");
        assert_eq!(label_for(Category::Tag, "some-new-tag"), "some-new-tag");
        assert_eq!(label_for(Category::Difficulty, ""), "");
    }

    #[test]
    fn city_table_is_exact_match_only() {
        assert_eq!(lookup(Category::City, "Berlin"), Some("베를린"));
        assert_eq!(lookup(Category::City, "berlin"), None);
    }
}
