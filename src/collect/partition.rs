use serde::{Deserialize, Serialize};

/// One query filter. Unset dimensions are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Partition {
    pub continent: Option<String>,
    pub country: Option<String>,
    pub race_type: Option<String>,
}

impl Partition {
    /// No filter at all.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn continent(name: &str) -> Self {
        Self {
            continent: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn country(name: &str) -> Self {
        Self {
            country: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_race_type(mut self, race_type: &str) -> Self {
        self.race_type = Some(race_type.to_string());
        self
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        [
            ("continent", &self.continent),
            ("country", &self.country),
            ("raceType", &self.race_type),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|value| (name.to_string(), value.clone())))
        .collect()
    }

    pub fn label(&self) -> String {
        let parts: Vec<&str> = [&self.continent, &self.country, &self.race_type]
            .into_iter()
            .filter_map(|value| value.as_deref())
            .collect();
        if parts.is_empty() {
            "all".to_string()
        } else {
            parts.join("/")
        }
    }
}

/// Which partitions to query, loaded from YAML or taken from the defaults.
///
/// ```yaml
/// continents: [asia, europe]
/// race_types: [full_marathon, half_marathon]
/// catch_all_continents: [Oceania]
/// sweep_countries: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionPlan {
    /// First-level partitions. Spellings are the API's own and not uniform.
    pub continents: Vec<String>,
    /// Second-level split for continents that hit the cap.
    pub race_types: Vec<String>,
    /// Extra continent filters queried once each after the main pass.
    pub catch_all_continents: Vec<String>,
    /// Query every discovered country once without a race-type filter.
    pub sweep_countries: bool,
}

impl Default for PartitionPlan {
    fn default() -> Self {
        Self {
            continents: to_strings(&[
                "asia",
                "africa",
                "South America",
                "australia",
                "Antarctica",
                "europe",
                "North America",
            ]),
            race_types: to_strings(&[
                "full_marathon",
                "half_marathon",
                "ultra_marathon",
                "custom",
            ]),
            catch_all_continents: to_strings(&["Oceania", "Central America", "Middle East"]),
            sweep_countries: true,
        }
    }
}

impl PartitionPlan {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_skip_unset_dimensions() {
        let partition = Partition::continent("europe").with_race_type("half_marathon");
        assert_eq!(
            partition.query_pairs(),
            vec![
                ("continent".to_string(), "europe".to_string()),
                ("raceType".to_string(), "half_marathon".to_string()),
            ]
        );
        assert_eq!(partition.label(), "europe/half_marathon");
        assert!(Partition::all().query_pairs().is_empty());
        assert_eq!(Partition::all().label(), "all");
    }

    #[test]
    fn yaml_plan_fills_missing_keys_from_defaults() {
        let plan = PartitionPlan::from_yaml_str("continents: [europe]\nsweep_countries: false\n")
            .expect("valid yaml");
        assert_eq!(plan.continents, vec!["europe".to_string()]);
        assert!(!plan.sweep_countries);
        assert_eq!(plan.race_types, PartitionPlan::default().race_types);
    }
}
