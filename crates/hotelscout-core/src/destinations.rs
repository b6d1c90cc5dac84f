//! The supported destinations and their listing-site city IDs.
//!
//! County names are written with either `臺` or `台` in the wild. The city
//! ID table is keyed by the `台` form and every lookup goes through
//! [`normalize_county_name`], so both spellings resolve to the same entry.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::hotels::DestinationTarget;
use crate::ConfigError;

/// All 22 county-level divisions, in scrape order.
pub const TAIWAN_COUNTIES: [&str; 22] = [
    "基隆市",
    "新北市",
    "臺北市",
    "桃園市",
    "新竹市",
    "新竹縣",
    "苗栗縣",
    "臺中市",
    "彰化縣",
    "南投縣",
    "雲林縣",
    "嘉義市",
    "嘉義縣",
    "臺南市",
    "高雄市",
    "屏東縣",
    "宜蘭縣",
    "花蓮縣",
    "臺東縣",
    "澎湖縣",
    "金門縣",
    "連江縣",
];

/// Curated city IDs, keyed by normalized county name.
const KNOWN_CITY_IDS: [(&str, u32); 22] = [
    ("台北市", 617),
    ("新北市", 7662),
    ("桃園市", 7570),
    ("台中市", 3849),
    ("台南市", 3847),
    ("高雄市", 720),
    ("宜蘭縣", 7614),
    ("南投縣", 7524),
    ("嘉義市", 5152),
    ("台東縣", 3848),
    ("基隆市", 7810),
    ("新竹市", 3845),
    ("新竹縣", 669_328),
    ("苗栗縣", 7809),
    ("彰化縣", 7811),
    ("雲林縣", 7523),
    ("嘉義縣", 650_358),
    ("屏東縣", 5589),
    ("花蓮縣", 6954),
    ("澎湖縣", 7805),
    ("金門縣", 7203),
    ("連江縣", 7808),
];

/// Administrative suffixes dropped from search keywords ("city", "county").
const ADMIN_SUFFIXES: [char; 2] = ['市', '縣'];

/// Folds the two spellings of 臺/台 onto `台`.
#[must_use]
pub fn normalize_county_name(name: &str) -> String {
    name.replace('臺', "台")
}

/// Search keyword for a county: normalized, trimmed, and with one trailing
/// administrative suffix removed (`"臺北市"` → `"台北"`).
#[must_use]
pub fn search_keyword(county: &str) -> String {
    let normalized = normalize_county_name(county);
    let name = normalized.trim();
    name.strip_suffix(ADMIN_SUFFIXES)
        .unwrap_or(name)
        .to_string()
}

/// The built-in county → city ID table, keyed by normalized name.
#[must_use]
pub fn default_city_ids() -> HashMap<String, u32> {
    KNOWN_CITY_IDS
        .iter()
        .map(|(name, id)| ((*name).to_string(), *id))
        .collect()
}

/// Pairs each county with its city ID, preserving `counties` order.
///
/// `city_ids` may be keyed by either spelling; keys are normalized before
/// lookup. Counties with no entry get `city_id: None`.
#[must_use]
pub fn build_targets<S: AsRef<str>>(
    counties: &[S],
    city_ids: &HashMap<String, u32>,
) -> Vec<DestinationTarget> {
    let normalized: HashMap<String, u32> = city_ids
        .iter()
        .map(|(name, id)| (normalize_county_name(name), *id))
        .collect();

    counties
        .iter()
        .map(|county| {
            let county = county.as_ref();
            DestinationTarget {
                county: county.to_string(),
                city_id: normalized.get(&normalize_county_name(county)).copied(),
            }
        })
        .collect()
}

/// Targets for all 22 counties using the built-in table.
#[must_use]
pub fn default_targets() -> Vec<DestinationTarget> {
    build_targets(&TAIWAN_COUNTIES, &default_city_ids())
}

/// One entry of a destinations override file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationEntry {
    pub name: String,
    pub city_id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DestinationsFile {
    pub destinations: Vec<DestinationEntry>,
}

impl DestinationsFile {
    /// Converts the file into targets in file order.
    #[must_use]
    pub fn into_targets(self) -> Vec<DestinationTarget> {
        self.destinations
            .into_iter()
            .map(|entry| DestinationTarget {
                county: entry.name.trim().to_string(),
                city_id: entry.city_id,
            })
            .collect()
    }
}

/// Load and validate a destinations override from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_destinations(path: &Path) -> Result<DestinationsFile, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::DestinationsFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

    let file: DestinationsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::DestinationsFileParse)?;

    validate_destinations(&file)?;

    Ok(file)
}

fn validate_destinations(file: &DestinationsFile) -> Result<(), ConfigError> {
    if file.destinations.is_empty() {
        return Err(ConfigError::Validation(
            "at least one destination is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in &file.destinations {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(ConfigError::Validation(
                "destination name must be non-empty".to_string(),
            ));
        }
        if !seen.insert(normalize_county_name(name)) {
            return Err(ConfigError::Validation(format!(
                "duplicate destination: '{name}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "destinations_test.rs"]
mod tests;
