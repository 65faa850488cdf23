//! Versioned supplemental region data.
//!
//! The `phonenumber` crate knows how to tokenize and validate numbers but has
//! no carriers or time zones. This table fills that gap and can override a
//! region's display name. A copy ships inside the binary
//! (`data/regions.json`); a replacement can be loaded from disk without
//! rebuilding.

use crate::error::{PlanDataError, PlanDataResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const BUNDLED_REGIONS: &str = include_str!("../../data/regions.json");

/// A digit prefix of the national significant number with extra metadata.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PrefixEntry {
    pub prefix: String,

    #[serde(default)]
    pub carrier: Option<String>,

    #[serde(default)]
    pub time_zones: Vec<String>,
}

/// Supplemental data for one region (CLDR id, e.g. `GB`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RegionEntry {
    pub id: String,
    pub calling_code: u16,

    /// Replaces the built-in display name when set
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub time_zones: Vec<String>,

    /// Sorted longest-first after loading
    #[serde(default)]
    pub prefixes: Vec<PrefixEntry>,
}

impl RegionEntry {
    /// Longest prefix entry matching `national_number` that satisfies `pred`.
    fn longest_prefix<F>(&self, national_number: &str, pred: F) -> Option<&PrefixEntry>
    where
        F: Fn(&PrefixEntry) -> bool,
    {
        self.prefixes
            .iter()
            .filter(|entry| pred(entry))
            .find(|entry| national_number.starts_with(&entry.prefix))
    }
}

#[derive(Debug, Deserialize)]
struct RegionFile {
    version: String,
    regions: Vec<RegionEntry>,
}

/// Region lookup table indexed by region id.
#[derive(Debug, Clone)]
pub struct RegionTable {
    version: String,
    regions: HashMap<String, RegionEntry>,
}

impl RegionTable {
    /// The table compiled into the binary.
    pub fn bundled() -> PlanDataResult<Self> {
        Self::from_json(BUNDLED_REGIONS)
    }

    /// Load a table from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> PlanDataResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PlanDataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            version = %table.version,
            regions = table.len(),
            "Loaded region data"
        );
        Ok(table)
    }

    /// Parse and validate a table from a JSON document.
    pub fn from_json(json: &str) -> PlanDataResult<Self> {
        let file: RegionFile = serde_json::from_str(json)?;

        let mut regions = HashMap::with_capacity(file.regions.len());
        for mut region in file.regions {
            Self::validate_region(&region)?;

            region
                .prefixes
                .sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));

            if let Some(previous) = regions.insert(region.id.clone(), region) {
                return Err(PlanDataError::Invalid(format!(
                    "duplicate region id {}",
                    previous.id
                )));
            }
        }

        Ok(Self {
            version: file.version,
            regions,
        })
    }

    fn validate_region(region: &RegionEntry) -> PlanDataResult<()> {
        if region.id.len() != 2 || !region.id.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(PlanDataError::Invalid(format!(
                "region id must be two uppercase letters, got {:?}",
                region.id
            )));
        }
        if !(1..=999).contains(&region.calling_code) {
            return Err(PlanDataError::Invalid(format!(
                "region {} has calling code {} outside 1..=999",
                region.id, region.calling_code
            )));
        }
        for entry in &region.prefixes {
            if entry.prefix.is_empty() || !entry.prefix.chars().all(|c| c.is_ascii_digit()) {
                return Err(PlanDataError::Invalid(format!(
                    "region {} has non-numeric prefix {:?}",
                    region.id, entry.prefix
                )));
            }
        }
        Ok(())
    }

    /// Dataset version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Entry for a region, only if it was recorded under `calling_code`.
    pub fn region(&self, id: &str, calling_code: u16) -> Option<&RegionEntry> {
        self.regions
            .get(id)
            .filter(|region| region.calling_code == calling_code)
    }

    /// Display-name override for a region.
    pub fn name(&self, id: &str, calling_code: u16) -> Option<&str> {
        self.region(id, calling_code)
            .and_then(|region| region.name.as_deref())
    }

    /// Carrier of the longest matching prefix.
    pub fn carrier(&self, id: &str, calling_code: u16, national_number: &str) -> Option<&str> {
        self.region(id, calling_code)
            .and_then(|region| region.longest_prefix(national_number, |e| e.carrier.is_some()))
            .and_then(|entry| entry.carrier.as_deref())
    }

    /// Zones of the longest matching prefix, else the region's zones.
    pub fn time_zones(&self, id: &str, calling_code: u16, national_number: &str) -> Vec<String> {
        let Some(region) = self.region(id, calling_code) else {
            return Vec::new();
        };
        region
            .longest_prefix(national_number, |e| !e.time_zones.is_empty())
            .map(|entry| entry.time_zones.clone())
            .unwrap_or_else(|| region.time_zones.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "version": "test-1",
        "regions": [
            {
                "id": "XA", "calling_code": 999, "name": "Alpha",
                "time_zones": ["Etc/GMT-1", "Etc/GMT-2"],
                "prefixes": [
                    { "prefix": "7", "carrier": "Broad" },
                    { "prefix": "71", "carrier": "Narrow" },
                    { "prefix": "2", "time_zones": ["Etc/GMT-2"] }
                ]
            },
            { "id": "XB", "calling_code": 998 }
        ]
    }"#;

    #[test]
    fn test_bundled_table_loads() {
        let table = RegionTable::bundled().unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.region("IN", 91).unwrap().time_zones, vec!["Asia/Kolkata"]);
        assert!(table.region("IN", 1).is_none());
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = RegionTable::from_json(SAMPLE).unwrap();
        assert_eq!(table.carrier("XA", 999, "71234567"), Some("Narrow"));
        assert_eq!(table.carrier("XA", 999, "72345678"), Some("Broad"));
        assert_eq!(table.carrier("XA", 999, "22345678"), None);
    }

    #[test]
    fn test_time_zone_fallback_to_region() {
        let table = RegionTable::from_json(SAMPLE).unwrap();
        assert_eq!(
            table.time_zones("XA", 999, "22345678"),
            vec!["Etc/GMT-2".to_string()]
        );
        assert_eq!(table.time_zones("XA", 999, "71234567").len(), 2);
        assert!(table.time_zones("XB", 998, "1234567").is_empty());
        assert!(table.time_zones("XZ", 998, "1234567").is_empty());
    }

    #[test]
    fn test_name_override_is_optional() {
        let table = RegionTable::from_json(SAMPLE).unwrap();
        assert_eq!(table.name("XA", 999), Some("Alpha"));
        assert_eq!(table.name("XB", 998), None);
        // Wrong calling code for the region
        assert_eq!(table.name("XA", 998), None);
    }

    #[test]
    fn test_rejects_invalid_tables() {
        let bad_id = r#"{"version":"x","regions":[{"id":"usa","calling_code":1}]}"#;
        assert!(matches!(
            RegionTable::from_json(bad_id),
            Err(PlanDataError::Invalid(_))
        ));

        let bad_prefix = r#"{"version":"x","regions":[{"id":"US","calling_code":1,
            "prefixes":[{"prefix":"4a"}]}]}"#;
        assert!(matches!(
            RegionTable::from_json(bad_prefix),
            Err(PlanDataError::Invalid(_))
        ));

        let duplicate = r#"{"version":"x","regions":[
            {"id":"US","calling_code":1},
            {"id":"US","calling_code":1,"name":"US again"}]}"#;
        assert!(matches!(
            RegionTable::from_json(duplicate),
            Err(PlanDataError::Invalid(_))
        ));

        assert!(matches!(
            RegionTable::from_json("not json"),
            Err(PlanDataError::Json(_))
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = RegionTable::from_path("/nonexistent/regions.json");
        assert!(matches!(result, Err(PlanDataError::Io { .. })));
    }
}
