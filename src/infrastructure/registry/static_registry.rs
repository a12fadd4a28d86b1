//! JSON-backed country registry.

use crate::domain::entities::CountryEntry;
use crate::domain::ports::{CountryRegistry, RegistryError};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// Country code to dial prefix table compiled into the binary.
const BUNDLED_TABLE: &str = include_str!("../../../data/phone-country-code.json");

/// English region names used for display labels.
const BUNDLED_REGION_NAMES: &str = include_str!("../../../data/region-names.json");

/// Registry over a static `{ "<code>": "<dial prefix>" }` table.
///
/// The table is validated and indexed once at construction; afterwards the
/// registry is read-only and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct StaticCountryRegistry {
    by_code: HashMap<String, CountryEntry>,
    ordered: Vec<CountryEntry>,
}

impl StaticCountryRegistry {
    /// Loads the table compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] or [`RegistryError::InvalidEntry`] if the
    /// bundled data is broken.
    pub fn bundled() -> Result<Self, RegistryError> {
        Self::from_json(BUNDLED_TABLE)
    }

    /// Loads an alternate table from a JSON file.
    ///
    /// Region names still come from the bundled name table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read, and the same
    /// errors as [`Self::from_json`] otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        info!("Loading country table from {}", path.display());
        Self::from_json(&raw)
    }

    /// Loads from `path` when given, otherwise the bundled table.
    pub fn load(path: Option<&str>) -> Result<Self, RegistryError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Parses a JSON table and attaches bundled region names.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed JSON and
    /// [`RegistryError::InvalidEntry`] for empty codes or non-numeric prefixes.
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let table: BTreeMap<String, String> = serde_json::from_str(raw)?;
        let names: HashMap<String, String> = serde_json::from_str(BUNDLED_REGION_NAMES)?;

        Self::from_table(table, &names)
    }

    /// Builds a registry from `(code, dial prefix)` pairs.
    ///
    /// # Validation
    ///
    /// - Codes are trimmed and upper-cased; they must be non-empty ASCII alphanumerics
    /// - A single leading `+` on a prefix is dropped; the rest must be digits
    /// - Codes must be unique after normalization
    pub fn from_table<I, C, P>(
        table: I,
        names: &HashMap<String, String>,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (C, P)>,
        C: AsRef<str>,
        P: AsRef<str>,
    {
        let mut by_code = HashMap::new();

        for (raw_code, raw_prefix) in table {
            let code = normalize_code(raw_code.as_ref());
            if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(RegistryError::InvalidEntry {
                    code: raw_code.as_ref().to_string(),
                    reason: "code must be non-empty and alphanumeric".to_string(),
                });
            }

            let prefix = raw_prefix.as_ref().trim();
            let prefix = prefix.strip_prefix('+').unwrap_or(prefix);
            if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
                return Err(RegistryError::InvalidEntry {
                    code,
                    reason: format!("dial prefix '{}' must be digits", raw_prefix.as_ref()),
                });
            }

            let region_name = names.get(&code).cloned().unwrap_or_else(|| code.clone());
            let entry = CountryEntry::new(code.clone(), prefix, region_name);

            if by_code.insert(code.clone(), entry).is_some() {
                return Err(RegistryError::InvalidEntry {
                    code,
                    reason: "duplicate code".to_string(),
                });
            }
        }

        let mut labelled: Vec<(String, CountryEntry)> = by_code
            .values()
            .map(|entry| (entry.display_label(), entry.clone()))
            .collect();
        labelled.sort_by(|(a_label, a), (b_label, b)| {
            a_label.cmp(b_label).then_with(|| a.code.cmp(&b.code))
        });
        let ordered = labelled.into_iter().map(|(_, entry)| entry).collect();

        debug!("Country registry built with {} entries", by_code.len());

        Ok(Self { by_code, ordered })
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl CountryRegistry for StaticCountryRegistry {
    fn lookup(&self, country_code: &str) -> Result<String, RegistryError> {
        self.by_code
            .get(&normalize_code(country_code))
            .map(|entry| entry.dial_prefix.clone())
            .ok_or_else(|| RegistryError::NotFound(country_code.to_string()))
    }

    fn entry(&self, country_code: &str) -> Option<CountryEntry> {
        self.by_code.get(&normalize_code(country_code)).cloned()
    }

    fn list_all(&self) -> Vec<CountryEntry> {
        self.ordered.clone()
    }
}

/// Canonical key form: surrounding whitespace removed, ASCII upper-case.
fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> HashMap<String, String> {
        HashMap::from([
            ("ID".to_string(), "Indonesia".to_string()),
            ("US".to_string(), "United States".to_string()),
            ("GB".to_string(), "United Kingdom".to_string()),
        ])
    }

    fn small_registry() -> StaticCountryRegistry {
        StaticCountryRegistry::from_table([("ID", "62"), ("US", "1"), ("GB", "+44")], &names())
            .unwrap()
    }

    #[test]
    fn test_bundled_table_loads() {
        let registry = StaticCountryRegistry::bundled().unwrap();

        assert!(registry.len() > 200);
        assert_eq!(registry.lookup("ID").unwrap(), "62");
        assert_eq!(registry.lookup("US").unwrap(), "1");
        assert_eq!(registry.entry("ID").unwrap().region_name, "Indonesia");
    }

    #[test]
    fn test_bundled_prefixes_are_digits() {
        let registry = StaticCountryRegistry::bundled().unwrap();

        for entry in registry.list_all() {
            assert!(
                entry.dial_prefix.chars().all(|c| c.is_ascii_digit()),
                "{} has prefix {}",
                entry.code,
                entry.dial_prefix
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = small_registry();
        assert_eq!(registry.lookup(" id ").unwrap(), "62");
    }

    #[test]
    fn test_lookup_miss() {
        let registry = small_registry();

        let result = registry.lookup("ZZ999");
        assert!(matches!(result, Err(RegistryError::NotFound(code)) if code == "ZZ999"));
    }

    #[test]
    fn test_plus_sign_dropped_from_prefix() {
        assert_eq!(small_registry().lookup("GB").unwrap(), "44");
    }

    #[test]
    fn test_list_all_sorted_by_label() {
        let registry = small_registry();

        let labels: Vec<String> = registry
            .list_all()
            .iter()
            .map(CountryEntry::display_label)
            .collect();
        let mut sorted = labels.clone();
        sorted.sort();

        assert_eq!(labels, sorted);
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_list_all_is_restartable() {
        let registry = small_registry();
        assert_eq!(registry.list_all(), registry.list_all());
    }

    #[test]
    fn test_unknown_region_name_falls_back_to_code() {
        let registry = StaticCountryRegistry::from_table([("QQ", "999")], &names()).unwrap();
        assert_eq!(registry.entry("QQ").unwrap().region_name, "QQ");
    }

    #[test]
    fn test_rejects_non_digit_prefix() {
        let result = StaticCountryRegistry::from_table([("ID", "6-2")], &names());
        assert!(matches!(result, Err(RegistryError::InvalidEntry { .. })));
    }

    #[test]
    fn test_rejects_empty_code() {
        let result = StaticCountryRegistry::from_table([(" ", "62")], &names());
        assert!(matches!(result, Err(RegistryError::InvalidEntry { .. })));
    }

    #[test]
    fn test_rejects_duplicate_after_normalization() {
        let result = StaticCountryRegistry::from_table([("ID", "62"), ("id", "62")], &names());
        assert!(matches!(result, Err(RegistryError::InvalidEntry { .. })));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = StaticCountryRegistry::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(RegistryError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = StaticCountryRegistry::from_path("/nonexistent/table.json");
        assert!(matches!(result, Err(RegistryError::Io { .. })));
    }

    #[test]
    fn test_from_json_custom_table() {
        let registry = StaticCountryRegistry::from_json(r#"{"ID": "62", "MY": "60"}"#).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entry("MY").unwrap().region_name, "Malaysia");
    }
}
