use std::{path::{Path, PathBuf}, sync::{Arc, OnceLock}};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::{error::{RecommendError, Result}, trip::uniq_sorted};

/// Read-only lookup table country -> known cities.
///
/// File format:
/// ```json
/// { "Spain": ["Granada", "Seville"], "Portugal": ["Lisbon", "Porto"] }
/// ```
/// Country names are trimmed; city lists are trimmed, stripped of empties,
/// deduplicated and sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from in-memory entries, applying the same normalization as a file load
    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for (country, cities) in entries {
            catalog.insert(country.as_ref(), uniq_sorted(cities));
        }
        catalog
    }

    /// Parse a catalog document.
    /// Entries whose value is not a list of strings are skipped.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(s)?;
        let Value::Object(map) = root else {
            return Err(RecommendError::catalog_unavailable("catalog root must be a JSON object"));
        };
        let mut catalog = Self::new();
        for (country, value) in map {
            let cities: Option<Vec<&str>> = match &value {
                Value::Array(items) => items.iter().map(Value::as_str).collect(),
                _ => None,
            };
            match cities {
                Some(cities) => catalog.insert(&country, uniq_sorted(cities)),
                None => tracing::warn!(country = %country, "skipping catalog entry: not a list of city names"),
            }
        }
        Ok(catalog)
    }

    /// Load and validate a catalog file.
    /// A missing file or a document without entries is `CatalogUnavailable`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecommendError::catalog_unavailable(format!("{} not found", path.display())));
        }
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        catalog.ensure_available()?;
        tracing::info!(path = %path.display(), countries = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Fail with `CatalogUnavailable` when no country is known
    pub fn ensure_available(&self) -> Result<()> {
        if self.is_empty() {
            return Err(RecommendError::catalog_unavailable("catalog has no entries"));
        }
        Ok(())
    }

    fn insert(&mut self, country: &str, cities: Vec<String>) {
        let country = country.trim();
        if country.is_empty() {
            return;
        }
        self.entries.insert(country.to_string(), cities);
    }

    /// Cities known for `country`, in sorted order
    pub fn cities(&self, country: &str) -> Option<&[String]> {
        self.entries.get(country).map(Vec::as_slice)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalog file read once per process and shared afterwards.
/// A failed load is not remembered; the next call reads the file again.
#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    cell: OnceLock<Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.cell.get() {
            return Ok(Arc::clone(catalog));
        }
        let loaded = Arc::new(Catalog::load(&self.path)?);
        // a concurrent loader may have won; either copy is equivalent
        Ok(Arc::clone(self.cell.get_or_init(|| loaded)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn json_entries_are_normalized() {
        let catalog = Catalog::from_json_str(
            r#"{" Spain ": ["Seville", "Granada", " Seville", ""], "Italy": []}"#,
        )
        .unwrap();
        assert_eq!(catalog.cities("Spain").unwrap(), ["Granada", "Seville"]);
        assert_eq!(catalog.cities("Italy").unwrap().len(), 0);
        assert!(catalog.cities("France").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let catalog = Catalog::from_json_str(r#"{"Spain": "Madrid", "Peru": ["Lima", 3], "Chile": ["Santiago"]}"#).unwrap();
        assert_eq!(catalog.countries().collect::<Vec<_>>(), vec!["Chile"]);
    }

    #[test]
    fn non_object_root_is_unavailable() {
        assert!(matches!(
            Catalog::from_json_str("[1, 2]"),
            Err(RecommendError::CatalogUnavailable { .. })
        ));
    }

    #[test]
    fn missing_or_empty_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("country_cities.json");
        assert!(matches!(Catalog::load(&missing), Err(RecommendError::CatalogUnavailable { .. })));

        std::fs::write(&missing, "{}").unwrap();
        assert!(matches!(Catalog::load(&missing), Err(RecommendError::CatalogUnavailable { .. })));
    }

    #[test]
    fn blank_country_keys_are_dropped() {
        let catalog = Catalog::from_json_str(r#"{" ": ["X"], "": ["Y"], "Chile": ["Santiago"]}"#).unwrap();
        assert_eq!(catalog.countries().collect::<Vec<_>>(), vec!["Chile"]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("country_cities.json");
        std::fs::write(&path, r#"{" ": ["X"]}"#).unwrap();
        assert!(matches!(Catalog::load(&path), Err(RecommendError::CatalogUnavailable { .. })));
    }

    #[test]
    fn cache_reads_file_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Spain": ["Granada"]}}"#).unwrap();
        let cache = CatalogCache::new(file.path());
        let first = cache.get().unwrap();

        // later edits are not observed within the process
        std::fs::write(file.path(), r#"{"Italy": ["Rome"]}"#).unwrap();
        let second = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(second.cities("Spain").is_some());
    }

    #[test]
    fn cache_retries_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let cache = CatalogCache::new(&path);
        assert!(cache.get().is_err());
        std::fs::write(&path, r#"{"Spain": ["Granada"]}"#).unwrap();
        assert_eq!(cache.get().unwrap().len(), 1);
    }
}
