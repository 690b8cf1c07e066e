//! Occupation Catalog: immutable, ordered reference data keyed by occupation key.
//!
//! The catalog is constructed once (usually from `data/occupations.json`) and
//! shared read-only behind an `Arc`. Iteration order is the document order of
//! the source JSON object, which is also the matcher's tie-break order.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::occupation::normalize::coerce_text;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read occupation catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("occupation catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("occupation catalog root must be a JSON object keyed by occupation")]
    NotAnObject,
}

/// One occupation entry. Missing fields are empty collections.
///
/// `core_skills` is expected to be a subset of `skills` but nothing relies on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OccupationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    pub aliases: Vec<String>,
    pub skills: Vec<String>,
    pub core_skills: Vec<String>,
}

impl OccupationRecord {
    /// Builds a record with only a canonical name.
    pub fn named(canonical: impl Into<String>) -> Self {
        Self {
            canonical: Some(canonical.into()),
            ..Self::default()
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_core_skills<I, S>(mut self, core_skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_skills = core_skills.into_iter().map(Into::into).collect();
        self
    }

    /// Extracts a record from loosely-typed JSON without ever failing.
    ///
    /// A non-object becomes an empty record, a non-array list field becomes an
    /// empty list, and non-string list items are coerced to text.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        Self {
            canonical: fields
                .get("canonical")
                .filter(|v| !v.is_null())
                .map(|v| coerce_text(v).into_owned()),
            aliases: text_list(fields.get("aliases")),
            skills: text_list(fields.get("skills")),
            core_skills: text_list(fields.get("core_skills")),
        }
    }

    /// Display name, falling back to `key` when no canonical name is set.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.canonical.as_deref().unwrap_or(key)
    }
}

fn text_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(|v| coerce_text(v).into_owned()).collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub record: OccupationRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupationCatalog {
    entries: Vec<CatalogEntry>,
}

impl OccupationCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends an entry, or replaces the record in place if `key` already exists.
    pub fn with_entry(mut self, key: impl Into<String>, record: OccupationRecord) -> Self {
        let key = key.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => existing.record = record,
            None => self.entries.push(CatalogEntry { key, record }),
        }
        self
    }

    pub fn from_object(object: &Map<String, Value>) -> Self {
        let entries = object
            .iter()
            .map(|(key, value)| CatalogEntry {
                key: key.clone(),
                record: OccupationRecord::from_value(value),
            })
            .collect();
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or(CatalogError::NotAnObject)?;
        Ok(Self::from_object(object))
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Startup loader: a missing or malformed catalog degrades to an empty one.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(catalog) => {
                info!(
                    "Loaded {} occupations from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                warn!(
                    "Occupation catalog unavailable at {} ({e}); continuing with an empty catalog",
                    path.display()
                );
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&OccupationRecord> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.record)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OccupationRecord)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"{
        "software_engineer": {
            "canonical": "Software Engineer",
            "aliases": ["software developer", "swe"],
            "skills": ["Git", "Testing"],
            "core_skills": ["Git"]
        },
        "data_engineer": {
            "canonical": "Data Engineer",
            "aliases": ["data engineer"],
            "skills": ["SQL", "Spark"],
            "core_skills": ["SQL"]
        },
        "analyst": {
            "canonical": "Data Analyst"
        }
    }"#;

    #[test]
    fn test_parse_preserves_document_order() {
        let catalog = OccupationCatalog::from_json_str(CATALOG_JSON).unwrap();
        let keys: Vec<&str> = catalog.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["software_engineer", "data_engineer", "analyst"]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let catalog = OccupationCatalog::from_json_str(CATALOG_JSON).unwrap();
        let analyst = catalog.get("analyst").unwrap();
        assert_eq!(analyst.canonical.as_deref(), Some("Data Analyst"));
        assert!(analyst.aliases.is_empty());
        assert!(analyst.skills.is_empty());
        assert!(analyst.core_skills.is_empty());
    }

    #[test]
    fn test_wrongly_typed_fields_degrade() {
        let record = OccupationRecord::from_value(&json!({
            "canonical": null,
            "aliases": "not a list",
            "skills": ["SQL", 42, null, true],
            "core_skills": {"SQL": true}
        }));
        assert_eq!(record.canonical, None);
        assert!(record.aliases.is_empty());
        assert_eq!(record.skills, vec!["SQL", "42", "", "true"]);
        assert!(record.core_skills.is_empty());
    }

    #[test]
    fn test_non_object_record_is_empty() {
        assert_eq!(
            OccupationRecord::from_value(&json!(["SQL"])),
            OccupationRecord::default()
        );
    }

    #[test]
    fn test_non_object_root_is_an_error() {
        let err = OccupationCatalog::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = OccupationCatalog::from_json_str("{").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = OccupationCatalog::load_or_empty(&dir.path().join("missing.json"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_or_empty_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();
        let catalog = OccupationCatalog::load_or_empty(file.path());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_or_empty_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();
        let catalog = OccupationCatalog::load_or_empty(file.path());
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get("data_engineer").unwrap().core_skills,
            vec!["SQL"]
        );
    }

    #[test]
    fn test_bundled_catalog_is_well_formed() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/occupations.json");
        let catalog = OccupationCatalog::from_path(&path).unwrap();
        assert!(!catalog.is_empty());
        for (key, record) in catalog.iter() {
            assert!(record.canonical.is_some(), "{key} has no canonical name");
            assert!(!record.skills.is_empty(), "{key} has no skills");
            for core in &record.core_skills {
                assert!(record.skills.contains(core), "{key}: core skill {core} not in skills");
            }
        }
    }

    #[test]
    fn test_with_entry_replaces_in_place() {
        let catalog = OccupationCatalog::empty()
            .with_entry("a", OccupationRecord::named("A"))
            .with_entry("b", OccupationRecord::named("B"))
            .with_entry("a", OccupationRecord::named("A2"));
        let names: Vec<&str> = catalog.iter().map(|(k, r)| r.display_name(k)).collect();
        assert_eq!(names, vec!["A2", "B"]);
    }

    #[test]
    fn test_display_name_falls_back_to_key() {
        let record = OccupationRecord::default();
        assert_eq!(record.display_name("devops"), "devops");
    }
}
