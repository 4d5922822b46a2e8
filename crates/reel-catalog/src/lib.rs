//! Movie catalog data model and filtering.
//!
//! The central structure is [`Catalog`], an ordered, immutable sequence of
//! [`MovieRecord`] values loaded once from JSON and treated as read-only
//! reference data for the rest of the session. On top of it sit three pure
//! layers:
//!
//! * [`facet`] – derives `(value, count)` pairs for the year and genre
//!   dimensions, in first-occurrence order.
//! * [`filter`] – the three filter predicates (title substring, exact year,
//!   genre-set membership) and the id-set computation.
//! * [`session`] – an explicit controller object holding the current
//!   selections and highlight set, driving the reset → filter → highlight
//!   cycle for each submit event.
//!
//! Rendering is deliberately not here: a renderer consumes the catalog and
//! the session's highlight id set and produces the view in a single step.

pub mod facet;
pub mod filter;
pub mod session;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub use facet::{facet_counts, FacetCount, FacetField};
pub use filter::{matching_ids, FilterQuery};
pub use session::Session;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate movie id in catalog: {id}")]
    DuplicateId { id: String },
}

/// A single movie entry.
///
/// `id` is the only structured field – it must be unique across the catalog
/// and is the key renderers use to target rows. Everything else is free-form
/// display text with no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(deserialize_with = "de_label")]
    pub id: String,
    pub title: String,
    pub genre: String,
    #[serde(deserialize_with = "de_label")]
    pub year: String,
    pub image: String,
}

/// Accept both JSON strings and numbers for label-like fields (`id`, `year`)
/// and normalize to `String`.
fn de_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(i64),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(s) => s,
        Label::Number(n) => n.to_string(),
    })
}

/// An ordered, immutable sequence of movie records.
///
/// Fixed at load time; no record is created, mutated, or removed afterwards.
/// Ordering is the input order and is preserved by every downstream
/// operation (facets, filtering, rendering).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    /// Build a catalog from records, rejecting duplicate ids.
    pub fn new(records: Vec<MovieRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        log::debug!("loaded catalog with {} records", records.len());
        Ok(Self { records })
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<MovieRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&MovieRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
pub(crate) fn test_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"id": 1, "title": "Matrix", "genre": "SciFi", "year": "1999", "image": "matrix.png"},
            {"id": 2, "title": "Amadeus", "genre": "Drama", "year": "1984", "image": "amadeus.png"},
            {"id": 3, "title": "The Matrix Reloaded", "genre": "SciFi", "year": "2003", "image": "reloaded.png"},
            {"id": 4, "title": "Paris, Texas", "genre": "Drama", "year": 1984, "image": "paris.png"}
        ]"#,
    )
    .expect("test catalog should parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_normalize_to_strings() {
        let catalog = test_catalog();
        // Numeric id and year in the JSON come out as strings.
        assert_eq!(catalog.records()[0].id, "1");
        assert_eq!(catalog.records()[3].year, "1984");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::from_json(
            r#"[
                {"id": "a", "title": "X", "genre": "G", "year": "2000", "image": ""},
                {"id": "a", "title": "Y", "genre": "G", "year": "2001", "image": ""}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = test_catalog();
        assert_eq!(catalog.get("2").unwrap().title, "Amadeus");
        assert!(catalog.get("missing").is_none());
    }
}
