//! Facet extraction: unique year/genre values and their occurrence counts.

use std::collections::HashMap;

use crate::Catalog;

/// A categorical dimension of the catalog usable for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetField {
    Year,
    Genre,
}

impl FacetField {
    fn value<'a>(&self, record: &'a crate::MovieRecord) -> &'a str {
        match self {
            FacetField::Year => &record.year,
            FacetField::Genre => &record.genre,
        }
    }
}

/// One distinct facet value and the number of records sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Derive `(value, count)` pairs for the given field.
///
/// One pair per distinct value, in first-occurrence order over the catalog
/// (not sorted). An empty catalog yields an empty result. Counts sum to the
/// catalog length.
pub fn facet_counts(catalog: &Catalog, field: FacetField) -> Vec<FacetCount> {
    let mut counts: Vec<FacetCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in catalog.iter() {
        let value = field.value(record);
        match index.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value.to_string(), counts.len());
                counts.push(FacetCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}
