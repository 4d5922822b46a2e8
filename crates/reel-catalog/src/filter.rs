//! The filter engine: three pure predicate modes over the catalog.

use std::collections::BTreeSet;

use crate::{Catalog, MovieRecord};

/// One filter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterQuery {
    /// Case-insensitive substring match against the title. A blank query
    /// matches nothing.
    Title(String),
    /// Exact equality against the year label.
    Year(String),
    /// Membership of the record's genre in the selected set. An empty set
    /// matches nothing.
    Genres(BTreeSet<String>),
}

impl FilterQuery {
    /// Whether a single record matches this query.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        match self {
            FilterQuery::Title(query) => {
                let query = query.trim();
                !query.is_empty()
                    && record
                        .title
                        .to_lowercase()
                        .contains(&query.to_lowercase())
            }
            FilterQuery::Year(year) => record.year == *year,
            FilterQuery::Genres(genres) => genres.contains(&record.genre),
        }
    }
}

/// Ids of all matching records, in catalog order.
pub fn matching_ids(catalog: &Catalog, query: &FilterQuery) -> Vec<String> {
    catalog
        .iter()
        .filter(|record| query.matches(record))
        .map(|record| record.id.clone())
        .collect()
}
