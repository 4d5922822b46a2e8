//! The controller: explicit view state plus the reset → filter → highlight
//! cycle for each submit event.

use std::collections::BTreeSet;

use crate::filter::{matching_ids, FilterQuery};
use crate::Catalog;

/// One user session over a catalog.
///
/// Owns the catalog and all view state the original kept in ambient UI
/// handles: the search input buffer, the single-choice year selection, the
/// multi-choice genre selection, and the current highlight set (record ids
/// in catalog order). Every submit handler runs synchronously to
/// completion; there is no overlap between cycles.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    search_input: String,
    selected_year: Option<String>,
    selected_genres: BTreeSet<String>,
    highlighted: Vec<String>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            search_input: String::new(),
            selected_year: None,
            selected_genres: BTreeSet::new(),
            highlighted: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Record ids currently highlighted, in catalog order.
    pub fn highlighted(&self) -> &[String] {
        &self.highlighted
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Select a year (single-choice: replaces any previous selection).
    pub fn select_year(&mut self, year: impl Into<String>) {
        self.selected_year = Some(year.into());
    }

    pub fn selected_year(&self) -> Option<&str> {
        self.selected_year.as_deref()
    }

    /// Toggle a genre checkbox on or off.
    pub fn toggle_genre(&mut self, genre: impl Into<String>) {
        let genre = genre.into();
        if !self.selected_genres.remove(&genre) {
            self.selected_genres.insert(genre);
        }
    }

    pub fn selected_genres(&self) -> &BTreeSet<String> {
        &self.selected_genres
    }

    /// Clear the highlight set. Idempotent.
    pub fn reset_highlight(&mut self) {
        self.highlighted.clear();
    }

    /// Submit the title search: reset, filter on the input buffer,
    /// highlight the matches, then clear the input buffer. A blank buffer
    /// highlights nothing (the buffer is still cleared).
    pub fn submit_search(&mut self) {
        self.reset_highlight();
        let query = FilterQuery::Title(self.search_input.clone());
        self.highlighted = matching_ids(&self.catalog, &query);
        self.search_input.clear();
    }

    /// Submit the year filter. With no year selected this is a defined
    /// no-op: the previous highlight state is left untouched. The selection
    /// is retained after filtering.
    pub fn submit_year(&mut self) {
        let Some(year) = self.selected_year.clone() else {
            log::warn!("year filter submitted with no year selected; ignoring");
            return;
        };
        self.reset_highlight();
        self.highlighted = matching_ids(&self.catalog, &FilterQuery::Year(year));
    }

    /// Submit the genre filter. An empty selection highlights nothing
    /// (reset-only). The selection is retained after filtering.
    pub fn submit_genres(&mut self) {
        self.reset_highlight();
        let query = FilterQuery::Genres(self.selected_genres.clone());
        self.highlighted = matching_ids(&self.catalog, &query);
    }
}
