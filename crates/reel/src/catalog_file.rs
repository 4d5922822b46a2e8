//! Catalog input: an optional JSON file, falling back to the embedded
//! default catalog.

use std::path::Path;

use anyhow::{Context, Result};
use reel_catalog::Catalog;

/// The built-in catalog used when no file is given.
const DEFAULT_CATALOG: &str = include_str!("../data/movies.json");

/// Load the catalog from `path`, or the embedded default if `path` is None.
pub fn load(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            log::debug!("using embedded default catalog");
            Catalog::from_json(DEFAULT_CATALOG).context("Embedded catalog is invalid")
        }
    }
}
