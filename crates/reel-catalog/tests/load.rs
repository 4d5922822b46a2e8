use std::io::Write;

use reel_catalog::{Catalog, CatalogError};

fn write_temp(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_catalog_from_file() {
    let file = write_temp(
        r#"[
            {"id": "tt0133093", "title": "The Matrix", "genre": "Sci-Fi", "year": 1999, "image": "matrix.jpg"},
            {"id": "tt0086879", "title": "Amadeus", "genre": "Drama", "year": "1984", "image": "amadeus.jpg"}
        ]"#,
    );

    let catalog = Catalog::load(file.path()).expect("catalog should load");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].title, "The Matrix");
    assert_eq!(catalog.records()[0].year, "1999");
    assert_eq!(catalog.get("tt0086879").unwrap().genre, "Drama");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::load(std::path::Path::new("/nonexistent/movies.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_temp("{ not json ]");
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn duplicate_ids_are_rejected_at_load() {
    let file = write_temp(
        r#"[
            {"id": 7, "title": "A", "genre": "Drama", "year": "2000", "image": ""},
            {"id": "7", "title": "B", "genre": "Drama", "year": "2001", "image": ""}
        ]"#,
    );
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "7"));
}
