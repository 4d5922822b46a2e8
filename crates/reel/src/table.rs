//! Terminal table output, the textual analog of the HTML row highlight.

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, Table};
use reel_catalog::MovieRecord;

/// Write the catalog as a formatted table, coloring highlighted rows.
pub fn write_movie_table<W: Write>(
    records: &[MovieRecord],
    highlighted: &[String],
    mut writer: W,
) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::DynamicFullWidth);
    table.set_header(vec!["Id", "Title", "Genre", "Year"]);

    for record in records {
        let is_highlighted = highlighted.iter().any(|id| *id == record.id);
        let cells = [
            record.id.as_str(),
            record.title.as_str(),
            record.genre.as_str(),
            record.year.as_str(),
        ];
        table.add_row(cells.iter().map(|text| {
            if is_highlighted {
                Cell::new(text).fg(Color::Green)
            } else {
                Cell::new(text)
            }
        }));
    }

    writeln!(writer, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: title.to_string(),
            genre: "Drama".to_string(),
            year: "2000".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_table_lists_all_records() {
        let records = vec![record("1", "Matrix"), record("2", "Amadeus")];
        let mut buf = Vec::new();
        write_movie_table(&records, &[], &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Matrix"));
        assert!(output.contains("Amadeus"));
        assert!(output.contains("Title"));
    }

    #[test]
    fn test_empty_catalog_renders_header_only() {
        let mut buf = Vec::new();
        write_movie_table(&[], &[], &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Year"));
    }
}
