use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use reel_catalog::{facet_counts, Catalog, FacetField};

use crate::catalog_file;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FieldArg {
    Year,
    Genre,
}

impl From<FieldArg> for FacetField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Year => FacetField::Year,
            FieldArg::Genre => FacetField::Genre,
        }
    }
}

#[derive(Args, Debug, Clone)]
#[command(about = "List unique year/genre values and their counts")]
pub struct FacetsArgs {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(value_name = "CATALOG", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Restrict to a single facet field (default: both)
    #[arg(long, value_name = "FIELD")]
    pub field: Option<FieldArg>,
}

pub fn execute(args: FacetsArgs) -> Result<()> {
    let catalog = catalog_file::load(args.file.as_deref())?;
    let mut writer = io::stdout().lock();

    match args.field {
        Some(field) => write_facet_table(&catalog, field.into(), &mut writer)?,
        None => {
            writeln!(writer, "Year:")?;
            write_facet_table(&catalog, FacetField::Year, &mut writer)?;
            writeln!(writer, "Genre:")?;
            write_facet_table(&catalog, FacetField::Genre, &mut writer)?;
        }
    }

    Ok(())
}

fn write_facet_table<W: Write>(
    catalog: &Catalog,
    field: FacetField,
    mut writer: W,
) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Value", "Count"]);
    for facet in facet_counts(catalog, field) {
        table.add_row(vec![facet.value, facet.count.to_string()]);
    }
    writeln!(writer, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_table_output() {
        let catalog = Catalog::from_json(
            r#"[
                {"id": 1, "title": "A", "genre": "Drama", "year": "1999", "image": ""},
                {"id": 2, "title": "B", "genre": "Drama", "year": "2003", "image": ""}
            ]"#,
        )
        .unwrap();
        let mut buf = Vec::new();
        write_facet_table(&catalog, FacetField::Genre, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Drama"));
        assert!(output.contains('2'));
    }
}
