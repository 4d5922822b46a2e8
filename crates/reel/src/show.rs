use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use reel_catalog::{facet_counts, FacetField};

use crate::catalog_file;
use crate::table::write_movie_table;

#[derive(ValueEnum, Debug, Clone, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

#[derive(Args, Debug, Clone)]
#[command(about = "Render the full catalog")]
pub struct ShowArgs {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(value_name = "CATALOG", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let catalog = catalog_file::load(args.file.as_deref())?;
    let rendered = render(&catalog, &args.format)?;
    write_output(&rendered, args.output.as_deref())
}

fn render(catalog: &reel_catalog::Catalog, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut buf = Vec::new();
            write_movie_table(catalog.records(), &[], &mut buf)?;
            Ok(String::from_utf8(buf).expect("table output is UTF-8"))
        }
        OutputFormat::Html => {
            let years = facet_counts(catalog, FacetField::Year);
            let genres = facet_counts(catalog, FacetField::Genre);
            Ok(reel_html::render_page(
                catalog.records(),
                &years,
                &genres,
                &[],
            ))
        }
    }
}

pub fn write_output(rendered: &str, output: Option<&std::path::Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            use io::Write;
            let mut writer = io::stdout().lock();
            write!(writer, "{rendered}")?;
            Ok(())
        }
    }
}
