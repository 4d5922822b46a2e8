use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};
use colored::Colorize;
use reel_catalog::{facet_counts, FacetField, Session};

use crate::catalog_file;
use crate::show::{write_output, OutputFormat};
use crate::table::write_movie_table;

/// One filter cycle: load, reset, filter, highlight, render.
#[derive(Args, Debug, Clone)]
#[command(about = "Filter the catalog and highlight the matches")]
#[command(group = ArgGroup::new("mode").required(true).multiple(false).args(["title", "year", "genre"]))]
pub struct FilterArgs {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(value_name = "CATALOG", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Title search: case-insensitive substring match
    #[arg(short, long, value_name = "QUERY")]
    pub title: Option<String>,

    /// Year filter: exact match against a single year
    #[arg(short, long, value_name = "YEAR")]
    pub year: Option<String>,

    /// Genre filter: match any of the given genres (repeatable)
    #[arg(short, long, value_name = "GENRE")]
    pub genre: Vec<String>,

    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn execute(args: FilterArgs) -> Result<()> {
    let catalog = catalog_file::load(args.file.as_deref())?;
    let mut session = Session::new(catalog);

    if let Some(query) = &args.title {
        session.set_search_input(query);
        session.submit_search();
    } else if let Some(year) = &args.year {
        session.select_year(year);
        session.submit_year();
    } else {
        for genre in &args.genre {
            session.toggle_genre(genre);
        }
        session.submit_genres();
    }

    let matched = session.highlighted().len();
    let total = session.catalog().len();

    let rendered = match args.format {
        OutputFormat::Table => {
            let mut buf = Vec::new();
            write_movie_table(
                session.catalog().records(),
                session.highlighted(),
                &mut buf,
            )?;
            String::from_utf8(buf).expect("table output is UTF-8")
        }
        OutputFormat::Html => {
            let years = facet_counts(session.catalog(), FacetField::Year);
            let genres = facet_counts(session.catalog(), FacetField::Genre);
            reel_html::render_page(
                session.catalog().records(),
                &years,
                &genres,
                session.highlighted(),
            )
        }
    };

    write_output(&rendered, args.output.as_deref())?;

    if args.output.is_none() {
        eprintln!("{}", format!("{matched} of {total} movies match").dimmed());
    }

    Ok(())
}
