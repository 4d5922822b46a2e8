use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod catalog_file;
mod facets;
mod filter;
mod show;
mod table;

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Browse and filter a movie catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full catalog
    #[command(alias = "s")]
    Show(show::ShowArgs),

    /// List unique year/genre values and their counts
    Facets(facets::FacetsArgs),

    /// Filter the catalog and highlight the matches
    #[command(alias = "f")]
    Filter(filter::FilterArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug; RUST_LOG overrides both.
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Show(args) => show::execute(args),
        Commands::Facets(args) => facets::execute(args),
        Commands::Filter(args) => filter::execute(args),
    }
}
