//! Wikitrail main entry point
//!
//! This is the command-line interface for the wikitrail path finder.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wikitrail::config::{load_config, validate, Config};
use wikitrail::output::{path_steps, render_path, write_path_file};
use wikitrail::{search, SearchOutcome};

/// Wikitrail: find a hyperlink path between two Wikipedia articles
///
/// Wikitrail runs a concurrent breadth-first search outward from a start
/// article, following only article links, until it reaches the target
/// article or exhausts every page within the depth limit.
#[derive(Parser, Debug)]
#[command(name = "wikitrail")]
#[command(version)]
#[command(about = "Find a hyperlink path between two Wikipedia articles", long_about = None)]
struct Cli {
    /// Article URL the search starts from
    #[arg(value_name = "START_URL", requires = "target_url")]
    start_url: Option<String>,

    /// Article URL the search is looking for
    #[arg(value_name = "TARGET_URL", requires = "max_depth")]
    target_url: Option<String>,

    /// Maximum depth to explore from the start article
    #[arg(value_name = "MAX_DEPTH")]
    max_depth: Option<u32>,

    /// Path to TOML configuration file (alternative to positional arguments)
    #[arg(short, long, value_name = "CONFIG", conflicts_with = "start_url")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    tracing::info!(
        "Searching for a path from {} to {} (max depth {})",
        config.search.start_url,
        config.search.target_url,
        config.search.max_depth
    );

    let start_url = config.search.start_url.clone();
    let target_url = config.search.target_url.clone();
    let path_file = config.output.path_file.clone();

    match search(config).await {
        Ok(SearchOutcome::Found { path }) => {
            let report = render_path(&path_steps(&path));
            print!("{}", report);

            if let Some(file) = path_file {
                write_path_file(Path::new(&file), &report)?;
                println!("Full path written to {}", file);
            }
            Ok(())
        }
        Ok(SearchOutcome::NotFound) => {
            println!("No path found from {} to {}.", start_url, target_url);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            Err(e.into())
        }
    }
}

/// Builds the configuration from either the config file or the three
/// positional arguments
fn resolve_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
        return Ok(load_config(path)?);
    }

    match (&cli.start_url, &cli.target_url, cli.max_depth) {
        (Some(start), Some(target), Some(depth)) => {
            let config = Config::from_endpoints(start, target, depth);
            validate(&config)?;
            Ok(config)
        }
        _ => Err("provide START_URL TARGET_URL MAX_DEPTH, or --config <FILE>".into()),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wikitrail=info,warn"),
            1 => EnvFilter::new("wikitrail=debug,info"),
            2 => EnvFilter::new("wikitrail=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
