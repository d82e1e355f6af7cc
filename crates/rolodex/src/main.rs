//! Rolodex - fuzzy search over contact records
//!
//! Usage:
//!     rolodex search john smith --records contacts.json
//!     rolodex match jon "John Smith"
//!     rolodex distance kitten sitting
//!
//! Environment variables:
//! - `ROLODEX_RECORDS`: record file for `search`
//! - `ROLODEX_MIN_SCORE`: minimum score 0.0-1.0 (default: 0.0, exclusive)
//! - `ROLODEX_MAX_RESULTS`: result limit (default: unlimited)
//! - `ROLODEX_NEUTRAL_SCORE`: score for blank queries (default: 1.0)
//! - `RUST_LOG`: logging filter (overrides `--log-level`)

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rolodex::output::{to_json, HitView, MatchResultView};
use rolodex::{load_records, SearchOptions};
use rolodex_core::{fuzzy_match, levenshtein_distance, SearchEngine};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "Fuzzy search over contact records")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank records against a query, best first
    Search {
        /// Query words; every word must match somewhere in a record
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        options: SearchOptions,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Classify how a query relates to a single text
    Match { query: String, text: String },

    /// Case-insensitive edit distance between two strings
    Distance { a: String, b: String },
}

fn run(command: Command) -> rolodex::Result<()> {
    match command {
        Command::Search {
            query,
            options,
            pretty,
        } => {
            let config = options.to_config()?;
            let engine = SearchEngine::with_config(config)?;
            let records = load_records(&options.records)?;

            let query = query.join(" ");
            let hits = engine.search(&records, &query);
            info!(
                query = %query,
                records = records.len(),
                hits = hits.len(),
                "search finished"
            );

            let views: Vec<HitView> = hits.iter().map(HitView::from).collect();
            println!("{}", to_json(&views, pretty)?);
        }
        Command::Match { query, text } => {
            let view = MatchResultView::from(fuzzy_match(&query, &text));
            println!("{}", to_json(&view, false)?);
        }
        Command::Distance { a, b } => {
            println!("{}", levenshtein_distance(&a, &b));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    rolodex::logging::init_with_filter(&cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
