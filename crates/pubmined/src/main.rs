//! Command line interface for the pubmine author-contact harvester.
//!
//! This crate provides a CLI tool over the `pubmine` library. One
//! invocation runs the whole pipeline:
//! - Search PubMed for a keyword
//! - Fetch metadata for the matching articles
//! - Filter out purely institutional author entries
//! - Write the surviving records to a CSV file
//!
//! # Usage
//!
//! ```bash
//! # Search and write to the generated default file name
//! pubmine "breast cancer"
//!
//! # Choose the output file (must end in .csv)
//! pubmine "breast cancer" --file results.csv
//!
//! # Raise log verbosity
//! pubmine "breast cancer" --debug
//! ```
//!
//! Every failure path prints a human-readable message; there are no
//! distinct exit codes beyond the process defaults.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use clap::{builder::ArgAction, Parser};
use console::style;
use pubmine::{client::EntrezClient, output, pipeline, prelude::*};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Search PubMed and harvest author contact information")]
pub struct Cli {
  /// Search keyword sent to the literature database
  keyword: String,

  /// Run with debug-level logging
  #[arg(short, long)]
  debug: bool,

  /// Output CSV file path; generated from the keyword when omitted
  #[arg(short, long)]
  file: Option<String>,

  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(short, long, action = ArgAction::Count, help = "Increase logging verbosity")]
  verbose: u8,
}

/// Configures the logging system from the verbosity count and debug flag.
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `--debug` forces at least debug level.
fn setup_logging(verbosity: u8, debug: bool) {
  let filter = match (debug, verbosity) {
    (true, 0..=3) => "debug",
    (_, 0) => "error",
    (_, 1) => "warn",
    (_, 2) => "info",
    (_, 3) => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the search-fetch-extract-write pipeline for one invocation.
///
/// The output path is resolved and validated before any network call, so
/// a bad `--file` argument has no side effects at all.
async fn run(cli: &Cli) -> Result<()> {
  let path = match &cli.file {
    Some(file) => file.clone(),
    None => output::default_path(&cli.keyword),
  };
  debug!("Resolved output path: {}", path);

  println!("{} Searching PubMed for: {}", style(INFO_PREFIX).blue(), style(&cli.keyword).bold());

  let client = EntrezClient::default();
  let records = pipeline::harvest_to_file(&client, &cli.keyword, &path).await?;

  println!(
    "{} {} article(s) with contact-worthy authors",
    style(INFO_PREFIX).blue(),
    records.len()
  );
  println!("{} Wrote {}", style(SUCCESS_PREFIX).green(), style(&path).bold());
  Ok(())
}

/// Entry point for the pubmine CLI.
///
/// Parses arguments, configures logging, and reports any pipeline failure
/// as a styled message rather than a panic or custom exit code.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose, cli.debug);

  if let Err(e) = run(&cli).await {
    eprintln!("{} {}", style(ERROR_PREFIX).red(), e);
  }
}
