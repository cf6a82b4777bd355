//! Trackpanel - Release Decision Report CLI
//!
//! The `trackpanel` command turns a JSON snapshot of panel reviews into a
//! release decision report.
//!
//! ## Commands
//!
//! - `report`: Generate the report and print it (Markdown or JSON)
//! - `validate`: Run the normalizer only and show drop diagnostics

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};

use trackpanel_core::{
    generate_report_with, normalize_reviews, render_report_md, write_report_json, RawReview,
    ReportConfig, ReportError,
};

#[derive(Parser)]
#[command(name = "trackpanel")]
#[command(author = "Trackpanel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Release decision reports from track review panels", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a release decision report from a reviews snapshot
    Report {
        /// Path to the reviews JSON file (array of review records)
        #[arg(short, long)]
        reviews: PathBuf,

        /// Output format printed to stdout
        #[arg(long, value_enum, default_value = "md")]
        format: OutputFormat,

        /// Directory to write a report.json artifact into
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Jaccard similarity threshold for fix clustering
        #[arg(long, default_value_t = 0.4)]
        threshold: f64,

        /// Number of top fixes to include
        #[arg(long, default_value_t = 3)]
        top_fixes: usize,

        /// Cap per evidence list (strengths/risks/benchmarks)
        #[arg(long, default_value_t = 10)]
        max_evidence: usize,
    },

    /// Validate a reviews snapshot and print normalizer diagnostics
    Validate {
        /// Path to the reviews JSON file (array of review records)
        #[arg(short, long)]
        reviews: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable Markdown
    Md,
    /// Pretty-printed JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    trackpanel_core::init_tracing(cli.json, level);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            if matches!(
                err.downcast_ref::<ReportError>(),
                Some(ReportError::InsufficientReviews { .. })
            ) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Report {
            reviews,
            format,
            out_dir,
            threshold,
            top_fixes,
            max_evidence,
        } => {
            let raw = load_reviews(&reviews)?;

            let mut config = ReportConfig::default();
            config.clustering.similarity_threshold = threshold;
            config.clustering.top_fixes = top_fixes;
            config.evidence.max_entries = max_evidence;

            let report = generate_report_with(&raw, &config)?;

            match format {
                OutputFormat::Md => println!("{}", render_report_md(&report)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?)
                }
            }

            if let Some(dir) = out_dir {
                let path = write_report_json(&report, &dir)?;
                info!(event = "cli.artifact_written", path = %path.display());
            }

            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate { reviews } => {
            let raw = load_reviews(&reviews)?;
            let (records, summary) = normalize_reviews(&raw);

            println!("submitted:           {}", summary.submitted);
            println!("kept:                {}", summary.kept);
            println!("dropped records:     {}", summary.dropped_records);
            println!("  empty reviewer id: {}", summary.empty_reviewer_ids);
            println!("  unknown verdict:   {}", summary.unknown_verdicts);
            println!("  invalid score:     {}", summary.invalid_scores);
            println!("  duplicate reviewer: {}", summary.duplicate_reviewers);
            println!("dropped fixes:       {}", summary.dropped_fixes);

            if records.is_empty() {
                // Same signal the report path gives for an empty panel.
                eprintln!("error: no valid reviews in snapshot");
                return Ok(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_reviews(path: &Path) -> Result<Vec<RawReview>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading reviews file {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing reviews JSON {}", path.display()))
}
