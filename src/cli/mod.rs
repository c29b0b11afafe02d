pub mod commands;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;

/// pmd-sarif — PMD to SARIF conversion and fingerprinted SARIF merging
#[derive(Parser, Debug)]
#[command(
    name = "pmd-sarif",
    version,
    about = "Convert PMD reports to SARIF and merge SARIF documents with stable fingerprints",
    long_about = "pmd-sarif converts PMD JSON reports to SARIF 2.1.0 and merges SARIF\ndocuments into one, tagging every result with a partialFingerprints\nentry so downstream tools can deduplicate findings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Read output settings from this TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a per-run summary of the written document
    #[arg(long, global = true)]
    pub summary: bool,
}
