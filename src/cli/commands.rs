use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a PMD JSON report into a SARIF document
    Convert(ConvertArgs),

    /// Merge two SARIF documents, fingerprinting every result
    Merge(MergeArgs),

    /// Print the fingerprint of a single finding
    Fingerprint(FingerprintArgs),

    /// Initialize a .pmd-sarif.toml config file in the current directory
    Init,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// PMD JSON report to read
    pub pmd_json: PathBuf,

    /// SARIF file to write (overwritten)
    pub sarif_out: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// First SARIF document (missing file = no runs)
    pub pmd_sarif: PathBuf,

    /// Second SARIF document (missing file = no runs)
    pub spot_sarif: PathBuf,

    /// Combined SARIF file to write (overwritten)
    pub out: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct FingerprintArgs {
    /// Artifact URI
    pub file: String,

    /// Start line (1-based)
    pub line: u64,

    /// Rule identifier
    pub rule: String,

    /// Message text
    pub message: String,
}
