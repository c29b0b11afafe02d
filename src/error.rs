use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while loading, transforming, or writing reports
#[derive(Debug, Error)]
pub enum SarifError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize report")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("result {result} of run {run} has no location and cannot be fingerprinted")]
    MissingLocation { run: usize, result: usize },

    #[error("result {result} of run {run} has no {field} on its first location and cannot be fingerprinted")]
    IncompleteLocation {
        run: usize,
        result: usize,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SarifError>;
