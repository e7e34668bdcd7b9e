//! Error types for domain search

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Data source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid BM25 parameters: k1={k1}, b={b} (need k1 >= 0 and 0 <= b <= 1)")]
    InvalidBm25Params { k1: f64, b: f64 },

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Data directory not found; pass --data-dir or set SKILLSEARCH_DATA_DIR")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
