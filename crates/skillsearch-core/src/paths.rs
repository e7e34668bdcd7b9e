//! Data directory resolution

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Environment variable overriding the default data directory
pub const DATA_DIR_ENV: &str = "SKILLSEARCH_DATA_DIR";

/// Resolve the directory holding the CSV knowledge bases.
///
/// An explicit path wins, then `SKILLSEARCH_DATA_DIR`, then
/// `<platform data dir>/skillsearch/data`.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_dir()
        .map(|base| base.join("skillsearch").join("data"))
        .ok_or(Error::DataDirNotFound)
}
