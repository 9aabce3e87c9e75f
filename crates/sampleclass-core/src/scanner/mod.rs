//! Scanner module - sorted enumeration of the sample directory.
//!
//! A single synchronous pass over one directory level. Every entry is
//! taken by name, files and subdirectories alike; classification further
//! down the pipeline is purely name-based, so no metadata is fetched.

use compact_str::CompactString;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure to enumerate the sample directory.
#[derive(Debug, Error)]
#[error("cannot list sample directory {}: {source}", .dir.display())]
pub struct ScanError {
    /// The directory that could not be listed.
    pub dir: PathBuf,
    #[source]
    pub source: io::Error,
}

impl ScanError {
    fn new(dir: &Path, source: io::Error) -> Self {
        Self {
            dir: dir.to_path_buf(),
            source,
        }
    }
}

/// List all entries of `dir` by name, sorted lexicographically ascending.
///
/// Sorting pins down the processing order (and with it which malformed
/// name, if any, aborts a run); the report itself is independently
/// sorted by library. Non-UTF-8 names are converted lossily.
pub fn list_entries(dir: &Path) -> Result<Vec<CompactString>, ScanError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| ScanError::new(dir, e))? {
        let entry = entry.map_err(|e| ScanError::new(dir, e))?;
        names.push(CompactString::new(entry.file_name().to_string_lossy()));
    }
    names.sort_unstable();

    debug!("{} entries in {}", names.len(), dir.display());
    Ok(names)
}
