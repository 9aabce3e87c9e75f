//! Report rendering and writing.
//!
//! The report is a plain-text list, one line per library, sorted
//! ascending by library name: the count right-justified in a minimum
//! four-character field, two spaces, then the name.

use crate::model::LibraryTally;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Failure to create or write the report file.
///
/// Returned as a value rather than handled here, so the caller decides
/// whether a missing report fails the run or is merely logged.
#[derive(Debug, Error)]
#[error("cannot write report {}: {source}", .path.display())]
pub struct ReportError {
    /// Destination that could not be written.
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Render the tally as report text.
///
/// An empty tally renders as an empty string: no header, no footer.
pub fn render(tally: &LibraryTally) -> String {
    let mut out = String::new();
    for (library, count) in tally.sorted_entries() {
        out.push_str(&format!("{count:>4}  {library}\n"));
    }
    out
}

/// Write the rendered report to `path`, creating or truncating the file.
///
/// The file handle is scoped to this function, so the resource is
/// released whether or not the write succeeds.
pub fn write(path: &Path, tally: &LibraryTally) -> Result<(), ReportError> {
    let wrap = |source: io::Error| ReportError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(render(tally).as_bytes()).map_err(wrap)?;

    info!(
        "report written to {} ({} libraries)",
        path.display(),
        tally.distinct_libraries()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn tally_of(libs: &[&str]) -> LibraryTally {
        let mut tally = LibraryTally::new();
        for lib in libs {
            tally.record(CompactString::new(lib));
        }
        tally
    }

    /// Counts sit right-justified in a four-character field, followed by
    /// exactly two spaces and the library name.
    #[test]
    fn render_fixed_width_lines() {
        let tally = tally_of(&["uart", "blink", "blink"]);
        assert_eq!(render(&tally), "   2  blink\n   1  uart\n");
    }

    /// Counts wider than four digits push the field out instead of
    /// truncating.
    #[test]
    fn render_wide_counts() {
        let mut tally = LibraryTally::new();
        for _ in 0..12345 {
            tally.record(CompactString::new("delay"));
        }
        assert_eq!(render(&tally), "12345  delay\n");
    }

    #[test]
    fn render_empty_tally_is_empty() {
        assert_eq!(render(&LibraryTally::new()), "");
    }

    /// Lines come out sorted by library name, not by count.
    #[test]
    fn render_sorted_by_library() {
        let tally = tally_of(&["uart", "uart", "uart", "adc"]);
        let text = render(&tally);
        let keys: Vec<&str> = text.lines().map(|l| &l[6..]).collect();
        assert_eq!(keys, ["adc", "uart"]);
    }

    #[test]
    fn write_failure_names_the_path() {
        let tmp = tempfile::TempDir::new().expect("failed to create temp dir");
        // A destination under a non-existent subdirectory cannot be created.
        let dest = tmp.path().join("missing").join("sampleclass.lst");

        let err = write(&dest, &tally_of(&["blink"])).unwrap_err();
        assert_eq!(err.path, dest);
    }
}
