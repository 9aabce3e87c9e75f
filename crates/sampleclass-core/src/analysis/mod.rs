//! Analysis - builds the per-library tally from a directory listing.

use crate::model::{parse_sample_name, LibraryTally, MalformedName};
use compact_str::CompactString;
use tracing::debug;

/// Tally the primary library of every listed entry.
///
/// One pass over the (already sorted) listing. The first malformed name
/// aborts the whole batch; the returned error names the offending file
/// so the sample collection can be fixed.
pub fn tally_libraries(entries: &[CompactString]) -> Result<LibraryTally, MalformedName> {
    let mut tally = LibraryTally::new();
    for name in entries {
        let parsed = parse_sample_name(name)?;
        tally.record(parsed.library);
    }

    debug!(
        "{} samples across {} libraries",
        tally.total_samples(),
        tally.distinct_libraries()
    );
    Ok(tally)
}
