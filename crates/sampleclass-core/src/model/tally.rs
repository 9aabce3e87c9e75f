use compact_str::CompactString;
use std::collections::HashMap;

/// Occurrence counts per primary library.
///
/// Keys are unique; insertion order is irrelevant. Report ordering is
/// produced on demand by [`LibraryTally::sorted_entries`], so the map
/// itself stays a plain `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct LibraryTally {
    counts: HashMap<CompactString, u64>,
}

impl LibraryTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample for `library`, creating the entry at 0 if absent.
    pub fn record(&mut self, library: CompactString) {
        *self.counts.entry(library).or_insert(0) += 1;
    }

    /// Number of distinct libraries seen.
    pub fn distinct_libraries(&self) -> usize {
        self.counts.len()
    }

    /// Total samples recorded across all libraries.
    pub fn total_samples(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Count for a single library, 0 if never recorded.
    pub fn count(&self, library: &str) -> u64 {
        self.counts.get(library).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries sorted lexicographically ascending by library name.
    pub fn sorted_entries(&self) -> Vec<(&CompactString, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, &v)| (k, v)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_creates_and_increments() {
        let mut tally = LibraryTally::new();
        tally.record(CompactString::new("blink"));
        tally.record(CompactString::new("blink"));
        tally.record(CompactString::new("uart"));

        assert_eq!(tally.count("blink"), 2);
        assert_eq!(tally.count("uart"), 1);
        assert_eq!(tally.count("lcd"), 0);
        assert_eq!(tally.distinct_libraries(), 2);
        assert_eq!(tally.total_samples(), 3);
    }

    /// Sorted entries must come back ascending by library name
    /// regardless of insertion order.
    #[test]
    fn sorted_entries_are_ascending() {
        let mut tally = LibraryTally::new();
        for lib in ["uart", "adc", "blink", "adc"] {
            tally.record(CompactString::new(lib));
        }

        let entries = tally.sorted_entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["adc", "blink", "uart"]);
        assert_eq!(entries[0].1, 2, "adc was recorded twice");
    }

    #[test]
    fn empty_tally() {
        let tally = LibraryTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.distinct_libraries(), 0);
        assert_eq!(tally.total_samples(), 0);
        assert!(tally.sorted_entries().is_empty());
    }
}
