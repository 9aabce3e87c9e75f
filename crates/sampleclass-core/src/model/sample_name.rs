use compact_str::CompactString;
use thiserror::Error;

/// A sample filename split into its device prefix and primary library.
///
/// Jallib sample files are named `<device>_<library>.<ext>`, where
/// `<device>` is the PIC type (e.g. `16F877`) and `<library>` names the
/// library the sample is a showcase for. Only the first `_` separates the
/// two parts, so the library name may itself contain further underscores
/// (`18F4550_serial_hw_int` showcases `serial_hw_int`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleName {
    /// Device (PIC type) prefix: the stem up to the first `_`.
    pub device: CompactString,
    /// Primary library: the stem after the first `_`.
    pub library: CompactString,
}

/// A filename whose stem contains no `_` separator.
///
/// Returned as a value so callers can choose between per-file reporting
/// and aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed sample filename {name:?}: no `_` separator in stem {stem:?}")]
pub struct MalformedName {
    /// The directory entry as listed.
    pub name: CompactString,
    /// The stem that failed to split.
    pub stem: CompactString,
}

/// Parse a directory entry name into a [`SampleName`].
///
/// The extension (the suffix starting at the last `.`, if any) is
/// stripped first; the remaining stem is split at its first `_`.
pub fn parse_sample_name(name: &str) -> Result<SampleName, MalformedName> {
    let stem = stem(name);
    match stem.split_once('_') {
        Some((device, library)) => Ok(SampleName {
            device: CompactString::new(device),
            library: CompactString::new(library),
        }),
        None => Err(MalformedName {
            name: CompactString::new(name),
            stem: CompactString::new(stem),
        }),
    }
}

/// Strip the extension from a filename.
///
/// The extension starts at the last `.`, except that leading dots never
/// start one: `.profile` has no extension and keeps its whole name as
/// the stem, while `.profile.bak` has extension `bak`.
fn stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if name[..dot].bytes().any(|b| b != b'.') => &name[..dot],
        _ => name,
    }
}
