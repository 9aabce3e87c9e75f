/// Data model for sample classification.
///
/// Re-exports the parsed-filename type and the per-library tally.
pub mod sample_name;
pub mod tally;

pub use sample_name::{parse_sample_name, MalformedName, SampleName};
pub use tally::LibraryTally;
