use std::path::PathBuf;

/// Default location of the sample directory on the Jallib NAS mirror.
pub const DEFAULT_SAMPLE_DIR: &str = "/media/nas/jallib/sample";

/// Default report filename, resolved against the current working directory.
pub const DEFAULT_REPORT_FILE: &str = "sampleclass.lst";

/// Where to read samples from and where to write the report.
///
/// Passed explicitly into the pipeline operations; there is no
/// process-wide mutable configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the sample files. Read-only input, externally
    /// owned; never created or modified by a run.
    pub sample_dir: PathBuf,
    /// Destination of the report file. Created or truncated on each run.
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_dir: PathBuf::from(DEFAULT_SAMPLE_DIR),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}
