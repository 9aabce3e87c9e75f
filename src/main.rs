//! sampleclass - primary-library usage report for the Jallib sample collection.
//!
//! Thin binary entry point. All logic lives in the `sampleclass-core` crate.

use clap::Parser;
use std::path::PathBuf;

use sampleclass_core::analysis::tally_libraries;
use sampleclass_core::config::{Config, DEFAULT_REPORT_FILE, DEFAULT_SAMPLE_DIR};
use sampleclass_core::{report, scanner};

/// Count samples per showcased library, based on filenames.
///
/// Sample filenames start with the PIC device type, followed by the name
/// of the library the sample is a showcase for: `<device>_<library>.<ext>`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the sample files.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SAMPLE_DIR)]
    sample_dir: PathBuf,

    /// Destination of the report file.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_REPORT_FILE)]
    report: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = Config {
        sample_dir: args.sample_dir,
        report_path: args.report,
    };

    println!("Collecting primary library usage");

    // A missing directory or a filename without a `_` separator aborts the
    // whole batch; there is no per-file isolation.
    let entries = scanner::list_entries(&config.sample_dir)?;
    let tally = tally_libraries(&entries)?;

    // Write failure comes back as a value: report it and fail the run
    // rather than printing a completion notice over a missing report.
    if let Err(err) = report::write(&config.report_path, &tally) {
        eprintln!("Failed to write output: {}", config.report_path.display());
        return Err(err.into());
    }

    println!("See {} for results.", config.report_path.display());
    Ok(())
}
