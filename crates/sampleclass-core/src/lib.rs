//! Sampleclass Core - scanning, classification, and report model.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! It is designed to be reusable across different frontends (CLI, batch
//! jobs, the Jallib release tooling).
//!
//! # Modules
//!
//! - [`config`] - Explicit run configuration (sample directory, report path).
//! - [`scanner`] - Sorted enumeration of the sample directory.
//! - [`model`] - Sample filename parsing and the per-library tally.
//! - [`analysis`] - Builds the tally from a directory listing.
//! - [`report`] - Fixed-width report rendering and writing.

pub mod analysis;
pub mod config;
pub mod model;
pub mod report;
pub mod scanner;
