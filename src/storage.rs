//! Course-file parsing and catalog loading.
//!
//! The input format is plain text, one course per line:
//! `NUMBER,TITLE[,PREREQ]*`. [`csv`] turns single lines into records and
//! [`loader`] drives it over a whole file, isolating per-line failures so
//! one bad line never aborts a load.

/// Comma-delimited line parsing.
pub mod csv;
mod loader;

pub use csv::ParseError;
pub use loader::{FormatError, LoadError, LoadReport, load_path, load_reader};
