//! Loading a whole course file into a [`Catalog`].
//!
//! The loader is the only writer: it clears the catalog and repopulates it
//! from scratch, so a reload fully replaces prior state and never merges
//! with it. Malformed lines are collected as diagnostics rather than
//! aborting the pass, and the prerequisite integrity check runs once after
//! the last line so forward references are never falsely flagged.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    domain::{Catalog, Violation},
    storage::csv::{self, ParseError},
};

/// Diagnostics collected by a completed load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of courses stored, after duplicate overwrites.
    pub loaded: usize,
    /// Malformed lines, in input order. Blank lines are not included.
    pub format_errors: Vec<FormatError>,
    /// Unresolved prerequisite references found by the post-load pass.
    pub violations: Vec<Violation>,
}

impl LoadReport {
    /// True when the load produced no diagnostics at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.format_errors.is_empty() && self.violations.is_empty()
    }
}

/// A line that could not be parsed into a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    /// 1-based input line number.
    pub line: usize,
    /// Why the line was rejected.
    pub reason: ParseError,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Format error line {}: {}", self.line, self.reason)
    }
}

/// Errors that abort a load outright.
///
/// Per-line failures are not in this enum: they are collected into the
/// [`LoadReport`] and the load continues past them.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened. The catalog is left untouched.
    #[error("could not open file: {path}")]
    Source {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The input stream failed partway through the load.
    #[error("could not read input")]
    Read(#[from] io::Error),

    /// The load completed but stored no courses. An empty catalog is never
    /// a usable "loaded" state; the diagnostics gathered along the way
    /// travel with the error.
    #[error("no valid courses loaded")]
    Empty(LoadReport),
}

/// Loads the course file at `path`, replacing the catalog's contents.
///
/// # Errors
///
/// Returns [`LoadError::Source`] if the file cannot be opened — in that
/// case the catalog is not touched. Otherwise behaves as [`load_reader`].
#[instrument(level = "debug", skip(catalog))]
pub fn load_path(path: &Path, catalog: &mut Catalog) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Source {
        path: path.to_path_buf(),
        source,
    })?;

    load_reader(BufReader::new(file), catalog)
}

/// Loads course lines from a buffered reader, replacing the catalog's
/// contents.
///
/// The catalog is cleared before the first line is read. Lines are consumed
/// in order with a 1-based counter; blank lines are skipped silently,
/// malformed lines are recorded in the report and skipped, and valid lines
/// are inserted with overwrite-by-key semantics (the last occurrence of a
/// duplicate number wins). Only the first non-blank line is eligible for
/// byte-order-mark stripping, regardless of leading blank lines. After the
/// last line the integrity pass runs and its findings are attached to the
/// report.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the stream fails mid-load, and
/// [`LoadError::Empty`] if no course was stored by the time the input is
/// exhausted.
pub fn load_reader<R: BufRead>(reader: R, catalog: &mut Catalog) -> Result<LoadReport, LoadError> {
    catalog.clear();

    let mut report = LoadReport::default();
    let mut is_first_data_line = true;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        match csv::parse_line(&line, line_number, is_first_data_line) {
            Ok(course) => {
                is_first_data_line = false;
                catalog.insert(course);
            }
            Err(ParseError::BlankLine) => {}
            Err(reason @ ParseError::InvalidHeader) => {
                is_first_data_line = false;
                report.format_errors.push(FormatError {
                    line: line_number,
                    reason,
                });
            }
        }
    }

    report.violations = catalog.unresolved_prerequisites();
    report.loaded = catalog.len();

    debug!(
        loaded = report.loaded,
        format_errors = report.format_errors.len(),
        violations = report.violations.len(),
        "load complete"
    );

    if catalog.is_empty() {
        return Err(LoadError::Empty(report));
    }

    Ok(report)
}
