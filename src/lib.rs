//! In-Memory Course Catalog
//!
//! Courses are parsed from a comma-delimited text file into a hash table
//! keyed by normalized course number.

pub mod domain;
pub use domain::{Catalog, Course, CourseId, Violation};

/// Course-file parsing and catalog loading.
pub mod storage;
pub use storage::{FormatError, LoadError, LoadReport, ParseError};
