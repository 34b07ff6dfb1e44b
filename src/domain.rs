//! Domain models for the course catalog.
//!
//! This module contains the core domain types including the course record,
//! normalized course identifiers, and the hash-table catalog that stores
//! them.

/// Course record model.
pub mod course;
pub use course::Course;

/// Hash-table catalog and the prerequisite integrity pass.
pub mod catalog;
pub use catalog::{Catalog, Violation};

/// Normalized course identifier types and parsing.
pub mod course_id;
pub use course_id::{CourseId, EmptyCourseIdError};
