use std::{fmt, ops::Deref, str::FromStr};

/// A normalized course identifier (e.g. `CSCI101`).
///
/// Identifiers are canonicalized on construction: surrounding whitespace
/// (including carriage-return artifacts from CRLF files) is trimmed and the
/// remainder is uppercased. Every comparison in the catalog — storage,
/// lookup, prerequisite resolution — happens between normalized forms, so
/// `" csci101 "` and `"CSCI101"` name the same course.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a new `CourseId` by normalizing the raw input.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCourseIdError`] if nothing remains after trimming.
    pub fn new(raw: &str) -> Result<Self, EmptyCourseIdError> {
        let normalized = Self::normalize(raw);

        if normalized.is_empty() {
            return Err(EmptyCourseIdError);
        }

        Ok(Self(normalized))
    }

    /// Canonicalizes a raw identifier: trim, then uppercase.
    ///
    /// This never fails; empty input normalizes to an empty string, which
    /// [`CourseId::new`] rejects. Normalization is idempotent.
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Returns the normalized identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CourseId {
    type Error = EmptyCourseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for CourseId {
    type Error = EmptyCourseIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for CourseId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = EmptyCourseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Error returned when a course identifier is empty after trimming.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("course number is empty after trimming")]
pub struct EmptyCourseIdError;
