use non_empty_string::NonEmptyString;

use crate::domain::CourseId;

/// One course in the catalog.
///
/// A course has a unique normalized number, a display title, and an ordered
/// list of prerequisite course numbers. Prerequisites are stored exactly as
/// parsed: duplicates and self-references are kept, and a prerequisite is
/// not required to resolve at construction time — forward references across
/// an input file are legal until the post-load integrity pass runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Normalized course number, the unique key.
    id: CourseId,
    /// Display title. Non-empty by construction.
    title: NonEmptyString,
    /// Prerequisite course numbers in input order.
    prerequisites: Vec<CourseId>,
    /// 1-based input line the record was parsed from, kept for
    /// line-specific diagnostics.
    source_line: usize,
}

impl Course {
    /// Constructs a course record tagged with the input line it came from.
    #[must_use]
    pub const fn new(
        id: CourseId,
        title: NonEmptyString,
        prerequisites: Vec<CourseId>,
        source_line: usize,
    ) -> Self {
        Self {
            id,
            title,
            prerequisites,
            source_line,
        }
    }

    /// The normalized course number.
    #[must_use]
    pub const fn id(&self) -> &CourseId {
        &self.id
    }

    /// The course title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Prerequisite course numbers, in input order.
    ///
    /// Not sorted, not deduplicated.
    #[must_use]
    pub fn prerequisites(&self) -> &[CourseId] {
        &self.prerequisites
    }

    /// The 1-based input line this record was parsed from.
    #[must_use]
    pub const fn source_line(&self) -> usize {
        self.source_line
    }
}
