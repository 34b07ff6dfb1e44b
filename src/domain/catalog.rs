//! Hash-table storage for course records.
//!
//! The [`Catalog`] stores courses in a fixed number of buckets with separate
//! chaining: each bucket owns the records whose hashed key falls on its
//! index, and insert/lookup walk a single bucket's chain comparing
//! normalized keys exactly. The bucket count is fixed at construction and
//! never grows; catalog sizes are small and bounded in practice, so there
//! is no rehashing.

use std::{fmt, num::NonZeroUsize};

use crate::domain::{Course, CourseId};

/// Default number of buckets. Prime, to reduce clustering.
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = NonZeroUsize::new(179).unwrap();

/// An in-memory course catalog keyed by normalized course number.
///
/// The catalog holds exactly one record per course number: inserting a
/// duplicate key replaces the whole record, so the most recent write wins.
#[derive(Debug, Clone)]
pub struct Catalog {
    buckets: Vec<Vec<Course>>,
    len: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog with the default bucket count.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty catalog with a specific bucket count.
    #[must_use]
    pub fn with_bucket_count(bucket_count: NonZeroUsize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count.get()],
            len: 0,
        }
    }

    /// Inserts a course, replacing any existing record with the same number.
    ///
    /// Overwrite is intentional: one record per course number, and during a
    /// load the last occurrence in the input wins.
    pub fn insert(&mut self, course: Course) {
        let index = self.bucket_index(course.id());
        let chain = &mut self.buckets[index];

        if let Some(existing) = chain.iter_mut().find(|c| c.id() == course.id()) {
            *existing = course;
        } else {
            chain.push(course);
            self.len += 1;
        }
    }

    /// Looks up a course by its normalized number.
    ///
    /// The search is confined to one bucket's chain, so the average cost is
    /// O(1) in the number of stored courses and degrades only to the chain
    /// length within that bucket.
    #[must_use]
    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.buckets[self.bucket_index(id)]
            .iter()
            .find(|course| course.id() == id)
    }

    /// Iterates every stored course in bucket/chain order.
    ///
    /// The order is an artifact of hashing and is unspecified; use
    /// [`Catalog::sorted`] for presentation.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.buckets.iter().flatten()
    }

    /// Returns every stored course, sorted ascending by course number.
    ///
    /// Course numbers compare byte-wise, so the listing order is stable
    /// and total: each record appears exactly once.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses().collect();
        courses.sort_by(|a, b| a.id().cmp(b.id()));
        courses
    }

    /// Number of stored courses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no courses are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all courses, restoring the just-constructed state.
    ///
    /// The bucket count is kept.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// Scans every stored course for prerequisites that do not resolve.
    ///
    /// Each unresolved reference yields one [`Violation`], so a duplicated
    /// missing prerequisite is reported once per occurrence. This must run
    /// only after a full load: prerequisites may reference courses that
    /// appear later in the same input, and a mid-load check would falsely
    /// flag those forward references.
    #[must_use]
    pub fn unresolved_prerequisites(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        for course in self.courses() {
            for prerequisite in course.prerequisites() {
                if self.get(prerequisite).is_none() {
                    violations.push(Violation {
                        source_line: course.source_line(),
                        course: course.id().clone(),
                        missing: prerequisite.clone(),
                    });
                }
            }
        }

        violations
    }

    fn bucket_index(&self, id: &CourseId) -> usize {
        hash_key(id.as_str()) as usize % self.buckets.len()
    }
}

/// Polynomial rolling hash (multiplier 31) over the key's raw bytes.
///
/// Wrapping `u32` arithmetic is intentional: overflow wraps rather than
/// widening, which keeps the bucket distribution reproducible across
/// platforms.
fn hash_key(key: &str) -> u32 {
    key.bytes()
        .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(u32::from(byte)))
}

/// A prerequisite reference that does not resolve to a stored course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// 1-based input line of the course holding the dangling reference.
    pub source_line: usize,
    /// Number of the course holding the dangling reference.
    pub course: CourseId,
    /// The prerequisite number that failed to resolve.
    pub missing: CourseId,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error line {}: {} missing prerequisite {}",
            self.source_line, self.course, self.missing
        )
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use non_empty_string::NonEmptyString;

    use super::{Catalog, hash_key};
    use crate::domain::{Course, CourseId};

    fn course(id: &str, title: &str, prerequisites: &[&str], source_line: usize) -> Course {
        Course::new(
            CourseId::new(id).unwrap(),
            NonEmptyString::new(title.to_string()).unwrap(),
            prerequisites
                .iter()
                .map(|p| CourseId::new(p).unwrap())
                .collect(),
            source_line,
        )
    }

    #[test]
    fn insert_then_lookup_round_trip() {
        let mut catalog = Catalog::new();
        let record = course("CSCI101", "Intro to CS", &["CSCI100"], 1);
        catalog.insert(record.clone());

        assert_eq!(catalog.get(&CourseId::new("csci101").unwrap()), Some(&record));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_insert_overwrites() {
        let mut catalog = Catalog::new();
        catalog.insert(course("CSCI101", "Old Title", &[], 1));
        catalog.insert(course("CSCI101", "New Title", &["MATH100"], 7));

        assert_eq!(catalog.len(), 1);
        let stored = catalog.get(&CourseId::new("CSCI101").unwrap()).unwrap();
        assert_eq!(stored.title(), "New Title");
        assert_eq!(stored.source_line(), 7);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut catalog = Catalog::new();
        catalog.insert(course("CSCI101", "Intro to CS", &[], 1));
        catalog.insert(course("MATH201", "Discrete Math", &[], 2));

        catalog.clear();

        assert!(catalog.is_empty());
        assert_eq!(catalog.courses().count(), 0);
        assert!(catalog.get(&CourseId::new("CSCI101").unwrap()).is_none());
    }

    #[test]
    fn lookup_misses_are_explicit() {
        let catalog = Catalog::new();
        assert!(catalog.get(&CourseId::new("CSCI999").unwrap()).is_none());
    }

    #[test]
    fn chains_survive_collisions() {
        // One bucket forces every record onto the same chain.
        let mut catalog = Catalog::with_bucket_count(NonZeroUsize::MIN);
        catalog.insert(course("CSCI100", "A", &[], 1));
        catalog.insert(course("CSCI101", "B", &[], 2));
        catalog.insert(course("MATH201", "C", &[], 3));

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get(&CourseId::new("CSCI101").unwrap()).unwrap().title(),
            "B"
        );
    }

    #[test]
    fn sorted_is_total_and_non_decreasing() {
        let mut catalog = Catalog::new();
        catalog.insert(course("MATH201", "Discrete Math", &[], 1));
        catalog.insert(course("CSCI100", "Intro to Programming", &[], 2));
        catalog.insert(course("CSCI300", "Data Structures", &[], 3));

        let sorted = catalog.sorted();
        let ids: Vec<&str> = sorted.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, ["CSCI100", "CSCI300", "MATH201"]);
    }

    #[test]
    fn unresolved_prerequisites_are_reported_per_occurrence() {
        let mut catalog = Catalog::new();
        catalog.insert(course("CSCI101", "Intro", &["MATH999", "MATH999"], 1));

        let violations = catalog.unresolved_prerequisites();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].source_line, 1);
        assert_eq!(violations[0].course.as_str(), "CSCI101");
        assert_eq!(violations[0].missing.as_str(), "MATH999");
        assert_eq!(
            violations[0].to_string(),
            "Error line 1: CSCI101 missing prerequisite MATH999"
        );
    }

    #[test]
    fn resolved_and_self_references_are_not_flagged() {
        let mut catalog = Catalog::new();
        catalog.insert(course("CSCI100", "Intro", &[], 1));
        // Self-references resolve through the store like any other key.
        catalog.insert(course("CSCI200", "Seminar", &["CSCI100", "CSCI200"], 2));

        assert!(catalog.unresolved_prerequisites().is_empty());
    }

    #[test]
    fn hash_wraps_on_long_keys() {
        // Polynomial hashing overflows u32 quickly; wrapping keeps it total.
        let long_key = "X".repeat(1024);
        assert_ne!(hash_key(&long_key), hash_key("X"));
    }
}
