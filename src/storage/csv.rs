//! Line-level parsing of the course file format.
//!
//! One line describes one course: `NUMBER,TITLE[,PREREQ]*`, comma-delimited
//! with no quoting or escaping (fields containing commas are unsupported by
//! the format), with optional whitespace around each field.

use non_empty_string::NonEmptyString;
use thiserror::Error;

use crate::domain::{Course, CourseId};

/// UTF-8 byte-order mark, which some editors prepend to a file.
const BOM: char = '\u{feff}';

/// Reasons a line fails to parse into a course.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line is empty after trimming. Blank lines are legal anywhere in
    /// the file; the loader skips them without reporting.
    #[error("blank line")]
    BlankLine,

    /// The line is missing a course number or title, or either is empty
    /// after trimming.
    #[error("invalid course number or title")]
    InvalidHeader,
}

/// Parses one line of a course file.
///
/// `is_first_data_line` must be true only for the first non-blank line of
/// the file: a byte-order mark can only ever appear at the very start of a
/// file, so it is stripped from the first field there and treated as
/// ordinary text everywhere else.
///
/// Fields are trimmed individually. Fields beyond the number and title are
/// prerequisite course numbers; any that are empty after trimming are
/// silently dropped. The returned course is tagged with `line_number`.
///
/// # Errors
///
/// Returns [`ParseError::BlankLine`] for a line that trims to nothing, and
/// [`ParseError::InvalidHeader`] when the course number or title is missing
/// or empty.
pub fn parse_line(
    line: &str,
    line_number: usize,
    is_first_data_line: bool,
) -> Result<Course, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::BlankLine);
    }

    let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if fields.len() < 2 {
        return Err(ParseError::InvalidHeader);
    }

    let mut number = fields[0];
    if is_first_data_line {
        number = number.strip_prefix(BOM).unwrap_or(number);
    }

    let id = CourseId::new(number).map_err(|_| ParseError::InvalidHeader)?;
    let title = NonEmptyString::new(fields[1].to_string())
        .map_err(|_| ParseError::InvalidHeader)?;

    let prerequisites = fields[2..]
        .iter()
        .filter_map(|field| CourseId::new(field).ok())
        .collect();

    Ok(Course::new(id, title, prerequisites, line_number))
}

#[cfg(test)]
mod tests {
    use super::{ParseError, parse_line};

    #[test]
    fn parses_number_title_and_prerequisites() {
        let course = parse_line("CSCI300, Data Structures, CSCI200, MATH201", 4, false).unwrap();

        assert_eq!(course.id().as_str(), "CSCI300");
        assert_eq!(course.title(), "Data Structures");
        let prereqs: Vec<&str> = course.prerequisites().iter().map(|p| p.as_str()).collect();
        assert_eq!(prereqs, ["CSCI200", "MATH201"]);
        assert_eq!(course.source_line(), 4);
    }

    #[test]
    fn blank_lines_are_distinguished() {
        assert_eq!(parse_line("", 1, true), Err(ParseError::BlankLine));
        assert_eq!(parse_line(" \t\r", 2, false), Err(ParseError::BlankLine));
    }

    #[test]
    fn missing_title_is_invalid() {
        assert_eq!(parse_line("CSCI101", 1, false), Err(ParseError::InvalidHeader));
        assert_eq!(parse_line("CSCI101,   ", 1, false), Err(ParseError::InvalidHeader));
        assert_eq!(parse_line(",Orphan Title", 1, false), Err(ParseError::InvalidHeader));
    }

    #[test]
    fn number_is_normalized_and_title_kept_verbatim() {
        let course = parse_line(" csci101 ,  Intro to CS ", 1, false).unwrap();
        assert_eq!(course.id().as_str(), "CSCI101");
        assert_eq!(course.title(), "Intro to CS");
    }

    #[test]
    fn bom_is_stripped_on_the_first_data_line_only() {
        let first = parse_line("\u{feff}CSCI100,Intro", 1, true).unwrap();
        assert_eq!(first.id().as_str(), "CSCI100");

        let later = parse_line("\u{feff}CSCI100,Intro", 5, false).unwrap();
        assert_eq!(later.id().as_str(), "\u{feff}CSCI100");
    }

    #[test]
    fn empty_prerequisite_fields_are_dropped() {
        let course = parse_line("CSCI300,Data Structures,CSCI200,, ,MATH201", 1, false).unwrap();
        let prereqs: Vec<&str> = course.prerequisites().iter().map(|p| p.as_str()).collect();
        assert_eq!(prereqs, ["CSCI200", "MATH201"]);
    }

    #[test]
    fn duplicate_and_self_prerequisites_are_kept() {
        let course = parse_line("CSCI300,Seminar,CSCI300,CSCI200,CSCI200", 1, false).unwrap();
        let prereqs: Vec<&str> = course.prerequisites().iter().map(|p| p.as_str()).collect();
        assert_eq!(prereqs, ["CSCI300", "CSCI200", "CSCI200"]);
    }

    #[test]
    fn prerequisites_are_normalized() {
        let course = parse_line("CSCI300,Data Structures, csci200 ", 1, false).unwrap();
        assert_eq!(course.prerequisites()[0].as_str(), "CSCI200");
    }
}
