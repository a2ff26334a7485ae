//! Roster file format
//!
//! One student per line:
//!
//! ```text
//! <id>|<name>|<subject>:<grade>,<subject>:<grade>,...
//! ```
//!
//! There is no escaping for `|`, `,` or `:` inside values, and the honors
//! flag is not stored: every loaded student is a regular student.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Result, RosterError};
use crate::grade::number_text;
use crate::roster::Roster;
use crate::student::Student;
use crate::text::split_fields;
use crate::trace_time;

const FIELD_SEPARATOR: char = '|';
const GRADE_SEPARATOR: char = ',';
const SUBJECT_SEPARATOR: char = ':';

/// Outcome of loading a roster file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// Students added to the roster
    pub loaded: usize,
    /// Lines dropped for having fewer than two fields or a repeated id
    pub skipped_lines: usize,
    /// `subject:grade` tokens whose grade was not a finite number
    pub skipped_grades: Vec<String>,
}

/// A parsed line, before it becomes a roster entry
#[derive(Debug)]
pub struct DecodedLine {
    pub student: Student,
    pub skipped_grades: Vec<String>,
}

/// Encode one student as a roster file line (without newline)
pub fn encode_line(student: &Student) -> String {
    let grades: Vec<String> = student
        .grades()
        .iter()
        .map(|g| format!("{}{}{}", g.subject(), SUBJECT_SEPARATOR, number_text(g.grade())))
        .collect();
    format!(
        "{}{sep}{}{sep}{}",
        student.id(),
        student.name(),
        grades.join(GRADE_SEPARATOR.to_string().as_str()),
        sep = FIELD_SEPARATOR
    )
}

/// Decode one roster file line.
///
/// Returns `None` when the line has fewer than two fields. Grade tokens
/// that are not exactly `subject:grade` are ignored; tokens whose grade does
/// not parse to a finite number are collected in `skipped_grades`.
pub fn decode_line(line: &str) -> Option<DecodedLine> {
    let fields = split_fields(line, FIELD_SEPARATOR);
    if fields.len() < 2 {
        return None;
    }

    let mut student = Student::new(fields[0], fields[1]);
    let mut skipped_grades = Vec::new();

    if let Some(blob) = fields.get(2).filter(|b| !b.is_empty()) {
        for token in split_fields(blob, GRADE_SEPARATOR) {
            let parts = split_fields(token, SUBJECT_SEPARATOR);
            let [subject, grade_text] = parts.as_slice() else {
                continue;
            };
            match grade_text.trim().parse::<f64>() {
                Ok(grade) if grade.is_finite() => student.add_or_update_grade(subject, grade),
                _ => skipped_grades.push(token.to_string()),
            }
        }
    }

    Some(DecodedLine {
        student,
        skipped_grades,
    })
}

/// Write every student in `roster` to `writer`
pub fn write_roster<W: Write>(roster: &Roster, mut writer: W) -> std::io::Result<usize> {
    for student in roster {
        writeln!(writer, "{}", encode_line(student))?;
    }
    writer.flush()?;
    Ok(roster.len())
}

/// Replace the contents of `roster` with the students read from `reader`.
///
/// Existing students are dropped first. Students are inserted as they are
/// read, so an IO error partway through leaves only the earlier lines.
pub fn read_roster<R: BufRead>(roster: &mut Roster, mut reader: R) -> std::io::Result<LoadReport> {
    roster.clear();
    let mut report = LoadReport::default();

    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        // Undecodable bytes become U+FFFD; only real IO errors stop the load
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        let Some(decoded) = decode_line(line) else {
            warn!(line = line_no, "Skipping line with fewer than two fields");
            report.skipped_lines += 1;
            continue;
        };

        for token in &decoded.skipped_grades {
            warn!(line = line_no, token = %token, "Skipping invalid grade");
        }
        report.skipped_grades.extend(decoded.skipped_grades);

        if let Err(e) = roster.insert(decoded.student) {
            warn!(line = line_no, error = %e, "Skipping duplicate student");
            report.skipped_lines += 1;
            continue;
        }
        report.loaded += 1;
    }

    Ok(report)
}

/// Save `roster` to `path`, overwriting it
#[tracing::instrument(skip(roster, path), fields(path = %path.display()))]
pub fn save(roster: &Roster, path: &Path) -> Result<usize> {
    let start = Instant::now();

    let file = File::create(path)
        .map_err(|e| RosterError::io_operation("create", path.display(), e))?;
    let saved = write_roster(roster, BufWriter::new(file))
        .map_err(|e| RosterError::io_operation("write", path.display(), e))?;

    trace_time!(start, "save_roster", count = saved);
    info!(count = saved, "Saved students");
    Ok(saved)
}

/// Replace the contents of `roster` with the students in `path`.
///
/// The roster is cleared first, even if the file cannot be opened.
#[tracing::instrument(skip(roster, path), fields(path = %path.display()))]
pub fn load(roster: &mut Roster, path: &Path) -> Result<LoadReport> {
    let start = Instant::now();
    roster.clear();

    let file =
        File::open(path).map_err(|e| RosterError::io_operation("open", path.display(), e))?;
    let report = read_roster(roster, BufReader::new(file))
        .map_err(|e| RosterError::io_operation("read", path.display(), e))?;

    trace_time!(start, "load_roster", count = report.loaded);
    info!(
        loaded = report.loaded,
        skipped_lines = report.skipped_lines,
        skipped_grades = report.skipped_grades.len(),
        "Loaded students"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    /// Reader that fails every call, for chaining after real content
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device went away"))
        }
    }

    fn read(text: &str) -> (Roster, LoadReport) {
        let mut roster = Roster::new();
        let report = read_roster(&mut roster, Cursor::new(text)).unwrap();
        (roster, report)
    }

    #[test]
    fn test_encode_line_with_grades() {
        let mut student = Student::new("S1", "Alice");
        student.add_or_update_grade("Math", 90.0);
        student.add_or_update_grade("Sci", 87.5);
        assert_eq!(encode_line(&student), "S1|Alice|Math:90.0,Sci:87.5");
    }

    #[test]
    fn test_encode_line_without_grades_has_trailing_separator() {
        assert_eq!(encode_line(&Student::new("S1", "Alice")), "S1|Alice|");
    }

    #[test]
    fn test_decode_skips_unparseable_grade() {
        let (roster, report) = read("S1|Alice|Math:abc,Sci:80\n");
        let student = roster.find_student("S1").unwrap();
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.grades().len(), 1);
        assert_eq!(student.grade_for("Sci"), Some(80.0));
        assert_eq!(report.skipped_grades, vec!["Math:abc".to_string()]);
        assert_eq!(report.loaded, 1);
    }

    #[test]
    fn test_decode_skips_single_field_line() {
        let (roster, report) = read("S1\nS2|Bob|\n");
        assert!(roster.find_student("S1").is_none());
        assert!(roster.find_student("S2").is_some());
        assert_eq!(report.skipped_lines, 1);
        assert_eq!(report.loaded, 1);
    }

    #[test]
    fn test_decode_ignores_malformed_tokens_silently() {
        let (roster, report) = read("S1|Alice|Math,Sci:80:90,Art:70,:\n");
        let student = roster.find_student("S1").unwrap();
        assert_eq!(student.grades().len(), 1);
        assert_eq!(student.grade_for("Art"), Some(70.0));
        assert!(report.skipped_grades.is_empty());
    }

    #[test]
    fn test_decode_two_fields_and_empty_blob() {
        let (roster, _) = read("S1|Alice\nS2|Bob|\n");
        assert!(roster.find_student("S1").unwrap().grades().is_empty());
        assert!(roster.find_student("S2").unwrap().grades().is_empty());
    }

    #[test]
    fn test_decode_repeated_subject_updates_in_place() {
        let (roster, _) = read("S1|Alice|Math:50,Sci:60,math:70\n");
        let student = roster.find_student("S1").unwrap();
        assert_eq!(student.grades().len(), 2);
        assert_eq!(student.grades()[0].grade(), 70.0);
    }

    #[test]
    fn test_read_skips_duplicate_ids() {
        let (roster, report) = read("S1|Alice|\ns1|Other|\n");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find_student("S1").unwrap().name(), "Alice");
        assert_eq!(report.skipped_lines, 1);
    }

    #[test]
    fn test_loaded_students_are_regular() {
        let (roster, _) = read("H1|Bea|Math:90.0\n");
        let student = roster.find_student("H1").unwrap();
        assert!(!student.is_honors());
        assert_eq!(student.compute_average(), 90.0);
    }

    #[test]
    fn test_write_roster_order_and_count() {
        let mut roster = Roster::new();
        roster.add_student("S2", "Bob", false).unwrap();
        roster.add_student("S1", "Alice", false).unwrap();
        roster.record_grade("S1", "Math", 100.0).unwrap();

        let mut out = Vec::new();
        let count = write_roster(&roster, &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "S2|Bob|\nS1|Alice|Math:100.0\n"
        );
    }

    #[test]
    fn test_read_failure_partway_keeps_earlier_lines_only() {
        let mut roster = Roster::new();
        roster.add_student("OLD", "Stale", true).unwrap();

        let content = Cursor::new("S1|Alice|Math:90\nS2|Bob|\n").chain(BrokenReader);
        let err = read_roster(&mut roster, io::BufReader::new(content)).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "device went away");
        let ids: Vec<_> = roster.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["S1", "S2"]);
        assert!(roster.find_student("OLD").is_none());
    }

    #[test]
    fn test_read_replaces_existing_students() {
        let mut roster = Roster::new();
        roster.add_student("OLD", "Stale", false).unwrap();

        let report = read_roster(&mut roster, Cursor::new("S1|Alice|\n")).unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(roster.len(), 1);
        assert!(roster.find_student("OLD").is_none());
    }

    #[test]
    fn test_invalid_utf8_line_is_decoded_lossily() {
        let mut roster = Roster::new();
        let bytes: &[u8] = b"S1|Alice|Math:90\nS2|B\xe9a|Math:80\nS3|Cara|Math:70\n";
        let report = read_roster(&mut roster, Cursor::new(bytes)).unwrap();

        assert_eq!(report.loaded, 3);
        assert_eq!(roster.find_student("S2").unwrap().name(), "B\u{FFFD}a");
        assert_eq!(roster.find_student("S3").unwrap().grade_for("Math"), Some(70.0));
    }

    #[test]
    fn test_decode_rejects_non_finite_grades() {
        let (roster, report) = read("S1|Alice|Math:inf,Sci:NaN,Art:-infinity,Gym:75\n");
        let student = roster.find_student("S1").unwrap();
        assert_eq!(student.grades().len(), 1);
        assert_eq!(student.grade_for("Gym"), Some(75.0));
        assert_eq!(
            report.skipped_grades,
            vec!["Math:inf", "Sci:NaN", "Art:-infinity"]
        );
    }
}
