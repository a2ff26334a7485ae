//! Report shapes produced by the roster
//!
//! These are plain serializable snapshots; rendering lives in
//! [`crate::format`].

use serde::Serialize;

use crate::student::Student;

/// A student's computed average at the time of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverage {
    pub id: String,
    pub name: String,
    pub average: f64,
    pub honors: bool,
}

impl From<&Student> for StudentAverage {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name().to_string(),
            average: student.compute_average(),
            honors: student.is_honors(),
        }
    }
}

/// One side of a subject extreme: who holds it and with which grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectScore {
    pub id: String,
    pub name: String,
    pub grade: f64,
}

impl SubjectScore {
    fn new(student: &Student, grade: f64) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name().to_string(),
            grade,
        }
    }
}

/// Highest and lowest grade recorded for one subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectExtremes {
    pub subject: String,
    pub highest: SubjectScore,
    pub lowest: SubjectScore,
}

impl SubjectExtremes {
    /// Scan students in order for grades in `subject`.
    ///
    /// Only a strictly greater (or strictly lower) grade replaces the current
    /// holder, so the first student seen with the extreme value keeps it.
    pub(crate) fn scan<'a>(
        subject: &str,
        students: impl IntoIterator<Item = &'a Student>,
    ) -> Option<Self> {
        let mut highest: Option<SubjectScore> = None;
        let mut lowest: Option<SubjectScore> = None;

        for student in students {
            for record in student.grades().iter().filter(|g| g.is_subject(subject)) {
                let grade = record.grade();
                if highest.as_ref().is_none_or(|h| grade > h.grade) {
                    highest = Some(SubjectScore::new(student, grade));
                }
                if lowest.as_ref().is_none_or(|l| grade < l.grade) {
                    lowest = Some(SubjectScore::new(student, grade));
                }
            }
        }

        Some(Self {
            subject: subject.to_string(),
            highest: highest?,
            lowest: lowest?,
        })
    }
}
