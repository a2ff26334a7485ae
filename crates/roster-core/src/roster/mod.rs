//! The roster service
//!
//! Owns every [`Student`] and is the only way to add, remove or reach them.
//! Ids are unique ignoring case and listing follows insertion order.

pub mod report;


use std::path::Path;

use tracing::debug;

use crate::codec::{self, LoadReport};
use crate::error::{Result, RosterError};
use crate::student::{Student, StudentKind, DEFAULT_HONORS_BONUS};
use crate::text::eq_ignore_case;
use crate::bail_invalid;

pub use report::{StudentAverage, SubjectExtremes, SubjectScore};

/// Lowest grade accepted through [`Roster::record_grade`]
pub const MIN_GRADE: f64 = 0.0;
/// Highest grade accepted through [`Roster::record_grade`]
pub const MAX_GRADE: f64 = 100.0;

/// The collection of students managed by one process
#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
    honors_bonus: f64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Empty roster; honors students get the default bonus
    pub fn new() -> Self {
        Self::with_honors_bonus(DEFAULT_HONORS_BONUS)
    }

    /// Empty roster whose honors students get `honors_bonus`
    pub fn with_honors_bonus(honors_bonus: f64) -> Self {
        Self {
            students: Vec::new(),
            honors_bonus,
        }
    }

    pub fn honors_bonus(&self) -> f64 {
        self.honors_bonus
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| eq_ignore_case(s.id(), id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Add a new student, rejecting an id that is already taken
    pub fn add_student(&mut self, id: &str, name: &str, is_honors: bool) -> Result<()> {
        let kind = if is_honors {
            StudentKind::Honors {
                bonus_points: self.honors_bonus,
            }
        } else {
            StudentKind::Regular
        };
        self.insert(Student::with_kind(id, name, kind))
    }

    /// Append an already built student, rejecting a taken id
    pub fn insert(&mut self, student: Student) -> Result<()> {
        if self.contains(student.id()) {
            return Err(RosterError::already_exists("student", student.id()));
        }
        debug!(id = student.id(), kind = %student.kind(), "add_student");
        self.students.push(student);
        Ok(())
    }

    /// Remove a student, returning it if it was present
    pub fn remove_student(&mut self, id: &str) -> Option<Student> {
        let index = self.position(id)?;
        debug!(id, "remove_student");
        Some(self.students.remove(index))
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.position(id).map(|i| &self.students[i])
    }

    pub fn find_student_mut(&mut self, id: &str) -> Option<&mut Student> {
        let index = self.position(id)?;
        Some(&mut self.students[index])
    }

    pub fn rename_student(&mut self, id: &str, name: &str) -> Result<()> {
        let student = self
            .find_student_mut(id)
            .ok_or_else(|| RosterError::student_not_found(id))?;
        debug!(id, name, "rename_student");
        student.set_name(name);
        Ok(())
    }

    /// Add or update a grade for a student, checking the 0-100 range
    pub fn record_grade(&mut self, id: &str, subject: &str, grade: f64) -> Result<()> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            bail_invalid!("grade (expected 0-100)", grade);
        }
        let student = self
            .find_student_mut(id)
            .ok_or_else(|| RosterError::student_not_found(id))?;
        debug!(id, subject, grade, "record_grade");
        student.add_or_update_grade(subject, grade);
        Ok(())
    }

    /// Drop every student
    pub fn clear(&mut self) {
        self.students.clear();
    }

    /// Averages in insertion order
    pub fn averages(&self) -> Vec<StudentAverage> {
        self.students.iter().map(StudentAverage::from).collect()
    }

    /// Averages from highest to lowest; equal averages keep insertion order
    pub fn sorted_by_average(&self) -> Vec<StudentAverage> {
        let mut ranked = self.averages();
        ranked.sort_by(|a, b| b.average.total_cmp(&a.average));
        ranked
    }

    /// Highest and lowest grade for a subject, or `None` if nobody has it
    pub fn subject_extremes(&self, subject: &str) -> Option<SubjectExtremes> {
        SubjectExtremes::scan(subject, &self.students)
    }

    /// Write every student to `path`, returning how many were written
    pub fn save_to_file(&self, path: &Path) -> Result<usize> {
        codec::save(self, path)
    }

    /// Replace the roster with the contents of `path`.
    ///
    /// The roster is emptied before the file is opened, so a failed load
    /// leaves it empty (or holding whatever was read before the failure).
    pub fn load_from_file(&mut self, path: &Path) -> Result<LoadReport> {
        codec::load(self, path)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
