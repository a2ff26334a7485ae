//! Roster entries
//!
//! A student has an id, a mutable name and an ordered list of subject grades.
//! The averaging policy is picked once at construction through
//! [`StudentKind`]; honors students share the regular mean and add a bonus.

pub mod types;

#[cfg(test)]
mod tests;

use std::fmt::Write as _;

use crate::grade::GradeRecord;

pub use types::{StudentKind, DEFAULT_HONORS_BONUS, MAX_AVERAGE};

/// A single roster entry
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: String,
    name: String,
    grades: Vec<GradeRecord>,
    kind: StudentKind,
}

impl Student {
    /// Create a regular student with no grades
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, StudentKind::Regular)
    }

    /// Create an honors student with the default bonus
    pub fn honors(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, StudentKind::honors())
    }

    /// Create an honors student with an explicit bonus
    pub fn honors_with_bonus(
        id: impl Into<String>,
        name: impl Into<String>,
        bonus_points: f64,
    ) -> Self {
        Self::with_kind(id, name, StudentKind::Honors { bonus_points })
    }

    pub fn with_kind(id: impl Into<String>, name: impl Into<String>, kind: StudentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grades: Vec::new(),
            kind,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> StudentKind {
        self.kind
    }

    pub fn is_honors(&self) -> bool {
        self.kind.is_honors()
    }

    /// Read-only view of the grades in insertion order
    pub fn grades(&self) -> &[GradeRecord] {
        &self.grades
    }

    /// Grade for a subject, matched case-insensitively
    pub fn grade_for(&self, subject: &str) -> Option<f64> {
        self.grades
            .iter()
            .find(|g| g.is_subject(subject))
            .map(GradeRecord::grade)
    }

    /// Add a subject grade, or overwrite it in place if the subject exists
    pub fn add_or_update_grade(&mut self, subject: &str, grade: f64) {
        match self.grades.iter_mut().find(|g| g.is_subject(subject)) {
            Some(existing) => existing.set_grade(grade),
            None => self.grades.push(GradeRecord::new(subject, grade)),
        }
    }

    /// Arithmetic mean of all grades, ignoring any bonus
    pub fn base_average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.grades.iter().map(GradeRecord::grade).sum();
        sum / self.grades.len() as f64
    }

    /// Average under this student's policy
    pub fn compute_average(&self) -> f64 {
        let base = self.base_average();
        match self.kind {
            StudentKind::Regular => base,
            // A zero mean means nothing to report yet, so no bonus either
            StudentKind::Honors { .. } if base == 0.0 => 0.0,
            StudentKind::Honors { bonus_points } => (base + bonus_points).min(MAX_AVERAGE),
        }
    }

    /// One-line summary: `<id> - <name> (Average: <avg>)`
    pub fn render_summary(&self) -> String {
        format!(
            "{} - {} (Average: {:.2})",
            self.id,
            self.name,
            self.compute_average()
        )
    }

    /// Multi-line detail block
    pub fn render_details(&self) -> String {
        let mut out = String::new();
        if self.is_honors() {
            out.push_str("[Honors Student]\n");
        }
        let _ = writeln!(out, "Student ID: {}", self.id);
        let _ = writeln!(out, "Name      : {}", self.name);
        out.push_str("Subjects:\n");
        if self.grades.is_empty() {
            out.push_str("  No subjects added yet.\n");
        } else {
            for grade in &self.grades {
                let _ = writeln!(out, "  {}", grade);
            }
        }
        let _ = writeln!(out, "Average grade: {:.2}", self.compute_average());
        out
    }
}
