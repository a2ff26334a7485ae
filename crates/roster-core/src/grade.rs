//! Subject grades
//!
//! A grade record pairs a subject name with a numeric grade. Subject names
//! compare case-insensitively; the grade is not range checked here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::eq_ignore_case;

/// A single subject and the grade earned in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    subject: String,
    grade: f64,
}

impl GradeRecord {
    pub fn new(subject: impl Into<String>, grade: f64) -> Self {
        Self {
            subject: subject.into(),
            grade,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    /// Overwrite the grade in place
    pub fn set_grade(&mut self, grade: f64) {
        self.grade = grade;
    }

    /// Case-insensitive subject match
    pub fn is_subject(&self, subject: &str) -> bool {
        eq_ignore_case(&self.subject, subject)
    }
}

impl fmt::Display for GradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, number_text(self.grade))
    }
}

/// Render a grade in its natural numeric text form.
///
/// Whole values keep one fractional digit (`90.0`), everything else uses the
/// shortest representation that parses back to the same value (`87.5`).
/// Magnitudes from `1e7` up, or nonzero ones below `1e-3`, switch to
/// scientific form with the same one-digit rule (`1.0E7`, `2.5E-4`).
/// This is also the form written to roster files.
pub fn number_text(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs();
    if magnitude >= 1e7 || (magnitude != 0.0 && magnitude < 1e-3) {
        let text = format!("{:e}", value);
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        if mantissa.contains('.') {
            format!("{}E{}", mantissa, exponent)
        } else {
            format!("{}.0E{}", mantissa, exponent)
        }
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_natural_form() {
        assert_eq!(GradeRecord::new("Math", 90.0).to_string(), "Math: 90.0");
        assert_eq!(GradeRecord::new("Sci", 87.5).to_string(), "Sci: 87.5");
        assert_eq!(GradeRecord::new("Art", 66.66).to_string(), "Art: 66.66");
    }

    #[test]
    fn test_set_grade_overwrites() {
        let mut record = GradeRecord::new("Math", 40.0);
        record.set_grade(75.5);
        assert_eq!(record.grade(), 75.5);
        assert_eq!(record.subject(), "Math");
    }

    #[test]
    fn test_no_validation_on_construction() {
        let record = GradeRecord::new("Math", 150.0);
        assert_eq!(record.grade(), 150.0);
        let record = GradeRecord::new("Math", -3.0);
        assert_eq!(number_text(record.grade()), "-3.0");
    }

    #[test]
    fn test_subject_match_ignores_case() {
        let record = GradeRecord::new("Math", 1.0);
        assert!(record.is_subject("math"));
        assert!(record.is_subject("MATH"));
        assert!(!record.is_subject("Mathematics"));
    }

    #[test]
    fn test_number_text_round_trips() {
        for value in [0.0, 100.0, 33.333333333333336, 0.1, 99.99, 1e7, 2.5e-4] {
            let text = number_text(value);
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn test_number_text_extreme_magnitudes_use_exponent() {
        assert_eq!(number_text(1e7), "1.0E7");
        assert_eq!(number_text(-12345678.0), "-1.2345678E7");
        assert_eq!(number_text(1e-5), "1.0E-5");
        assert_eq!(number_text(2.5e-4), "2.5E-4");
        assert_eq!(number_text(9999999.0), "9999999.0");
        assert_eq!(number_text(0.001), "0.001");
    }
}
