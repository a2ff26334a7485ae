use super::*;

fn with_grades(mut student: Student, grades: &[(&str, f64)]) -> Student {
    for (subject, grade) in grades {
        student.add_or_update_grade(subject, *grade);
    }
    student
}

#[test]
fn test_new_student_has_no_grades() {
    let student = Student::new("S1", "Alice");
    assert_eq!(student.id(), "S1");
    assert_eq!(student.name(), "Alice");
    assert!(student.grades().is_empty());
    assert!(!student.is_honors());
}

#[test]
fn test_update_same_subject_any_case_keeps_position() {
    let student = with_grades(
        Student::new("S1", "Alice"),
        &[("Math", 70.0), ("Sci", 80.0), ("MATH", 90.0), ("math", 95.0)],
    );

    let subjects: Vec<_> = student.grades().iter().map(|g| g.subject()).collect();
    assert_eq!(subjects, vec!["Math", "Sci"]);
    assert_eq!(student.grades()[0].grade(), 95.0);
    assert_eq!(student.grade_for("mAtH"), Some(95.0));
}

#[test]
fn test_average_is_zero_without_grades() {
    assert_eq!(Student::new("S1", "A").compute_average(), 0.0);
    assert_eq!(Student::honors("S2", "B").compute_average(), 0.0);
    assert_eq!(
        Student::honors_with_bonus("S3", "C", 12.0).compute_average(),
        0.0
    );
}

#[test]
fn test_regular_average_is_mean() {
    let student = with_grades(Student::new("S1", "A"), &[("Math", 80.0), ("Sci", 85.0)]);
    assert_eq!(student.compute_average(), 82.5);
}

#[test]
fn test_honors_adds_default_bonus() {
    let student = with_grades(Student::honors("S1", "A"), &[("Math", 80.0), ("Sci", 90.0)]);
    assert_eq!(student.base_average(), 85.0);
    assert_eq!(student.compute_average(), 90.0);
}

#[test]
fn test_honors_average_clamped_to_hundred() {
    let student = with_grades(Student::honors("S1", "A"), &[("Math", 98.0)]);
    assert_eq!(student.compute_average(), 100.0);
}

#[test]
fn test_honors_zero_grades_get_no_bonus() {
    let student = with_grades(Student::honors("S1", "A"), &[("Math", 0.0), ("Sci", 0.0)]);
    assert_eq!(student.compute_average(), 0.0);
}

#[test]
fn test_honors_custom_bonus() {
    let student = with_grades(
        Student::honors_with_bonus("S1", "A", 2.5),
        &[("Math", 70.0)],
    );
    assert_eq!(student.compute_average(), 72.5);
    assert_eq!(
        student.kind(),
        StudentKind::Honors { bonus_points: 2.5 }
    );
}

#[test]
fn test_render_summary() {
    let student = with_grades(
        Student::new("S1", "Alice"),
        &[("Math", 90.0), ("Sci", 85.0), ("Art", 80.0)],
    );
    assert_eq!(student.render_summary(), "S1 - Alice (Average: 85.00)");
}

#[test]
fn test_render_details_without_subjects() {
    let student = Student::new("S1", "Alice");
    assert_eq!(
        student.render_details(),
        "Student ID: S1\nName      : Alice\nSubjects:\n  No subjects added yet.\nAverage grade: 0.00\n"
    );
}

#[test]
fn test_render_details_honors_marker_and_bonus() {
    let student = with_grades(Student::honors("H1", "Bea"), &[("Math", 90.0)]);
    let details = student.render_details();
    assert!(details.starts_with("[Honors Student]\nStudent ID: H1\n"));
    assert!(details.contains("  Math: 90.0\n"));
    assert!(details.ends_with("Average grade: 95.00\n"));
}

#[test]
fn test_set_name() {
    let mut student = Student::new("S1", "Alice");
    student.set_name("Alicia");
    assert_eq!(student.name(), "Alicia");
}
