//! Catalog validation.
//!
//! Checks structural integrity of a set of faculty and course records before
//! the engine trusts them (typically records loaded from a durable store).
//! Detects:
//! - Duplicate faculty or course IDs
//! - Assignments referencing unknown courses
//! - A course assigned twice to the same faculty member
//!
//! Per-record invariants (positive units, ordered ranges, non-overlapping
//! meetings) are enforced when records are built or deserialized.

use crate::models::{Course, Faculty};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same ID.
    DuplicateId,
    /// A faculty member is assigned a course that doesn't exist.
    InvalidCourseReference,
    /// A faculty member lists the same course twice.
    DuplicateAssignment,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a faculty/course catalog.
///
/// Checks:
/// 1. No duplicate faculty IDs
/// 2. No duplicate course IDs
/// 3. Every assigned course ID exists
/// 4. No course is assigned twice to one faculty member
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(faculty: &[Faculty], courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    let mut faculty_ids = HashSet::new();
    for f in faculty {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }

        let mut assigned = HashSet::new();
        for course_id in f.course_ids() {
            if !assigned.insert(course_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateAssignment,
                    format!("Faculty '{}' lists course '{}' twice", f.id, course_id),
                ));
            }
            if !course_ids.contains(course_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidCourseReference,
                    format!(
                        "Faculty '{}' references unknown course '{}'",
                        f.id, course_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
