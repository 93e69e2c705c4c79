//! Input validation for cover scheduling.
//!
//! Checks structural integrity of the subject universe and teacher pool
//! before scheduling. Detects:
//! - Duplicate teacher identifiers (emails)
//! - Malformed email addresses
//! - Empty subject names in the universe or in capability sets
//!
//! Feasibility (whether the pool can actually cover the universe) is not
//! a structural concern and is handled by [`crate::cover::missing_subjects`].

use crate::models::Teacher;
use std::collections::{BTreeSet, HashSet};

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
    /// Two teachers share the same email.
    DuplicateId,
    /// An email address is empty or missing an '@'.
    InvalidEmail,
    /// A subject name is the empty string.
    EmptySubjectName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling input.
///
/// Checks:
/// 1. No duplicate teacher emails
/// 2. Every teacher has a well-formed email (non-empty, contains '@')
/// 3. No empty subject names in the universe
/// 4. No empty subject names in any capability set
///
/// A teacher with an empty capability set is valid input; such a teacher
/// simply never wins a selection round.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_pool(universe: &BTreeSet<String>, teachers: &[Teacher]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut emails = HashSet::new();
    for teacher in teachers {
        if teacher.email.is_empty() || !teacher.email.contains('@') {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEmail,
                format!("Teacher '{}' has invalid email", teacher.full_name()),
            ));
        } else if !emails.insert(teacher.email.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher email: {}", teacher.email),
            ));
        }

        if teacher.subjects.iter().any(|s| s.is_empty()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySubjectName,
                format!(
                    "Teacher '{}' has an empty subject in its capability set",
                    teacher.full_name()
                ),
            ));
        }
    }

    if universe.iter().any(|s| s.is_empty()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySubjectName,
            "Universe contains an empty subject name",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
