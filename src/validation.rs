//! Input lints for sequencing problems.
//!
//! Job construction already rejects blank names and non-finite profits,
//! so nothing here stops a schedule from being computed. These checks
//! flag inputs whose results are easy to misread:
//! - Duplicate job names (discard lists by name become ambiguous)
//! - Test cases without jobs

use std::collections::HashSet;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share a name.
    DuplicateName,
    /// The case has no jobs at all.
    EmptyCase,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks a named job list.
///
/// Each duplicated name is reported once.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(findings)` otherwise.
pub fn validate_case(case_name: &str, jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCase,
            format!("Case '{case_name}' has no jobs"),
        ));
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for job in jobs {
        if !seen.insert(job.name()) && reported.insert(job.name()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Case '{case_name}' has more than one job named '{}'", job.name()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str) -> Job {
        Job::new(name, 1, 1.0).unwrap()
    }

    #[test]
    fn test_valid_case() {
        assert!(validate_case("ok", &[job("A"), job("B")]).is_ok());
    }

    #[test]
    fn test_empty_case() {
        let errors = validate_case("nothing", &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyCase);
        assert!(errors[0].message.contains("nothing"));
    }

    #[test]
    fn test_duplicate_name_reported_once() {
        let errors = validate_case("dups", &[job("A"), job("A"), job("B"), job("A")]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateName);
        assert!(errors[0].message.contains("'A'"));
    }

    #[test]
    fn test_multiple_duplicates() {
        let errors =
            validate_case("dups", &[job("A"), job("B"), job("A"), job("B")]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::DuplicateName));
    }
}
