//! Field validation rules applied when reading stored documents

use std::borrow::Cow;

use validator::ValidationError;

use crate::constants::{MAX_SELF_GRADED_SCORE, MIN_SELF_GRADED_SCORE, NANOS_PER_SECOND};

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Validate a self-graded score (0-100)
pub fn validate_score(score: f64) -> Result<(), ValidationError> {
    if !score.is_finite() {
        return Err(rule("score", "Score must be a finite number"));
    }
    if !(MIN_SELF_GRADED_SCORE..=MAX_SELF_GRADED_SCORE).contains(&score) {
        return Err(rule("score", "Score must be between 0 and 100"));
    }
    Ok(())
}

/// Validate a test case execution time in milliseconds
pub fn validate_execution_time(ms: f64) -> Result<(), ValidationError> {
    if !ms.is_finite() || ms < 0.0 {
        return Err(rule(
            "execution_time",
            "Execution time must be a non-negative number of milliseconds",
        ));
    }
    Ok(())
}

/// Validate the sub-second part of a stored timestamp
pub fn validate_nanoseconds(nanoseconds: i32) -> Result<(), ValidationError> {
    if !(0..NANOS_PER_SECOND).contains(&nanoseconds) {
        return Err(rule(
            "nanoseconds",
            "Nanoseconds must be between 0 and 999999999",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_score() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(87.5).is_ok());
        assert!(validate_score(100.0).is_ok());
        assert!(validate_score(-1.0).is_err());
        assert!(validate_score(100.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_execution_time() {
        assert!(validate_execution_time(0.0).is_ok());
        assert!(validate_execution_time(12.3).is_ok());
        assert!(validate_execution_time(-0.5).is_err());
        assert!(validate_execution_time(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_nanoseconds() {
        assert!(validate_nanoseconds(0).is_ok());
        assert!(validate_nanoseconds(999_999_999).is_ok());
        assert!(validate_nanoseconds(1_000_000_000).is_err());
        assert!(validate_nanoseconds(-1).is_err());
    }
}
