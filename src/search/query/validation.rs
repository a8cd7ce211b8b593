//! Input checks shared by the query executor and the tool layer

use crate::search::errors::{DocsError, DocsResult};

/// Reject queries that are empty once surrounding whitespace is removed
pub fn validate_query(query: &str) -> DocsResult<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(DocsError::invalid(
            "Query cannot be empty or whitespace only",
        ));
    }
    Ok(trimmed)
}

/// Result limits must be positive
pub fn validate_limit(limit: i64) -> DocsResult<usize> {
    if limit <= 0 {
        return Err(DocsError::invalid(format!(
            "Result limit must be a positive integer, got {limit}"
        )));
    }
    usize::try_from(limit)
        .map_err(|_| DocsError::invalid(format!("Result limit {limit} is too large")))
}

/// Convert an untyped numeric limit (JSON numbers arrive as `f64`)
pub fn limit_from_f64(limit: f64) -> DocsResult<i64> {
    if !limit.is_finite() || limit.fract() != 0.0 {
        return Err(DocsError::invalid(format!(
            "Result limit must be a positive integer, got {limit}"
        )));
    }
    if limit < i64::MIN as f64 || limit > i64::MAX as f64 {
        return Err(DocsError::invalid(format!("Result limit {limit} is out of range")));
    }
    Ok(limit as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_and_non_finite_limits_are_rejected() {
        assert!(limit_from_f64(2.5).is_err());
        assert!(limit_from_f64(f64::NAN).is_err());
        assert!(limit_from_f64(f64::INFINITY).is_err());
        assert_eq!(limit_from_f64(5.0).unwrap(), 5);
        assert_eq!(limit_from_f64(-1.0).unwrap(), -1);
    }

    #[test]
    fn limit_must_be_positive() {
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(-3).is_err());
        assert_eq!(validate_limit(7).unwrap(), 7);
    }
}
