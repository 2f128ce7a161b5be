//! Engine error types.
//!
//! The engine surfaces exactly two failure kinds: malformed generator
//! input, and a ranking call that violates the candidate-set contract.
//! Both indicate caller bugs; neither is retried internally, and no
//! partial result is ever returned alongside an error.

/// Errors from the candidate generator and ranking engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Generator arguments are out of contract (distance or base time
    /// not strictly positive and finite).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The candidate set handed to the ranking engine violates the
    /// "non-empty, one per supported mode" contract.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::InvalidInput("distance_km must be positive, got -1".into());
        assert_eq!(
            err.to_string(),
            "invalid input: distance_km must be positive, got -1"
        );

        let err = EngineError::InvariantViolation("candidate set is empty");
        assert_eq!(err.to_string(), "invariant violation: candidate set is empty");
    }
}
