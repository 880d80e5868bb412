//! Error types for calculator operations
//!
//! Both error kinds are local, synchronous, and deterministic: the same
//! inputs always produce the same outcome, and a failed calculation never
//! changes calculator state. There is no retry logic here - the caller
//! decides whether to correct the inputs, substitute a default, or
//! propagate the failure.

use thiserror::Error;

use crate::operation::Operation;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for calculator operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The requested operation name is not in the registry.
    ///
    /// **Recovery:** Use one of the registered names (see
    /// [`Operation::ALL`]). Names are exact: `"Add"` and `" add "` are
    /// both unknown. Not retryable with the same input.
    #[error("Unknown operation: {name}")]
    UnknownOperation {
        /// The name that failed to resolve
        name: String,
    },

    /// `divide` or `modulo` was requested with a zero second operand.
    ///
    /// **Recovery:** Supply a non-zero divisor. Not retryable with the
    /// same input.
    #[error("Cannot {operation} by zero")]
    DivisionByZero {
        /// The operation that rejected the zero divisor
        operation: Operation,
    },
}

impl Error {
    /// Create an unknown-operation error
    pub fn unknown_operation<S: Into<String>>(name: S) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Create a division-by-zero error
    #[must_use]
    pub fn division_by_zero(operation: Operation) -> Self {
        Self::DivisionByZero { operation }
    }
}


#[cfg(test)]
mod tests_display {
    use super::*;

    #[test]
    fn test_unknown_operation_display() {
        let err = Error::unknown_operation("sqrt");
        assert_eq!(err.to_string(), "Unknown operation: sqrt");
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = Error::division_by_zero(Operation::Divide);
        assert_eq!(err.to_string(), "Cannot divide by zero");

        let err = Error::division_by_zero(Operation::Modulo);
        assert_eq!(err.to_string(), "Cannot modulo by zero");
    }
}
