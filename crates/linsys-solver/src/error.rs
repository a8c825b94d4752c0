//! Error types for hyperplane and linear system operations.

use linsys_numeric::NumericError;
use thiserror::Error;

/// Errors that can occur while building or solving a linear system.
///
/// An inconsistent system is not an error: it is reported as
/// [`Solution::NoSolution`](crate::Solution::NoSolution).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A linear system needs at least one equation.
    #[error("a linear system needs at least one equation")]
    EmptySystem,

    /// Rows, vectors or points live in different dimensions.
    #[error("all equations in the system should live in the same dimension: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension required by the system or left operand.
        expected: usize,
        /// Dimension actually supplied.
        found: usize,
    },

    /// The operation is only defined for some dimensions.
    #[error("{operation} is not defined in dimension {dimension}")]
    UnsupportedDimension {
        /// Name of the operation.
        operation: &'static str,
        /// Dimension of the operands.
        dimension: usize,
    },

    /// Failure in the underlying vector arithmetic.
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Builds a [`SolverError::DimensionMismatch`].
    #[must_use]
    pub fn mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    /// Returns `true` if this is a dimension error, from either layer.
    #[must_use]
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::Numeric(NumericError::DimensionMismatch { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SolverError::mismatch(3, 2).to_string(),
            "all equations in the system should live in the same dimension: expected 3, found 2"
        );
        let err = SolverError::UnsupportedDimension {
            operation: "line intersection",
            dimension: 3,
        };
        assert_eq!(err.to_string(), "line intersection is not defined in dimension 3");
    }

    #[test]
    fn test_numeric_errors_convert() {
        let err: SolverError = NumericError::ZeroVector.into();
        assert_eq!(err.to_string(), "cannot normalize the zero vector");
        let err: SolverError = NumericError::mismatch(2, 3).into();
        assert!(err.is_dimension_error());
        assert!(!SolverError::EmptySystem.is_dimension_error());
    }
}
