//! Error types for scalar and vector operations.

use thiserror::Error;

/// Errors that can occur in the numeric primitives.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// A coordinate vector was built from an empty sequence.
    #[error("coordinates must be nonempty")]
    EmptyCoordinates,

    /// Two operands live in different dimensions.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        expected: usize,
        /// Dimension of the right operand.
        found: usize,
    },

    /// The zero vector has no direction.
    #[error("cannot normalize the zero vector")]
    ZeroVector,

    /// The operation has no meaning for the given operands.
    #[error("undefined operation: {0}")]
    UndefinedOperation(&'static str),

    /// A scalar literal could not be parsed.
    #[error("invalid scalar literal: {0:?}")]
    InvalidLiteral(String),
}

/// A specialized `Result` type for numeric operations.
pub type Result<T> = std::result::Result<T, NumericError>;

impl NumericError {
    /// Builds a [`NumericError::DimensionMismatch`].
    #[must_use]
    pub fn mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    /// Returns `true` if this error was caused by the zero vector.
    #[must_use]
    pub fn is_zero_vector(&self) -> bool {
        matches!(self, Self::ZeroVector)
    }
}
