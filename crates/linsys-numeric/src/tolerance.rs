//! Near-zero threshold configuration.

use crate::decimal::Decimal;
use crate::scalar::Scalar;

/// Threshold below which a value is treated as zero.
///
/// Carried explicitly by every row and system instead of living in a
/// global context.
#[derive(Clone, Debug, PartialEq)]
pub struct Tolerance<S = Decimal> {
    /// Values with `|x| < epsilon` count as zero.
    epsilon: S,
}

impl<S: Scalar> Tolerance<S> {
    /// Creates a tolerance with the given threshold.
    #[must_use]
    pub fn new(epsilon: S) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    /// Returns the threshold.
    #[must_use]
    pub fn epsilon(&self) -> &S {
        &self.epsilon
    }

    /// Returns true if `|value| < epsilon`.
    #[must_use]
    pub fn is_near_zero(&self, value: &S) -> bool {
        value.is_near_zero(&self.epsilon)
    }

    /// Returns true if `|value| <= epsilon * |scale|`.
    ///
    /// Used where the quantity under test grows with the magnitude of the
    /// operands, e.g. the Cauchy–Schwarz gap of two vectors.
    #[must_use]
    pub fn is_negligible(&self, value: &S, scale: &S) -> bool {
        value.abs() <= self.epsilon.clone() * scale.abs()
    }
}

impl<S: Scalar> Default for Tolerance<S> {
    fn default() -> Self {
        Self {
            epsilon: S::default_epsilon(),
        }
    }
}
