//! The scalar trait shared by every vector and row type.
//!
//! The numeric type is chosen once, as a type parameter, when a vector or
//! equation is built. There is no ambient precision setting: [`Decimal`]
//! is exact, `f64` is binary floating point, and near-zero tests always
//! take an explicit [`Tolerance`](crate::Tolerance).

use std::fmt::{Debug, Display};
use std::ops::{Div, Neg, Sub};

use num_traits::{One, Zero};

use crate::decimal::Decimal;
use crate::error::{NumericError, Result};

/// A field element usable as a coordinate.
///
/// # Laws
///
/// - `+`, `-`, `*`, `/` form a field (exactly for [`Decimal`], up to
///   rounding for `f64`)
/// - `inv` returns `None` only for zero
/// - `to_f64` may round; for [`Decimal`], `sqrt` truncates past
///   [`Decimal::SQRT_DIGITS`] digits and nothing else rounds
pub trait Scalar:
    Clone
    + Debug
    + Display
    + PartialOrd
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
{
    /// The default near-zero threshold, `1e-10`.
    fn default_epsilon() -> Self;

    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Square root of a non-negative value. Never passes through `f64`
    /// for [`Decimal`], so tiny and huge values keep their magnitude.
    fn sqrt(&self) -> Self;

    /// Nearest `f64`.
    fn to_f64(&self) -> f64;

    /// Converts a finite `f64`.
    fn from_f64(value: f64) -> Option<Self>;

    /// Converts an integer.
    fn from_i64(value: i64) -> Self;

    /// Rounds to `places` fractional digits, halves away from zero.
    #[must_use]
    fn round_dp(&self, places: u32) -> Self;

    /// Parses a literal such as `"-0.412"`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidLiteral`] if the text is not a number.
    fn parse_literal(text: &str) -> Result<Self>;

    /// Returns true if `|self| < epsilon`.
    fn is_near_zero(&self, epsilon: &Self) -> bool {
        self.abs() < *epsilon
    }
}

impl Scalar for Decimal {
    fn default_epsilon() -> Self {
        Decimal::new(1, 10_000_000_000)
    }

    fn abs(&self) -> Self {
        Decimal::abs(self)
    }

    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }

    fn sqrt(&self) -> Self {
        Decimal::sqrt(self)
    }

    fn to_f64(&self) -> f64 {
        Decimal::to_f64(self)
    }

    fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value)
    }

    fn from_i64(value: i64) -> Self {
        Decimal::from_integer(value)
    }

    fn round_dp(&self, places: u32) -> Self {
        Decimal::round_dp(self, places)
    }

    fn parse_literal(text: &str) -> Result<Self> {
        text.parse()
    }
}

impl Scalar for f64 {
    fn default_epsilon() -> Self {
        1e-10
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn inv(&self) -> Option<Self> {
        if *self == 0.0 {
            None
        } else {
            Some(self.recip())
        }
    }

    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(value: i64) -> Self {
        value as f64
    }

    fn round_dp(&self, places: u32) -> Self {
        let factor = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
        (self * factor).round() / factor
    }

    fn parse_literal(text: &str) -> Result<Self> {
        text.trim()
            .parse()
            .map_err(|_| NumericError::InvalidLiteral(text.to_string()))
    }
}
