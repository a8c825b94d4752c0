//! Exact decimal scalars.
//!
//! A [`Decimal`] is an arbitrary precision rational number. Decimal
//! literals such as `"-0.412"` are stored exactly, and every field
//! operation (`+`, `-`, `*`, `/`) is exact, so elimination never
//! accumulates rounding error.

use dashu::base::{Abs, BitTest, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::NumericError;

/// An exact rational number, read and written in decimal notation.
///
/// Values are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Decimal(RBig);

impl Decimal {
    /// Largest decimal exponent accepted by the parser, in either
    /// direction. `1e10000` parses; `1e10001` is rejected.
    pub const MAX_EXPONENT: u32 = 10_000;

    /// Scale, in decimal digits, of [`Decimal::sqrt`].
    pub const SQRT_DIGITS: usize = 40;

    /// Creates a decimal from an `i64` numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let mut num = IBig::from(numerator);
        if denominator < 0 {
            num = -num;
        }
        Self(RBig::from_parts(num, UBig::from(denominator.unsigned_abs())))
    }

    /// Creates a decimal from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns true if this value is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the value is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Rounds to `places` digits after the decimal point, halves away
    /// from zero.
    #[must_use]
    pub fn round_dp(&self, places: u32) -> Self {
        let factor = IBig::from(10u8).pow(places as usize);
        let scaled = self.0.numerator() * &factor;
        let den = IBig::from(self.0.denominator().clone());

        // IBig division truncates toward zero.
        let mut quotient = &scaled / &den;
        let remainder = &scaled - &quotient * &den;
        if (remainder * IBig::from(2u8)).abs() >= den {
            if scaled < IBig::ZERO {
                quotient -= IBig::ONE;
            } else {
                quotient += IBig::ONE;
            }
        }

        Self(RBig::from_parts(quotient, factor.unsigned_abs()))
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Converts a finite `f64` to the decimal its shortest representation
    /// denotes, so `0.1` becomes exactly `1/10`.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            value.to_string().parse().ok()
        } else {
            None
        }
    }

    /// Square root to at least [`Decimal::SQRT_DIGITS`] significant
    /// digits, rounded toward zero. Exact for squares of terminating
    /// decimals. Negative values give zero.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        if self.0.is_zero() || self.is_negative() {
            return Self::zero();
        }
        // sqrt(n/d) = sqrt(n·d·s²) / (d·s)
        let den = self.0.denominator().clone();
        let scale = UBig::from(10u8).pow(Self::SQRT_DIGITS);
        let radicand = self.0.numerator().clone().unsigned_abs() * &den * &scale * &scale;
        let root = integer_sqrt(&radicand);
        Self(RBig::from_parts(IBig::from(root), den * scale))
    }

    /// Number of fractional digits needed to write this value exactly,
    /// or `None` if its decimal expansion does not terminate.
    fn terminating_places(&self) -> Option<usize> {
        let two = IBig::from(2u8);
        let five = IBig::from(5u8);
        let mut rest = IBig::from(self.0.denominator().clone());
        let (mut twos, mut fives) = (0usize, 0usize);

        while (&rest % &two) == IBig::ZERO {
            rest = &rest / &two;
            twos += 1;
        }
        while (&rest % &five) == IBig::ZERO {
            rest = &rest / &five;
            fives += 1;
        }

        (rest == IBig::ONE).then_some(twos.max(fives))
    }
}

/// Floor of the square root by Newton's iteration from above.
fn integer_sqrt(n: &UBig) -> UBig {
    if n.is_zero() {
        return UBig::ZERO;
    }
    let mut x = UBig::ONE << n.bit_len().div_ceil(2);
    loop {
        let y = (&x + n / &x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Parses an unsigned run of ASCII digits; the empty string is zero.
fn parse_digits(digits: &str, literal: &str) -> Result<IBig, NumericError> {
    if digits.is_empty() {
        return Ok(IBig::ZERO);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidLiteral(literal.to_string()));
    }
    IBig::from_str_radix(digits, 10).map_err(|_| NumericError::InvalidLiteral(literal.to_string()))
}

/// Parses `[+-]int[.frac][e[+-]exp]` exactly.
fn parse_positional(s: &str, literal: &str) -> Result<Decimal, NumericError> {
    let invalid = || NumericError::InvalidLiteral(literal.to_string());

    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => {
            let exp: i32 = body[pos + 1..].parse().map_err(|_| invalid())?;
            if exp.unsigned_abs() > Decimal::MAX_EXPONENT {
                return Err(invalid());
            }
            (&body[..pos], exp)
        }
        None => (body, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }

    let int_value = parse_digits(int_part, literal)?;
    let frac_value = parse_digits(frac_part, literal)?;
    let frac_scale = IBig::from(10u8).pow(frac_part.len());
    let mut numerator = int_value * &frac_scale + frac_value;
    let mut denominator = frac_scale;

    let shift = IBig::from(10u8).pow(exponent.unsigned_abs() as usize);
    if exponent >= 0 {
        numerator *= shift;
    } else {
        denominator *= shift;
    }
    if negative {
        numerator = -numerator;
    }

    Ok(Decimal(RBig::from_parts(numerator, denominator.unsigned_abs())))
}

impl FromStr for Decimal {
    type Err = NumericError;

    /// Accepts `"12"`, `"-0.412"`, `".5"`, `"1e-10"` and `"3/4"`.
    ///
    /// Exponents beyond [`Decimal::MAX_EXPONENT`] are rejected as
    /// [`NumericError::InvalidLiteral`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        match literal.split_once('/') {
            Some((num, den)) => {
                let num = parse_positional(num.trim(), literal)?;
                let den = parse_positional(den.trim(), literal)?;
                if den.is_zero() {
                    return Err(NumericError::InvalidLiteral(literal.to_string()));
                }
                Ok(num / den)
            }
            None => parse_positional(literal, literal),
        }
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.0.numerator());
        }
        let Some(places) = self.terminating_places() else {
            return write!(f, "{}/{}", self.0.numerator(), self.0.denominator());
        };

        let den = IBig::from(self.0.denominator().clone());
        let scaled = self.0.numerator() * IBig::from(10u8).pow(places) / den;
        let sign = if scaled < IBig::ZERO { "-" } else { "" };
        let magnitude = scaled.unsigned_abs().to_string();
        let digits = format!("{magnitude:0>width$}", width = places + 1);
        let (int_digits, frac_digits) = digits.split_at(digits.len() - places);
        write!(f, "{sign}{int_digits}.{frac_digits}")
    }
}

// Arithmetic operations
impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Decimal> for Decimal {
    type Output = Self;

    fn add(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Decimal> for Decimal {
    type Output = Self;

    fn sub(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Decimal> for Decimal {
    type Output = Self;

    fn mul(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Div for Decimal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Decimal> for Decimal {
    type Output = Self;

    fn div(self, rhs: &Decimal) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Decimal(-&self.0)
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Decimal {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
