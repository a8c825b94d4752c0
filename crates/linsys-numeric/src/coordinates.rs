//! Fixed-length coordinate vectors.
//!
//! A [`Coordinates`] value is immutable once built: every operation returns
//! a new vector. Lines and planes only need two or three entries, so the
//! storage is inline up to four coordinates.

use std::fmt;
use std::ops::{Add, Index, Neg, Sub};

use smallvec::SmallVec;

use crate::decimal::Decimal;
use crate::error::{NumericError, Result};
use crate::scalar::Scalar;
use crate::tolerance::Tolerance;

/// Unit in which [`Coordinates::angle_with`] reports its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Radians, in `[0, π]`.
    #[default]
    Radians,
    /// Degrees, in `[0, 180]`.
    Degrees,
}

/// An ordered, fixed-length tuple of scalars.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinates<S = Decimal> {
    values: SmallVec<[S; 4]>,
}

impl<S: Scalar> Coordinates<S> {
    /// Creates a vector from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::EmptyCoordinates`] if `values` is empty.
    pub fn new(values: Vec<S>) -> Result<Self> {
        if values.is_empty() {
            return Err(NumericError::EmptyCoordinates);
        }
        Ok(Self {
            values: SmallVec::from_vec(values),
        })
    }

    /// Parses every coordinate from a decimal literal.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is empty or a literal is invalid.
    pub fn parse(literals: &[&str]) -> Result<Self> {
        let values = literals
            .iter()
            .map(|text| S::parse_literal(text))
            .collect::<Result<Vec<_>>>()?;
        Self::new(values)
    }

    /// Creates a vector from integer coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::EmptyCoordinates`] if `values` is empty.
    pub fn from_integers(values: &[i64]) -> Result<Self> {
        Self::new(values.iter().map(|&v| S::from_i64(v)).collect())
    }

    /// Creates the zero vector of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    #[must_use]
    pub fn zeros(dimension: usize) -> Self {
        assert!(dimension > 0, "coordinates must have at least one component");
        Self {
            values: (0..dimension).map(|_| S::zero()).collect(),
        }
    }

    /// Creates the vector with a one at `index` and zeros elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `index >= dimension`.
    #[must_use]
    pub fn unit(dimension: usize, index: usize) -> Self {
        assert!(index < dimension, "unit index {index} out of range for dimension {dimension}");
        Self {
            values: (0..dimension)
                .map(|k| if k == index { S::one() } else { S::zero() })
                .collect(),
        }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Returns the coordinate at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.values.get(index)
    }

    /// Iterates over the coordinates.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.values.iter()
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[S] {
        &self.values
    }

    /// Consumes the vector and returns its coordinates.
    #[must_use]
    pub fn into_vec(self) -> Vec<S> {
        self.values.into_vec()
    }

    fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(NumericError::mismatch(self.dimension(), other.dimension()))
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&S, &S) -> S) -> Self {
        Self {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }

    /// Coordinate-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(self.zip_with(other, |a, b| a.clone() + b.clone()))
    }

    /// Coordinate-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(self.zip_with(other, |a, b| a.clone() - b.clone()))
    }

    /// Multiplies every coordinate by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &S) -> Self {
        Self {
            values: self.values.iter().map(|v| v.clone() * factor.clone()).collect(),
        }
    }

    /// Inner product.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<S> {
        self.check_dimension(other)?;
        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .fold(S::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    fn norm_squared(&self) -> S {
        self.values
            .iter()
            .fold(S::zero(), |acc, v| acc + v.clone() * v.clone())
    }

    /// Euclidean length.
    ///
    /// This is the one operation that rounds for exact scalars, and only
    /// in the digits past [`Decimal::SQRT_DIGITS`].
    #[must_use]
    pub fn magnitude(&self) -> S {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::ZeroVector`] for the zero vector.
    pub fn normalized(&self) -> Result<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared.is_zero() {
            return Err(NumericError::ZeroVector);
        }
        let inverse = norm_squared.sqrt().inv().ok_or(NumericError::ZeroVector)?;
        Ok(self.scale(&inverse))
    }

    /// Index of the first coordinate that is not near zero, or `None` if
    /// every coordinate is.
    #[must_use]
    pub fn first_nonzero_index(&self, tolerance: &Tolerance<S>) -> Option<usize> {
        self.values.iter().position(|v| !tolerance.is_near_zero(v))
    }

    /// Returns true if every coordinate is near zero.
    #[must_use]
    pub fn is_zero(&self, tolerance: &Tolerance<S>) -> bool {
        self.first_nonzero_index(tolerance).is_none()
    }

    /// Angle between two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::UndefinedOperation`] if either vector is
    /// zero, or a dimension mismatch.
    pub fn angle_with(&self, other: &Self, unit: AngleUnit) -> Result<f64> {
        self.check_dimension(other)?;
        let undefined = |_| NumericError::UndefinedOperation("angle with the zero vector");
        let u = self.normalized().map_err(undefined)?;
        let v = other.normalized().map_err(undefined)?;

        let cosine = u.dot(&v)?.to_f64().clamp(-1.0, 1.0);
        let radians = cosine.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Returns true if one vector is a scalar multiple of the other.
    ///
    /// The zero vector is parallel to every vector. Otherwise this tests
    /// for an angle of 0 or π through the Cauchy–Schwarz equality
    /// `(u·v)² = |u|²|v|²`, which stays exact for [`Decimal`].
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DimensionMismatch`] if the dimensions differ.
    pub fn is_parallel_to(&self, other: &Self, tolerance: &Tolerance<S>) -> Result<bool> {
        self.check_dimension(other)?;
        if self.is_zero(tolerance) || other.is_zero(tolerance) {
            return Ok(true);
        }
        let uv = self.dot(other)?;
        let bound = self.norm_squared() * other.norm_squared();
        let gap = uv.clone() * uv - bound.clone();
        Ok(tolerance.is_negligible(&gap, &bound))
    }

    /// Returns true if the inner product is near zero.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DimensionMismatch`] if the dimensions differ.
    pub fn is_orthogonal_to(&self, other: &Self, tolerance: &Tolerance<S>) -> Result<bool> {
        Ok(tolerance.is_near_zero(&self.dot(other)?))
    }

    /// Component of `self` parallel to `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::ZeroVector`] if `basis` is zero, or a
    /// dimension mismatch.
    pub fn projection_onto(&self, basis: &Self) -> Result<Self> {
        self.check_dimension(basis)?;
        let denominator = basis.norm_squared();
        let inverse = denominator.inv().ok_or(NumericError::ZeroVector)?;
        let weight = self.dot(basis)? * inverse;
        Ok(basis.scale(&weight))
    }

    /// Component of `self` orthogonal to `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::ZeroVector`] if `basis` is zero, or a
    /// dimension mismatch.
    pub fn orthogonal_component(&self, basis: &Self) -> Result<Self> {
        let projection = self.projection_onto(basis)?;
        self.checked_sub(&projection)
    }

    /// Cross product of two 3D vectors; 2D vectors are embedded with
    /// `z = 0`, giving a result along the z axis.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::UndefinedOperation`] outside two and three
    /// dimensions, or a dimension mismatch.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        let (a, b) = match self.dimension() {
            3 => (self.clone(), other.clone()),
            2 => (self.embed_in_3d(), other.embed_in_3d()),
            _ => {
                return Err(NumericError::UndefinedOperation(
                    "cross product is defined in two and three dimensions",
                ))
            }
        };
        let (a, b) = (a.as_slice(), b.as_slice());
        let term = |i: usize, j: usize| a[i].clone() * b[j].clone() - a[j].clone() * b[i].clone();
        Ok(Self {
            values: SmallVec::from_vec(vec![term(1, 2), term(2, 0), term(0, 1)]),
        })
    }

    fn embed_in_3d(&self) -> Self {
        let mut values = self.values.clone();
        values.push(S::zero());
        Self { values }
    }

    /// Area of the parallelogram spanned by two vectors.
    ///
    /// # Errors
    ///
    /// Same as [`Coordinates::cross`].
    pub fn parallelogram_area(&self, other: &Self) -> Result<S> {
        Ok(self.cross(other)?.magnitude())
    }

    /// Area of the triangle spanned by two vectors.
    ///
    /// # Errors
    ///
    /// Same as [`Coordinates::cross`].
    pub fn triangle_area(&self, other: &Self) -> Result<S> {
        let two = S::one() + S::one();
        Ok(self.parallelogram_area(other)? / two)
    }
}

impl<S> Index<usize> for Coordinates<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

/// # Panics
///
/// Collecting an empty iterator panics; use [`Coordinates::new`] for
/// input that may be empty.
impl<S: Scalar> FromIterator<S> for Coordinates<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let values: SmallVec<[S; 4]> = iter.into_iter().collect();
        assert!(!values.is_empty(), "coordinates must have at least one component");
        Self { values }
    }
}

impl<'a, S> IntoIterator for &'a Coordinates<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<S: Scalar> Add for &Coordinates<S> {
    type Output = Coordinates<S>;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add(self, other: Self) -> Coordinates<S> {
        assert_eq!(self.dimension(), other.dimension());
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }
}

impl<S: Scalar> Sub for &Coordinates<S> {
    type Output = Coordinates<S>;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn sub(self, other: Self) -> Coordinates<S> {
        assert_eq!(self.dimension(), other.dimension());
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }
}

impl<S: Scalar> Neg for &Coordinates<S> {
    type Output = Coordinates<S>;

    fn neg(self) -> Coordinates<S> {
        self.values.iter().map(|v| -v.clone()).collect()
    }
}

impl<S: fmt::Display> fmt::Display for Coordinates<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, value) in self.values.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
