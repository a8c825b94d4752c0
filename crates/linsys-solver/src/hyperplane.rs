//! Hyperplanes in normal-vector / constant-term form.
//!
//! A [`Hyperplane`] is the equation `normal · x = constant`: a line in two
//! dimensions, a plane in three. It is the row type of a
//! [`LinearSystem`](crate::LinearSystem).

use std::ops::Add;

use linsys_numeric::{Coordinates, Decimal, NumericError, Scalar, Tolerance};

use crate::error::{Result, SolverError};

/// A linear equation `normal · x = constant`.
///
/// The basepoint is derived from the normal and the constant and cannot
/// be set independently. `PartialEq` compares the stored representation
/// exactly; use [`Hyperplane::approx_eq`] to ask whether two rows
/// describe the same set of points.
#[derive(Clone, Debug, PartialEq)]
pub struct Hyperplane<S = Decimal> {
    normal: Coordinates<S>,
    constant: S,
    basepoint: Option<Coordinates<S>>,
    tolerance: Tolerance<S>,
}

/// How two lines in the plane meet.
#[derive(Clone, Debug, PartialEq)]
pub enum LineIntersection<S = Decimal> {
    /// The lines cross at exactly one point.
    Point(Coordinates<S>),
    /// The lines are the same line.
    Coincident,
    /// The lines are parallel and distinct.
    Disjoint,
}

impl<S: Scalar> Hyperplane<S> {
    /// Creates the equation `normal · x = constant` with the default
    /// tolerance.
    #[must_use]
    pub fn new(normal: Coordinates<S>, constant: S) -> Self {
        Self::with_tolerance(normal, constant, Tolerance::default())
    }

    /// Creates the equation `normal · x = constant` with an explicit
    /// tolerance.
    #[must_use]
    pub fn with_tolerance(normal: Coordinates<S>, constant: S, tolerance: Tolerance<S>) -> Self {
        let basepoint = derive_basepoint(&normal, &constant, &tolerance);
        Self {
            normal,
            constant,
            basepoint,
            tolerance,
        }
    }

    /// Creates the degenerate equation `0 = 0` in `dimension` variables.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    #[must_use]
    pub fn zero(dimension: usize) -> Self {
        Self::new(Coordinates::zeros(dimension), S::zero())
    }

    /// Creates an equation from optional parts: the normal defaults to the
    /// zero vector of `dimension` and the constant to zero.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::EmptyCoordinates`] (wrapped) if `dimension`
    /// is zero, or [`SolverError::DimensionMismatch`] if `normal` does not
    /// have `dimension` coordinates.
    pub fn from_parts(
        dimension: usize,
        normal: Option<Coordinates<S>>,
        constant: Option<S>,
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(NumericError::EmptyCoordinates.into());
        }
        let normal = normal.unwrap_or_else(|| Coordinates::zeros(dimension));
        if normal.dimension() != dimension {
            return Err(SolverError::mismatch(dimension, normal.dimension()));
        }
        Ok(Self::new(normal, constant.unwrap_or_else(S::zero)))
    }

    /// Parses an equation from decimal literals.
    ///
    /// # Errors
    ///
    /// Returns an error if a literal is invalid or `normal` is empty.
    pub fn parse(normal: &[&str], constant: &str) -> Result<Self> {
        let normal = Coordinates::parse(normal)?;
        let constant = S::parse_literal(constant)?;
        Ok(Self::new(normal, constant))
    }

    /// The line `a·x + b·y = c`.
    #[must_use]
    pub fn line(a: S, b: S, c: S) -> Self {
        Self::new([a, b].into_iter().collect(), c)
    }

    /// The plane `a·x + b·y + c·z = d`.
    #[must_use]
    pub fn plane(a: S, b: S, c: S, d: S) -> Self {
        Self::new([a, b, c].into_iter().collect(), d)
    }

    /// Re-derives the basepoint under another tolerance.
    #[must_use]
    pub fn with_tolerance_of(self, tolerance: &Tolerance<S>) -> Self {
        Self::with_tolerance(self.normal, self.constant, tolerance.clone())
    }

    /// Number of variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.normal.dimension()
    }

    /// The normal vector (the coefficients).
    #[must_use]
    pub fn normal(&self) -> &Coordinates<S> {
        &self.normal
    }

    /// The constant term.
    #[must_use]
    pub fn constant(&self) -> &S {
        &self.constant
    }

    /// A point on the hyperplane, or `None` for a zero normal.
    #[must_use]
    pub fn basepoint(&self) -> Option<&Coordinates<S>> {
        self.basepoint.as_ref()
    }

    /// The near-zero threshold this row was built with.
    #[must_use]
    pub fn tolerance(&self) -> &Tolerance<S> {
        &self.tolerance
    }

    /// Index of the leading coefficient.
    ///
    /// `None` means the row is degenerate (`0 = constant`); callers
    /// branch on it.
    #[must_use]
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.normal.first_nonzero_index(&self.tolerance)
    }

    /// Returns true if every coefficient is near zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.basepoint.is_none()
    }

    /// Sums two equations coefficient-wise and constant-wise.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let normal = self.normal.checked_add(&other.normal)?;
        let constant = self.constant.clone() + other.constant.clone();
        Ok(Self::with_tolerance(normal, constant, self.tolerance.clone()))
    }

    /// Multiplies the coefficients and the constant by `factor`.
    ///
    /// A zero factor is allowed and gives `0 = 0`.
    #[must_use]
    pub fn scale(&self, factor: &S) -> Self {
        Self::with_tolerance(
            self.normal.scale(factor),
            self.constant.clone() * factor.clone(),
            self.tolerance.clone(),
        )
    }

    /// Returns true if the normals are scalar multiples of each other.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal
            .is_parallel_to(&other.normal, &self.tolerance)
            .unwrap_or(false)
    }

    /// Returns true if both rows describe the same equation.
    ///
    /// Two zero-normal rows are the same iff their constants agree; a
    /// zero-normal row never equals a row with a nonzero normal. Otherwise
    /// the normals must be parallel and the segment between the basepoints
    /// orthogonal to them.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        match (&self.basepoint, &other.basepoint) {
            (None, None) => self
                .tolerance
                .is_near_zero(&(self.constant.clone() - other.constant.clone())),
            (Some(here), Some(there)) => {
                if !self.is_parallel_to(other) {
                    return false;
                }
                let between = here - there;
                self.normal
                    .is_orthogonal_to(&between, &self.tolerance)
                    .unwrap_or(false)
            }
            _ => false,
        }
    }

    /// Left-hand side `normal · point`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] if the point has the
    /// wrong dimension.
    pub fn evaluate(&self, point: &Coordinates<S>) -> Result<S> {
        if point.dimension() != self.dimension() {
            return Err(SolverError::mismatch(self.dimension(), point.dimension()));
        }
        Ok(self.normal.dot(point)?)
    }

    /// Returns true if `point` satisfies the equation within tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] if the point has the
    /// wrong dimension.
    pub fn contains_point(&self, point: &Coordinates<S>) -> Result<bool> {
        let residual = self.evaluate(point)? - self.constant.clone();
        Ok(self.tolerance.is_near_zero(&residual))
    }

    /// Intersects two lines in the plane by Cramer's rule.
    ///
    /// A degenerate equation is `Disjoint` from everything except an
    /// identical degenerate equation.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::UnsupportedDimension`] unless both rows are
    /// two-dimensional.
    pub fn intersection_with(&self, other: &Self) -> Result<LineIntersection<S>> {
        for dimension in [self.dimension(), other.dimension()] {
            if dimension != 2 {
                return Err(SolverError::UnsupportedDimension {
                    operation: "line intersection",
                    dimension,
                });
            }
        }

        let (a, b) = (self.normal[0].clone(), self.normal[1].clone());
        let (c, d) = (other.normal[0].clone(), other.normal[1].clone());
        let (k1, k2) = (self.constant.clone(), other.constant.clone());

        let det = a.clone() * d.clone() - b.clone() * c.clone();
        if self.tolerance.is_near_zero(&det) {
            return Ok(if self.approx_eq(other) {
                LineIntersection::Coincident
            } else {
                LineIntersection::Disjoint
            });
        }

        let x = (d * k1.clone() - b * k2.clone()) / det.clone();
        let y = (a * k2 - c * k1) / det;
        Ok(LineIntersection::Point([x, y].into_iter().collect()))
    }
}

fn derive_basepoint<S: Scalar>(
    normal: &Coordinates<S>,
    constant: &S,
    tolerance: &Tolerance<S>,
) -> Option<Coordinates<S>> {
    let leading = normal.first_nonzero_index(tolerance)?;
    let point = (0..normal.dimension())
        .map(|k| {
            if k == leading {
                constant.clone() / normal[k].clone()
            } else {
                S::zero()
            }
        })
        .collect();
    Some(point)
}

impl<S: Scalar> Add for &Hyperplane<S> {
    type Output = Hyperplane<S>;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add(self, other: Self) -> Hyperplane<S> {
        assert_eq!(self.dimension(), other.dimension());
        Hyperplane::with_tolerance(
            &self.normal + &other.normal,
            self.constant.clone() + other.constant.clone(),
            self.tolerance.clone(),
        )
    }
}
