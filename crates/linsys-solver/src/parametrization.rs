//! Affine descriptions of solution sets.

use linsys_numeric::{Coordinates, Decimal, Scalar};

use crate::error::{Result, SolverError};

/// The affine set `basepoint + Σ t_j · directions[j]`.
///
/// One direction per free variable, in ascending variable order. With no
/// directions the set is the single point `basepoint`.
#[derive(Clone, Debug, PartialEq)]
pub struct Parametrization<S = Decimal> {
    basepoint: Coordinates<S>,
    directions: Vec<Coordinates<S>>,
}

impl<S: Scalar> Parametrization<S> {
    /// Creates a parametrization.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] if a direction does not
    /// share the basepoint's dimension.
    pub fn new(basepoint: Coordinates<S>, directions: Vec<Coordinates<S>>) -> Result<Self> {
        let dimension = basepoint.dimension();
        if let Some(bad) = directions.iter().find(|d| d.dimension() != dimension) {
            return Err(SolverError::mismatch(dimension, bad.dimension()));
        }
        Ok(Self {
            basepoint,
            directions,
        })
    }

    pub(crate) fn assemble(basepoint: Coordinates<S>, directions: Vec<Coordinates<S>>) -> Self {
        Self {
            basepoint,
            directions,
        }
    }

    /// The point reached with every parameter at zero.
    #[must_use]
    pub fn basepoint(&self) -> &Coordinates<S> {
        &self.basepoint
    }

    /// Direction vectors, one per free variable.
    #[must_use]
    pub fn directions(&self) -> &[Coordinates<S>] {
        &self.directions
    }

    /// Dimension of the ambient space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }

    /// Number of free parameters.
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        self.directions.len()
    }

    /// Returns true if the set is a single point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.directions.is_empty()
    }

    /// Evaluates `basepoint + Σ params[j] · directions[j]`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] if `params` does not
    /// supply exactly one value per direction.
    pub fn point_at(&self, params: &[S]) -> Result<Coordinates<S>> {
        if params.len() != self.directions.len() {
            return Err(SolverError::mismatch(self.directions.len(), params.len()));
        }
        let mut point = self.basepoint.clone();
        for (direction, t) in self.directions.iter().zip(params) {
            point = &point + &direction.scale(t);
        }
        Ok(point)
    }
}
