//! Outcome of solving a linear system.

use linsys_numeric::{Coordinates, Decimal};

use crate::parametrization::Parametrization;

/// The solution set of a linear system.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution<S = Decimal> {
    /// The equations are inconsistent.
    NoSolution,
    /// Exactly one point satisfies every equation.
    Unique(Coordinates<S>),
    /// Infinitely many solutions, one parameter per free variable.
    Infinite(Parametrization<S>),
}

impl<S> Solution<S> {
    /// Returns true unless the system is inconsistent.
    #[must_use]
    pub fn has_solution(&self) -> bool {
        !matches!(self, Self::NoSolution)
    }

    /// Returns true for a single-point solution.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }

    /// Returns true for a solution set with free parameters.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite(_))
    }

    /// The solution point, if unique.
    #[must_use]
    pub fn unique_point(&self) -> Option<&Coordinates<S>> {
        match self {
            Self::Unique(point) => Some(point),
            _ => None,
        }
    }

    /// The parametrization, if there are infinitely many solutions.
    #[must_use]
    pub fn parametrization(&self) -> Option<&Parametrization<S>> {
        match self {
            Self::Infinite(param) => Some(param),
            _ => None,
        }
    }
}
