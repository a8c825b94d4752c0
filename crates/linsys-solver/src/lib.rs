//! # linsys-solver
//!
//! Gaussian elimination over systems of hyperplane equations.
//!
//! This crate provides:
//! - Hyperplanes (`normal · x = constant`) with same-equation and
//!   parallelism tests, and 2D line intersection
//! - Linear systems with in-place row operations
//! - Triangular form and reduced row-echelon form
//! - Pivot / free-variable classification and contradiction detection
//! - Solutions as a unique point or a parametrization
//!
//! ## Exactness
//!
//! Every type is generic over a [`Scalar`](linsys_numeric::Scalar) and
//! defaults to the exact [`Decimal`](linsys_numeric::Decimal). Near-zero
//! tests go through an explicit [`Tolerance`](linsys_numeric::Tolerance)
//! carried by each system; there is no global precision setting.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod display;
pub mod error;
pub mod hyperplane;
pub mod linear_system;
pub mod parametrization;
pub mod solution;

pub use error::{Result, SolverError};
pub use hyperplane::{Hyperplane, LineIntersection};
pub use linear_system::LinearSystem;
pub use parametrization::Parametrization;
pub use solution::Solution;

#[cfg(test)]
mod proptests;
