//! # linsys-numeric
//!
//! Numeric primitives for hyperplane geometry.
//!
//! This crate provides:
//! - Exact decimal scalars (`Decimal`) backed by `dashu` rationals
//! - The `Scalar` trait, implemented for `Decimal` and `f64`
//! - Fixed-length coordinate vectors (`Coordinates`) with the usual
//!   geometric predicates: dot product, magnitude, angle, parallel and
//!   orthogonal tests, projection and cross product
//! - An explicit near-zero threshold (`Tolerance`)
//!
//! ## Exactness
//!
//! With `Decimal`, addition, subtraction, multiplication and division are
//! exact. Only `magnitude` (square root) and `angle_with` (arc cosine)
//! round, and neither is used by the parallel or orthogonal tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coordinates;
pub mod decimal;
pub mod error;
pub mod scalar;
pub mod tolerance;

#[cfg(test)]
mod proptests;

pub use coordinates::{AngleUnit, Coordinates};
pub use decimal::Decimal;
pub use error::{NumericError, Result};
pub use scalar::Scalar;
pub use tolerance::Tolerance;
