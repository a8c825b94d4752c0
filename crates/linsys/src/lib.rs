//! # linsys
//!
//! Exact linear systems over lines, planes and hyperplanes.
//!
//! Equations are stored as a normal vector and a constant term. Systems
//! are reduced by Gaussian elimination in exact decimal arithmetic, and
//! the result is reported as no solution, a single point, or a
//! parametrized family of points.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: `Decimal` never rounds during elimination
//! - **Explicit Tolerance**: near-zero tests use a per-system threshold
//! - **Generic Scalars**: the same solver runs over `f64`
//! - **Geometry**: angles, projections, parallel and orthogonal tests
//!
//! ## Quick Start
//!
//! ```rust
//! use linsys::prelude::*;
//!
//! let system: LinearSystem = LinearSystem::new(vec![
//!     Hyperplane::parse(&["1", "1", "1"], "1")?,
//!     Hyperplane::parse(&["0", "1", "0"], "2")?,
//!     Hyperplane::parse(&["1", "1", "-1"], "3")?,
//! ])?;
//!
//! let solution = system.compute_solution();
//! assert_eq!(solution.unique_point(), Some(&Coordinates::from_integers(&[0, 2, -1])?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use linsys_numeric as numeric;
pub use linsys_solver as solver;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use linsys_numeric::{AngleUnit, Coordinates, Decimal, Scalar, Tolerance};
    pub use linsys_solver::{
        Hyperplane, LineIntersection, LinearSystem, Parametrization, Solution, SolverError,
    };
}
