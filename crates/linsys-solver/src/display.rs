//! Human-readable rendering of equations, systems and solutions.
//!
//! Numbers are rounded to three decimal places and variables are named
//! `x_1, x_2, ...`. An equation renders as `x_1 - 2.5x_2 + x_3 = 4`.

use std::fmt;

use linsys_numeric::{Coordinates, Scalar};

use crate::hyperplane::Hyperplane;
use crate::linear_system::LinearSystem;
use crate::parametrization::Parametrization;
use crate::solution::Solution;

const DECIMAL_PLACES: u32 = 3;

fn rounded<S: Scalar>(value: &S) -> S {
    value.round_dp(DECIMAL_PLACES)
}

fn write_term<S: Scalar>(
    f: &mut fmt::Formatter<'_>,
    coefficient: &S,
    variable: usize,
    is_initial: bool,
) -> fmt::Result {
    let c = rounded(coefficient);
    if c < S::zero() {
        f.write_str("-")?;
    } else if !is_initial {
        f.write_str("+")?;
    }
    if !is_initial {
        f.write_str(" ")?;
    }
    let magnitude = c.abs();
    if !magnitude.is_one() {
        write!(f, "{magnitude}")?;
    }
    write!(f, "x_{}", variable + 1)
}

impl<S: Scalar> fmt::Display for Hyperplane<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Leading term is the first one that survives rounding.
        let mut terms = self
            .normal()
            .iter()
            .enumerate()
            .filter(|(_, coefficient)| !rounded(*coefficient).is_zero());
        match terms.next() {
            None => f.write_str("0")?,
            Some((k, coefficient)) => {
                write_term(f, coefficient, k, true)?;
                for (k, coefficient) in terms {
                    f.write_str(" ")?;
                    write_term(f, coefficient, k, false)?;
                }
            }
        }
        write!(f, " = {}", rounded(self.constant()))
    }
}

impl<S: Scalar> fmt::Display for LinearSystem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Linear system:")?;
        for (i, row) in self.rows().iter().enumerate() {
            write!(f, "\nEquation {}: {row}", i + 1)?;
        }
        Ok(())
    }
}

fn rounded_point<S: Scalar>(point: &Coordinates<S>) -> Coordinates<S> {
    point.iter().map(rounded).collect()
}

impl<S: Scalar> fmt::Display for Parametrization<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coord in 0..self.dimension() {
            if coord > 0 {
                f.write_str("\n")?;
            }
            write!(f, "x_{} = {}", coord + 1, rounded(&self.basepoint()[coord]))?;
            for (j, direction) in self.directions().iter().enumerate() {
                write!(f, " + {} t_{}", rounded(&direction[coord]), j + 1)?;
            }
        }
        Ok(())
    }
}

impl<S: Scalar> fmt::Display for Solution<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolution => f.write_str("No solutions"),
            Self::Unique(point) => write!(f, "Solution: {}", rounded_point(point)),
            Self::Infinite(param) => write!(f, "Infinitely many solutions:\n{param}"),
        }
    }
}
