//! Systems of hyperplane equations and their row reduction.
//!
//! A [`LinearSystem`] owns an ordered list of [`Hyperplane`] rows that all
//! live in the same dimension. Row operations mutate the system in place;
//! [`LinearSystem::triangular_form`], [`LinearSystem::rref`] and
//! [`LinearSystem::compute_solution`] work on a private copy and leave the
//! receiver untouched.

use std::ops::Index;

use num_traits::One;

use linsys_numeric::{Coordinates, Decimal, Scalar, Tolerance};

use crate::error::{Result, SolverError};
use crate::hyperplane::Hyperplane;
use crate::parametrization::Parametrization;
use crate::solution::Solution;

/// An ordered, non-empty list of equations in a common dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem<S = Decimal> {
    rows: Vec<Hyperplane<S>>,
    dimension: usize,
    tolerance: Tolerance<S>,
}

impl<S: Scalar> LinearSystem<S> {
    /// Creates a system with the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptySystem`] for no rows and
    /// [`SolverError::DimensionMismatch`] if the rows disagree on dimension.
    pub fn new(rows: Vec<Hyperplane<S>>) -> Result<Self> {
        Self::with_tolerance(rows, Tolerance::default())
    }

    /// Creates a system whose rows are all re-derived under `tolerance`.
    ///
    /// # Errors
    ///
    /// Same as [`LinearSystem::new`].
    pub fn with_tolerance(rows: Vec<Hyperplane<S>>, tolerance: Tolerance<S>) -> Result<Self> {
        let dimension = rows.first().ok_or(SolverError::EmptySystem)?.dimension();
        if let Some(bad) = rows.iter().find(|row| row.dimension() != dimension) {
            return Err(SolverError::mismatch(dimension, bad.dimension()));
        }
        let rows = rows
            .into_iter()
            .map(|row| row.with_tolerance_of(&tolerance))
            .collect();
        Ok(Self {
            rows,
            dimension,
            tolerance,
        })
    }

    /// Number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a system has at least one row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The near-zero threshold shared by every row.
    #[must_use]
    pub fn tolerance(&self) -> &Tolerance<S> {
        &self.tolerance
    }

    /// All rows, in order.
    #[must_use]
    pub fn rows(&self) -> &[Hyperplane<S>] {
        &self.rows
    }

    /// The row at `index`, if any.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Hyperplane<S>> {
        self.rows.get(index)
    }

    /// Replaces the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] if `row` has the wrong
    /// dimension.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_row(&mut self, index: usize, row: Hyperplane<S>) -> Result<()> {
        if row.dimension() != self.dimension {
            return Err(SolverError::mismatch(self.dimension, row.dimension()));
        }
        self.rows[index] = row.with_tolerance_of(&self.tolerance);
        Ok(())
    }

    /// Swaps two rows in place.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        log::trace!("swap rows {i} and {j}");
        self.rows.swap(i, j);
    }

    /// Multiplies a row (coefficients and constant) by `factor`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn scale_row(&mut self, row: usize, factor: &S) {
        log::trace!("row {row} *= {factor}");
        self.rows[row] = self.rows[row].scale(factor);
    }

    /// Adds a scaled row to another: `row[target] += factor * row[source]`.
    ///
    /// `target == source` is allowed and multiplies the row by
    /// `1 + factor`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, factor: &S) {
        log::trace!("row {target} += {factor} * row {source}");
        let addend = self.rows[source].scale(factor);
        self.rows[target] = &self.rows[target] + &addend;
    }

    fn is_near_zero_at(&self, row: usize, col: usize) -> bool {
        self.tolerance.is_near_zero(&self.rows[row].normal()[col])
    }

    /// Gaussian elimination to triangular form.
    ///
    /// Column `p` is handled by row `p`. When the diagonal entry is near
    /// zero the first lower row with a usable entry is swapped up; if there
    /// is none the column is left free. No magnitude pivoting is done.
    #[must_use]
    pub fn triangular_form(&self) -> Self {
        let mut system = self.clone();
        let steps = system.len().min(system.dimension);

        for p in 0..steps {
            if system.is_near_zero_at(p, p) {
                let Some(q) = (p + 1..system.len()).find(|&q| !system.is_near_zero_at(q, p))
                else {
                    log::debug!("no pivot in column {p}, leaving it free");
                    continue;
                };
                log::debug!("swapping row {q} into pivot row {p}");
                system.swap_rows(p, q);
            }

            let pivot = system.rows[p].normal()[p].clone();
            for q in p + 1..system.len() {
                if system.is_near_zero_at(q, p) {
                    continue;
                }
                let factor = -(system.rows[q].normal()[p].clone() / pivot.clone());
                system.add_scaled_row(q, p, &factor);
            }
        }

        system
    }

    /// Reduced row-echelon form.
    ///
    /// Rows are visited bottom to top. Each non-degenerate row is scaled
    /// so its leading coefficient is one, and that column is cleared from
    /// every other row. Degenerate rows are left alone.
    #[must_use]
    pub fn rref(&self) -> Self {
        let mut system = self.triangular_form();

        for row in (0..system.len()).rev() {
            let Some(col) = system.rows[row].first_nonzero_index() else {
                continue;
            };

            let leading = system.rows[row].normal()[col].clone();
            if !One::is_one(&leading) {
                if let Some(inv) = leading.inv() {
                    system.scale_row(row, &inv);
                }
            }

            for other in 0..system.len() {
                if other == row || system.is_near_zero_at(other, col) {
                    continue;
                }
                let factor = -system.rows[other].normal()[col].clone();
                system.add_scaled_row(other, row, &factor);
            }
        }

        system
    }

    /// Leading column of each row, `None` for degenerate rows.
    #[must_use]
    pub fn pivot_indices(&self) -> Vec<Option<usize>> {
        self.rows.iter().map(Hyperplane::first_nonzero_index).collect()
    }

    /// Variables that no row pivots on, ascending.
    ///
    /// Meaningful on a reduced system, where pivots are distinct and
    /// pivots plus free variables account for every variable.
    #[must_use]
    pub fn free_variables(&self) -> Vec<usize> {
        let pivots: Vec<usize> = self.pivot_indices().into_iter().flatten().collect();
        (0..self.dimension)
            .filter(|col| !pivots.contains(col))
            .collect()
    }

    /// Returns true if some row reads `0 = c` with `c` not near zero.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.is_degenerate() && !self.tolerance.is_near_zero(row.constant()))
    }

    /// Solution set as a parametrization, `None` if the system is
    /// inconsistent.
    ///
    /// A unique solution comes back with no directions.
    #[must_use]
    pub fn parametrization(&self) -> Option<Parametrization<S>> {
        let reduced = self.rref();
        if reduced.has_contradiction() {
            log::debug!("system is inconsistent");
            return None;
        }

        let pivots = reduced.pivot_indices();
        let free = reduced.free_variables();
        log::debug!(
            "{} pivot variables, free variables {:?}",
            self.dimension - free.len(),
            free
        );

        let pivoted = || {
            reduced
                .rows
                .iter()
                .zip(&pivots)
                .filter_map(|(row, pivot)| pivot.map(|p| (row, p)))
        };

        let mut basepoint = vec![S::zero(); self.dimension];
        for (row, p) in pivoted() {
            basepoint[p] = row.constant().clone();
        }

        let directions = free
            .iter()
            .map(|&f| {
                let mut direction = vec![S::zero(); self.dimension];
                direction[f] = S::one();
                for (row, p) in pivoted() {
                    direction[p] = -row.normal()[f].clone();
                }
                direction.into_iter().collect()
            })
            .collect();

        Some(Parametrization::assemble(
            basepoint.into_iter().collect(),
            directions,
        ))
    }

    /// Solves the system.
    #[must_use]
    pub fn compute_solution(&self) -> Solution<S> {
        match self.parametrization() {
            None => Solution::NoSolution,
            Some(param) if param.is_point() => Solution::Unique(param.basepoint().clone()),
            Some(param) => Solution::Infinite(param),
        }
    }

    /// Returns true if `point` satisfies every equation within tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] if the point has the
    /// wrong dimension.
    pub fn is_satisfied_by(&self, point: &Coordinates<S>) -> Result<bool> {
        for row in &self.rows {
            if !row.contains_point(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<S> Index<usize> for LinearSystem<S> {
    type Output = Hyperplane<S>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(normal: &[&str], constant: &str) -> Hyperplane {
        Hyperplane::parse(normal, constant).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn four_planes() -> [Hyperplane; 4] {
        [
            plane(&["1", "1", "1"], "1"),
            plane(&["0", "1", "0"], "2"),
            plane(&["1", "1", "-1"], "3"),
            plane(&["1", "0", "-2"], "2"),
        ]
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert_eq!(
            LinearSystem::<Decimal>::new(vec![]),
            Err(SolverError::EmptySystem)
        );
        let mixed = vec![plane(&["1", "1", "1"], "1"), plane(&["1", "1"], "1")];
        assert_eq!(LinearSystem::new(mixed), Err(SolverError::mismatch(3, 2)));
    }

    #[test]
    fn test_accessors() {
        let s = LinearSystem::new(four_planes().to_vec()).unwrap();
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert_eq!(s.dimension(), 3);
        assert_eq!(s.row(1), Some(&four_planes()[1]));
        assert_eq!(s.row(4), None);
        assert_eq!(s[3], four_planes()[3]);
    }

    #[test]
    fn test_set_row() {
        let mut s = LinearSystem::new(four_planes().to_vec()).unwrap();
        s.set_row(0, plane(&["2", "0", "0"], "4")).unwrap();
        assert_eq!(s[0], plane(&["2", "0", "0"], "4"));
        assert!(s.set_row(0, plane(&["1", "1"], "1")).is_err());
    }

    #[test]
    fn test_row_operations() {
        let [p0, p1, p2, p3] = four_planes();
        let mut s = LinearSystem::new(vec![p0.clone(), p1.clone(), p2.clone(), p3.clone()]).unwrap();

        s.swap_rows(0, 1);
        assert_eq!(s.rows(), &[p1.clone(), p0.clone(), p2.clone(), p3.clone()]);

        s.swap_rows(1, 3);
        assert_eq!(s.rows(), &[p1.clone(), p3.clone(), p2.clone(), p0.clone()]);

        s.swap_rows(3, 1);
        assert_eq!(s.rows(), &[p1.clone(), p0.clone(), p2.clone(), p3.clone()]);

        s.scale_row(0, &dec("1"));
        assert_eq!(s.rows(), &[p1.clone(), p0.clone(), p2.clone(), p3.clone()]);

        s.scale_row(2, &dec("-1"));
        assert_eq!(s[2], plane(&["-1", "-1", "1"], "-3"));

        s.scale_row(1, &dec("10"));
        assert_eq!(s[1], plane(&["10", "10", "10"], "10"));

        s.add_scaled_row(1, 0, &dec("0"));
        assert_eq!(s[1], plane(&["10", "10", "10"], "10"));

        s.add_scaled_row(1, 0, &dec("1"));
        assert_eq!(s[1], plane(&["10", "11", "10"], "12"));

        s.add_scaled_row(0, 1, &dec("-1"));
        assert_eq!(s[0], plane(&["-10", "-10", "-10"], "-10"));
        assert_eq!(s[1], plane(&["10", "11", "10"], "12"));
        assert_eq!(s[2], plane(&["-1", "-1", "1"], "-3"));
        assert_eq!(s[3], p3);
    }

    #[test]
    fn test_add_scaled_row_to_itself() {
        let mut s = LinearSystem::new(vec![plane(&["1", "2"], "3")]).unwrap();
        s.add_scaled_row(0, 0, &dec("1"));
        assert_eq!(s[0], plane(&["2", "4"], "6"));
    }

    #[test]
    fn test_triangular_form_already_triangular() {
        let p1 = plane(&["1", "1", "1"], "1");
        let p2 = plane(&["0", "1", "1"], "2");
        let s = LinearSystem::new(vec![p1.clone(), p2.clone()]).unwrap();
        let t = s.triangular_form();
        assert_eq!(t.rows(), &[p1, p2]);
    }

    #[test]
    fn test_triangular_form_exposes_contradiction() {
        let p1 = plane(&["1", "1", "1"], "1");
        let p2 = plane(&["1", "1", "1"], "2");
        let t = LinearSystem::new(vec![p1.clone(), p2]).unwrap().triangular_form();
        assert_eq!(t[0], p1);
        assert_eq!(t[1], Hyperplane::from_parts(3, None, Some(dec("1"))).unwrap());
        assert!(t.has_contradiction());
    }

    #[test]
    fn test_triangular_form_four_rows() {
        let [p0, p1, p2, p3] = four_planes();
        let s = LinearSystem::new(vec![p0.clone(), p1.clone(), p2, p3]).unwrap();
        let t = s.triangular_form();
        assert_eq!(t[0], p0);
        assert_eq!(t[1], p1);
        assert_eq!(t[2], plane(&["0", "0", "-2"], "2"));
        assert_eq!(t[3], Hyperplane::zero(3));
    }

    #[test]
    fn test_triangular_form_swaps_into_pivot_row() {
        let s = LinearSystem::new(vec![
            plane(&["0", "1", "1"], "1"),
            plane(&["1", "-1", "1"], "2"),
            plane(&["1", "2", "-5"], "3"),
        ])
        .unwrap();
        let t = s.triangular_form();
        assert_eq!(t[0], plane(&["1", "-1", "1"], "2"));
        assert_eq!(t[1], plane(&["0", "1", "1"], "1"));
        assert_eq!(t[2], plane(&["0", "0", "-9"], "-2"));
        // The input is untouched.
        assert_eq!(s[0], plane(&["0", "1", "1"], "1"));
    }

    #[test]
    fn test_rref_cases() {
        let p1 = plane(&["1", "1", "1"], "1");
        let p2 = plane(&["0", "1", "1"], "2");
        let r = LinearSystem::new(vec![p1.clone(), p2.clone()]).unwrap().rref();
        assert_eq!(r[0], plane(&["1", "0", "0"], "-1"));
        assert_eq!(r[1], p2);

        let r = LinearSystem::new(vec![p1.clone(), plane(&["1", "1", "1"], "2")])
            .unwrap()
            .rref();
        assert_eq!(r[0], p1);
        assert_eq!(r[1], Hyperplane::from_parts(3, None, Some(dec("1"))).unwrap());

        let r = LinearSystem::new(four_planes().to_vec()).unwrap().rref();
        assert_eq!(r[0], plane(&["1", "0", "0"], "0"));
        assert_eq!(r[1], plane(&["0", "1", "0"], "2"));
        assert_eq!(r[2], plane(&["0", "0", "1"], "-1"));
        assert!(r[2].approx_eq(&plane(&["0", "0", "-2"], "2")));
        assert_eq!(r[3], Hyperplane::zero(3));

        let r = LinearSystem::new(vec![
            plane(&["0", "1", "1"], "1"),
            plane(&["1", "-1", "1"], "2"),
            plane(&["1", "2", "-5"], "3"),
        ])
        .unwrap()
        .rref();
        assert_eq!(r[0], Hyperplane::new(Coordinates::from_integers(&[1, 0, 0]).unwrap(), Decimal::new(23, 9)));
        assert_eq!(r[1], Hyperplane::new(Coordinates::from_integers(&[0, 1, 0]).unwrap(), Decimal::new(7, 9)));
        assert_eq!(r[2], Hyperplane::new(Coordinates::from_integers(&[0, 0, 1]).unwrap(), Decimal::new(2, 9)));
    }

    #[test]
    fn test_rref_with_free_middle_column() {
        // Column 1 has no pivot, so both rows lead at column 2 after
        // elimination unless the actual leading column is used.
        let s = LinearSystem::new(vec![
            plane(&["1", "1", "1"], "1"),
            plane(&["1", "1", "2"], "3"),
        ])
        .unwrap();
        let r = s.rref();
        assert_eq!(r[0], plane(&["1", "1", "0"], "-1"));
        assert_eq!(r[1], plane(&["0", "0", "1"], "2"));
        assert_eq!(r.pivot_indices(), vec![Some(0), Some(2)]);
        assert_eq!(r.free_variables(), vec![1]);
    }

    #[test]
    fn test_rref_degenerate_row_between_pivots() {
        let s = LinearSystem::new(vec![
            plane(&["1", "1", "1"], "1"),
            plane(&["1", "1", "2"], "3"),
            plane(&["1", "1", "3"], "5"),
        ])
        .unwrap();
        let r = s.rref();
        assert_eq!(r[0], plane(&["1", "1", "0"], "-1"));
        assert_eq!(r[1], Hyperplane::zero(3));
        assert_eq!(r[2], plane(&["0", "0", "1"], "2"));
        assert!(!r.has_contradiction());
    }

    #[test]
    fn test_classification() {
        let r = LinearSystem::new(four_planes().to_vec()).unwrap().rref();
        assert_eq!(r.pivot_indices(), vec![Some(0), Some(1), Some(2), None]);
        assert!(r.free_variables().is_empty());
        assert!(!r.has_contradiction());

        let single = LinearSystem::new(vec![plane(&["1", "1", "1"], "1")]).unwrap();
        assert_eq!(single.free_variables(), vec![1, 2]);
    }

    #[test]
    fn test_is_satisfied_by() {
        let s = LinearSystem::new(four_planes().to_vec()).unwrap();
        assert!(s.is_satisfied_by(&Coordinates::from_integers(&[0, 2, -1]).unwrap()).unwrap());
        assert!(!s.is_satisfied_by(&Coordinates::from_integers(&[0, 0, 0]).unwrap()).unwrap());
        assert!(s.is_satisfied_by(&Coordinates::zeros(2)).is_err());
    }

    #[test]
    fn test_custom_tolerance_applies_to_rows() {
        let coarse = Tolerance::new(dec("0.01"));
        let s = LinearSystem::with_tolerance(
            vec![plane(&["0.001", "1"], "1"), plane(&["1", "1"], "2")],
            coarse.clone(),
        )
        .unwrap();
        assert_eq!(s.tolerance(), &coarse);
        assert_eq!(s[0].tolerance(), &coarse);
        // The 0.001 coefficient counts as zero, so row 1 is swapped up.
        let t = s.triangular_form();
        assert_eq!(t[0].normal()[0], dec("1"));
    }
}
