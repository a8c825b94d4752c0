//! Property-based tests for row reduction and solving.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use linsys_numeric::{Coordinates, Decimal};

    use crate::{Hyperplane, LinearSystem, Solution};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -6i64..=6i64
    }

    fn row(dimension: usize) -> impl Strategy<Value = Hyperplane> {
        (prop::collection::vec(small_int(), dimension), small_int()).prop_map(|(normal, c)| {
            Hyperplane::new(
                Coordinates::from_integers(&normal).unwrap(),
                Decimal::from(c),
            )
        })
    }

    // Systems of 1 to 4 equations in 2 to 4 variables. Integer coefficients
    // make dependent rows common, so every solution shape shows up.
    fn system() -> impl Strategy<Value = LinearSystem> {
        (2usize..=4, 1usize..=4).prop_flat_map(|(dimension, rows)| {
            prop::collection::vec(row(dimension), rows)
                .prop_map(|rows| LinearSystem::new(rows).unwrap())
        })
    }

    fn params(count: usize) -> impl Strategy<Value = Vec<Decimal>> {
        prop::collection::vec(
            (small_int(), 1i64..=4).prop_map(|(n, d)| Decimal::new(n, d)),
            count,
        )
    }

    proptest! {
        #[test]
        fn solving_is_deterministic(s in system()) {
            prop_assert_eq!(s.compute_solution(), s.compute_solution());
        }

        #[test]
        fn swap_twice_restores(s in system(), i in 0usize..4, j in 0usize..4) {
            prop_assume!(i < s.len() && j < s.len());
            let mut t = s.clone();
            t.swap_rows(i, j);
            t.swap_rows(i, j);
            prop_assert_eq!(t, s);
        }

        #[test]
        fn add_scaled_row_is_invertible(
            s in system(),
            i in 0usize..4,
            j in 0usize..4,
            k in small_int(),
        ) {
            prop_assume!(i < s.len() && j < s.len() && i != j);
            let k = Decimal::from(k);
            let mut t = s.clone();
            t.add_scaled_row(i, j, &k);
            t.add_scaled_row(i, j, &-k);
            prop_assert_eq!(t, s);
        }

        #[test]
        fn pivots_and_free_variables_cover_dimension(s in system()) {
            let r = s.rref();
            let pivots: Vec<usize> = r.pivot_indices().into_iter().flatten().collect();
            let mut distinct = pivots.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(distinct.len(), pivots.len());
            prop_assert_eq!(pivots.len() + r.free_variables().len(), s.dimension());
        }

        #[test]
        fn rref_pivot_columns_are_unit(s in system()) {
            let r = s.rref();
            for (index, pivot) in r.pivot_indices().into_iter().enumerate() {
                let Some(col) = pivot else { continue };
                for (other, row) in r.rows().iter().enumerate() {
                    let expected = if other == index { Decimal::from(1) } else { Decimal::from(0) };
                    prop_assert_eq!(&row.normal()[col], &expected);
                }
            }
        }

        #[test]
        fn unique_solution_satisfies_every_row(s in system()) {
            if let Solution::Unique(point) = s.compute_solution() {
                prop_assert!(s.is_satisfied_by(&point).unwrap());
            }
        }

        #[test]
        fn parametrization_satisfies_every_row(
            (s, ts) in system().prop_flat_map(|s| {
                let free = s.rref().free_variables().len();
                (Just(s), params(free))
            })
        ) {
            if let Some(param) = s.parametrization() {
                prop_assert_eq!(param.num_parameters(), ts.len());
                let point = param.point_at(&ts).unwrap();
                prop_assert!(s.is_satisfied_by(&point).unwrap());
            } else {
                prop_assert!(s.rref().has_contradiction());
            }
        }
    }
}
