//! Property-based tests for exact scalars and coordinate vectors.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Coordinates, Decimal, Scalar, Tolerance};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn decimal() -> impl Strategy<Value = Decimal> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Decimal::new(n, d))
    }

    fn vector3() -> impl Strategy<Value = Coordinates> {
        prop::collection::vec(decimal(), 3).prop_map(|v| Coordinates::new(v).unwrap())
    }

    proptest! {
        // Decimal field axioms

        #[test]
        fn decimal_add_commutative(a in decimal(), b in decimal()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn decimal_distributive(a in decimal(), b in decimal(), c in decimal()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn decimal_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Decimal::new(num, den);
            let inv = Scalar::inv(&a).unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn decimal_display_parses_back(whole in small_int(), frac in 0i64..1000i64) {
            // Denominator 1000 always has a terminating expansion.
            let a = Decimal::new(whole * 1000 + frac, 1000);
            let text = a.to_string();
            prop_assert_eq!(text.parse::<Decimal>().unwrap(), a);
        }

        #[test]
        fn round_dp_is_within_half_unit(num in small_int(), den in non_zero_int()) {
            let a = Decimal::new(num, den);
            let rounded = a.round_dp(3);
            let error = (rounded - a).abs();
            prop_assert!(error <= Decimal::new(1, 2000));
        }

        // Vector identities

        #[test]
        fn sub_then_add_restores(a in vector3(), b in vector3()) {
            let diff = a.checked_sub(&b).unwrap();
            prop_assert_eq!(diff.checked_add(&b).unwrap(), a);
        }

        #[test]
        fn dot_is_symmetric(a in vector3(), b in vector3()) {
            prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        }

        #[test]
        fn scaled_vectors_are_parallel(a in vector3(), k in decimal()) {
            let tol = Tolerance::default();
            prop_assert!(a.is_parallel_to(&a.scale(&k), &tol).unwrap());
        }

        #[test]
        fn orthogonal_component_is_orthogonal(a in vector3(), b in vector3()) {
            let tol = Tolerance::default();
            prop_assume!(!b.is_zero(&tol));
            let ortho = a.orthogonal_component(&b).unwrap();
            prop_assert!(ortho.dot(&b).unwrap().is_zero());
        }

        #[test]
        fn cross_is_orthogonal_to_both(a in vector3(), b in vector3()) {
            let c = a.cross(&b).unwrap();
            prop_assert!(c.dot(&a).unwrap().is_zero());
            prop_assert!(c.dot(&b).unwrap().is_zero());
        }
    }
}
