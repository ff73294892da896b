//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn binomial_pascal_rule(n in 1u32..40, k in 1u32..40) {
            let left = Rational::binomial(n, k);
            let right = Rational::binomial(n - 1, k - 1) + Rational::binomial(n - 1, k);
            prop_assert_eq!(left, right);
            prop_assert_eq!(Rational::binomial(n, k.min(n)), Rational::binomial(n, n - k.min(n)));
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_additive_inverse(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((a.clone() + -a).is_zero());
        }

        #[test]
        fn float_round_trip_is_exact(value in -1.0e6f64..1.0e6f64) {
            let r = Rational::from_f64(value).unwrap();
            prop_assert_eq!(r.to_f64(), value);
        }

        #[test]
        fn order_matches_float_order(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            if a < b {
                prop_assert!(a.to_f64() <= b.to_f64());
            }
        }
    }
}
