//! Property-based tests for curve construction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bezsym_core::{ExprArena, ExprHandle, Rational};
    use bezsym_vector::Vector2;

    use crate::{bernstein_basis, evaluate_curve, hodograph, Curve};

    fn names(arena: &mut ExprArena, degree: usize) -> Vec<ExprHandle> {
        (0..=degree).map(|i| arena.symbol(&format!("p{i}"))).collect()
    }

    proptest! {
        #[test]
        fn basis_is_partition_of_unity(degree in 1usize..=4, num in -20i64..20, den in 1i64..10) {
            let mut arena = ExprArena::new();
            let t = arena.symbol("t");
            let basis = bernstein_basis(&mut arena, degree, t);
            let sum = arena.add(basis);

            let value = arena.constant(Rational::from_i64(num, den));
            let at = arena.substitute(sum, &[(t, value)]).unwrap();
            prop_assert!(arena.is_one(at));
        }

        #[test]
        fn curve_interpolates_endpoints(degree in 1usize..=4) {
            let mut arena = ExprArena::new();
            let t = arena.symbol("t");
            let points = names(&mut arena, degree);
            let curve = Curve::new(points.clone()).unwrap();
            let expr = curve.point(&mut arena, t).unwrap();

            let zero = arena.zero();
            let one = arena.one();
            let start = arena.substitute(expr, &[(t, zero)]).unwrap();
            let end = arena.substitute(expr, &[(t, one)]).unwrap();
            prop_assert_eq!(start, points[0]);
            prop_assert_eq!(end, points[degree]);
        }

        #[test]
        fn hodograph_is_derivative(coords in prop::collection::vec((-9i64..10, -9i64..10), 2..=5)) {
            let mut arena = ExprArena::new();
            let t = arena.symbol("t");
            let points: Vec<Vector2> = coords
                .iter()
                .map(|&(x, y)| Vector2::new([arena.integer(x), arena.integer(y)]))
                .collect();

            let degree = points.len() - 1;
            let basis = bernstein_basis(&mut arena, degree, t);
            let curve = evaluate_curve(&mut arena, &points, &basis).unwrap();
            let differentiated = curve.derivative(&mut arena, t).unwrap();
            let differentiated = differentiated.expand(&mut arena).unwrap();

            let derived = hodograph(&mut arena, &points);
            let basis = bernstein_basis(&mut arena, degree - 1, t);
            let from_hodograph = evaluate_curve(&mut arena, &derived, &basis).unwrap();
            prop_assert_eq!(from_hodograph, differentiated);
        }
    }
}
