//! Property-based tests for extraction and root finding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bezsym_core::ExprArena;

    use crate::{real_roots, to_polynomial};

    proptest! {
        #[test]
        fn roots_of_products_of_linear_factors(factors in prop::collection::vec(-6i64..7, 1..=4)) {
            let mut arena = ExprArena::new();
            let t = arena.symbol("t");
            let linear: Vec<_> = factors
                .iter()
                .map(|r| {
                    let r = arena.integer(*r);
                    arena.sub(t, r)
                })
                .collect();
            let product = arena.mul(linear);
            let poly = to_polynomial(&mut arena, product, t).unwrap();
            prop_assert_eq!(poly.degree(), factors.len());

            let roots = real_roots(&arena, &poly).unwrap();
            let mut expected = factors.clone();
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(roots.len(), expected.len());
            for (root, want) in roots.iter().zip(&expected) {
                #[allow(clippy::cast_precision_loss)]
                let want = *want as f64;
                prop_assert!((root - want).abs() < 1e-6, "{roots:?} vs {expected:?}");
            }
        }

        #[test]
        fn extraction_round_trips(coeffs in prop::collection::vec(-9i64..10, 1..6)) {
            let mut arena = ExprArena::new();
            let [t, a] = arena.symbols_from(["t", "a"]);
            let terms: Vec<_> = coeffs
                .iter()
                .enumerate()
                .map(|(k, c)| {
                    let c = arena.integer(*c);
                    let power = arena.pow(t, u32::try_from(k).unwrap());
                    arena.mul([c, a, power])
                })
                .collect();
            let expr = arena.add(terms);
            let poly = to_polynomial(&mut arena, expr, t).unwrap();
            let rebuilt = poly.to_expr(&mut arena);
            prop_assert_eq!(arena.expand(rebuilt).unwrap(), expr);
        }
    }
}
