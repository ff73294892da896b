//! Property-based tests for elimination.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bezsym_bezier::Curve;
    use bezsym_core::{ExprArena, ExprHandle};

    use crate::{eliminate_common_subexpressions, CseConfig};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    proptest! {
        #[test]
        fn cse_preserves_values(
            coords in prop::collection::vec(-10.0f64..10.0, 2..=5),
            at in 0.0f64..1.0,
        ) {
            let mut arena = ExprArena::new();
            let t = arena.symbol("t");
            let names: Vec<String> = (0..coords.len()).map(|i| format!("p{i}")).collect();
            let points: Vec<ExprHandle> = names.iter().map(|n| arena.symbol(n)).collect();
            let curve = Curve::new(points).unwrap();
            let point = curve.point(&mut arena, t).unwrap();
            let tangent = curve.tangent(&mut arena, t).unwrap();
            let second = curve.derivative_at(&mut arena, t, 2).unwrap();
            let inputs = [point, tangent, second];

            let result =
                eliminate_common_subexpressions(&mut arena, &inputs, &CseConfig::default()).unwrap();

            let mut pairs: Vec<(&str, f64)> =
                names.iter().map(String::as_str).zip(coords.iter().copied()).collect();
            pairs.push(("t", at));
            let mut values = arena.values(&pairs);
            let direct: Vec<f64> = inputs
                .iter()
                .map(|e| arena.evaluate(*e, &values).unwrap())
                .collect();

            // Straight-line evaluation, top to bottom.
            for temp in &result.temporaries {
                let value = arena.evaluate(temp.value, &values).unwrap();
                values.insert(arena.symbol_id(temp.symbol).unwrap(), value);
            }
            for (output, want) in result.outputs.iter().zip(&direct) {
                let got = arena.evaluate(*output, &values).unwrap();
                prop_assert!(close(got, *want), "{got} vs {want}");
            }
        }

        #[test]
        fn cse_is_deterministic(degree in 1usize..=4) {
            let run = || {
                let mut arena = ExprArena::new();
                let t = arena.symbol("t");
                let points: Vec<ExprHandle> =
                    (0..=degree).map(|i| arena.symbol(&format!("p{i}"))).collect();
                let curve = Curve::new(points).unwrap();
                let point = curve.point(&mut arena, t).unwrap();
                let tangent = curve.tangent(&mut arena, t).unwrap();
                let result = eliminate_common_subexpressions(
                    &mut arena,
                    &[point, tangent],
                    &CseConfig::default(),
                )
                .unwrap();
                crate::emit(&arena, &result, &crate::EmitConfig::default()).unwrap()
            };
            prop_assert_eq!(run(), run());
        }
    }
}
