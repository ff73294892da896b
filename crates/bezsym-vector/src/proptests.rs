//! Property-based tests for vector identities.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bezsym_core::ExprArena;

    use crate::{Vector2, Vector3};

    /// `k0 * r + k1 * s` over symbolic `r` and `s`.
    fn combination(arena: &mut ExprArena, k: [i64; 2]) -> Vector3 {
        let r = Vector3::symbolic(arena, "r");
        let s = Vector3::symbolic(arena, "s");
        let k0 = arena.integer(k[0]);
        let k1 = arena.integer(k[1]);
        let r = r.scale(arena, k0);
        let s = s.scale(arena, k1);
        r.add(arena, s)
    }

    proptest! {
        #[test]
        fn cross_is_orthogonal_to_its_factors(ka in any::<[i8; 2]>(), kb in any::<[i8; 2]>()) {
            let mut arena = ExprArena::new();
            let a = combination(&mut arena, ka.map(i64::from));
            let b = combination(&mut arena, kb.map(i64::from));
            let cross = a.cross3d(&mut arena, b);

            for factor in [a, b] {
                let dot = cross.dot(&mut arena, factor);
                let dot = arena.expand(dot).unwrap();
                prop_assert!(arena.is_zero(dot));
            }
        }

        #[test]
        fn cross2d_is_antisymmetric(ka in any::<[i8; 2]>(), kb in any::<[i8; 2]>()) {
            let mut arena = ExprArena::new();
            let [x, y] = arena.symbols_from(["x", "y"]);
            let mut vector = |k: [i8; 2]| {
                let k0 = arena.integer(i64::from(k[0]));
                let k1 = arena.integer(i64::from(k[1]));
                let kx = arena.mul([k0, x]);
                let ky = arena.mul([k1, y]);
                Vector2::new([kx, arena.add([kx, ky])])
            };
            let a = vector(ka);
            let b = vector(kb);

            let ab = a.cross2d(&mut arena, b);
            let ba = b.cross2d(&mut arena, a);
            let sum = arena.add([ab, ba]);
            let sum = arena.expand(sum).unwrap();
            prop_assert!(arena.is_zero(sum));
        }
    }
}
