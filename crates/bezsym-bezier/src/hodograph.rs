//! Derivative curves.
//!
//! The derivative of a degree-`n` Bezier curve is the degree-`n - 1` curve
//! with control points `n * (p[i+1] - p[i])`.

use bezsym_core::ExprArena;

use crate::point::ControlPoint;

/// Returns the control points of the derivative curve.
///
/// A constant curve (one point, or none) differentiates to a single zero
/// point.
pub fn hodograph<P: ControlPoint>(arena: &mut ExprArena, points: &[P]) -> Vec<P> {
    if points.len() <= 1 {
        return vec![P::zero(arena)];
    }

    let degree = i64::try_from(points.len() - 1).unwrap_or(i64::MAX);
    let n = arena.integer(degree);
    points
        .windows(2)
        .map(|pair| {
            let diff = pair[1].sub(arena, pair[0]);
            diff.scale(arena, n)
        })
        .collect()
}

/// Applies [`hodograph`] `order` times.
///
/// An order above the degree yields the single zero point.
pub fn nth_derivative<P: ControlPoint>(
    arena: &mut ExprArena,
    points: &[P],
    order: usize,
) -> Vec<P> {
    let mut current = points.to_vec();
    for _ in 0..order {
        if current.len() == 1 && current[0].is_zero(arena) {
            break;
        }
        current = hodograph(arena, &current);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezsym_vector::Vector3;

    #[test]
    fn test_quadratic_hodograph() {
        let mut arena = ExprArena::new();
        let [p1, p2, p3] = arena.symbols_from(["p1", "p2", "p3"]);
        let d = hodograph(&mut arena, &[p1, p2, p3]);

        let two = arena.integer(2);
        let first = arena.sub(p2, p1);
        let second = arena.sub(p3, p2);
        assert_eq!(d, [arena.mul([two, first]), arena.mul([two, second])]);
    }

    #[test]
    fn test_order_above_degree_is_zero() {
        let mut arena = ExprArena::new();
        let [p1, p2, p3] = arena.symbols_from(["p1", "p2", "p3"]);
        for order in 3..6 {
            let d = nth_derivative(&mut arena, &[p1, p2, p3], order);
            assert_eq!(d.len(), 1);
            assert!(arena.is_zero(d[0]));
        }
    }

    #[test]
    fn test_second_derivative_of_cubic() {
        let mut arena = ExprArena::new();
        let [p1, p2, p3, p4] = arena.symbols_from(["p1", "p2", "p3", "p4"]);
        let dd = nth_derivative(&mut arena, &[p1, p2, p3, p4], 2);
        assert_eq!(dd.len(), 2);

        // 6 * (p3 - 2 p2 + p1)
        let expanded = arena.expand(dd[0]).unwrap();
        let six = arena.integer(6);
        let minus_twelve = arena.integer(-12);
        let a = arena.mul([six, p1]);
        let b = arena.mul([minus_twelve, p2]);
        let c = arena.mul([six, p3]);
        assert_eq!(expanded, arena.add([a, b, c]));
    }

    #[test]
    fn test_vector_hodograph() {
        let mut arena = ExprArena::new();
        let p1 = Vector3::symbolic(&mut arena, "p1");
        let p2 = Vector3::symbolic(&mut arena, "p2");
        let d = hodograph(&mut arena, &[p1, p2]);
        assert_eq!(d, [p2.sub(&mut arena, p1)]);
    }
}
