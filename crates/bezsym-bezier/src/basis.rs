//! The Bernstein basis.

use bezsym_core::{ExprArena, ExprHandle};
use bezsym_integers::Rational;

/// Converts a degree or index to a power exponent.
pub(crate) fn exponent(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Returns the `degree + 1` Bernstein polynomials `C(n,k) t^k (1-t)^(n-k)`.
///
/// The terms are kept in product form, e.g. degree 2 gives
/// `[(1 - t)^2, 2*t*(1 - t), t^2]`; [`crate::evaluate_curve`] expands the
/// weighted sum.
pub fn bernstein_basis(arena: &mut ExprArena, degree: usize, t: ExprHandle) -> Vec<ExprHandle> {
    let n = exponent(degree);
    let one = arena.one();
    let one_minus_t = arena.sub(one, t);

    (0..=n)
        .map(|k| {
            let c = arena.constant(Rational::binomial(n, k));
            let rising = arena.pow(t, k);
            let falling = arena.pow(one_minus_t, n - k);
            arena.mul([c, rising, falling])
        })
        .collect()
}
