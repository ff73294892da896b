//! Symbolic root formulas.
//!
//! These are the closed forms compiled into straight-line code: a root is
//! an expression over the coefficients' symbols, evaluated at run time.

use bezsym_core::{Error, ExprArena, ExprHandle, Result};

use crate::polynomial::Polynomial;

/// Returns the roots of a linear or quadratic polynomial as expressions.
///
/// Degree 1 gives `-c0/c1`. Degree 2 gives
/// `(-c1 + sqrt(c1^2 - 4*c2*c0)) / (2*c2)` followed by the `-sqrt` root;
/// when the discriminant folds to zero the double root is returned once.
/// Constants have no roots.
///
/// # Errors
///
/// Returns [`Error::Unsupported`] for degree 3 or more.
pub fn root_formulas(arena: &mut ExprArena, poly: &Polynomial) -> Result<Vec<ExprHandle>> {
    match *poly.coeffs() {
        [] | [_] => Ok(Vec::new()),
        [c0, c1] => {
            let num = arena.neg(c0);
            Ok(vec![arena.div(num, c1)?])
        }
        [c0, c1, c2] => {
            let c1_squared = arena.pow(c1, 2);
            let minus_four = arena.integer(-4);
            let product = arena.mul([minus_four, c2, c0]);
            let disc = arena.add([c1_squared, product]);
            let disc = arena.expand(disc)?;

            let root = arena.sqrt(disc);
            let minus_c1 = arena.neg(c1);
            let two = arena.integer(2);
            let den = arena.mul([two, c2]);

            let plus = arena.add([minus_c1, root]);
            let minus = arena.sub(minus_c1, root);
            let first = arena.div(plus, den)?;
            let second = arena.div(minus, den)?;
            if first == second {
                Ok(vec![first])
            } else {
                Ok(vec![first, second])
            }
        }
        _ => Err(Error::Unsupported(format!(
            "symbolic root formulas cover degree at most 2, found {}",
            poly.degree()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::to_polynomial;

    #[test]
    fn test_linear_formula() {
        let mut arena = ExprArena::new();
        let [t, a, b] = arena.symbols_from(["t", "a", "b"]);
        let at = arena.mul([a, t]);
        let expr = arena.add([at, b]);
        let poly = to_polynomial(&mut arena, expr, t).unwrap();

        let roots = root_formulas(&mut arena, &poly).unwrap();
        let minus_b = arena.neg(b);
        assert_eq!(roots, [arena.div(minus_b, a).unwrap()]);
    }

    #[test]
    fn test_quadratic_formula_evaluates() {
        let mut arena = ExprArena::new();
        let [t, a, b, c] = arena.symbols_from(["t", "a", "b", "c"]);
        let t2 = arena.pow(t, 2);
        let at2 = arena.mul([a, t2]);
        let bt = arena.mul([b, t]);
        let expr = arena.add([at2, bt, c]);
        let poly = to_polynomial(&mut arena, expr, t).unwrap();
        let roots = root_formulas(&mut arena, &poly).unwrap();
        assert_eq!(roots.len(), 2);

        // t^2 - 3t + 2
        let values = arena.values(&[("a", 1.0), ("b", -3.0), ("c", 2.0)]);
        let mut found: Vec<f64> = roots
            .iter()
            .map(|r| arena.evaluate(*r, &values).unwrap())
            .collect();
        found.sort_by(f64::total_cmp);
        assert!((found[0] - 1.0).abs() < 1e-12);
        assert!((found[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_double_root_is_reported_once() {
        let mut arena = ExprArena::new();
        let t = arena.symbol("t");
        let one = arena.one();
        let shifted = arena.sub(t, one);
        let square = arena.pow(shifted, 2);
        let poly = to_polynomial(&mut arena, square, t).unwrap();
        assert_eq!(root_formulas(&mut arena, &poly).unwrap(), [one]);
    }

    #[test]
    fn test_cubic_is_unsupported() {
        let mut arena = ExprArena::new();
        let t = arena.symbol("t");
        let t3 = arena.pow(t, 3);
        let poly = to_polynomial(&mut arena, t3, t).unwrap();
        assert!(matches!(
            root_formulas(&mut arena, &poly),
            Err(Error::Unsupported(_))
        ));
    }
}
