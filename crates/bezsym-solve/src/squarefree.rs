//! Exact square-free reduction of rational polynomials.
//!
//! Coefficient vectors are lowest degree first with no trailing zero; the
//! empty vector is the zero polynomial.

use bezsym_core::Rational;
use num_traits::Zero;

fn trim(mut p: Vec<Rational>) -> Vec<Rational> {
    while p.last().is_some_and(Zero::is_zero) {
        p.pop();
    }
    p
}

fn derivative(p: &[Rational]) -> Vec<Rational> {
    let coeffs = p
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, c)| Rational::from(i64::try_from(k).unwrap_or(i64::MAX)) * c)
        .collect();
    trim(coeffs)
}

/// Divides `a` by a non-zero `b`, returning `(quotient, remainder)`.
fn div_rem(a: &[Rational], b: &[Rational]) -> (Vec<Rational>, Vec<Rational>) {
    let Some(lead_inv) = b.last().and_then(Rational::checked_recip) else {
        return (Vec::new(), a.to_vec());
    };
    if a.len() < b.len() {
        return (Vec::new(), a.to_vec());
    }

    let mut quotient = vec![Rational::zero(); a.len() - b.len() + 1];
    let mut remainder = a.to_vec();
    while remainder.len() >= b.len() {
        let shift = remainder.len() - b.len();
        let Some(lead) = remainder.last() else {
            break;
        };
        let coeff = lead * &lead_inv;
        for (i, bc) in b.iter().enumerate() {
            remainder[shift + i] = &remainder[shift + i] - &(&coeff * bc);
        }
        quotient[shift] = coeff;
        // The leading term cancels exactly.
        remainder.pop();
        remainder = trim(remainder);
    }
    (trim(quotient), remainder)
}

/// The monic greatest common divisor.
fn gcd(a: &[Rational], b: &[Rational]) -> Vec<Rational> {
    let mut p = a.to_vec();
    let mut q = b.to_vec();
    while !q.is_empty() {
        let (_, r) = div_rem(&p, &q);
        p = q;
        q = r;
    }
    match p.last().and_then(Rational::checked_recip) {
        Some(inv) => p.iter().map(|c| c * &inv).collect(),
        None => p,
    }
}

/// Returns `p / gcd(p, p')`: the same roots, each with multiplicity one.
pub(crate) fn square_free_part(p: &[Rational]) -> Vec<Rational> {
    let g = gcd(p, &derivative(p));
    if g.len() <= 1 {
        return p.to_vec();
    }
    div_rem(p, &g).0
}
