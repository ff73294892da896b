//! Closed-form real roots of polynomials up to degree 4.
//!
//! Coefficients are exact rationals, so the degree is exact and repeated
//! factors are divided out exactly before any float arithmetic. The
//! discriminant then decides the root structure of quadratics and cubics
//! without float noise. Roots themselves are computed in `f64` and
//! polished with a few Newton steps on the square-free part, whose roots
//! are all simple.

use std::f64::consts::PI;

use bezsym_core::{Error, ExprArena, Rational, Result};
use num_traits::Zero;
use tracing::{debug, trace};

use crate::polynomial::Polynomial;
use crate::squarefree::square_free_part;

/// Relative distance below which two roots are reported as one.
const ROOT_TOLERANCE: f64 = 1e-9;

const NEWTON_STEPS: usize = 4;

/// Returns the distinct real roots of `poly`, sorted ascending.
///
/// The zero polynomial has no isolated roots and yields an empty list.
/// Repeated roots are reported once.
///
/// # Errors
///
/// Returns [`Error::Unsupported`] if a coefficient is symbolic or the
/// degree exceeds 4.
pub fn real_roots(arena: &ExprArena, poly: &Polynomial) -> Result<Vec<f64>> {
    let coeffs = poly.constant_coefficients(arena)?;
    if coeffs.is_empty() {
        debug!("zero polynomial has no isolated roots");
        return Ok(Vec::new());
    }

    let degree = coeffs.len() - 1;
    if degree > 4 {
        return Err(Error::Unsupported(format!(
            "closed-form roots need degree at most 4, found {degree}"
        )));
    }

    // Factor out t^k for vanishing low-order coefficients.
    let zeros = coeffs.iter().take_while(|c| c.is_zero()).count();
    let reduced = square_free_part(&coeffs[zeros..]);
    trace!(degree = reduced.len().saturating_sub(1), "square-free part");
    let candidates = match reduced.len() {
        2 => linear(&reduced).into_iter().collect(),
        3 => quadratic(&reduced),
        4 => cubic(&reduced),
        5 => quartic(&reduced),
        _ => Vec::new(),
    };

    let floats: Vec<f64> = reduced.iter().map(Rational::to_f64).collect();
    let mut roots: Vec<f64> = candidates
        .into_iter()
        .filter(|r| r.is_finite())
        .map(|r| polish(&floats, r))
        .collect();
    if zeros > 0 {
        roots.push(0.0);
    }
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|a, b| same_root(*a, *b));

    debug!(degree, count = roots.len(), "solved polynomial");
    Ok(roots)
}

fn same_root(a: f64, b: f64) -> bool {
    (a - b).abs() <= ROOT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Values of `c[0] + c[1] x + ...` and its derivative.
fn eval_with_derivative(c: &[f64], x: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut slope = 0.0;
    for coeff in c.iter().rev() {
        slope = slope * x + value;
        value = value * x + coeff;
    }
    (value, slope)
}

fn polish(c: &[f64], mut x: f64) -> f64 {
    for _ in 0..NEWTON_STEPS {
        let (value, slope) = eval_with_derivative(c, x);
        if value == 0.0 || slope == 0.0 {
            break;
        }
        let next = x - value / slope;
        if !next.is_finite() || eval_with_derivative(c, next).0.abs() >= value.abs() {
            break;
        }
        x = next;
    }
    x
}

fn linear(c: &[Rational]) -> Option<f64> {
    (-&c[0]).checked_div(&c[1]).map(|r| r.to_f64())
}

/// `c0 + c1 x + c2 x^2` with `c2 != 0`.
fn quadratic(c: &[Rational]) -> Vec<f64> {
    let (c0, c1, c2) = (&c[0], &c[1], &c[2]);
    let disc = c1 * c1 - Rational::from(4) * (c2 * c0);
    if disc.is_negative() {
        return Vec::new();
    }
    if disc.is_zero() {
        let double = (-c1).checked_div(&(Rational::from(2) * c2));
        return double.map(|r| r.to_f64()).into_iter().collect();
    }

    // Avoids cancellation between -c1 and the square root.
    let (a, b, k) = (c2.to_f64(), c1.to_f64(), c0.to_f64());
    let q = -0.5 * (b + disc.to_f64().sqrt().copysign(b));
    vec![q / a, k / q]
}

/// `c0 + c1 x + c2 x^2 + c3 x^3` with `c3 != 0`.
fn cubic(c: &[Rational]) -> Vec<f64> {
    let (d, cc, b, a) = (&c[0], &c[1], &c[2], &c[3]);
    let r = |n: i64| Rational::from(n);

    let disc = r(18) * (a * b) * (cc * d) - r(4) * b.pow(3) * d.clone() + (b * b) * (cc * cc)
        - r(4) * a.clone() * cc.pow(3)
        - r(27) * (a * a) * (d * d);
    let delta0 = b * b - r(3) * (a * cc);
    trace!(discriminant = %disc, "cubic");

    if disc.is_zero() {
        if delta0.is_zero() {
            let triple = (-b).checked_div(&(r(3) * a.clone()));
            return triple.map(|x| x.to_f64()).into_iter().collect();
        }
        let double = (r(9) * (a * d) - b * cc).checked_div(&(r(2) * delta0.clone()));
        let simple = (r(4) * (a * b) * cc.clone() - r(9) * (a * a) * d.clone() - b.pow(3))
            .checked_div(&(a * &delta0));
        return double.into_iter().chain(simple).map(|x| x.to_f64()).collect();
    }

    // Depressed form y^3 + p y + q with x = y - b / (3a).
    let (Some(bn), Some(cn), Some(dn)) = (b.checked_div(a), cc.checked_div(a), d.checked_div(a))
    else {
        return Vec::new();
    };
    let p = &cn - &(&bn * &bn * Rational::from_i64(1, 3));
    let q = bn.pow(3) * Rational::from_i64(2, 27) - &bn * &cn * Rational::from_i64(1, 3) + dn;
    let shift = -bn.to_f64() / 3.0;
    let (p, q) = (p.to_f64(), q.to_f64());

    if disc.is_negative() {
        // One real root.
        let inner = (q * q / 4.0 + p * p * p / 27.0).max(0.0).sqrt();
        let y = (-q / 2.0 + inner).cbrt() + (-q / 2.0 - inner).cbrt();
        vec![y + shift]
    } else {
        // Three distinct real roots, so p < 0.
        let m = 2.0 * (-p / 3.0).sqrt();
        let arg = (3.0 * q / (p * m)).clamp(-1.0, 1.0);
        let theta = arg.acos() / 3.0;
        (0..3)
            .map(|k| m * (theta - 2.0 * PI * f64::from(k) / 3.0).cos() + shift)
            .collect()
    }
}

/// `c0 + ... + c4 x^4` with `c4 != 0`, by Ferrari's method.
fn quartic(c: &[Rational]) -> Vec<f64> {
    let Some(n) = c
        .iter()
        .map(|x| x.checked_div(&c[4]))
        .collect::<Option<Vec<_>>>()
    else {
        return Vec::new();
    };
    // x^4 + b x^3 + cc x^2 + d x + e
    let (e, d, cc, b) = (&n[0], &n[1], &n[2], &n[3]);
    let frac = Rational::from_i64;

    // Depressed form y^4 + alpha y^2 + beta y + gamma with x = y - b / 4.
    let b2 = b * b;
    let alpha = cc - &(&b2 * &frac(3, 8));
    let beta = d - &(b * cc * frac(1, 2)) + &b2 * b * frac(1, 8);
    let gamma = e - &(b * d * frac(1, 4)) + &b2 * cc * frac(1, 16) - &(&b2 * &b2 * frac(3, 256));
    let shift = -b.to_f64() / 4.0;

    if beta.is_zero() {
        // Biquadratic: a quadratic in z = y^2.
        let mut roots = Vec::new();
        for z in quadratic(&[gamma, alpha, Rational::from(1)]) {
            if z == 0.0 {
                roots.push(shift);
            } else if z > 0.0 {
                let y = z.sqrt();
                roots.push(y + shift);
                roots.push(-y + shift);
            }
        }
        return roots;
    }

    // (y^2 + m)^2 = (2m - alpha) y^2 - beta y + (m^2 - gamma) is a perfect
    // square on the right when m solves the resolvent cubic.
    let resolvent = [
        &alpha * &gamma * frac(1, 2) - &(&beta * &beta * frac(1, 8)),
        -gamma.clone(),
        -(alpha.clone() * frac(1, 2)),
        Rational::from(1),
    ];
    let Some(m) = cubic(&resolvent).into_iter().reduce(f64::max) else {
        return Vec::new();
    };

    let (alpha, beta) = (alpha.to_f64(), beta.to_f64());
    let w2 = 2.0 * m - alpha;
    if w2 <= 0.0 {
        return Vec::new();
    }
    let w = w2.sqrt();
    let offset = beta / (2.0 * w);

    // y^2 - w y + (m + offset) = 0 and y^2 + w y + (m - offset) = 0
    let mut roots = Vec::new();
    for (linear, constant) in [(-w, m + offset), (w, m - offset)] {
        let disc = linear * linear / 4.0 - constant;
        let scale = (linear * linear / 4.0).abs().max(constant.abs()).max(1.0);
        if disc < -1e-12 * scale {
            continue;
        }
        let root = disc.max(0.0).sqrt();
        roots.push(-linear / 2.0 + root + shift);
        roots.push(-linear / 2.0 - root + shift);
    }
    roots
}
