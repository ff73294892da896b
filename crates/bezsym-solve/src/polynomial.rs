//! Polynomials in one variable with symbolic coefficients.

use bezsym_core::{Error, ExprArena, ExprHandle, ExprNode, Rational, Result, SymbolId};
use rustc_hash::FxHashMap;
use tracing::debug;

/// `sum(coeffs[k] * variable^k)`, with no coefficient depending on the
/// variable and no trailing zero coefficient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    variable: ExprHandle,
    coeffs: Vec<ExprHandle>,
}

impl Polynomial {
    /// Creates a polynomial, dropping trailing zero coefficients.
    #[must_use]
    pub fn new(arena: &ExprArena, variable: ExprHandle, mut coeffs: Vec<ExprHandle>) -> Self {
        while coeffs.last().is_some_and(|c| arena.is_zero(*c)) {
            coeffs.pop();
        }
        Self { variable, coeffs }
    }

    /// The variable.
    #[must_use]
    pub fn variable(&self) -> ExprHandle {
        self.variable
    }

    /// Coefficients, lowest degree first. Empty for the zero polynomial.
    #[must_use]
    pub fn coeffs(&self) -> &[ExprHandle] {
        &self.coeffs
    }

    /// The coefficient of `variable^k`, if within the degree.
    #[must_use]
    pub fn coefficient(&self, k: usize) -> Option<ExprHandle> {
        self.coeffs.get(k).copied()
    }

    /// The degree; 0 for constants including the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Returns true for the identically zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates at `at` by Horner's rule.
    pub fn evaluate(&self, arena: &mut ExprArena, at: ExprHandle) -> ExprHandle {
        let mut acc = arena.zero();
        for c in self.coeffs.iter().rev() {
            let shifted = arena.mul([acc, at]);
            acc = arena.add([shifted, *c]);
        }
        acc
    }

    /// The derivative with respect to the variable.
    #[must_use]
    pub fn derivative(&self, arena: &mut ExprArena) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, c)| {
                let k = arena.integer(i64::try_from(k).unwrap_or(i64::MAX));
                arena.mul([k, *c])
            })
            .collect();
        Self::new(arena, self.variable, coeffs)
    }

    /// Rebuilds the expression `sum(c_k * variable^k)`.
    pub fn to_expr(&self, arena: &mut ExprArena) -> ExprHandle {
        let terms: Vec<_> = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(k, c)| {
                let power = arena.pow(self.variable, u32::try_from(k).unwrap_or(u32::MAX));
                arena.mul([*c, power])
            })
            .collect();
        arena.add(terms)
    }

    /// The coefficients as exact rationals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if a coefficient is not a constant.
    pub fn constant_coefficients(&self, arena: &ExprArena) -> Result<Vec<Rational>> {
        self.coeffs
            .iter()
            .map(|c| {
                arena.as_constant(*c).cloned().ok_or_else(|| {
                    Error::Unsupported(format!(
                        "numeric roots need constant coefficients, found `{}`",
                        arena.display(*c)
                    ))
                })
            })
            .collect()
    }
}

/// Reads `expr` as a polynomial in the symbol `t`.
///
/// Coefficients are expanded.
///
/// # Errors
///
/// Returns [`Error::NotPolynomial`] if `t` occurs in a denominator or
/// under a function, and [`Error::Unsupported`] if `t` is not a symbol.
pub fn to_polynomial(arena: &mut ExprArena, expr: ExprHandle, t: ExprHandle) -> Result<Polynomial> {
    let var = arena
        .symbol_id(t)
        .ok_or_else(|| Error::Unsupported("polynomial variable must be a symbol".into()))?;

    let mut memo = FxHashMap::default();
    let coeffs = collect(arena, expr, var, &mut memo)?;
    let coeffs = coeffs
        .into_iter()
        .map(|c| arena.expand(c))
        .collect::<Result<Vec<_>>>()?;

    let poly = Polynomial::new(arena, t, coeffs);
    debug!(
        variable = arena.symbol_name(var),
        degree = poly.degree(),
        "extracted polynomial"
    );
    Ok(poly)
}

fn collect(
    arena: &mut ExprArena,
    expr: ExprHandle,
    var: SymbolId,
    memo: &mut FxHashMap<ExprHandle, Vec<ExprHandle>>,
) -> Result<Vec<ExprHandle>> {
    if let Some(done) = memo.get(&expr) {
        return Ok(done.clone());
    }
    if !arena.depends_on(expr, var) {
        return Ok(vec![expr]);
    }

    let coeffs = match arena.get(expr).clone() {
        ExprNode::Symbol(_) => {
            let zero = arena.zero();
            let one = arena.one();
            vec![zero, one]
        }
        ExprNode::Add(args) => {
            let mut acc = Vec::new();
            for arg in args {
                let part = collect(arena, arg, var, memo)?;
                acc = add_coeffs(arena, &acc, &part);
            }
            acc
        }
        ExprNode::Mul(args) => {
            let mut acc = vec![arena.one()];
            for arg in args {
                let part = collect(arena, arg, var, memo)?;
                acc = mul_coeffs(arena, &acc, &part);
            }
            acc
        }
        ExprNode::Pow { base, exp } => {
            let base = collect(arena, base, var, memo)?;
            let mut acc = base.clone();
            for _ in 1..exp {
                acc = mul_coeffs(arena, &acc, &base);
            }
            acc
        }
        ExprNode::Div { num, den } => {
            if arena.depends_on(den, var) {
                return Err(not_polynomial(arena, var, "it occurs in a denominator"));
            }
            let num = collect(arena, num, var, memo)?;
            num.into_iter()
                .map(|c| arena.div(c, den))
                .collect::<Result<Vec<_>>>()?
        }
        ExprNode::Function { .. } => {
            return Err(not_polynomial(arena, var, "it occurs inside a function"));
        }
        ExprNode::Constant(_) => vec![expr],
    };

    memo.insert(expr, coeffs.clone());
    Ok(coeffs)
}

fn add_coeffs(arena: &mut ExprArena, a: &[ExprHandle], b: &[ExprHandle]) -> Vec<ExprHandle> {
    (0..a.len().max(b.len()))
        .map(|k| match (a.get(k), b.get(k)) {
            (Some(x), Some(y)) => arena.add([*x, *y]),
            (Some(x), None) | (None, Some(x)) => *x,
            (None, None) => arena.zero(),
        })
        .collect()
}

fn mul_coeffs(arena: &mut ExprArena, a: &[ExprHandle], b: &[ExprHandle]) -> Vec<ExprHandle> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut terms: Vec<Vec<ExprHandle>> = vec![Vec::new(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            terms[i + j].push(arena.mul([*x, *y]));
        }
    }
    terms.into_iter().map(|sum| arena.add(sum)).collect()
}

fn not_polynomial(arena: &ExprArena, var: SymbolId, reason: &str) -> Error {
    Error::NotPolynomial {
        variable: arena.symbol_name(var).to_string(),
        reason: reason.to_string(),
    }
}
