//! Symbolic differentiation.
//!
//! The rule set is the one needed for polynomial geometry: sums, products,
//! integer powers, quotients and the square root. Anything else is
//! reported as [`Error::Unsupported`].

use rustc_hash::FxHashMap;

use crate::arena::ExprArena;
use crate::error::{Error, Result};
use crate::expr::{functions, Args, ExprNode};
use crate::handle::{ExprHandle, SymbolId};

impl ExprArena {
    /// Returns true if `expr` contains the symbol `var`.
    #[must_use]
    pub fn depends_on(&self, expr: ExprHandle, var: SymbolId) -> bool {
        let mut stack = vec![expr];
        let mut seen = rustc_hash::FxHashSet::default();
        while let Some(h) = stack.pop() {
            if !seen.insert(h) {
                continue;
            }
            match self.get(h) {
                ExprNode::Symbol(id) if *id == var => return true,
                node => stack.extend(node.children()),
            }
        }
        false
    }

    /// Differentiates `expr` with respect to the symbol `var`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if `var` is not a symbol or a function
    /// without a derivative rule depends on it.
    pub fn derivative(&mut self, expr: ExprHandle, var: ExprHandle) -> Result<ExprHandle> {
        let id = self
            .symbol_id(var)
            .ok_or_else(|| Error::Unsupported("differentiation variable must be a symbol".into()))?;
        let mut memo = FxHashMap::default();
        self.derive(expr, id, &mut memo)
    }

    /// Differentiates `order` times. Order 0 returns `expr` unchanged.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`ExprArena::derivative`].
    pub fn nth_derivative(
        &mut self,
        expr: ExprHandle,
        var: ExprHandle,
        order: usize,
    ) -> Result<ExprHandle> {
        let mut current = expr;
        for _ in 0..order {
            current = self.derivative(current, var)?;
        }
        Ok(current)
    }

    fn derive(
        &mut self,
        expr: ExprHandle,
        var: SymbolId,
        memo: &mut FxHashMap<ExprHandle, ExprHandle>,
    ) -> Result<ExprHandle> {
        if let Some(&done) = memo.get(&expr) {
            return Ok(done);
        }
        if !self.depends_on(expr, var) {
            let zero = self.zero();
            memo.insert(expr, zero);
            return Ok(zero);
        }

        let result = match self.get(expr).clone() {
            // Only the variable itself reaches here.
            ExprNode::Symbol(_) => self.one(),
            ExprNode::Constant(_) => self.zero(),
            ExprNode::Add(args) => {
                let mut terms = Args::new();
                for arg in args {
                    terms.push(self.derive(arg, var, memo)?);
                }
                self.add(terms)
            }
            ExprNode::Mul(args) => {
                // Leibniz: sum over i of f_i' * prod_{j != i} f_j
                let mut terms = Args::new();
                for (i, arg) in args.iter().enumerate() {
                    let d = self.derive(*arg, var, memo)?;
                    if self.is_zero(d) {
                        continue;
                    }
                    let mut factors: Args = args
                        .iter()
                        .enumerate()
                        .filter(|(j, _)| *j != i)
                        .map(|(_, f)| *f)
                        .collect();
                    factors.push(d);
                    terms.push(self.mul(factors));
                }
                self.add(terms)
            }
            ExprNode::Pow { base, exp } => {
                let d = self.derive(base, var, memo)?;
                let lowered = self.pow(base, exp - 1);
                let n = self.integer(i64::from(exp));
                self.mul([n, lowered, d])
            }
            ExprNode::Div { num, den } => {
                // (n' d - n d') / d^2
                let dn = self.derive(num, var, memo)?;
                let dd = self.derive(den, var, memo)?;
                let left = self.mul([dn, den]);
                let right = self.mul([num, dd]);
                let top = self.sub(left, right);
                let bottom = self.pow(den, 2);
                self.div(top, bottom)?
            }
            ExprNode::Function { id, arg } if id == functions::SQRT => {
                // sqrt(u)' = u' / (2 sqrt(u))
                let du = self.derive(arg, var, memo)?;
                let two = self.integer(2);
                let den = self.mul([two, expr]);
                self.div(du, den)?
            }
            ExprNode::Function { id, .. } => {
                return Err(Error::Unsupported(format!(
                    "no derivative rule for function `{}`",
                    functions::name(id)
                )));
            }
        };

        memo.insert(expr, result);
        Ok(result)
    }
}
