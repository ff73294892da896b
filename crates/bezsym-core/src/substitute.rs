//! Substitution of symbols by expressions.
//!
//! Substitution rebuilds the tree bottom-up through the canonicalising
//! constructors, so constants fold and like terms collect again after the
//! replacement.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::arena::ExprArena;
use crate::error::{Error, Result};
use crate::expr::{Args, ExprNode};
use crate::handle::{ExprHandle, SymbolId};

/// A mapping from symbols to replacement expressions.
pub type Bindings = FxHashMap<SymbolId, ExprHandle>;

impl ExprArena {
    /// Builds a [`Bindings`] map from `(symbol, replacement)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if a key is not a symbol.
    pub fn bindings(&self, pairs: &[(ExprHandle, ExprHandle)]) -> Result<Bindings> {
        pairs
            .iter()
            .map(|&(key, value)| {
                self.symbol_id(key)
                    .map(|id| (id, value))
                    .ok_or_else(|| Error::Unsupported("only symbols can be substituted".into()))
            })
            .collect()
    }

    /// Replaces symbols according to `pairs`, in one simultaneous pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for non-symbol keys and
    /// [`Error::DivisionByZero`] if a denominator folds to zero.
    pub fn substitute(
        &mut self,
        expr: ExprHandle,
        pairs: &[(ExprHandle, ExprHandle)],
    ) -> Result<ExprHandle> {
        let bindings = self.bindings(pairs)?;
        self.substitute_bindings(expr, &bindings)
    }

    /// Replaces symbols according to a prepared [`Bindings`] map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if a denominator folds to zero.
    pub fn substitute_bindings(
        &mut self,
        expr: ExprHandle,
        bindings: &Bindings,
    ) -> Result<ExprHandle> {
        let mut memo = FxHashMap::default();
        self.rebuild(expr, bindings, &mut memo)
    }

    /// Substitutes repeatedly until no bound symbol remains.
    ///
    /// This resolves chained definitions such as second differences written
    /// in terms of first differences written in terms of control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if the bindings are cyclic.
    pub fn substitute_fixed_point(
        &mut self,
        expr: ExprHandle,
        pairs: &[(ExprHandle, ExprHandle)],
    ) -> Result<ExprHandle> {
        let bindings = self.bindings(pairs)?;
        let mut current = expr;
        // An acyclic chain resolves in at most one pass per binding.
        for _ in 0..=bindings.len() {
            let bound_left = self
                .free_symbols(current)
                .into_iter()
                .any(|id| bindings.contains_key(&id));
            if !bound_left {
                return Ok(current);
            }
            current = self.substitute_bindings(current, &bindings)?;
        }
        Err(Error::Unsupported("cyclic substitution".into()))
    }

    /// Replaces whole subexpressions, matched by handle, and rebuilds the
    /// rest of the tree around them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if a denominator folds to zero.
    pub fn replace(
        &mut self,
        expr: ExprHandle,
        replacements: &FxHashMap<ExprHandle, ExprHandle>,
    ) -> Result<ExprHandle> {
        // Seeded entries short-circuit the rebuild at the replaced roots.
        let mut memo = replacements.clone();
        self.rebuild(expr, &Bindings::default(), &mut memo)
    }

    /// Sets every listed symbol to zero.
    ///
    /// # Errors
    ///
    /// Same as [`ExprArena::substitute`].
    pub fn zero_symbols(&mut self, expr: ExprHandle, symbols: &[ExprHandle]) -> Result<ExprHandle> {
        let zero = self.zero();
        let pairs: Vec<_> = symbols.iter().map(|&s| (s, zero)).collect();
        self.substitute(expr, &pairs)
    }

    /// Returns the symbols occurring in `expr`, in first-visit order.
    #[must_use]
    pub fn free_symbols(&self, expr: ExprHandle) -> Vec<SymbolId> {
        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        self.collect_symbols(expr, &mut seen, &mut out);
        out
    }

    fn collect_symbols(
        &self,
        expr: ExprHandle,
        seen: &mut FxHashSet<ExprHandle>,
        out: &mut Vec<SymbolId>,
    ) {
        if !seen.insert(expr) {
            return;
        }
        match self.get(expr) {
            ExprNode::Symbol(id) => out.push(*id),
            node => {
                for child in node.children() {
                    self.collect_symbols(child, seen, out);
                }
            }
        }
    }

    fn rebuild(
        &mut self,
        expr: ExprHandle,
        bindings: &Bindings,
        memo: &mut FxHashMap<ExprHandle, ExprHandle>,
    ) -> Result<ExprHandle> {
        if let Some(&done) = memo.get(&expr) {
            return Ok(done);
        }

        let result = match self.get(expr).clone() {
            ExprNode::Constant(_) => expr,
            ExprNode::Symbol(id) => bindings.get(&id).copied().unwrap_or(expr),
            ExprNode::Add(args) => {
                let rebuilt = self.rebuild_all(&args, bindings, memo)?;
                self.add(rebuilt)
            }
            ExprNode::Mul(args) => {
                let rebuilt = self.rebuild_all(&args, bindings, memo)?;
                self.mul(rebuilt)
            }
            ExprNode::Pow { base, exp } => {
                let base = self.rebuild(base, bindings, memo)?;
                self.pow(base, exp)
            }
            ExprNode::Div { num, den } => {
                let num = self.rebuild(num, bindings, memo)?;
                let den = self.rebuild(den, bindings, memo)?;
                self.div(num, den)?
            }
            ExprNode::Function { id, arg } => {
                let arg = self.rebuild(arg, bindings, memo)?;
                self.function(id, arg)
            }
        };

        memo.insert(expr, result);
        Ok(result)
    }

    fn rebuild_all(
        &mut self,
        args: &[ExprHandle],
        bindings: &Bindings,
        memo: &mut FxHashMap<ExprHandle, ExprHandle>,
    ) -> Result<Args> {
        args.iter()
            .map(|&arg| self.rebuild(arg, bindings, memo))
            .collect()
    }
}
