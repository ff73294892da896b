//! Numeric evaluation for checking derived formulas.

use rustc_hash::FxHashMap;

use crate::arena::ExprArena;
use crate::error::{Error, Result};
use crate::expr::{functions, ExprNode};
use crate::handle::{ExprHandle, SymbolId};

/// Numeric values for symbols.
pub type Values = FxHashMap<SymbolId, f64>;

impl ExprArena {
    /// Builds a [`Values`] map from `(name, value)` pairs.
    ///
    /// Names never interned in this arena cannot occur in its expressions
    /// and are skipped.
    #[must_use]
    pub fn values(&self, pairs: &[(&str, f64)]) -> Values {
        pairs
            .iter()
            .filter_map(|&(name, value)| self.symbols().lookup(name).map(|id| (id, value)))
            .collect()
    }

    /// Evaluates `expr` in double precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnboundSymbol`] if a symbol has no value.
    pub fn evaluate(&self, expr: ExprHandle, values: &Values) -> Result<f64> {
        let mut memo = FxHashMap::default();
        self.evaluate_rec(expr, values, &mut memo)
    }

    fn evaluate_rec(
        &self,
        expr: ExprHandle,
        values: &Values,
        memo: &mut FxHashMap<ExprHandle, f64>,
    ) -> Result<f64> {
        if let Some(&done) = memo.get(&expr) {
            return Ok(done);
        }

        let value = match self.get(expr) {
            ExprNode::Constant(c) => c.to_f64(),
            ExprNode::Symbol(id) => *values
                .get(id)
                .ok_or_else(|| Error::UnboundSymbol(self.symbol_name(*id).to_string()))?,
            ExprNode::Add(args) => {
                let mut sum = 0.0;
                for arg in args {
                    sum += self.evaluate_rec(*arg, values, memo)?;
                }
                sum
            }
            ExprNode::Mul(args) => {
                let mut product = 1.0;
                for arg in args {
                    product *= self.evaluate_rec(*arg, values, memo)?;
                }
                product
            }
            ExprNode::Pow { base, exp } => {
                let base = self.evaluate_rec(*base, values, memo)?;
                base.powi(i32::try_from(*exp).unwrap_or(i32::MAX))
            }
            ExprNode::Div { num, den } => {
                self.evaluate_rec(*num, values, memo)? / self.evaluate_rec(*den, values, memo)?
            }
            ExprNode::Function { id, arg } => {
                let arg = self.evaluate_rec(*arg, values, memo)?;
                match *id {
                    functions::SQRT => arg.sqrt(),
                    other => {
                        return Err(Error::Unsupported(format!(
                            "cannot evaluate function `{}`",
                            functions::name(other)
                        )))
                    }
                }
            }
        };

        memo.insert(expr, value);
        Ok(value)
    }
}
