//! Distribution of products over sums.

use rustc_hash::FxHashMap;

use crate::arena::ExprArena;
use crate::error::Result;
use crate::expr::{Args, ExprNode};
use crate::handle::ExprHandle;

impl ExprArena {
    /// Expands products of sums and integer powers of sums.
    ///
    /// For polynomial input the result is a canonical sum of monomials, so
    /// two expansions of the same polynomial share a handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`](crate::Error::DivisionByZero) only
    /// if a quotient's denominator expands to zero.
    pub fn expand(&mut self, expr: ExprHandle) -> Result<ExprHandle> {
        let mut memo = FxHashMap::default();
        self.expand_rec(expr, &mut memo)
    }

    fn expand_rec(
        &mut self,
        expr: ExprHandle,
        memo: &mut FxHashMap<ExprHandle, ExprHandle>,
    ) -> Result<ExprHandle> {
        if let Some(&done) = memo.get(&expr) {
            return Ok(done);
        }

        let result = match self.get(expr).clone() {
            ExprNode::Constant(_) | ExprNode::Symbol(_) => expr,
            ExprNode::Add(args) => {
                let mut terms = Args::new();
                for arg in args {
                    terms.push(self.expand_rec(arg, memo)?);
                }
                self.add(terms)
            }
            ExprNode::Mul(args) => {
                let mut acc = self.one();
                for arg in args {
                    let factor = self.expand_rec(arg, memo)?;
                    acc = self.distribute(acc, factor);
                }
                acc
            }
            ExprNode::Pow { base, exp } => {
                let base = self.expand_rec(base, memo)?;
                if matches!(self.get(base), ExprNode::Add(_)) {
                    let mut acc = base;
                    for _ in 1..exp {
                        acc = self.distribute(acc, base);
                    }
                    acc
                } else {
                    self.pow(base, exp)
                }
            }
            ExprNode::Div { num, den } => {
                let num = self.expand_rec(num, memo)?;
                let den = self.expand_rec(den, memo)?;
                self.div(num, den)?
            }
            ExprNode::Function { id, arg } => {
                let arg = self.expand_rec(arg, memo)?;
                self.function(id, arg)
            }
        };

        memo.insert(expr, result);
        Ok(result)
    }

    /// Multiplies two expanded expressions term by term.
    fn distribute(&mut self, a: ExprHandle, b: ExprHandle) -> ExprHandle {
        let left = self.terms_of(a);
        let right = self.terms_of(b);
        let mut products = Vec::with_capacity(left.len() * right.len());
        for &l in &left {
            for &r in &right {
                products.push(self.mul([l, r]));
            }
        }
        self.add(products)
    }

    /// Returns the terms of a sum, or the expression itself.
    #[must_use]
    pub fn terms_of(&self, expr: ExprHandle) -> Args {
        match self.get(expr) {
            ExprNode::Add(args) => args.clone(),
            _ => smallvec::smallvec![expr],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_square_of_sum() {
        let mut arena = ExprArena::new();
        let [a, b] = arena.symbols_from(["a", "b"]);
        let sum = arena.add([a, b]);
        let square = arena.mul([sum, sum]);
        let expanded = arena.expand(square).unwrap();

        let a2 = arena.pow(a, 2);
        let b2 = arena.pow(b, 2);
        let two = arena.integer(2);
        let ab2 = arena.mul([two, a, b]);
        assert_eq!(expanded, arena.add([a2, ab2, b2]));
    }

    #[test]
    fn test_expand_cancels() {
        let mut arena = ExprArena::new();
        let [a, b] = arena.symbols_from(["a", "b"]);
        let sum = arena.add([a, b]);
        let diff = arena.sub(a, b);
        let product = arena.mul([sum, diff]);
        let expanded = arena.expand(product).unwrap();

        let a2 = arena.pow(a, 2);
        let b2 = arena.pow(b, 2);
        assert_eq!(expanded, arena.sub(a2, b2));
    }

    #[test]
    fn test_expansion_is_canonical() {
        let mut arena = ExprArena::new();
        let t = arena.symbol("t");
        let one = arena.one();
        let one_minus_t = arena.sub(one, t);
        let cubed = arena.pow(one_minus_t, 3);
        let by_parts = {
            let squared = arena.pow(one_minus_t, 2);
            let squared = arena.expand(squared).unwrap();
            let product = arena.mul([squared, one_minus_t]);
            arena.expand(product).unwrap()
        };
        assert_eq!(arena.expand(cubed).unwrap(), by_parts);
    }
}
