//! Deterministic structural ordering of expressions.
//!
//! Sums and products sort their arguments with these comparisons so that
//! commuted inputs intern to a single node. The order is also the printing
//! order: constants first, then terms lexicographically by their factors
//! with lower powers first, e.g. `p1 - 2*p1*t + p1*t^2 + 2*p2*t`.

use std::cmp::Ordering;

use bezsym_integers::Rational;
use num_traits::One;

use crate::arena::ExprArena;
use crate::expr::{Args, ExprNode};
use crate::handle::ExprHandle;

impl ExprArena {
    /// Total order on the terms of a sum.
    #[must_use]
    pub fn compare_terms(&self, a: ExprHandle, b: ExprHandle) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        match (self.as_constant(a), self.as_constant(b)) {
            (Some(x), Some(y)) => return x.cmp(y),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }

        let (coeff_a, factors_a) = self.coefficient_and_factors(a);
        let (coeff_b, factors_b) = self.coefficient_and_factors(b);

        for (fa, fb) in factors_a.iter().zip(factors_b.iter()) {
            match self.compare_factors(*fa, *fb) {
                Ordering::Equal => {}
                other => return other,
            }
        }
        factors_a
            .len()
            .cmp(&factors_b.len())
            .then_with(|| coeff_a.cmp(&coeff_b))
            .then_with(|| a.cmp(&b))
    }

    /// Total order on the factors of a product.
    #[must_use]
    pub fn compare_factors(&self, a: ExprHandle, b: ExprHandle) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        match (self.as_constant(a), self.as_constant(b)) {
            (Some(x), Some(y)) => return x.cmp(y),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }

        let (base_a, exp_a) = self.base_and_exponent(a);
        let (base_b, exp_b) = self.base_and_exponent(b);
        self.compare_bases(base_a, base_b)
            .then(exp_a.cmp(&exp_b))
            .then_with(|| a.cmp(&b))
    }

    fn compare_bases(&self, a: ExprHandle, b: ExprHandle) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let ordering = match (self.get(a), self.get(b)) {
            (ExprNode::Constant(x), ExprNode::Constant(y)) => x.cmp(y),
            (ExprNode::Symbol(x), ExprNode::Symbol(y)) => self
                .symbol_name(*x)
                .cmp(self.symbol_name(*y))
                .then(x.cmp(y)),
            (ExprNode::Add(xs), ExprNode::Add(ys)) => {
                self.compare_lists(xs, ys, Self::compare_terms)
            }
            (ExprNode::Mul(xs), ExprNode::Mul(ys)) => {
                self.compare_lists(xs, ys, Self::compare_factors)
            }
            (
                ExprNode::Pow { base: x, exp: ex },
                ExprNode::Pow { base: y, exp: ey },
            ) => self.compare_bases(*x, *y).then(ex.cmp(ey)),
            (ExprNode::Div { num: nx, den: dx }, ExprNode::Div { num: ny, den: dy }) => self
                .compare_terms(*nx, *ny)
                .then_with(|| self.compare_terms(*dx, *dy)),
            (
                ExprNode::Function { id: ix, arg: ax },
                ExprNode::Function { id: iy, arg: ay },
            ) => ix.cmp(iy).then_with(|| self.compare_terms(*ax, *ay)),
            (x, y) => rank(x).cmp(&rank(y)),
        };
        ordering.then_with(|| a.cmp(&b))
    }

    fn compare_lists(
        &self,
        xs: &[ExprHandle],
        ys: &[ExprHandle],
        cmp: fn(&Self, ExprHandle, ExprHandle) -> Ordering,
    ) -> Ordering {
        for (x, y) in xs.iter().zip(ys.iter()) {
            match cmp(self, *x, *y) {
                Ordering::Equal => {}
                other => return other,
            }
        }
        xs.len().cmp(&ys.len())
    }

    fn coefficient_and_factors(&self, term: ExprHandle) -> (Rational, Args) {
        if let ExprNode::Mul(args) = self.get(term) {
            if let Some(c) = self.as_constant(args[0]) {
                return (c.clone(), args[1..].iter().copied().collect());
            }
            return (Rational::one(), args.clone());
        }
        (Rational::one(), smallvec::smallvec![term])
    }

    fn base_and_exponent(&self, factor: ExprHandle) -> (ExprHandle, u32) {
        match self.get(factor) {
            ExprNode::Pow { base, exp } => (*base, *exp),
            _ => (factor, 1),
        }
    }
}

fn rank(node: &ExprNode) -> u8 {
    match node {
        ExprNode::Constant(_) => 0,
        ExprNode::Symbol(_) => 1,
        ExprNode::Function { .. } => 2,
        ExprNode::Div { .. } => 3,
        ExprNode::Pow { .. } => 4,
        ExprNode::Add(_) => 5,
        ExprNode::Mul(_) => 6,
    }
}
