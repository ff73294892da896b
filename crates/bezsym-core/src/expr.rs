//! Expression node types.
//!
//! Nodes are stored once in the arena and refer to their children by
//! handle. Only the canonicalising constructors on
//! [`ExprArena`](crate::ExprArena) should build compound nodes; the
//! invariants listed on each variant are theirs.

use bezsym_integers::Rational;
use smallvec::SmallVec;

use crate::handle::{ExprHandle, SymbolId};

/// Argument list of a sum or product.
pub type Args = SmallVec<[ExprHandle; 4]>;

/// Identifier of a built-in function.
pub type FunctionId = u32;

/// An expression node stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprNode {
    // === Atoms ===
    /// An exact rational constant.
    Constant(Rational),

    /// A named symbol.
    Symbol(SymbolId),

    // === Compound expressions ===
    /// Sum `a + b + ...`.
    ///
    /// Invariant: at least 2 arguments, none of them an `Add`, at most one
    /// constant, no two terms differing only in their coefficient, sorted.
    Add(Args),

    /// Product `a * b * ...`.
    ///
    /// Invariant: at least 2 arguments, none of them a `Mul`, at most one
    /// constant (first, never 0 or 1), no repeated base, sorted.
    Mul(Args),

    /// Power `base^exp` with a non-negative integer exponent.
    ///
    /// Invariant: `exp >= 2`, and `base` is neither a constant, a `Mul`
    /// nor a `Pow`.
    Pow {
        /// The base.
        base: ExprHandle,
        /// The exponent.
        exp: u32,
    },

    /// Quotient `num / den`.
    ///
    /// Invariant: `den` is not a constant.
    Div {
        /// The numerator.
        num: ExprHandle,
        /// The denominator.
        den: ExprHandle,
    },

    /// A built-in function applied to one argument.
    Function {
        /// The function identifier.
        id: FunctionId,
        /// The argument.
        arg: ExprHandle,
    },
}

impl ExprNode {
    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, ExprNode::Constant(_) | ExprNode::Symbol(_))
    }

    /// Returns the constant value, if this is a constant.
    #[must_use]
    pub fn as_constant(&self) -> Option<&Rational> {
        match self {
            ExprNode::Constant(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the symbol id, if this is a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<SymbolId> {
        match self {
            ExprNode::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the children of this node in argument order.
    #[must_use]
    pub fn children(&self) -> Args {
        match self {
            ExprNode::Constant(_) | ExprNode::Symbol(_) => SmallVec::new(),
            ExprNode::Add(args) | ExprNode::Mul(args) => args.clone(),
            ExprNode::Pow { base, .. } => smallvec::smallvec![*base],
            ExprNode::Div { num, den } => smallvec::smallvec![*num, *den],
            ExprNode::Function { arg, .. } => smallvec::smallvec![*arg],
        }
    }
}

/// Built-in function identifiers.
pub mod functions {
    use super::FunctionId;

    /// Square root.
    pub const SQRT: FunctionId = 0;

    /// Returns the printable name of a function.
    #[must_use]
    pub fn name(id: FunctionId) -> &'static str {
        match id {
            SQRT => "sqrt",
            _ => "unknown",
        }
    }
}
