//! # bezsym-core
//!
//! Expression engine for deriving Bezier geometry formulas.
//!
//! This crate provides:
//! - Arena-allocated expression storage with hash-consing
//! - Canonicalising constructors, so equal formulas share one handle
//! - Differentiation, substitution and expansion
//! - Numeric evaluation for checking derived formulas
//! - Infix rendering
//!
//! ## Design Principles
//!
//! - **Hash-Consing**: every structurally unique expression is stored once,
//!   so subtree equality is handle equality
//! - **Immutable Nodes**: operations build new nodes and never rewrite old ones
//! - **Zero-Cost Handles**: 32-bit indices instead of pointers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod calculus;
pub mod display;
pub mod error;
pub mod eval;
pub mod expand;
pub mod expr;
pub mod handle;
pub mod intern;
pub mod order;
pub mod substitute;

#[cfg(test)]
mod proptests;

pub use arena::ExprArena;
pub use display::{NumberStyle, PowerStyle, PrintOptions, Printer};
pub use error::{Error, Result};
pub use eval::Values;
pub use expr::{ExprNode, FunctionId};
pub use handle::{ExprHandle, SymbolId};
pub use substitute::Bindings;

pub use bezsym_integers::Rational;
