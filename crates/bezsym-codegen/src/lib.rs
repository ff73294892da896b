//! # bezsym-codegen
//!
//! Compiles derived formulas into straight-line code.
//!
//! [`eliminate_common_subexpressions`] hoists repeated subtrees into
//! numbered temporaries, and [`emit`] renders the temporaries followed by
//! the results as assignments in a target [`Dialect`].
//!
//! # Example
//!
//! ```
//! use bezsym_codegen::{eliminate_common_subexpressions, emit, CseConfig, EmitConfig};
//! use bezsym_core::ExprArena;
//!
//! let mut arena = ExprArena::new();
//! let [a, b] = arena.symbols_from(["a", "b"]);
//! let sum = arena.add([a, b]);
//! let e1 = arena.mul([sum, sum]);
//! let two = arena.integer(2);
//! let e2 = arena.mul([sum, two]);
//!
//! let cse = eliminate_common_subexpressions(&mut arena, &[e1, e2], &CseConfig::default()).unwrap();
//! let code = emit(&arena, &cse, &EmitConfig::default()).unwrap();
//! assert_eq!(code, "a0 = a + b\nr0 = a0^2\nr1 = 2*a0\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cse;
pub mod emit;

#[cfg(test)]
mod proptests;

pub use cse::{eliminate_common_subexpressions, CseConfig, CseResult, Temporary};
pub use emit::{emit, Dialect, EmitConfig};
