//! Univariate equations over bezsym expressions.
//!
//! This crate turns a scalar expression into a polynomial in one variable
//! and solves it:
//!
//! - **Extraction**: coefficients by degree, each free of the variable
//! - **Numeric roots**: closed forms up to the quartic
//! - **Symbolic roots**: linear and quadratic formulas as expressions, for
//!   compiling into code
//!
//! # Example
//!
//! ```
//! use bezsym_core::ExprArena;
//! use bezsym_solve::{real_roots, to_polynomial};
//!
//! let mut arena = ExprArena::new();
//! let t = arena.symbol("t");
//! let t2 = arena.pow(t, 2);
//! let three = arena.integer(-3);
//! let linear = arena.mul([three, t]);
//! let two = arena.integer(2);
//! let expr = arena.add([t2, linear, two]);
//!
//! let poly = to_polynomial(&mut arena, expr, t).unwrap();
//! assert_eq!(poly.degree(), 2);
//! assert_eq!(real_roots(&arena, &poly).unwrap(), vec![1.0, 2.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod formulas;
pub mod polynomial;
pub mod roots;
mod squarefree;

#[cfg(test)]
mod proptests;

pub use formulas::root_formulas;
pub use polynomial::{to_polynomial, Polynomial};
pub use roots::real_roots;
