//! # bezsym-bezier
//!
//! Bezier curves and patches over symbolic control points.
//!
//! This crate provides:
//! - The Bernstein basis of any degree
//! - Curve evaluation for scalar and vector control points
//! - Hodographs (derivative curves) of any order
//! - Tensor-product patches and their partial derivatives
//! - Geometric conditions whose roots locate inflections and silhouettes
//!
//! ## Example
//!
//! ```
//! use bezsym_bezier::{bernstein_basis, evaluate_curve};
//! use bezsym_core::ExprArena;
//!
//! let mut arena = ExprArena::new();
//! let [t, p1, p2, p3] = arena.symbols_from(["t", "p1", "p2", "p3"]);
//! let basis = bernstein_basis(&mut arena, 2, t);
//! let point = evaluate_curve(&mut arena, &[p1, p2, p3], &basis).unwrap();
//! assert_eq!(
//!     arena.display(point).to_string(),
//!     "p1 - 2*p1*t + p1*t^2 + 2*p2*t - 2*p2*t^2 + p3*t^2"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod curve;
pub mod geometry;
pub mod hodograph;
pub mod patch;
pub mod point;

#[cfg(test)]
mod proptests;

pub use basis::bernstein_basis;
pub use curve::{evaluate_curve, Curve};
pub use hodograph::{hodograph, nth_derivative};
pub use patch::Patch;
pub use point::ControlPoint;
