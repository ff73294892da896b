//! # bezsym-vector
//!
//! Fixed-size vectors whose components are symbolic expressions.
//!
//! Every operation takes the arena explicitly and returns a new vector; no
//! numeric value is ever observed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod vector;

#[cfg(test)]
mod proptests;

pub use vector::{Vector, Vector2, Vector3};
