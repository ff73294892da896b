//! # bezsym-integers
//!
//! Exact rational arithmetic for the constants of bezsym expressions.
//!
//! This crate wraps `dashu` to provide a `Rational` that is hashable and
//! totally ordered, so constants can live inside hash-consed expression
//! nodes without breaking structural equality.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::Rational;
