//! Error type shared by every bezsym crate.

use thiserror::Error;

/// Errors raised while deriving, solving or compiling expressions.
///
/// All of these are derivation errors: they are returned to the immediate
/// caller and never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A control-point sequence does not match the degree it is used with.
    #[error("invalid degree: expected {expected} control points, found {found}")]
    InvalidDegree {
        /// Number of points (or basis terms) required.
        expected: usize,
        /// Number actually supplied.
        found: usize,
    },

    /// The expression cannot be read as a polynomial in the variable.
    #[error("expression is not a polynomial in `{variable}`: {reason}")]
    NotPolynomial {
        /// Name of the polynomial variable.
        variable: String,
        /// What made the expression non-polynomial.
        reason: String,
    },

    /// An operation outside the supported rule set.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// A division whose denominator folded to the constant zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Numeric evaluation met a symbol without a value.
    #[error("no value bound for symbol `{0}`")]
    UnboundSymbol(String),
}

/// Result alias used throughout bezsym.
pub type Result<T, E = Error> = std::result::Result<T, E>;
