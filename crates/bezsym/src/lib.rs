//! # bezsym
//!
//! Derives closed-form formulas for Bezier curves and tensor-product
//! patches over symbolic control points, and compiles them into
//! straight-line code.
//!
//! ## Features
//!
//! - **Canonical Expressions**: hash-consed arena where equal formulas share a handle
//! - **Exact Constants**: arbitrary-precision rationals throughout
//! - **Bezier Calculus**: Bernstein bases, hodographs, patches, curvature and silhouettes
//! - **Bounded Solving**: polynomial extraction with closed-form roots up to the quartic
//! - **Code Generation**: common-subexpression elimination and emission
//!
//! ## Quick Start
//!
//! ```
//! use bezsym::prelude::*;
//!
//! let mut arena = ExprArena::new();
//! let t = arena.symbol("t");
//! let points = ["p1", "p2", "p3"].map(|name| arena.symbol(name)).to_vec();
//! let curve = Curve::new(points).unwrap();
//!
//! let point = curve.point(&mut arena, t).unwrap();
//! let tangent = curve.tangent(&mut arena, t).unwrap();
//! let cse = eliminate_common_subexpressions(&mut arena, &[point, tangent], &CseConfig::default())
//!     .unwrap();
//! let code = emit(&arena, &cse, &EmitConfig::default().with_dialect(Dialect::Rust)).unwrap();
//! assert!(code.contains("let r1 = "));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use bezsym_bezier as bezier;
pub use bezsym_codegen as codegen;
pub use bezsym_core as core;
pub use bezsym_integers as integers;
pub use bezsym_solve as solve;
pub use bezsym_vector as vector;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bezsym_bezier::geometry::{
        curvature_numerator_2d, curvature_numerator_3d, inflection_condition, inflection_conditions_3d,
        silhouette_condition_2d, silhouette_condition_patch,
    };
    pub use bezsym_bezier::{
        bernstein_basis, evaluate_curve, hodograph, nth_derivative, ControlPoint, Curve, Patch,
    };
    pub use bezsym_codegen::{
        eliminate_common_subexpressions, emit, CseConfig, CseResult, Dialect, EmitConfig,
        Temporary,
    };
    pub use bezsym_core::{Error, ExprArena, ExprHandle, ExprNode, Result};
    pub use bezsym_integers::Rational;
    pub use bezsym_solve::{real_roots, root_formulas, to_polynomial, Polynomial};
    pub use bezsym_vector::{Vector, Vector2, Vector3};
}
