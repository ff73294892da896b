//! Geometric conditions on curves and patches.
//!
//! Each function returns an expanded expression in the curve or surface
//! parameters. Their zeros are the features named: inflections are where
//! the curvature numerator vanishes, silhouettes are where the view ray is
//! tangent to the curve or surface.

use bezsym_core::{ExprArena, ExprHandle, Result};
use bezsym_vector::{Vector2, Vector3};

use crate::curve::Curve;
use crate::patch::Patch;

/// `p'(t) x p''(t)` for a planar curve, the numerator of its signed
/// curvature.
///
/// # Errors
///
/// Propagates expansion errors.
pub fn curvature_numerator_2d(
    arena: &mut ExprArena,
    curve: &Curve<Vector2>,
    t: ExprHandle,
) -> Result<ExprHandle> {
    let d1 = curve.tangent(arena, t)?;
    let d2 = curve.derivative_at(arena, t, 2)?;
    let cross = d1.cross2d(arena, d2);
    arena.expand(cross)
}

/// `p'(t) x p''(t)` for a spatial curve. Its length over `|p'|^3` is the
/// curvature.
///
/// # Errors
///
/// Propagates expansion errors.
pub fn curvature_numerator_3d(
    arena: &mut ExprArena,
    curve: &Curve<Vector3>,
    t: ExprHandle,
) -> Result<Vector3> {
    let d1 = curve.tangent(arena, t)?;
    let d2 = curve.derivative_at(arena, t, 2)?;
    d1.cross3d(arena, d2).expand(arena)
}

/// A scalar whose zeros in `t` are the inflection points of a planar curve.
///
/// # Errors
///
/// Propagates expansion errors.
pub fn inflection_condition(
    arena: &mut ExprArena,
    curve: &Curve<Vector2>,
    t: ExprHandle,
) -> Result<ExprHandle> {
    curvature_numerator_2d(arena, curve, t)
}

/// The components of `p'(t) x p''(t)` that are not identically zero, for a
/// spatial curve. Inflections are the common zeros of every returned
/// component; an empty list means the curve is a straight line.
///
/// # Errors
///
/// Propagates expansion errors.
pub fn inflection_conditions_3d(
    arena: &mut ExprArena,
    curve: &Curve<Vector3>,
    t: ExprHandle,
) -> Result<Vec<ExprHandle>> {
    let cross = curvature_numerator_3d(arena, curve, t)?;
    Ok(cross
        .components()
        .iter()
        .copied()
        .filter(|&c| !arena.is_zero(c))
        .collect())
}

/// `(p(t) - view) . perp(p'(t))`, zero where the line of sight from `view`
/// touches the curve.
///
/// # Errors
///
/// Propagates expansion errors.
pub fn silhouette_condition_2d(
    arena: &mut ExprArena,
    curve: &Curve<Vector2>,
    view: Vector2,
    t: ExprHandle,
) -> Result<ExprHandle> {
    let point = curve.point(arena, t)?;
    let normal = curve.tangent(arena, t)?.perp(arena);
    let ray = point.sub(arena, view);
    let dot = ray.dot(arena, normal);
    arena.expand(dot)
}

/// `(S(u, v) - view) . (S_u x S_v)`, zero where the line of sight from
/// `view` grazes the surface.
///
/// # Errors
///
/// Propagates expansion errors.
pub fn silhouette_condition_patch(
    arena: &mut ExprArena,
    patch: &Patch<Vector3>,
    view: Vector3,
    u: ExprHandle,
    v: ExprHandle,
) -> Result<ExprHandle> {
    let point = patch.evaluate(arena, u, v)?;
    let normal = patch.normal(arena, u, v)?;
    let ray = point.sub(arena, view);
    let dot = ray.dot(arena, normal);
    arena.expand(dot)
}
