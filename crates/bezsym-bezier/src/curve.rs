//! Bezier curves over symbolic control points.

use bezsym_core::{Error, ExprArena, ExprHandle, Result};

use crate::basis::bernstein_basis;
use crate::hodograph::{hodograph, nth_derivative};
use crate::point::ControlPoint;

/// Evaluates `sum(points[i] * basis[i])` and expands the result.
///
/// # Errors
///
/// Returns [`Error::InvalidDegree`] if the lengths differ.
pub fn evaluate_curve<P: ControlPoint>(
    arena: &mut ExprArena,
    points: &[P],
    basis: &[ExprHandle],
) -> Result<P> {
    if points.len() != basis.len() {
        return Err(Error::InvalidDegree {
            expected: basis.len(),
            found: points.len(),
        });
    }

    let mut acc = P::zero(arena);
    for (point, weight) in points.iter().zip(basis) {
        let term = point.scale(arena, *weight);
        acc = acc.add(arena, term);
    }
    acc.expand(arena)
}

/// A Bezier curve of degree `points.len() - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve<P> {
    points: Vec<P>,
}

impl<P: ControlPoint> Curve<P> {
    /// Creates a curve from its control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`] if `points` is empty.
    pub fn new(points: Vec<P>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidDegree {
                expected: 1,
                found: 0,
            });
        }
        Ok(Self { points })
    }

    /// The control points.
    #[must_use]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// The degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// The point at parameter `t`, expanded.
    ///
    /// # Errors
    ///
    /// Propagates expansion errors.
    pub fn point(&self, arena: &mut ExprArena, t: ExprHandle) -> Result<P> {
        let basis = bernstein_basis(arena, self.degree(), t);
        evaluate_curve(arena, &self.points, &basis)
    }

    /// The derivative curve.
    #[must_use]
    pub fn hodograph(&self, arena: &mut ExprArena) -> Self {
        Self {
            points: hodograph(arena, &self.points),
        }
    }

    /// The `order`-th derivative curve.
    #[must_use]
    pub fn derivative_curve(&self, arena: &mut ExprArena, order: usize) -> Self {
        Self {
            points: nth_derivative(arena, &self.points, order),
        }
    }

    /// The first derivative at `t`.
    ///
    /// # Errors
    ///
    /// Propagates expansion errors.
    pub fn tangent(&self, arena: &mut ExprArena, t: ExprHandle) -> Result<P> {
        self.hodograph(arena).point(arena, t)
    }

    /// The `order`-th derivative at `t`.
    ///
    /// # Errors
    ///
    /// Propagates expansion errors.
    pub fn derivative_at(&self, arena: &mut ExprArena, t: ExprHandle, order: usize) -> Result<P> {
        self.derivative_curve(arena, order).point(arena, t)
    }

    /// Replaces symbols in every control point.
    ///
    /// # Errors
    ///
    /// Propagates substitution errors.
    pub fn substitute(
        &self,
        arena: &mut ExprArena,
        pairs: &[(ExprHandle, ExprHandle)],
    ) -> Result<Self> {
        let points = self
            .points
            .iter()
            .map(|p| p.substitute(arena, pairs))
            .collect::<Result<_>>()?;
        Ok(Self { points })
    }
}
