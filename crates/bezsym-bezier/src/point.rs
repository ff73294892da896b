//! Control points: scalars or vectors of expressions.

use bezsym_core::{ExprArena, ExprHandle, Result};
use bezsym_vector::Vector;

/// A value a Bezier curve can be built over.
///
/// Implemented for scalar expressions and for [`Vector`]s of any length.
pub trait ControlPoint: Copy {
    /// The zero point.
    fn zero(arena: &mut ExprArena) -> Self;

    /// `self + other`.
    fn add(self, arena: &mut ExprArena, other: Self) -> Self;

    /// `self - other`.
    fn sub(self, arena: &mut ExprArena, other: Self) -> Self;

    /// `s * self` for a scalar expression `s`.
    fn scale(self, arena: &mut ExprArena, s: ExprHandle) -> Self;

    /// Expands every component.
    ///
    /// # Errors
    ///
    /// Propagates expansion errors.
    fn expand(self, arena: &mut ExprArena) -> Result<Self>;

    /// Replaces symbols in every component, simultaneously.
    ///
    /// # Errors
    ///
    /// Propagates substitution errors.
    fn substitute(self, arena: &mut ExprArena, pairs: &[(ExprHandle, ExprHandle)])
        -> Result<Self>;

    /// Differentiates every component.
    ///
    /// # Errors
    ///
    /// Propagates differentiation errors.
    fn derivative(self, arena: &mut ExprArena, var: ExprHandle) -> Result<Self>;

    /// Returns true if every component is the constant 0.
    fn is_zero(&self, arena: &ExprArena) -> bool;
}

impl ControlPoint for ExprHandle {
    fn zero(arena: &mut ExprArena) -> Self {
        arena.zero()
    }

    fn add(self, arena: &mut ExprArena, other: Self) -> Self {
        arena.add([self, other])
    }

    fn sub(self, arena: &mut ExprArena, other: Self) -> Self {
        arena.sub(self, other)
    }

    fn scale(self, arena: &mut ExprArena, s: ExprHandle) -> Self {
        arena.mul([s, self])
    }

    fn expand(self, arena: &mut ExprArena) -> Result<Self> {
        arena.expand(self)
    }

    fn substitute(
        self,
        arena: &mut ExprArena,
        pairs: &[(ExprHandle, ExprHandle)],
    ) -> Result<Self> {
        arena.substitute(self, pairs)
    }

    fn derivative(self, arena: &mut ExprArena, var: ExprHandle) -> Result<Self> {
        arena.derivative(self, var)
    }

    fn is_zero(&self, arena: &ExprArena) -> bool {
        arena.is_zero(*self)
    }
}

impl<const K: usize> ControlPoint for Vector<K> {
    fn zero(arena: &mut ExprArena) -> Self {
        Vector::<K>::zero(arena)
    }

    fn add(self, arena: &mut ExprArena, other: Self) -> Self {
        Vector::<K>::add(self, arena, other)
    }

    fn sub(self, arena: &mut ExprArena, other: Self) -> Self {
        Vector::<K>::sub(self, arena, other)
    }

    fn scale(self, arena: &mut ExprArena, s: ExprHandle) -> Self {
        Vector::<K>::scale(self, arena, s)
    }

    fn expand(self, arena: &mut ExprArena) -> Result<Self> {
        Vector::<K>::expand(self, arena)
    }

    fn substitute(
        self,
        arena: &mut ExprArena,
        pairs: &[(ExprHandle, ExprHandle)],
    ) -> Result<Self> {
        Vector::<K>::substitute(self, arena, pairs)
    }

    fn derivative(self, arena: &mut ExprArena, var: ExprHandle) -> Result<Self> {
        Vector::<K>::derivative(self, arena, var)
    }

    fn is_zero(&self, arena: &ExprArena) -> bool {
        Vector::<K>::is_zero(self, arena)
    }
}
