//! Tensor-product Bezier patches.
//!
//! A patch is a grid of control points; row index `i` runs along `u` and
//! column index `j` along `v`:
//!
//! ```text
//! S(u, v) = sum_i sum_j B_i(u) B_j(v) p[i][j]
//! ```

use bezsym_core::{Error, ExprArena, ExprHandle, Result};
use bezsym_vector::Vector3;

use crate::basis::bernstein_basis;
use crate::hodograph::hodograph;
use crate::point::ControlPoint;

/// A tensor-product patch of degrees `(rows - 1, cols - 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patch<P> {
    rows: Vec<Vec<P>>,
}

impl<P: ControlPoint> Patch<P> {
    /// Creates a patch from its control net.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`] if the net is empty or its rows
    /// differ in length.
    pub fn new(rows: Vec<Vec<P>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(Error::InvalidDegree {
                expected: 1,
                found: 0,
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            return Err(Error::InvalidDegree {
                expected: cols,
                found: row.len(),
            });
        }
        Ok(Self { rows })
    }

    /// The control net, row by row.
    #[must_use]
    pub fn rows(&self) -> &[Vec<P>] {
        &self.rows
    }

    /// The degrees along `u` and `v`.
    #[must_use]
    pub fn degrees(&self) -> (usize, usize) {
        (self.rows.len() - 1, self.rows[0].len() - 1)
    }

    /// The surface point at `(u, v)`, expanded.
    ///
    /// `u` and `v` may be any expressions, not only symbols.
    ///
    /// # Errors
    ///
    /// Propagates expansion errors.
    pub fn evaluate(&self, arena: &mut ExprArena, u: ExprHandle, v: ExprHandle) -> Result<P> {
        let (m, n) = self.degrees();
        let bu = bernstein_basis(arena, m, u);
        let bv = bernstein_basis(arena, n, v);

        let mut acc = P::zero(arena);
        for (row, wu) in self.rows.iter().zip(&bu) {
            for (point, wv) in row.iter().zip(&bv) {
                let weight = arena.mul([*wu, *wv]);
                let term = point.scale(arena, weight);
                acc = acc.add(arena, term);
            }
        }
        acc.expand(arena)
    }

    /// The partial derivative patch along `u`.
    #[must_use]
    pub fn derivative_u(&self, arena: &mut ExprArena) -> Self {
        let cols = self.rows[0].len();
        let columns: Vec<Vec<P>> = (0..cols)
            .map(|j| {
                let column: Vec<P> = self.rows.iter().map(|row| row[j]).collect();
                hodograph(arena, &column)
            })
            .collect();

        let height = columns[0].len();
        let rows = (0..height)
            .map(|i| columns.iter().map(|column| column[i]).collect())
            .collect();
        Self { rows }
    }

    /// The partial derivative patch along `v`.
    #[must_use]
    pub fn derivative_v(&self, arena: &mut ExprArena) -> Self {
        let rows = self.rows.iter().map(|row| hodograph(arena, row)).collect();
        Self { rows }
    }

    /// The surface curve along the straight parameter line from
    /// `(u0, v0)` at `t = 0` to `(u1, v1)` at `t = 1`.
    ///
    /// # Errors
    ///
    /// Propagates expansion errors.
    pub fn restrict_to_line(
        &self,
        arena: &mut ExprArena,
        (u0, u1): (ExprHandle, ExprHandle),
        (v0, v1): (ExprHandle, ExprHandle),
        t: ExprHandle,
    ) -> Result<P> {
        let u = lerp(arena, u0, u1, t);
        let v = lerp(arena, v0, v1, t);
        self.evaluate(arena, u, v)
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
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let row = row
                .iter()
                .map(|p| p.substitute(arena, pairs))
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Ok(Self { rows })
    }
}

impl Patch<Vector3> {
    /// The unnormalised surface normal `S_u x S_v` at `(u, v)`.
    ///
    /// # Errors
    ///
    /// Propagates expansion errors.
    pub fn normal(&self, arena: &mut ExprArena, u: ExprHandle, v: ExprHandle) -> Result<Vector3> {
        let su = self.derivative_u(arena).evaluate(arena, u, v)?;
        let sv = self.derivative_v(arena).evaluate(arena, u, v)?;
        su.cross3d(arena, sv).expand(arena)
    }
}

/// `a * (1 - t) + b * t`.
fn lerp(arena: &mut ExprArena, a: ExprHandle, b: ExprHandle, t: ExprHandle) -> ExprHandle {
    let one = arena.one();
    let one_minus_t = arena.sub(one, t);
    let left = arena.mul([a, one_minus_t]);
    let right = arena.mul([b, t]);
    arena.add([left, right])
}
