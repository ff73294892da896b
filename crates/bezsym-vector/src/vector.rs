//! Symbolic vectors.
//!
//! A `Vector<K>` is `K` expression handles. Arithmetic is componentwise and
//! goes through the arena's canonicalising constructors.

use bezsym_core::{ExprArena, ExprHandle, Result};

const AXES: [&str; 3] = ["x", "y", "z"];

/// A vector of `K` symbolic components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<const K: usize>(pub [ExprHandle; K]);

/// A planar vector.
pub type Vector2 = Vector<2>;

/// A spatial vector.
pub type Vector3 = Vector<3>;

impl<const K: usize> Vector<K> {
    /// Wraps the given components.
    #[must_use]
    pub const fn new(components: [ExprHandle; K]) -> Self {
        Self(components)
    }

    /// Creates a vector of fresh symbols `name_x`, `name_y`, `name_z`.
    ///
    /// Vectors longer than three components number the extra axes.
    pub fn symbolic(arena: &mut ExprArena, name: &str) -> Self {
        Self(std::array::from_fn(|i| {
            let axis = AXES.get(i).map_or_else(|| i.to_string(), |a| (*a).to_string());
            arena.symbol(&format!("{name}_{axis}"))
        }))
    }

    /// The zero vector.
    pub fn zero(arena: &mut ExprArena) -> Self {
        Self([arena.zero(); K])
    }

    /// The components.
    #[must_use]
    pub const fn components(&self) -> &[ExprHandle; K] {
        &self.0
    }

    /// Returns true if every component is the constant 0.
    #[must_use]
    pub fn is_zero(&self, arena: &ExprArena) -> bool {
        self.0.iter().all(|c| arena.is_zero(*c))
    }

    /// Applies `f` to every component.
    pub fn map(
        self,
        arena: &mut ExprArena,
        mut f: impl FnMut(&mut ExprArena, ExprHandle) -> ExprHandle,
    ) -> Self {
        Self(self.0.map(|c| f(arena, c)))
    }

    /// Applies a fallible `f` to every component.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map(
        self,
        arena: &mut ExprArena,
        mut f: impl FnMut(&mut ExprArena, ExprHandle) -> Result<ExprHandle>,
    ) -> Result<Self> {
        let mut out = self.0;
        for c in &mut out {
            *c = f(arena, *c)?;
        }
        Ok(Self(out))
    }

    /// Componentwise sum.
    pub fn add(self, arena: &mut ExprArena, other: Self) -> Self {
        Self(std::array::from_fn(|i| arena.add([self.0[i], other.0[i]])))
    }

    /// Componentwise difference.
    pub fn sub(self, arena: &mut ExprArena, other: Self) -> Self {
        Self(std::array::from_fn(|i| arena.sub(self.0[i], other.0[i])))
    }

    /// Negation.
    pub fn neg(self, arena: &mut ExprArena) -> Self {
        self.map(arena, ExprArena::neg)
    }

    /// Multiplies every component by the scalar expression `s`.
    pub fn scale(self, arena: &mut ExprArena, s: ExprHandle) -> Self {
        self.map(arena, |arena, c| arena.mul([s, c]))
    }

    /// Sum of componentwise products.
    pub fn dot(self, arena: &mut ExprArena, other: Self) -> ExprHandle {
        let products: Vec<_> = (0..K).map(|i| arena.mul([self.0[i], other.0[i]])).collect();
        arena.add(products)
    }

    /// Expands every component.
    ///
    /// # Errors
    ///
    /// Propagates [`ExprArena::expand`] errors.
    pub fn expand(self, arena: &mut ExprArena) -> Result<Self> {
        self.try_map(arena, ExprArena::expand)
    }

    /// Substitutes symbols in every component.
    ///
    /// # Errors
    ///
    /// Propagates [`ExprArena::substitute`] errors.
    pub fn substitute(
        self,
        arena: &mut ExprArena,
        pairs: &[(ExprHandle, ExprHandle)],
    ) -> Result<Self> {
        let bindings = arena.bindings(pairs)?;
        self.try_map(arena, |arena, c| arena.substitute_bindings(c, &bindings))
    }

    /// Differentiates every component with respect to `var`.
    ///
    /// # Errors
    ///
    /// Propagates [`ExprArena::derivative`] errors.
    pub fn derivative(self, arena: &mut ExprArena, var: ExprHandle) -> Result<Self> {
        self.try_map(arena, |arena, c| arena.derivative(c, var))
    }
}

impl Vector<2> {
    /// The scalar cross product `x1*y2 - y1*x2`.
    pub fn cross2d(self, arena: &mut ExprArena, other: Self) -> ExprHandle {
        let [x1, y1] = self.0;
        let [x2, y2] = other.0;
        let left = arena.mul([x1, y2]);
        let right = arena.mul([y1, x2]);
        arena.sub(left, right)
    }

    /// The normal `(-y, x)`, this vector turned a quarter counter-clockwise.
    pub fn perp(self, arena: &mut ExprArena) -> Self {
        let [x, y] = self.0;
        Self([arena.neg(y), x])
    }
}

impl Vector<3> {
    /// The cross product.
    pub fn cross3d(self, arena: &mut ExprArena, other: Self) -> Self {
        let [x1, y1, z1] = self.0;
        let [x2, y2, z2] = other.0;
        let mut minor = |a: ExprHandle, b: ExprHandle, c: ExprHandle, d: ExprHandle| {
            let left = arena.mul([a, b]);
            let right = arena.mul([c, d]);
            arena.sub(left, right)
        };
        Self([
            minor(y1, z2, z1, y2),
            minor(z1, x2, x1, z2),
            minor(x1, y2, y1, x2),
        ])
    }
}

impl<const K: usize> From<[ExprHandle; K]> for Vector<K> {
    fn from(components: [ExprHandle; K]) -> Self {
        Self(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_names() {
        let mut arena = ExprArena::new();
        let p = Vector3::symbolic(&mut arena, "p1");
        let names: Vec<_> = p.0.iter().map(|c| arena.name_of(*c).unwrap()).collect();
        assert_eq!(names, ["p1_x", "p1_y", "p1_z"]);
        assert_eq!(Vector3::symbolic(&mut arena, "p1"), p);
    }

    #[test]
    fn test_add_sub_cancel() {
        let mut arena = ExprArena::new();
        let a = Vector2::symbolic(&mut arena, "a");
        let b = Vector2::symbolic(&mut arena, "b");
        let sum = a.add(&mut arena, b);
        let back = sum.sub(&mut arena, b);
        assert_eq!(back, a);

        let diff = a.sub(&mut arena, a);
        assert!(diff.is_zero(&arena));
    }

    #[test]
    fn test_dot_product() {
        let mut arena = ExprArena::new();
        let [x1, y1, x2, y2] = arena.symbols_from(["x1", "y1", "x2", "y2"]);
        let a = Vector::new([x1, y1]);
        let b = Vector::new([x2, y2]);
        let dot = a.dot(&mut arena, b);

        let xx = arena.mul([x1, x2]);
        let yy = arena.mul([y1, y2]);
        assert_eq!(dot, arena.add([xx, yy]));
    }

    #[test]
    fn test_cross2d_is_antisymmetric() {
        let mut arena = ExprArena::new();
        let a = Vector2::symbolic(&mut arena, "a");
        let b = Vector2::symbolic(&mut arena, "b");
        let ab = a.cross2d(&mut arena, b);
        let ba = b.cross2d(&mut arena, a);
        let sum = arena.add([ab, ba]);
        assert!(arena.is_zero(sum));

        let aa = a.cross2d(&mut arena, a);
        assert!(arena.is_zero(aa));
    }

    #[test]
    fn test_cross3d_of_axes() {
        let mut arena = ExprArena::new();
        let zero = arena.zero();
        let one = arena.one();
        let ex = Vector::new([one, zero, zero]);
        let ey = Vector::new([zero, one, zero]);
        let ez = Vector::new([zero, zero, one]);
        assert_eq!(ex.cross3d(&mut arena, ey), ez);
        assert_eq!(ey.cross3d(&mut arena, ez), ex);
    }

    #[test]
    fn test_cross3d_is_orthogonal() {
        let mut arena = ExprArena::new();
        let a = Vector3::symbolic(&mut arena, "a");
        let b = Vector3::symbolic(&mut arena, "b");
        let n = a.cross3d(&mut arena, b);
        let along_a = n.dot(&mut arena, a);
        let along_a = arena.expand(along_a).unwrap();
        assert!(arena.is_zero(along_a));
    }

    #[test]
    fn test_perp_is_orthogonal() {
        let mut arena = ExprArena::new();
        let a = Vector2::symbolic(&mut arena, "a");
        let n = a.perp(&mut arena);
        let dot = n.dot(&mut arena, a);
        assert!(arena.is_zero(dot));
        assert_eq!(arena.name_of(n.0[1]), Some("a_x"));
    }

    #[test]
    fn test_scale_and_derivative() {
        let mut arena = ExprArena::new();
        let t = arena.symbol("t");
        let a = Vector2::symbolic(&mut arena, "a");
        let t2 = arena.pow(t, 2);
        let scaled = a.scale(&mut arena, t2);
        let d = scaled.derivative(&mut arena, t).unwrap();

        let two = arena.integer(2);
        let two_t = arena.mul([two, t]);
        assert_eq!(d, a.scale(&mut arena, two_t));
    }

    #[test]
    fn test_substitute_components() {
        let mut arena = ExprArena::new();
        let a = Vector2::symbolic(&mut arena, "a");
        let zero = arena.zero();
        let [ax, _] = a.0;
        let oriented = a.substitute(&mut arena, &[(ax, zero)]).unwrap();
        assert!(arena.is_zero(oriented.0[0]));
        assert_eq!(oriented.0[1], a.0[1]);
    }
}
