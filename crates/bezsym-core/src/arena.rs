//! Arena storage and canonicalising constructors.
//!
//! Every node is hash-consed: building the same canonical node twice yields
//! the same handle. The constructors (`add`, `mul`, `pow`, ...) normalise
//! their input first, so formulas that differ only in argument order,
//! nesting of sums/products, foldable constants, or uncollected like terms
//! end up as one node.

use bezsym_integers::Rational;
use hashbrown::HashMap;
use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::expr::{functions, Args, ExprNode, FunctionId};
use crate::handle::{ExprHandle, SymbolId};
use crate::intern::SymbolTable;

/// The arena owning every expression node.
#[derive(Debug, Default, Clone)]
pub struct ExprArena {
    /// Storage for all expression nodes.
    nodes: Vec<ExprNode>,
    /// Interning table: maps node content to its handle.
    intern_map: HashMap<ExprNode, ExprHandle>,
    /// Symbol names.
    symbols: SymbolTable,
}

impl ExprArena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with pre-allocated node capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            intern_map: HashMap::with_capacity(capacity),
            symbols: SymbolTable::new(),
        }
    }

    /// Interns a node that is already canonical.
    fn intern(&mut self, node: ExprNode) -> ExprHandle {
        if let Some(&handle) = self.intern_map.get(&node) {
            return handle;
        }

        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Arena capacity exceeded");

        #[allow(clippy::cast_possible_truncation)]
        let handle = ExprHandle::new(index as u32);
        self.nodes.push(node.clone());
        self.intern_map.insert(node, handle);
        handle
    }

    /// Gets the node at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this arena.
    #[must_use]
    pub fn get(&self, handle: ExprHandle) -> &ExprNode {
        &self.nodes[handle.index() as usize]
    }

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been built yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the symbol table.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    // === Atoms ===

    /// Creates (or finds) the symbol with the given name.
    pub fn symbol(&mut self, name: &str) -> ExprHandle {
        let id = self.symbols.intern(name);
        self.intern(ExprNode::Symbol(id))
    }

    /// Creates several symbols at once.
    pub fn symbols_from<const N: usize>(&mut self, names: [&str; N]) -> [ExprHandle; N] {
        names.map(|name| self.symbol(name))
    }

    /// Returns the symbol id of a symbol expression.
    #[must_use]
    pub fn symbol_id(&self, handle: ExprHandle) -> Option<SymbolId> {
        self.get(handle).as_symbol()
    }

    /// Returns the name of a symbol id.
    #[must_use]
    pub fn symbol_name(&self, id: SymbolId) -> &str {
        self.symbols.name(id).unwrap_or("?")
    }

    /// Returns the name of a symbol expression.
    #[must_use]
    pub fn name_of(&self, handle: ExprHandle) -> Option<&str> {
        self.symbol_id(handle).and_then(|id| self.symbols.name(id))
    }

    /// Creates a rational constant.
    pub fn constant(&mut self, value: Rational) -> ExprHandle {
        self.intern(ExprNode::Constant(value))
    }

    /// Creates an integer constant.
    pub fn integer(&mut self, value: i64) -> ExprHandle {
        self.constant(Rational::from(value))
    }

    /// Creates a constant from a float, converted exactly to a rational.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for NaN or infinite values.
    pub fn float(&mut self, value: f64) -> Result<ExprHandle> {
        let rational = Rational::from_f64(value)
            .ok_or_else(|| Error::Unsupported(format!("non-finite constant {value}")))?;
        Ok(self.constant(rational))
    }

    /// The constant 0.
    pub fn zero(&mut self) -> ExprHandle {
        self.constant(Rational::zero())
    }

    /// The constant 1.
    pub fn one(&mut self) -> ExprHandle {
        self.constant(Rational::one())
    }

    /// Returns the value of a constant expression.
    #[must_use]
    pub fn as_constant(&self, handle: ExprHandle) -> Option<&Rational> {
        self.get(handle).as_constant()
    }

    /// Returns true if the expression is the constant 0.
    #[must_use]
    pub fn is_zero(&self, handle: ExprHandle) -> bool {
        self.as_constant(handle).is_some_and(Zero::is_zero)
    }

    /// Returns true if the expression is the constant 1.
    #[must_use]
    pub fn is_one(&self, handle: ExprHandle) -> bool {
        self.as_constant(handle).is_some_and(One::is_one)
    }

    // === Compound constructors ===

    /// Builds a canonical sum.
    pub fn add(&mut self, terms: impl IntoIterator<Item = ExprHandle>) -> ExprHandle {
        let mut flat: SmallVec<[ExprHandle; 8]> = SmallVec::new();
        for term in terms {
            if let ExprNode::Add(args) = self.get(term) {
                flat.extend_from_slice(args);
            } else {
                flat.push(term);
            }
        }

        let mut constant = Rational::zero();
        let mut order: SmallVec<[ExprHandle; 8]> = SmallVec::new();
        let mut coefficients: HashMap<ExprHandle, Rational> = HashMap::new();

        for term in flat {
            if let Some(c) = self.as_constant(term) {
                constant = constant + c;
                continue;
            }
            let (coeff, rest) = self.split_coefficient(term);
            match coefficients.get_mut(&rest) {
                Some(existing) => *existing = &*existing + &coeff,
                None => {
                    order.push(rest);
                    coefficients.insert(rest, coeff);
                }
            }
        }

        let mut out = Args::new();
        let mut nested = false;
        for rest in order {
            let Some(coeff) = coefficients.remove(&rest) else {
                continue;
            };
            if coeff.is_zero() {
                continue;
            }
            if coeff.is_one() {
                nested |= matches!(self.get(rest), ExprNode::Add(_));
                out.push(rest);
            } else {
                let k = self.constant(coeff);
                out.push(self.mul([k, rest]));
            }
        }
        if !constant.is_zero() {
            out.push(self.constant(constant));
        }
        // A collected `1*(a + b)` must be spliced in and recollected.
        if nested {
            return self.add(out);
        }

        match out.len() {
            0 => self.zero(),
            1 => out[0],
            _ => {
                out.sort_by(|a, b| self.compare_terms(*a, *b));
                self.intern(ExprNode::Add(out))
            }
        }
    }

    /// Builds a canonical product.
    pub fn mul(&mut self, factors: impl IntoIterator<Item = ExprHandle>) -> ExprHandle {
        let mut flat: SmallVec<[ExprHandle; 8]> = SmallVec::new();
        for factor in factors {
            if let ExprNode::Mul(args) = self.get(factor) {
                flat.extend_from_slice(args);
            } else {
                flat.push(factor);
            }
        }

        let mut coeff = Rational::one();
        let mut order: SmallVec<[ExprHandle; 8]> = SmallVec::new();
        let mut exponents: HashMap<ExprHandle, u32> = HashMap::new();

        for factor in flat {
            let (base, exp) = match self.get(factor) {
                ExprNode::Constant(c) => {
                    coeff = coeff * c;
                    continue;
                }
                ExprNode::Pow { base, exp } => (*base, *exp),
                _ => (factor, 1),
            };
            match exponents.get_mut(&base) {
                Some(existing) => *existing = existing.saturating_add(exp),
                None => {
                    order.push(base);
                    exponents.insert(base, exp);
                }
            }
        }

        if coeff.is_zero() {
            return self.zero();
        }

        let mut out = Args::new();
        for base in order {
            let exp = exponents.get(&base).copied().unwrap_or(1);
            out.push(self.pow(base, exp));
        }
        out.sort_by(|a, b| self.compare_factors(*a, *b));

        if out.is_empty() {
            return self.constant(coeff);
        }
        if coeff.is_one() {
            if out.len() == 1 {
                return out[0];
            }
        } else {
            out.insert(0, self.constant(coeff));
        }
        self.intern(ExprNode::Mul(out))
    }

    /// Builds `base^exp`.
    pub fn pow(&mut self, base: ExprHandle, exp: u32) -> ExprHandle {
        if exp == 0 {
            return self.one();
        }
        if exp == 1 {
            return base;
        }

        match self.get(base).clone() {
            ExprNode::Constant(c) => self.constant(c.pow(exp)),
            ExprNode::Pow {
                base: inner,
                exp: inner_exp,
            } => match inner_exp.checked_mul(exp) {
                Some(total) => self.pow(inner, total),
                None => self.intern(ExprNode::Pow { base, exp }),
            },
            ExprNode::Mul(args) => {
                let mut powered = Args::new();
                for arg in args {
                    powered.push(self.pow(arg, exp));
                }
                self.mul(powered)
            }
            _ => self.intern(ExprNode::Pow { base, exp }),
        }
    }

    /// Builds `-expr`.
    pub fn neg(&mut self, expr: ExprHandle) -> ExprHandle {
        let minus_one = self.integer(-1);
        self.mul([minus_one, expr])
    }

    /// Builds `a - b`.
    pub fn sub(&mut self, a: ExprHandle, b: ExprHandle) -> ExprHandle {
        let negated = self.neg(b);
        self.add([a, negated])
    }

    /// Builds `c * expr` for a rational `c`.
    pub fn scale(&mut self, c: Rational, expr: ExprHandle) -> ExprHandle {
        let k = self.constant(c);
        self.mul([k, expr])
    }

    /// Builds `num / den`.
    ///
    /// Division by a constant folds into a rational coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `den` is the constant 0.
    pub fn div(&mut self, num: ExprHandle, den: ExprHandle) -> Result<ExprHandle> {
        if let Some(c) = self.as_constant(den) {
            let inverse = c.checked_recip().ok_or(Error::DivisionByZero)?;
            let k = self.constant(inverse);
            return Ok(self.mul([num, k]));
        }
        if self.is_zero(num) {
            return Ok(self.zero());
        }
        if num == den {
            return Ok(self.one());
        }
        Ok(self.intern(ExprNode::Div { num, den }))
    }

    /// Builds `sqrt(arg)`, folding exact squares of constants.
    pub fn sqrt(&mut self, arg: ExprHandle) -> ExprHandle {
        if let Some(c) = self.as_constant(arg) {
            if let Some(root) = exact_rational_sqrt(c) {
                return self.constant(root);
            }
        }
        self.intern(ExprNode::Function {
            id: functions::SQRT,
            arg,
        })
    }

    /// Applies a built-in function.
    pub fn function(&mut self, id: FunctionId, arg: ExprHandle) -> ExprHandle {
        if id == functions::SQRT {
            return self.sqrt(arg);
        }
        self.intern(ExprNode::Function { id, arg })
    }

    /// Splits a term into its rational coefficient and the remaining factors.
    pub fn split_coefficient(&mut self, term: ExprHandle) -> (Rational, ExprHandle) {
        if let ExprNode::Mul(args) = self.get(term) {
            if let Some(c) = self.as_constant(args[0]) {
                let coeff = c.clone();
                let rest: Args = args[1..].iter().copied().collect();
                let rest = if rest.len() == 1 {
                    rest[0]
                } else {
                    self.intern(ExprNode::Mul(rest))
                };
                return (coeff, rest);
            }
        }
        (Rational::one(), term)
    }
}

fn exact_sqrt_i64(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let guess = (n as f64).sqrt().round() as i64;
    (guess.saturating_sub(1)..=guess.saturating_add(1)).find(|r| *r >= 0 && r.checked_mul(*r) == Some(n))
}

fn exact_rational_sqrt(c: &Rational) -> Option<Rational> {
    let num = exact_sqrt_i64(c.numerator_i64()?)?;
    let den = exact_sqrt_i64(c.denominator_i64()?)?;
    Some(Rational::from_i64(num, den))
}
