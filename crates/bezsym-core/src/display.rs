//! Infix rendering of expressions.
//!
//! [`Printer`] is shared by `Display` and by the code emitter, which
//! configures number and power syntax for its target language.

use std::fmt;
use std::fmt::Write as _;

use bezsym_integers::Rational;
use num_traits::{One, Zero};

use crate::arena::ExprArena;
use crate::expr::{functions, ExprNode};
use crate::handle::ExprHandle;

const SUM: u8 = 1;
const PRODUCT: u8 = 2;
const POWER: u8 = 3;
const ATOM: u8 = 4;

/// How integer powers are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PowerStyle {
    /// `x^3`.
    #[default]
    Caret,
    /// `x*x*x`, for languages without a power operator.
    Repeated,
}

/// How constants are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumberStyle {
    /// `2`, `1/3`.
    #[default]
    Exact,
    /// `2.0`, `1.0/3.0`.
    Float,
}

/// Syntax options for [`Printer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Power syntax.
    pub power: PowerStyle,
    /// Constant syntax.
    pub numbers: NumberStyle,
    /// Name of the square-root function.
    pub sqrt: &'static str,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            power: PowerStyle::Caret,
            numbers: NumberStyle::Exact,
            sqrt: "sqrt",
        }
    }
}

/// Renders expressions of one arena.
#[derive(Clone, Debug)]
pub struct Printer<'a> {
    arena: &'a ExprArena,
    options: PrintOptions,
}

impl<'a> Printer<'a> {
    /// Creates a printer with the given syntax.
    #[must_use]
    pub fn new(arena: &'a ExprArena, options: PrintOptions) -> Self {
        Self { arena, options }
    }

    /// Renders `expr`.
    #[must_use]
    pub fn render(&self, expr: ExprHandle) -> String {
        let mut out = String::new();
        self.write(&mut out, expr, 0);
        out
    }

    fn write(&self, out: &mut String, expr: ExprHandle, min_prec: u8) {
        if self.precedence(expr) < min_prec {
            out.push('(');
            self.write_inner(out, expr);
            out.push(')');
        } else {
            self.write_inner(out, expr);
        }
    }

    fn precedence(&self, expr: ExprHandle) -> u8 {
        match self.arena.get(expr) {
            ExprNode::Constant(c) => {
                if c.is_negative() {
                    SUM
                } else if c.is_integer() {
                    ATOM
                } else {
                    PRODUCT
                }
            }
            ExprNode::Symbol(_) | ExprNode::Function { .. } => ATOM,
            ExprNode::Add(_) => SUM,
            ExprNode::Mul(_) => {
                if self.leading_coefficient(expr).is_some_and(Rational::is_negative) {
                    SUM
                } else {
                    PRODUCT
                }
            }
            ExprNode::Pow { .. } => match self.options.power {
                PowerStyle::Caret => POWER,
                PowerStyle::Repeated => PRODUCT,
            },
            ExprNode::Div { .. } => PRODUCT,
        }
    }

    fn leading_coefficient(&self, expr: ExprHandle) -> Option<&'a Rational> {
        match self.arena.get(expr) {
            ExprNode::Mul(args) => self.arena.as_constant(args[0]),
            _ => None,
        }
    }

    /// True for terms printed as `- |term|` inside a sum.
    fn is_negative_term(&self, expr: ExprHandle) -> bool {
        match self.arena.get(expr) {
            ExprNode::Constant(c) => c.is_negative(),
            ExprNode::Mul(_) => self
                .leading_coefficient(expr)
                .is_some_and(Rational::is_negative),
            _ => false,
        }
    }

    fn write_inner(&self, out: &mut String, expr: ExprHandle) {
        match self.arena.get(expr) {
            ExprNode::Constant(c) => out.push_str(&self.format_constant(c)),
            ExprNode::Symbol(id) => out.push_str(self.arena.symbol_name(*id)),
            ExprNode::Add(args) => {
                for (i, term) in args.iter().enumerate() {
                    let negative = self.is_negative_term(*term);
                    match (i, negative) {
                        (0, true) => out.push('-'),
                        (0, false) => {}
                        (_, true) => out.push_str(" - "),
                        (_, false) => out.push_str(" + "),
                    }
                    if negative {
                        self.write_negated(out, *term);
                    } else {
                        self.write(out, *term, PRODUCT);
                    }
                }
            }
            ExprNode::Mul(args) => self.write_product(out, args, false),
            ExprNode::Pow { base, exp } => match self.options.power {
                PowerStyle::Caret => {
                    self.write(out, *base, ATOM);
                    let _ = write!(out, "^{exp}");
                }
                PowerStyle::Repeated => {
                    for i in 0..*exp {
                        if i > 0 {
                            out.push('*');
                        }
                        self.write(out, *base, POWER);
                    }
                }
            },
            ExprNode::Div { num, den } => {
                self.write(out, *num, PRODUCT);
                out.push('/');
                self.write(out, *den, POWER);
            }
            ExprNode::Function { id, arg } => {
                let name = if *id == functions::SQRT {
                    self.options.sqrt
                } else {
                    functions::name(*id)
                };
                out.push_str(name);
                out.push('(');
                self.write(out, *arg, 0);
                out.push(')');
            }
        }
    }

    /// Writes a negative term without its sign.
    fn write_negated(&self, out: &mut String, expr: ExprHandle) {
        match self.arena.get(expr) {
            ExprNode::Constant(c) => out.push_str(&self.format_constant(&c.abs())),
            ExprNode::Mul(args) => self.write_product(out, args, true),
            _ => self.write(out, expr, PRODUCT),
        }
    }

    fn write_product(&self, out: &mut String, args: &[ExprHandle], negate: bool) {
        let (coeff, factors) = match self.arena.as_constant(args[0]) {
            Some(c) => (c.clone(), &args[1..]),
            None => (Rational::one(), args),
        };
        let coeff = if negate { -coeff } else { coeff };

        if coeff == -Rational::one() {
            out.push('-');
        } else if !coeff.is_one() {
            out.push_str(&self.format_constant(&coeff));
            out.push('*');
        }
        for (i, factor) in factors.iter().enumerate() {
            if i > 0 {
                out.push('*');
            }
            self.write(out, *factor, PRODUCT);
        }
    }

    fn format_constant(&self, c: &Rational) -> String {
        match self.options.numbers {
            NumberStyle::Exact => c.to_string(),
            NumberStyle::Float => {
                let text = c.to_string();
                match text.split_once('/') {
                    Some((num, den)) => format!("{num}.0/{den}.0"),
                    None if c.is_zero() => "0.0".to_string(),
                    None => format!("{text}.0"),
                }
            }
        }
    }
}

/// `Display` adapter returned by [`ExprArena::display`].
#[derive(Clone, Debug)]
pub struct ExprDisplay<'a> {
    printer: Printer<'a>,
    expr: ExprHandle,
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.printer.render(self.expr))
    }
}

impl ExprArena {
    /// Returns a `Display` value rendering `expr` in infix notation.
    #[must_use]
    pub fn display(&self, expr: ExprHandle) -> ExprDisplay<'_> {
        ExprDisplay {
            printer: Printer::new(self, PrintOptions::default()),
            expr,
        }
    }
}
