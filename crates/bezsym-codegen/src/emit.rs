//! Straight-line code emission.

use std::fmt::Write as _;

use bezsym_core::{Error, ExprArena, NumberStyle, PowerStyle, PrintOptions, Printer, Result};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::cse::CseResult;

/// Target syntax for [`emit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `a0 = ...`, exact rationals and `^` powers.
    #[default]
    Plain,
    /// `let a0 = ...;` over `f64`.
    Rust,
    /// `const double a0 = ...;`.
    C,
}

impl Dialect {
    fn print_options(self) -> PrintOptions {
        match self {
            Dialect::Plain => PrintOptions::default(),
            Dialect::Rust => PrintOptions {
                power: PowerStyle::Repeated,
                numbers: NumberStyle::Float,
                sqrt: "f64::sqrt",
            },
            Dialect::C => PrintOptions {
                power: PowerStyle::Repeated,
                numbers: NumberStyle::Float,
                sqrt: "sqrt",
            },
        }
    }

    fn assignment(self, out: &mut String, name: &str, value: &str) {
        let _ = match self {
            Dialect::Plain => writeln!(out, "{name} = {value}"),
            Dialect::Rust => writeln!(out, "let {name} = {value};"),
            Dialect::C => writeln!(out, "const double {name} = {value};"),
        };
    }
}

/// Configuration for [`emit`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitConfig {
    /// Output syntax.
    pub dialect: Dialect,
    /// Names for the results, in output order. Missing names default to
    /// `r0`, `r1`, ...
    pub result_names: Vec<String>,
}

impl EmitConfig {
    /// Sets the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets the result names.
    #[must_use]
    pub fn with_result_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.result_names = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Renders the temporaries of `cse` as ordered assignments followed by one
/// assignment per output.
///
/// Outputs without a configured name are numbered `r0`, `r1`, ..., skipping
/// names that an input symbol, a temporary or a configured result already
/// uses, so no line overwrites a value a later line reads.
///
/// # Errors
///
/// Returns [`Error::Unsupported`] if a configured result name repeats, or
/// names an input symbol or a temporary.
pub fn emit(arena: &ExprArena, cse: &CseResult, config: &EmitConfig) -> Result<String> {
    let taken = bound_names(arena, cse);
    let names = result_names(cse.outputs.len(), &config.result_names, &taken)?;

    let printer = Printer::new(arena, config.dialect.print_options());
    let mut out = String::new();
    for temp in &cse.temporaries {
        config
            .dialect
            .assignment(&mut out, &temp.name, &printer.render(temp.value));
    }
    for (name, output) in names.iter().zip(&cse.outputs) {
        config
            .dialect
            .assignment(&mut out, name, &printer.render(*output));
    }

    debug!(
        dialect = ?config.dialect,
        lines = cse.temporaries.len() + cse.outputs.len(),
        "emitted code"
    );
    Ok(out)
}

/// Names read by the emitted code: temporaries and the input symbols.
fn bound_names<'a>(arena: &'a ExprArena, cse: &'a CseResult) -> FxHashSet<&'a str> {
    let mut names: FxHashSet<&str> = cse.temporaries.iter().map(|t| t.name.as_str()).collect();
    let roots = cse
        .temporaries
        .iter()
        .map(|t| t.value)
        .chain(cse.outputs.iter().copied());
    for root in roots {
        names.extend(
            arena
                .free_symbols(root)
                .into_iter()
                .map(|id| arena.symbol_name(id)),
        );
    }
    names
}

fn result_names(count: usize, configured: &[String], taken: &FxHashSet<&str>) -> Result<Vec<String>> {
    let configured = &configured[..configured.len().min(count)];
    let mut used: FxHashSet<&str> = FxHashSet::default();
    for name in configured {
        if taken.contains(name.as_str()) || !used.insert(name.as_str()) {
            return Err(Error::Unsupported(format!(
                "result name `{name}` is already bound in the emitted code"
            )));
        }
    }

    let mut names = configured.to_vec();
    let mut counter = 0usize;
    while names.len() < count {
        let name = format!("r{counter}");
        counter += 1;
        if !taken.contains(name.as_str()) && !used.contains(name.as_str()) {
            names.push(name);
        }
    }
    Ok(names)
}
