//! Common-subexpression elimination.
//!
//! Hash-consing makes structural equality a handle comparison, so repeated
//! subtrees are found by counting handles. A subtree is counted once per
//! parent occurrence: on a repeat visit the walk does not descend again,
//! so the children of a repeated subtree only count their uses outside it.

use bezsym_core::{ExprArena, ExprHandle, Result, SymbolId};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

/// Configuration for [`eliminate_common_subexpressions`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CseConfig {
    /// Temporaries are named `{prefix}0`, `{prefix}1`, ...
    pub prefix: String,
    /// Minimum number of occurrences before a subtree is hoisted.
    pub min_occurrences: usize,
    /// Names temporaries must not take, such as the emitted result names.
    pub reserved_names: Vec<String>,
}

impl Default for CseConfig {
    fn default() -> Self {
        Self {
            prefix: "a".to_string(),
            min_occurrences: 2,
            reserved_names: Vec::new(),
        }
    }
}

impl CseConfig {
    /// Sets the temporary name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the occurrence threshold. Values below 2 are treated as 2.
    #[must_use]
    pub fn with_min_occurrences(mut self, min_occurrences: usize) -> Self {
        self.min_occurrences = min_occurrences;
        self
    }

    /// Sets names that temporaries skip when numbering.
    #[must_use]
    pub fn with_reserved_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.reserved_names = names.into_iter().map(Into::into).collect();
        self
    }
}

/// A hoisted subexpression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Temporary {
    /// The generated name.
    pub name: String,
    /// The symbol standing for this temporary in later definitions.
    pub symbol: ExprHandle,
    /// The definition, over input symbols and earlier temporaries only.
    pub value: ExprHandle,
    /// Position in the emitted sequence.
    pub index: usize,
}

/// Temporaries in definition order plus the rewritten outputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CseResult {
    /// Definitions, each referring only to earlier ones.
    pub temporaries: Vec<Temporary>,
    /// The input expressions rewritten over the temporaries.
    pub outputs: Vec<ExprHandle>,
}

impl CseResult {
    /// Substitutes every temporary back, recovering the input expressions.
    ///
    /// # Errors
    ///
    /// Propagates substitution errors.
    pub fn inline(&self, arena: &mut ExprArena) -> Result<Vec<ExprHandle>> {
        let pairs: Vec<_> = self
            .temporaries
            .iter()
            .map(|temp| (temp.symbol, temp.value))
            .collect();
        self.outputs
            .iter()
            .map(|&out| arena.substitute_fixed_point(out, &pairs))
            .collect()
    }
}

#[derive(Default)]
struct Occurrences {
    counts: FxHashMap<ExprHandle, usize>,
    /// Compound subtrees in first post-order appearance.
    order: Vec<ExprHandle>,
}

impl Occurrences {
    fn visit(&mut self, arena: &ExprArena, expr: ExprHandle) {
        let node = arena.get(expr);
        if node.is_atom() {
            return;
        }
        let count = self.counts.entry(expr).or_insert(0);
        *count += 1;
        if *count > 1 {
            return;
        }
        for child in node.children() {
            self.visit(arena, child);
        }
        self.order.push(expr);
    }
}

/// Hoists every compound subtree used at least `min_occurrences` times
/// across `expressions` into a named temporary.
///
/// Temporaries are ordered by first post-order appearance across the
/// input list, so the result is deterministic and every definition refers
/// only to earlier ones. Names already used by a symbol of the input, and
/// the configured reserved names, are skipped when numbering.
///
/// # Errors
///
/// Propagates rebuild errors from [`ExprArena::replace`].
pub fn eliminate_common_subexpressions(
    arena: &mut ExprArena,
    expressions: &[ExprHandle],
    config: &CseConfig,
) -> Result<CseResult> {
    let mut occurrences = Occurrences::default();
    for &expr in expressions {
        occurrences.visit(arena, expr);
    }

    let threshold = config.min_occurrences.max(2);
    let hoisted: Vec<ExprHandle> = occurrences
        .order
        .iter()
        .copied()
        .filter(|e| occurrences.counts.get(e).is_some_and(|&n| n >= threshold))
        .collect();

    let taken: FxHashSet<SymbolId> = expressions
        .iter()
        .flat_map(|&e| arena.free_symbols(e))
        .collect();
    let mut counter = 0usize;
    let mut next_name = |arena: &ExprArena| loop {
        let name = format!("{}{counter}", config.prefix);
        counter += 1;
        let clashes = config.reserved_names.contains(&name)
            || arena
                .symbols()
                .lookup(&name)
                .is_some_and(|id| taken.contains(&id));
        if !clashes {
            return name;
        }
    };

    let mut replacements = FxHashMap::default();
    let mut temporaries = Vec::with_capacity(hoisted.len());
    for (index, expr) in hoisted.into_iter().enumerate() {
        let name = next_name(&*arena);
        let value = arena.replace(expr, &replacements)?;
        let symbol = arena.symbol(&name);
        trace!(%name, value = %arena.display(value), "hoisted subexpression");
        replacements.insert(expr, symbol);
        temporaries.push(Temporary {
            name,
            symbol,
            value,
            index,
        });
    }

    let outputs = expressions
        .iter()
        .map(|&e| arena.replace(e, &replacements))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        candidates = occurrences.order.len(),
        temporaries = temporaries.len(),
        "eliminated common subexpressions"
    );
    Ok(CseResult {
        temporaries,
        outputs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_sum_is_hoisted_once() {
        let mut arena = ExprArena::new();
        let [a, b] = arena.symbols_from(["a", "b"]);
        let sum = arena.add([a, b]);
        let e1 = arena.mul([sum, sum]);
        let two = arena.integer(2);
        let e2 = arena.mul([sum, two]);

        let result = eliminate_common_subexpressions(&mut arena, &[e1, e2], &CseConfig::default())
            .unwrap();
        assert_eq!(result.temporaries.len(), 1);
        let temp = &result.temporaries[0];
        assert_eq!(temp.name, "a0");
        assert_eq!(temp.value, sum);

        let a0 = temp.symbol;
        assert_eq!(result.outputs, [arena.pow(a0, 2), arena.mul([two, a0])]);
    }

    #[test]
    fn test_no_repeats_no_temporaries() {
        let mut arena = ExprArena::new();
        let [x, y] = arena.symbols_from(["x", "y"]);
        let product = arena.mul([x, y]);
        let result =
            eliminate_common_subexpressions(&mut arena, &[product, x], &CseConfig::default())
                .unwrap();
        assert!(result.temporaries.is_empty());
        assert_eq!(result.outputs, [product, x]);
    }

    #[test]
    fn test_nested_temporaries_refer_backwards() {
        let mut arena = ExprArena::new();
        let [x, y, z] = arena.symbols_from(["x", "y", "z"]);
        let inner = arena.add([x, y]);
        let outer = arena.mul([inner, z]);
        let one = arena.one();
        let e1 = arena.add([outer, one]);
        let e2 = arena.sqrt(outer);
        let e3 = arena.mul([inner, y]);

        let result =
            eliminate_common_subexpressions(&mut arena, &[e1, e2, e3], &CseConfig::default())
                .unwrap();
        let names: Vec<_> = result.temporaries.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a0", "a1"]);

        // (x + y) is defined first and used by (x + y)*z.
        let first = &result.temporaries[0];
        let second = &result.temporaries[1];
        assert_eq!(first.value, inner);
        assert_eq!(second.value, arena.mul([first.symbol, z]));
        assert_eq!(result.inline(&mut arena).unwrap(), [e1, e2, e3]);
    }

    #[test]
    fn test_repeat_visits_do_not_recount_children() {
        let mut arena = ExprArena::new();
        let [x, y] = arena.symbols_from(["x", "y"]);
        let sum = arena.add([x, y]);
        let square = arena.pow(sum, 2);
        let e1 = arena.mul([square, x]);
        let e2 = arena.mul([square, y]);

        let result = eliminate_common_subexpressions(&mut arena, &[e1, e2], &CseConfig::default())
            .unwrap();
        // Only the square repeats; its base is used once, inside it.
        assert_eq!(result.temporaries.len(), 1);
        assert_eq!(result.temporaries[0].value, square);
    }

    #[test]
    fn test_names_skip_input_symbols() {
        let mut arena = ExprArena::new();
        let [a0, b] = arena.symbols_from(["a0", "b"]);
        let sum = arena.add([a0, b]);
        let e1 = arena.pow(sum, 2);
        let e2 = arena.pow(sum, 3);

        let result = eliminate_common_subexpressions(&mut arena, &[e1, e2], &CseConfig::default())
            .unwrap();
        assert_eq!(result.temporaries[0].name, "a1");
        assert_ne!(result.temporaries[0].symbol, a0);
    }

    #[test]
    fn test_names_skip_reserved() {
        let mut arena = ExprArena::new();
        let [x, y] = arena.symbols_from(["x", "y"]);
        let sum = arena.add([x, y]);
        let e1 = arena.pow(sum, 2);
        let e2 = arena.pow(sum, 3);

        let config = CseConfig::default().with_reserved_names(["a0", "a2"]);
        let result = eliminate_common_subexpressions(&mut arena, &[e1, e2], &config).unwrap();
        assert_eq!(result.temporaries[0].name, "a1");
    }

    #[test]
    fn test_config_builders() {
        let config = CseConfig::default()
            .with_prefix("tmp")
            .with_min_occurrences(3);
        assert_eq!(config.prefix, "tmp");

        let mut arena = ExprArena::new();
        let [x, y] = arena.symbols_from(["x", "y"]);
        let sum = arena.add([x, y]);
        let twice = arena.pow(sum, 2);
        let thrice = arena.pow(sum, 3);

        let result = eliminate_common_subexpressions(&mut arena, &[twice, thrice], &config).unwrap();
        assert!(result.temporaries.is_empty());

        let four = arena.pow(sum, 4);
        let result =
            eliminate_common_subexpressions(&mut arena, &[twice, thrice, four], &config).unwrap();
        assert_eq!(result.temporaries[0].name, "tmp0");
    }

    #[test]
    fn test_deterministic() {
        let mut arena = ExprArena::new();
        let [p, q, t] = arena.symbols_from(["p", "q", "t"]);
        let one = arena.one();
        let s = arena.sub(one, t);
        let ps = arena.mul([p, s]);
        let qt = arena.mul([q, t]);
        let lerp = arena.add([ps, qt]);
        let e1 = arena.mul([lerp, s]);
        let e2 = arena.mul([lerp, t]);

        let config = CseConfig::default();
        let first = eliminate_common_subexpressions(&mut arena, &[e1, e2], &config).unwrap();
        let second = eliminate_common_subexpressions(&mut arena, &[e1, e2], &config).unwrap();
        assert_eq!(first, second);
    }
}
