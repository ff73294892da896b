//! Property-based tests for canonical construction.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{ExprArena, ExprHandle, ExprNode};

    #[derive(Clone, Debug)]
    enum Tree {
        Var(usize),
        Num(i64),
        Add(Box<Tree>, Box<Tree>),
        Sub(Box<Tree>, Box<Tree>),
        Mul(Box<Tree>, Box<Tree>),
        Pow(Box<Tree>, u32),
    }

    const NAMES: [&str; 3] = ["x", "y", "t"];

    fn tree() -> impl Strategy<Value = Tree> {
        let leaf = prop_oneof![
            (0usize..3).prop_map(Tree::Var),
            (-3i64..4).prop_map(Tree::Num),
        ];
        leaf.prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| Tree::Add(Box::new(a), Box::new(b))),
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| Tree::Sub(Box::new(a), Box::new(b))),
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| Tree::Mul(Box::new(a), Box::new(b))),
                (inner, 0u32..3).prop_map(|(a, n)| Tree::Pow(Box::new(a), n)),
            ]
        })
    }

    fn build(arena: &mut ExprArena, tree: &Tree) -> ExprHandle {
        match tree {
            Tree::Var(i) => arena.symbol(NAMES[*i]),
            Tree::Num(n) => arena.integer(*n),
            Tree::Add(a, b) => {
                let (a, b) = (build(arena, a), build(arena, b));
                arena.add([a, b])
            }
            Tree::Sub(a, b) => {
                let (a, b) = (build(arena, a), build(arena, b));
                arena.sub(a, b)
            }
            Tree::Mul(a, b) => {
                let (a, b) = (build(arena, a), build(arena, b));
                arena.mul([a, b])
            }
            Tree::Pow(a, n) => {
                let a = build(arena, a);
                arena.pow(a, *n)
            }
        }
    }

    fn eval_tree(tree: &Tree, values: &[f64; 3]) -> f64 {
        match tree {
            Tree::Var(i) => values[*i],
            #[allow(clippy::cast_precision_loss)]
            Tree::Num(n) => *n as f64,
            Tree::Add(a, b) => eval_tree(a, values) + eval_tree(b, values),
            Tree::Sub(a, b) => eval_tree(a, values) - eval_tree(b, values),
            Tree::Mul(a, b) => eval_tree(a, values) * eval_tree(b, values),
            Tree::Pow(a, n) => eval_tree(a, values).powi(i32::try_from(*n).unwrap()),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn values() -> impl Strategy<Value = [f64; 3]> {
        [-2.0f64..2.0, -2.0f64..2.0, -2.0f64..2.0]
    }

    proptest! {
        #[test]
        fn canonical_form_preserves_value(t in tree(), v in values()) {
            let mut arena = ExprArena::new();
            let expr = build(&mut arena, &t);
            let bound = arena.values(&[("x", v[0]), ("y", v[1]), ("t", v[2])]);
            let value = arena.evaluate(expr, &bound).unwrap();
            prop_assert!(close(value, eval_tree(&t, &v)));
        }

        #[test]
        fn expansion_preserves_value(t in tree(), v in values()) {
            let mut arena = ExprArena::new();
            let expr = build(&mut arena, &t);
            let expanded = arena.expand(expr).unwrap();
            let bound = arena.values(&[("x", v[0]), ("y", v[1]), ("t", v[2])]);
            let value = arena.evaluate(expanded, &bound).unwrap();
            prop_assert!(close(value, eval_tree(&t, &v)));
        }

        #[test]
        fn sums_are_flat(a in tree(), b in tree(), k in -3i64..4) {
            let mut arena = ExprArena::new();
            let a = build(&mut arena, &a);
            let b = build(&mut arena, &b);
            let k = arena.integer(k);
            let scaled = arena.mul([k, a]);
            let _ = arena.add([b, scaled, a]);
            let _ = arena.sub(scaled, a);

            for index in 0..arena.len() {
                let handle = ExprHandle::new(u32::try_from(index).unwrap());
                if let ExprNode::Add(args) = arena.get(handle) {
                    for &arg in args {
                        prop_assert!(!matches!(arena.get(arg), ExprNode::Add(_)));
                    }
                }
            }
        }

        #[test]
        fn sums_and_products_commute(a in tree(), b in tree()) {
            let mut arena = ExprArena::new();
            let a = build(&mut arena, &a);
            let b = build(&mut arena, &b);
            prop_assert_eq!(arena.add([a, b]), arena.add([b, a]));
            prop_assert_eq!(arena.mul([a, b]), arena.mul([b, a]));
        }

        #[test]
        fn derivative_commutes_with_expansion(t in tree()) {
            let mut arena = ExprArena::new();
            let expr = build(&mut arena, &t);
            let var = arena.symbol("t");

            let expanded = arena.expand(expr).unwrap();
            let d_of_expanded = arena.derivative(expanded, var).unwrap();
            let left = arena.expand(d_of_expanded).unwrap();

            let d = arena.derivative(expr, var).unwrap();
            let right = arena.expand(d).unwrap();
            prop_assert_eq!(left, right);
        }
    }
}
