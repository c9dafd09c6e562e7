//! Structural comparison engine.
//!
//! The core entry point is [`compare`], which walks two snapshots in lockstep
//! and collects every [`Divergence`] in a deterministic order: map keys in
//! sorted order, sequence elements by ascending index.

use crate::diff::model::{Change, Divergence, Node, PathSegment, ValuePath};
use std::collections::{BTreeMap, BTreeSet};

/// Structural equality of two snapshots.
pub fn equal(expected: &Node, got: &Node) -> bool {
    compare(expected, got).is_empty()
}

/// Collect every point where `expected` and `got` diverge.
///
/// Returns an empty vector iff the snapshots are structurally equal.
pub fn compare(expected: &Node, got: &Node) -> Vec<Divergence> {
    let mut divergences = Vec::new();
    let mut path = ValuePath::root();
    walk(&mut path, expected, got, &mut divergences);
    divergences
}

fn walk(path: &mut ValuePath, expected: &Node, got: &Node, out: &mut Vec<Divergence>) {
    match (expected, got) {
        (Node::Map(a), Node::Map(b)) => walk_map(path, a, b, out),
        (Node::Seq(a), Node::Seq(b)) => walk_seq(path, a, b, out),
        (Node::Some(a), Node::Some(b)) => walk(path, a, b, out),
        (
            Node::Variant { name: a, value: va },
            Node::Variant { name: b, value: vb },
        ) if a == b => walk(path, va, vb, out),
        _ if expected == got => {}
        _ => record(
            path,
            Change::Changed {
                expected: expected.clone(),
                got: got.clone(),
            },
            out,
        ),
    }
}

fn walk_map(
    path: &mut ValuePath,
    expected: &BTreeMap<Node, Node>,
    got: &BTreeMap<Node, Node>,
    out: &mut Vec<Divergence>,
) {
    // Sorted union keeps the output independent of map iteration order.
    let keys: BTreeSet<&Node> = expected.keys().chain(got.keys()).collect();
    for key in keys {
        path.push(PathSegment::Key(key.clone()));
        side_by_side(path, expected.get(key), got.get(key), out);
        path.pop();
    }
}

fn walk_seq(path: &mut ValuePath, expected: &[Node], got: &[Node], out: &mut Vec<Divergence>) {
    for index in 0..expected.len().max(got.len()) {
        path.push(PathSegment::Index(index));
        side_by_side(path, expected.get(index), got.get(index), out);
        path.pop();
    }
}

fn side_by_side(
    path: &mut ValuePath,
    expected: Option<&Node>,
    got: Option<&Node>,
    out: &mut Vec<Divergence>,
) {
    match (expected, got) {
        (Some(e), Some(g)) => walk(path, e, g, out),
        (Some(e), None) => record(path, Change::Missing { expected: e.clone() }, out),
        (None, Some(g)) => record(path, Change::Unexpected { got: g.clone() }, out),
        (None, None) => {}
    }
}

fn record(path: &ValuePath, change: Change, out: &mut Vec<Divergence>) {
    out.push(Divergence {
        path: path.clone(),
        change,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::snapshot::snapshot;
    use serde::Serialize;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Item {
        name: String,
        tags: Vec<&'static str>,
        parent: Option<Box<Item>>,
    }

    fn item(name: &str, tags: Vec<&'static str>) -> Item {
        Item {
            name: name.to_string(),
            tags,
            parent: None,
        }
    }

    fn node<T: Serialize + ?Sized>(value: &T) -> Node {
        snapshot(value).unwrap()
    }

    #[test]
    fn test_identical_values_have_no_divergence() {
        let a = node(&item("a", vec!["x", "y"]));
        assert!(compare(&a, &a).is_empty());
        assert!(equal(&a, &a));
    }

    #[test]
    fn test_scalar_change_at_root() {
        let divergences = compare(&node("string1"), &node("string2"));
        assert_eq!(
            divergences,
            vec![Divergence {
                path: ValuePath::root(),
                change: Change::Changed {
                    expected: Node::Str("string1".to_string()),
                    got: Node::Str("string2".to_string()),
                },
            }]
        );
    }

    #[test]
    fn test_map_insertion_order_is_irrelevant() {
        let mut a = HashMap::new();
        a.insert("one", 1);
        a.insert("two", 2);
        a.insert("three", 3);

        let mut b = HashMap::new();
        b.insert("three", 3);
        b.insert("one", 1);
        b.insert("two", 2);

        assert!(equal(&node(&a), &node(&b)));
    }

    #[test]
    fn test_sequence_order_matters() {
        assert!(!equal(&node(&[1, 2]), &node(&[2, 1])));
    }

    #[test]
    fn test_sequence_length_mismatch_reports_extra_elements() {
        let divergences = compare(&node(&vec![1, 2, 3]), &node(&vec![1]));
        assert_eq!(divergences.len(), 2);
        assert_eq!(divergences[0].path.to_string(), "$[1]");
        assert_eq!(
            divergences[1].change,
            Change::Missing {
                expected: Node::Int(3)
            }
        );
    }

    #[test]
    fn test_nested_field_paths() {
        let mut a = item("child", vec!["x"]);
        a.parent = Some(Box::new(item("root", vec![])));
        let mut b = item("child", vec!["x"]);
        b.parent = Some(Box::new(item("other", vec![])));

        let divergences = compare(&node(&a), &node(&b));
        assert_eq!(divergences.len(), 1);
        assert_eq!(divergences[0].path.to_string(), "$.parent.name");
    }

    #[test]
    fn test_absent_reference_never_equals_present() {
        assert!(!equal(&node(&Some(Box::new(0u8))), &node(&None::<Box<u8>>)));
    }

    #[test]
    fn test_present_unit_differs_from_absent() {
        assert!(!equal(&node(&Some(())), &node(&None::<()>)));
        assert!(!equal(&node(&()), &node(&None::<()>)));
    }

    #[test]
    fn test_nested_option_levels_differ() {
        let some_none = node(&Some(None::<u8>));
        let none = node(&None::<Option<u8>>);
        assert!(!equal(&some_none, &none));
        assert!(equal(&some_none, &some_none));
        assert!(!equal(&node(&Some(Some(1u8))), &some_none));
    }

    #[test]
    fn test_float_edges() {
        assert!(!equal(&node(&f64::INFINITY), &node(&f64::NEG_INFINITY)));
        assert!(!equal(&node(&f64::NAN), &node(&None::<f64>)));
        assert!(equal(&node(&f64::NAN), &node(&f64::NAN)));
        assert!(!equal(&node(&1.0f64), &node(&1u8)));
    }

    #[test]
    fn test_wide_integers_and_tuple_keys_are_reflexive() {
        assert!(equal(&node(&u128::MAX), &node(&u128::MAX)));
        assert!(!equal(&node(&u128::MAX), &node(&(u128::MAX - 1))));

        let mut map = HashMap::new();
        map.insert((1, 2), "a");
        map.insert((3, 4), "b");
        assert!(equal(&node(&map), &node(&map)));
    }

    #[test]
    fn test_references_are_transparent() {
        let value = vec![1, 2, 3];
        let boxed = Box::new(value.clone());
        assert!(equal(&node(&value), &node(&&boxed)));
    }

    #[test]
    fn test_missing_and_unexpected_keys() {
        let a: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let b: HashMap<&str, i32> = [("b", 2), ("c", 3)].into_iter().collect();
        let divergences = compare(&node(&a), &node(&b));
        assert_eq!(divergences.len(), 2);

        assert_eq!(divergences[0].path.to_string(), "$.a");
        assert_eq!(
            divergences[0].change,
            Change::Missing {
                expected: Node::Int(1)
            }
        );

        assert_eq!(divergences[1].path.to_string(), "$.c");
        assert_eq!(divergences[1].change, Change::Unexpected { got: Node::Int(3) });
    }

    #[test]
    fn test_divergence_inside_some_keeps_path() {
        let divergences = compare(&node(&Some(vec![1, 2])), &node(&Some(vec![1, 3])));
        assert_eq!(divergences.len(), 1);
        assert_eq!(divergences[0].path.to_string(), "$[1]");
    }
}
