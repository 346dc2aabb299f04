/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Inverse patterns with the same exclusion set share one subtree.

use match_tree::{DimensionKind, Key, MatchTree, NumberInterval, Pattern};
use pretty_assertions::assert_eq;

use crate::helpers::{add, search, tree};

fn excluding(values: &[i64], service: &str) -> [Pattern; 2] {
    [
        Pattern::integers(values.iter().copied()).inverted(),
        Pattern::strings([service]),
    ]
}

fn integer_string_tree() -> MatchTree<&'static str> {
    tree(&[DimensionKind::Integer, DimensionKind::String])
}

#[test]
fn test_same_exclusion_set_is_shared() {
    let mut tree = integer_string_tree();
    add(&mut tree, excluding(&[1, 2], "x"), "a", 0);
    // Root, inverse child, terminal.
    assert_eq!(tree.num_nodes(), 3);

    // Order and duplicates don't matter.
    add(&mut tree, excluding(&[2, 1, 2], "x"), "b", 0);
    assert_eq!(tree.num_nodes(), 3);

    assert_eq!(
        search(&tree, &[Key::Integer(3), Key::String("x")]),
        ["a", "b"]
    );
    assert_eq!(
        search(&tree, &[Key::Integer(2), Key::String("x")]),
        Vec::<&str>::new()
    );
}

#[test]
fn test_different_exclusion_sets_of_same_size() {
    let mut tree = integer_string_tree();
    add(&mut tree, excluding(&[1, 2], "x"), "a", 0);
    add(&mut tree, excluding(&[1, 3], "x"), "b", 0);
    assert_eq!(tree.num_nodes(), 5);

    assert_eq!(
        search(&tree, &[Key::Integer(1), Key::String("x")]),
        Vec::<&str>::new()
    );
    assert_eq!(search(&tree, &[Key::Integer(2), Key::String("x")]), ["b"]);
    assert_eq!(search(&tree, &[Key::Integer(3), Key::String("x")]), ["a"]);
    assert_eq!(
        search(&tree, &[Key::Integer(4), Key::String("x")]),
        ["a", "b"]
    );
}

#[test]
fn test_subset_and_superset_are_not_shared() {
    let mut tree = integer_string_tree();
    add(&mut tree, excluding(&[1, 2, 3], "x"), "wide", 0);
    add(&mut tree, excluding(&[1, 2], "x"), "narrow", 0);
    add(&mut tree, excluding(&[1, 2, 3, 4], "x"), "wider", 0);
    assert_eq!(tree.num_nodes(), 7);

    assert_eq!(
        search(&tree, &[Key::Integer(3), Key::String("x")]),
        ["narrow"]
    );
    assert_eq!(
        search(&tree, &[Key::Integer(4), Key::String("x")]),
        ["wide", "narrow"]
    );
    assert_eq!(
        search(&tree, &[Key::Integer(5), Key::String("x")]),
        ["wide", "narrow", "wider"]
    );
}

#[test]
fn test_empty_exclusion_set_is_shared() {
    let mut tree = integer_string_tree();
    add(&mut tree, excluding(&[], "x"), "a", 0);
    add(&mut tree, excluding(&[], "y"), "b", 0);
    // The second rule reuses the inverse child and only adds a terminal.
    assert_eq!(tree.num_nodes(), 4);
    assert_eq!(search(&tree, &[Key::Integer(0), Key::String("y")]), ["b"]);
}

#[test]
fn test_shared_subtree_keeps_growing_below() {
    let mut tree = integer_string_tree();
    add(&mut tree, excluding(&[7], "x"), "x", 0);
    add(&mut tree, excluding(&[7], "y"), "y", 0);
    add(
        &mut tree,
        [Pattern::integers([7]), Pattern::strings(["x"])],
        "exact",
        0,
    );
    // Root, inverse child with two terminals, exact child with one terminal.
    assert_eq!(tree.num_nodes(), 6);

    assert_eq!(
        search(&tree, &[Key::Integer(7), Key::String("x")]),
        ["exact"]
    );
    assert_eq!(search(&tree, &[Key::Integer(8), Key::String("y")]), ["y"]);
}

#[test]
fn test_inverse_interval_groups_use_interval_equality() {
    let mut tree = tree(&[DimensionKind::NumberInterval]);
    let excluded = |max: f64| {
        Pattern::number_intervals([NumberInterval::at_most(max)]).inverted()
    };
    add(&mut tree, [excluded(1.0)], "a", 0);
    add(&mut tree, [excluded(1.0 + 5e-11)], "b", 0);
    assert_eq!(tree.num_nodes(), 2);
    add(&mut tree, [excluded(2.0)], "c", 0);
    assert_eq!(tree.num_nodes(), 3);

    assert_eq!(search(&tree, &[Key::NumberInterval(1.5)]), ["a", "b"]);
    assert_eq!(search(&tree, &[Key::NumberInterval(3.0)]), ["a", "b", "c"]);
}

#[test]
fn test_exclusions_do_not_reuse_exact_intervals() {
    let mut tree = tree(&[DimensionKind::NumberInterval]);
    let wide = NumberInterval::closed(0.0, 10.0);
    let narrow = NumberInterval::closed(9e-11, 10.0);
    add(&mut tree, [Pattern::number_intervals([wide])], "A", 0);
    add(
        &mut tree,
        [Pattern::number_intervals([narrow]).inverted()],
        "B",
        0,
    );

    // Inside the wide interval, outside the narrow one.
    assert_eq!(search(&tree, &[Key::NumberInterval(-5e-11)]), ["A", "B"]);
}

#[test]
fn test_exact_intervals_do_not_reuse_exclusions() {
    let mut tree = tree(&[DimensionKind::NumberInterval]);
    let wide = NumberInterval::closed(0.0, 10.0);
    let narrow = NumberInterval::closed(9e-11, 10.0);
    add(
        &mut tree,
        [Pattern::number_intervals([wide]).inverted()],
        "B",
        0,
    );
    add(&mut tree, [Pattern::number_intervals([narrow])], "A", 0);

    assert_eq!(
        search(&tree, &[Key::NumberInterval(-5e-11)]),
        Vec::<&str>::new()
    );
}
