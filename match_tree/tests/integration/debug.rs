/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Snapshot tests for the debug rendering of the tree structure.

use insta::assert_snapshot;
use match_tree::{DimensionKind, IntegerInterval, NumberInterval, Pattern};

use crate::helpers::{add, tree};

#[test]
fn test_debug_empty_tree() {
    let tree = tree::<()>(&[
        DimensionKind::IntegerInterval,
        DimensionKind::NumberInterval,
    ]);
    assert_snapshot!(format!("{tree:?}"), @r"
    MatchTree [INTEGER_INTERVAL, NUMBER_INTERVAL] rules=0 nodes=0
    ");
}

#[test]
fn test_debug_exact_inverse_and_any() {
    let mut tree = tree(&[DimensionKind::String, DimensionKind::Integer]);
    add(
        &mut tree,
        [Pattern::strings(["x"]), Pattern::integers([1])],
        (),
        0,
    );
    add(
        &mut tree,
        [
            Pattern::any(DimensionKind::String),
            Pattern::integers([2, 3]),
        ],
        (),
        5,
    );
    add(
        &mut tree,
        [
            Pattern::strings(["b", "a"]).inverted(),
            Pattern::any(DimensionKind::Integer),
        ],
        (),
        -1,
    );
    add(
        &mut tree,
        [Pattern::strings(["x"]), Pattern::integers([1])],
        (),
        2,
    );

    assert_snapshot!(format!("{tree:?}"), @r#"
    MatchTree [STRING, INTEGER] rules=4 nodes=8
    STRING
      ↳"x" → INTEGER
        ↳1 → [#0 p=0, #3 p=2]
      ↳!{"a", "b"} → INTEGER
        ↳* → [#2 p=-1]
      ↳* → INTEGER
        ↳2 → [#1 p=5]
        ↳3 → [#1 p=5]
    "#);
}

#[test]
fn test_debug_intervals() {
    let mut tree = tree(&[
        DimensionKind::IntegerInterval,
        DimensionKind::NumberInterval,
    ]);
    add(
        &mut tree,
        [
            Pattern::integer_intervals([IntegerInterval::closed(1, 5)]),
            Pattern::number_intervals([NumberInterval::open(0.5, 10.0)]),
        ],
        (),
        0,
    );
    add(
        &mut tree,
        [
            Pattern::integer_intervals([IntegerInterval::greater_than(-2)]),
            Pattern::number_intervals([NumberInterval::less_than(3.0)]),
        ],
        (),
        1,
    );

    assert_snapshot!(format!("{tree:?}"), @r"
    MatchTree [INTEGER_INTERVAL, NUMBER_INTERVAL] rules=2 nodes=5
    INTEGER_INTERVAL
      ↳[1, 5] → NUMBER_INTERVAL
        ↳(0.5, 10) → [#0 p=0]
      ↳(-2, +inf) → NUMBER_INTERVAL
        ↳(-inf, 3) → [#1 p=1]
    ");
}

#[test]
fn test_debug_zero_dimensions() {
    let mut tree = tree(&[]);
    add(&mut tree, Vec::<Pattern>::new(), (), 7);
    assert_snapshot!(format!("{tree:?}"), @r"
    MatchTree [] rules=1 nodes=1
    [#0 p=7]
    ");
}

#[test]
fn test_debug_integers_in_numeric_order() {
    let mut tree = tree(&[DimensionKind::Integer]);
    add(&mut tree, [Pattern::integers([10, 2])], (), 0);
    add(&mut tree, [Pattern::integers([30, 4]).inverted()], (), 0);

    assert_snapshot!(format!("{tree:?}"), @r"
    MatchTree [INTEGER] rules=2 nodes=4
    INTEGER
      ↳2 → [#0 p=0]
      ↳10 → [#0 p=0]
      ↳!{4, 30} → [#1 p=0]
    ");
}
