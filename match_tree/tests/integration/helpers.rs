/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Shared test helpers for the match tree integration tests.

use match_tree::{DimensionKind, Key, MatchTree, Pattern, Rule};

/// Install a `tracing` subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a tree over `kinds`, panicking on invalid kinds.
pub fn tree<V>(kinds: &[DimensionKind]) -> MatchTree<V> {
    init_tracing();
    MatchTree::new(kinds.iter().copied()).expect("valid dimension kinds")
}

/// Add a rule, panicking on shape mismatches.
pub fn add<V>(
    tree: &mut MatchTree<V>,
    patterns: impl IntoIterator<Item = Pattern>,
    value: V,
    priority: i64,
) {
    tree.add_rule(Rule::new(patterns, value, priority))
        .expect("rule should match the tree's shape");
}

/// Search, panicking on shape mismatches, and clone the found values.
pub fn search<V: Clone>(tree: &MatchTree<V>, keys: &[Key<'_>]) -> Vec<V> {
    tree.search(keys)
        .expect("keys should match the tree's shape")
        .into_iter()
        .cloned()
        .collect()
}
