/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: searching with one key per dimension.

use tracing::{debug, trace};

use super::MatchTree;
use crate::node::MatchResult;
use crate::{Key, ShapeMismatch};

impl<V> MatchTree<V> {
    /// Find the values of every rule matching `keys`.
    ///
    /// Values are ordered by priority, highest first, then by insertion
    /// order. A rule reachable through several of its expanded paths is
    /// returned once. No match, and an empty tree, give an empty result.
    ///
    /// # Errors
    ///
    /// Fails with [`ShapeMismatch`] if there is not exactly one key per
    /// dimension, each of the dimension's kind.
    pub fn search(&self, keys: &[Key<'_>]) -> Result<Vec<&V>, ShapeMismatch> {
        self.check_kinds(keys.iter().map(Key::kind), |expected, actual| {
            ShapeMismatch::KeyCount { expected, actual }
        })?;

        let Some(root) = self.root else {
            return Ok(Vec::new());
        };

        // Breadth first, one dimension at a time. The same node may appear
        // more than once; duplicates are resolved on the results.
        let mut nodes = vec![root];
        let mut next_nodes = Vec::new();
        for (depth, key) in keys.iter().enumerate() {
            for &node_idx in &nodes {
                self.nodes[node_idx].find_children(key, &mut next_nodes);
            }
            trace!(
                depth,
                candidates = next_nodes.len(),
                "match tree layer searched"
            );
            std::mem::swap(&mut nodes, &mut next_nodes);
            next_nodes.clear();
            if nodes.is_empty() {
                debug!(
                    dimensions = keys.len(),
                    depth,
                    "match tree search found no match"
                );
                return Ok(Vec::new());
            }
        }

        let results: Vec<MatchResult> = nodes
            .iter()
            .flat_map(|&node_idx| {
                self.nodes[node_idx]
                    .expect_terminal()
                    .results()
                    .iter()
                    .copied()
            })
            .collect();
        let resolved = resolve(results);

        debug!(
            dimensions = keys.len(),
            terminals = nodes.len(),
            matches = resolved.len(),
            "match tree search completed"
        );

        Ok(resolved
            .into_iter()
            .map(|value_index| &self.values[value_index])
            .collect())
    }
}

/// Order results by priority, highest first, then by value index, and keep
/// the first result of each value index.
///
/// Every result of a value index carries the rule's priority, so duplicates
/// end up adjacent.
fn resolve(mut results: Vec<MatchResult>) -> Vec<usize> {
    results.sort_unstable_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.value_index.cmp(&b.value_index))
    });
    results.dedup_by_key(|result| result.value_index);
    results.into_iter().map(|result| result.value_index).collect()
}
