/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug invariant checks for the match tree.
//!
//! These checks run after every insertion in unit tests and with the
//! `unittest` feature flag, to catch structural violations early.

use super::MatchTree;
use crate::arena::NodeIndex;
use crate::node::Node;
use crate::node::branch::BranchNode;
use crate::node::table::{BranchElement, GroupId};

impl<V> MatchTree<V> {
    /// Verify the structure of the whole tree.
    ///
    /// - the root exists iff a rule was added, and has the first dimension's kind;
    /// - every node is reached from exactly one parent, and every arena node is reached;
    /// - every node at depth `i` has the kind of dimension `i`, terminals
    ///   sitting right below the last dimension;
    /// - every terminal result indexes the value table;
    /// - every inverse group is listed by exactly `cardinality` excluded elements.
    pub(crate) fn check_tree_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.nodes.len(), 0, "nodes exist without a root");
            assert!(self.values.is_empty(), "rules exist without a root");
            return;
        };

        let mut parents = vec![0usize; self.nodes.len()];
        parents[root.position()] = 1;
        let mut stack: Vec<(NodeIndex, usize)> = vec![(root, 0)];
        while let Some((node_idx, depth)) = stack.pop() {
            let node = &self.nodes[node_idx];
            assert_eq!(
                node.kind(),
                self.kind_at(depth),
                "node {node_idx:?} at depth {depth} has the wrong kind"
            );

            match node {
                Node::Terminal(terminal) => {
                    for result in terminal.results() {
                        assert!(
                            result.value_index < self.values.len(),
                            "terminal {node_idx:?} refers to value {} out of {}",
                            result.value_index,
                            self.values.len()
                        );
                    }
                }
                Node::String(node) => check_inverse_groups(node),
                Node::Integer(node) => check_inverse_groups(node),
                Node::IntegerInterval(node) => check_inverse_groups(node),
                Node::NumberInterval(node) => check_inverse_groups(node),
            }

            for child in node.children() {
                assert!(self.nodes.contains(child), "dangling child {child:?}");
                parents[child.position()] += 1;
                assert_eq!(
                    parents[child.position()],
                    1,
                    "node {child:?} has more than one parent"
                );
                stack.push((child, depth + 1));
            }
        }

        for (node_idx, _) in self.nodes.iter() {
            assert_eq!(
                parents[node_idx.position()],
                1,
                "node {node_idx:?} is unreachable"
            );
        }
    }
}

fn check_inverse_groups<E: BranchElement>(node: &BranchNode<E>) {
    let mut listed = vec![0usize; node.inverse_groups().len()];
    for (_, groups) in node.exclusions() {
        for (i, &group) in groups.iter().enumerate() {
            assert!(
                !groups[..i].contains(&group),
                "group {group} listed twice for one element"
            );
            listed[group as usize] += 1;
        }
    }
    for (group, (inverse, listed)) in node.inverse_groups().iter().zip(listed).enumerate() {
        assert_eq!(
            inverse.cardinality, listed,
            "inverse group {group} has cardinality {} but is listed by {listed} elements",
            inverse.cardinality
        );
        assert_eq!(
            node.exclusion_set(group as GroupId).count(),
            listed,
            "exclusion set of group {group} does not match the reverse index"
        );
    }
}
