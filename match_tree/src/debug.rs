/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug rendering of the match tree structure.
//!
//! The tree is rendered one node per line, children indented below their
//! parent and prefixed with the edge leading to them:
//!
//! ```text
//! MatchTree [STRING, INTEGER] rules=2 nodes=4
//! STRING
//!   ↳"x" → INTEGER
//!     ↳1 → [#0 p=0]
//!   ↳* → INTEGER
//! ```
//!
//! Edges are `"s"` or `n` for exact strings and integers, the interval in
//! bracket notation for interval dimensions, `!{..}` for an inverse group's
//! exclusion set, and `*` for the wildcard. Exact edges come first, then
//! inverse groups in creation order, then the wildcard. Strings and integers
//! are sorted by value, both on exact edges and within exclusion sets;
//! intervals keep insertion order. Terminals list their results as
//! `#value_index p=priority`.

use std::cmp::Ordering;
use std::fmt;

use crate::MatchTree;
use crate::arena::NodeIndex;
use crate::node::Node;
use crate::node::branch::BranchNode;
use crate::node::table::{BranchElement, GroupId};

impl<V> fmt::Debug for MatchTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<&str> = self.dimension_kinds().iter().map(|k| k.as_str()).collect();
        write!(
            f,
            "MatchTree [{}] rules={} nodes={}",
            kinds.join(", "),
            self.num_rules(),
            self.num_nodes()
        )?;

        let Some(root) = self.root_index() else {
            return Ok(());
        };
        let mut stack = vec![(root, 0usize, None::<String>)];
        while let Some((node_idx, depth, edge)) = stack.pop() {
            let node = self.node(node_idx);
            f.write_str("\n")?;
            if let Some(edge) = edge {
                write!(f, "{:indent$}↳{edge} → ", "", indent = depth * 2)?;
            }
            write_node(f, node)?;

            // Reversed so that the first edge is popped first.
            for (label, child) in edges(node).into_iter().rev() {
                stack.push((child, depth + 1, Some(label)));
            }
        }
        Ok(())
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    let Node::Terminal(terminal) = node else {
        return f.write_str(node.kind().as_str());
    };
    let results: Vec<String> = terminal
        .results()
        .iter()
        .map(|r| format!("#{} p={}", r.value_index, r.priority))
        .collect();
    write!(f, "[{}]", results.join(", "))
}

fn edges(node: &Node) -> Vec<(String, NodeIndex)> {
    match node {
        Node::Terminal(_) => Vec::new(),
        Node::String(node) => branch_edges(node, |s| format!("{s:?}"), Ord::cmp),
        Node::Integer(node) => branch_edges(node, i64::to_string, Ord::cmp),
        Node::IntegerInterval(node) => branch_edges(node, ToString::to_string, insertion_order),
        Node::NumberInterval(node) => branch_edges(node, ToString::to_string, insertion_order),
    }
}

/// Keeps table order under a stable sort.
fn insertion_order<E>(_: &E, _: &E) -> Ordering {
    Ordering::Equal
}

fn branch_edges<E: BranchElement>(
    node: &BranchNode<E>,
    label: impl Fn(&E) -> String,
    order: impl Fn(&E, &E) -> Ordering,
) -> Vec<(String, NodeIndex)> {
    let mut exact: Vec<(&E, NodeIndex)> = node.exact_children().collect();
    exact.sort_by(|(a, _), (b, _)| order(*a, *b));

    let inverse = node
        .inverse_groups()
        .iter()
        .enumerate()
        .map(|(group, inverse)| {
            let mut excluded: Vec<&E> = node.exclusion_set(group as GroupId).collect();
            excluded.sort_by(|a, b| order(*a, *b));
            let excluded: Vec<String> = excluded.into_iter().map(&label).collect();
            (format!("!{{{}}}", excluded.join(", ")), inverse.child)
        });

    exact
        .into_iter()
        .map(|(element, child)| (label(element), child))
        .chain(inverse)
        .chain(node.any_child().map(|child| ("*".to_owned(), child)))
        .collect()
}
