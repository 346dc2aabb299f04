/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for match tree nodes.
//!
//! Nodes refer to their children by [`NodeIndex`] rather than owning them.
//! The tree only grows, so indices stay valid for the arena's lifetime.

use std::ops::{Index, IndexMut};

use crate::node::Node;

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub(crate) struct NodeIndex(u32);

impl NodeIndex {
    /// The position of the node in the arena.
    pub const fn position(self) -> usize {
        self.0 as usize
    }

    #[cfg(test)]
    pub(crate) const fn from_position(position: u32) -> Self {
        Self(position)
    }
}

/// Append-only arena of [`Node`]s.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create a new empty arena.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// The number of nodes stored in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The index the next inserted node will get.
    ///
    /// Nodes use it to register a child before the child exists; the caller
    /// must then [`insert`](Self::insert) the child.
    pub fn next_index(&self) -> NodeIndex {
        NodeIndex(
            u32::try_from(self.nodes.len()).expect("node arena exceeds u32::MAX entries"),
        )
    }

    /// Insert a node, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if the arena would hold more than `u32::MAX` nodes.
    pub fn insert(&mut self, node: Node) -> NodeIndex {
        let idx = self.next_index();
        self.nodes.push(node);
        idx
    }

    /// Whether `idx` refers to a node of this arena.
    #[cfg_attr(
        not(any(test, feature = "unittest")),
        expect(dead_code, reason = "used by invariant checks")
    )]
    pub fn contains(&self, idx: NodeIndex) -> bool {
        idx.position() < self.nodes.len()
    }

    /// Iterate over all nodes, alongside their indices.
    #[cfg_attr(
        not(any(test, feature = "unittest")),
        expect(dead_code, reason = "used by invariant checks")
    )]
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }
}

impl Index<NodeIndex> for NodeArena {
    type Output = Node;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.position()]
    }
}

impl IndexMut<NodeIndex> for NodeArena {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.position()]
    }
}
