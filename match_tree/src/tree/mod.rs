/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The match tree.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: Write path (validation, canonicalization, path expansion)
//! - [`search`]: Read path (layered traversal, result resolution)

mod insert;
#[cfg(any(test, feature = "unittest"))]
mod invariants;
mod search;

use crate::arena::{NodeArena, NodeIndex};
use crate::node::Node;
use crate::{DimensionKind, ShapeMismatch, UnknownKind};

/// A multi-dimensional rule index.
///
/// The tree is built for a fixed sequence of [`DimensionKind`]s. Rules
/// register one [`Pattern`](crate::Pattern) per dimension; searches supply
/// one [`Key`](crate::Key) per dimension and get back the values of every
/// rule whose patterns all match, highest priority first and in insertion
/// order among equal priorities.
///
/// Rules sharing a prefix of patterns share the nodes of that prefix. A rule
/// listing several values in a dimension expands into one path per value.
///
/// The tree is a plain mutable structure: concurrent searches are fine once
/// insertions are over, interleaving both needs external synchronization.
pub struct MatchTree<V> {
    /// The dimension sequence, fixed at construction.
    kinds: Vec<DimensionKind>,
    /// Rule values, indexed by value index.
    values: Vec<V>,
    /// Arena holding all tree nodes.
    nodes: NodeArena,
    /// Created with the first rule, never replaced afterwards.
    root: Option<NodeIndex>,
}

impl<V> MatchTree<V> {
    /// Create an empty tree over the given dimension sequence.
    ///
    /// # Errors
    ///
    /// Fails with [`UnknownKind`] if the sequence contains
    /// [`DimensionKind::None`], which is reserved for terminal nodes.
    pub fn new(kinds: impl IntoIterator<Item = DimensionKind>) -> Result<Self, UnknownKind> {
        let kinds: Vec<_> = kinds.into_iter().collect();
        if let Some(kind) = kinds.iter().find(|kind| !kind.is_dimension()) {
            return Err(UnknownKind(kind.to_string()));
        }
        Ok(Self {
            kinds,
            values: Vec::new(),
            nodes: NodeArena::new(),
            root: None,
        })
    }

    /// The dimension sequence of this tree.
    pub fn dimension_kinds(&self) -> &[DimensionKind] {
        &self.kinds
    }

    /// The number of rules added so far.
    pub fn num_rules(&self) -> usize {
        self.values.len()
    }

    /// Whether no rule has been added yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The number of nodes in the tree, terminals included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Rule values in insertion order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// The root node index, once a rule was added.
    pub(crate) const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    pub(crate) fn node(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx]
    }

    /// The kind of the nodes at `depth`; terminals below the last dimension.
    fn kind_at(&self, depth: usize) -> DimensionKind {
        self.kinds.get(depth).copied().unwrap_or(DimensionKind::None)
    }

    /// Check that `actual` lines up with the dimension sequence.
    fn check_kinds(
        &self,
        actual: impl ExactSizeIterator<Item = DimensionKind>,
        count_mismatch: impl FnOnce(usize, usize) -> ShapeMismatch,
    ) -> Result<(), ShapeMismatch> {
        let expected = self.kinds.len();
        if actual.len() != expected {
            return Err(count_mismatch(expected, actual.len()));
        }
        for (position, (&expected, actual)) in self.kinds.iter().zip(actual).enumerate() {
            if expected != actual {
                return Err(ShapeMismatch::Kind {
                    position,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}
