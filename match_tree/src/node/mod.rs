/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The node kinds of a match tree and the dispatch between them.
//!
//! A node at depth `i` matches dimension `i`; terminal nodes sit below the
//! last dimension and hold results. Branch nodes are generic over their
//! element table, see [`branch`] for the child bookkeeping and [`table`] for
//! element storage.

pub(crate) mod branch;
pub(crate) mod table;

use self::branch::BranchNode;
use crate::arena::NodeIndex;
use crate::pattern::{Key, PatternValues, Selector};
use crate::{DimensionKind, IntegerInterval, NumberInterval};

/// A rule attached to a terminal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchResult {
    /// Index into the tree's value table.
    pub value_index: usize,
    pub priority: i64,
}

/// Leaf of the tree.
#[derive(Debug, Default)]
pub(crate) struct TerminalNode {
    results: Vec<MatchResult>,
}

impl TerminalNode {
    pub fn add_result(&mut self, result: MatchResult) {
        self.results.push(result);
    }

    /// Results in the order they were added.
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }
}

pub(crate) type StringNode = BranchNode<String>;
pub(crate) type IntegerNode = BranchNode<i64>;
pub(crate) type IntegerIntervalNode = BranchNode<IntegerInterval>;
pub(crate) type NumberIntervalNode = BranchNode<NumberInterval>;

#[derive(Debug)]
pub(crate) enum Node {
    Terminal(TerminalNode),
    String(StringNode),
    Integer(IntegerNode),
    IntegerInterval(IntegerIntervalNode),
    NumberInterval(NumberIntervalNode),
}

impl Node {
    /// A node without children or results for a dimension of `kind`, or a
    /// terminal for [`DimensionKind::None`].
    pub fn new(kind: DimensionKind) -> Self {
        match kind {
            DimensionKind::None => Self::Terminal(TerminalNode::default()),
            DimensionKind::String => Self::String(StringNode::default()),
            DimensionKind::Integer => Self::Integer(IntegerNode::default()),
            DimensionKind::IntegerInterval => Self::IntegerInterval(IntegerIntervalNode::default()),
            DimensionKind::NumberInterval => Self::NumberInterval(NumberIntervalNode::default()),
        }
    }

    pub const fn kind(&self) -> DimensionKind {
        match self {
            Self::Terminal(_) => DimensionKind::None,
            Self::String(_) => DimensionKind::String,
            Self::Integer(_) => DimensionKind::Integer,
            Self::IntegerInterval(_) => DimensionKind::IntegerInterval,
            Self::NumberInterval(_) => DimensionKind::NumberInterval,
        }
    }

    /// Return the child reached through the branch `selector` picks out of
    /// `values`, registering `vacant` as that child if there is none yet.
    ///
    /// # Panics
    ///
    /// Panics if `values` is not of this node's kind, or on a terminal.
    pub fn get_or_insert_child(
        &mut self,
        values: &PatternValues,
        selector: Selector,
        vacant: NodeIndex,
    ) -> NodeIndex {
        match (self, values) {
            (Self::String(node), PatternValues::String(values)) => {
                node.get_or_insert_child(selector.step(values), vacant)
            }
            (Self::Integer(node), PatternValues::Integer(values)) => {
                node.get_or_insert_child(selector.step(values), vacant)
            }
            (Self::IntegerInterval(node), PatternValues::IntegerInterval(values)) => {
                node.get_or_insert_child(selector.step(values), vacant)
            }
            (Self::NumberInterval(node), PatternValues::NumberInterval(values)) => {
                node.get_or_insert_child(selector.step(values), vacant)
            }
            (node, values) => unreachable!(
                "{} node reached with a {} pattern",
                node.kind(),
                values.kind()
            ),
        }
    }

    /// Append every child admitting `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not of this node's kind, or on a terminal.
    pub fn find_children(&self, key: &Key<'_>, out: &mut Vec<NodeIndex>) {
        match (self, key) {
            (Self::String(node), Key::String(s)) => node.find_children(s, out),
            (Self::Integer(node), Key::Integer(i)) => node.find_children(i, out),
            (Self::IntegerInterval(node), Key::IntegerInterval(i)) => node.find_children(i, out),
            (Self::NumberInterval(node), Key::NumberInterval(x)) => node.find_children(x, out),
            (node, key) => unreachable!("{} node reached with a {} key", node.kind(), key.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if this is not a terminal node.
    pub fn expect_terminal(&self) -> &TerminalNode {
        match self {
            Self::Terminal(terminal) => terminal,
            node => unreachable!("results read from a {} node", node.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if this is not a terminal node.
    pub fn expect_terminal_mut(&mut self) -> &mut TerminalNode {
        match self {
            Self::Terminal(terminal) => terminal,
            node => unreachable!("results added to a {} node", node.kind()),
        }
    }

    /// All children of this node, in search order. Empty for terminals.
    #[cfg_attr(
        not(any(test, feature = "unittest")),
        expect(dead_code, reason = "used by invariant checks")
    )]
    pub fn children(&self) -> Vec<NodeIndex> {
        fn collect<E: table::BranchElement>(node: &BranchNode<E>) -> Vec<NodeIndex> {
            node.exact_children()
                .map(|(_, child)| child)
                .chain(node.inverse_groups().iter().map(|group| group.child))
                .chain(node.any_child())
                .collect()
        }
        match self {
            Self::Terminal(_) => Vec::new(),
            Self::String(node) => collect(node),
            Self::Integer(node) => collect(node),
            Self::IntegerInterval(node) => collect(node),
            Self::NumberInterval(node) => collect(node),
        }
    }
}
