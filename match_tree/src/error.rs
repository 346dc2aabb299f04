/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for rule insertion, search and kind parsing.

use crate::DimensionKind;

/// The patterns of a rule, or the keys of a search, do not line up with the
/// tree's dimension sequence.
///
/// Always detected before the tree is touched, so a failed call leaves the
/// tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeMismatch {
    /// The rule has a different number of patterns than the tree has dimensions.
    #[error("unexpected number of match patterns; expected={expected} actual={actual}")]
    PatternCount {
        /// The number of dimensions of the tree.
        expected: usize,
        /// The number of patterns in the rule.
        actual: usize,
    },

    /// The search has a different number of keys than the tree has dimensions.
    #[error("unexpected number of match keys; expected={expected} actual={actual}")]
    KeyCount {
        /// The number of dimensions of the tree.
        expected: usize,
        /// The number of keys supplied.
        actual: usize,
    },

    /// A pattern or key has a different kind than its dimension.
    #[error("unexpected match type at position {position}; expected={expected} actual={actual}")]
    Kind {
        /// Zero-based dimension position.
        position: usize,
        /// The kind declared by the tree at `position`.
        expected: DimensionKind,
        /// The kind of the offending pattern or key.
        actual: DimensionKind,
    },
}

/// A dimension kind name or discriminant outside the recognized set.
///
/// Also returned when [`DimensionKind::None`] is used as a tree dimension,
/// since that kind is reserved for terminal nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match type {0:?}")]
pub struct UnknownKind(pub String);
