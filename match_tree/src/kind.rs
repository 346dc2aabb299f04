/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Dimension kinds and their canonical names.

use std::fmt;
use std::str::FromStr;

use crate::UnknownKind;

/// The kind of data a dimension matches on.
///
/// A [`MatchTree`](crate::MatchTree) is built from an ordered sequence of
/// kinds. Every rule must supply one pattern per dimension and every search
/// one key per dimension, each of the dimension's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DimensionKind {
    /// Reserved for terminal nodes. Not a valid tree dimension.
    None = 0,
    /// Exact string equality.
    String = 1,
    /// Exact 64-bit integer equality.
    Integer = 2,
    /// Integer point contained in an integer interval.
    IntegerInterval = 3,
    /// Floating point number contained in a number interval.
    NumberInterval = 4,
}

impl DimensionKind {
    /// All kinds, in discriminant order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::String,
        Self::Integer,
        Self::IntegerInterval,
        Self::NumberInterval,
    ];

    /// The canonical name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::IntegerInterval => "INTEGER_INTERVAL",
            Self::NumberInterval => "NUMBER_INTERVAL",
        }
    }

    /// Whether this kind may be used as a tree dimension.
    pub const fn is_dimension(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_owned()))
    }
}

impl TryFrom<u8> for DimensionKind {
    type Error = UnknownKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| UnknownKind(format!("UNKNOWN({value})")))
    }
}
