/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Rules, patterns, and search keys.

use rustc_hash::FxHashSet;

use crate::{DimensionKind, IntegerInterval, NumberInterval};

/// The values a [`Pattern`] lists for its dimension, tagged by kind.
#[derive(Debug, Clone)]
pub enum PatternValues {
    /// Strings for a [`DimensionKind::String`] dimension.
    String(Vec<String>),
    /// Integers for a [`DimensionKind::Integer`] dimension.
    Integer(Vec<i64>),
    /// Intervals for a [`DimensionKind::IntegerInterval`] dimension.
    IntegerInterval(Vec<IntegerInterval>),
    /// Intervals for a [`DimensionKind::NumberInterval`] dimension.
    NumberInterval(Vec<NumberInterval>),
}

impl PatternValues {
    /// An empty value list of the given kind.
    ///
    /// # Panics
    ///
    /// Panics on [`DimensionKind::None`], which has no values.
    pub fn empty(kind: DimensionKind) -> Self {
        match kind {
            DimensionKind::String => Self::String(Vec::new()),
            DimensionKind::Integer => Self::Integer(Vec::new()),
            DimensionKind::IntegerInterval => Self::IntegerInterval(Vec::new()),
            DimensionKind::NumberInterval => Self::NumberInterval(Vec::new()),
            DimensionKind::None => panic!("patterns cannot be of kind {kind}"),
        }
    }

    /// The dimension kind these values belong to.
    pub const fn kind(&self) -> DimensionKind {
        match self {
            Self::String(_) => DimensionKind::String,
            Self::Integer(_) => DimensionKind::Integer,
            Self::IntegerInterval(_) => DimensionKind::IntegerInterval,
            Self::NumberInterval(_) => DimensionKind::NumberInterval,
        }
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::String(v) => v.len(),
            Self::Integer(v) => v.len(),
            Self::IntegerInterval(v) => v.len(),
            Self::NumberInterval(v) => v.len(),
        }
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove duplicates under the kind's equality, keeping the first
    /// occurrence of each value.
    ///
    /// Inverse subtree sharing relies on exclusion sets being duplicate free.
    pub(crate) fn dedup(&mut self) {
        match self {
            Self::String(v) => {
                let mut seen = FxHashSet::default();
                v.retain(|s| seen.insert(s.clone()));
            }
            Self::Integer(v) => {
                let mut seen = FxHashSet::default();
                v.retain(|i| seen.insert(*i));
            }
            Self::IntegerInterval(v) => dedup_by(v, IntegerInterval::equals),
            Self::NumberInterval(v) => dedup_by(v, NumberInterval::equals),
        }
    }
}

/// Quadratic dedup for element types without a hash.
fn dedup_by<T>(values: &mut Vec<T>, eq: impl Fn(&T, &T) -> bool) {
    let mut kept: Vec<T> = Vec::with_capacity(values.len());
    for value in values.drain(..) {
        if !kept.iter().any(|k| eq(k, &value)) {
            kept.push(value);
        }
    }
    *values = kept;
}

/// How one rule matches one dimension.
///
/// - `is_any`: matches every key of the dimension.
/// - `is_inverse`: matches every key not matched by `values`.
/// - otherwise: matches keys matched by any of `values`.
///
/// `is_any` takes precedence when both flags are set. A pattern with neither
/// flag and no values matches nothing, unless inserted with
/// [`AddRuleOptions::treat_empty_pattern_as_any`].
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Wildcard flag.
    pub is_any: bool,
    /// Exclusion flag.
    pub is_inverse: bool,
    /// The listed values; also determines the pattern's kind.
    pub values: PatternValues,
}

impl Pattern {
    /// A wildcard pattern of the given kind.
    ///
    /// # Panics
    ///
    /// Panics on [`DimensionKind::None`].
    pub fn any(kind: DimensionKind) -> Self {
        Self {
            is_any: true,
            is_inverse: false,
            values: PatternValues::empty(kind),
        }
    }

    /// A pattern with neither flag and no values of the given kind.
    ///
    /// # Panics
    ///
    /// Panics on [`DimensionKind::None`].
    pub fn empty(kind: DimensionKind) -> Self {
        Self::from(PatternValues::empty(kind))
    }

    /// Matches any of the given strings.
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from(PatternValues::String(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Matches any of the given integers.
    pub fn integers(values: impl IntoIterator<Item = i64>) -> Self {
        Self::from(PatternValues::Integer(values.into_iter().collect()))
    }

    /// Matches points inside any of the given intervals.
    pub fn integer_intervals(values: impl IntoIterator<Item = IntegerInterval>) -> Self {
        Self::from(PatternValues::IntegerInterval(values.into_iter().collect()))
    }

    /// Matches points inside any of the given intervals.
    pub fn number_intervals(values: impl IntoIterator<Item = NumberInterval>) -> Self {
        Self::from(PatternValues::NumberInterval(values.into_iter().collect()))
    }

    /// Turn this pattern into one matching everything its values don't.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.is_inverse = true;
        self
    }

    /// The dimension kind of this pattern.
    pub const fn kind(&self) -> DimensionKind {
        self.values.kind()
    }

    /// Whether the pattern has no flags and no values.
    pub fn is_empty(&self) -> bool {
        !self.is_any && !self.is_inverse && self.values.is_empty()
    }

    /// The branches this pattern takes out of a node, in insertion order.
    pub(crate) fn selectors(&self) -> impl Iterator<Item = Selector> {
        let (single, exact) = if self.is_any {
            (Some(Selector::Any), 0..0)
        } else if self.is_inverse {
            (Some(Selector::Inverse), 0..0)
        } else {
            (None, 0..self.values.len())
        };
        single.into_iter().chain(exact.map(Selector::Exact))
    }
}

impl From<PatternValues> for Pattern {
    fn from(values: PatternValues) -> Self {
        Self {
            is_any: false,
            is_inverse: false,
            values,
        }
    }
}

/// Which branch of a node one expanded path of a pattern goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selector {
    /// The wildcard child.
    Any,
    /// The inverse group for the pattern's whole value set.
    Inverse,
    /// The exact child for the value at this position of the pattern.
    Exact(usize),
}

/// A rule: one pattern per dimension, the value to return on a match, and a
/// priority. Higher priorities come first in search results.
#[derive(Debug, Clone)]
pub struct Rule<V> {
    /// One pattern per dimension, in dimension order.
    pub patterns: Vec<Pattern>,
    /// The value returned by matching searches.
    pub value: V,
    /// Result ordering weight, higher first.
    pub priority: i64,
}

impl<V> Rule<V> {
    /// Create a new rule.
    pub fn new(patterns: impl IntoIterator<Item = Pattern>, value: V, priority: i64) -> Self {
        Self {
            patterns: patterns.into_iter().collect(),
            value,
            priority,
        }
    }
}

/// Options for [`MatchTree::add_rule_with_options`](crate::MatchTree::add_rule_with_options).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddRuleOptions {
    /// Treat patterns with no flags and no values as wildcards.
    pub treat_empty_pattern_as_any: bool,
}

/// One concrete search value for one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key<'a> {
    /// Key for a [`DimensionKind::String`] dimension.
    String(&'a str),
    /// Key for a [`DimensionKind::Integer`] dimension.
    Integer(i64),
    /// Point key for a [`DimensionKind::IntegerInterval`] dimension.
    IntegerInterval(i64),
    /// Point key for a [`DimensionKind::NumberInterval`] dimension.
    NumberInterval(f64),
}

impl Key<'_> {
    /// The dimension kind this key is for.
    pub const fn kind(&self) -> DimensionKind {
        match self {
            Self::String(_) => DimensionKind::String,
            Self::Integer(_) => DimensionKind::Integer,
            Self::IntegerInterval(_) => DimensionKind::IntegerInterval,
            Self::NumberInterval(_) => DimensionKind::NumberInterval,
        }
    }
}
