/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! MatchTree - A multi-dimensional rule index.
//!
//! A [`MatchTree`] is built for an ordered sequence of [`DimensionKind`]s:
//! string equality, integer equality, integer intervals, and number
//! intervals. Callers register [`Rule`]s, each with one [`Pattern`] per
//! dimension, a value and a priority, and later search with one [`Key`] per
//! dimension to retrieve the values of every rule whose patterns all match.
//!
//! # Overview
//!
//! A pattern either lists values (matching keys equal to, or contained in,
//! any of them), is a wildcard, or is inverse (matching keys *not* matched by
//! its values). Results come back highest priority first, ties in insertion
//! order, each rule at most once.
//!
//! Internally, every dimension is one level of a tree whose nodes live in an
//! arena. Rules with a common prefix share nodes, a pattern listing several
//! values expands into one path per value, and inverse patterns with the
//! same exclusion set at the same node share a single subtree.
//!
//! # Example
//!
//! ```
//! use match_tree::{DimensionKind, IntegerInterval, Key, MatchTree, Pattern, Rule};
//!
//! let mut tree = MatchTree::new([DimensionKind::String, DimensionKind::IntegerInterval])?;
//!
//! tree.add_rule(Rule::new(
//!     [
//!         Pattern::strings(["admin", "root"]).inverted(),
//!         Pattern::integer_intervals([IntegerInterval::at_least(18)]),
//!     ],
//!     "adult user",
//!     0,
//! ))?;
//! tree.add_rule(Rule::new(
//!     [
//!         Pattern::any(DimensionKind::String),
//!         Pattern::any(DimensionKind::IntegerInterval),
//!     ],
//!     "anyone",
//!     -1,
//! ))?;
//!
//! let found = tree.search(&[Key::String("guest"), Key::IntegerInterval(30)])?;
//! assert_eq!(found, [&"adult user", &"anyone"]);
//!
//! let found = tree.search(&[Key::String("root"), Key::IntegerInterval(30)])?;
//! assert_eq!(found, [&"anyone"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod arena;
mod debug;
mod error;
mod interval;
mod kind;
mod node;
mod pattern;
mod tree;

pub use error::{ShapeMismatch, UnknownKind};
pub use interval::{EPSILON, IntegerInterval, NumberInterval};
pub use kind::DimensionKind;
pub use pattern::{AddRuleOptions, Key, Pattern, PatternValues, Rule};
pub use tree::MatchTree;
