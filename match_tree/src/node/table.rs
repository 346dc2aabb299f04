/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Keyed storage of per-element data in a branch node.
//!
//! A branch node keeps two tables over the same element type: one mapping
//! exact pattern values to their child, and one mapping excluded values to
//! the inverse groups excluding them. Each table picks its own
//! representative for elements that compare equal.
//!
//! String and integer dimensions hash their elements; interval dimensions
//! keep a list and compare with [`Interval::equals`] on insertion and
//! [`Interval::contains`] on lookup.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::interval::Interval;
use crate::{IntegerInterval, NumberInterval};

/// Position of an inverse group within its node.
pub(crate) type GroupId = u32;

/// The inverse groups excluding one element, in creation order.
pub(crate) type GroupIds = SmallVec<[GroupId; 2]>;

/// Element-keyed storage of values of type `V`.
pub(crate) trait ElementTable<V: 'static>: Default + fmt::Debug {
    /// The pattern element type.
    type Element;
    /// The key type elements are matched against during search.
    type Point: ?Sized;

    /// The value of an element equal to `element`, if any.
    fn get(&self, element: &Self::Element) -> Option<&V>;

    /// The value of an element equal to `element`, inserted with `default`
    /// if missing.
    fn get_or_insert_with(
        &mut self,
        element: &Self::Element,
        default: impl FnOnce() -> V,
    ) -> &mut V;

    /// Every value whose element matches `point`.
    fn matching<'a>(&'a self, point: &'a Self::Point) -> impl Iterator<Item = &'a V>;

    /// All elements and their values.
    fn iter(&self) -> impl Iterator<Item = (&Self::Element, &V)>;
}

/// An element type a branch node can be keyed by.
pub(crate) trait BranchElement: Sized {
    /// The key type searched with.
    type Point: ?Sized;
    /// The table type used for this element.
    type Table<V: fmt::Debug + 'static>: ElementTable<V, Element = Self, Point = Self::Point>;
}

impl BranchElement for String {
    type Point = str;
    type Table<V: fmt::Debug + 'static> = ExactTable<String, V>;
}

impl BranchElement for i64 {
    type Point = i64;
    type Table<V: fmt::Debug + 'static> = ExactTable<i64, V>;
}

impl BranchElement for IntegerInterval {
    type Point = i64;
    type Table<V: fmt::Debug + 'static> = IntervalTable<IntegerInterval, V>;
}

impl BranchElement for NumberInterval {
    type Point = f64;
    type Table<V: fmt::Debug + 'static> = IntervalTable<NumberInterval, V>;
}

/// Elements compared by plain equality and looked up by hash.
pub(crate) trait ExactElement: Hash + Eq + Clone + fmt::Debug {
    /// The borrowed form searched with.
    type Point: Hash + Eq + ?Sized;
}

impl ExactElement for String {
    type Point = str;
}

impl ExactElement for i64 {
    type Point = i64;
}

/// Hashed table for string and integer dimensions.
#[derive(Debug)]
pub(crate) struct ExactTable<K, V>(FxHashMap<K, V>);

impl<K, V> Default for ExactTable<K, V> {
    fn default() -> Self {
        Self(FxHashMap::default())
    }
}

impl<K, V> ElementTable<V> for ExactTable<K, V>
where
    K: ExactElement + Borrow<K::Point>,
    V: fmt::Debug + 'static,
{
    type Element = K;
    type Point = K::Point;

    fn get(&self, element: &K) -> Option<&V> {
        self.0.get(<K as Borrow<K::Point>>::borrow(element))
    }

    fn get_or_insert_with(&mut self, element: &K, default: impl FnOnce() -> V) -> &mut V {
        self.0.entry(element.clone()).or_insert_with(default)
    }

    fn matching<'a>(&'a self, point: &'a K::Point) -> impl Iterator<Item = &'a V> {
        self.0.get(point).into_iter()
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter()
    }
}

/// Linearly scanned table for interval dimensions, in insertion order.
#[derive(Debug)]
pub(crate) struct IntervalTable<I, V>(Vec<(I, V)>);

impl<I, V> Default for IntervalTable<I, V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<I, V> ElementTable<V> for IntervalTable<I, V>
where
    I: Interval + Clone + fmt::Debug,
    V: fmt::Debug + 'static,
{
    type Element = I;
    type Point = I::Point;

    fn get(&self, element: &I) -> Option<&V> {
        self.0
            .iter()
            .find(|(interval, _)| interval.equals(element))
            .map(|(_, value)| value)
    }

    fn get_or_insert_with(&mut self, element: &I, default: impl FnOnce() -> V) -> &mut V {
        let pos = match self.0.iter().position(|(interval, _)| interval.equals(element)) {
            Some(pos) => pos,
            None => {
                self.0.push((element.clone(), default()));
                self.0.len() - 1
            }
        };
        &mut self.0[pos].1
    }

    fn matching<'a>(&'a self, point: &'a I::Point) -> impl Iterator<Item = &'a V> {
        let point = *point;
        self.0
            .iter()
            .filter(move |(interval, _)| interval.contains(point))
            .map(|(_, value)| value)
    }

    fn iter(&self) -> impl Iterator<Item = (&I, &V)> {
        self.0.iter().map(|(interval, value)| (interval, value))
    }
}
