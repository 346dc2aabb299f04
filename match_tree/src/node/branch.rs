/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Non-terminal nodes: exact, inverse, and wildcard children of one dimension.
//!
//! # Inverse groups
//!
//! An inverse pattern with exclusion set `E` leads to the child of an inverse
//! group. Groups are not stored with their sets: a reverse index records, for
//! each excluded element, which groups exclude it, and each group records
//! `|E|`. The reverse index is separate from the exact children, so the two
//! never share a representative element.
//!
//! On insertion, a group matches `E` iff exactly `|E|` of the elements of `E`
//! list it and its own cardinality is `|E|`. Since `E` is duplicate free,
//! that holds only for a group excluding precisely `E`, whose child is then
//! reused. Two rules with the same exclusion set thus share one subtree.
//!
//! On search, every group not excluding the key yields its child.

use smallvec::SmallVec;

use super::table::{BranchElement, ElementTable, GroupId, GroupIds};
use crate::arena::NodeIndex;
use crate::pattern::Selector;

/// One resolved pattern element for a single dimension.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Step<'p, E> {
    /// The wildcard branch.
    Any,
    /// The inverse branch excluding these (duplicate free) elements.
    Inverse(&'p [E]),
    /// The exact branch for this element.
    Exact(&'p E),
}

impl Selector {
    /// Resolve this selector against a pattern's values.
    pub(crate) fn step<E>(self, values: &[E]) -> Step<'_, E> {
        match self {
            Self::Any => Step::Any,
            Self::Inverse => Step::Inverse(values),
            Self::Exact(i) => Step::Exact(&values[i]),
        }
    }
}

/// An inverse pattern's child, shared by every rule with the same exclusion
/// set at this node.
#[derive(Debug)]
pub(crate) struct InverseGroup {
    pub child: NodeIndex,
    /// Size of the exclusion set.
    pub cardinality: usize,
}

#[derive(Debug, Default)]
pub(crate) struct BranchNode<E: BranchElement> {
    /// Children of exact patterns, by element.
    exact: E::Table<NodeIndex>,
    /// Reverse index of the inverse groups, by excluded element.
    excluded: E::Table<GroupIds>,
    inverse: Vec<InverseGroup>,
    any: Option<NodeIndex>,
}

impl<E: BranchElement> BranchNode<E> {
    /// Return the child reached through `step`, registering `vacant` as that
    /// child if there is none yet.
    ///
    /// The caller must insert a node at `vacant` whenever it is returned.
    pub fn get_or_insert_child(&mut self, step: Step<'_, E>, vacant: NodeIndex) -> NodeIndex {
        match step {
            Step::Any => *self.any.get_or_insert(vacant),
            Step::Exact(element) => *self.exact.get_or_insert_with(element, || vacant),
            Step::Inverse(excluded) => self.get_or_insert_inverse_child(excluded, vacant),
        }
    }

    fn get_or_insert_inverse_child(&mut self, excluded: &[E], vacant: NodeIndex) -> NodeIndex {
        let cardinality = excluded.len();

        let mut counts = vec![0usize; self.inverse.len()];
        for element in excluded {
            if let Some(groups) = self.excluded.get(element) {
                for &group in groups {
                    counts[group as usize] += 1;
                }
            }
        }
        for (group, &count) in self.inverse.iter().zip(&counts) {
            if count == cardinality && group.cardinality == cardinality {
                return group.child;
            }
        }

        let group_id = GroupId::try_from(self.inverse.len()).expect("too many inverse groups");
        // Tolerant interval equality may map distinct elements to one entry.
        let mut listed = 0;
        for element in excluded {
            let groups = self.excluded.get_or_insert_with(element, GroupIds::new);
            if groups.last() != Some(&group_id) {
                groups.push(group_id);
                listed += 1;
            }
        }
        self.inverse.push(InverseGroup {
            child: vacant,
            cardinality: listed,
        });
        vacant
    }

    /// Append every child admitting `point`: exact matches, then inverse
    /// groups not excluding it, then the wildcard child.
    pub fn find_children(&self, point: &E::Point, out: &mut Vec<NodeIndex>) {
        out.extend(self.exact.matching(point).copied());

        let mut excluded: SmallVec<[bool; 8]> = SmallVec::from_elem(false, self.inverse.len());
        for groups in self.excluded.matching(point) {
            for &group in groups {
                excluded[group as usize] = true;
            }
        }
        out.extend(
            self.inverse
                .iter()
                .zip(&excluded)
                .filter(|(_, is_excluded)| !**is_excluded)
                .map(|(group, _)| group.child),
        );
        out.extend(self.any);
    }

    /// The wildcard child.
    pub const fn any_child(&self) -> Option<NodeIndex> {
        self.any
    }

    /// The inverse groups, in creation order.
    pub fn inverse_groups(&self) -> &[InverseGroup] {
        &self.inverse
    }

    /// The exact children with their elements.
    pub fn exact_children(&self) -> impl Iterator<Item = (&E, NodeIndex)> {
        self.exact.iter().map(|(element, &child)| (element, child))
    }

    /// The excluded elements with the groups excluding them.
    pub fn exclusions(&self) -> impl Iterator<Item = (&E, &GroupIds)> {
        self.excluded.iter()
    }

    /// The exclusion set of the inverse group at `group`, in table order.
    pub fn exclusion_set(&self, group: GroupId) -> impl Iterator<Item = &E> {
        self.excluded
            .iter()
            .filter(move |(_, groups)| groups.contains(&group))
            .map(|(element, _)| element)
    }
}
