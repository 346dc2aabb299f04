/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: rule insertion.
//!
//! A rule is validated against the dimension sequence, its patterns are
//! canonicalized, and then it is threaded through the tree depth first. A
//! wildcard or inverse pattern takes a single branch; any other pattern
//! takes one branch per listed value, so the rule ends up on one terminal
//! per combination of listed values.

use tracing::debug;

use super::MatchTree;
use crate::arena::NodeIndex;
use crate::node::{MatchResult, Node};
use crate::{AddRuleOptions, Pattern, Rule, ShapeMismatch};

impl<V> MatchTree<V> {
    /// Add a rule with default [`AddRuleOptions`].
    ///
    /// # Errors
    ///
    /// See [`Self::add_rule_with_options`].
    pub fn add_rule(&mut self, rule: Rule<V>) -> Result<(), ShapeMismatch> {
        self.add_rule_with_options(rule, AddRuleOptions::default())
    }

    /// Add a rule.
    ///
    /// The rule's value gets the next value index, even if no path is
    /// generated for it (a pattern with no values matches nothing).
    ///
    /// # Errors
    ///
    /// Fails with [`ShapeMismatch`] if the rule does not have exactly one
    /// pattern per dimension, each of the dimension's kind. The tree is left
    /// untouched in that case.
    pub fn add_rule_with_options(
        &mut self,
        rule: Rule<V>,
        options: AddRuleOptions,
    ) -> Result<(), ShapeMismatch> {
        self.check_kinds(
            rule.patterns.iter().map(Pattern::kind),
            |expected, actual| ShapeMismatch::PatternCount { expected, actual },
        )?;

        let Rule {
            mut patterns,
            value,
            priority,
        } = rule;

        let value_index = self.values.len();
        self.values.push(value);

        for pattern in &mut patterns {
            pattern.values.dedup();
            if options.treat_empty_pattern_as_any && pattern.is_empty() {
                pattern.is_any = true;
            }
        }

        let nodes_before = self.nodes.len();
        let root = match self.root {
            Some(root) => root,
            None => {
                let root = self.nodes.insert(Node::new(self.kind_at(0)));
                self.root = Some(root);
                root
            }
        };

        let result = MatchResult {
            value_index,
            priority,
        };
        let paths = self.insert_paths(&patterns, 0, root, result);

        debug!(
            value_index,
            priority,
            paths,
            nodes_created = self.nodes.len() - nodes_before,
            "match tree rule added"
        );

        #[cfg(any(test, feature = "unittest"))]
        self.check_tree_invariants();

        Ok(())
    }

    /// Thread `patterns[depth..]` through the subtree at `node_idx`, attaching
    /// `result` to every terminal reached. Returns the number of terminals.
    fn insert_paths(
        &mut self,
        patterns: &[Pattern],
        depth: usize,
        node_idx: NodeIndex,
        result: MatchResult,
    ) -> usize {
        let Some(pattern) = patterns.get(depth) else {
            self.nodes[node_idx].expect_terminal_mut().add_result(result);
            return 1;
        };

        let child_kind = self.kind_at(depth + 1);
        let mut paths = 0;
        for selector in pattern.selectors() {
            let vacant = self.nodes.next_index();
            let child = self.nodes[node_idx].get_or_insert_child(&pattern.values, selector, vacant);
            if child == vacant {
                self.nodes.insert(Node::new(child_kind));
            }
            paths += self.insert_paths(patterns, depth + 1, child, result);
        }
        paths
    }
}
