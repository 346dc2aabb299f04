/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the match tree using `proptest`.
//!
//! Searches are checked against a brute-force matcher evaluating every rule
//! on its own. Interval bounds are whole numbers and number keys are
//! multiples of one half, so the tolerance of number intervals never comes
//! into play.

#[cfg(not(miri))]
mod proptests {
    use match_tree::{
        AddRuleOptions, DimensionKind, IntegerInterval, Key, MatchTree, NumberInterval, Pattern,
        PatternValues, Rule, ShapeMismatch,
    };
    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest::sample::select;

    const KINDS: [DimensionKind; 4] = [
        DimensionKind::String,
        DimensionKind::Integer,
        DimensionKind::IntegerInterval,
        DimensionKind::NumberInterval,
    ];

    type Patterns = (Pattern, Pattern, Pattern, Pattern);
    type Keys = (&'static str, i64, i64, f64);

    fn bound() -> impl Strategy<Value = (Option<i64>, bool)> {
        (proptest::option::of(-4i64..5), any::<bool>())
    }

    fn integer_interval() -> impl Strategy<Value = IntegerInterval> {
        (bound(), bound()).prop_map(|((min, min_is_excluded), (max, max_is_excluded))| {
            IntegerInterval {
                min,
                min_is_excluded,
                max,
                max_is_excluded,
            }
        })
    }

    fn number_interval() -> impl Strategy<Value = NumberInterval> {
        integer_interval().prop_map(|interval| NumberInterval {
            min: interval.min.map(|min| min as f64),
            min_is_excluded: interval.min_is_excluded,
            max: interval.max.map(|max| max as f64),
            max_is_excluded: interval.max_is_excluded,
        })
    }

    fn values(kind: DimensionKind) -> BoxedStrategy<PatternValues> {
        match kind {
            DimensionKind::String => vec(select(vec!["a", "b", "c", "d"]), 0..4)
                .prop_map(|v| {
                    PatternValues::String(v.into_iter().map(String::from).collect())
                })
                .boxed(),
            DimensionKind::Integer => vec(-3i64..4, 0..4)
                .prop_map(PatternValues::Integer)
                .boxed(),
            DimensionKind::IntegerInterval => vec(integer_interval(), 0..3)
                .prop_map(PatternValues::IntegerInterval)
                .boxed(),
            DimensionKind::NumberInterval => vec(number_interval(), 0..3)
                .prop_map(PatternValues::NumberInterval)
                .boxed(),
            DimensionKind::None => unreachable!("not a dimension"),
        }
    }

    fn pattern(kind: DimensionKind) -> impl Strategy<Value = Pattern> {
        // Mostly plain patterns, with some wildcards and exclusions.
        (values(kind), 0u8..6).prop_map(|(values, flags)| Pattern {
            is_any: flags == 0,
            is_inverse: flags == 1 || flags == 2,
            values,
        })
    }

    fn patterns() -> impl Strategy<Value = Patterns> {
        (
            pattern(DimensionKind::String),
            pattern(DimensionKind::Integer),
            pattern(DimensionKind::IntegerInterval),
            pattern(DimensionKind::NumberInterval),
        )
    }

    fn keys() -> impl Strategy<Value = Keys> {
        (
            select(vec!["a", "b", "c", "d", "e"]),
            -5i64..6,
            -6i64..7,
            (-12i64..13).prop_map(|half| half as f64 / 2.0),
        )
    }

    fn as_vec((a, b, c, d): &Patterns) -> Vec<Pattern> {
        vec![a.clone(), b.clone(), c.clone(), d.clone()]
    }

    fn as_keys(&(s, i, ii, ni): &Keys) -> [Key<'static>; 4] {
        [
            Key::String(s),
            Key::Integer(i),
            Key::IntegerInterval(ii),
            Key::NumberInterval(ni),
        ]
    }

    fn pattern_matches(pattern: &Pattern, key: &Key<'_>, options: AddRuleOptions) -> bool {
        if pattern.is_any || (options.treat_empty_pattern_as_any && pattern.is_empty()) {
            return true;
        }
        let listed = match (&pattern.values, key) {
            (PatternValues::String(values), Key::String(key)) => values.iter().any(|v| v == key),
            (PatternValues::Integer(values), Key::Integer(key)) => values.contains(key),
            (PatternValues::IntegerInterval(values), Key::IntegerInterval(key)) => {
                values.iter().any(|v| v.contains(*key))
            }
            (PatternValues::NumberInterval(values), Key::NumberInterval(key)) => {
                values.iter().any(|v| v.contains(*key))
            }
            _ => unreachable!("generated with matching kinds"),
        };
        listed != pattern.is_inverse
    }

    fn brute_force(
        rules: &[(Patterns, i64)],
        keys: &[Key<'_>],
        options: AddRuleOptions,
    ) -> Vec<usize> {
        let mut matched: Vec<(i64, usize)> = rules
            .iter()
            .enumerate()
            .filter(|(_, (patterns, _))| {
                as_vec(patterns)
                    .iter()
                    .zip(keys)
                    .all(|(pattern, key)| pattern_matches(pattern, key, options))
            })
            .map(|(value, (_, priority))| (*priority, value))
            .collect();
        matched.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        matched.into_iter().map(|(_, value)| value).collect()
    }

    /// Search and copy out the found values.
    fn found(tree: &MatchTree<usize>, keys: &Keys) -> Vec<usize> {
        tree.search(&as_keys(keys))
            .unwrap()
            .into_iter()
            .copied()
            .collect()
    }

    fn build(rules: &[(Patterns, i64)], options: AddRuleOptions) -> MatchTree<usize> {
        let mut tree = MatchTree::new(KINDS).unwrap();
        for (value, (patterns, priority)) in rules.iter().enumerate() {
            let rule = Rule::new(as_vec(patterns), value, *priority);
            tree.add_rule_with_options(rule, options).unwrap();
        }
        tree
    }

    proptest::proptest! {
        #[test]
        fn prop_search_agrees_with_brute_force(
            rules in vec((patterns(), -2i64..3), 0..12),
            searches in vec(keys(), 1..10),
            treat_empty_pattern_as_any in any::<bool>(),
        ) {
            let options = AddRuleOptions {
                treat_empty_pattern_as_any,
            };
            let tree = build(&rules, options);

            for keys in &searches {
                let expected = brute_force(&rules, &as_keys(keys), options);
                prop_assert_eq!(found(&tree, keys), expected, "keys: {:?}", keys);
            }
        }

        #[test]
        fn prop_insertion_order_only_affects_ties(
            rules in vec((patterns(), -2i64..3), 0..8),
            searches in vec(keys(), 1..10),
        ) {
            let options = AddRuleOptions::default();
            let forward = build(&rules, options);
            let reversed_rules: Vec<_> = rules.iter().rev().cloned().collect();
            let backward = build(&reversed_rules, options);
            let last = rules.len().saturating_sub(1);

            for keys in &searches {
                let mut a = found(&forward, keys);
                let mut b: Vec<usize> = found(&backward, keys)
                    .into_iter()
                    .map(|value| last - value)
                    .collect();
                a.sort_unstable();
                b.sort_unstable();
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn prop_shape_mismatch_leaves_tree_untouched(
            rules in vec((patterns(), -2i64..3), 0..8),
            bad in patterns(),
            keep in 0usize..4,
            searches in vec(keys(), 1..5),
        ) {
            let mut tree = build(&rules, AddRuleOptions::default());
            let rendered = format!("{tree:?}");
            let before: Vec<Vec<usize>> = searches
                .iter()
                .map(|keys| found(&tree, keys))
                .collect();

            let mut truncated = as_vec(&bad);
            truncated.truncate(keep);
            let err = tree.add_rule(Rule::new(truncated, usize::MAX, 0)).unwrap_err();
            prop_assert_eq!(
                err,
                ShapeMismatch::PatternCount {
                    expected: 4,
                    actual: keep,
                }
            );

            let mut rotated = as_vec(&bad);
            rotated.rotate_left(1);
            let err = tree.add_rule(Rule::new(rotated, usize::MAX, 0)).unwrap_err();
            prop_assert_eq!(
                err,
                ShapeMismatch::Kind {
                    position: 0,
                    expected: DimensionKind::String,
                    actual: DimensionKind::Integer,
                }
            );

            prop_assert_eq!(format!("{tree:?}"), rendered);
            prop_assert_eq!(tree.num_rules(), rules.len());
            let after: Vec<Vec<usize>> = searches
                .iter()
                .map(|keys| found(&tree, keys))
                .collect();
            prop_assert_eq!(after, before);
        }
    }
}
