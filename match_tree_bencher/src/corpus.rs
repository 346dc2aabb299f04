/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Synthetic rule sets and search keys.
//!
//! Corpora are generated from a fixed seed, so every run benchmarks the
//! same tree.

use match_tree::{DimensionKind, IntegerInterval, Key, NumberInterval, Pattern, Rule};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom as _;
use rand::{Rng as _, SeedableRng as _};

/// Vocabulary of the string dimensions.
const WORDS: [&str; 16] = [
    "eu-west", "eu-north", "us-east", "us-west", "ap-south", "ap-east", "sa-east", "af-south",
    "web", "api", "db", "cache", "queue", "batch", "stream", "search",
];

/// The dimension sequence of every generated corpus.
pub const KINDS: [DimensionKind; 4] = [
    DimensionKind::String,
    DimensionKind::String,
    DimensionKind::IntegerInterval,
    DimensionKind::NumberInterval,
];

/// A generated rule set together with keys to search for.
#[derive(Debug)]
pub struct Corpus {
    /// Rules with their insertion order as value.
    pub rules: Vec<Rule<u32>>,
    /// One key per dimension for each search.
    pub keys: Vec<[Key<'static>; 4]>,
}

impl Corpus {
    /// Generate `num_rules` rules and `num_keys` searches from `seed`.
    pub fn generate(seed: u64, num_rules: usize, num_keys: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rules = (0..num_rules)
            .map(|i| {
                let patterns = [
                    string_pattern(&mut rng),
                    string_pattern(&mut rng),
                    integer_interval_pattern(&mut rng),
                    number_interval_pattern(&mut rng),
                ];
                Rule::new(patterns, i as u32, rng.random_range(-10..=10))
            })
            .collect();
        let keys = (0..num_keys)
            .map(|_| {
                [
                    Key::String(word(&mut rng)),
                    Key::String(word(&mut rng)),
                    Key::IntegerInterval(rng.random_range(-100..=1100)),
                    Key::NumberInterval(rng.random_range(-1.0..2.0)),
                ]
            })
            .collect();
        Self { rules, keys }
    }
}

fn word(rng: &mut StdRng) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or(WORDS[0])
}

/// Wraps a pattern in a wildcard or an exclusion now and then.
fn with_flags(rng: &mut StdRng, pattern: Pattern) -> Pattern {
    match rng.random_range(0..10) {
        0 => Pattern::any(pattern.kind()),
        1 => pattern.inverted(),
        _ => pattern,
    }
}

fn string_pattern(rng: &mut StdRng) -> Pattern {
    let len = rng.random_range(1..=3);
    let values: Vec<&str> = (0..len).map(|_| word(rng)).collect();
    with_flags(rng, Pattern::strings(values))
}

fn integer_interval_pattern(rng: &mut StdRng) -> Pattern {
    let min = rng.random_range(0..100) * 10;
    let width = rng.random_range(1..20) * 10;
    with_flags(
        rng,
        Pattern::integer_intervals([IntegerInterval::closed(min, min + width)]),
    )
}

fn number_interval_pattern(rng: &mut StdRng) -> Pattern {
    let interval = if rng.random_bool(0.2) {
        NumberInterval::at_least(f64::from(rng.random_range(0..10u8)) / 10.0)
    } else {
        let min = f64::from(rng.random_range(0..10u8)) / 10.0;
        NumberInterval::open(min, min + 0.25)
    };
    with_flags(rng, Pattern::number_intervals([interval]))
}
