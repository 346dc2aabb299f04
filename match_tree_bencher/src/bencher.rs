/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::hint::black_box;

use criterion::{BatchSize, Criterion};
use match_tree::{Key, MatchTree, Rule};

use crate::corpus::{Corpus, KINDS};

/// A helper struct for benchmarking operations on a match tree loaded from a
/// generated corpus.
#[derive(Debug)]
pub struct OperationBencher {
    prefix: String,
    corpus: Corpus,
    tree: MatchTree<u32>,
}

impl OperationBencher {
    /// Load every rule of `corpus` into a fresh tree.
    ///
    /// Benchmark groups are prefixed with `prefix`.
    pub fn new(prefix: String, corpus: Corpus) -> Self {
        let tree = load(&corpus.rules);
        Self {
            prefix,
            corpus,
            tree,
        }
    }

    /// Benchmark building a tree from the whole corpus.
    pub fn load_group(&self, c: &mut Criterion) {
        let mut group = c.benchmark_group(format!("{}|Load", self.prefix));
        group.bench_function("Rust", |b| {
            b.iter_batched(
                || self.corpus.rules.clone(),
                |rules| load(black_box(&rules)),
                BatchSize::LargeInput,
            )
        });
        group.finish();
    }

    /// Benchmark adding one more rule to the loaded tree.
    pub fn add_rule_group(&self, c: &mut Criterion, rule: &Rule<u32>, label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.prefix));
        group.bench_function("Rust", |b| {
            b.iter_batched(
                || (load(&self.corpus.rules), rule.clone()),
                // Hand the tree back so that dropping it is not measured.
                |(mut tree, rule)| tree.add_rule(black_box(rule)).map(|()| tree),
                BatchSize::LargeInput,
            )
        });
        group.finish();
    }

    /// Benchmark searching the loaded tree for every key set of the corpus.
    pub fn search_group(&self, c: &mut Criterion) {
        let mut group = c.benchmark_group(format!("{}|Search", self.prefix));
        group.bench_function("Rust", |b| {
            b.iter(|| {
                self.corpus
                    .keys
                    .iter()
                    .map(|keys| search_len(&self.tree, black_box(keys)))
                    .sum::<usize>()
            })
        });
        group.finish();
    }

    /// Benchmark a single search.
    pub fn search_one_group(&self, c: &mut Criterion, keys: &[Key<'_>], label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.prefix));
        group.bench_function("Rust", |b| {
            b.iter(|| search_len(&self.tree, black_box(keys)))
        });
        group.finish();
    }
}

fn load(rules: &[Rule<u32>]) -> MatchTree<u32> {
    let mut tree = MatchTree::new(KINDS).expect("valid dimension kinds");
    for rule in rules {
        tree.add_rule(rule.clone())
            .expect("generated rules match the dimensions");
    }
    tree
}

fn search_len(tree: &MatchTree<u32>, keys: &[Key<'_>]) -> usize {
    tree.search(keys)
        .map(|found| found.len())
        .expect("generated keys match the dimensions")
}
