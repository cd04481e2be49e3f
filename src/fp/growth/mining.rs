use log::info;

use super::builder::build_conditional_tree;
use super::cache::TreeCache;
use crate::fp::heap::FrequentPatternHeap;
use crate::fp::pattern::Pattern;
use crate::fp::status::StatusUpdater;
use crate::fp::tree::FPTree;

/// Minimum support for one top-level attribute; it only ever rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportThreshold(u64);

impl SupportThreshold {
    pub fn new(initial: u64) -> Self {
        Self(initial)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Raise to the least support of `heap` once it is full.
    pub fn ratchet(&mut self, heap: &FrequentPatternHeap) {
        if heap.is_full() && self.0 < heap.least_support() {
            self.0 = heap.least_support();
        }
    }
}

/// Mine every attribute of `wanted` (ascending ids) from the least frequent
/// to the most frequent, handing each heap to `emit`.
///
/// After each attribute the starting threshold for the next one becomes the
/// larger of itself and half the threshold the finished attribute reached.
pub fn fp_growth<F>(
    tree: &FPTree,
    min_support: u64,
    k: usize,
    wanted: &[usize],
    cache: &mut TreeCache,
    updater: &mut dyn StatusUpdater,
    mut emit: F,
) where
    F: FnMut(usize, FrequentPatternHeap),
{
    let mut min_support_value = min_support;
    let mut growth = Growth { k, cache, updater };

    for &attribute in tree.header_table_attributes().iter().rev() {
        if wanted.binary_search(&attribute).is_err() {
            continue;
        }
        info!("Mining FTree Tree for all patterns with {}", attribute);

        let mut threshold = SupportThreshold::new(min_support_value);
        let patterns = growth.growth(tree, &mut threshold, attribute);
        emit(attribute, patterns);

        min_support_value = min_support_value.max(threshold.get() / 2);
    }

    info!(
        "Tree Cache: First Level: Cache hits={} Cache Misses={}",
        growth.cache.hits(),
        growth.cache.misses()
    );
}

struct Growth<'a> {
    k: usize,
    cache: &'a mut TreeCache,
    updater: &'a mut dyn StatusUpdater,
}

impl Growth<'_> {
    /// Top-level step for `current`: every header attribute from `current`
    /// onwards contributes its first-level conditional tree.
    fn growth(
        &mut self,
        tree: &FPTree,
        threshold: &mut SupportThreshold,
        current: usize,
    ) -> FrequentPatternHeap {
        let mut patterns = FrequentPatternHeap::new(self.k, true);
        let Some(start) = tree.header_position(current) else {
            return patterns;
        };

        for index in start..tree.header_table_count() {
            let attribute = tree.attribute_at_index(index);
            let count = tree.header_support(attribute);
            if count < threshold.get() {
                continue;
            }
            self.updater
                .update(&format!("FPGrowth Algorithm for a given feature: {attribute}"));

            let mut conditional = self.cache.take_first_level(attribute);
            if conditional.is_empty() {
                build_conditional_tree(
                    tree,
                    attribute,
                    threshold.get(),
                    &mut conditional,
                    self.cache.scratch_mut(),
                );
            }

            let own = attribute == current;
            let returned = self.growth_top_down(&conditional, threshold, 1, own, current);
            self.cache.put_first_level(attribute, conditional);

            merge_heap(&mut patterns, returned, attribute, count, own);
            threshold.ratchet(&patterns);
        }
        patterns
    }

    /// Ascending header walk; the next level goes bottom-up.
    fn growth_top_down(
        &mut self,
        tree: &FPTree,
        threshold: &mut SupportThreshold,
        level: usize,
        conditional_of_current: bool,
        current: usize,
    ) -> FrequentPatternHeap {
        if !conditional_of_current && !holds_current(tree, current, threshold.get()) {
            return FrequentPatternHeap::new(self.k, true);
        }
        if tree.is_single_path() {
            return single_path_patterns(tree, self.k, threshold.get());
        }
        self.updater.update("Top Down Growth:");

        let mut patterns = FrequentPatternHeap::new(self.k, true);
        for index in 0..tree.header_table_count() {
            let attribute = tree.attribute_at_index(index);
            self.grow_branch(
                &mut patterns,
                tree,
                attribute,
                threshold,
                level,
                conditional_of_current,
                current,
            );
        }
        patterns
    }

    /// Descending header walk without dominance filtering; recurses into itself.
    fn growth_bottom_up(
        &mut self,
        tree: &FPTree,
        threshold: &mut SupportThreshold,
        level: usize,
        conditional_of_current: bool,
        current: usize,
    ) -> FrequentPatternHeap {
        if !conditional_of_current && !holds_current(tree, current, threshold.get()) {
            return FrequentPatternHeap::new(self.k, false);
        }
        if tree.is_single_path() {
            return single_path_patterns(tree, self.k, threshold.get());
        }
        self.updater.update("Bottom Up FP Growth");

        let mut patterns = FrequentPatternHeap::new(self.k, false);
        for index in (0..tree.header_table_count()).rev() {
            let attribute = tree.attribute_at_index(index);
            self.grow_branch(
                &mut patterns,
                tree,
                attribute,
                threshold,
                level,
                conditional_of_current,
                current,
            );
        }
        patterns
    }

    /// Mine the conditional tree of one header attribute at depth `level`
    /// and merge the result into `patterns`.
    ///
    /// Outside the current attribute's own branch, only `current` itself and
    /// attributes above it are followed.
    #[allow(clippy::too_many_arguments)]
    fn grow_branch(
        &mut self,
        patterns: &mut FrequentPatternHeap,
        tree: &FPTree,
        attribute: usize,
        threshold: &mut SupportThreshold,
        level: usize,
        conditional_of_current: bool,
        current: usize,
    ) {
        let count = tree.header_support(attribute);
        if count < threshold.get() {
            return;
        }

        let own = conditional_of_current || attribute == current;
        if !own && attribute < current {
            return;
        }

        let mut conditional = self.cache.take_tree(level);
        build_conditional_tree(
            tree,
            attribute,
            threshold.get(),
            &mut conditional,
            self.cache.scratch_mut(),
        );
        let returned = self.growth_bottom_up(&conditional, threshold, level + 1, own, current);
        self.cache.put_tree(level, conditional);

        merge_heap(patterns, returned, attribute, count, own);
        threshold.ratchet(patterns);
    }
}

/// Whether `current` survives in `tree` with enough support to be mined.
fn holds_current(tree: &FPTree, current: usize, min_support: u64) -> bool {
    tree.header_position(current)
        .map(|index| tree.header_support(tree.attribute_at_index(index)) >= min_support)
        .unwrap_or(false)
}

/// Closed form for a tree without branches: one pattern made of every chain
/// node whose count reaches `min_support`.
pub fn single_path_patterns(tree: &FPTree, k: usize, min_support: u64) -> FrequentPatternHeap {
    let mut patterns = FrequentPatternHeap::new(k, false);
    let mut pattern = Pattern::new();
    for (attribute, count) in tree.single_path_items(min_support) {
        pattern.add(attribute, count);
    }
    patterns.insert(pattern);
    patterns
}

/// Join `returned` with `attribute` into `patterns`, plus the bare
/// singleton when `add_attribute` is set and it still fits.
pub fn merge_heap(
    patterns: &mut FrequentPatternHeap,
    returned: FrequentPatternHeap,
    attribute: usize,
    count: u64,
    add_attribute: bool,
) {
    patterns.merge_from(returned, attribute, count);
    if add_attribute && patterns.addable(count) {
        patterns.insert(Pattern::singleton(attribute, count));
    }
}
