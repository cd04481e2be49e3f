//! Capacity-bounded collection of the best patterns seen so far.
//!
//! Patterns sit in a slab whose freed slots are reused; the priority queue is a binary min-heap of slab
//! slots ordered by [`Pattern::cmp_rank`]. Equal-rank patterns are never
//! swapped by a sift, so their placement (and therefore the drain order) is
//! fixed by insertion order.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::pattern::Pattern;

/// Top-K max-heap of patterns with optional subpattern dominance.
#[derive(Debug, Clone)]
pub struct FrequentPatternHeap {
    capacity: usize,
    sub_pattern_check: bool,
    slots: Vec<Pattern>,
    free_slots: Vec<usize>,
    queue: Vec<usize>,
    support_index: HashMap<u64, Vec<usize>>,
}

impl FrequentPatternHeap {
    /// `sub_pattern_check` turns on dominance filtering among patterns of
    /// identical support.
    pub fn new(capacity: usize, sub_pattern_check: bool) -> Self {
        Self {
            capacity,
            sub_pattern_check,
            slots: Vec::with_capacity(capacity.min(64)),
            free_slots: Vec::new(),
            queue: Vec::with_capacity(capacity.min(64)),
            support_index: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    fn pattern(&self, slot: usize) -> &Pattern {
        &self.slots[slot]
    }

    /// The minimum held pattern.
    pub fn least(&self) -> Option<&Pattern> {
        self.queue.first().map(|&slot| self.pattern(slot))
    }

    /// Support of the minimum held pattern, zero while empty.
    pub fn least_support(&self) -> u64 {
        self.least().map_or(0, Pattern::support)
    }

    /// Whether a pattern of `support` could still enter the heap.
    pub fn addable(&self, support: u64) -> bool {
        !self.is_full() || self.least().map_or(true, |least| least.support() <= support)
    }

    /// Held patterns in queue (array) order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.queue.iter().map(move |&slot| self.pattern(slot))
    }

    pub fn insert(&mut self, pattern: Pattern) {
        if pattern.is_empty() {
            return;
        }

        if self.is_full() {
            let beats_least = self
                .least()
                .map_or(true, |least| pattern.cmp_rank(least) == Ordering::Greater);
            if beats_least && self.add_pattern(pattern) {
                if let Some(evicted) = self.poll_slot() {
                    self.release(evicted);
                }
            }
        } else {
            self.add_pattern(pattern);
        }
    }

    /// Join every pattern of `other` with `attribute`.
    ///
    /// The joined support is the smaller of `attribute_support` and the
    /// pattern's own support; patterns that could not enter are skipped.
    pub fn merge_from(&mut self, other: FrequentPatternHeap, attribute: usize, attribute_support: u64) {
        for mut pattern in other.into_patterns() {
            let support = attribute_support.min(pattern.support());
            if self.addable(support) {
                pattern.add(attribute, support);
                self.insert(pattern);
            }
        }
    }

    /// Drain least first, then reverse: highest support first.
    pub fn into_descending(mut self) -> Vec<Pattern> {
        let mut patterns = Vec::with_capacity(self.queue.len());
        while let Some(slot) = self.poll_slot() {
            patterns.push(std::mem::take(&mut self.slots[slot]));
        }
        patterns.reverse();
        patterns
    }

    /// Held patterns in queue (array) order, by value.
    fn into_patterns(mut self) -> Vec<Pattern> {
        let queue = std::mem::take(&mut self.queue);
        queue
            .into_iter()
            .map(|slot| std::mem::take(&mut self.slots[slot]))
            .collect()
    }

    /// Store `pattern` unless a held pattern of equal support dominates it.
    ///
    /// Returns true when the heap grew by one. A pattern that replaces the
    /// held patterns it dominates returns false.
    fn add_pattern(&mut self, pattern: Pattern) -> bool {
        if !self.sub_pattern_check {
            self.push(pattern);
            return true;
        }

        let support = pattern.support();
        let held = self.support_index.get(&support).map(Vec::as_slice).unwrap_or(&[]);
        if held.iter().any(|&slot| pattern.is_sub_pattern_of(self.pattern(slot))) {
            return false;
        }
        let dominated: Vec<usize> = held
            .iter()
            .copied()
            .filter(|&slot| self.pattern(slot).is_sub_pattern_of(&pattern))
            .collect();

        for &slot in &dominated {
            if let Some(position) = self.queue.iter().position(|&queued| queued == slot) {
                self.remove_at(position);
            }
            self.release(slot);
        }

        let slot = self.push(pattern);
        self.support_index.entry(support).or_default().push(slot);
        dominated.is_empty()
    }

    fn push(&mut self, pattern: Pattern) -> usize {
        let slot = match self.free_slots.pop() {
            Some(slot) => {
                self.slots[slot] = pattern;
                slot
            }
            None => {
                self.slots.push(pattern);
                self.slots.len() - 1
            }
        };
        let k = self.queue.len();
        self.queue.push(slot);
        self.sift_up(k, slot);
        slot
    }

    /// Return a slot to the free list and forget it in the support index.
    fn release(&mut self, slot: usize) {
        let pattern = std::mem::take(&mut self.slots[slot]);
        if let Some(held) = self.support_index.get_mut(&pattern.support()) {
            held.retain(|&other| other != slot);
        }
        self.free_slots.push(slot);
    }

    fn rank(&self, a: usize, b: usize) -> Ordering {
        self.pattern(a).cmp_rank(self.pattern(b))
    }

    fn poll_slot(&mut self) -> Option<usize> {
        let result = *self.queue.first()?;
        let last = self.queue.pop()?;
        if !self.queue.is_empty() {
            self.sift_down(0, last);
        }
        Some(result)
    }

    fn remove_at(&mut self, index: usize) {
        let Some(moved) = self.queue.pop() else {
            return;
        };
        if index == self.queue.len() {
            return;
        }
        self.sift_down(index, moved);
        if self.queue[index] == moved {
            self.sift_up(index, moved);
        }
    }

    fn sift_up(&mut self, mut k: usize, slot: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            let above = self.queue[parent];
            if self.rank(slot, above) != Ordering::Less {
                break;
            }
            self.queue[k] = above;
            k = parent;
        }
        self.queue[k] = slot;
    }

    fn sift_down(&mut self, mut k: usize, slot: usize) {
        let len = self.queue.len();
        let half = len / 2;
        while k < half {
            let mut child = 2 * k + 1;
            let right = child + 1;
            if right < len && self.rank(self.queue[child], self.queue[right]) == Ordering::Greater {
                child = right;
            }
            let below = self.queue[child];
            if self.rank(slot, below) != Ordering::Greater {
                break;
            }
            self.queue[k] = below;
            k = child;
        }
        self.queue[k] = slot;
    }
}
