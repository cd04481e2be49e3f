use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::heap::FrequentPatternHeap;
use super::mapping::ItemMapping;
use super::utils::ItemsetStorage;

/// Receives the mined patterns of one item, highest support first.
pub trait OutputCollector<A> {
    fn collect(&mut self, item: A, patterns: Vec<(Vec<A>, u64)>);
}

impl<A, C: OutputCollector<A> + ?Sized> OutputCollector<A> for &mut C {
    fn collect(&mut self, item: A, patterns: Vec<(Vec<A>, u64)>) {
        (**self).collect(item, patterns);
    }
}

/// Translate a finished heap back to items: drained highest support first,
/// each itemset sorted ascending.
pub fn heap_to_patterns<A: Clone + Ord + Hash>(
    heap: FrequentPatternHeap,
    mapping: &ItemMapping<A>,
) -> Vec<(Vec<A>, u64)> {
    heap.into_descending()
        .into_iter()
        .map(|pattern| {
            let mut items: Vec<A> = pattern
                .items()
                .iter()
                .filter_map(|&id| mapping.item(id).cloned())
                .collect();
            items.sort();
            (items, pattern.support())
        })
        .collect()
}

/// In-memory collector keeping every item's patterns in emission order.
#[derive(Debug, Clone)]
pub struct TopKPatterns<A> {
    order: Vec<A>,
    ranges: HashMap<A, (usize, usize)>,
    storage: ItemsetStorage<A>,
}

impl<A> Default for TopKPatterns<A> {
    fn default() -> Self {
        Self { order: Vec::new(), ranges: HashMap::new(), storage: ItemsetStorage::new() }
    }
}

impl<A: Clone + Eq + Hash> TopKPatterns<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in the order they were collected.
    pub fn items(&self) -> &[A] {
        &self.order
    }

    /// Patterns of `item`; empty when it was not mined.
    pub fn patterns_for(&self, item: &A) -> Vec<(&[A], u64)> {
        let Some(&(start, len)) = self.ranges.get(item) else {
            return Vec::new();
        };
        (start..start + len)
            .map(|idx| (self.storage.get_itemset(idx), self.storage.support(idx)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of stored patterns across all items.
    pub fn pattern_count(&self) -> usize {
        self.storage.len()
    }
}

impl<A: Clone + Eq + Hash> OutputCollector<A> for TopKPatterns<A> {
    fn collect(&mut self, item: A, patterns: Vec<(Vec<A>, u64)>) {
        let start = self.storage.len();
        let len = patterns.len();
        for (items, support) in patterns {
            self.storage.add_itemset_with_support(items, support);
        }
        if self.ranges.insert(item.clone(), (start, len)).is_none() {
            self.order.push(item);
        }
    }
}

/// Renders `([A,B],4), ([A],3)` for a list of patterns.
pub struct PatternList<'a, A>(pub &'a [(&'a [A], u64)]);

impl<A: fmt::Display> fmt::Display for PatternList<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (items, support)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "([")?;
            for (j, item) in items.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{item}")?;
            }
            write!(f, "],{support})")?;
        }
        Ok(())
    }
}

/// One line per item: `item\t([A,B],4), ([A],3)`.
impl<A: Clone + Eq + Hash + fmt::Display> fmt::Display for TopKPatterns<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.order {
            let patterns = self.patterns_for(item);
            writeln!(f, "{item}\t{}", PatternList(&patterns))?;
        }
        Ok(())
    }
}
