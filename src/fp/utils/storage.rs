/// Flat store of itemsets: all items back to back, with an offset range and
/// a support per itemset.
#[derive(Debug, Clone)]
pub struct ItemsetStorage<A> {
    pub items: Vec<A>,
    pub offsets: Vec<(usize, usize)>,
    pub supports: Vec<u64>,
}

impl<A> Default for ItemsetStorage<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ItemsetStorage<A> {
    pub fn new() -> Self {
        Self { items: Vec::new(), offsets: Vec::new(), supports: Vec::new() }
    }

    /// Append an itemset as given; returns its index.
    pub fn add_itemset_with_support(&mut self, items: Vec<A>, support: u64) -> usize {
        let start = self.items.len();
        let len = items.len();
        self.items.extend(items);
        self.offsets.push((start, len));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[A] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> u64 {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
