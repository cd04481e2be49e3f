use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

const DEFAULT_INITIAL_SIZE: usize = 2;

/// An itemset of attribute ids together with its support.
///
/// Items are kept in the order they were appended; each append records the
/// support of that step and lowers the pattern support to the minimum seen.
#[derive(Debug, Clone)]
pub struct Pattern {
    items: Vec<usize>,
    supports: Vec<u64>,
    support: u64,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_INITIAL_SIZE),
            supports: Vec::with_capacity(DEFAULT_INITIAL_SIZE),
            support: u64::MAX,
        }
    }

    pub fn singleton(attribute: usize, support: u64) -> Self {
        let mut pattern = Self::new();
        pattern.add(attribute, support);
        pattern
    }

    pub fn add(&mut self, attribute: usize, support: u64) {
        self.items.push(attribute);
        self.supports.push(support);
        self.support = self.support.min(support);
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Support recorded at each append, aligned with `items`.
    pub fn supports(&self) -> &[u64] {
        &self.supports
    }

    /// Minimum support over all appends; `u64::MAX` while empty.
    pub fn support(&self) -> u64 {
        self.support
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when every item of `self` appears in `other`, matched by a
    /// merge walk that assumes both item lists ascend.
    ///
    /// The walk runs on the lists as stored; unsorted lists give whatever
    /// the merge yields.
    pub fn is_sub_pattern_of(&self, other: &Pattern) -> bool {
        if self.len() > other.len() {
            return false;
        }

        let (mut i, mut other_i) = (0, 0);
        while i < self.items.len() && other_i < other.items.len() {
            match other.items[other_i].cmp(&self.items[i]) {
                Ordering::Equal => {
                    i += 1;
                    other_i += 1;
                }
                Ordering::Less => other_i += 1,
                Ordering::Greater => return false,
            }
        }
        i == self.items.len()
    }

    /// Heap priority: support first, then length.
    pub fn cmp_rank(&self, other: &Pattern) -> Ordering {
        self.support
            .cmp(&other.support)
            .then_with(|| self.len().cmp(&other.len()))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.support == other.support && self.items == other.items
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.support.hash(state);
        self.items.hash(state);
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Support ascending, then length ascending, then item ids lexicographically.
impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_rank(other).then_with(|| self.items.cmp(&other.items))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]-{}", self.support)
    }
}
