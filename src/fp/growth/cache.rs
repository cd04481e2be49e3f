use std::collections::{HashMap, VecDeque};

use crate::config::CacheEviction;
use crate::fp::tree::FPTree;

/// Reusable conditional-tree buffers for one mining run.
///
/// First-level trees are keyed by attribute and survive across top-level
/// attributes; deeper trees are keyed by recursion depth and cleared on
/// every fetch. Trees are moved out while in use and handed back afterwards.
#[derive(Debug)]
pub struct TreeCache {
    first_level: VecDeque<(usize, FPTree)>,
    capacity: usize,
    eviction: CacheEviction,
    depth_trees: Vec<Option<FPTree>>,
    scratch: HashMap<usize, usize>,
    hits: u64,
    misses: u64,
}

impl TreeCache {
    pub fn new(capacity: usize, eviction: CacheEviction) -> Self {
        Self {
            first_level: VecDeque::with_capacity(capacity + 1),
            capacity,
            eviction,
            depth_trees: Vec::new(),
            scratch: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Take the first-level tree of `attribute` out of the cache.
    ///
    /// A miss hands out an empty tree for the caller to build.
    pub fn take_first_level(&mut self, attribute: usize) -> FPTree {
        match self.first_level.iter().position(|(key, _)| *key == attribute) {
            Some(position) => {
                self.hits += 1;
                self.first_level
                    .remove(position)
                    .map_or_else(FPTree::new, |(_, tree)| tree)
            }
            None => {
                self.misses += 1;
                FPTree::new()
            }
        }
    }

    /// Return a first-level tree, evicting one entry if over capacity.
    pub fn put_first_level(&mut self, attribute: usize, tree: FPTree) {
        match self.eviction {
            CacheEviction::Lru => {
                self.first_level.push_front((attribute, tree));
                if self.first_level.len() > self.capacity {
                    self.first_level.pop_back();
                }
            }
            CacheEviction::LeastAttribute => {
                self.first_level.push_back((attribute, tree));
                if self.first_level.len() > self.capacity {
                    let largest = self
                        .first_level
                        .iter()
                        .enumerate()
                        .max_by_key(|(_, (key, _))| *key)
                        .map(|(position, _)| position);
                    if let Some(position) = largest {
                        self.first_level.remove(position);
                    }
                }
            }
        }
    }

    /// Attributes currently holding a first-level tree.
    pub fn cached_attributes(&self) -> Vec<usize> {
        self.first_level.iter().map(|(key, _)| *key).collect()
    }

    /// Take the scratch tree of recursion depth `level`, cleared.
    pub fn take_tree(&mut self, level: usize) -> FPTree {
        match self.depth_trees.get_mut(level).and_then(Option::take) {
            Some(mut tree) => {
                tree.clear();
                tree
            }
            None => FPTree::new(),
        }
    }

    pub fn put_tree(&mut self, level: usize, tree: FPTree) {
        if level >= self.depth_trees.len() {
            self.depth_trees.resize_with(level + 1, || None);
        }
        self.depth_trees[level] = Some(tree);
    }

    /// Source-node to destination-node map used while building one
    /// conditional tree; empty between builds.
    pub(crate) fn scratch_mut(&mut self) -> &mut HashMap<usize, usize> {
        &mut self.scratch
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
