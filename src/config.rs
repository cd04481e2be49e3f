//! Miner configuration.

use crate::error::{MiningError, Result};

/// Default capacity of each per-item top-K heap
pub const DEFAULT_K: usize = 50;

/// Default number of first-level conditional trees kept between items
pub const DEFAULT_FIRST_LEVEL_CACHE_CAPACITY: usize = 5;

/// Default number of transactions between build-progress notifications
pub const DEFAULT_STATUS_INTERVAL: usize = 10_000;

/// Which first-level conditional tree is dropped when the cache overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheEviction {
    /// Drop the least recently used tree
    #[default]
    Lru,
    /// Keep the trees of the smallest (most frequent) attribute ids
    LeastAttribute,
}

/// Parameters of one top-K mining run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinerConfig {
    /// Minimum absolute (weighted) support of a pattern
    pub min_support: u64,

    /// Maximum number of patterns returned per item
    pub k: usize,

    /// Number of first-level conditional trees retained
    pub first_level_cache_capacity: usize,

    /// Eviction policy of the first-level cache
    pub cache_eviction: CacheEviction,

    /// Transactions between progress notifications while building the tree
    pub status_interval: usize,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            k: DEFAULT_K,
            first_level_cache_capacity: DEFAULT_FIRST_LEVEL_CACHE_CAPACITY,
            cache_eviction: CacheEviction::default(),
            status_interval: DEFAULT_STATUS_INTERVAL,
        }
    }
}

impl MinerConfig {
    /// Config with the given support floor and heap size, defaults otherwise
    pub fn new(min_support: u64, k: usize) -> Self {
        Self { min_support, k, ..Self::default() }
    }

    pub fn with_min_support(mut self, min_support: u64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_first_level_cache_capacity(mut self, capacity: usize) -> Self {
        self.first_level_cache_capacity = capacity;
        self
    }

    pub fn with_cache_eviction(mut self, eviction: CacheEviction) -> Self {
        self.cache_eviction = eviction;
        self
    }

    pub fn with_status_interval(mut self, interval: usize) -> Self {
        self.status_interval = interval;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(MiningError::configuration("k must be > 0"));
        }

        if self.first_level_cache_capacity == 0 {
            return Err(MiningError::configuration(
                "first level cache capacity must be > 0",
            ));
        }

        if self.status_interval == 0 {
            return Err(MiningError::configuration("status interval must be > 0"));
        }

        Ok(())
    }
}
