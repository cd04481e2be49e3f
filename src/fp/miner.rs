use std::hash::Hash;

use log::{debug, info};

use super::growth::builder::build_fp_tree;
use super::growth::cache::TreeCache;
use super::growth::mining::fp_growth;
use super::mapping::{generate_f_list, ItemMapping, Transaction};
use super::output::{heap_to_patterns, OutputCollector, TopKPatterns};
use super::status::{SilentStatus, StatusUpdater};
use crate::config::MinerConfig;
use crate::error::Result;

/// Top-K frequent pattern miner.
#[derive(Debug, Clone)]
pub struct FPGrowth {
    config: MinerConfig,
}

impl FPGrowth {
    pub fn new(config: MinerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Mine the top-K patterns of every wanted item and hand each list to
    /// `collector`, least frequent item first.
    ///
    /// `frequency_list` carries the global support of each item, sorted by
    /// support descending; items below the configured minimum support are
    /// left out. An empty `wanted` means every frequent item. Wanted items
    /// that are not frequent are skipped without an error.
    pub fn generate_top_k_frequent_patterns<A, C>(
        &self,
        transactions: &[Transaction<A>],
        frequency_list: &[(A, u64)],
        wanted: &[A],
        collector: &mut C,
        updater: &mut dyn StatusUpdater,
    ) -> Result<()>
    where
        A: Clone + Ord + Hash,
        C: OutputCollector<A> + ?Sized,
    {
        let min_support = self.config.min_support;
        let mapping = ItemMapping::from_frequency_list(frequency_list, min_support)?;
        info!("Number of unique items {}", frequency_list.len());

        let mut wanted_ids: Vec<usize> = if wanted.is_empty() {
            (0..mapping.len()).collect()
        } else {
            wanted
                .iter()
                .filter_map(|item| {
                    let id = mapping.id(item);
                    if id.is_none() {
                        debug!("Skipping wanted item below minimum support");
                    }
                    id
                })
                .collect()
        };
        wanted_ids.sort_unstable();
        wanted_ids.dedup();
        info!("Number of unique pruned items {}", mapping.len());

        let id_transactions = mapping.translate_all(transactions);
        let tree = build_fp_tree(
            &id_transactions,
            mapping.supports(),
            min_support,
            self.config.status_interval,
            updater,
        );

        let mut cache = TreeCache::new(
            self.config.first_level_cache_capacity,
            self.config.cache_eviction,
        );
        fp_growth(
            &tree,
            min_support,
            self.config.k,
            &wanted_ids,
            &mut cache,
            updater,
            |attribute, heap| {
                if let Some(item) = mapping.item(attribute) {
                    collector.collect(item.clone(), heap_to_patterns(heap, &mapping));
                }
            },
        );
        Ok(())
    }

    /// Compute the frequency list, mine silently and keep everything in memory.
    pub fn top_k<A>(&self, transactions: &[Transaction<A>], wanted: &[A]) -> Result<TopKPatterns<A>>
    where
        A: Clone + Ord + Hash + Send + Sync,
    {
        let frequency_list = generate_f_list(transactions, self.config.min_support);
        let mut patterns = TopKPatterns::new();
        self.generate_top_k_frequent_patterns(
            transactions,
            &frequency_list,
            wanted,
            &mut patterns,
            &mut SilentStatus,
        )?;
        Ok(patterns)
    }
}
