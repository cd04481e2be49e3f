pub mod growth;
pub mod heap;
pub mod mapping;
pub mod miner;
pub mod output;
pub mod pattern;
pub mod status;
pub mod tree;
pub mod utils;

pub use growth::{fp_growth, TreeCache};
pub use heap::FrequentPatternHeap;
pub use mapping::{generate_f_list, transactions_from_matrix, ItemMapping, Transaction};
pub use miner::FPGrowth;
pub use output::{OutputCollector, PatternList, TopKPatterns};
pub use pattern::Pattern;
pub use status::{LoggingStatus, SilentStatus, StatusUpdater};
pub use tree::{FPNode, FPTree};
pub use utils::ItemsetStorage;
