//! Top-K frequent pattern mining with FP-Growth.
//!
//! For every item of interest the miner returns the K most frequent itemsets
//! containing it. Transactions are loaded once into an array-encoded FP-tree;
//! each item is then mined through conditional trees with a support floor
//! that rises as the per-item heap fills up.
//!
//! ```no_run
//! use topk_fpgrowth::{FPGrowth, MinerConfig};
//!
//! let transactions = vec![
//!     (vec!["a", "b"], 3),
//!     (vec!["a", "c"], 1),
//! ];
//! let miner = FPGrowth::new(MinerConfig::new(2, 10)).unwrap();
//! let patterns = miner.top_k(&transactions, &[]).unwrap();
//! print!("{patterns}");
//! ```

pub mod config;
pub mod error;
pub mod fp;

pub use config::{CacheEviction, MinerConfig};
pub use error::{MiningError, Result};
pub use fp::{
    generate_f_list, transactions_from_matrix, FPGrowth, ItemMapping, LoggingStatus,
    OutputCollector, Pattern, SilentStatus, StatusUpdater, TopKPatterns, Transaction,
};

#[cfg(feature = "python")]
use pyo3::{pymodule, types::PyModule, Bound, PyResult};

#[cfg(feature = "python")]
#[pymodule]
fn topk_fpgrowth<'py>(m: &Bound<'py, PyModule>) -> PyResult<()> {
    use numpy::PyReadonlyArray2;
    use pyo3::exceptions::PyValueError;
    use std::collections::HashMap;

    #[pyfn(m)]
    #[pyo3(name = "top_k_patterns", signature = (transactions, min_support, k, wanted = None))]
    fn top_k_patterns_py(
        transactions: PyReadonlyArray2<'_, i32>,
        min_support: u64,
        k: usize,
        wanted: Option<Vec<usize>>,
    ) -> PyResult<HashMap<usize, Vec<(Vec<usize>, u64)>>> {
        let rows = transactions_from_matrix(transactions.as_array());
        let miner = FPGrowth::new(MinerConfig::new(min_support, k))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let patterns = miner
            .top_k(&rows, &wanted.unwrap_or_default())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(patterns
            .items()
            .iter()
            .map(|&column| {
                let mined = patterns
                    .patterns_for(&column)
                    .into_iter()
                    .map(|(items, support)| (items.to_vec(), support))
                    .collect();
                (column, mined)
            })
            .collect())
    }

    Ok(())
}
