use std::collections::HashMap;
use std::hash::Hash;

use ndarray::ArrayView2;
use rayon::prelude::*;

use crate::error::{MiningError, Result};

/// A transaction of items with its occurrence count.
pub type Transaction<A> = (Vec<A>, u64);

/// Weighted support of every item reaching `min_support`, sorted by support
/// descending and then by item ascending.
pub fn generate_f_list<A>(transactions: &[Transaction<A>], min_support: u64) -> Vec<(A, u64)>
where
    A: Clone + Ord + Hash + Send + Sync,
{
    let counts = transactions
        .par_iter()
        .fold(HashMap::new, |mut counts: HashMap<A, u64>, (items, count)| {
            for item in items {
                *counts.entry(item.clone()).or_insert(0) += count;
            }
            counts
        })
        .reduce(HashMap::new, |mut merged, partial| {
            for (item, count) in partial {
                *merged.entry(item).or_insert(0) += count;
            }
            merged
        });

    let mut f_list: Vec<(A, u64)> = counts
        .into_iter()
        .filter(|(_, support)| *support >= min_support)
        .collect();
    f_list.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    f_list
}

/// Dense ids for the frequent items, assigned in frequency-list order so
/// that a smaller id means a more frequent item.
#[derive(Debug, Clone)]
pub struct ItemMapping<A> {
    ids: HashMap<A, usize>,
    items: Vec<A>,
    supports: Vec<u64>,
}

impl<A: Clone + Eq + Hash> ItemMapping<A> {
    /// Map every item of `frequency_list` whose support reaches `min_support`.
    ///
    /// The list must be sorted by support descending and name each item once.
    pub fn from_frequency_list(frequency_list: &[(A, u64)], min_support: u64) -> Result<Self> {
        if let Some(position) = frequency_list.windows(2).position(|pair| pair[0].1 < pair[1].1) {
            return Err(MiningError::invalid_argument(format!(
                "frequency list is not sorted by descending support at position {}",
                position + 1
            )));
        }

        let mut mapping = Self {
            ids: HashMap::with_capacity(frequency_list.len()),
            items: Vec::with_capacity(frequency_list.len()),
            supports: Vec::with_capacity(frequency_list.len()),
        };
        for (item, support) in frequency_list {
            if *support < min_support {
                continue;
            }
            if mapping.ids.insert(item.clone(), mapping.items.len()).is_some() {
                return Err(MiningError::invalid_argument(
                    "frequency list names an item more than once",
                ));
            }
            mapping.items.push(item.clone());
            mapping.supports.push(*support);
        }
        Ok(mapping)
    }

    pub fn id(&self, item: &A) -> Option<usize> {
        self.ids.get(item).copied()
    }

    pub fn item(&self, id: usize) -> Option<&A> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Global support per id.
    pub fn supports(&self) -> &[u64] {
        &self.supports
    }

    /// Ids of the mapped items of `transaction`; unmapped items are dropped.
    pub fn translate(&self, transaction: &[A]) -> Vec<usize> {
        transaction.iter().filter_map(|item| self.id(item)).collect()
    }

    pub fn translate_all(&self, transactions: &[Transaction<A>]) -> Vec<Transaction<usize>> {
        transactions
            .iter()
            .map(|(items, count)| (self.translate(items), *count))
            .collect()
    }
}

/// One transaction per matrix row holding the column ids of its non-zero
/// cells, each with weight one.
pub fn transactions_from_matrix(matrix: ArrayView2<i32>) -> Vec<Transaction<usize>> {
    (0..matrix.nrows())
        .into_par_iter()
        .map(|row| {
            let items: Vec<usize> = matrix
                .row(row)
                .iter()
                .enumerate()
                .filter(|(_, &cell)| cell != 0)
                .map(|(column, _)| column)
                .collect();
            (items, 1)
        })
        .collect()
}
