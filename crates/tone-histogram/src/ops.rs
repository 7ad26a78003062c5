//! Operations on histograms

use crate::types::{Bin, Histogram};
use std::collections::BTreeMap;

/// Operations that can be performed on histograms
pub trait HistogramOps {
    /// Merge another histogram into this one, summing counts per key
    ///
    /// This is the reduce step for binning partitioned data: bin each
    /// partition independently, then merge the results.
    fn merge(&self, other: &Self) -> Self;

    /// Per-bin relative frequencies, in bin order
    fn frequencies(&self) -> Vec<f64>;
}

impl HistogramOps for Histogram {
    fn merge(&self, other: &Self) -> Self {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for bin in self.bins().iter().chain(other.bins()) {
            *counts.entry(bin.key).or_insert(0) += bin.count;
        }

        Histogram::from_sorted_bins(
            counts
                .into_iter()
                .map(|(key, count)| Bin::new(key, count))
                .collect(),
        )
    }

    fn frequencies(&self) -> Vec<f64> {
        let total = self.total_count();
        self.bins()
            .iter()
            .map(|bin| bin.frequency(total))
            .collect()
    }
}
