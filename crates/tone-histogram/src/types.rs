//! Core types for integer-bin histograms

use std::fmt;
use tone_core::MetricKind;

/// A single bin in a histogram
///
/// The key is the rounded integer value of a metric; the count is how many
/// records landed on that key. Bins are sparse: only keys that actually
/// occur in the data are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin {
    /// Rounded integer value this bin represents
    pub key: i64,
    /// Number of values in this bin
    pub count: usize,
}

impl Bin {
    /// Create a new bin
    pub fn new(key: i64, count: usize) -> Self {
        Self { key, count }
    }

    /// The axis label for this bin: degrees-suffixed for hue, bare otherwise
    pub fn label(&self, metric: MetricKind) -> String {
        format!("{}{}", self.key, metric.unit())
    }

    /// The relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: count={}", self.key, self.count)
    }
}

/// A histogram over rounded integer bins
///
/// Bins are held in ascending key order with no duplicate keys, the
/// ordering chart axes need. An empty histogram is a valid state, produced
/// by empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    bins: Vec<Bin>,
    total_count: usize,
}

impl Histogram {
    /// Create a histogram from bins already in ascending key order
    ///
    /// Callers are the builders in this crate, which guarantee the ordering
    /// invariant by construction.
    pub(crate) fn from_sorted_bins(bins: Vec<Bin>) -> Self {
        debug_assert!(bins.windows(2).all(|w| w[0].key < w[1].key));
        let total_count = bins.iter().map(|bin| bin.count).sum();
        Self { bins, total_count }
    }

    /// The bins, ascending by key
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of values across all bins
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// The count for a given key, zero when the key has no bin
    pub fn count(&self, key: i64) -> usize {
        self.bins
            .binary_search_by_key(&key, |bin| bin.key)
            .map(|idx| self.bins[idx].count)
            .unwrap_or(0)
    }

    /// The ascending bin keys
    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.bins.iter().map(|bin| bin.key)
    }

    /// Axis labels for all bins, in bin order
    pub fn labels(&self, metric: MetricKind) -> Vec<String> {
        self.bins.iter().map(|bin| bin.label(metric)).collect()
    }

    /// The bin with the highest count, if any
    pub fn mode(&self) -> Option<Bin> {
        self.bins.iter().copied().max_by_key(|bin| bin.count)
    }

    /// Iterate over the bins
    pub fn iter(&self) -> std::slice::Iter<'_, Bin> {
        self.bins.iter()
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = &'a Bin;
    type IntoIter = std::slice::Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Histogram[{} bins, {} values]", self.len(), self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_label_units() {
        let bin = Bin::new(187, 3);
        assert_eq!(bin.label(MetricKind::Hue), "187\u{00b0}");
        assert_eq!(bin.label(MetricKind::Saturation), "187");
        assert_eq!(bin.label(MetricKind::Lightness), "187");

        let negative = Bin::new(-4, 1);
        assert_eq!(negative.label(MetricKind::Hue), "-4\u{00b0}");
    }

    #[test]
    fn test_bin_frequency() {
        let bin = Bin::new(10, 5);
        assert_eq!(bin.frequency(20), 0.25);
        assert_eq!(bin.frequency(0), 0.0);
    }

    #[test]
    fn test_histogram_accessors() {
        let histogram =
            Histogram::from_sorted_bins(vec![Bin::new(-2, 1), Bin::new(0, 4), Bin::new(7, 2)]);

        assert_eq!(histogram.len(), 3);
        assert_eq!(histogram.total_count(), 7);
        assert_eq!(histogram.count(0), 4);
        assert_eq!(histogram.count(99), 0);
        assert_eq!(histogram.keys().collect::<Vec<_>>(), vec![-2, 0, 7]);
        assert_eq!(histogram.mode(), Some(Bin::new(0, 4)));
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = Histogram::default();
        assert!(histogram.is_empty());
        assert_eq!(histogram.total_count(), 0);
        assert_eq!(histogram.mode(), None);
    }
}
