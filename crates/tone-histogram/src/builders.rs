//! Histogram construction from metric values
//!
//! Every metric value is rounded to its nearest integer and aggregated into
//! sparse, ascending bins. One rounding rule serves every metric, hue
//! included, and the filtering layer reuses [`bin_key`] verbatim so that
//! clicking a bar always selects exactly the records its bar counted.

use crate::types::{Bin, Histogram};
use std::collections::BTreeMap;
use tone_core::{Error, Result};

/// The canonical value-to-bin rounding rule: round half away from zero
///
/// Shared by histogram construction and bin filtering. Values outside a
/// metric's declared range (e.g. a corrupt negative hue) are binned as-is
/// under their rounded key; no clamping is applied.
pub fn bin_key(value: f64) -> i64 {
    value.round() as i64
}

/// Builds sparse integer-bin histograms by round-to-nearest aggregation
///
/// There is one bin per distinct rounded value, so the bin count is
/// unbounded; a sparse dataset may produce one bin per value. Empty input
/// yields an empty histogram, which is a valid state, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundBinner;

impl RoundBinner {
    /// Create a new binner
    pub fn new() -> Self {
        Self
    }

    /// Build a histogram from the given metric values
    ///
    /// Non-finite values indicate corrupt extraction upstream and are
    /// rejected loudly rather than binned through a saturating cast.
    pub fn build(&self, values: &[f64]) -> Result<Histogram> {
        if values.iter().any(|value| !value.is_finite()) {
            return Err(Error::non_finite("metric values"));
        }

        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &value in values {
            *counts.entry(bin_key(value)).or_insert(0) += 1;
        }

        Ok(histogram_from_counts(counts))
    }

    /// Build a histogram in parallel, merging per-chunk count maps
    ///
    /// Extraction has no cross-record dependencies, so the fold is
    /// embarrassingly parallel; the reduce step merges count maps.
    #[cfg(feature = "parallel")]
    pub fn build_par(&self, values: &[f64]) -> Result<Histogram> {
        use rayon::prelude::*;

        if values.par_iter().any(|value| !value.is_finite()) {
            return Err(Error::non_finite("metric values"));
        }

        let counts = values
            .par_iter()
            .fold(BTreeMap::<i64, usize>::new, |mut counts, &value| {
                *counts.entry(bin_key(value)).or_insert(0) += 1;
                counts
            })
            .reduce(BTreeMap::new, merge_counts);

        Ok(histogram_from_counts(counts))
    }
}

fn histogram_from_counts(counts: BTreeMap<i64, usize>) -> Histogram {
    // BTreeMap iteration is ascending by key, which is exactly the bin
    // ordering invariant.
    let bins = counts
        .into_iter()
        .map(|(key, count)| Bin::new(key, count))
        .collect();
    Histogram::from_sorted_bins(bins)
}

#[cfg(feature = "parallel")]
fn merge_counts(
    mut left: BTreeMap<i64, usize>,
    right: BTreeMap<i64, usize>,
) -> BTreeMap<i64, usize> {
    for (key, count) in right {
        *left.entry(key).or_insert(0) += count;
    }
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bin_key_rounds_half_away_from_zero() {
        assert_eq!(bin_key(187.2), 187);
        assert_eq!(bin_key(187.5), 188);
        assert_eq!(bin_key(186.5), 187);
        assert_eq!(bin_key(-0.5), -1);
        assert_eq!(bin_key(-2.4), -2);
        assert_eq!(bin_key(0.0), 0);
    }

    #[test]
    fn test_build_counts_and_orders() {
        // The canonical scenario: hues 180 and 187.2 land in bins 180 and 187
        let histogram = RoundBinner::new().build(&[180.0, 187.2]).unwrap();

        assert_eq!(histogram.bins(), &[Bin::new(180, 1), Bin::new(187, 1)]);
    }

    #[test]
    fn test_build_aggregates_duplicates() {
        let histogram = RoundBinner::new()
            .build(&[4.6, 5.2, 5.4, 12.0, 4.9])
            .unwrap();

        assert_eq!(histogram.bins(), &[Bin::new(5, 4), Bin::new(12, 1)]);
        assert_eq!(histogram.total_count(), 5);
    }

    #[test]
    fn test_empty_input_is_empty_histogram() {
        let histogram = RoundBinner::new().build(&[]).unwrap();
        assert!(histogram.is_empty());
    }

    #[test]
    fn test_out_of_range_values_binned_as_is() {
        // Corrupt negative hue still gets a bin; no clamping
        let histogram = RoundBinner::new().build(&[-12.3, 361.7]).unwrap();
        assert_eq!(histogram.bins(), &[Bin::new(-12, 1), Bin::new(362, 1)]);
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let binner = RoundBinner::new();
        assert!(binner.build(&[1.0, f64::NAN]).is_err());
        assert!(binner.build(&[f64::INFINITY]).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let values: Vec<f64> = (0..10_000).map(|i| (i % 360) as f64 + 0.3).collect();
        let binner = RoundBinner::new();

        assert_eq!(
            binner.build(&values).unwrap(),
            binner.build_par(&values).unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_keys_strictly_ascending(values in prop::collection::vec(-1000.0..1000.0f64, 0..200)) {
            let histogram = RoundBinner::new().build(&values).unwrap();
            let keys: Vec<i64> = histogram.keys().collect();
            prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_count_conservation(values in prop::collection::vec(-1000.0..1000.0f64, 0..200)) {
            let histogram = RoundBinner::new().build(&values).unwrap();
            prop_assert_eq!(histogram.total_count(), values.len());
        }

        #[test]
        fn prop_every_value_lands_in_its_bin(values in prop::collection::vec(-1000.0..1000.0f64, 1..100)) {
            let histogram = RoundBinner::new().build(&values).unwrap();
            for value in values {
                prop_assert!(histogram.count(bin_key(value)) > 0);
            }
        }
    }
}
