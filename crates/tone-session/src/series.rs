//! Scalar series derivation over record sequences
//!
//! These functions map a record sequence to the value sequences the charts
//! consume: one scalar per usable record for histograms, or an (hsl, lch)
//! pair per record for the correlation scatter plots. Records lacking the
//! requested feature (or either feature of a contrast pair) are omitted, so
//! a series may be shorter than its input.

use tone_core::{
    contrast_for_record, extract, ColorRecord, ColorSpace, ContrastPair, Feature, MetricKind,
};

/// A metric's values for one color space, in record order
pub fn metric_values(
    records: &[ColorRecord],
    feature: Feature,
    metric: MetricKind,
    space: ColorSpace,
) -> Vec<f64> {
    records
        .iter()
        .filter_map(|record| extract(record, feature, metric))
        .map(|value| value.for_space(space))
        .collect()
}

/// A metric's (hsl, lch) value pairs, for scatter plotting
pub fn paired_values(
    records: &[ColorRecord],
    feature: Feature,
    metric: MetricKind,
) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|record| extract(record, feature, metric))
        .map(|value| value.as_pair())
        .collect()
}

/// A contrast pair's values for one color space, in record order
pub fn contrast_values(
    records: &[ColorRecord],
    pair: ContrastPair,
    metric: MetricKind,
    space: ColorSpace,
) -> Vec<f64> {
    records
        .iter()
        .filter_map(|record| contrast_for_record(record, pair, metric))
        .map(|value| value.for_space(space))
        .collect()
}

/// A contrast pair's (hsl, lch) value pairs, for scatter plotting
pub fn paired_contrast_values(
    records: &[ColorRecord],
    pair: ContrastPair,
    metric: MetricKind,
) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|record| contrast_for_record(record, pair, metric))
        .map(|value| value.as_pair())
        .collect()
}

/// Parallel series derivation for large datasets
///
/// Extraction is per-record with no cross-record dependencies; rayon's
/// ordered collect keeps the output in record order.
#[cfg(feature = "parallel")]
pub mod parallel {
    use super::*;
    use rayon::prelude::*;

    /// Parallel equivalent of [`metric_values`](super::metric_values)
    pub fn metric_values(
        records: &[ColorRecord],
        feature: Feature,
        metric: MetricKind,
        space: ColorSpace,
    ) -> Vec<f64> {
        records
            .par_iter()
            .filter_map(|record| extract(record, feature, metric))
            .map(|value| value.for_space(space))
            .collect()
    }

    /// Parallel equivalent of [`contrast_values`](super::contrast_values)
    pub fn contrast_values(
        records: &[ColorRecord],
        pair: ContrastPair,
        metric: MetricKind,
        space: ColorSpace,
    ) -> Vec<f64> {
        records
            .par_iter()
            .filter_map(|record| contrast_for_record(record, pair, metric))
            .map(|value| value.for_space(space))
            .collect()
    }
}
