//! Bin-selection filter predicates
//!
//! When the user clicks a histogram bar, the matching records are found by
//! re-deriving each record's metric value from the immutable source records
//! and applying the binner's own rounding rule. Re-derivation rather than a
//! cached lookup keeps the filtered set consistent with whatever chart
//! produced the click, even as selections change between renders.

use tone_core::{
    contrast_for_record, extract, ColorRecord, ColorSpace, ContrastPair, Feature, MetricKind,
};
use tone_histogram::bin_key;

/// Records whose rounded metric value equals the selected bin key
///
/// Records for which extraction returns `None` never match any bin. An
/// empty result is a valid state; the selected key may simply have no
/// members under the current selection.
pub fn filter_by_bin(
    records: &[ColorRecord],
    feature: Feature,
    metric: MetricKind,
    space: ColorSpace,
    selected: i64,
) -> Vec<ColorRecord> {
    records
        .iter()
        .filter(|record| {
            extract(record, feature, metric)
                .map(|value| bin_key(value.for_space(space)) == selected)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Records whose rounded contrast value equals the selected bin key
pub fn filter_by_contrast_bin(
    records: &[ColorRecord],
    pair: ContrastPair,
    metric: MetricKind,
    space: ColorSpace,
    selected: i64,
) -> Vec<ColorRecord> {
    records
        .iter()
        .filter(|record| {
            contrast_for_record(record, pair, metric)
                .map(|value| bin_key(value.for_space(space)) == selected)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
