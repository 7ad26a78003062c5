//! Contrast between two features' colors
//!
//! The contrast of a metric is the magnitude of the difference between the
//! two features' scalar values: circular distance for hue (359 degrees and
//! 1 degree are 2 degrees apart, not 358) and absolute linear difference for
//! saturation, chroma, and lightness. Both outputs are non-negative by
//! construction.

use crate::extract::{metric_value, MetricValue};
use crate::record::{ColorRecord, ContrastPair, Hsl, Lch, MetricKind};

/// Circular distance between two hue angles in degrees
///
/// Symmetric, and never exceeds 180.
pub fn circular_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// Contrast between two colors for the given metric, in both spaces
pub fn contrast(
    hsl1: Hsl,
    lch1: Lch,
    hsl2: Hsl,
    lch2: Lch,
    metric: MetricKind,
) -> MetricValue {
    match metric {
        MetricKind::Hue => MetricValue::new(
            circular_diff(hsl1.h * 360.0, hsl2.h * 360.0),
            circular_diff(lch1.h, lch2.h),
        ),
        _ => {
            let value1 = metric_value(hsl1, lch1, metric);
            let value2 = metric_value(hsl2, lch2, metric);
            MetricValue::new((value1.hsl - value2.hsl).abs(), (value1.lch - value2.lch).abs())
        }
    }
}

/// Contrast of a fixed feature pair for one record
///
/// Returns `None` when either feature of the pair lacks a numeric
/// representation, mirroring the extraction contract.
pub fn contrast_for_record(
    record: &ColorRecord,
    pair: ContrastPair,
    metric: MetricKind,
) -> Option<MetricValue> {
    let (first, second) = pair.features();
    let (hsl1, lch1) = record.color(first).spaces()?;
    let (hsl2, lch2) = record.color(second).spaces()?;
    Some(contrast(hsl1, lch1, hsl2, lch2, metric))
}
