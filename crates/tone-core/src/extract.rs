//! Metric extraction from dataset records
//!
//! Converts a record's raw HSL/LCH triples into the scalar value of a chosen
//! metric in both color spaces. The HSL components are stored as fractions
//! and are rescaled here (hue to degrees, saturation and lightness to
//! percent); the LCH components already carry their display units.
//!
//! The LCH analog of saturation is chroma. The units do not truly match;
//! the pairing is an intentional approximation inherited from the dataset's
//! analysis conventions, not a conversion.

use crate::record::{ColorRecord, ColorSpace, Feature, Hsl, Lch, MetricKind};

/// A metric's scalar value in both color spaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricValue {
    /// HSL-derived value (degrees for hue, percent otherwise)
    pub hsl: f64,
    /// LCH-derived value (degrees, chroma, or lightness as-is)
    pub lch: f64,
}

impl MetricValue {
    pub fn new(hsl: f64, lch: f64) -> Self {
        Self { hsl, lch }
    }

    /// The value for the chosen color space
    pub fn for_space(&self, space: ColorSpace) -> f64 {
        match space {
            ColorSpace::Hsl => self.hsl,
            ColorSpace::Lch => self.lch,
        }
    }

    /// Both values as an (hsl, lch) pair, for scatter plotting
    pub fn as_pair(&self) -> (f64, f64) {
        (self.hsl, self.lch)
    }
}

/// Compute a metric's value in both spaces from a pair of raw triples
pub fn metric_value(hsl: Hsl, lch: Lch, metric: MetricKind) -> MetricValue {
    match metric {
        MetricKind::Hue => MetricValue::new(hsl.h * 360.0, lch.h),
        // Chroma shares saturation's formulas; the variants differ only in
        // their display labels.
        MetricKind::Saturation | MetricKind::Chroma => saturation_value(hsl, lch),
        MetricKind::Lightness => MetricValue::new(hsl.l * 100.0, lch.l),
    }
}

fn saturation_value(hsl: Hsl, lch: Lch) -> MetricValue {
    MetricValue::new(hsl.s * 100.0, lch.c)
}

/// Extract a metric for one feature of a record
///
/// Returns `None` when the record lacks either numeric representation for
/// the feature; such records are excluded from aggregation and filtering
/// rather than reported as errors.
pub fn extract(record: &ColorRecord, feature: Feature, metric: MetricKind) -> Option<MetricValue> {
    let (hsl, lch) = record.color(feature).spaces()?;
    Some(metric_value(hsl, lch, metric))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FeatureColor;
    use approx::assert_abs_diff_eq;

    fn record_with_skin(hsl: Hsl, lch: Lch) -> ColorRecord {
        ColorRecord::new("test.jpg").with_color(
            Feature::Skin,
            FeatureColor {
                hex: None,
                hsl: Some(hsl),
                lch: Some(lch),
            },
        )
    }

    #[test]
    fn test_hue_scaling() {
        // Fractional hue scales to degrees; LCH hue is already degrees
        let record = record_with_skin(Hsl::new(0.5, 0.5, 0.5), Lch::new(50.0, 20.0, 180.0));
        let value = extract(&record, Feature::Skin, MetricKind::Hue).unwrap();

        assert_abs_diff_eq!(value.hsl, 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(value.lch, 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_saturation_scaling() {
        let record = record_with_skin(Hsl::new(0.5, 0.42, 0.5), Lch::new(50.0, 23.5, 180.0));
        let value = extract(&record, Feature::Skin, MetricKind::Saturation).unwrap();

        assert_abs_diff_eq!(value.hsl, 42.0, epsilon = 1e-12);
        assert_abs_diff_eq!(value.lch, 23.5, epsilon = 1e-12);
    }

    #[test]
    fn test_chroma_matches_saturation() {
        let record = record_with_skin(Hsl::new(0.1, 0.6, 0.3), Lch::new(30.0, 45.0, 20.0));

        let saturation = extract(&record, Feature::Skin, MetricKind::Saturation).unwrap();
        let chroma = extract(&record, Feature::Skin, MetricKind::Chroma).unwrap();

        assert_eq!(saturation, chroma);
    }

    #[test]
    fn test_lightness_scaling() {
        let record = record_with_skin(Hsl::new(0.5, 0.5, 0.65), Lch::new(62.0, 20.0, 180.0));
        let value = extract(&record, Feature::Skin, MetricKind::Lightness).unwrap();

        assert_abs_diff_eq!(value.hsl, 65.0, epsilon = 1e-12);
        assert_abs_diff_eq!(value.lch, 62.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_feature_is_none() {
        let record = record_with_skin(Hsl::new(0.5, 0.5, 0.5), Lch::new(50.0, 20.0, 180.0));

        for metric in MetricKind::ALL {
            assert!(extract(&record, Feature::Hair, metric).is_none());
        }
    }

    #[test]
    fn test_partial_representation_is_none() {
        // HSL present without LCH makes the feature unusable for any metric
        let record = ColorRecord::new("partial.jpg").with_color(
            Feature::Skin,
            FeatureColor {
                hex: Some("#aabbcc".to_string()),
                hsl: Some(Hsl::new(0.5, 0.5, 0.5)),
                lch: None,
            },
        );

        assert!(extract(&record, Feature::Skin, MetricKind::Hue).is_none());
    }

    #[test]
    fn test_for_space_selection() {
        let value = MetricValue::new(1.0, 2.0);
        assert_eq!(value.for_space(ColorSpace::Hsl), 1.0);
        assert_eq!(value.for_space(ColorSpace::Lch), 2.0);
        assert_eq!(value.as_pair(), (1.0, 2.0));
    }
}
