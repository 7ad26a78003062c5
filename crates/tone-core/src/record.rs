//! Record types for extracted facial-feature colors
//!
//! A dataset entry pairs an image filename with the colors sampled from a
//! fixed set of facial regions. Each sampled color carries up to three
//! representations: a display hex string, an HSL triple stored as fractions
//! of a turn, and an LCH triple with lightness in 0-100, chroma >= 0, and
//! hue in degrees. Any representation may be absent when a feature was not
//! detected in the image.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Facial regions whose color was sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Skin,
    Mouth,
    Hair,
    Iris,
    MouthContour,
    UnderEyeSkin,
}

impl Feature {
    /// All known features, in dataset order
    pub const ALL: [Feature; 6] = [
        Feature::Skin,
        Feature::Mouth,
        Feature::Hair,
        Feature::Iris,
        Feature::MouthContour,
        Feature::UnderEyeSkin,
    ];

    /// The dataset key prefix for this feature (e.g. `skin` in `skin_hsl`)
    pub fn key(&self) -> &'static str {
        match self {
            Self::Skin => "skin",
            Self::Mouth => "mouth",
            Self::Hair => "hair",
            Self::Iris => "iris",
            Self::MouthContour => "mouth_contour",
            Self::UnderEyeSkin => "under_eye_skin",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skin => "Skin",
            Self::Mouth => "Mouth",
            Self::Hair => "Hair",
            Self::Iris => "Iris",
            Self::MouthContour => "Mouth Contour",
            Self::UnderEyeSkin => "Under-Eye Skin",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.key() == s)
            .ok_or_else(|| Error::UnknownFeature(s.to_string()))
    }
}

/// Scalar metrics derivable from a sampled color
///
/// `Saturation` and `Chroma` compute identical values in both spaces; the
/// two variants exist because their display labels differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Hue,
    Saturation,
    Chroma,
    Lightness,
}

impl MetricKind {
    /// All known metrics
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Hue,
        MetricKind::Saturation,
        MetricKind::Chroma,
        MetricKind::Lightness,
    ];

    /// The wire name of this metric
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Chroma => "chroma",
            Self::Lightness => "lightness",
        }
    }

    /// The axis unit suffix: degrees for hue, nothing otherwise
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Hue => "\u{00b0}",
            _ => "",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| Error::UnknownMetric(s.to_string()))
    }
}

/// Which representation's derived scalar is used for a chart axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    Hsl,
    Lch,
}

impl ColorSpace {
    /// The wire name of this color space
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hsl => "hsl",
            Self::Lch => "lch",
        }
    }

    /// Uppercase label for display (`HSL` / `LCH`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hsl => "HSL",
            Self::Lch => "LCH",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hsl" => Ok(Self::Hsl),
            "lch" => Ok(Self::Lch),
            other => Err(Error::UnknownColorSpace(other.to_string())),
        }
    }
}

/// The fixed feature pairings used for contrast analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastPair {
    SkinHair,
    SkinIris,
    MouthContour,
    #[serde(rename = "skin_undereye")]
    SkinUnderEye,
}

impl ContrastPair {
    /// All fixed contrast pairings
    pub const ALL: [ContrastPair; 4] = [
        ContrastPair::SkinHair,
        ContrastPair::SkinIris,
        ContrastPair::MouthContour,
        ContrastPair::SkinUnderEye,
    ];

    /// The wire name of this pairing
    pub fn name(&self) -> &'static str {
        match self {
            Self::SkinHair => "skin_hair",
            Self::SkinIris => "skin_iris",
            Self::MouthContour => "mouth_contour",
            Self::SkinUnderEye => "skin_undereye",
        }
    }

    /// The two features being contrasted
    pub fn features(&self) -> (Feature, Feature) {
        match self {
            Self::SkinHair => (Feature::Skin, Feature::Hair),
            Self::SkinIris => (Feature::Skin, Feature::Iris),
            Self::MouthContour => (Feature::Mouth, Feature::MouthContour),
            Self::SkinUnderEye => (Feature::Skin, Feature::UnderEyeSkin),
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::SkinHair => "Skin x Hair",
            Self::SkinIris => "Skin x Iris",
            Self::MouthContour => "Mouth x Mouth Contour",
            Self::SkinUnderEye => "Skin x Under-Eye Skin",
        }
    }
}

impl fmt::Display for ContrastPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContrastPair {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pair| pair.name() == s)
            .ok_or_else(|| Error::UnknownContrastPair(s.to_string()))
    }
}

/// An HSL triple with every component stored as a fraction in [0, 1]
///
/// Hue is a fraction of a full turn, not degrees. Values arrive
/// pre-converted; this crate never performs color space conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl From<[f64; 3]> for Hsl {
    fn from([h, s, l]: [f64; 3]) -> Self {
        Self { h, s, l }
    }
}

impl From<Hsl> for [f64; 3] {
    fn from(hsl: Hsl) -> Self {
        [hsl.h, hsl.s, hsl.l]
    }
}

/// An LCH triple: lightness in [0, 100], chroma >= 0, hue in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lch {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

impl From<[f64; 3]> for Lch {
    fn from([l, c, h]: [f64; 3]) -> Self {
        Self { l, c, h }
    }
}

impl From<Lch> for [f64; 3] {
    fn from(lch: Lch) -> Self {
        [lch.l, lch.c, lch.h]
    }
}

/// The sampled color of one feature, in up to three representations
///
/// A feature is usable by a metric only when both the HSL and LCH triples
/// are present; the hex string is opaque display data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureColor {
    /// Display hex string, passed through untouched
    pub hex: Option<String>,
    /// HSL triple as fractions of [0, 1]
    pub hsl: Option<Hsl>,
    /// LCH triple
    pub lch: Option<Lch>,
}

impl FeatureColor {
    /// Both numeric representations, or `None` when either is missing
    pub fn spaces(&self) -> Option<(Hsl, Lch)> {
        match (self.hsl, self.lch) {
            (Some(hsl), Some(lch)) => Some((hsl, lch)),
            _ => None,
        }
    }

    /// Whether this feature is usable by metric extraction
    pub fn is_complete(&self) -> bool {
        self.hsl.is_some() && self.lch.is_some()
    }
}

/// One dataset entry: an image filename plus its per-feature colors
///
/// Records are immutable once loaded; extraction, binning, and filtering
/// only read them and produce fresh derived values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub filename: String,
    pub skin: FeatureColor,
    pub mouth: FeatureColor,
    pub hair: FeatureColor,
    pub iris: FeatureColor,
    pub mouth_contour: FeatureColor,
    pub under_eye_skin: FeatureColor,
}

impl ColorRecord {
    /// Create an empty record for the given filename
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to attach a feature's color
    pub fn with_color(mut self, feature: Feature, color: FeatureColor) -> Self {
        *self.color_mut(feature) = color;
        self
    }

    /// The sampled color for the given feature
    pub fn color(&self, feature: Feature) -> &FeatureColor {
        match feature {
            Feature::Skin => &self.skin,
            Feature::Mouth => &self.mouth,
            Feature::Hair => &self.hair,
            Feature::Iris => &self.iris,
            Feature::MouthContour => &self.mouth_contour,
            Feature::UnderEyeSkin => &self.under_eye_skin,
        }
    }

    fn color_mut(&mut self, feature: Feature) -> &mut FeatureColor {
        match feature {
            Feature::Skin => &mut self.skin,
            Feature::Mouth => &mut self.mouth,
            Feature::Hair => &mut self.hair,
            Feature::Iris => &mut self.iris,
            Feature::MouthContour => &mut self.mouth_contour,
            Feature::UnderEyeSkin => &mut self.under_eye_skin,
        }
    }

    /// Whether the given feature has both numeric representations
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.color(feature).is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_round_trip_names() {
        for feature in Feature::ALL {
            assert_eq!(feature.key().parse::<Feature>().unwrap(), feature);
        }
    }

    #[test]
    fn test_feature_rejects_unknown_name() {
        let err = "eyebrow".parse::<Feature>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown feature: eyebrow");
    }

    #[test]
    fn test_metric_unit_suffix() {
        assert_eq!(MetricKind::Hue.unit(), "\u{00b0}");
        assert_eq!(MetricKind::Saturation.unit(), "");
        assert_eq!(MetricKind::Chroma.unit(), "");
        assert_eq!(MetricKind::Lightness.unit(), "");
    }

    #[test]
    fn test_metric_and_space_parsing() {
        assert_eq!("hue".parse::<MetricKind>().unwrap(), MetricKind::Hue);
        assert_eq!("lch".parse::<ColorSpace>().unwrap(), ColorSpace::Lch);
        assert!("vibrance".parse::<MetricKind>().is_err());
        assert!("cmyk".parse::<ColorSpace>().is_err());
    }

    #[test]
    fn test_contrast_pair_round_trip_names() {
        for pair in ContrastPair::ALL {
            assert_eq!(pair.name().parse::<ContrastPair>().unwrap(), pair);
        }
        assert_eq!(
            "skin_undereye".parse::<ContrastPair>().unwrap(),
            ContrastPair::SkinUnderEye
        );
    }

    #[test]
    fn test_contrast_pair_rejects_unknown_name() {
        let err = "skin_brow".parse::<ContrastPair>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown contrast pair: skin_brow");
    }

    #[test]
    fn test_contrast_pair_table() {
        assert_eq!(
            ContrastPair::SkinHair.features(),
            (Feature::Skin, Feature::Hair)
        );
        assert_eq!(
            ContrastPair::MouthContour.features(),
            (Feature::Mouth, Feature::MouthContour)
        );
        assert_eq!(ContrastPair::SkinUnderEye.label(), "Skin x Under-Eye Skin");
    }

    #[test]
    fn test_feature_color_completeness() {
        let complete = FeatureColor {
            hex: None,
            hsl: Some(Hsl::new(0.5, 0.5, 0.5)),
            lch: Some(Lch::new(50.0, 20.0, 180.0)),
        };
        assert!(complete.is_complete());
        assert!(complete.spaces().is_some());

        let hsl_only = FeatureColor {
            hex: Some("#808080".to_string()),
            hsl: Some(Hsl::new(0.5, 0.5, 0.5)),
            lch: None,
        };
        assert!(!hsl_only.is_complete());
        assert!(hsl_only.spaces().is_none());
    }

    #[test]
    fn test_record_feature_lookup() {
        let record = ColorRecord::new("face_001.jpg").with_color(
            Feature::Iris,
            FeatureColor {
                hex: Some("#406080".to_string()),
                hsl: Some(Hsl::new(0.58, 0.33, 0.38)),
                lch: Some(Lch::new(40.0, 18.0, 260.0)),
            },
        );

        assert!(record.has_feature(Feature::Iris));
        assert!(!record.has_feature(Feature::Skin));
        assert_eq!(record.color(Feature::Iris).hex.as_deref(), Some("#406080"));
    }

    #[test]
    fn test_triple_serde_shape() {
        let hsl: Hsl = serde_json::from_str("[0.5, 0.25, 0.75]").unwrap();
        assert_eq!(hsl, Hsl::new(0.5, 0.25, 0.75));

        let lch: Lch = serde_json::from_str("[50.0, 20.0, 180.0]").unwrap();
        assert_eq!(lch, Lch::new(50.0, 20.0, 180.0));

        let json = serde_json::to_string(&hsl).unwrap();
        assert_eq!(json, "[0.5,0.25,0.75]");
    }
}
