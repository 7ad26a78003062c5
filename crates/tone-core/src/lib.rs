//! Core data model and color metric math for facial-feature color analysis
//!
//! This crate holds the pure, stateless heart of the tone-stats workspace:
//! the dataset record types, metric extraction, and contrast computation
//! over pre-extracted facial-feature colors (skin, mouth, hair, iris, mouth
//! contour, under-eye skin). Every color arrives in up to three
//! representations: an opaque hex string, an HSL triple stored as fractions,
//! and an LCH triple.
//!
//! It performs no image decoding and no color space conversion; the triples
//! are consumed exactly as the dataset provides them.
//!
//! # Overview
//!
//! - [`record`]: closed-enum record shape ([`ColorRecord`], [`Feature`],
//!   [`MetricKind`], [`ColorSpace`], [`ContrastPair`])
//! - [`extract`]: per-feature scalar metric values in both color spaces
//! - [`contrast`]: circular and linear differences between feature pairs
//! - [`dataset`]: loading the JSON document into immutable records
//!
//! # Examples
//!
//! ```rust
//! use tone_core::{extract, ColorRecord, Feature, FeatureColor, Hsl, Lch, MetricKind};
//!
//! let record = ColorRecord::new("face_001.jpg").with_color(
//!     Feature::Skin,
//!     FeatureColor {
//!         hex: Some("#d9a681".to_string()),
//!         hsl: Some(Hsl::new(0.07, 0.53, 0.68)),
//!         lch: Some(Lch::new(72.0, 28.0, 60.0)),
//!     },
//! );
//!
//! let hue = extract(&record, Feature::Skin, MetricKind::Hue).unwrap();
//! assert!((hue.hsl - 25.2).abs() < 1e-9); // 0.07 turns as degrees
//! assert!((hue.lch - 60.0).abs() < 1e-9); // LCH hue is already degrees
//! ```
//!
//! ```rust
//! use tone_core::circular_diff;
//!
//! // Hue wraps: 359 and 1 degrees are 2 degrees apart
//! assert_eq!(circular_diff(359.0, 1.0), 2.0);
//! ```

pub mod contrast;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod record;

// Re-exports
pub use contrast::{circular_diff, contrast, contrast_for_record};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use extract::{extract, metric_value, MetricValue};
pub use record::{
    ColorRecord, ColorSpace, ContrastPair, Feature, FeatureColor, Hsl, Lch, MetricKind,
};
