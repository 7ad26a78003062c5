//! Series derivation, bin filtering, and session state over color datasets
//!
//! This crate is the glue between the pure math in `tone-core` /
//! `tone-histogram` and an external rendering collaborator. It derives the
//! scalar series charts consume, resolves a clicked histogram bar back into
//! the matching record subset with the binner's own rounding rule, and
//! tracks the current filtered view in a [`Session`].
//!
//! # Examples
//!
//! ```rust
//! use tone_core::{ColorRecord, ColorSpace, Feature, FeatureColor, Hsl, Lch, MetricKind};
//! use tone_histogram::RoundBinner;
//! use tone_session::{metric_values, Session};
//!
//! let records = vec![
//!     ColorRecord::new("r1.jpg").with_color(
//!         Feature::Skin,
//!         FeatureColor {
//!             hex: None,
//!             hsl: Some(Hsl::new(0.5, 0.5, 0.5)),
//!             lch: Some(Lch::new(50.0, 20.0, 180.0)),
//!         },
//!     ),
//! ];
//!
//! // Histogram of skin hues in HSL
//! let hues = metric_values(&records, Feature::Skin, MetricKind::Hue, ColorSpace::Hsl);
//! let histogram = RoundBinner::new().build(&hues).unwrap();
//! assert_eq!(histogram.count(180), 1);
//!
//! // Clicking the 180-degree bar selects exactly that record
//! let mut session = Session::from(records);
//! session.select_bin(Feature::Skin, MetricKind::Hue, ColorSpace::Hsl, 180);
//! assert_eq!(session.filtered().len(), 1);
//! ```

pub mod filter;
pub mod series;
pub mod session;

// Re-exports
pub use filter::{filter_by_bin, filter_by_contrast_bin};
pub use series::{contrast_values, metric_values, paired_contrast_values, paired_values};
pub use session::Session;

#[cfg(feature = "parallel")]
pub use series::parallel;

pub use tone_core::{Error, Result};
