//! Exploratory analysis toolkit for extracted facial-feature color datasets
//!
//! tone-stats operates on datasets that pair image filenames with the colors
//! sampled from facial regions (skin, mouth, hair, iris, mouth contour,
//! under-eye skin), each color carried as a hex string plus HSL and LCH
//! triples. It derives scalar color metrics, bins them into histograms,
//! computes circular and linear contrast between feature pairs, and filters
//! the dataset back from a selected bin. Everything is a pure function over
//! immutable records, ready for an external chart-rendering layer.
//!
//! This is a facade crate that re-exports the workspace members:
//!
//! - [`tone_core`]: record model, metric extraction, contrast math, loading
//! - [`tone_histogram`]: integer binning and histogram operations
//! - [`tone_session`]: value series, bin/point filtering, session state
//!
//! # Example
//!
//! ```rust
//! use tone_stats::core::{ColorSpace, Dataset, Feature, MetricKind};
//! use tone_stats::histogram::RoundBinner;
//! use tone_stats::session::{metric_values, Session};
//!
//! let json = r#"[{
//!     "input": {
//!         "filename": "face_001.jpg",
//!         "colors": {
//!             "skin_hsl": [0.5, 0.5, 0.5],
//!             "skin_lch": [50.0, 20.0, 180.0]
//!         }
//!     }
//! }]"#;
//!
//! let dataset = Dataset::from_json_str(json).unwrap();
//! let hues = metric_values(dataset.records(), Feature::Skin, MetricKind::Hue, ColorSpace::Hsl);
//! let histogram = RoundBinner::new().build(&hues).unwrap();
//! assert_eq!(histogram.count(180), 1);
//!
//! let mut session = Session::new(dataset);
//! session.select_bin(Feature::Skin, MetricKind::Hue, ColorSpace::Hsl, 180);
//! assert_eq!(session.filtered().len(), 1);
//! ```

pub use tone_core as core;
pub use tone_histogram as histogram;
pub use tone_session as session;

// Flat re-exports of the most common types
pub use tone_core::{
    circular_diff, contrast, contrast_for_record, extract, ColorRecord, ColorSpace, ContrastPair,
    Dataset, Error, Feature, FeatureColor, Hsl, Lch, MetricKind, MetricValue, Result,
};
pub use tone_histogram::{bin_key, Bin, Histogram, HistogramOps, RoundBinner};
pub use tone_session::Session;
