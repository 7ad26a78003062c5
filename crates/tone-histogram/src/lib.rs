//! Integer-bin histogram construction for color metric distributions
//!
//! This crate turns sequences of scalar metric values (hues in degrees,
//! saturations and lightnesses in percent, chromas as-is) into frequency
//! histograms over rounded integer bins, for bar chart rendering by an
//! external collaborator.
//!
//! # Key Properties
//!
//! - **One rounding rule**: round half away from zero, for every metric
//! - **Sparse bins**: only keys that occur are represented, ascending
//! - **Filter consistency**: [`bin_key`] is exported so bin selection can
//!   re-derive membership with the identical rule
//!
//! # Examples
//!
//! ```rust
//! use tone_histogram::{RoundBinner, bin_key};
//! use tone_core::MetricKind;
//!
//! let hues = vec![180.0, 187.2, 180.4];
//! let histogram = RoundBinner::new().build(&hues).unwrap();
//!
//! assert_eq!(histogram.keys().collect::<Vec<_>>(), vec![180, 187]);
//! assert_eq!(histogram.count(180), 2);
//! assert_eq!(histogram.labels(MetricKind::Hue), vec!["180\u{00b0}", "187\u{00b0}"]);
//! assert_eq!(bin_key(187.2), 187);
//! ```
//!
//! ## Merging partitioned histograms
//!
//! ```rust
//! use tone_histogram::{HistogramOps, RoundBinner};
//!
//! let binner = RoundBinner::new();
//! let left = binner.build(&[1.0, 2.0]).unwrap();
//! let right = binner.build(&[2.0, 3.0]).unwrap();
//!
//! let merged = left.merge(&right);
//! assert_eq!(merged.total_count(), 4);
//! ```

pub mod builders;
pub mod ops;
pub mod types;

// Re-export main types
pub use builders::{bin_key, RoundBinner};
pub use ops::HistogramOps;
pub use types::{Bin, Histogram};

/// Build a histogram from metric values with the canonical rounding rule
pub fn histogram(values: &[f64]) -> tone_core::Result<Histogram> {
    RoundBinner::new().build(values)
}

pub use tone_core::{Error, Result};
