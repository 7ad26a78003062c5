//! Filtering session over an immutable dataset
//!
//! A [`Session`] owns the full record sequence loaded at startup plus the
//! current filtered view and its human-readable label. The full sequence is
//! never mutated; every filter operation computes a fresh view from it (bin
//! selection) or narrows the current view (point selection). The rendering
//! collaborator re-reads `filtered()` after each operation.

use crate::filter::{filter_by_bin, filter_by_contrast_bin};
use tone_core::{
    ColorRecord, ColorSpace, ContrastPair, Dataset, Error, Feature, MetricKind, Result,
};

/// Stateful filtering session over a loaded dataset
#[derive(Debug, Clone)]
pub struct Session {
    all: Vec<ColorRecord>,
    filtered: Vec<ColorRecord>,
    filter_label: Option<String>,
}

impl Session {
    /// Start a session over a loaded dataset; the view starts unfiltered
    pub fn new(dataset: Dataset) -> Self {
        let all = dataset.into_records();
        Self {
            filtered: all.clone(),
            all,
            filter_label: None,
        }
    }

    /// The full, immutable record sequence
    pub fn records(&self) -> &[ColorRecord] {
        &self.all
    }

    /// The current filtered view, in original record order
    pub fn filtered(&self) -> &[ColorRecord] {
        &self.filtered
    }

    /// The label describing the active filter, if one is set
    pub fn filter_label(&self) -> Option<&str> {
        self.filter_label.as_deref()
    }

    /// Filter the full sequence to records whose metric lands in a bin
    ///
    /// Always re-derives from the full sequence, so the result matches the
    /// bar chart that produced the click regardless of any prior filter.
    pub fn select_bin(
        &mut self,
        feature: Feature,
        metric: MetricKind,
        space: ColorSpace,
        key: i64,
    ) {
        self.filtered = filter_by_bin(&self.all, feature, metric, space, key);
        self.filter_label = Some(format!(
            "filtered by {} {}{} ({}) - {}",
            metric.name(),
            key,
            metric.unit(),
            space.label(),
            feature.label(),
        ));
        tracing::debug!(
            %feature,
            %metric,
            %space,
            key,
            matched = self.filtered.len(),
            "bin filter applied"
        );
    }

    /// Filter the full sequence by a contrast bin for a fixed feature pair
    pub fn select_contrast_bin(
        &mut self,
        pair: ContrastPair,
        metric: MetricKind,
        space: ColorSpace,
        key: i64,
    ) {
        self.filtered = filter_by_contrast_bin(&self.all, pair, metric, space, key);
        self.filter_label = Some(format!(
            "filtered by {} contrast {}{} ({}) - {}",
            metric.name(),
            key,
            metric.unit(),
            space.label(),
            pair.label(),
        ));
        tracing::debug!(
            %pair,
            %metric,
            %space,
            key,
            matched = self.filtered.len(),
            "contrast bin filter applied"
        );
    }

    /// Narrow the current view to the single record at a scatter-point index
    ///
    /// The index addresses the *currently filtered* sequence, not the full
    /// one. An out-of-range index is a caller bug and fails loudly.
    pub fn select_point(&mut self, index: usize) -> Result<()> {
        let record = self
            .filtered
            .get(index)
            .cloned()
            .ok_or_else(|| Error::point_out_of_range(index, self.filtered.len()))?;

        self.filter_label = Some(format!("filtered by point: {}", record.filename));
        tracing::debug!(index, filename = %record.filename, "point filter applied");
        self.filtered = vec![record];
        Ok(())
    }

    /// Restore the full record sequence and clear the filter label
    pub fn reset(&mut self) {
        self.filtered = self.all.clone();
        self.filter_label = None;
        tracing::debug!(records = self.all.len(), "filter reset");
    }
}

impl From<Vec<ColorRecord>> for Session {
    fn from(records: Vec<ColorRecord>) -> Self {
        Self::new(Dataset::new(records))
    }
}
