//! Dataset loading
//!
//! The dataset arrives as a single JSON document: an array of entries of the
//! shape `{ "input": { "filename": ..., "colors": { "skin_hsl": [..], ... } } }`
//! with flat, per-feature optional keys. The wire shape is deserialized into
//! an intermediate struct and converted into the closed-enum [`ColorRecord`]
//! form; the flat key scheme never leaks past this module.
//!
//! Loading happens once at session start. The core never mutates records
//! afterwards and never initiates IO of its own beyond these entry points.

use crate::error::Result;
use crate::record::{ColorRecord, FeatureColor, Hsl, Lch};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// An immutable, loaded color dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ColorRecord>,
}

impl Dataset {
    /// Wrap an already-built record list
    pub fn new(records: Vec<ColorRecord>) -> Self {
        Self { records }
    }

    /// Parse a dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse a dataset from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// Load a dataset from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            records = dataset.len(),
            "loaded color dataset"
        );
        Ok(dataset)
    }

    fn from_raw(raw: Vec<RawRecord>) -> Self {
        Self {
            records: raw.into_iter().map(ColorRecord::from).collect(),
        }
    }

    /// The loaded records, in document order
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, ColorRecord> {
        self.records.iter()
    }

    /// Consume the dataset, yielding the record list
    pub fn into_records(self) -> Vec<ColorRecord> {
        self.records
    }
}

impl From<Vec<ColorRecord>> for Dataset {
    fn from(records: Vec<ColorRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ColorRecord;
    type IntoIter = std::slice::Iter<'a, ColorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Wire shape of one dataset entry
#[derive(Debug, Deserialize)]
struct RawRecord {
    input: RawInput,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    filename: String,
    #[serde(default)]
    colors: RawColors,
}

/// Flat per-feature keys as they appear in the document
#[derive(Debug, Default, Deserialize)]
struct RawColors {
    skin: Option<String>,
    skin_hex: Option<String>,
    skin_hsl: Option<Hsl>,
    skin_lch: Option<Lch>,
    mouth: Option<String>,
    mouth_hex: Option<String>,
    mouth_hsl: Option<Hsl>,
    mouth_lch: Option<Lch>,
    hair: Option<String>,
    hair_hex: Option<String>,
    hair_hsl: Option<Hsl>,
    hair_lch: Option<Lch>,
    iris: Option<String>,
    iris_hex: Option<String>,
    iris_hsl: Option<Hsl>,
    iris_lch: Option<Lch>,
    mouth_contour: Option<String>,
    mouth_contour_hex: Option<String>,
    mouth_contour_hsl: Option<Hsl>,
    mouth_contour_lch: Option<Lch>,
    under_eye_skin: Option<String>,
    under_eye_skin_hex: Option<String>,
    under_eye_skin_hsl: Option<Hsl>,
    under_eye_skin_lch: Option<Lch>,
}

// The `{feature}_hex` key takes precedence over the bare `{feature}`
// shorthand, matching how the dataset's producers emit display colors.
fn feature_color(
    shorthand: Option<String>,
    hex: Option<String>,
    hsl: Option<Hsl>,
    lch: Option<Lch>,
) -> FeatureColor {
    FeatureColor {
        hex: hex.or(shorthand),
        hsl,
        lch,
    }
}

impl From<RawRecord> for ColorRecord {
    fn from(raw: RawRecord) -> Self {
        let colors = raw.input.colors;
        ColorRecord {
            filename: raw.input.filename,
            skin: feature_color(colors.skin, colors.skin_hex, colors.skin_hsl, colors.skin_lch),
            mouth: feature_color(
                colors.mouth,
                colors.mouth_hex,
                colors.mouth_hsl,
                colors.mouth_lch,
            ),
            hair: feature_color(colors.hair, colors.hair_hex, colors.hair_hsl, colors.hair_lch),
            iris: feature_color(colors.iris, colors.iris_hex, colors.iris_hsl, colors.iris_lch),
            mouth_contour: feature_color(
                colors.mouth_contour,
                colors.mouth_contour_hex,
                colors.mouth_contour_hsl,
                colors.mouth_contour_lch,
            ),
            under_eye_skin: feature_color(
                colors.under_eye_skin,
                colors.under_eye_skin_hex,
                colors.under_eye_skin_hsl,
                colors.under_eye_skin_lch,
            ),
        }
    }
}
