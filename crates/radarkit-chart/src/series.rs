//! Data series and their bookkeeping.

use crate::error::{ChartError, Result};
use radarkit_core::ThemeColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Smallest storable value (the chart center).
pub const VALUE_MIN: f64 = 0.0;
/// Largest storable value (the outer ring).
pub const VALUE_MAX: f64 = 100.0;

/// Clamp a value into `[VALUE_MIN, VALUE_MAX]`.
#[must_use]
pub fn clamp_value(value: f64) -> f64 {
    value.clamp(VALUE_MIN, VALUE_MAX)
}

/// Reject non-finite values and clamp the rest.
pub(crate) fn sanitize(tag: &str, values: Vec<f64>) -> Result<Vec<f64>> {
    if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ChartError::InvalidInput {
            tag: tag.to_string(),
            reason: format!("value {value} at index {index} is not a finite number"),
        });
    }
    Ok(values.into_iter().map(clamp_value).collect())
}

/// A named set of values, one per axis, drawn as a closed polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    /// Unique tag
    pub tag: String,
    /// Values in `[0, 100]`, one per axis
    pub values: Vec<f64>,
    /// Outline (and fill) color
    pub color: ThemeColor,
    /// Whether the polygon is filled
    pub fill: bool,
}

impl DataSeries {
    /// Value on `axis`; axes past the end of `values` read as 0.
    #[must_use]
    pub fn value_at(&self, axis: usize) -> f64 {
        self.values.get(axis).copied().unwrap_or(VALUE_MIN)
    }
}

/// Partial replacement for an existing series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesUpdate {
    /// New values
    pub values: Option<Vec<f64>>,
    /// New color
    pub color: Option<ThemeColor>,
    /// New fill flag
    pub fill: Option<bool>,
}

impl SeriesUpdate {
    /// Empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the values.
    #[must_use]
    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(values);
        self
    }

    /// Replace the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<ThemeColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Replace the fill flag.
    #[must_use]
    pub const fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// Snapshot of a series as returned by `get_all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    /// Stored values
    pub values: Vec<f64>,
    /// Series color
    pub color: ThemeColor,
}

/// Ordered collection of series with unique tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    series: Vec<DataSeries>,
}

impl SeriesStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, tag: &str) -> Option<usize> {
        self.series.iter().position(|s| s.tag == tag)
    }

    /// Look up a series by tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&DataSeries> {
        self.series.iter().find(|s| s.tag == tag)
    }

    /// Append a series, first removing any series with the same tag.
    ///
    /// Returns the replaced series, if any.
    pub fn insert(&mut self, series: DataSeries) -> Option<DataSeries> {
        let replaced = self.remove(&series.tag);
        self.series.push(series);
        replaced
    }

    /// Remove a series by tag.
    pub fn remove(&mut self, tag: &str) -> Option<DataSeries> {
        self.position(tag).map(|i| self.series.remove(i))
    }

    /// Apply a partial update in place, keeping the series' position.
    ///
    /// Returns `Ok(false)` if `tag` is unknown. Invalid values leave the
    /// series untouched.
    pub fn update(&mut self, tag: &str, update: SeriesUpdate) -> Result<bool> {
        let Some(index) = self.position(tag) else {
            return Ok(false);
        };
        let values = update.values.map(|v| sanitize(tag, v)).transpose()?;

        let series = &mut self.series[index];
        if let Some(values) = values {
            series.values = values;
        }
        if let Some(color) = update.color {
            series.color = color;
        }
        if let Some(fill) = update.fill {
            series.fill = fill;
        }
        Ok(true)
    }

    /// Series in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &DataSeries> {
        self.series.iter()
    }

    /// Series in draw order, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[DataSeries] {
        &self.series
    }

    /// Number of series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check if the store holds no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Tag → record mapping of every series.
    #[must_use]
    pub fn records(&self) -> BTreeMap<String, SeriesRecord> {
        self.series
            .iter()
            .map(|s| {
                (
                    s.tag.clone(),
                    SeriesRecord {
                        values: s.values.clone(),
                        color: s.color.clone(),
                    },
                )
            })
            .collect()
    }
}
