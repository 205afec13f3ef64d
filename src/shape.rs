//! # Module: Shaper
//!
//! ## Responsibility
//! Converts a raw [`Snapshot`] into display-ready structures: axis
//! labels, per-series value arrays, table rows, gauge strings, and a
//! sample count. Pure function of its input — no surface state, no IO.
//!
//! ## Guarantees
//! - The series set is derived exactly once per frame and shared by
//!   chart, table header, and gauges
//! - Missing values stay gaps (`None`), never zero, never interpolated
//! - An empty snapshot shapes without panicking: fallback series, empty
//!   labels and rows, placeholder gauges
//! - Timestamps are displayed in the viewer's local timezone, read from
//!   the environment at call time

use chrono::Local;

use crate::snapshot::{Sample, Snapshot};

/// Glyph rendered wherever a value is missing.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Series name assumed when the snapshot is empty.
pub const FALLBACK_SERIES: &str = "BTC-USD";

/// Maximum number of table rows (most recent samples).
pub const TABLE_ROWS_CAP: usize = 10;

/// One row of the recent-samples table: a full local timestamp plus one
/// formatted cell per series.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Local date+time with seconds (converted from UTC).
    pub time: String,
    /// One cell per series, `"{:.2}"` or the placeholder glyph.
    pub cells: Vec<String>,
}

/// Everything the renderer needs for one tick, derived freshly from one
/// snapshot and discarded with it on the next successful cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedFrame {
    /// Local time-of-day (`%H:%M`) per sample, snapshot order.
    pub labels: Vec<String>,
    /// Full local date+time (`%Y-%m-%d %H:%M:%S`) per sample, for the table.
    pub long_labels: Vec<String>,
    /// The series set: first sample's price-map keys, first-seen order.
    pub series: Vec<String>,
    /// Per series (parallel to `series`), one entry per sample; `None`
    /// marks a gap.
    pub series_values: Vec<Vec<Option<f64>>>,
    /// Last [`TABLE_ROWS_CAP`] samples, most recent first.
    pub table_rows: Vec<TableRow>,
    /// Minimum of the first series' defined values, as `"$X.YZ"`, or the
    /// placeholder glyph.
    pub gauge_min: String,
    /// Maximum of the first series' defined values, same formatting.
    pub gauge_max: String,
    /// Number of samples in the snapshot.
    pub sample_count: usize,
}

impl ShapedFrame {
    /// Returns the value array for a series by name, if present.
    pub fn values_for(&self, name: &str) -> Option<&[Option<f64>]> {
        let idx = self.series.iter().position(|s| s == name)?;
        self.series_values.get(idx).map(Vec::as_slice)
    }
}

/// Shapes one snapshot into a [`ShapedFrame`].
pub fn shape(snapshot: &Snapshot) -> ShapedFrame {
    let labels: Vec<String> = snapshot.iter().map(|s| short_label(s)).collect();
    let long_labels: Vec<String> = snapshot.iter().map(|s| long_label(s)).collect();

    // Series set: derived once, shared by every surface this tick.
    let series: Vec<String> = match snapshot.first() {
        Some(first) => first.series_names().map(str::to_owned).collect(),
        None => vec![FALLBACK_SERIES.to_string()],
    };

    let series_values: Vec<Vec<Option<f64>>> = series
        .iter()
        .map(|name| snapshot.iter().map(|s| s.price(name)).collect())
        .collect();

    let skip = snapshot.len().saturating_sub(TABLE_ROWS_CAP);
    let table_rows: Vec<TableRow> = snapshot
        .iter()
        .zip(long_labels.iter())
        .skip(skip)
        .map(|(sample, time)| TableRow {
            time: time.clone(),
            cells: series.iter().map(|name| cell(sample.price(name))).collect(),
        })
        .rev()
        .collect();

    // Gauges track the first series only.
    let first_values = series_values.first().map(Vec::as_slice).unwrap_or(&[]);
    let defined = first_values.iter().flatten().copied();
    let min = defined.clone().fold(None::<f64>, |acc, v| {
        Some(acc.map_or(v, |a| a.min(v)))
    });
    let max = defined.fold(None::<f64>, |acc, v| Some(acc.map_or(v, |a| a.max(v))));

    ShapedFrame {
        labels,
        long_labels,
        series,
        series_values,
        table_rows,
        gauge_min: gauge(min),
        gauge_max: gauge(max),
        sample_count: snapshot.len(),
    }
}

/// Local time-of-day with 24-hour hour:minute precision.
fn short_label(sample: &Sample) -> String {
    sample.ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// Full local date+time with seconds, for the table.
fn long_label(sample: &Sample) -> String {
    sample
        .ts
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Formats a table cell: two decimals, or the placeholder glyph.
fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Formats a gauge value: dollar-prefixed two decimals, or the placeholder.
fn gauge(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => PLACEHOLDER.to_string(),
    }
}
