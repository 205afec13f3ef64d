//! # Module: TUI App State
//!
//! ## Responsibility
//! Owns all dashboard state and applies refresh-cycle outcomes to it.
//! The `App` struct is the single source of truth for every widget's
//! data; the per-tick state machine is `apply_frame` (success path) and
//! `apply_error` (failure path), both of which terminate the cycle.
//!
//! ## Guarantees
//! - `apply_error` touches only the status and the log tail; the last
//!   frame and the chart slot are left exactly as they were
//! - The chart slot is initialised lazily on the first successful frame
//!   and then only mutated, never replaced while it exists
//! - The log tail is bounded and never grows past its cap

use std::collections::VecDeque;
use std::time::Duration;

use crate::shape::ShapedFrame;

/// Maximum number of log entries retained for display.
pub const LOG_ENTRIES_CAP: usize = 50;

/// Minimum terminal width for the dashboard to render.
pub const MIN_COLS: u16 = 70;

/// Minimum terminal height for the dashboard to render.
pub const MIN_ROWS: u16 = 24;

/// Overall dashboard status, mirroring the status text of each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No cycle has completed yet.
    Pending,
    /// The last cycle fetched, shaped, and rendered successfully.
    On,
    /// The last cycle failed; the previous frame is still shown.
    Error,
}

impl Status {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "-",
            Self::On => "on",
            Self::Error => "error",
        }
    }
}

/// A single entry for the diagnostic log tail.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Formatted local timestamp, e.g. "14:32:01".
    pub timestamp: String,
    /// Severity level.
    pub level: LogLevel,
    /// Primary log message.
    pub message: String,
    /// Structured fields as a formatted string.
    pub fields: String,
}

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message.
    Info,
    /// Warning condition.
    Warn,
    /// Error condition.
    Error,
}

impl LogLevel {
    /// Returns the display label for this log level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }
}

/// Render-ready chart buffers, rebuilt in place from each new frame.
///
/// This is the single-slot chart handle: `App` creates it on the first
/// successful tick and every later tick goes through [`ChartState::update`],
/// which mutates the existing buffers. Gap samples are omitted from the
/// point lists so the drawn line spans them instead of dropping to zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartState {
    /// Series names in frame order, for the legend.
    pub series_names: Vec<String>,
    /// Per series, `(sample index, value)` points with gaps omitted.
    pub points: Vec<Vec<(f64, f64)>>,
    /// X-axis upper bound (last sample index, at least 1).
    pub x_max: f64,
    /// Y-axis bounds across all defined values, padded.
    pub y_bounds: [f64; 2],
    /// Up to three x-axis tick labels: first, middle, last sample time.
    pub x_labels: Vec<String>,
}

impl ChartState {
    /// Builds chart buffers from the first successful frame.
    pub fn new(frame: &ShapedFrame) -> Self {
        let mut state = Self::default();
        state.update(frame);
        state
    }

    /// Rebuilds the buffers in place from a new frame.
    pub fn update(&mut self, frame: &ShapedFrame) {
        self.series_names.clear();
        self.series_names.extend(frame.series.iter().cloned());

        self.points.clear();
        for values in &frame.series_values {
            let series_points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
                .collect();
            self.points.push(series_points);
        }

        self.x_max = (frame.sample_count.saturating_sub(1) as f64).max(1.0);

        let defined = self.points.iter().flatten().map(|&(_, v)| v);
        let y_min = defined.clone().fold(f64::INFINITY, f64::min);
        let y_max = defined.fold(f64::NEG_INFINITY, f64::max);
        self.y_bounds = if y_min.is_finite() && y_max.is_finite() {
            // Flat lines still need a visible band.
            let pad = ((y_max - y_min) * 0.05).max(0.5);
            [y_min - pad, y_max + pad]
        } else {
            [0.0, 1.0]
        };

        self.x_labels.clear();
        if let (Some(first), Some(last)) = (frame.labels.first(), frame.labels.last()) {
            self.x_labels.push(first.clone());
            if frame.labels.len() > 2 {
                self.x_labels.push(frame.labels[frame.labels.len() / 2].clone());
            }
            if frame.labels.len() > 1 {
                self.x_labels.push(last.clone());
            }
        }
    }
}

/// Primary application state for the TUI dashboard.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether data ticks are paused (rendering continues).
    pub paused: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Monotonic data-tick counter.
    pub tick_count: u64,

    /// Status of the most recent cycle.
    pub status: Status,
    /// The last successfully shaped frame, if any.
    pub frame: Option<ShapedFrame>,
    /// The chart slot. `None` until the first successful tick.
    pub chart: Option<ChartState>,

    /// Rolling diagnostic log, newest at the back.
    pub log_entries: VecDeque<LogEntry>,

    /// Endpoint shown in the title bar ("mock" for the synthetic feed).
    pub source: String,
    /// Data update interval.
    pub tick_rate: Duration,
}

impl App {
    /// Creates a new `App` with no frame rendered yet.
    pub fn new(source: impl Into<String>, tick_rate: Duration) -> Self {
        Self {
            should_quit: false,
            paused: false,
            show_help: false,
            tick_count: 0,
            status: Status::Pending,
            frame: None,
            chart: None,
            log_entries: VecDeque::with_capacity(LOG_ENTRIES_CAP),
            source: source.into(),
            tick_rate,
        }
    }

    /// Applies a successful cycle: stores the frame, brings the chart
    /// slot up to date, and sets the status to `on`.
    pub fn apply_frame(&mut self, frame: ShapedFrame) {
        match &mut self.chart {
            Some(chart) => chart.update(&frame),
            None => self.chart = Some(ChartState::new(&frame)),
        }
        self.status = Status::On;
        self.frame = Some(frame);
    }

    /// Applies a failed cycle: status `error`, one log entry, and no
    /// other writes — the previous frame stays visible.
    pub fn apply_error(&mut self, kind: &str, detail: String) {
        self.status = Status::Error;
        self.push_log(LogEntry {
            timestamp: now_stamp(),
            level: LogLevel::Error,
            message: "Refresh failed".to_string(),
            fields: format!("kind={kind} detail={detail}"),
        });
    }

    /// Pushes a log entry, evicting the oldest if at capacity.
    pub fn push_log(&mut self, entry: LogEntry) {
        if self.log_entries.len() >= LOG_ENTRIES_CAP {
            self.log_entries.pop_front();
        }
        self.log_entries.push_back(entry);
    }
}

/// Local wall-clock stamp for log entries.
fn now_stamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
