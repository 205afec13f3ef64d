//! # pricewatch
//!
//! A terminal dashboard for live spot-price snapshots.
//!
//! ## Architecture
//!
//! One refresh cycle, three sub-steps, driven by a fixed-period timer:
//! ```text
//! GET /latest/data → Snapshot → shape() → ShapedFrame → App (chart/table/gauges)
//! ```
//!
//! The fetcher and shaper live in the library; the renderer is the `tui`
//! module plus the `tui` binary. A failed cycle sets the status to `error`
//! and performs no renderer writes; the timer is never stopped by a failure.

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use tracing_subscriber::EnvFilter;

pub mod config;
pub mod fetch;
pub mod shape;
pub mod snapshot;
pub mod tui;

// Re-exports for convenience
pub use config::DashConfig;
pub use fetch::{FetchError, SnapshotClient};
pub use shape::{shape, ShapedFrame};
pub use snapshot::{parse_snapshot, Sample, Snapshot};

/// Initialise the global tracing subscriber.
///
/// Reads the `LOG_FORMAT` environment variable to choose output format:
/// - `"json"` — structured JSON output for log aggregators
/// - anything else (including unset) — human-readable pretty output
///
/// Filter level is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
///
/// The TUI binary does not call this — it owns the terminal, so its
/// diagnostics go to the in-app log tail instead.
///
/// # Errors
///
/// Returns [`InitError`] if the global subscriber has already been set
/// (e.g. by a previous call or a test harness).
pub fn init_tracing() -> Result<(), InitError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init(),
    };

    result.map_err(|e| InitError(format!("tracing init failed: {e}")))
}

/// Error returned when global initialisation cannot complete.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct InitError(String);
