//! # Module: Dashboard Feeds
//!
//! ## Responsibility
//! Data sources for the dashboard. Two modes:
//! - **Live mode**: polls the snapshot endpoint once per data tick and
//!   runs the full refresh cycle (fetch, shape, apply).
//! - **Mock mode**: deterministic synthetic two-series price walk with
//!   periodic gaps, for demoing the dashboard without a backend.
//!
//! ## Guarantees
//! - A failed live tick never propagates an error: it is logged and
//!   collapsed to the `error` status, and the next tick retries
//! - Mock history is bounded and its values stay in a sane price band
//! - One suspension point per live tick (the fetch); shaping and state
//!   application run to completion synchronously

use std::collections::VecDeque;

use chrono::Utc;
use serde_json::{Map, Number, Value};

use super::app::{App, LogEntry, LogLevel};
use crate::fetch::SnapshotClient;
use crate::shape::shape;
use crate::snapshot::{Sample, Snapshot};

/// Live feed bound to one snapshot endpoint.
#[derive(Debug)]
pub struct LiveFeed {
    client: SnapshotClient,
}

impl LiveFeed {
    /// Creates a live feed for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: SnapshotClient::new(endpoint),
        }
    }

    /// Runs one refresh cycle against the endpoint.
    ///
    /// On success the snapshot is shaped and applied; on failure the
    /// status goes to `error` and nothing else is written. Either way the
    /// cycle terminates and the caller's timer keeps running.
    pub async fn tick(&mut self, app: &mut App) {
        app.tick_count += 1;
        match self.client.fetch().await {
            Ok(snapshot) => {
                let frame = shape(&snapshot);
                app.apply_frame(frame);
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "refresh failed");
                app.apply_error(e.kind(), e.to_string());
            }
        }
    }
}

/// Mock history length: one hour of one-second samples is overkill for a
/// demo, so keep a minute's worth like the collector's default run.
const MOCK_HISTORY_CAP: usize = 60;

/// Every Nth mock sample drops the second series to exercise gap handling.
const MOCK_GAP_STRIDE: u64 = 13;

/// Synthetic price feed that tells a plausible two-series story.
///
/// Prices follow overlapping sine wobbles around fixed bases, so the
/// chart moves organically without any randomness — the same tick count
/// always produces the same prices.
#[derive(Debug, Default)]
pub struct MockFeed {
    history: VecDeque<Sample>,
    ticks: u64,
}

impl MockFeed {
    /// Creates a new mock feed with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one synthetic sample and runs the shape/apply steps on the
    /// accumulated history.
    pub fn tick(&mut self, app: &mut App) {
        self.ticks += 1;
        app.tick_count += 1;

        if self.ticks == 1 {
            app.push_log(LogEntry {
                timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
                level: LogLevel::Info,
                message: "Synthetic feed started".to_string(),
                fields: format!("history_cap={MOCK_HISTORY_CAP}"),
            });
        }

        if self.history.len() >= MOCK_HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(self.next_sample());

        let snapshot: Snapshot = self.history.iter().cloned().collect();
        app.apply_frame(shape(&snapshot));
    }

    /// Builds the next sample of the walk.
    fn next_sample(&self) -> Sample {
        let t = self.ticks as f64;
        let btc = 63_250.0 + 180.0 * (t * 0.05).sin() + 40.0 * (t * 0.23).cos();
        let eth = 2_610.0 + 12.0 * (t * 0.07).sin() + 3.0 * (t * 0.31).cos();

        let mut prices = Map::new();
        prices.insert("BTC-USD".to_string(), price_value(Some(btc)));
        let eth = if self.ticks % MOCK_GAP_STRIDE == 0 {
            None
        } else {
            Some(eth)
        };
        prices.insert("ETH-USD".to_string(), price_value(eth));

        Sample {
            ts: Utc::now(),
            prices,
        }
    }
}

/// Converts an optional price into the wire representation (null = gap).
fn price_value(price: Option<f64>) -> Value {
    price
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Status;
    use std::time::Duration;

    #[test]
    fn test_mock_first_tick_renders_a_frame() {
        let mut feed = MockFeed::new();
        let mut app = App::new("mock", Duration::from_secs(1));
        feed.tick(&mut app);

        assert_eq!(app.status, Status::On);
        assert_eq!(app.tick_count, 1);
        let frame = app.frame.as_ref().expect("frame after first tick");
        assert_eq!(frame.sample_count, 1);
        assert_eq!(frame.series, vec!["BTC-USD", "ETH-USD"]);
    }

    #[test]
    fn test_mock_history_bounded() {
        let mut feed = MockFeed::new();
        let mut app = App::new("mock", Duration::from_secs(1));
        for _ in 0..(MOCK_HISTORY_CAP + 25) {
            feed.tick(&mut app);
        }
        let frame = app.frame.as_ref().expect("frame");
        assert_eq!(frame.sample_count, MOCK_HISTORY_CAP);
    }

    #[test]
    fn test_mock_produces_gaps_in_second_series() {
        let mut feed = MockFeed::new();
        let mut app = App::new("mock", Duration::from_secs(1));
        for _ in 0..(MOCK_GAP_STRIDE + 1) {
            feed.tick(&mut app);
        }
        let frame = app.frame.as_ref().expect("frame");
        let eth = frame.values_for("ETH-USD").expect("ETH series");
        assert!(eth.iter().any(Option::is_none), "expected at least one gap");
        // BTC never gaps in mock mode.
        let btc = frame.values_for("BTC-USD").expect("BTC series");
        assert!(btc.iter().all(Option::is_some));
    }

    #[test]
    fn test_mock_prices_stay_in_band() {
        let mut feed = MockFeed::new();
        let mut app = App::new("mock", Duration::from_secs(1));
        for _ in 0..200 {
            feed.tick(&mut app);
            let frame = app.frame.as_ref().expect("frame");
            for v in frame.values_for("BTC-USD").expect("BTC series").iter().flatten() {
                assert!(*v > 62_000.0 && *v < 64_500.0, "BTC out of band: {v}");
            }
        }
    }

    #[test]
    fn test_mock_walk_is_deterministic_in_values() {
        let mut a = MockFeed::new();
        let mut b = MockFeed::new();
        let mut app_a = App::new("mock", Duration::from_secs(1));
        let mut app_b = App::new("mock", Duration::from_secs(1));
        for _ in 0..10 {
            a.tick(&mut app_a);
            b.tick(&mut app_b);
        }
        let va = app_a.frame.as_ref().and_then(|f| f.values_for("BTC-USD").map(<[_]>::to_vec));
        let vb = app_b.frame.as_ref().and_then(|f| f.values_for("BTC-USD").map(<[_]>::to_vec));
        assert_eq!(va, vb);
    }

    #[tokio::test]
    async fn test_live_tick_failure_sets_error_only() {
        let mut feed = LiveFeed::new("http://192.0.2.1:1/latest/data");
        let mut app = App::new("live", Duration::from_secs(1));
        let ran = tokio::time::timeout(
            std::time::Duration::from_secs(30),
            feed.tick(&mut app),
        )
        .await;
        if ran.is_ok() {
            assert_eq!(app.status, Status::Error);
            assert!(app.frame.is_none());
            assert!(app.chart.is_none());
            assert_eq!(app.tick_count, 1);
        }
    }
}
