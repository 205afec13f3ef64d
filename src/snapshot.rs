//! # Module: Wire Model
//!
//! ## Responsibility
//! Types for one fetched batch of price samples, exactly as the endpoint
//! serves them: an array of `{ ts, prices }` objects, oldest first. A
//! snapshot lives for one refresh cycle and is dropped after shaping.
//!
//! ## Guarantees
//! - `ts` parses any RFC 3339 UTC timestamp (`Z` or `+00:00` suffix)
//! - Price-map key order survives deserialization (first-seen order)
//! - Null, absent, and non-numeric price values all read as "no value"

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One price observation: a UTC timestamp plus a mapping from series name
/// (e.g. `"BTC-USD"`) to spot price.
///
/// Produced externally; immutable once received. A `null` (or missing)
/// price means the upstream fetch for that series failed at that instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Observation time in UTC.
    pub ts: DateTime<Utc>,
    /// Series name to price. Kept as raw JSON values so that key order is
    /// preserved and unexpected value types degrade to gaps, not errors.
    #[serde(default)]
    pub prices: Map<String, Value>,
}

/// An ordered batch of samples as returned by one fetch, oldest first.
pub type Snapshot = Vec<Sample>;

impl Sample {
    /// Returns the price for `series`, or `None` if the value is null,
    /// absent, or not a number.
    pub fn price(&self, series: &str) -> Option<f64> {
        self.prices.get(series).and_then(Value::as_f64)
    }

    /// Returns the series names in this sample's price map, in first-seen
    /// order.
    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }
}

/// Parses a raw response body into a [`Snapshot`].
///
/// # Errors
///
/// Returns a `serde_json::Error` if the body is not valid JSON or is not
/// an array of `{ ts, prices }` objects.
pub fn parse_snapshot(body: &str) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(ts: &str, prices: Value) -> Sample {
        serde_json::from_value(json!({ "ts": ts, "prices": prices }))
            .expect("valid sample json")
    }

    #[test]
    fn test_parse_snapshot_basic() {
        let body = r#"[{"ts":"2024-01-01T00:00:00Z","prices":{"BTC-USD":100.0}}]"#;
        let snap = parse_snapshot(body).expect("valid snapshot");
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].price("BTC-USD"), Some(100.0));
    }

    #[test]
    fn test_parse_snapshot_empty_array() {
        let snap = parse_snapshot("[]").expect("empty snapshot is valid");
        assert!(snap.is_empty());
    }

    #[test]
    fn test_parse_snapshot_rejects_non_array() {
        assert!(parse_snapshot(r#"{"ts":"2024-01-01T00:00:00Z"}"#).is_err());
        assert!(parse_snapshot("not json").is_err());
    }

    #[test]
    fn test_parse_snapshot_rejects_bad_timestamp() {
        let body = r#"[{"ts":"yesterday","prices":{}}]"#;
        assert!(parse_snapshot(body).is_err());
    }

    #[test]
    fn test_parse_snapshot_accepts_offset_timestamp() {
        let body = r#"[{"ts":"2024-01-01T00:00:00+00:00","prices":{}}]"#;
        let snap = parse_snapshot(body).expect("offset form is valid");
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn test_parse_snapshot_missing_prices_defaults_empty() {
        let body = r#"[{"ts":"2024-01-01T00:00:00Z"}]"#;
        let snap = parse_snapshot(body).expect("prices field is optional");
        assert!(snap[0].prices.is_empty());
    }

    #[test]
    fn test_price_null_is_none() {
        let s = sample("2024-01-01T00:00:00Z", json!({"BTC-USD": null}));
        assert_eq!(s.price("BTC-USD"), None);
    }

    #[test]
    fn test_price_absent_is_none() {
        let s = sample("2024-01-01T00:00:00Z", json!({"BTC-USD": 100.0}));
        assert_eq!(s.price("ETH-USD"), None);
    }

    #[test]
    fn test_price_non_numeric_is_none() {
        let s = sample("2024-01-01T00:00:00Z", json!({"BTC-USD": "100.0"}));
        assert_eq!(s.price("BTC-USD"), None);
    }

    #[test]
    fn test_price_integer_reads_as_f64() {
        let s = sample("2024-01-01T00:00:00Z", json!({"BTC-USD": 100}));
        assert_eq!(s.price("BTC-USD"), Some(100.0));
    }

    #[test]
    fn test_series_names_preserve_insertion_order() {
        let body = r#"[{"ts":"2024-01-01T00:00:00Z","prices":{"ZZZ-USD":1,"AAA-USD":2,"MMM-USD":3}}]"#;
        let snap = parse_snapshot(body).expect("valid snapshot");
        let names: Vec<&str> = snap[0].series_names().collect();
        assert_eq!(names, vec!["ZZZ-USD", "AAA-USD", "MMM-USD"]);
    }
}
