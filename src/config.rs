//! # Module: Dashboard Configuration
//!
//! ## Responsibility
//! Holds the few runtime knobs of the dashboard and parses them from
//! command-line arguments. Everything has a working default so the
//! binary runs with no arguments against a local collector.
//!
//! ## Guarantees
//! - Unknown flags are ignored, never fatal
//! - A malformed `--period-ms` value falls back to the default
//! - The refresh period is never zero

use std::time::Duration;

/// Default snapshot endpoint (the collector's Flask-era port).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/latest/data";

/// Default refresh period: one cycle per second.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashConfig {
    /// Snapshot endpoint URL.
    pub endpoint: String,
    /// Fixed refresh period for the data tick.
    pub period: Duration,
    /// Run against the synthetic feed instead of the endpoint.
    pub mock: bool,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            period: DEFAULT_PERIOD,
            mock: false,
        }
    }
}

impl DashConfig {
    /// Parses configuration from an argument list (without the program
    /// name). Recognised flags:
    ///
    /// - `--mock` — synthetic feed, no network
    /// - `--url <URL>` — snapshot endpoint
    /// - `--period-ms <N>` — refresh period in milliseconds (minimum 1)
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut cfg = Self::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--mock" => cfg.mock = true,
                "--url" => {
                    i += 1;
                    if let Some(url) = args.get(i) {
                        cfg.endpoint = url.clone();
                    }
                }
                "--period-ms" => {
                    i += 1;
                    if let Some(ms) = args.get(i).and_then(|v| v.parse::<u64>().ok()) {
                        cfg.period = Duration::from_millis(ms.max(1));
                    }
                }
                _ => {} // Ignore unknown args
            }
            i += 1;
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DashConfig::default();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.period, Duration::from_secs(1));
        assert!(!cfg.mock);
    }

    #[test]
    fn test_from_args_empty_is_default() {
        let cfg = DashConfig::from_args(Vec::<String>::new());
        assert_eq!(cfg, DashConfig::default());
    }

    #[test]
    fn test_from_args_mock() {
        let cfg = DashConfig::from_args(["--mock"]);
        assert!(cfg.mock);
    }

    #[test]
    fn test_from_args_url() {
        let cfg = DashConfig::from_args(["--url", "http://example.com/latest/data"]);
        assert_eq!(cfg.endpoint, "http://example.com/latest/data");
    }

    #[test]
    fn test_from_args_period() {
        let cfg = DashConfig::from_args(["--period-ms", "250"]);
        assert_eq!(cfg.period, Duration::from_millis(250));
    }

    #[test]
    fn test_from_args_period_zero_clamped() {
        let cfg = DashConfig::from_args(["--period-ms", "0"]);
        assert_eq!(cfg.period, Duration::from_millis(1));
    }

    #[test]
    fn test_from_args_malformed_period_falls_back() {
        let cfg = DashConfig::from_args(["--period-ms", "soon"]);
        assert_eq!(cfg.period, DEFAULT_PERIOD);
    }

    #[test]
    fn test_from_args_dangling_url_flag() {
        let cfg = DashConfig::from_args(["--url"]);
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_from_args_unknown_flags_ignored() {
        let cfg = DashConfig::from_args(["--verbose", "--mock", "extra"]);
        assert!(cfg.mock);
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    }
}
