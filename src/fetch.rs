//! # Module: Fetcher
//!
//! ## Responsibility
//! Performs one request per refresh cycle against the snapshot endpoint
//! and classifies failures: transport (request did not complete) versus
//! format (body not the expected JSON shape).
//!
//! ## Guarantees
//! - No retry here — the next regular timer tick is the only retry
//! - No timeout — a hung request stalls its own cycle only (the caller
//!   serializes cycles, so the timer itself keeps its cadence)
//! - Errors never panic; both kinds collapse to the `error` status at
//!   the cycle boundary
//!
//! ## NOT Responsible For
//! - Shaping or rendering (see `shape` and `tui`)
//! - Deciding what the endpoint URL is (see `config`)

use thiserror::Error;

use crate::snapshot::{parse_snapshot, Snapshot};

/// A failure of one fetch step.
///
/// Both variants are caught at the cycle boundary and surface to the
/// viewer as the single status value `error`; the distinction exists for
/// diagnostics only.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not complete: connect failure, non-2xx status,
    /// or an interrupted body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was received but is not a valid snapshot.
    #[error("format error: {0}")]
    Format(#[from] serde_json::Error),
}

impl FetchError {
    /// Short discriminant for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Format(_) => "format",
        }
    }
}

/// HTTP client bound to one snapshot endpoint.
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SnapshotClient {
    /// Creates a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Returns the endpoint this client polls.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Performs one `GET` and parses the body into a [`Snapshot`].
    ///
    /// # Errors
    ///
    /// [`FetchError::Transport`] if the request fails or returns a non-2xx
    /// status; [`FetchError::Format`] if the body does not parse.
    pub async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let response = self.http.get(&self.endpoint).send().await?;
        let body = response.error_for_status()?.text().await?;
        let snapshot = parse_snapshot(&body)?;
        tracing::debug!(
            endpoint = %self.endpoint,
            samples = snapshot.len(),
            "snapshot fetched"
        );
        Ok(snapshot)
    }
}
