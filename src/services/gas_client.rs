//! HTTP client for the downstream Apps Script web app.
//!
//! Every call is a single attempt with a fixed overall timeout. The client
//! does not interpret the reply; it hands back the status and body text and
//! leaves JSON handling to the caller.

use crate::services::metrics::GasClientMetrics;
use reqwest::Client;
use serde::Serialize;
use std::error::Error as _;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Fixed budget for one downstream call: connect, send and body read
pub const DOWNSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Raw downstream reply
#[derive(Debug, Clone)]
pub struct GasReply {
    pub status: u16,
    pub body: String,
}

/// Transport failures talking to the downstream web app
#[derive(Debug, thiserror::Error)]
pub enum GasClientError {
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl GasClientError {
    /// Error text including the underlying causes, e.g. the OS-level
    /// "connection refused" buried below reqwest's own message.
    pub fn detail(&self) -> String {
        match self {
            Self::Timeout { .. } => self.to_string(),
            Self::Network(e) => {
                let mut detail = e.to_string();
                let mut source = e.source();
                while let Some(cause) = source {
                    detail.push_str(": ");
                    detail.push_str(&cause.to_string());
                    source = cause.source();
                }
                detail
            }
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Network(_) => "network_error",
        }
    }
}

/// Client for the downstream web app. Cheap to clone; clones share a
/// connection pool.
#[derive(Clone)]
pub struct GasClient {
    client: Client,
    timeout: Duration,
    metrics: Option<GasClientMetrics>,
}

impl GasClient {
    /// Create a client with the fixed [`DOWNSTREAM_TIMEOUT`]
    pub fn new(metrics: Option<GasClientMetrics>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(DOWNSTREAM_TIMEOUT, metrics)
    }

    /// Create a client with a custom overall timeout
    pub fn with_timeout(
        timeout: Duration,
        metrics: Option<GasClientMetrics>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            timeout,
            metrics,
        })
    }

    /// POST `payload` as JSON to `url` and read the whole reply body
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<GasReply, GasClientError> {
        let destination = extract_destination(url);
        let start = Instant::now();

        let result = self.send(url, payload).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                info!(
                    destination = %destination,
                    status = reply.status,
                    duration_ms = duration.as_millis(),
                    "Downstream request completed"
                );
                self.record(&destination, "success", duration);
            }
            Err(e @ GasClientError::Timeout { .. }) => {
                warn!(
                    destination = %destination,
                    timeout_seconds = self.timeout.as_secs(),
                    "Downstream request timed out"
                );
                self.record(&destination, e.outcome(), duration);
            }
            Err(e) => {
                error!(
                    destination = %destination,
                    error = %e.detail(),
                    duration_ms = duration.as_millis(),
                    "Downstream request failed with network error"
                );
                self.record(&destination, e.outcome(), duration);
            }
        }

        result
    }

    async fn send<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<GasReply, GasClientError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        Ok(GasReply { status, body })
    }

    fn classify(&self, e: reqwest::Error) -> GasClientError {
        if e.is_timeout() {
            GasClientError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            GasClientError::Network(e)
        }
    }

    fn record(&self, destination: &str, outcome: &str, duration: Duration) {
        if let Some(metrics) = &self.metrics {
            metrics
                .requests_total
                .with_label_values(&[destination, outcome])
                .inc();
            metrics
                .request_duration_seconds
                .with_label_values(&[destination])
                .observe(duration.as_secs_f64());
        }
    }
}

/// Extract destination (host) from URL for metrics and log grouping
pub fn extract_destination(url: &str) -> String {
    url::Url::parse(url)
        .map(|u| u.host_str().unwrap_or("unknown").to_string())
        .unwrap_or_else(|_| "invalid_url".to_string())
}
