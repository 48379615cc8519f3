//! The clock proxy: validate, forward, normalize.

use crate::{
    error::ClockError,
    models::{ClockRequest, RawClockRequest},
    services::{
        gas_client::{GasClient, GasReply},
        metrics::AppMetrics,
    },
};
use actix_web::{ResponseError, http::StatusCode};
use serde_json::{Value, json};

/// Outcome label recorded for calls that return the downstream JSON
const FORWARDED: &str = "OK";

/// Forwards validated clock events to the downstream web app.
///
/// Holds only read-only state, so one instance is cloned into every worker
/// and any number of calls may be in flight at once.
#[derive(Clone)]
pub struct ClockProxy {
    gas_url: String,
    client: GasClient,
    metrics: Option<AppMetrics>,
}

impl ClockProxy {
    /// Create a proxy for `gas_url`. An empty URL is accepted; every call then
    /// fails with `NO_GAS_URL`.
    pub fn new(gas_url: impl Into<String>, metrics: Option<AppMetrics>) -> Result<Self, reqwest::Error> {
        let client = GasClient::new(metrics.as_ref().map(|m| m.gas.clone()))?;
        Ok(Self::with_client(gas_url, client, metrics))
    }

    /// Create a proxy that forwards through an existing client
    pub fn with_client(gas_url: impl Into<String>, client: GasClient, metrics: Option<AppMetrics>) -> Self {
        Self {
            gas_url: gas_url.into().trim().to_string(),
            client,
            metrics,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.gas_url.is_empty()
    }

    /// Handle one raw `/api/clock` body and produce the client status and JSON body.
    ///
    /// Never fails: every error is folded into the failure envelope.
    pub async fn handle(&self, raw_body: &[u8]) -> (StatusCode, Value) {
        let (status, body, code) = match self.forward(raw_body).await {
            Ok(reply) => (StatusCode::OK, reply, FORWARDED),
            Err(e) => {
                if e.is_recoverable() {
                    tracing::info!(code = e.code(), error = %e, "Clock request rejected");
                } else {
                    tracing::error!(code = e.code(), error = %e, "Clock request failed");
                }
                let body = serde_json::to_value(e.envelope()).unwrap_or_else(|_| {
                    json!({"ok": false, "code": e.code(), "message": e.user_message()})
                });
                (e.status_code(), body, e.code())
            }
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_clock_outcome(code);
        }

        (status, body)
    }

    /// Validate the body and forward it, returning the downstream JSON object.
    ///
    /// No downstream call is made unless the URL is configured and the request
    /// is fully valid.
    pub async fn forward(&self, raw_body: &[u8]) -> Result<Value, ClockError> {
        if !self.is_configured() {
            return Err(ClockError::NoGasUrl);
        }

        let request = ClockRequest::try_from(RawClockRequest::from_body(raw_body))?;

        tracing::debug!(action = %request.action, "Forwarding clock request");

        let reply = self.client.post_json(&self.gas_url, &request).await?;
        parse_reply(reply)
    }
}

/// Accept any JSON object as the reply, whatever the downstream status.
fn parse_reply(reply: GasReply) -> Result<Value, ClockError> {
    match serde_json::from_str::<Value>(&reply.body) {
        Ok(value @ Value::Object(_)) => {
            if reply.status >= 400 {
                tracing::warn!(
                    status = reply.status,
                    "Downstream returned an error status with a JSON body"
                );
            }
            Ok(value)
        }
        _ => Err(ClockError::bad_gas_response(reply.status, &reply.body)),
    }
}
