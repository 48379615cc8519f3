//! Failure envelope returned by `/api/clock`.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Normalized failure body: `ok` is always `false` and `code` comes from the
/// closed taxonomy in [`crate::error::ClockError`]. Successful calls return
/// the downstream JSON object instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub code: String,
    /// Localized message suitable for display
    pub message: String,
    /// Underlying transport error, for `GAS_UNREACHABLE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Downstream HTTP status, for `BAD_GAS_RESPONSE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// First characters of the downstream body, for `BAD_GAS_RESPONSE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}
