//! Error types for the clock proxy.
//!
//! [`ClockError`] is the closed failure taxonomy of `/api/clock`. Each variant
//! knows its wire code, its localized message and the HTTP status the client
//! sees, and renders itself as an [`ErrorEnvelope`] through actix's
//! [`ResponseError`].

use crate::{models::ErrorEnvelope, services::gas_client::GasClientError};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Maximum number of characters of a non-JSON downstream body echoed back
pub const RAW_EXCERPT_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("GAS_WEBAPP_URL is not configured")]
    NoGasUrl,

    #[error("action must be IN or OUT")]
    BadAction,

    #[error("userId is missing or empty")]
    NoUser,

    #[error("lat/lng are missing")]
    NoGps,

    #[error("downstream unreachable: {0}")]
    GasUnreachable(#[from] GasClientError),

    #[error("downstream returned a non-JSON body (HTTP {http_status})")]
    BadGasResponse { http_status: u16, raw: String },
}

impl ClockError {
    /// Build a `BadGasResponse`, keeping at most [`RAW_EXCERPT_CHARS`] characters of the body
    pub fn bad_gas_response(http_status: u16, body: &str) -> Self {
        Self::BadGasResponse {
            http_status,
            raw: body.chars().take(RAW_EXCERPT_CHARS).collect(),
        }
    }

    /// Wire code from the closed taxonomy
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoGasUrl => "NO_GAS_URL",
            Self::BadAction => "BAD_ACTION",
            Self::NoUser => "NO_USER",
            Self::NoGps => "NO_GPS",
            Self::GasUnreachable(_) => "GAS_UNREACHABLE",
            Self::BadGasResponse { .. } => "BAD_GAS_RESPONSE",
        }
    }

    /// Localized message shown to the employee
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoGasUrl => "系統尚未設定 GAS_WEBAPP_URL",
            Self::BadAction => "無效的打卡類型",
            Self::NoUser => "缺少使用者資訊，請重新開啟打卡頁",
            Self::NoGps => "無法取得定位，請允許定位權限後再試一次",
            Self::GasUnreachable(_) => "無法連線到 GAS，請稍後再試",
            Self::BadGasResponse { .. } => "GAS 回應格式錯誤（非 JSON）",
        }
    }

    /// Whether the caller can fix the failure by changing input or retrying later
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NoGasUrl | Self::BadGasResponse { .. })
    }

    /// Build the JSON failure body
    pub fn envelope(&self) -> ErrorEnvelope {
        let mut envelope = ErrorEnvelope {
            ok: false,
            code: self.code().to_string(),
            message: self.user_message().to_string(),
            detail: None,
            http_status: None,
            raw: None,
        };

        match self {
            Self::GasUnreachable(source) => envelope.detail = Some(source.detail()),
            Self::BadGasResponse { http_status, raw } => {
                envelope.http_status = Some(*http_status);
                envelope.raw = Some(raw.clone());
            }
            _ => {}
        }

        envelope
    }
}

impl ResponseError for ClockError {
    /// Downstream failures are reported with 200 so the front end relies on
    /// `ok` alone; configuration and validation failures keep their status.
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NoGasUrl => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadAction | Self::NoUser | Self::NoGps => StatusCode::BAD_REQUEST,
            Self::GasUnreachable(_) | Self::BadGasResponse { .. } => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}

/// Errors that prevent the service from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ClockError::NoGasUrl.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ClockError::BadAction.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ClockError::NoUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ClockError::NoGps.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ClockError::bad_gas_response(502, "<html>").status_code(),
            StatusCode::OK
        );
        assert_eq!(
            ClockError::from(GasClientError::Timeout { seconds: 15 }).status_code(),
            StatusCode::OK
        );
    }

    #[test]
    fn test_raw_excerpt_is_truncated_by_characters() {
        let body = "打".repeat(RAW_EXCERPT_CHARS + 20);
        match ClockError::bad_gas_response(200, &body) {
            ClockError::BadGasResponse { raw, http_status } => {
                assert_eq!(http_status, 200);
                assert_eq!(raw.chars().count(), RAW_EXCERPT_CHARS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_fields() {
        let envelope = ClockError::NoGps.envelope();
        assert!(!envelope.ok);
        assert_eq!(envelope.code, "NO_GPS");
        assert!(envelope.detail.is_none());

        let json = serde_json::to_value(&envelope).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3, "optional diagnostics are omitted: {json}");

        let envelope = ClockError::from(GasClientError::Timeout { seconds: 15 }).envelope();
        assert_eq!(envelope.code, "GAS_UNREACHABLE");
        assert!(envelope.detail.unwrap().contains("15"));

        let envelope = ClockError::bad_gas_response(500, "oops").envelope();
        assert_eq!(envelope.http_status, Some(500));
        assert_eq!(envelope.raw.as_deref(), Some("oops"));
    }

    #[test]
    fn test_recoverability() {
        assert!(!ClockError::NoGasUrl.is_recoverable());
        assert!(ClockError::BadAction.is_recoverable());
        assert!(ClockError::NoUser.is_recoverable());
        assert!(ClockError::NoGps.is_recoverable());
        assert!(ClockError::from(GasClientError::Timeout { seconds: 15 }).is_recoverable());
        assert!(!ClockError::bad_gas_response(200, "").is_recoverable());
    }
}
