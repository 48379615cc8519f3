//! Clock-in/clock-out request models.
//!
//! Inbound bodies are first read permissively into [`RawClockRequest`], which
//! never fails on missing or oddly-typed fields, and then validated into a
//! [`ClockRequest`]. Only a validated request is ever forwarded downstream, and
//! its serialized form is exactly the six allow-listed keys.

use crate::error::ClockError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Clock event kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClockAction {
    In,
    Out,
}

impl ClockAction {
    /// Parse an action case-insensitively, ignoring surrounding whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "IN" => Some(Self::In),
            "OUT" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client body as received, before validation.
///
/// Explicit `null` is stored as `None`, so it is indistinguishable from an
/// absent key. Unknown keys are ignored; a repeated key keeps its last value.
#[derive(Debug, Default)]
pub struct RawClockRequest {
    pub action: Option<Value>,
    pub user_id: Option<Value>,
    pub lat: Option<Value>,
    pub lng: Option<Value>,
    pub device: Option<Value>,
    pub note: Option<Value>,
}

impl RawClockRequest {
    /// Parse a request body. Empty, malformed or non-object bodies yield an
    /// empty request so that field validation reports the first missing field.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        let mut take = |key: &str| map.remove(key).filter(|value| !value.is_null());

        Self {
            action: take("action"),
            user_id: take("userId"),
            lat: take("lat"),
            lng: take("lng"),
            device: take("device"),
            note: take("note"),
        }
    }
}

/// Validated clock event, serialized as the downstream payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockRequest {
    pub action: ClockAction,
    pub user_id: String,
    pub lat: f64,
    pub lng: f64,
    pub device: String,
    pub note: String,
}

impl TryFrom<RawClockRequest> for ClockRequest {
    type Error = ClockError;

    /// Validates `action`, then `userId`, then the coordinates; the first
    /// failing check decides the error.
    fn try_from(raw: RawClockRequest) -> Result<Self, Self::Error> {
        let action = raw
            .action
            .as_ref()
            .and_then(scalar_text)
            .and_then(|text| ClockAction::parse(&text))
            .ok_or(ClockError::BadAction)?;

        let user_id = raw
            .user_id
            .as_ref()
            .and_then(scalar_text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ClockError::NoUser)?;

        let (lat, lng) = match (
            raw.lat.as_ref().and_then(coordinate),
            raw.lng.as_ref().and_then(coordinate),
        ) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(ClockError::NoGps),
        };

        Ok(Self {
            action,
            user_id,
            lat,
            lng,
            device: raw.device.as_ref().and_then(scalar_text).unwrap_or_default(),
            note: raw.note.as_ref().and_then(scalar_text).unwrap_or_default(),
        })
    }
}

/// Text form of a string, number or boolean. Containers and null have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A coordinate is any JSON number, or a string holding a finite decimal.
/// Zero is a valid coordinate.
fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
