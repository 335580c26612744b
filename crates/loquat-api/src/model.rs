// ── Display models ──
//
// Lenient decoding of device responses. Each field has a named default so
// that a partial or evolving response still renders: a missing or
// wrongly-typed field falls back to its default instead of failing the
// whole document.

use serde_json::{Map, Value};

use crate::error::Error;

/// Placeholder for absent or non-string text fields.
pub const UNKNOWN: &str = "Unknown";

/// Default signal strength when `bars` is absent or not a number.
pub const NO_BARS: i64 = 0;

fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_owned()
}

#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
fn int_field(obj: &Map<String, Value>, key: &str, default: i64) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(default),
        _ => default,
    }
}

fn parse_json(body: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

/// One entry of a `get_scan_result` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPoint {
    pub ssid: String,
    pub bars: i64,
    pub security: String,
}

impl AccessPoint {
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            ssid: text_field(obj, "ssid"),
            bars: int_field(obj, "bars", NO_BARS),
            security: text_field(obj, "security"),
        }
    }
}

/// Decoded `get_scan_result` body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub access_points: Vec<AccessPoint>,
    /// Array elements that were not JSON objects.
    pub skipped: usize,
}

impl ScanResult {
    /// Decode a JSON array of access points, skipping non-object entries.
    pub fn parse(body: &[u8]) -> Result<Self, Error> {
        let value = parse_json(body)?;
        let Value::Array(items) = value else {
            return Err(Error::Deserialization {
                message: "expected JSON array".into(),
                body: String::from_utf8_lossy(body).into_owned(),
            });
        };

        let mut result = Self::default();
        for item in &items {
            match item.as_object() {
                Some(obj) => result.access_points.push(AccessPoint::from_object(obj)),
                None => result.skipped += 1,
            }
        }
        Ok(result)
    }
}

/// Decoded `get_net_info` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub status: String,
    pub ip_address: String,
    pub ssid: String,
}

impl Default for NetworkInfo {
    fn default() -> Self {
        Self {
            status: UNKNOWN.into(),
            ip_address: UNKNOWN.into(),
            ssid: UNKNOWN.into(),
        }
    }
}

impl NetworkInfo {
    /// Decode a JSON object. Valid JSON of any other shape yields all
    /// placeholders; only unparseable bodies are an error.
    pub fn parse(body: &[u8]) -> Result<Self, Error> {
        let value = parse_json(body)?;
        Ok(value.as_object().map(Self::from_object).unwrap_or_default())
    }

    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            status: text_field(obj, "status"),
            ip_address: text_field(obj, "ip_address"),
            ssid: text_field(obj, "ssid"),
        }
    }
}
