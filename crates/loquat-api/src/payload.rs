// ── Request payloads ──
//
// Pure builders for the JSON bodies of POST commands. Every builder
// validates its inputs up front so an invalid invocation never reaches the
// network. Secrets stay wrapped until serialization.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

use crate::error::Error;

/// Security type assumed when none is supplied.
pub const DEFAULT_SECURITY: &str = "WPA2";

const OPEN_SECURITY: &str = "Open";

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Body of `POST /connect`.
#[derive(Debug, Serialize)]
pub struct ConnectRequest {
    pub ssid: String,
    #[serde(serialize_with = "expose")]
    pub psk: SecretString,
    pub security: String,
}

impl ConnectRequest {
    /// Validate connect fields.
    ///
    /// Open networks (`open`, any case) always carry an empty PSK; anything
    /// else needs a PSK and keeps the caller's security string as given.
    pub fn build(
        ssid: Option<&str>,
        psk: Option<&str>,
        security: Option<&str>,
    ) -> Result<Self, Error> {
        let ssid = present(ssid).ok_or_else(|| Error::validation("ssid", "ssid required"))?;
        let security = present(security).unwrap_or(DEFAULT_SECURITY);

        if security.eq_ignore_ascii_case(OPEN_SECURITY) {
            return Ok(Self {
                ssid: ssid.to_owned(),
                psk: SecretString::from(String::new()),
                security: OPEN_SECURITY.to_owned(),
            });
        }

        let psk = present(psk)
            .ok_or_else(|| Error::validation("psk", "psk required for private network"))?;

        Ok(Self {
            ssid: ssid.to_owned(),
            psk: SecretString::from(psk.to_owned()),
            security: security.to_owned(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.security == OPEN_SECURITY
    }
}

/// Body of `POST /apikey`.
#[derive(Debug, Serialize)]
pub struct ApiKeyRequest {
    #[serde(serialize_with = "expose")]
    pub apikey: SecretString,
    pub aiserver: String,
}

impl ApiKeyRequest {
    pub fn build(apikey: Option<&str>, aiserver: Option<&str>) -> Result<Self, Error> {
        let apikey =
            present(apikey).ok_or_else(|| Error::validation("apikey", "apikey required"))?;
        let aiserver =
            present(aiserver).ok_or_else(|| Error::validation("aiserver", "aiserver required"))?;

        Ok(Self {
            apikey: SecretString::from(apikey.to_owned()),
            aiserver: aiserver.to_owned(),
        })
    }
}

/// A validated request body for one of the POST commands.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Connect(ConnectRequest),
    ApiKey(ApiKeyRequest),
}

impl Payload {
    /// JSON with secret fields replaced by `********`, for logs and echo.
    pub fn masked_json(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(map) = value.as_object_mut() {
            for key in ["psk", "apikey"] {
                if let Some(field) = map.get_mut(key) {
                    if field.as_str().is_some_and(|s| !s.is_empty()) {
                        *field = serde_json::Value::from("********");
                    }
                }
            }
        }
        value
    }
}

impl From<ConnectRequest> for Payload {
    fn from(req: ConnectRequest) -> Self {
        Self::Connect(req)
    }
}

impl From<ApiKeyRequest> for Payload {
    fn from(req: ApiKeyRequest) -> Self {
        Self::ApiKey(req)
    }
}
