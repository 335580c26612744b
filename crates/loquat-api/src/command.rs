// ── Command registry ──
//
// The closed set of device endpoints. Each command knows its HTTP verb,
// whether it carries a payload, and how its response is rendered. The
// registry is static: nothing is added or removed at runtime.

use std::str::FromStr;

use reqwest::Method;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::Error;

/// A named device operation. The wire name doubles as the endpoint path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// List access points seen by the device's last scan.
    GetScanResult,
    Status,
    GetStatus,
    /// Join a Wi-Fi network.
    Connect,
    /// Store an API key and AI server address on the device.
    #[strum(serialize = "apikey")]
    ApiKey,
    /// Current connection status, IP address, and SSID.
    GetNetInfo,
}

/// How a command's response body is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// JSON array of access points, rendered as a table.
    AccessPoints,
    /// JSON object with status / ip_address / ssid.
    NetworkInfo,
    /// Arbitrary JSON, pretty-printed when it parses.
    Json,
    /// Opaque confirmation text, echoed verbatim.
    Raw,
}

impl Command {
    /// Look up a command by its wire name.
    pub fn lookup(name: &str) -> Result<Self, Error> {
        Self::from_str(name).map_err(|_| Error::UnknownCommand {
            name: name.to_owned(),
        })
    }

    /// All wire names, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::iter().map(Self::path).collect()
    }

    /// Endpoint path segment (identical to the wire name).
    pub fn path(self) -> &'static str {
        self.into()
    }

    pub fn method(self) -> Method {
        match self {
            Self::Connect | Self::ApiKey => Method::POST,
            Self::GetScanResult | Self::Status | Self::GetStatus | Self::GetNetInfo => {
                Method::GET
            }
        }
    }

    /// POST commands are the only ones built from caller-supplied fields.
    pub fn requires_payload(self) -> bool {
        self.method() == Method::POST
    }

    /// Commands that block on slow device-side work.
    pub fn is_long_running(self) -> bool {
        matches!(self, Self::Connect | Self::ApiKey)
    }

    pub fn response_kind(self) -> ResponseKind {
        match self {
            Self::GetScanResult => ResponseKind::AccessPoints,
            Self::GetNetInfo => ResponseKind::NetworkInfo,
            Self::Status | Self::GetStatus => ResponseKind::Json,
            Self::Connect | Self::ApiKey => ResponseKind::Raw,
        }
    }
}
