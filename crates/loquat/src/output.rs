//! Output formatting for device responses.
//!
//! Each command kind has a renderer that turns the raw response body into
//! display text. Renderers never fail: malformed bodies become a short
//! report, missing fields become placeholders. Everything is written to
//! stderr.

use std::fmt::Write as _;
use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};
use tracing::{debug, warn};

use loquat_api::{AccessPoint, Command, NetworkInfo, ResponseKind, ScanResult, TransportConfig};

use crate::commands::Invocation;

const MASK: &str = "********";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AccessPointRow {
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Bars")]
    bars: i64,
    #[tabled(rename = "Security")]
    security: String,
}

impl From<&AccessPoint> for AccessPointRow {
    fn from(ap: &AccessPoint) -> Self {
        Self {
            ssid: ap.ssid.clone(),
            bars: ap.bars,
            security: ap.security.clone(),
        }
    }
}

// ── Render dispatcher ───────────────────────────────────────────────

/// Render a successful response body for `command`.
pub fn render(command: Command, body: &[u8]) -> String {
    match command.response_kind() {
        ResponseKind::AccessPoints => render_access_points(body),
        ResponseKind::NetworkInfo => render_network_info(body),
        ResponseKind::Json => render_json(body),
        ResponseKind::Raw => render_raw(body),
    }
}

/// Print rendered output on stderr.
pub fn print_output(output: &str) -> io::Result<()> {
    if output.is_empty() {
        return Ok(());
    }
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{output}")
}

// ── Renderers ───────────────────────────────────────────────────────

fn parse_failure(err: &loquat_api::Error) -> String {
    warn!("unparseable response: {err}");
    match err {
        loquat_api::Error::Deserialization { message, body } => {
            debug!(%body, "raw response body");
            format!("Failed to parse JSON response: {message}")
        }
        other => format!("Failed to parse JSON response: {other}"),
    }
}

fn render_access_points(body: &[u8]) -> String {
    let mut out = String::from("=== WiFi Access Points ===\n");
    match ScanResult::parse(body) {
        Ok(scan) => {
            let rows: Vec<AccessPointRow> =
                scan.access_points.iter().map(AccessPointRow::from).collect();
            out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
            if scan.skipped > 0 {
                warn!(skipped = scan.skipped, "scan result contained non-object entries");
                let _ = write!(out, "\n({} malformed entries skipped)", scan.skipped);
            }
        }
        Err(err) => out.push_str(&parse_failure(&err)),
    }
    out
}

fn render_network_info(body: &[u8]) -> String {
    let info = match NetworkInfo::parse(body) {
        Ok(info) => info,
        Err(err) => return format!("=== Network Information ===\n{}", parse_failure(&err)),
    };
    [
        "=== Network Information ===".to_owned(),
        format!("Connection Status: {}", info.status),
        format!("IP Address: {}", info.ip_address),
        format!("Connected SSID: {}", info.ssid),
    ]
    .join("\n")
}

fn render_json(body: &[u8]) -> String {
    let text = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
    format!("Response:\n{text}")
}

fn render_raw(body: &[u8]) -> String {
    format!("Response:\n{}", String::from_utf8_lossy(body))
}

// ── Preamble ────────────────────────────────────────────────────────

/// Describe the request about to be sent. Secrets are masked.
pub fn render_preamble(invocation: &Invocation, config: &TransportConfig) -> String {
    let command = invocation.command;
    let mut lines = vec![
        format!(
            "Connecting to: {}",
            config.base_url.as_str().trim_end_matches('/')
        ),
        format!("Command: {command}"),
    ];
    if let Some(ref ssid) = invocation.ssid {
        lines.push(format!("SSID: {ssid}"));
    }
    if invocation.psk.is_some() {
        lines.push(format!("PSK: {MASK}"));
    }
    if let Some(ref security) = invocation.security {
        lines.push(format!("Security: {security}"));
    }
    if invocation.apikey.is_some() {
        lines.push(format!("API Key: {MASK}"));
    }
    if let Some(ref aiserver) = invocation.aiserver {
        lines.push(format!("AI Server: {aiserver}"));
    }
    lines.push(format!("Full URL: {}", config.endpoint(command)));
    lines.push(format!(
        "Making {} request ({}s timeout)...",
        command.method(),
        config.timeout_for(command).as_secs()
    ));
    lines.join("\n")
}
