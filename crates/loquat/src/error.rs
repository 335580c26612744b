//! CLI error types with miette diagnostics.
//!
//! Maps `loquat_api::Error` variants into user-facing errors with
//! actionable help text.

use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────

    #[error("Invalid server address '{server}'")]
    #[diagnostic(
        code(loquat::invalid_server),
        help("Pass a host name or IP address without scheme or port, e.g. --server 192.168.1.100")
    )]
    InvalidServer {
        server: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid command: {name}")]
    #[diagnostic(code(loquat::unknown_command), help("Valid commands: {available}"))]
    UnknownCommand { name: String, available: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(loquat::validation), help("{hint}"))]
    Validation {
        field: String,
        reason: String,
        hint: String,
    },

    // ── Transport ────────────────────────────────────────────────────

    #[error("Could not reach device at {url}")]
    #[diagnostic(
        code(loquat::connection_failed),
        help("Check that the device is powered on and reachable, and that --server and --port are correct.")
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: loquat_api::Error,
    },

    #[error("'{command}' timed out after {timeout:?}")]
    #[diagnostic(
        code(loquat::timeout),
        help("Increase the limit with --timeout (or --long-timeout for connect/apikey).")
    )]
    Timeout {
        command: String,
        timeout: Duration,
        #[source]
        source: loquat_api::Error,
    },

    // ── Device ───────────────────────────────────────────────────────

    #[error("'{command}' failed: HTTP Code: {status}")]
    #[diagnostic(code(loquat::http_status))]
    HttpStatus { command: String, status: u16 },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    ///
    /// Every failure is terminal for the invocation and shares one code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidServer { .. }
            | Self::UnknownCommand { .. }
            | Self::Validation { .. }
            | Self::ConnectionFailed { .. }
            | Self::Timeout { .. }
            | Self::HttpStatus { .. }
            | Self::Io(_) => exit_code::GENERAL,
        }
    }

    /// Translate an API error raised while running `command` against `url`.
    pub fn from_api(err: loquat_api::Error, command: &str, url: &str) -> Self {
        match err {
            loquat_api::Error::Validation { field, reason } => Self::Validation {
                field: field.into(),
                hint: validation_hint(field).into(),
                reason,
            },
            loquat_api::Error::UnknownCommand { name } => Self::UnknownCommand {
                name,
                available: loquat_api::Command::names().join(", "),
            },
            source @ loquat_api::Error::Timeout { timeout, .. } => Self::Timeout {
                command: command.into(),
                timeout,
                source,
            },
            other => Self::ConnectionFailed {
                url: url.into(),
                source: other,
            },
        }
    }
}

fn validation_hint(field: &str) -> &'static str {
    match field {
        "ssid" => "Pass the network name with --ssid.",
        "psk" => "Pass the password with --psk, or use --security Open for an open network.",
        "apikey" => "Pass the key with --apikey.",
        "aiserver" => "Pass the AI server address with --aiserver.",
        _ => "Check the command's required flags with --help.",
    }
}
