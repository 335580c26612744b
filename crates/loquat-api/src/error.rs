use std::time::Duration;

use thiserror::Error;

/// Top-level error type for the `loquat-api` crate.
///
/// Covers payload validation, command lookup, transport, and response
/// decoding. The `loquat` binary maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Validation ──────────────────────────────────────────────────
    /// A payload builder rejected a caller-supplied field.
    #[error("{reason}")]
    Validation { field: &'static str, reason: String },

    /// Command name not present in the registry.
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// Response body did not have the expected JSON shape, with the raw body
    /// kept for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// The offending field name for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Returns `true` if the device could not be reached at all.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect(),
            _ => false,
        }
    }
}
