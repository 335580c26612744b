// Device HTTP client
//
// Wraps `reqwest::Client` with endpoint construction and per-command
// timeouts. One parameterized request path serves every command; verbs,
// bodies, and timeouts come from the command registry and the config.

use std::time::Duration;

use reqwest::Method;
use tracing::debug;

use crate::command::Command;
use crate::error::Error;
use crate::payload::Payload;
use crate::response::ResponseEnvelope;
use crate::transport::TransportConfig;

/// A single request/response exchange with the device.
///
/// Implementations return the status code untouched and never hand back a
/// partial body: either the whole body arrived or the call fails.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn request(
        &self,
        command: Command,
        payload: Option<&Payload>,
    ) -> Result<ResponseEnvelope, Error>;
}

/// HTTP client bound to one device base URL.
pub struct DeviceClient {
    http: reqwest::Client,
    config: TransportConfig,
}

impl DeviceClient {
    /// Create a client from a `TransportConfig`.
    pub fn new(config: TransportConfig) -> Result<Self, Error> {
        let http = config.build_client()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn classify(err: reqwest::Error, timeout: Duration) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout,
                source: err,
            }
        } else {
            Error::Transport(err)
        }
    }
}

impl Transport for DeviceClient {
    async fn request(
        &self,
        command: Command,
        payload: Option<&Payload>,
    ) -> Result<ResponseEnvelope, Error> {
        let method = command.method();
        let url = self.config.endpoint(command);
        let timeout = self.config.timeout_for(command);

        debug!("{} {} (timeout {:?})", method, url, timeout);

        let mut builder = self.http.request(method.clone(), &url).timeout(timeout);
        if method == Method::POST {
            builder = match payload {
                Some(body) => builder.json(body),
                None => builder.body(Vec::<u8>::new()),
            };
        } else if payload.is_some() {
            debug!("ignoring payload for {} {}", method, command);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| Self::classify(e, timeout))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Self::classify(e, timeout))?;

        debug!(status, bytes = body.len(), "response received");
        Ok(ResponseEnvelope::new(status, body.to_vec()))
    }
}
