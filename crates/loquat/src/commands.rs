//! Command dispatch: resolved CLI args -> payload -> transport -> output.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use loquat_api::{ApiKeyRequest, Command, ConnectRequest, Payload, Transport};

use crate::cli::Cli;
use crate::error::CliError;
use crate::output;

/// A validated invocation: a known command plus the optional fields the
/// POST commands draw on.
#[derive(Debug)]
pub struct Invocation {
    pub command: Command,
    pub ssid: Option<String>,
    pub psk: Option<SecretString>,
    pub security: Option<String>,
    pub apikey: Option<SecretString>,
    pub aiserver: Option<String>,
}

impl Invocation {
    /// Resolve the command name against the registry.
    pub fn resolve(cli: &Cli) -> Result<Self, CliError> {
        let command = Command::lookup(&cli.command)
            .map_err(|e| CliError::from_api(e, &cli.command, &cli.server))?;

        Ok(Self {
            command,
            ssid: cli.ssid.clone(),
            psk: cli.psk.clone().map(SecretString::from),
            security: cli.security.clone(),
            apikey: cli.apikey.clone().map(SecretString::from),
            aiserver: cli.aiserver.clone(),
        })
    }

    /// Build the request body, if the command takes one.
    pub fn build_payload(&self) -> Result<Option<Payload>, loquat_api::Error> {
        match self.command {
            Command::Connect => ConnectRequest::build(
                self.ssid.as_deref(),
                self.psk.as_ref().map(ExposeSecret::expose_secret),
                self.security.as_deref(),
            )
            .map(|req| Some(req.into())),
            Command::ApiKey => ApiKeyRequest::build(
                self.apikey.as_ref().map(ExposeSecret::expose_secret),
                self.aiserver.as_deref(),
            )
            .map(|req| Some(req.into())),
            Command::GetScanResult | Command::Status | Command::GetStatus | Command::GetNetInfo => {
                Ok(None)
            }
        }
    }
}

/// Run one invocation against `transport` and return the rendered output.
///
/// Payload validation happens before the transport is touched; a non-200
/// response is an error and its body is never rendered.
pub async fn execute<T: Transport>(
    transport: &T,
    invocation: &Invocation,
    endpoint: &str,
) -> Result<String, CliError> {
    let command = invocation.command;
    let api_err = |e| CliError::from_api(e, command.path(), endpoint);

    let payload = invocation.build_payload().map_err(api_err)?;
    if let Some(ref payload) = payload {
        info!("POST data: {}", payload.masked_json());
    }

    let resp = transport
        .request(command, payload.as_ref())
        .await
        .map_err(api_err)?;

    if !resp.is_ok() {
        debug!(status = resp.status, body = %resp.text(), "device rejected request");
        return Err(CliError::HttpStatus {
            command: command.to_string(),
            status: resp.status,
        });
    }

    Ok(output::render(command, &resp.body))
}
