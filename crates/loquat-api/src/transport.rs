// Transport configuration for building the device's reqwest::Client.
//
// One config value per invocation: base URL, timeouts, and user agent are
// fixed here and never mutated once the client is built.

use std::time::Duration;

use reqwest::redirect::Policy;
use url::Url;

use crate::command::Command;
use crate::error::Error;

/// User agent sent with every request.
pub const USER_AGENT: &str = "LoquatClient/1.0";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for commands that wait on slow device-side work (Wi-Fi
/// association, key provisioning).
pub const LONG_TIMEOUT: Duration = Duration::from_secs(120);

const MAX_REDIRECTS: usize = 10;

/// Transport configuration for the device client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub long_timeout: Duration,
    pub user_agent: String,
}

impl TransportConfig {
    /// Config for `http://{server}:{port}` with default timeouts.
    pub fn for_device(server: &str, port: u16) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("http://{server}:{port}"))?;
        Ok(Self::new(base_url))
    }

    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            long_timeout: LONG_TIMEOUT,
            user_agent: USER_AGENT.to_owned(),
        }
    }

    pub fn with_timeouts(mut self, timeout: Duration, long_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.long_timeout = long_timeout;
        self
    }

    /// The timeout that applies to a single request for `command`.
    pub fn timeout_for(&self, command: Command) -> Duration {
        if command.is_long_running() {
            self.long_timeout
        } else {
            self.timeout
        }
    }

    /// `{base_url}/{command}`, rendered without a doubled slash.
    pub fn endpoint(&self, command: Command) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            command.path()
        )
    }

    /// Build a `reqwest::Client` from this config.
    ///
    /// The client-wide timeout is the default one; long-running commands
    /// override it per request.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(Error::Transport)
    }
}
