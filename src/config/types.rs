//! Configuration types for the Astute client.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and endpoint for the Astute web service.
///
/// Supplied once when the client is built and reused by every call.
/// `Debug` output redacts the API key and password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthParams {
    /// Endpoint the SOAP requests are posted to.
    pub api_url: String,
    /// The API key issued by Astute.
    pub api_key: String,
    /// The API username.
    pub api_username: String,
    /// The API password.
    pub api_password: String,
}

impl fmt::Debug for AuthParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthParams")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("api_username", &self.api_username)
            .field("api_password", &"<redacted>")
            .finish()
    }
}

/// Settings for the shipped HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl TransportSettings {
    /// Returns the request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level client configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service credentials.
    pub auth: AuthParams,
    /// HTTP transport settings.
    #[serde(default)]
    pub transport: TransportSettings,
}
