//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading client
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{ClientError, ClientResult};

use super::types::{AuthParams, ClientConfig, TransportSettings};

/// Loads and provides access to client configuration.
///
/// # File Format
///
/// ```text
/// auth:
///   api_url: https://api.astutepayroll.com/webservice/
///   api_key: 0123456789
///   api_username: integration
///   api_password: secret
/// transport:           # optional
///   timeout_secs: 30
///   user_agent: my-app/1.0
/// ```
///
/// # Example
///
/// ```no_run
/// use astute_client::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./astute.yaml")?;
/// println!("Endpoint: {}", loader.auth().api_url);
/// # Ok::<(), astute_client::error::ClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ClientConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a required field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ClientResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ClientError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Parses configuration from in-memory YAML text.
    pub fn from_yaml_str(content: &str) -> ClientResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> ClientResult<Self> {
        let config: ClientConfig =
            serde_yaml::from_str(content).map_err(|e| ClientError::ConfigParseError {
                path,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the service credentials.
    pub fn auth(&self) -> &AuthParams {
        &self.config.auth
    }

    /// Returns the HTTP transport settings.
    pub fn transport(&self) -> &TransportSettings {
        &self.config.transport
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ClientConfig {
        self.config
    }
}
