//! Configuration loading for the Astute client.
//!
//! This module loads service credentials and transport settings from YAML.
//!
//! # Example
//!
//! ```no_run
//! use astute_client::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./astute.yaml").unwrap();
//! println!("Endpoint: {}", config.auth().api_url);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AuthParams, ClientConfig, DEFAULT_TIMEOUT_SECS, TransportSettings};
