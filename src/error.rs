//! Error types for the Astute client.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every way a call can fail: local validation, transport, remote faults,
//! decoding and business-rule rejections.

use std::fmt;

use thiserror::Error;

/// The XML pass that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// The outer SOAP envelope of a successful response.
    Outer,
    /// The SOAP fault envelope of a non-OK response.
    Fault,
    /// The XML document carried as text inside the `Results` element.
    Inner,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStage::Outer => write!(f, "outer envelope"),
            DecodeStage::Fault => write!(f, "fault envelope"),
            DecodeStage::Inner => write!(f, "inner results"),
        }
    }
}

/// Failure reported by a [`Transport`](crate::client::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request could not be built, sent, or its body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other failure raised by a custom transport.
    #[error("{0}")]
    Other(String),
}

/// The main error type for the Astute client.
///
/// # Example
///
/// ```
/// use astute_client::error::ClientError;
///
/// let error = ClientError::Fault("Invalid credentials".to_string());
/// assert_eq!(error.to_string(), "Invalid credentials");
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// Sending the request failed before any response was received.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a SOAP fault. Displays the fault string verbatim.
    #[error("{0}")]
    Fault(String),

    /// A response body did not have the expected XML shape.
    #[error("failed to decode {stage}: {message}")]
    Decode {
        /// The pass that failed.
        stage: DecodeStage,
        /// A description of the parse failure.
        message: String,
    },

    /// The service accepted the call but reported a failure in its result text.
    /// Displays the raw result text.
    #[error("{0}")]
    Rejected(String),

    /// A timesheet cannot be rendered from the supplied parameters.
    #[error("Invalid timesheet: {message}")]
    InvalidTimesheet {
        /// What made the timesheet invalid.
        message: String,
    },

    /// A single field value cannot be normalized to its wire form.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// What made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ClientError {
    pub(crate) fn decode(stage: DecodeStage, message: impl Into<String>) -> Self {
        ClientError::Decode {
            stage,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        ClientError::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
