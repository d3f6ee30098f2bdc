//! Typed client for the Astute Payroll SOAP web service.
//!
//! This crate renders the service's SOAP envelopes from typed parameters,
//! sends them through an injected transport, and decodes the doubly-encoded
//! responses (an XML document carried as text inside the SOAP envelope)
//! into typed results.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod soap;

pub use client::AstuteClient;
pub use error::{ClientError, ClientResult};
