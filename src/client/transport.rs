//! Transport seam between the client and the network.
//!
//! The client only needs a status code and the raw body back; framing, TLS
//! and timeouts belong to the transport.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::config::TransportSettings;
use crate::error::TransportError;

/// Content type of outgoing SOAP 1.1 requests.
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Header carrying the SOAP action.
pub const SOAP_ACTION_HEADER: &str = "SOAPAction";

/// A rendered request ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    /// Endpoint URL.
    pub endpoint: String,
    /// Operation name, e.g. `TimesheetSave`.
    pub action_name: &'static str,
    /// SOAP action URI, e.g. `urn:TimesheetSave`.
    pub action_uri: &'static str,
    /// The envelope.
    pub body: String,
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Sends rendered SOAP requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response, whatever its status.
    async fn send(&self, request: SoapRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: SoapRequest) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}

/// [`Transport`] that POSTs requests over HTTP(S) with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with default settings.
    pub fn new() -> Result<Self, TransportError> {
        Self::from_settings(&TransportSettings::default())
    }

    /// Creates a transport applying the configured timeout and user agent.
    pub fn from_settings(settings: &TransportSettings) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().timeout(settings.timeout());
        if let Some(user_agent) = &settings.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: SoapRequest) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(&request.endpoint)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header(SOAP_ACTION_HEADER, request.action_uri)
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
