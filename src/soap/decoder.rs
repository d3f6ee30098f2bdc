//! Response decoding.
//!
//! The service double-encodes its answers: the SOAP envelope carries a
//! `Results` element whose text is itself an XML document. Decoding is two
//! named passes, [`decode_results`] for the envelope and [`decode_inner`] for
//! the embedded document, so each can be exercised without a transport.
//! Non-OK responses are decoded as SOAP faults instead, by [`check_status`].

use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult, DecodeStage};

use super::envelope::{FaultEnvelope, ResponseEnvelope};
use super::operation::Operation;

/// The only status treated as success.
pub const STATUS_OK: u16 = 200;

/// Marker preceding the timesheet id in a save result.
pub const TSID_MARKER: &str = "TSID:";

fn as_utf8(body: &[u8], stage: DecodeStage) -> ClientResult<&str> {
    std::str::from_utf8(body)
        .map_err(|e| ClientError::decode(stage, format!("response is not UTF-8: {}", e)))
}

/// Passes OK responses through and turns anything else into an error.
///
/// # Errors
///
/// - [`ClientError::Fault`] carrying the fault string verbatim when the body
///   is a SOAP fault
/// - [`ClientError::Decode`] with [`DecodeStage::Fault`] when it is not
pub fn check_status(status: u16, body: &[u8]) -> ClientResult<()> {
    if status == STATUS_OK {
        return Ok(());
    }

    match decode_fault(body) {
        Ok(fault) => Err(ClientError::Fault(fault)),
        Err(ClientError::Decode { stage, message }) => Err(ClientError::Decode {
            stage,
            message: format!("status {}: {}", status, message),
        }),
        Err(other) => Err(other),
    }
}

/// Decodes a SOAP fault envelope, returning its fault string.
pub fn decode_fault(body: &[u8]) -> ClientResult<String> {
    let xml = as_utf8(body, DecodeStage::Fault)?;
    let envelope: FaultEnvelope = quick_xml::de::from_str(xml)
        .map_err(|e| ClientError::decode(DecodeStage::Fault, e.to_string()))?;

    Ok(envelope.body.fault.faultstring.text)
}

/// First pass: decodes the outer envelope and returns the `Results` text.
///
/// The text is returned as unescaped by the XML parser, ready for
/// [`decode_inner`].
///
/// # Example
///
/// ```
/// use astute_client::soap::{decode_results, Operation};
///
/// let body = br#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
///   <soap:Body>
///     <ns1:TimesheetSaveResponse xmlns:ns1="urn:TimesheetSave">
///       <ParmsOut><Results>Result: TSID: 98765</Results></ParmsOut>
///     </ns1:TimesheetSaveResponse>
///   </soap:Body>
/// </soap:Envelope>"#;
///
/// let text = decode_results(body, Operation::TimesheetSave).unwrap();
/// assert_eq!(text, "Result: TSID: 98765");
/// ```
pub fn decode_results(body: &[u8], operation: Operation) -> ClientResult<String> {
    let xml = as_utf8(body, DecodeStage::Outer)?;
    let envelope: ResponseEnvelope = quick_xml::de::from_str(xml)
        .map_err(|e| ClientError::decode(DecodeStage::Outer, e.to_string()))?;

    let response = envelope.body.into_response(operation).ok_or_else(|| {
        ClientError::decode(
            DecodeStage::Outer,
            format!("missing <{}> in response body", operation.response_element()),
        )
    })?;

    Ok(response.parms_out.results.text)
}

/// Second pass: decodes the XML document carried in the `Results` text.
pub fn decode_inner<T: DeserializeOwned>(results: &str) -> ClientResult<T> {
    quick_xml::de::from_str(results)
        .map_err(|e| ClientError::decode(DecodeStage::Inner, e.to_string()))
}

/// Extracts the timesheet id from a save result such as `"Result: TSID: 98765"`.
///
/// Everything after the `TSID:` marker, trimmed, is the id.
///
/// # Errors
///
/// Returns [`ClientError::Rejected`] with the raw text when the marker is
/// missing or nothing follows it; the service reports save failures this way.
pub fn extract_timesheet_id(results: &str) -> ClientResult<String> {
    let id = results
        .find(TSID_MARKER)
        .map(|pos| results[pos + TSID_MARKER.len()..].trim())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ClientError::Rejected(results.to_string()))?;

    Ok(id.to_string())
}
