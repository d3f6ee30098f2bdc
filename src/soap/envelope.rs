//! Serde mirrors of the response envelopes.
//!
//! Element names are matched on their local part, so the `soap:` or `SOAP-ENV:`
//! prefix the service happens to use does not matter.

use serde::Deserialize;

use super::operation::Operation;

/// `Envelope` of a successful response.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    #[serde(rename = "Body")]
    pub body: ResponseBody,
}

/// `Body` of a successful response; holds the one element matching the call.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(rename = "UserQueryResponse")]
    user_query: Option<OperationResponse>,
    #[serde(rename = "TimesheetQueryResponse")]
    timesheet_query: Option<OperationResponse>,
    #[serde(rename = "TimesheetSaveResponse")]
    timesheet_save: Option<OperationResponse>,
}

impl ResponseBody {
    pub fn into_response(self, operation: Operation) -> Option<OperationResponse> {
        match operation {
            Operation::UserQuery => self.user_query,
            Operation::TimesheetQuery => self.timesheet_query,
            Operation::TimesheetSave => self.timesheet_save,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OperationResponse {
    #[serde(rename = "ParmsOut", alias = "parmsOut")]
    pub parms_out: ParmsOut,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParmsOut {
    #[serde(rename = "Results", alias = "results")]
    pub results: Results,
}

/// Leaf text of `Results`. For queries this is itself an XML document.
#[derive(Debug, Deserialize)]
pub(crate) struct Results {
    #[serde(rename = "$text", default)]
    pub text: String,
}

/// `Envelope` of a SOAP fault response.
#[derive(Debug, Deserialize)]
pub(crate) struct FaultEnvelope {
    #[serde(rename = "Body")]
    pub body: FaultBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaultBody {
    #[serde(rename = "Fault")]
    pub fault: Fault,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Fault {
    #[serde(rename = "faultstring", alias = "Faultstring")]
    pub faultstring: FaultString,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaultString {
    #[serde(rename = "$text", default)]
    pub text: String,
}
