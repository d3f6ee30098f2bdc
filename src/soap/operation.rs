//! The fixed set of remote operations.

use std::fmt;

/// A remote operation exposed by the Astute web service.
///
/// Each operation has its own namespace URI, which doubles as the SOAP
/// action. The service faults when the two disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Query users by job code.
    UserQuery,
    /// Query timesheets by user or by timesheet id.
    TimesheetQuery,
    /// Save, submit, or mark a timesheet as not worked.
    TimesheetSave,
}

impl Operation {
    /// The operation name, as used for the request element.
    pub fn name(self) -> &'static str {
        match self {
            Operation::UserQuery => "UserQuery",
            Operation::TimesheetQuery => "TimesheetQuery",
            Operation::TimesheetSave => "TimesheetSave",
        }
    }

    /// Namespace URI bound to `q1`, and the SOAP action sent to the transport.
    pub fn action_uri(self) -> &'static str {
        match self {
            Operation::UserQuery => "urn:UserQuery",
            Operation::TimesheetQuery => "urn:TimesheetQuery",
            Operation::TimesheetSave => "urn:TimesheetSave",
        }
    }

    /// The `tns:` element wrapping the request fields.
    pub fn parameter_element(self) -> &'static str {
        match self {
            Operation::UserQuery | Operation::TimesheetQuery => "tns:userGet",
            Operation::TimesheetSave => "tns:timesheetSave",
        }
    }

    /// Local name of the response element inside the SOAP body.
    pub fn response_element(self) -> &'static str {
        match self {
            Operation::UserQuery => "UserQueryResponse",
            Operation::TimesheetQuery => "TimesheetQueryResponse",
            Operation::TimesheetSave => "TimesheetSaveResponse",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
