//! Typed results returned by the client operations.
//!
//! Query results are decoded from the XML document the service embeds as
//! text in its response envelope. Element names follow the service, field
//! names follow Rust; serialization (e.g. to JSON) uses the Rust names.

use serde::{Deserialize, Serialize};

/// A user record returned by a user query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// The service's internal user identifier.
    #[serde(rename(deserialize = "UID"))]
    pub uid: String,
    /// The employer-facing user id.
    pub user_id: String,
    /// Given name.
    #[serde(rename(deserialize = "nameFirst"))]
    pub name_first: String,
    /// Family name.
    #[serde(rename(deserialize = "nameLast"))]
    pub name_last: String,
    /// Email address.
    pub email: String,
    /// Job code the user is assigned to.
    pub job_code: String,
}

/// A timesheet record returned by a timesheet query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timesheet {
    /// The timesheet identifier.
    #[serde(rename(deserialize = "TSID"))]
    pub tsid: String,
    /// The owning user's internal identifier.
    #[serde(rename(deserialize = "UID"))]
    pub uid: String,
    /// The owning user's employer-facing id.
    pub user_id: String,
    /// The timesheet date.
    pub date: String,
    /// Workflow status reported by the service.
    pub status: String,
    /// Submission timestamp, empty until submitted.
    pub complete: String,
}

/// Result of [`query_user`](crate::client::AstuteClient::query_user).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUserResponse {
    /// Matching users in service order.
    #[serde(rename(deserialize = "User"), default)]
    pub users: Vec<User>,
}

/// Result of the timesheet queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTimesheetResponse {
    /// Matching timesheets in service order.
    #[serde(rename(deserialize = "Timesheet"), default)]
    pub timesheets: Vec<Timesheet>,
}

/// Result of saving or submitting a timesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTimesheetResponse {
    /// Identifier of the saved timesheet.
    pub timesheet_id: String,
}
