//! Query and identity parameters.
//!
//! Values in the query parameter types are placed inside the service's
//! SQL-like filter expression. They are XML-escaped on the way out but the
//! filter syntax itself is not sanitized, so callers must only pass values
//! they have already validated (no quotes, no `%` wildcards unless intended).

use serde::{Deserialize, Serialize};

/// Criteria for [`query_user`](crate::client::AstuteClient::query_user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUserParams {
    /// Substring matched against each user's job code.
    pub job_code: String,
}

/// Criteria for [`query_timesheet_by_job`](crate::client::AstuteClient::query_timesheet_by_job).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTimesheetParams {
    /// The user whose timesheets are returned.
    pub uid: String,
}

/// Identifies the user a timesheet belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserParams {
    /// The service's internal user identifier.
    pub uid: String,
    /// The employer-facing user id.
    pub user_id: String,
}
