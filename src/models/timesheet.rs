//! Timesheet request models.
//!
//! This module defines the day entries and parameter sets used to save
//! and submit timesheets.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::params::UserParams;

/// One calendar day worked on a timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetDay {
    /// When work started. Its weekday selects the element names the day is sent under.
    pub start_time: NaiveDateTime,
    /// When work finished.
    pub end_time: NaiveDateTime,
    /// Break duration as 1 to 4 digits, sent left-padded to 4.
    pub break_time: String,
    /// Free-text notes for the day.
    #[serde(default)]
    pub notes: String,
}

/// Parameters for [`save_timesheet`](crate::client::AstuteClient::save_timesheet).
///
/// When `did_not_work` is set the days are ignored and only the identity
/// fields are sent. Otherwise `days` must not be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveTimesheetParams {
    /// The user the timesheet belongs to.
    pub user: UserParams,
    /// The timesheet identifier.
    pub tsid: String,
    /// Days worked, rendered in the order given.
    #[serde(default)]
    pub days: Vec<TimesheetDay>,
    /// Marks the whole timesheet as not worked.
    #[serde(default)]
    pub did_not_work: bool,
    /// Also submit the timesheet for approval.
    #[serde(default)]
    pub submit: bool,
    /// Submission time; the client's clock is used when unset.
    #[serde(default)]
    pub submission_time: Option<NaiveDateTime>,
}

/// Parameters for [`submit_timesheet`](crate::client::AstuteClient::submit_timesheet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitTimesheetParams {
    /// The user the timesheet belongs to.
    pub user: UserParams,
    /// The timesheet identifier.
    pub tsid: String,
    /// Start of the timesheet period; its date is sent as the timesheet date.
    pub start_time: NaiveDateTime,
    /// Submission time; the client's clock is used when unset.
    #[serde(default)]
    pub submission_time: Option<NaiveDateTime>,
}
