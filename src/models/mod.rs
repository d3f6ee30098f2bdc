//! Core data models for the Astute client.
//!
//! This module contains the request parameters and typed results of every
//! client operation.

mod params;
mod responses;
mod timesheet;

pub use params::{QueryTimesheetParams, QueryUserParams, UserParams};
pub use responses::{
    QueryTimesheetResponse, QueryUserResponse, SaveTimesheetResponse, Timesheet, User,
};
pub use timesheet::{SaveTimesheetParams, SubmitTimesheetParams, TimesheetDay};
