//! Request envelopes for each client operation.
//!
//! All renderers take the shared credentials plus the operation fields and
//! return the complete envelope as a string. Save-family envelopes also carry
//! the call's transaction id.

use chrono::NaiveDateTime;

use crate::config::AuthParams;
use crate::error::ClientResult;
use crate::models::{QueryUserParams, SaveTimesheetParams, SubmitTimesheetParams};

use super::builder::{EnvelopeBuilder, Fragment};
use super::normalize::{NormalizedDay, format_date, submission_timestamp, timesheet_date};
use super::operation::Operation;

/// Predicate for a timesheet query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimesheetFilter<'a> {
    /// All timesheets of one user.
    Uid(&'a str),
    /// A single timesheet by its identifier.
    Tsid(&'a str),
}

impl TimesheetFilter<'_> {
    fn fragment(self) -> Fragment {
        match self {
            TimesheetFilter::Uid(uid) => Fragment::filter_eq("UID", uid),
            TimesheetFilter::Tsid(tsid) => Fragment::filter_eq("TSID", tsid),
        }
    }
}

fn authenticated(operation: Operation, auth: &AuthParams) -> EnvelopeBuilder {
    EnvelopeBuilder::new(operation)
        .field("api_key", &auth.api_key)
        .field("api_username", &auth.api_username)
        .field("api_password", &auth.api_password)
}

fn save_header(
    auth: &AuthParams,
    transaction_id: &str,
    uid: &str,
    user_id: &str,
    tsid: &str,
) -> EnvelopeBuilder {
    authenticated(Operation::TimesheetSave, auth)
        .field("api_transaction_id", transaction_id)
        .field("UID", uid)
        .field("user_id", user_id)
        .field("TSID", tsid)
}

/// Renders a user query matching `job_code` as a substring.
pub fn render_user_query(auth: &AuthParams, params: &QueryUserParams) -> String {
    authenticated(Operation::UserQuery, auth)
        .fragment_field("query", &Fragment::filter_like("job_code", &params.job_code))
        .build()
}

/// Renders a timesheet query.
pub fn render_timesheet_query(auth: &AuthParams, filter: TimesheetFilter<'_>) -> String {
    authenticated(Operation::TimesheetQuery, auth)
        .fragment_field("query", &filter.fragment())
        .build()
}

/// Renders a timesheet save.
///
/// A timesheet marked as not worked is sent with only its identity fields
/// and `did_not_work`; its days are ignored. Otherwise the envelope carries
/// the timesheet date, one block per day in the given order, and `complete`
/// when submitting. `now` is read only when a submission time is needed and
/// none was supplied.
///
/// # Errors
///
/// - [`ClientError::InvalidTimesheet`](crate::error::ClientError::InvalidTimesheet)
///   when a worked timesheet has no days
/// - [`ClientError::InvalidField`](crate::error::ClientError::InvalidField)
///   when a break duration cannot be padded
pub fn render_timesheet_save<F>(
    auth: &AuthParams,
    transaction_id: &str,
    params: &SaveTimesheetParams,
    now: F,
) -> ClientResult<String>
where
    F: FnOnce() -> NaiveDateTime,
{
    let builder = save_header(
        auth,
        transaction_id,
        &params.user.uid,
        &params.user.user_id,
        &params.tsid,
    );

    if params.did_not_work {
        return Ok(builder.field("did_not_work", "1").build());
    }

    let date = timesheet_date(&params.days)?;
    let days = params
        .days
        .iter()
        .map(NormalizedDay::from_day)
        .collect::<ClientResult<Vec<_>>>()?;

    let mut builder = builder
        .field("date", &date)
        .fragment(&Fragment::day_block(&days));

    if params.submit {
        builder = builder.field(
            "complete",
            &submission_timestamp(params.submission_time, now),
        );
    }

    Ok(builder.build())
}

/// Renders the submission of an already-saved timesheet.
pub fn render_timesheet_submit<F>(
    auth: &AuthParams,
    transaction_id: &str,
    params: &SubmitTimesheetParams,
    now: F,
) -> String
where
    F: FnOnce() -> NaiveDateTime,
{
    save_header(
        auth,
        transaction_id,
        &params.user.uid,
        &params.user.user_id,
        &params.tsid,
    )
    .field("date", &format_date(params.start_time))
    .field(
        "complete",
        &submission_timestamp(params.submission_time, now),
    )
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::models::{TimesheetDay, UserParams};

    fn auth() -> AuthParams {
        AuthParams {
            api_url: "https://api.example.test/webservice/".to_string(),
            api_key: "KEY".to_string(),
            api_username: "integration".to_string(),
            api_password: "secret".to_string(),
        }
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn fixed_now() -> NaiveDateTime {
        dt("2026-01-19 10:00:00")
    }

    fn day(start: &str, end: &str, break_time: &str, notes: &str) -> TimesheetDay {
        TimesheetDay {
            start_time: dt(start),
            end_time: dt(end),
            break_time: break_time.to_string(),
            notes: notes.to_string(),
        }
    }

    fn save_params(days: Vec<TimesheetDay>) -> SaveTimesheetParams {
        SaveTimesheetParams {
            user: UserParams {
                uid: "1001".to_string(),
                user_id: "EMP-7".to_string(),
            },
            tsid: "555".to_string(),
            days,
            did_not_work: false,
            submit: false,
            submission_time: None,
        }
    }

    fn count(xml: &str, needle: &str) -> usize {
        xml.matches(needle).count()
    }

    #[test]
    fn test_user_query_envelope() {
        let xml = render_user_query(
            &auth(),
            &QueryUserParams {
                job_code: "NURSE".to_string(),
            },
        );
        assert!(xml.contains(r#"<q1:UserQuery xmlns:q1="urn:UserQuery">"#));
        assert!(xml.contains("<tns:userGet>"));
        assert!(xml.contains("<api_key>KEY</api_key>"));
        assert!(xml.contains("<api_username>integration</api_username>"));
        assert!(xml.contains("<api_password>secret</api_password>"));
        assert!(xml.contains("<query>job_code like '%NURSE%'</query>"));
        assert!(!xml.contains("api_transaction_id"));
    }

    #[test]
    fn test_timesheet_query_by_uid_and_by_tsid() {
        let by_uid = render_timesheet_query(&auth(), TimesheetFilter::Uid("1001"));
        assert!(by_uid.contains(r#"<q1:TimesheetQuery xmlns:q1="urn:TimesheetQuery">"#));
        assert!(by_uid.contains("<query>UID = '1001'</query>"));

        let by_tsid = render_timesheet_query(&auth(), TimesheetFilter::Tsid("555"));
        assert!(by_tsid.contains("<query>TSID = '555'</query>"));
    }

    #[test]
    fn test_full_save_renders_one_block_per_day_in_input_order() {
        // Wed, Mon, Tue: not chronological on purpose
        let params = save_params(vec![
            day("2026-01-14 09:00:00", "2026-01-14 17:00:00", "30", ""),
            day("2026-01-12 07:30:00", "2026-01-12 15:45:00", "45", "early"),
            day("2026-01-13 10:00:00", "2026-01-13 14:00:00", "0", ""),
        ]);
        let xml = render_timesheet_save(&auth(), "tx-1", &params, fixed_now).unwrap();

        assert_eq!(count(&xml, "_start>"), 3 * 2);
        assert_eq!(count(&xml, "_finish>"), 3 * 2);
        assert_eq!(count(&xml, "_break>"), 3 * 2);
        assert_eq!(count(&xml, "_notes>"), 3 * 2);

        let wed = xml.find("<wed_start>0900</wed_start>").unwrap();
        let mon = xml.find("<mon_start>0730</mon_start>").unwrap();
        let tue = xml.find("<tue_start>1000</tue_start>").unwrap();
        assert!(wed < mon && mon < tue);

        assert!(xml.contains("<mon_finish>1545</mon_finish>"));
        assert!(xml.contains("<mon_break>0045</mon_break>"));
        assert!(xml.contains("<mon_notes>early</mon_notes>"));
        assert!(xml.contains("<tue_break>0000</tue_break>"));
        assert!(xml.contains("<date>2026-01-12</date>"));
        assert!(xml.contains("<api_transaction_id>tx-1</api_transaction_id>"));
        assert!(!xml.contains("<complete>"));
        assert!(!xml.contains("did_not_work"));
    }

    #[test]
    fn test_full_save_with_submit_uses_clock_when_time_unset() {
        let mut params = save_params(vec![day(
            "2026-01-12 09:00:00",
            "2026-01-12 17:00:00",
            "30",
            "",
        )]);
        params.submit = true;

        let xml = render_timesheet_save(&auth(), "tx", &params, fixed_now).unwrap();
        assert!(xml.contains("<complete>2026-01-19 10:00:00</complete>"));

        params.submission_time = Some(dt("2026-01-16 17:30:00"));
        let xml = render_timesheet_save(&auth(), "tx", &params, fixed_now).unwrap();
        assert!(xml.contains("<complete>2026-01-16 17:30:00</complete>"));
    }

    #[test]
    fn test_submission_time_ignored_without_submit_flag() {
        let mut params = save_params(vec![day(
            "2026-01-12 09:00:00",
            "2026-01-12 17:00:00",
            "30",
            "",
        )]);
        params.submission_time = Some(dt("2026-01-16 17:30:00"));

        let xml = render_timesheet_save(&auth(), "tx", &params, fixed_now).unwrap();
        assert!(!xml.contains("<complete>"));
    }

    #[test]
    fn test_did_not_work_ignores_days() {
        let mut params = save_params(vec![day(
            "2026-01-12 09:00:00",
            "2026-01-12 17:00:00",
            "30",
            "should not be sent",
        )]);
        params.did_not_work = true;
        params.submit = true;

        let xml = render_timesheet_save(&auth(), "tx-9", &params, fixed_now).unwrap();
        assert!(xml.contains("<UID>1001</UID>"));
        assert!(xml.contains("<user_id>EMP-7</user_id>"));
        assert!(xml.contains("<TSID>555</TSID>"));
        assert!(xml.contains("<did_not_work>1</did_not_work>"));
        assert!(!xml.contains("<date>"));
        assert!(!xml.contains("_start>"));
        assert!(!xml.contains("should not be sent"));
        assert!(!xml.contains("<complete>"));
    }

    #[test]
    fn test_did_not_work_allows_empty_days() {
        let mut params = save_params(vec![]);
        params.did_not_work = true;
        assert!(render_timesheet_save(&auth(), "tx", &params, fixed_now).is_ok());
    }

    #[test]
    fn test_worked_timesheet_without_days_is_rejected() {
        let params = save_params(vec![]);
        let result = render_timesheet_save(&auth(), "tx", &params, fixed_now);
        assert!(matches!(result, Err(ClientError::InvalidTimesheet { .. })));
    }

    #[test]
    fn test_invalid_break_is_rejected() {
        let params = save_params(vec![day(
            "2026-01-12 09:00:00",
            "2026-01-12 17:00:00",
            "12345",
            "",
        )]);
        let result = render_timesheet_save(&auth(), "tx", &params, fixed_now);
        assert!(matches!(result, Err(ClientError::InvalidField { .. })));
    }

    #[test]
    fn test_submit_envelope() {
        let params = SubmitTimesheetParams {
            user: UserParams {
                uid: "1001".to_string(),
                user_id: "EMP-7".to_string(),
            },
            tsid: "555".to_string(),
            start_time: dt("2026-01-12 09:00:00"),
            submission_time: Some(dt("2026-01-18 12:00:00")),
        };
        let xml = render_timesheet_submit(&auth(), "tx-2", &params, fixed_now);

        assert!(xml.contains(r#"<q1:TimesheetSave xmlns:q1="urn:TimesheetSave">"#));
        assert!(xml.contains("<tns:timesheetSave>"));
        assert!(xml.contains("<api_transaction_id>tx-2</api_transaction_id>"));
        assert!(xml.contains("<TSID>555</TSID>"));
        assert!(xml.contains("<date>2026-01-12</date>"));
        assert!(xml.contains("<complete>2026-01-18 12:00:00</complete>"));
        assert!(!xml.contains("_start>"));
    }
}
