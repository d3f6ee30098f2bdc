//! Field normalization for the Astute wire format.
//!
//! Astute is strict about how times, breaks and days are written: times and
//! breaks are exactly four digits, and each day's fields are sent under
//! element names prefixed with a lowercase three-letter weekday tag.
//!
//! See <https://api.astutepayroll.com/webservice/documentation/#type_timesheetSave>.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::error::{ClientError, ClientResult};
use crate::models::TimesheetDay;

/// Weekday tags indexed from Sunday, matching the service's day numbering.
pub const WEEKDAY_TAGS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Width of time and break fields on the wire.
pub const FIELD_WIDTH: usize = 4;

/// Formats the time of day as `HHMM` (24-hour, zero-padded, no separator).
///
/// # Example
///
/// ```
/// use astute_client::soap::format_hhmm;
/// use chrono::NaiveDateTime;
///
/// let t = NaiveDateTime::parse_from_str("2026-01-15 07:05:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(format_hhmm(t), "0705");
/// ```
pub fn format_hhmm(time: NaiveDateTime) -> String {
    time.format("%H%M").to_string()
}

/// Left-pads a break duration with `'0'` to exactly four digits.
///
/// # Errors
///
/// Returns [`ClientError::InvalidField`] when the input is empty, longer
/// than four characters, or contains anything other than ASCII digits.
///
/// # Example
///
/// ```
/// use astute_client::soap::pad_break;
///
/// assert_eq!(pad_break("30").unwrap(), "0030");
/// assert_eq!(pad_break("0145").unwrap(), "0145");
/// assert!(pad_break("").is_err());
/// ```
pub fn pad_break(raw: &str) -> ClientResult<String> {
    if raw.is_empty() || raw.len() > FIELD_WIDTH {
        return Err(ClientError::invalid_field(
            "break_time",
            format!("expected 1 to {} digits, got {:?}", FIELD_WIDTH, raw),
        ));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClientError::invalid_field(
            "break_time",
            format!("expected only digits, got {:?}", raw),
        ));
    }

    Ok(format!("{:0>width$}", raw, width = FIELD_WIDTH))
}

/// Returns the weekday tag used as an element-name prefix (e.g. `mon_start`).
pub fn weekday_tag(weekday: Weekday) -> &'static str {
    WEEKDAY_TAGS[weekday.num_days_from_sunday() as usize]
}

/// Returns the weekday tag for a day number counted from Sunday = 0.
///
/// # Errors
///
/// Returns [`ClientError::InvalidField`] for numbers outside `0..=6`.
pub fn weekday_tag_from_index(index: u32) -> ClientResult<&'static str> {
    WEEKDAY_TAGS
        .get(index as usize)
        .copied()
        .ok_or_else(|| {
            ClientError::invalid_field("weekday", format!("no weekday with index {}", index))
        })
}

/// Escapes text for use as XML character data (`<`, `>`, `&`, `'`, `"`).
pub fn escape_text(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%d").to_string()
}

/// Formats a timestamp in its default text form, `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Derives the timesheet date: the date of the earliest start among `days`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidTimesheet`] when `days` is empty.
pub fn timesheet_date(days: &[TimesheetDay]) -> ClientResult<String> {
    days.iter()
        .map(|day| day.start_time)
        .min()
        .map(format_date)
        .ok_or_else(|| ClientError::InvalidTimesheet {
            message: "a timesheet that was worked needs at least one day".to_string(),
        })
}

/// Resolves the submission timestamp, reading `now` only when no explicit
/// time was supplied.
pub fn submission_timestamp<F>(explicit: Option<NaiveDateTime>, now: F) -> String
where
    F: FnOnce() -> NaiveDateTime,
{
    format_timestamp(explicit.unwrap_or_else(now))
}

/// A timesheet day in wire form. Values are not yet XML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDay {
    /// Weekday tag of the day's start time.
    pub tag: &'static str,
    /// Start time as `HHMM`.
    pub start: String,
    /// Finish time as `HHMM`.
    pub finish: String,
    /// Break duration padded to four digits.
    pub break_time: String,
    /// Free-text notes.
    pub notes: String,
}

impl NormalizedDay {
    /// Normalizes one timesheet day.
    pub fn from_day(day: &TimesheetDay) -> ClientResult<Self> {
        Ok(Self {
            tag: weekday_tag(day.start_time.weekday()),
            start: format_hhmm(day.start_time),
            finish: format_hhmm(day.end_time),
            break_time: pad_break(&day.break_time)?,
            notes: day.notes.clone(),
        })
    }
}
