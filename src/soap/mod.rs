//! SOAP request rendering and response decoding.
//!
//! This module holds everything that touches the wire format: field
//! normalization, the envelope builder and per-operation templates, and the
//! two-pass response decoder. Nothing here performs I/O.

mod builder;
mod decoder;
mod envelope;
mod normalize;
mod operation;
mod templates;

pub use builder::{EnvelopeBuilder, Fragment, SOAP_ENV_NS, TSO_NS, XSI_NS};
pub use decoder::{
    STATUS_OK, TSID_MARKER, check_status, decode_fault, decode_inner, decode_results,
    extract_timesheet_id,
};
pub use normalize::{
    FIELD_WIDTH, NormalizedDay, WEEKDAY_TAGS, escape_text, format_date, format_hhmm,
    format_timestamp, pad_break, submission_timestamp, timesheet_date, weekday_tag,
    weekday_tag_from_index,
};
pub use operation::Operation;
pub use templates::{
    TimesheetFilter, render_timesheet_query, render_timesheet_save, render_timesheet_submit,
    render_user_query,
};
