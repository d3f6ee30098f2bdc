//! SOAP envelope builder.
//!
//! Every value passed to [`EnvelopeBuilder::field`] is XML-escaped. Markup
//! that must reach the wire unescaped is wrapped in a [`Fragment`], which can
//! only be produced by the constructors in this module, and those escape
//! every value they interpolate.

use std::fmt::Write as _;

use super::normalize::{NormalizedDay, escape_text};
use super::operation::Operation;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
/// Astute integrator namespace, bound to `tns`.
pub const TSO_NS: &str = "urn:tsoIntegrator";
/// XML Schema instance namespace, bound to `xsi`.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

const FIELD_INDENT: &str = "    ";

/// Markup produced from escaped values, inserted into an envelope as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// Substring filter: `{column} like '%{value}%'`.
    pub fn filter_like(column: &str, value: &str) -> Self {
        Fragment(format!("{} like '%{}%'", column, escape_text(value)))
    }

    /// Equality filter: `{column} = '{value}'`.
    pub fn filter_eq(column: &str, value: &str) -> Self {
        Fragment(format!("{} = '{}'", column, escape_text(value)))
    }

    /// The per-day block of a timesheet: `{tag}_start`, `{tag}_finish`,
    /// `{tag}_break` and `{tag}_notes` for each day, in the given order.
    pub fn day_block(days: &[NormalizedDay]) -> Self {
        let mut out = String::new();
        for day in days {
            for (suffix, value) in [
                ("start", day.start.as_str()),
                ("finish", day.finish.as_str()),
                ("break", day.break_time.as_str()),
                ("notes", day.notes.as_str()),
            ] {
                let name = format!("{}_{}", day.tag, suffix);
                push_element(&mut out, &name, &escape_text(value));
            }
        }
        Fragment(out)
    }

    /// The markup text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Builds the envelope for one operation.
///
/// # Example
///
/// ```
/// use astute_client::soap::{EnvelopeBuilder, Operation};
///
/// let xml = EnvelopeBuilder::new(Operation::UserQuery)
///     .field("api_key", "a<b")
///     .build();
/// assert!(xml.contains("<api_key>a&lt;b</api_key>"));
/// assert!(xml.contains(r#"<q1:UserQuery xmlns:q1="urn:UserQuery">"#));
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    operation: Operation,
    fields: String,
}

impl EnvelopeBuilder {
    /// Starts an envelope for `operation`.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            fields: String::new(),
        }
    }

    /// Appends `<name>value</name>` with `value` escaped.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        push_element(&mut self.fields, name, &escape_text(value));
        self
    }

    /// Appends `<name>fragment</name>`.
    pub fn fragment_field(mut self, name: &str, fragment: &Fragment) -> Self {
        push_element(&mut self.fields, name, fragment.as_str());
        self
    }

    /// Appends pre-rendered elements such as a day block.
    pub fn fragment(mut self, fragment: &Fragment) -> Self {
        self.fields.push_str(fragment.as_str());
        self
    }

    /// Renders the complete envelope.
    pub fn build(self) -> String {
        let op = self.operation;
        let wrapper = op.parameter_element();
        let mut xml = String::with_capacity(self.fields.len() + 512);

        let _ = writeln!(
            xml,
            r#"<soap:Envelope xmlns:soap="{}" xmlns:tns="{}" xmlns:xsi="{}">"#,
            SOAP_ENV_NS, TSO_NS, XSI_NS
        );
        xml.push_str("<soap:Body>\n");
        let _ = writeln!(
            xml,
            r#"<q1:{} xmlns:q1="{}">"#,
            op.name(),
            op.action_uri()
        );
        let _ = writeln!(xml, "  <{}>", wrapper);
        xml.push_str(&self.fields);
        let _ = writeln!(xml, "  </{}>", wrapper);
        let _ = writeln!(xml, "</q1:{}>", op.name());
        xml.push_str("</soap:Body>\n");
        xml.push_str("</soap:Envelope>");
        xml
    }
}

fn push_element(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(out, "{}<{}>{}</{}>", FIELD_INDENT, name, content, name);
}
