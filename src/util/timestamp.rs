//! Backend timestamp parsing and display.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Parse an RFC 3339 timestamp as sent in `createdAt`.
pub fn parse(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
}

/// Short `YYYY-MM-DD HH:MM` label in the timestamp's own offset.
///
/// Unparseable input is shown as-is.
pub fn display(raw: &str) -> String {
    parse(raw)
        .and_then(|at| at.format(format_description!("[year]-[month]-[day] [hour]:[minute]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}
