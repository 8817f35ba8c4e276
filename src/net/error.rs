//! Error type for REST calls and its reduction to a display message.
//!
//! ERROR HANDLING
//! ==============
//! Every call surfaces exactly one `ApiError`. The UI never branches on the
//! variant beyond asking for a human-readable message: the backend's own
//! `message` when a rejected response carried one, otherwise the caller's
//! fallback text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every `ApiClient` operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection refused).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// Message extracted from the response body, if any.
        message: Option<String>,
    },
    /// A request or response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Network calls are only compiled into the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a `Status` error from a rejected response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: message_from_body(body) }
    }

    /// The text shown to the user: the backend message or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Extract `message` from a JSON error body.
///
/// Validation errors report `message` as an array of strings; those are
/// joined with `", "`. Blank messages count as absent.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = match value.get("message")? {
        serde_json::Value::String(text) => text.trim().to_owned(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!message.is_empty()).then_some(message)
}
