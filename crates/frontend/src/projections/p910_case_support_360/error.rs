//! Normalization of failure payloads returned by the aggregation service.
//!
//! The service reports failures in several shapes: a `body` that is a list
//! of message objects, a `body` with a single message, or a bare top-level
//! message. Everything else collapses to a generic fallback, so the widget
//! always has one displayable string.

use serde_json::Value;

const UNKNOWN_ERROR: &str = "Unknown error";

/// The closed set of failure payload shapes the widget understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorShape {
    /// No payload at all (absent or JSON null).
    NoError,
    /// `body` is an array of `{ "message": ... }` objects.
    MessageList(Vec<String>),
    /// `body` is an object carrying a single `message`.
    BodyMessage(String),
    /// The payload itself carries a top-level `message`.
    TopLevelMessage(String),
    /// Anything else.
    Unrecognized,
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Classify a raw failure payload into one of the known shapes.
pub fn classify(payload: Option<&Value>) -> ErrorShape {
    let Some(payload) = payload else {
        return ErrorShape::NoError;
    };
    if payload.is_null() {
        return ErrorShape::NoError;
    }

    if let Some(entries) = payload.get("body").and_then(Value::as_array) {
        let messages: Vec<String> = entries
            .iter()
            .filter_map(|entry| entry.get("message"))
            .filter_map(non_empty_str)
            .map(str::to_string)
            .collect();
        return if messages.is_empty() {
            // A sequence with no usable messages is as opaque as no payload.
            ErrorShape::Unrecognized
        } else {
            ErrorShape::MessageList(messages)
        };
    }

    if let Some(message) = payload
        .get("body")
        .and_then(|body| body.get("message"))
        .and_then(non_empty_str)
    {
        return ErrorShape::BodyMessage(message.to_string());
    }

    if let Some(message) = payload.get("message").and_then(non_empty_str) {
        return ErrorShape::TopLevelMessage(message.to_string());
    }

    ErrorShape::Unrecognized
}

/// Produce one human-readable message for any failure payload.
///
/// Total over all inputs: malformed payloads come out as `"Unknown error"`,
/// never a panic and never an empty string.
pub fn normalize(payload: Option<&Value>) -> String {
    match classify(payload) {
        ErrorShape::NoError | ErrorShape::Unrecognized => UNKNOWN_ERROR.to_string(),
        ErrorShape::MessageList(messages) => messages.join(", "),
        ErrorShape::BodyMessage(message) | ErrorShape::TopLevelMessage(message) => message,
    }
}
