//! Normalized request outcomes.
//!
//! Every network call resolves to a [`RequestOutcome`]; callers never
//! need exception handling to interpret a result. Failures of any
//! origin are classified into a [`FailureKind`] independent of the
//! remote API's error payload shape.

use reqwest::StatusCode;
use serde_json::Value;

/// Classification of a failed API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The credential was missing, expired, or rejected (401).
    Unauthorized,
    /// The addressed resource does not exist (404).
    NotFound,
    /// The server rejected the submitted data (400/422), or the client
    /// rejected it before dispatch.
    Validation,
    /// The server failed internally (5xx).
    ServerError,
    /// The call never produced an HTTP response.
    Network,
    /// The response body could not be interpreted.
    Parse,
    /// Any other HTTP status.
    Unknown,
}

impl FailureKind {
    /// Map an HTTP status code to a failure kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => FailureKind::Unauthorized,
            404 => FailureKind::NotFound,
            400 | 422 => FailureKind::Validation,
            500..=599 => FailureKind::ServerError,
            _ => FailureKind::Unknown,
        }
    }

    /// Stable string form for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Unauthorized => "unauthorized",
            FailureKind::NotFound => "not_found",
            FailureKind::Validation => "validation",
            FailureKind::ServerError => "server_error",
            FailureKind::Network => "network",
            FailureKind::Parse => "parse",
            FailureKind::Unknown => "unknown",
        }
    }
}

/// A failed network call, normalized.
///
/// `message` is always a non-empty human-readable string; the view
/// layer may surface it directly and must not branch on any `kind`
/// other than `Unauthorized`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub message: String,
    /// Absent for failures that never produced an HTTP response.
    pub http_status: Option<u16>,
    /// The parsed error body, when one existed.
    pub raw: Option<Value>,
}

impl ApiFailure {
    fn local(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http_status: None,
            raw: None,
        }
    }

    /// A transport-level failure: connection refused, DNS failure, or a
    /// dropped response stream. No status code is available.
    pub fn unreachable() -> Self {
        Self::local(
            FailureKind::Network,
            "Unable to connect to server. Please check your connection and try again.",
        )
    }

    /// A response body that could not be interpreted.
    pub fn parse(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = "Empty response body".to_string();
        }
        Self::local(FailureKind::Parse, message)
    }

    /// A submission rejected client-side before any network call.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::local(FailureKind::Validation, message)
    }

    /// A locally detected missing-credential failure.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::local(FailureKind::Unauthorized, message)
    }

    /// Build a failure from an error-status response.
    ///
    /// The message is resolved by trying, in order, `body.message`,
    /// `body.error`, `body.errors` joined with ", ", `body.details`,
    /// the raw unparsed text, and finally the HTTP status line.
    pub fn from_response(status: u16, body: Option<&Value>, raw_text: &str) -> Self {
        let message = body
            .and_then(resolve_body_message)
            .or_else(|| {
                let text = raw_text.trim();
                (body.is_none() && !text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| status_line(status));

        Self {
            kind: FailureKind::from_status(status),
            message,
            http_status: Some(status),
            raw: body.cloned(),
        }
    }
}

/// Resolve a message from whichever field the remote API happened to
/// use. Precedence: `message`, `error`, `errors`, `details`.
fn resolve_body_message(body: &Value) -> Option<String> {
    if let Some(message) = non_empty_str(body.get("message")) {
        return Some(message);
    }
    if let Some(error) = non_empty_str(body.get("error")) {
        return Some(error);
    }
    if let Some(errors) = body.get("errors").and_then(Value::as_array) {
        let parts: Vec<&str> = errors.iter().filter_map(Value::as_str).collect();
        if !parts.is_empty() {
            return Some(parts.join(", "));
        }
    }
    non_empty_str(body.get("details"))
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn status_line(status: u16) -> String {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status");
    format!("HTTP {}: {}", status, reason)
}

/// The result of one network call.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Success { payload: Value },
    Failure(ApiFailure),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success { .. })
    }

    /// The failure, if this outcome is one.
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            RequestOutcome::Success { .. } => None,
            RequestOutcome::Failure(failure) => Some(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_mapping() {
        assert_eq!(FailureKind::from_status(401), FailureKind::Unauthorized);
        assert_eq!(FailureKind::from_status(404), FailureKind::NotFound);
        assert_eq!(FailureKind::from_status(400), FailureKind::Validation);
        assert_eq!(FailureKind::from_status(422), FailureKind::Validation);
        assert_eq!(FailureKind::from_status(500), FailureKind::ServerError);
        assert_eq!(FailureKind::from_status(503), FailureKind::ServerError);
        assert_eq!(FailureKind::from_status(418), FailureKind::Unknown);
    }

    #[test]
    fn message_field_wins_over_error() {
        let body = json!({"message": "m", "error": "e"});
        let failure = ApiFailure::from_response(422, Some(&body), "");
        assert_eq!(failure.message, "m");
    }

    #[test]
    fn error_field_wins_over_errors_array() {
        let body = json!({"error": "e", "errors": ["a", "b"]});
        let failure = ApiFailure::from_response(400, Some(&body), "");
        assert_eq!(failure.message, "e");
    }

    #[test]
    fn errors_array_is_joined() {
        let body = json!({"errors": ["a", "b"]});
        let failure = ApiFailure::from_response(400, Some(&body), "");
        assert_eq!(failure.message, "a, b");
    }

    #[test]
    fn details_field_is_last_body_resort() {
        let body = json!({"details": "d"});
        let failure = ApiFailure::from_response(500, Some(&body), "");
        assert_eq!(failure.message, "d");
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        let failure = ApiFailure::from_response(500, None, "");
        assert_eq!(failure.message, "HTTP 500: Internal Server Error");
        assert_eq!(failure.kind, FailureKind::ServerError);
    }

    #[test]
    fn body_without_known_fields_falls_back_to_status_line() {
        let body = json!({"code": 9});
        let failure = ApiFailure::from_response(404, Some(&body), "");
        assert_eq!(failure.message, "HTTP 404: Not Found");
    }

    #[test]
    fn unparsed_text_becomes_the_message() {
        let failure = ApiFailure::from_response(503, None, "upstream down");
        assert_eq!(failure.message, "upstream down");
        assert_eq!(failure.kind, FailureKind::ServerError);
    }

    #[test]
    fn failure_carries_status_and_raw_body() {
        let body = json!({"message": "m"});
        let failure = ApiFailure::from_response(422, Some(&body), "");
        assert_eq!(failure.http_status, Some(422));
        assert_eq!(failure.raw, Some(body));
    }

    #[test]
    fn parse_failure_message_is_never_empty() {
        let failure = ApiFailure::parse("   ");
        assert!(!failure.message.trim().is_empty());
    }
}
