//! Normalized error envelope.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Canonical failure shape produced at the transport boundary.
///
/// Every rejected request (network failure, timeout, non-2xx status,
/// application-level validation error) is coerced into this one shape.
/// Nothing above the transport ever observes a raw client error.
///
/// # Invariants
/// - `success` is always `false`.
/// - `status_code` is `None` exactly when no HTTP response was received.
/// - Building one never panics, even with no body at all; every field
///   access declares its fallback explicitly.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct ApiError {
    /// First of: server `message`, server `error`, transport error text.
    pub message: String,
    /// Transport-level error class (`timeout`, `connect`, ...); absent for
    /// plain HTTP errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// HTTP status; `None` for pure network failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub success: bool,
    /// Server-provided validation errors, when the body carried any.
    pub details: Option<Value>,
    /// Raw server body, when one was received.
    pub data: Option<Value>,
}

impl ApiError {
    /// A failure with no HTTP response at all (connect error, timeout).
    pub fn transport(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
            status_code: None,
            success: false,
            details: None,
            data: None,
        }
    }

    /// A failure with an HTTP error status and whatever body came with it.
    ///
    /// `fallback` is used as the message when the body carries neither a
    /// `message` nor an `error` string (or is not JSON at all).
    pub fn from_status(status: u16, fallback: impl Into<String>, body: Option<Value>) -> Self {
        let body = body.filter(|v| !v.is_null());
        let message = body
            .as_ref()
            .and_then(|b| {
                b.get("message")
                    .and_then(Value::as_str)
                    .or_else(|| b.get("error").and_then(Value::as_str))
            })
            .map(str::to_owned)
            .unwrap_or_else(|| fallback.into());
        let details = body
            .as_ref()
            .and_then(|b| b.get("errors"))
            .filter(|v| !v.is_null())
            .cloned();

        Self {
            message,
            code: None,
            status_code: Some(status),
            success: false,
            details,
            data: body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_prefers_server_message_field() {
        let body = json!({ "message": "correo ya registrado", "error": "conflict" });
        let err = ApiError::from_status(409, "request failed", Some(body));
        assert_eq!(err.message, "correo ya registrado");
        assert_eq!(err.status_code, Some(409));
        assert!(!err.success);
    }

    #[test]
    fn message_falls_back_to_error_field() {
        let body = json!({ "error": "unauthorized" });
        let err = ApiError::from_status(401, "request failed", Some(body));
        assert_eq!(err.message, "unauthorized");
    }

    #[test]
    fn message_falls_back_to_transport_text_when_body_is_useless() {
        let err = ApiError::from_status(500, "request failed with status 500", Some(json!([1, 2])));
        assert_eq!(err.message, "request failed with status 500");
        assert_eq!(err.details, None);
    }

    #[test]
    fn missing_body_does_not_panic() {
        let err = ApiError::from_status(502, "bad gateway", None);
        assert_eq!(err.message, "bad gateway");
        assert_eq!(err.data, None);
        assert_eq!(err.details, None);
    }

    #[test]
    fn validation_details_are_carried_through() {
        let body = json!({
            "message": "datos inválidos",
            "errors": { "dni": ["el dni debe tener 8 dígitos"] }
        });
        let err = ApiError::from_status(422, "request failed", Some(body.clone()));
        assert_eq!(err.details, Some(json!({ "dni": ["el dni debe tener 8 dígitos"] })));
        assert_eq!(err.data, Some(body));
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ApiError::transport("timeout", "request timed out");
        assert_eq!(err.status_code, None);
        assert_eq!(err.code.as_deref(), Some("timeout"));
        assert_eq!(err.to_string(), "request timed out");
    }
}
