//! Response classification.
//!
//! [`decode`] turns a raw [`HttpResponse`] into an [`ApiResponse`] or a typed
//! error, according to the [`ResultFormat`] the caller asked for.

use serde_json::Value;

use crate::clients::{ApiError, HttpResponse, ProtocolError, RequestParam};
use crate::error::VkError;

/// Serialization format requested from the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// `.json` endpoint.
    #[default]
    Json,
    /// `.xml` endpoint.
    Xml,
}

impl WireFormat {
    /// Endpoint suffix without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

/// How the caller wants the result delivered.
///
/// # Example
///
/// ```rust
/// use vk_api::{ResultFormat, WireFormat};
///
/// assert_eq!(ResultFormat::Structured.wire_format(), WireFormat::Json);
/// assert_eq!(ResultFormat::Raw(WireFormat::Xml).wire_format().extension(), "xml");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResultFormat {
    /// Parse the JSON body and return its `response` value.
    #[default]
    Structured,
    /// Return the body text untouched.
    Raw(WireFormat),
}

impl ResultFormat {
    /// Returns the endpoint format this result format is fetched with.
    #[must_use]
    pub const fn wire_format(self) -> WireFormat {
        match self {
            Self::Structured => WireFormat::Json,
            Self::Raw(format) => format,
        }
    }
}

/// A successful method result.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// The decoded `response` value.
    Structured(Value),
    /// The body as received.
    Raw(String),
}

impl ApiResponse {
    /// Returns the structured value, if this is a structured result.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw body, if this is a raw result.
    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Structured(_) => None,
            Self::Raw(body) => Some(body),
        }
    }

    /// Converts into a JSON value. Raw bodies become a JSON string.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Structured(value) => value,
            Self::Raw(body) => Value::String(body),
        }
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extracts an [`ApiError`] from a body carrying a top-level `error` object.
///
/// Fields are read leniently: a missing or mistyped `error_code` falls back
/// to the unknown-error code, any `error_msg` is rendered as text, and
/// `request_params` entries that are not objects are skipped.
fn api_error(body: &Value) -> Option<ApiError> {
    let error = body.get("error").filter(|e| e.is_object())?;

    let code = error
        .get("error_code")
        .and_then(|code| match code {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .unwrap_or(crate::clients::error_catalog::UNKNOWN_ERROR_CODE);

    let server_message = error
        .get("error_msg")
        .map(value_to_text)
        .unwrap_or_default();

    let failed_parameters = error
        .get("request_params")
        .and_then(Value::as_array)
        .map(|params| {
            params
                .iter()
                .filter(|p| p.is_object())
                .map(|p| RequestParam {
                    key: p.get("key").map(value_to_text).unwrap_or_default(),
                    value: p.get("value").map(value_to_text).unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();

    Some(ApiError::new(code, server_message, failed_parameters))
}

/// Classifies a response body.
///
/// - A top-level `error` object becomes [`VkError::Api`], whatever the status
///   or format (XML bodies are never inspected).
/// - A non-2xx status without an error object becomes
///   [`ProtocolError::UnexpectedStatus`].
/// - [`ResultFormat::Structured`] requires valid JSON with a `response` field.
/// - [`ResultFormat::Raw`] returns the body as received.
///
/// # Errors
///
/// See above.
///
/// # Example
///
/// ```rust
/// use vk_api::{decode, ApiResponse, HttpResponse, ResultFormat, VkError};
///
/// let ok = HttpResponse::new(200, r#"{"response":[{"id":1}]}"#);
/// let result = decode(&ok, ResultFormat::Structured).unwrap();
/// assert_eq!(result.as_value().unwrap()[0]["id"], 1);
///
/// let failed = HttpResponse::new(200, r#"{"error":{"error_code":5,"error_msg":"no token"}}"#);
/// match decode(&failed, ResultFormat::Structured) {
///     Err(VkError::Api(e)) => assert_eq!(e.title, "User authorization failed"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub fn decode(response: &HttpResponse, format: ResultFormat) -> Result<ApiResponse, VkError> {
    let parsed = match format.wire_format() {
        WireFormat::Json => Some(response.json()),
        WireFormat::Xml => None,
    };

    if let Some(Ok(body)) = &parsed {
        if let Some(error) = api_error(body) {
            tracing::warn!(
                code = error.code,
                "VK API returned error: {}",
                error.server_message
            );
            return Err(error.into());
        }
    }

    if !response.is_ok() {
        return Err(ProtocolError::UnexpectedStatus {
            status: response.code,
            body: response.body.clone(),
        }
        .into());
    }

    match format {
        ResultFormat::Raw(_) => Ok(ApiResponse::Raw(response.body.clone())),
        ResultFormat::Structured => {
            let mut body = match parsed {
                Some(result) => result?,
                None => response.json()?,
            };
            let value = body
                .get_mut("response")
                .map(Value::take)
                .ok_or(ProtocolError::MissingField { field: "response" })?;
            Ok(ApiResponse::Structured(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_returns_response_value() {
        let response = HttpResponse::new(200, r#"{"response":{"count":3}}"#);
        let result = decode(&response, ResultFormat::Structured).unwrap();
        assert_eq!(result, ApiResponse::Structured(json!({"count": 3})));
    }

    #[test]
    fn test_error_object_is_classified_with_catalog() {
        let body = json!({
            "error": {
                "error_code": 5,
                "error_msg": "User authorization failed: no access_token passed.",
                "request_params": [
                    {"key": "oauth", "value": "1"},
                    {"key": "method", "value": "users.get"}
                ]
            }
        });
        let response = HttpResponse::new(200, body.to_string());

        match decode(&response, ResultFormat::Structured) {
            Err(VkError::Api(error)) => {
                assert_eq!(error.code, 5);
                assert_eq!(error.title, "User authorization failed");
                assert_eq!(
                    error.server_message,
                    "User authorization failed: no access_token passed."
                );
                assert_eq!(error.failed_parameters.len(), 2);
                assert_eq!(error.failed_parameters[1].key, "method");
                assert_eq!(error.failed_parameters[1].value, "users.get");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_object_wins_over_non_2xx_status() {
        let response = HttpResponse::new(500, r#"{"error":{"error_code":10,"error_msg":"x"}}"#);
        assert!(matches!(
            decode(&response, ResultFormat::Structured),
            Err(VkError::Api(ApiError { code: 10, .. }))
        ));
    }

    #[test]
    fn test_unknown_error_code_uses_fallback_title() {
        let response = HttpResponse::new(200, r#"{"error":{"error_code":9999,"error_msg":"?"}}"#);
        match decode(&response, ResultFormat::Structured) {
            Err(VkError::Api(error)) => {
                assert_eq!(error.code, 9999);
                assert_eq!(error.title, "Unknown error occurred");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_invalid_json() {
        let response = HttpResponse::new(200, "<html></html>");
        assert!(matches!(
            decode(&response, ResultFormat::Structured),
            Err(VkError::Protocol(ProtocolError::InvalidJson(_)))
        ));
    }

    #[test]
    fn test_missing_response_field() {
        let response = HttpResponse::new(200, r#"{"execute_errors":[]}"#);
        assert!(matches!(
            decode(&response, ResultFormat::Structured),
            Err(VkError::Protocol(ProtocolError::MissingField { field: "response" }))
        ));
    }

    #[test]
    fn test_non_2xx_without_error_object() {
        let response = HttpResponse::new(502, "Bad Gateway");
        assert!(matches!(
            decode(&response, ResultFormat::Structured),
            Err(VkError::Protocol(ProtocolError::UnexpectedStatus { status: 502, .. }))
        ));
    }

    #[test]
    fn test_raw_json_returns_body_untouched() {
        let body = r#"{"response":[1,2,3]}"#;
        let response = HttpResponse::new(200, body);
        let result = decode(&response, ResultFormat::Raw(WireFormat::Json)).unwrap();
        assert_eq!(result.as_raw(), Some(body));
    }

    #[test]
    fn test_raw_json_still_detects_errors() {
        let response = HttpResponse::new(200, r#"{"error":{"error_code":6,"error_msg":"slow down"}}"#);
        assert!(matches!(
            decode(&response, ResultFormat::Raw(WireFormat::Json)),
            Err(VkError::Api(ApiError { code: 6, .. }))
        ));
    }

    #[test]
    fn test_raw_xml_is_not_parsed() {
        let body = "<?xml version=\"1.0\"?><response><count>1</count></response>";
        let response = HttpResponse::new(200, body);
        let result = decode(&response, ResultFormat::Raw(WireFormat::Xml)).unwrap();
        assert_eq!(result.as_raw(), Some(body));
    }

    #[test]
    fn test_error_with_string_code_and_numeric_param_values() {
        let response = HttpResponse::new(
            200,
            r#"{"error":{"error_code":"113","error_msg":"Invalid user id","request_params":[{"key":"user_id","value":0}]}}"#,
        );
        match decode(&response, ResultFormat::Structured) {
            Err(VkError::Api(error)) => {
                assert_eq!(error.code, 113);
                assert_eq!(error.failed_parameters[0].value, "0");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_with_null_request_params_is_still_api_error() {
        let response = HttpResponse::new(
            200,
            r#"{"error":{"error_code":5,"error_msg":"x","request_params":null}}"#,
        );
        match decode(&response, ResultFormat::Structured) {
            Err(VkError::Api(error)) => {
                assert_eq!(error.code, 5);
                assert_eq!(error.server_message, "x");
                assert!(error.failed_parameters.is_empty());
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_with_non_string_message_is_still_api_error() {
        let response = HttpResponse::new(200, r#"{"error":{"error_code":6,"error_msg":123}}"#);
        match decode(&response, ResultFormat::Structured) {
            Err(VkError::Api(error)) => {
                assert_eq!(error.code, 6);
                assert_eq!(error.server_message, "123");
                assert_eq!(error.title, "Too many requests per second");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_with_malformed_params_keeps_well_formed_entries() {
        let response = HttpResponse::new(
            200,
            r#"{"error":{"error_code":"x","request_params":["junk",{"key":"v","value":"5.131"}]}}"#,
        );
        match decode(&response, ResultFormat::Raw(WireFormat::Json)) {
            Err(VkError::Api(error)) => {
                assert_eq!(error.code, 1);
                assert_eq!(error.server_message, "");
                assert_eq!(error.failed_parameters.len(), 1);
                assert_eq!(error.failed_parameters[0].to_string(), "v=5.131");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
