//! HTTP response type returned by the transport.

use crate::clients::ProtocolError;

/// A raw response: status code and body text.
///
/// # Example
///
/// ```rust
/// use vk_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, r#"{"response":1}"#);
/// assert!(response.is_ok());
/// assert_eq!(response.json().unwrap()["response"], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Body as received.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidJson`] if the body is not JSON.
    pub fn json(&self) -> Result<serde_json::Value, ProtocolError> {
        serde_json::from_str(&self.body).map_err(ProtocolError::InvalidJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_for_2xx_only() {
        assert!(HttpResponse::new(200, "").is_ok());
        assert!(HttpResponse::new(204, "").is_ok());
        assert!(!HttpResponse::new(302, "").is_ok());
        assert!(!HttpResponse::new(500, "").is_ok());
    }

    #[test]
    fn test_json_rejects_html() {
        let response = HttpResponse::new(502, "<html>Bad Gateway</html>");
        assert!(matches!(response.json(), Err(ProtocolError::InvalidJson(_))));
    }
}
