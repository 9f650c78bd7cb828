//! Error types for method dispatch.
//!
//! # Error Handling
//!
//! - [`TransportError`]: the HTTP exchange itself failed (DNS, refused
//!   connection, TLS). Never retried.
//! - [`ProtocolError`]: the server answered with something other than the
//!   expected JSON shape
//! - [`ApiError`]: the server answered with an `error` object
//!
//! # Example
//!
//! ```rust,ignore
//! use vk_api::{VkError, ApiError};
//!
//! match client.execute_method("users.get", params) {
//!     Err(VkError::Api(ApiError { code: 6, .. })) => {
//!         // Too many requests per second
//!     }
//!     Err(VkError::Transport(e)) => eprintln!("Network error: {e}"),
//!     _ => {}
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The HTTP exchange failed before a response body was read.
#[derive(Debug, Error)]
#[error("Network error: {0}")]
pub struct TransportError(#[from] pub reqwest::Error);

/// The response did not have the shape the client expects.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The body is not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A required field is absent from an otherwise valid body.
    #[error("Response is missing the '{field}' field")]
    MissingField {
        /// The missing field.
        field: &'static str,
    },

    /// A non-2xx status arrived without an error object.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The raw body.
        body: String,
    },
}

/// One request parameter echoed back by the server in an error object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParam {
    /// Parameter name.
    pub key: String,
    /// Parameter value as the server saw it.
    pub value: String,
}

impl fmt::Display for RequestParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// An error object returned by the VK API, enriched from the error catalog.
///
/// Built once per failed call and never mutated.
///
/// # Example
///
/// ```rust
/// use vk_api::ApiError;
///
/// let error = ApiError::new(5, "User authorization failed: no access_token passed.", Vec::new());
/// assert_eq!(error.code, 5);
/// assert_eq!(error.title, "User authorization failed");
/// assert!(error.to_string().contains("[5]"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("VK API error [{code}] {title}: {server_message}")]
pub struct ApiError {
    /// Numeric error code.
    pub code: i64,
    /// The `error_msg` sent by the server.
    pub server_message: String,
    /// Catalog title for the code.
    pub title: &'static str,
    /// Catalog description for the code.
    pub description: &'static str,
    /// The request parameters the server echoed back, in order.
    pub failed_parameters: Vec<RequestParam>,
}

impl ApiError {
    /// Builds an error from its server-side parts, looking up the catalog entry.
    pub fn new(
        code: i64,
        server_message: impl Into<String>,
        failed_parameters: Vec<RequestParam>,
    ) -> Self {
        let entry = super::ErrorCatalog::lookup(code);
        Self {
            code,
            server_message: server_message.into(),
            title: entry.title,
            description: entry.description,
            failed_parameters,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportError>();
    assert_send_sync::<ProtocolError>();
    assert_send_sync::<ApiError>();
};
