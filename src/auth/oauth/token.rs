//! Access token payloads returned by the code exchange.

use crate::auth::AuthorizationError;
use crate::clients::{HttpResponse, ProtocolError};
use crate::config::{AccessToken, VkConfig, DEFAULT_REDIRECT_URI};
use crate::error::VkError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Path of the token endpoint below the OAuth base URL.
pub const ACCESS_TOKEN_PATH: &str = "access_token";

/// A successful response from the token endpoint.
///
/// Fields VK may add beyond the documented ones are preserved in `extra`.
///
/// # Example
///
/// ```rust
/// use vk_api::auth::oauth::TokenResponse;
///
/// let json = r#"{"access_token":"abc","expires_in":86400,"user_id":1,"state":"x"}"#;
/// let token: TokenResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(token.access_token.as_ref(), "abc");
/// assert_eq!(token.user_id, Some(1));
/// assert_eq!(token.extra["state"], "x");
/// assert!(token.expires_at().is_some());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The issued access token.
    pub access_token: AccessToken,

    /// Lifetime in seconds. Zero or absent means the token does not expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,

    /// The ID of the user who granted access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// The user's email, present when the `email` permission was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// All remaining fields of the payload.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,

    /// When the response was received.
    #[serde(skip, default = "Utc::now")]
    pub received_at: DateTime<Utc>,
}

impl TokenResponse {
    /// Returns when the token expires, or `None` for a non-expiring token.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_in
            .filter(|secs| *secs > 0)
            .and_then(|secs| i64::try_from(secs).ok())
            .map(|secs| self.received_at + Duration::seconds(secs))
    }

    /// Returns `true` if the token has an expiry in the past.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at().is_some_and(|at| Utc::now() > at)
    }
}

/// Query parameters for the code exchange. The request is not signed.
pub(crate) fn token_request_params(
    config: &VkConfig,
    code: &str,
    redirect_uri: Option<&str>,
) -> Vec<(&'static str, String)> {
    vec![
        ("client_id", config.application_id().as_ref().to_string()),
        ("client_secret", config.secret().as_ref().to_string()),
        (
            "redirect_uri",
            redirect_uri.unwrap_or(DEFAULT_REDIRECT_URI).to_string(),
        ),
        ("code", code.to_string()),
    ]
}

/// Classifies a token endpoint response.
///
/// An `error` field means the exchange was refused, whatever the status.
pub(crate) fn parse_token_response(response: &HttpResponse) -> Result<TokenResponse, VkError> {
    let parsed = response.json();

    if let Ok(value) = &parsed {
        if let Some(error) = value.get("error") {
            let error = match error {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let description = value
                .get("error_description")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string);
            return Err(AuthorizationError::TokenRejected { error, description }.into());
        }
    }

    if !response.is_ok() {
        return Err(ProtocolError::UnexpectedStatus {
            status: response.code,
            body: response.body.clone(),
        }
        .into());
    }

    let value = parsed?;
    if value.get("access_token").is_none() {
        return Err(ProtocolError::MissingField {
            field: "access_token",
        }
        .into());
    }

    let token = serde_json::from_value(value).map_err(ProtocolError::InvalidJson)?;
    Ok(token)
}

// Verify TokenResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenResponse>();
};
