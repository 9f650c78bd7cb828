//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated VK application ID.
///
/// # Example
///
/// ```rust
/// use vk_api::ApplicationId;
///
/// let id = ApplicationId::new("5412345").unwrap();
/// assert_eq!(id.as_ref(), "5412345");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new validated application ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApplicationId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyApplicationId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated VK application secret.
///
/// The `Debug` implementation masks the value, displaying only
/// `ApplicationSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use vk_api::ApplicationSecret;
///
/// let secret = ApplicationSecret::new("s3cr3t").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApplicationSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApplicationSecret(String);

impl ApplicationSecret {
    /// Creates a new validated application secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApplicationSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApplicationSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApplicationSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApplicationSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApplicationSecret(*****)")
    }
}

/// An OAuth access token bound to a client.
///
/// Like [`ApplicationSecret`], the token is masked in debug output.
///
/// # Serialization
///
/// `AccessToken` serializes to and deserializes from the plain token string,
/// so it can be stored by the embedding application between runs.
///
/// ```rust
/// use vk_api::AccessToken;
///
/// let token = AccessToken::new("abc123").unwrap();
/// assert_eq!(serde_json::to_string(&token).unwrap(), r#""abc123""#);
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

impl Serialize for AccessToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccessToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL for one of the VK endpoints.
///
/// Trailing slashes are stripped so paths can be appended with a single `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not start with
    /// `http://` or `https://` or has nothing after the scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() => Ok(Self(trimmed.to_string())),
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }

    /// Joins a path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_id_rejects_empty() {
        assert!(matches!(
            ApplicationId::new(""),
            Err(ConfigError::EmptyApplicationId)
        ));
        assert!(matches!(
            ApplicationId::new("   "),
            Err(ConfigError::EmptyApplicationId)
        ));
    }

    #[test]
    fn test_application_secret_is_masked_in_debug() {
        let secret = ApplicationSecret::new("very-secret").unwrap();
        let debug = format!("{secret:?}");
        assert!(!debug.contains("very-secret"));
        assert_eq!(secret.as_ref(), "very-secret");
    }

    #[test]
    fn test_access_token_rejects_empty() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_round_trips_through_json() {
        let token: AccessToken = serde_json::from_str(r#""tok""#).unwrap();
        assert_eq!(token.as_ref(), "tok");
        assert!(serde_json::from_str::<AccessToken>(r#""""#).is_err());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://api.vk.com/method/").unwrap();
        assert_eq!(url.as_ref(), "https://api.vk.com/method");
        assert_eq!(url.join("users.get.json"), "https://api.vk.com/method/users.get.json");
    }

    #[test]
    fn test_base_url_requires_scheme() {
        assert!(BaseUrl::new("api.vk.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("http://127.0.0.1:8080").is_ok());
    }
}
