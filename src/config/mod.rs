//! Configuration types for the VK API client.
//!
//! # Overview
//!
//! - [`VkConfig`]: application credentials, API version and endpoint settings
//! - [`VkConfigBuilder`]: a builder for constructing [`VkConfig`] instances
//! - [`ApplicationId`], [`ApplicationSecret`], [`AccessToken`], [`BaseUrl`]:
//!   validated newtypes
//! - [`ApiVersion`]: the VK API version sent as `v`
//!
//! # Example
//!
//! ```rust
//! use vk_api::{VkConfig, ApplicationId, ApplicationSecret};
//!
//! let config = VkConfig::builder()
//!     .application_id(ApplicationId::new("42").unwrap())
//!     .secret(ApplicationSecret::new("s3cr3t").unwrap())
//!     .api_version("5.131".parse().unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApplicationId, ApplicationSecret, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default OAuth endpoint host.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://oauth.vk.com";

/// Default method dispatch endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.vk.com/method";

/// Redirect URI used when the caller does not provide one.
pub const DEFAULT_REDIRECT_URI: &str = "https://api.vk.com/blank.html";

/// Configuration for the VK API client.
///
/// `VkConfig` is immutable once built. The access token is not part of the
/// configuration; it is bound to a [`Client`](crate::Client).
///
/// # Example
///
/// ```rust
/// use vk_api::{VkConfig, ApplicationId, ApplicationSecret};
///
/// let config = VkConfig::builder()
///     .application_id(ApplicationId::new("42").unwrap())
///     .secret(ApplicationSecret::new("s3cr3t").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.application_id().as_ref(), "42");
/// assert!(config.api_version().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct VkConfig {
    application_id: ApplicationId,
    secret: ApplicationSecret,
    api_version: Option<ApiVersion>,
    oauth_base_url: BaseUrl,
    api_base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl VkConfig {
    /// Creates a new builder for constructing a `VkConfig`.
    #[must_use]
    pub fn builder() -> VkConfigBuilder {
        VkConfigBuilder::new()
    }

    /// Returns the application ID.
    #[must_use]
    pub const fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    /// Returns the application secret.
    #[must_use]
    pub const fn secret(&self) -> &ApplicationSecret {
        &self.secret
    }

    /// Returns the API version, if one is pinned.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the OAuth base URL.
    #[must_use]
    pub const fn oauth_base_url(&self) -> &BaseUrl {
        &self.oauth_base_url
    }

    /// Returns the method dispatch base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &BaseUrl {
        &self.api_base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify VkConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VkConfig>();
};

/// Builder for constructing [`VkConfig`] instances.
///
/// Required fields are `application_id` and `secret`.
///
/// # Defaults
///
/// - `api_version`: `None` (the server default applies)
/// - `oauth_base_url`: [`DEFAULT_OAUTH_BASE_URL`]
/// - `api_base_url`: [`DEFAULT_API_BASE_URL`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct VkConfigBuilder {
    application_id: Option<ApplicationId>,
    secret: Option<ApplicationSecret>,
    api_version: Option<ApiVersion>,
    oauth_base_url: Option<BaseUrl>,
    api_base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl VkConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application ID (required).
    #[must_use]
    pub fn application_id(mut self, id: ApplicationId) -> Self {
        self.application_id = Some(id);
        self
    }

    /// Sets the application secret (required).
    #[must_use]
    pub fn secret(mut self, secret: ApplicationSecret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Pins the API version sent with every signed request.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the OAuth base URL.
    #[must_use]
    pub fn oauth_base_url(mut self, url: BaseUrl) -> Self {
        self.oauth_base_url = Some(url);
        self
    }

    /// Overrides the method dispatch base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`VkConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `application_id` or
    /// `secret` are not set.
    pub fn build(self) -> Result<VkConfig, ConfigError> {
        let application_id = self.application_id.ok_or(ConfigError::MissingRequiredField {
            field: "application_id",
        })?;
        let secret = self
            .secret
            .ok_or(ConfigError::MissingRequiredField { field: "secret" })?;

        let oauth_base_url = match self.oauth_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_OAUTH_BASE_URL)?,
        };
        let api_base_url = match self.api_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_API_BASE_URL)?,
        };

        Ok(VkConfig {
            application_id,
            secret,
            api_version: self.api_version,
            oauth_base_url,
            api_base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_application_id() {
        let result = VkConfigBuilder::new()
            .secret(ApplicationSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "application_id"
            })
        ));
    }

    #[test]
    fn test_builder_requires_secret() {
        let result = VkConfigBuilder::new()
            .application_id(ApplicationId::new("42").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "secret" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = VkConfig::builder()
            .application_id(ApplicationId::new("42").unwrap())
            .secret(ApplicationSecret::new("secret").unwrap())
            .build()
            .unwrap();

        assert!(config.api_version().is_none());
        assert_eq!(config.oauth_base_url().as_ref(), DEFAULT_OAUTH_BASE_URL);
        assert_eq!(config.api_base_url().as_ref(), DEFAULT_API_BASE_URL);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = VkConfig::builder()
            .application_id(ApplicationId::new("42").unwrap())
            .secret(ApplicationSecret::new("secret").unwrap())
            .api_version(ApiVersion::new(5, 131))
            .oauth_base_url(BaseUrl::new("http://127.0.0.1:9000").unwrap())
            .api_base_url(BaseUrl::new("http://127.0.0.1:9001/method/").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.api_version(), Some(&ApiVersion::new(5, 131)));
        assert_eq!(config.oauth_base_url().as_ref(), "http://127.0.0.1:9000");
        assert_eq!(config.api_base_url().as_ref(), "http://127.0.0.1:9001/method");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_secret() {
        let config = VkConfig::builder()
            .application_id(ApplicationId::new("42").unwrap())
            .secret(ApplicationSecret::new("top-secret-value").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("VkConfig"));
        assert!(!debug_str.contains("top-secret-value"));
    }
}
