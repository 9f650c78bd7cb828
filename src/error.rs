//! Error types for the VK API client.
//!
//! This module contains the configuration error type and [`VkError`], the
//! unified error returned by every operation that talks to the API.
//!
//! # Error Handling
//!
//! Each concern has its own error type:
//!
//! - [`ConfigError`]: invalid or missing configuration values
//! - [`AuthorizationError`]: missing token, missing permission bits, or a
//!   second authorization attempt
//! - [`ProtocolError`]: the server answered with something that is not the
//!   expected JSON shape
//! - [`ApiError`]: the server returned an `error` object
//! - [`TransportError`]: the HTTP exchange itself failed
//!
//! [`VkError`] wraps all of them so call sites can use `?` throughout.
//!
//! # Example
//!
//! ```rust
//! use vk_api::{ApplicationId, ConfigError};
//!
//! let result = ApplicationId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApplicationId)));
//! ```

use thiserror::Error;

use crate::auth::AuthorizationError;
use crate::clients::{ApiError, ProtocolError, TransportError};

/// Errors that can occur while building the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Application ID cannot be empty.
    #[error("Application ID cannot be empty. Please provide the ID issued for your VK application.")]
    EmptyApplicationId,

    /// Application secret cannot be empty.
    #[error("Application secret cannot be empty. Please provide the secret key of your VK application.")]
    EmptyApplicationSecret,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty.")]
    EmptyAccessToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'MAJOR.MINOR' (e.g., '5.131').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A permission scope name is not recognized.
    #[error("Unknown permission '{name}'. Expected a VK scope name such as 'friends' or 'groups'.")]
    InvalidPermission {
        /// The unrecognized name.
        name: String,
    },

    /// A base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Unified error type for client operations.
///
/// # Example
///
/// ```rust,ignore
/// use vk_api::VkError;
///
/// match client.execute_method("users.get", params) {
///     Ok(value) => println!("{value}"),
///     Err(VkError::Api(e)) => eprintln!("VK error {}: {}", e.code, e.title),
///     Err(VkError::Authorization(e)) => eprintln!("not allowed: {e}"),
///     Err(e) => eprintln!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum VkError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The call is not permitted with the current token or permissions.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// The response did not have the expected shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The server returned an error object.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

// Verify VkError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VkError>();
};
