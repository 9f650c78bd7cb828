//! Authorization error types for the VK API client.
//!
//! # Example
//!
//! ```rust
//! use vk_api::auth::AuthorizationError;
//!
//! let error = AuthorizationError::TokenRejected {
//!     error: "invalid_grant".to_string(),
//!     description: Some("Code is expired.".to_string()),
//! };
//! assert_eq!(error.to_string(), "invalid_grant: Code is expired.");
//! ```

use crate::auth::PermissionMask;
use thiserror::Error;

/// Errors raised before a request is sent, or while obtaining a token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    /// No access token is bound to the client.
    #[error("Client is not authorized. Bind an access token or exchange an authorization code first.")]
    NotAuthorized,

    /// The permission mask does not grant the required bit.
    #[error("Insufficient permissions: the call requires '{required}' but the token grants '{granted}'")]
    InsufficientPermissions {
        /// The permission the call requires.
        required: PermissionMask,
        /// The mask granted to the application.
        granted: PermissionMask,
    },

    /// The call requires a permission but the mask has not been loaded yet.
    #[error("Permissions have not been loaded. Call authenticate() before using permission-gated methods.")]
    PermissionsNotLoaded,

    /// A token is already bound; the code exchange may run only once.
    #[error("Client is already authorized")]
    AlreadyAuthorized,

    /// The OAuth endpoint refused to issue a token.
    #[error("{error}{}", .description.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    TokenRejected {
        /// The `error` field of the response.
        error: String,
        /// The optional `error_description` field.
        description: Option<String>,
    },
}

// Verify AuthorizationError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthorizationError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_rejected_without_description() {
        let error = AuthorizationError::TokenRejected {
            error: "invalid_client".to_string(),
            description: None,
        };
        assert_eq!(error.to_string(), "invalid_client");
    }

    #[test]
    fn test_insufficient_permissions_names_the_bits() {
        let error = AuthorizationError::InsufficientPermissions {
            required: PermissionMask::GROUPS,
            granted: PermissionMask::FRIENDS,
        };
        let message = error.to_string();
        assert!(message.contains("groups"));
        assert!(message.contains("friends"));
    }
}
