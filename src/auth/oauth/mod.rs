//! OAuth authorization for VK applications.
//!
//! VK issues user tokens through an authorization code flow:
//!
//! 1. **Authorization URL** ([`authorization_url`]): send the user to the VK
//!    consent page with the requested permission scope.
//! 2. **Code exchange** ([`Client::exchange_code_for_token`]): trade the
//!    one-time code from the redirect for an access token. The exchange is a
//!    plain unsigned GET; the returned [`TokenResponse`] is bound to the client.
//!
//! With `response_type=token` VK returns the token directly in the redirect
//! fragment and no exchange is needed; bind it with
//! [`Client::with_access_token`].
//!
//! # Example
//!
//! ```rust
//! use vk_api::{VkConfig, ApplicationId, ApplicationSecret, PermissionMask};
//! use vk_api::auth::oauth::{authorization_url, ResponseType};
//!
//! let config = VkConfig::builder()
//!     .application_id(ApplicationId::new("42").unwrap())
//!     .secret(ApplicationSecret::new("s3cr3t").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let url = authorization_url(
//!     &config,
//!     PermissionMask::FRIENDS | PermissionMask::GROUPS,
//!     None,
//!     ResponseType::Code,
//!     false,
//! );
//! assert!(url.starts_with("https://oauth.vk.com/authorize?client_id=42"));
//! ```
//!
//! [`Client::exchange_code_for_token`]: crate::Client::exchange_code_for_token
//! [`Client::with_access_token`]: crate::Client::with_access_token

mod authorize_url;
mod token;

pub use authorize_url::{authorization_url, ResponseType};
pub use token::TokenResponse;

pub(crate) use token::{parse_token_response, token_request_params, ACCESS_TOKEN_PATH};
