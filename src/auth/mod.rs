//! Authorization types for the VK API client.
//!
//! # Overview
//!
//! - [`PermissionMask`]: the bit-set of permissions granted to an application
//! - [`check`]: the gate every dispatched method call passes through
//! - [`AuthorizationError`]: failures raised by the gate and the OAuth flow
//! - [`oauth`]: authorization URL construction and token payloads
//!
//! # Example
//!
//! ```rust
//! use vk_api::auth::{check, AuthorizationError};
//! use vk_api::PermissionMask;
//!
//! // Without a bound token every call is refused.
//! assert_eq!(check(None, None, false), Err(AuthorizationError::NotAuthorized));
//! ```

mod error;
pub mod oauth;
mod permissions;

pub use error::AuthorizationError;
pub use permissions::{check, PermissionMask};
