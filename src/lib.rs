//! # VK API Rust Client
//!
//! A Rust client for the VK (VKontakte) social network API: OAuth
//! authorization, signed method dispatch, response decoding with a
//! catalog of documented error codes, and typed wrappers over the common
//! method families.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`VkConfig`] and [`VkConfigBuilder`]
//! - Validated newtypes for application credentials and access tokens
//! - Application permissions as a [`PermissionMask`] bit-set
//! - The OAuth code flow via [`auth::oauth`] and [`Client::exchange_code_for_token`]
//! - MD5 request signing via [`clients::RequestSigner`]
//! - Response decoding into [`ApiResponse`] or a typed [`ApiError`]
//! - Wrappers for `users.*`, `account.*`, `groups.*`, `docs.*` and `storage.*`
//!   in [`api`]
//!
//! ## Quick Start
//!
//! ```rust
//! use vk_api::{VkConfig, ApplicationId, ApplicationSecret, ApiVersion};
//!
//! let config = VkConfig::builder()
//!     .application_id(ApplicationId::new("5412345").unwrap())
//!     .secret(ApplicationSecret::new("your-app-secret").unwrap())
//!     .api_version(ApiVersion::new(5, 131))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Authorization
//!
//! Send the user to the consent page, then exchange the code VK redirects
//! back with:
//!
//! ```rust,no_run
//! use vk_api::{Client, PermissionMask, VkConfig, ApplicationId, ApplicationSecret};
//!
//! let config = VkConfig::builder()
//!     .application_id(ApplicationId::new("5412345").unwrap())
//!     .secret(ApplicationSecret::new("your-app-secret").unwrap())
//!     .build()
//!     .unwrap();
//! let mut client = Client::new(config)?;
//!
//! let url = client.authorization_url(
//!     PermissionMask::FRIENDS | PermissionMask::GROUPS,
//!     None,
//!     "code",
//!     false,
//! );
//! println!("Open {url}");
//!
//! let token = client.exchange_code_for_token("code-from-redirect", None)?;
//! println!("Signed in as {:?}", token.user_id);
//!
//! // Resolve the user and load the permission mask
//! let granted = client.authenticate()?;
//! println!("Granted: {granted}");
//! # Ok::<(), vk_api::VkError>(())
//! ```
//!
//! ## Calling Methods
//!
//! ```rust,no_run
//! use vk_api::{Client, MethodCall, Params, ResultFormat, WireFormat};
//! use vk_api::clients::MethodExecutor;
//! # fn run(client: &Client) -> Result<(), vk_api::VkError> {
//!
//! // Structured result: the `response` value
//! let friends = client.execute_method("friends.get", Params::new().with("count", 10))?;
//!
//! // Raw body, e.g. to hand XML to another parser
//! let xml = client.execute(
//!     MethodCall::new("users.get").format(ResultFormat::Raw(WireFormat::Xml)),
//! )?;
//! # Ok(()) }
//! ```
//!
//! ## Decoding Errors
//!
//! ```rust
//! use vk_api::{decode, HttpResponse, ResultFormat, VkError};
//!
//! let body = r#"{"error":{"error_code":5,"error_msg":"invalid session","request_params":[]}}"#;
//! let result = decode(&HttpResponse::new(200, body), ResultFormat::Structured);
//!
//! match result {
//!     Err(VkError::Api(e)) => assert_eq!(e.title, "User authorization failed"),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction; calls
//!   without a token are refused before any network traffic
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Blocking**: one request at a time, no timeouts and no retries

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{AuthorizationError, PermissionMask};
pub use config::{
    AccessToken, ApiVersion, ApplicationId, ApplicationSecret, BaseUrl, VkConfig, VkConfigBuilder,
};
pub use error::{ConfigError, VkError};

// Re-export client types
pub use clients::{
    decode, ApiError, ApiResponse, Client, ErrorCatalog, HttpResponse, MethodCall, ParamValue,
    Params, ProtocolError, ResultFormat, TransportError, WireFormat,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{authorization_url, ResponseType, TokenResponse};
