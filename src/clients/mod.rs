//! Request signing, transport and dispatch for the VK API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: owns credentials, the permission mask and the transport
//! - [`MethodCall`]: one method invocation with its parameters and options
//! - [`MethodExecutor`]: the seam resource wrappers are written against
//! - [`Params`] / [`ParamValue`]: ordered method parameters
//! - [`RequestSigner`]: computes the `sig` parameter
//! - [`HttpClient`]: the blocking transport
//! - [`decode`]: turns a raw response into an [`ApiResponse`] or an error
//! - [`ErrorCatalog`]: titles and hints for API error codes
//!
//! # Example
//!
//! ```rust,no_run
//! use vk_api::{Client, MethodCall, Params, ResultFormat, WireFormat};
//! use vk_api::{VkConfig, ApplicationId, ApplicationSecret, AccessToken};
//! use vk_api::clients::MethodExecutor;
//!
//! let config = VkConfig::builder()
//!     .application_id(ApplicationId::new("42").unwrap())
//!     .secret(ApplicationSecret::new("s3cr3t").unwrap())
//!     .build()
//!     .unwrap();
//! let client = Client::with_access_token(config, AccessToken::new("token").unwrap())?;
//!
//! let xml = client.execute(
//!     MethodCall::new("users.get")
//!         .params(Params::new().with("user_ids", "1"))
//!         .format(ResultFormat::Raw(WireFormat::Xml)),
//! )?;
//! println!("{}", xml.as_raw().unwrap_or_default());
//! # Ok::<(), vk_api::VkError>(())
//! ```
//!
//! # Retry Behavior
//!
//! None. Every failure is returned to the caller on the first attempt, and
//! no request timeout is applied.

mod error_catalog;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod params;
mod response;
pub mod signer;
mod vk_client;

pub use error_catalog::{ErrorCatalog, ErrorDescription, UNKNOWN_ERROR_CODE};
pub use errors::{ApiError, ProtocolError, RequestParam, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use params::{ParamValue, Params, LIST_SEPARATOR};
pub use response::{decode, ApiResponse, ResultFormat, WireFormat};
pub use signer::{RequestSigner, SignedRequest};
pub use vk_client::{Client, MethodCall, MethodExecutor, BATCH_METHOD};
