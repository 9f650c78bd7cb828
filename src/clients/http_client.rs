//! Blocking HTTP transport.
//!
//! [`HttpClient`] owns one reusable `reqwest::blocking::Client` and executes
//! GET or POST requests with it. It knows nothing about signatures, tokens or
//! response shapes.

use std::time::Duration;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::VkConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the VK endpoints.
///
/// Requests block the calling thread until the exchange completes. No
/// timeout is applied; callers that need bounded latency enforce it outside
/// the client.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,no_run
/// use vk_api::{VkConfig, ApplicationId, ApplicationSecret};
/// use vk_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = VkConfig::builder()
///     .application_id(ApplicationId::new("42").unwrap())
///     .secret(ApplicationSecret::new("s3cr3t").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.vk.com/method/utils.getServerTime.json")
///     .build();
/// let response = client.request(&request).unwrap();
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a transport configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialized.
    pub fn new(config: &VkConfig) -> Result<Self, TransportError> {
        let user_agent = user_agent(config.user_agent_prefix());

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent.clone())
            .timeout(Option::<Duration>::None)
            .build()?;

        Ok(Self { client, user_agent })
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends a request and reads the whole body.
    ///
    /// Non-2xx statuses are not errors at this layer; the caller classifies
    /// the body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on connection, TLS or body read failures.
    pub fn request(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url).query(&request.params),
            HttpMethod::Post => self.client.post(&request.url).form(&request.params),
        };

        let res = builder.send()?;
        let code = res.status().as_u16();
        let body = res.text()?;

        Ok(HttpResponse::new(code, body))
    }
}

/// Builds the User-Agent string.
fn user_agent(prefix: Option<&str>) -> String {
    let user_agent_prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("{user_agent_prefix}VK API Library v{SDK_VERSION} | Rust {rust_version}")
}
