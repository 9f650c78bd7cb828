//! Authorization URL generation.

use crate::auth::PermissionMask;
use crate::config::{VkConfig, DEFAULT_REDIRECT_URI};
use std::fmt;

/// Path of the consent page below the OAuth base URL.
pub const AUTHORIZE_PATH: &str = "authorize";

/// The `response_type` requested from the consent page.
///
/// Any unrecognized string converts to [`ResponseType::Code`].
///
/// # Example
///
/// ```rust
/// use vk_api::auth::oauth::ResponseType;
///
/// assert_eq!(ResponseType::from("token"), ResponseType::Token);
/// assert_eq!(ResponseType::from("bogus"), ResponseType::Code);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// The token is returned directly in the redirect fragment.
    Token,
    /// A one-time code is returned for a server-side exchange.
    #[default]
    Code,
}

impl ResponseType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Code => "code",
        }
    }
}

impl From<&str> for ResponseType {
    fn from(value: &str) -> Self {
        match value {
            "token" => Self::Token,
            _ => Self::Code,
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the URL of the VK consent page.
///
/// # Arguments
///
/// * `config` - client configuration providing the application ID and OAuth host
/// * `scope` - the permissions to request, sent as the raw integer
/// * `redirect_uri` - where VK redirects afterwards; defaults to
///   [`DEFAULT_REDIRECT_URI`]
/// * `response_type` - `token` or `code`; anything else becomes `code`
/// * `test_mode` - appends `test_mode=1`
///
/// # Example
///
/// ```rust
/// use vk_api::{VkConfig, ApplicationId, ApplicationSecret, PermissionMask};
/// use vk_api::auth::oauth::authorization_url;
///
/// let config = VkConfig::builder()
///     .application_id(ApplicationId::new("42").unwrap())
///     .secret(ApplicationSecret::new("s3cr3t").unwrap())
///     .build()
///     .unwrap();
///
/// let url = authorization_url(&config, PermissionMask::GROUPS, None, "bogus", true);
/// assert!(url.contains("scope=262144"));
/// assert!(url.contains("response_type=code"));
/// assert!(url.ends_with("&test_mode=1"));
/// ```
pub fn authorization_url(
    config: &VkConfig,
    scope: PermissionMask,
    redirect_uri: Option<&str>,
    response_type: impl Into<ResponseType>,
    test_mode: bool,
) -> String {
    let response_type = response_type.into();
    let redirect_uri = redirect_uri.unwrap_or(DEFAULT_REDIRECT_URI);

    let mut params = vec![
        ("client_id", config.application_id().as_ref().to_string()),
        ("scope", scope.bits().to_string()),
        ("redirect_uri", redirect_uri.to_string()),
        ("response_type", response_type.as_str().to_string()),
    ];

    if test_mode {
        params.push(("test_mode", "1".to_string()));
    }

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}?{}",
        config.oauth_base_url().join(AUTHORIZE_PATH),
        query_string
    )
}
