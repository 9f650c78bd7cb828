//! The VK API client.
//!
//! [`Client`] owns the configuration, the bound access token, the permission
//! mask and the HTTP transport. Every method call goes through the same
//! pipeline: permission gate, signing, dispatch, decoding.

use serde_json::Value;

use crate::api::{Account, Documents, Groups, Storage, Users};
use crate::auth::oauth::{
    authorization_url, parse_token_response, token_request_params, ResponseType, TokenResponse,
    ACCESS_TOKEN_PATH,
};
use crate::auth::{check, AuthorizationError, PermissionMask};
use crate::clients::{
    decode, ApiResponse, HttpClient, HttpMethod, HttpRequest, Params, ProtocolError,
    RequestSigner, ResultFormat,
};
use crate::config::{AccessToken, VkConfig};
use crate::error::VkError;

/// Name of the batch method, which is always sent as POST.
pub const BATCH_METHOD: &str = "execute";

/// A single method invocation.
///
/// # Example
///
/// ```rust
/// use vk_api::{MethodCall, Params, PermissionMask, ResultFormat, WireFormat};
/// use vk_api::clients::HttpMethod;
///
/// let call = MethodCall::new("groups.get")
///     .params(Params::new().with("extended", 1))
///     .format(ResultFormat::Raw(WireFormat::Json))
///     .requires(PermissionMask::GROUPS);
///
/// assert_eq!(call.name(), "groups.get");
/// assert_eq!(call.http_method(), HttpMethod::Get);
/// assert_eq!(MethodCall::new("execute").http_method(), HttpMethod::Post);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodCall {
    name: String,
    params: Params,
    format: ResultFormat,
    http_method: HttpMethod,
    required: Option<PermissionMask>,
}

impl MethodCall {
    /// Creates a structured GET call with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Params::new(),
            format: ResultFormat::Structured,
            http_method: HttpMethod::Get,
            required: None,
        }
    }

    /// Replaces the parameters.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Sets the result format.
    #[must_use]
    pub const fn format(mut self, format: ResultFormat) -> Self {
        self.format = format;
        self
    }

    /// Sends the call as POST.
    #[must_use]
    pub const fn post(mut self) -> Self {
        self.http_method = HttpMethod::Post;
        self
    }

    /// Requires `permission` to be granted before the call is sent.
    #[must_use]
    pub const fn requires(mut self, permission: PermissionMask) -> Self {
        self.required = Some(permission);
        self
    }

    /// Method name, e.g. `users.get`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters as given by the caller.
    #[must_use]
    pub const fn parameters(&self) -> &Params {
        &self.params
    }

    /// Requested result format.
    #[must_use]
    pub const fn result_format(&self) -> ResultFormat {
        self.format
    }

    /// HTTP method the call is sent with. [`BATCH_METHOD`] is always POST.
    #[must_use]
    pub fn http_method(&self) -> HttpMethod {
        if self.name == BATCH_METHOD {
            HttpMethod::Post
        } else {
            self.http_method
        }
    }

    /// Permission required by the call, if any.
    #[must_use]
    pub const fn required_permission(&self) -> Option<PermissionMask> {
        self.required
    }
}

/// Something that can execute VK API method calls.
///
/// [`Client`] is the production implementation; resource wrappers such as
/// [`Users`] are generic over this trait.
pub trait MethodExecutor {
    /// Executes `call`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused, fails in transit, or the
    /// server answers with an error.
    fn execute(&self, call: MethodCall) -> Result<ApiResponse, VkError>;

    /// Executes a structured GET call and returns the `response` value.
    ///
    /// # Errors
    ///
    /// See [`MethodExecutor::execute`].
    fn execute_method(&self, name: &str, params: Params) -> Result<Value, VkError> {
        self.execute(MethodCall::new(name).params(params))
            .map(ApiResponse::into_value)
    }
}

/// Client for the VK API.
///
/// Construction never touches the network. Call [`Client::authenticate`] to
/// resolve the current user and load the permission mask before using
/// permission-gated methods.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`. Method calls take `&self`; only the
/// authorization steps need `&mut self`.
///
/// # Example
///
/// ```rust,no_run
/// use vk_api::{Client, VkConfig, ApplicationId, ApplicationSecret, AccessToken, Params};
/// use vk_api::clients::MethodExecutor;
///
/// let config = VkConfig::builder()
///     .application_id(ApplicationId::new("42").unwrap())
///     .secret(ApplicationSecret::new("s3cr3t").unwrap())
///     .api_version("5.131".parse().unwrap())
///     .build()
///     .unwrap();
///
/// let mut client = Client::with_access_token(config, AccessToken::new("token").unwrap())?;
/// client.authenticate()?;
///
/// let me = client.execute_method("users.get", Params::new())?;
/// println!("{me}");
/// client.close();
/// # Ok::<(), vk_api::VkError>(())
/// ```
#[derive(Debug)]
pub struct Client {
    config: VkConfig,
    http_client: HttpClient,
    access_token: Option<AccessToken>,
    permissions: Option<PermissionMask>,
    user_id: Option<i64>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates an unauthorized client.
    ///
    /// # Errors
    ///
    /// Returns [`VkError::Transport`] if the HTTP transport cannot be built.
    pub fn new(config: VkConfig) -> Result<Self, VkError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            config,
            http_client,
            access_token: None,
            permissions: None,
            user_id: None,
        })
    }

    /// Creates a client with an already issued access token.
    ///
    /// # Errors
    ///
    /// Returns [`VkError::Transport`] if the HTTP transport cannot be built.
    pub fn with_access_token(config: VkConfig, token: AccessToken) -> Result<Self, VkError> {
        let mut client = Self::new(config)?;
        client.access_token = Some(token);
        Ok(client)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &VkConfig {
        &self.config
    }

    /// Returns `true` once an access token is bound.
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns the bound access token.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the permission mask, `None` until loaded by [`Client::authenticate`].
    #[must_use]
    pub const fn permissions(&self) -> Option<PermissionMask> {
        self.permissions
    }

    /// Returns the current user's ID once known.
    #[must_use]
    pub const fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    /// Builds the URL of the VK consent page for this application.
    ///
    /// See [`authorization_url`](crate::auth::oauth::authorization_url).
    #[must_use]
    pub fn authorization_url(
        &self,
        scope: PermissionMask,
        redirect_uri: Option<&str>,
        response_type: impl Into<ResponseType>,
        test_mode: bool,
    ) -> String {
        authorization_url(&self.config, scope, redirect_uri, response_type, test_mode)
    }

    /// Exchanges a one-time authorization code for an access token and binds it.
    ///
    /// The request is an unsigned GET to the token endpoint with
    /// `client_id`, `client_secret`, `redirect_uri` and `code`.
    ///
    /// # Errors
    ///
    /// - [`AuthorizationError::AlreadyAuthorized`] if a token is already bound,
    ///   including one passed to [`Client::with_access_token`]; nothing is sent
    /// - [`AuthorizationError::TokenRejected`] if the endpoint returns `error`
    /// - [`VkError::Protocol`] or [`VkError::Transport`] otherwise
    pub fn exchange_code_for_token(
        &mut self,
        code: &str,
        redirect_uri: Option<&str>,
    ) -> Result<TokenResponse, VkError> {
        if self.is_authorized() {
            return Err(AuthorizationError::AlreadyAuthorized.into());
        }

        let url = self.config.oauth_base_url().join(ACCESS_TOKEN_PATH);
        let request = HttpRequest::builder(HttpMethod::Get, url)
            .params(token_request_params(&self.config, code, redirect_uri))
            .build();

        tracing::debug!("Exchanging authorization code for access token");
        let response = self.http_client.request(&request)?;
        let token = parse_token_response(&response)?;

        self.access_token = Some(token.access_token.clone());
        if token.user_id.is_some() {
            self.user_id = token.user_id;
        }
        tracing::debug!(user_id = ?token.user_id, "Access token bound");

        Ok(token)
    }

    /// Resolves the current user and loads the permission mask.
    ///
    /// Calls `users.get` and then `account.getAppPermissions`. Runs at most
    /// once; later calls return the cached mask without network traffic.
    ///
    /// # Errors
    ///
    /// - [`AuthorizationError::NotAuthorized`] if no token is bound
    /// - [`ProtocolError::MissingField`] if the user ID or the mask is absent
    /// - any error from the two method calls
    pub fn authenticate(&mut self) -> Result<PermissionMask, VkError> {
        if let Some(mask) = self.permissions {
            return Ok(mask);
        }
        check(None, None, self.is_authorized())?;

        let users = self.execute_method("users.get", Params::new())?;
        let user = users.get(0).unwrap_or(&users);
        let user_id = user
            .get("id")
            .or_else(|| user.get("uid"))
            .and_then(Value::as_i64)
            .ok_or(ProtocolError::MissingField { field: "id" })?;

        let bits = self
            .execute_method(
                "account.getAppPermissions",
                Params::new().with("user_id", user_id),
            )?
            .as_u64()
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or(ProtocolError::MissingField { field: "response" })?;
        let mask = PermissionMask::from_bits(bits);

        tracing::debug!(user_id, permissions = mask.bits(), "Client authenticated");
        self.user_id = Some(user_id);
        self.permissions = Some(mask);
        Ok(mask)
    }

    /// Releases the connection handle.
    ///
    /// Dropping the client has the same effect.
    pub fn close(self) {
        tracing::debug!("Closing VK API client");
        drop(self);
    }

    /// `users.*` methods.
    #[must_use]
    pub const fn users(&self) -> Users<'_, Self> {
        Users::new(self)
    }

    /// `account.*` methods.
    #[must_use]
    pub const fn account(&self) -> Account<'_, Self> {
        Account::new(self)
    }

    /// `groups.*` methods.
    #[must_use]
    pub const fn groups(&self) -> Groups<'_, Self> {
        Groups::new(self)
    }

    /// `docs.*` methods.
    #[must_use]
    pub const fn docs(&self) -> Documents<'_, Self> {
        Documents::new(self)
    }

    /// `storage.*` methods.
    #[must_use]
    pub const fn storage(&self) -> Storage<'_, Self> {
        Storage::new(self)
    }
}

impl MethodExecutor for Client {
    fn execute(&self, call: MethodCall) -> Result<ApiResponse, VkError> {
        check(
            self.permissions,
            call.required_permission(),
            self.is_authorized(),
        )?;

        let http_method = call.http_method();
        let MethodCall {
            name,
            params,
            format,
            ..
        } = call;

        let url = self
            .config
            .api_base_url()
            .join(&format!("{name}.{}", format.wire_format().extension()));
        let signed = RequestSigner::new(&self.config, self.access_token.as_ref()).sign(params);

        tracing::debug!(method = %name, http_method = %http_method, "Dispatching VK API method");

        let request = HttpRequest::builder(http_method, url)
            .params(signed.params().to_wire_pairs())
            .build();
        let response = self.http_client.request(&request)?;

        decode(&response, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApplicationId, ApplicationSecret};

    fn create_test_config() -> VkConfig {
        VkConfig::builder()
            .application_id(ApplicationId::new("42").unwrap())
            .secret(ApplicationSecret::new("secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_client_is_unauthorized() {
        let client = Client::new(create_test_config()).unwrap();
        assert!(!client.is_authorized());
        assert!(client.permissions().is_none());
        assert!(client.user_id().is_none());
    }

    #[test]
    fn test_with_access_token_is_authorized_but_unloaded() {
        let client =
            Client::with_access_token(create_test_config(), AccessToken::new("tok").unwrap())
                .unwrap();
        assert!(client.is_authorized());
        assert!(client.permissions().is_none());
    }

    #[test]
    fn test_execute_without_token_fails_before_dispatch() {
        let client = Client::new(create_test_config()).unwrap();
        let result = client.execute_method("users.get", Params::new());
        assert!(matches!(
            result,
            Err(VkError::Authorization(AuthorizationError::NotAuthorized))
        ));
    }

    #[test]
    fn test_permission_gated_call_requires_loaded_mask() {
        let client =
            Client::with_access_token(create_test_config(), AccessToken::new("tok").unwrap())
                .unwrap();
        let result = client.execute(MethodCall::new("groups.get").requires(PermissionMask::GROUPS));
        assert!(matches!(
            result,
            Err(VkError::Authorization(AuthorizationError::PermissionsNotLoaded))
        ));
    }

    #[test]
    fn test_exchange_refused_when_token_bound() {
        let mut client =
            Client::with_access_token(create_test_config(), AccessToken::new("tok").unwrap())
                .unwrap();
        let result = client.exchange_code_for_token("code", None);
        assert!(matches!(
            result,
            Err(VkError::Authorization(AuthorizationError::AlreadyAuthorized))
        ));
    }

    #[test]
    fn test_authenticate_without_token_is_refused() {
        let mut client = Client::new(create_test_config()).unwrap();
        assert!(matches!(
            client.authenticate(),
            Err(VkError::Authorization(AuthorizationError::NotAuthorized))
        ));
    }

    #[test]
    fn test_batch_method_is_always_post() {
        assert_eq!(MethodCall::new(BATCH_METHOD).http_method(), HttpMethod::Post);
        assert_eq!(MethodCall::new("users.get").http_method(), HttpMethod::Get);
        assert_eq!(MethodCall::new("users.get").post().http_method(), HttpMethod::Post);
    }

    #[test]
    fn test_authorization_url_delegates_to_config() {
        let client = Client::new(create_test_config()).unwrap();
        let url = client.authorization_url(PermissionMask::FRIENDS, None, "token", false);
        assert!(url.contains("client_id=42"));
        assert!(url.contains("response_type=token"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client =
            Client::with_access_token(create_test_config(), AccessToken::new("sekrit").unwrap())
                .unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("sekrit"));
    }
}
