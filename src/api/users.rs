//! `users.*` methods.

use serde_json::Value;

use super::fields::{id_list, in_range_or, sanitized_list, NameCase, USER_FIELDS};
use crate::clients::{MethodCall, MethodExecutor, Params};
use crate::error::VkError;

/// Default `timeout` for [`Users::get_nearby`], in seconds.
pub const DEFAULT_NEARBY_TIMEOUT: i64 = 7200;

/// User profile methods. Every call requires a bound token.
///
/// # Example
///
/// ```rust,no_run
/// use vk_api::api::{NameCase, USER_STANDARD_FIELDS};
/// # fn run(client: &vk_api::Client) -> Result<(), vk_api::VkError> {
/// let profiles = client.users().get(&[1, 2], USER_STANDARD_FIELDS, NameCase::Genitive)?;
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Users<'a, E: MethodExecutor + ?Sized> {
    executor: &'a E,
}

impl<'a, E: MethodExecutor + ?Sized> Users<'a, E> {
    /// Wraps an executor.
    #[must_use]
    pub const fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    fn call(&self, method: &str, params: Params) -> Result<Value, VkError> {
        self.executor
            .execute(MethodCall::new(format!("users.{method}")).params(params))
            .map(crate::clients::ApiResponse::into_value)
    }

    /// `users.get`: profiles for the given IDs or screen names.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get<I: ToString>(
        &self,
        user_ids: &[I],
        fields: &[&str],
        name_case: NameCase,
    ) -> Result<Value, VkError> {
        self.call(
            "get",
            Params::new()
                .with("user_ids", id_list(user_ids))
                .with("fields", sanitized_list(fields, USER_FIELDS))
                .with("name_case", name_case.as_str()),
        )
    }

    /// `users.search`.
    ///
    /// `sort` is `0` (popularity) or `1` (registration date); other values
    /// become `0`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn search(
        &self,
        query: &str,
        online_only: bool,
        fields: &[&str],
        sort: u8,
        count: u32,
    ) -> Result<Value, VkError> {
        self.call(
            "search",
            Params::new()
                .with("q", query)
                .with("sort", in_range_or(sort, 0, 1, 0))
                .with("count", count)
                .with("fields", sanitized_list(fields, USER_FIELDS))
                .with("online", online_only),
        )
    }

    /// `users.isAppUser`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn is_app_user(&self, user_id: i64) -> Result<Value, VkError> {
        self.call("isAppUser", Params::new().with("user_id", user_id))
    }

    /// `users.getSubscriptions`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_subscriptions(
        &self,
        user_id: i64,
        extended: bool,
        fields: &[&str],
        count: u32,
    ) -> Result<Value, VkError> {
        self.call(
            "getSubscriptions",
            Params::new()
                .with("user_id", user_id)
                .with("extended", extended)
                .with("count", count)
                .with("fields", sanitized_list(fields, USER_FIELDS)),
        )
    }

    /// `users.getFollowers`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_followers(
        &self,
        user_id: i64,
        offset: u32,
        count: u32,
        fields: &[&str],
        name_case: NameCase,
    ) -> Result<Value, VkError> {
        self.call(
            "getFollowers",
            Params::new()
                .with("user_id", user_id)
                .with("offset", offset)
                .with("count", count)
                .with("fields", sanitized_list(fields, USER_FIELDS))
                .with("name_case", name_case.as_str()),
        )
    }

    /// `users.getNearby`.
    ///
    /// A negative `timeout` becomes [`DEFAULT_NEARBY_TIMEOUT`]; a `radius`
    /// outside `1..=4` becomes `1`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        timeout: i64,
        radius: i64,
        fields: &[&str],
        name_case: NameCase,
    ) -> Result<Value, VkError> {
        let timeout = if timeout < 0 {
            DEFAULT_NEARBY_TIMEOUT
        } else {
            timeout
        };

        self.call(
            "getNearby",
            Params::new()
                .with("latitude", latitude)
                .with("longitude", longitude)
                .with("timeout", timeout)
                .with("radius", in_range_or(radius, 1, 4, 1))
                .with("fields", sanitized_list(fields, USER_FIELDS))
                .with("name_case", name_case.as_str()),
        )
    }
}
