//! `account.*` methods.

use serde_json::Value;

use super::fields::{in_range_or, sanitized_list, COUNTER_FILTERS};
use crate::clients::{ApiResponse, MethodCall, MethodExecutor, Params};
use crate::error::VkError;

/// Current-account methods. Every call requires a bound token.
#[derive(Debug)]
pub struct Account<'a, E: MethodExecutor + ?Sized> {
    executor: &'a E,
}

impl<'a, E: MethodExecutor + ?Sized> Account<'a, E> {
    /// Wraps an executor.
    #[must_use]
    pub const fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    fn call(&self, method: &str, params: Params) -> Result<Value, VkError> {
        self.executor
            .execute(MethodCall::new(format!("account.{method}")).params(params))
            .map(ApiResponse::into_value)
    }

    /// `account.getCounters` for the given filters.
    ///
    /// Pass [`DEFAULT_COUNTER_FILTERS`](super::DEFAULT_COUNTER_FILTERS) for
    /// the usual set.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_counters(&self, filters: &[&str]) -> Result<Value, VkError> {
        self.call(
            "getCounters",
            Params::new().with("filter", sanitized_list(filters, COUNTER_FILTERS)),
        )
    }

    /// `account.setNameInMenu`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn set_name_in_menu(&self, user_id: i64, name: &str) -> Result<Value, VkError> {
        self.call(
            "setNameInMenu",
            Params::new().with("user_id", user_id).with("name", name),
        )
    }

    /// `account.setOnline` with `voip=1`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn set_online(&self) -> Result<Value, VkError> {
        self.call("setOnline", Params::new().with("voip", 1))
    }

    /// `account.setOffline`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn set_offline(&self) -> Result<Value, VkError> {
        self.call("setOffline", Params::new())
    }

    /// `account.getActiveOffers`. A `count` above 100 becomes 100.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_active_offers(&self, offset: u32, count: u32) -> Result<Value, VkError> {
        self.call(
            "getActiveOffers",
            Params::new()
                .with("offset", offset)
                .with("count", in_range_or(count, 0, 100, 100)),
        )
    }

    /// `account.getAppPermissions`: the permission bits granted by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_app_permissions(&self, user_id: i64) -> Result<Value, VkError> {
        self.call("getAppPermissions", Params::new().with("user_id", user_id))
    }
}
