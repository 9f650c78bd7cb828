//! `storage.*` methods: the per-application key/value store.

use serde_json::Value;

use super::fields::{id_list, in_range_or};
use crate::clients::{ApiResponse, MethodCall, MethodExecutor, Params};
use crate::error::VkError;

/// Longest key the store accepts, in characters.
pub const MAX_KEY_LENGTH: usize = 100;

/// Application storage methods. Every call requires a bound token.
///
/// Keys longer than [`MAX_KEY_LENGTH`] characters are truncated.
#[derive(Debug)]
pub struct Storage<'a, E: MethodExecutor + ?Sized> {
    executor: &'a E,
}

fn truncate_key(key: &str) -> String {
    key.chars().take(MAX_KEY_LENGTH).collect()
}

impl<'a, E: MethodExecutor + ?Sized> Storage<'a, E> {
    /// Wraps an executor.
    #[must_use]
    pub const fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    fn call(&self, method: &str, params: Params) -> Result<Value, VkError> {
        self.executor
            .execute(MethodCall::new(format!("storage.{method}")).params(params))
            .map(ApiResponse::into_value)
    }

    /// `storage.get` for one key, several keys, or both.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get(
        &self,
        key: Option<&str>,
        keys: &[&str],
        user_id: Option<i64>,
        global: bool,
    ) -> Result<Value, VkError> {
        let keys = (!keys.is_empty())
            .then(|| keys.iter().map(|k| truncate_key(k)).collect::<Vec<_>>())
            .map(|keys| id_list(&keys));

        self.call(
            "get",
            Params::new()
                .with_opt("key", key.map(truncate_key))
                .with_opt("keys", keys)
                .with_opt("user_id", user_id)
                .with("global", global),
        )
    }

    /// `storage.set`. An empty `value` deletes the key.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn set(
        &self,
        key: &str,
        value: &str,
        user_id: Option<i64>,
        global: bool,
    ) -> Result<Value, VkError> {
        self.call(
            "set",
            Params::new()
                .with("key", truncate_key(key))
                .with("value", value)
                .with_opt("user_id", user_id)
                .with("global", global),
        )
    }

    /// `storage.getKeys`. A `count` above 1000 becomes 100.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_keys(
        &self,
        user_id: Option<i64>,
        global: bool,
        offset: u32,
        count: u32,
    ) -> Result<Value, VkError> {
        self.call(
            "getKeys",
            Params::new()
                .with_opt("user_id", user_id)
                .with("global", global)
                .with("offset", offset)
                .with("count", in_range_or(count, 0, 1000, 100)),
        )
    }
}
