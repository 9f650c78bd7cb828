//! `docs.*` methods.

use serde_json::Value;

use super::fields::id_list;
use crate::clients::{ApiResponse, MethodCall, MethodExecutor, Params};
use crate::error::VkError;

/// Document methods. Every call requires a bound token.
#[derive(Debug)]
pub struct Documents<'a, E: MethodExecutor + ?Sized> {
    executor: &'a E,
}

impl<'a, E: MethodExecutor + ?Sized> Documents<'a, E> {
    /// Wraps an executor.
    #[must_use]
    pub const fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    fn call(&self, method: &str, params: Params) -> Result<Value, VkError> {
        self.executor
            .execute(MethodCall::new(format!("docs.{method}")).params(params))
            .map(ApiResponse::into_value)
    }

    /// `docs.get`: documents of a user or community.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get(&self, owner_id: i64, count: u32, offset: u32) -> Result<Value, VkError> {
        self.call(
            "get",
            Params::new()
                .with("owner_id", owner_id)
                .with("offset", offset)
                .with("count", count),
        )
    }

    /// `docs.getById`. Identifiers take the `{owner_id}_{doc_id}` form.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_by_id<I: ToString>(&self, docs: &[I]) -> Result<Value, VkError> {
        self.call("getById", Params::new().with("docs", id_list(docs)))
    }

    /// `docs.getUploadServer`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call fails.
    pub fn get_upload_server(&self, group_id: i64) -> Result<Value, VkError> {
        self.call("getUploadServer", Params::new().with("group_id", group_id))
    }
}
