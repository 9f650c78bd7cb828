//! Typed wrappers over the VK API method families.
//!
//! Each wrapper borrows a [`MethodExecutor`](crate::clients::MethodExecutor)
//! (normally the [`Client`](crate::Client)), names the method, normalizes
//! out-of-range arguments to their documented defaults, filters field lists
//! against the fields the server knows, and returns the `response` value.
//!
//! | Wrapper | Prefix | Permission |
//! |---|---|---|
//! | [`Users`] | `users.` | none |
//! | [`Account`] | `account.` | none |
//! | [`Groups`] | `groups.` | [`GROUPS`](crate::PermissionMask::GROUPS) |
//! | [`Documents`] | `docs.` | none |
//! | [`Storage`] | `storage.` | none |
//!
//! # Example
//!
//! ```rust,no_run
//! use vk_api::api::{NameCase, USER_STANDARD_FIELDS};
//! use vk_api::{AccessToken, ApplicationId, ApplicationSecret, Client, VkConfig};
//!
//! let config = VkConfig::builder()
//!     .application_id(ApplicationId::new("42").unwrap())
//!     .secret(ApplicationSecret::new("s3cr3t").unwrap())
//!     .build()
//!     .unwrap();
//! let client = Client::with_access_token(config, AccessToken::new("token").unwrap())?;
//!
//! let durov = client.users().get(&[1], USER_STANDARD_FIELDS, NameCase::Nominative)?;
//! println!("{durov}");
//! # Ok::<(), vk_api::VkError>(())
//! ```

mod account;
mod docs;
mod fields;
mod groups;
mod storage;
mod users;

pub use account::Account;
pub use docs::Documents;
pub use fields::{
    sanitize, BanReason, GroupFilter, GroupKind, GroupType, NameCase, COUNTER_FILTERS,
    DEFAULT_COUNTER_FILTERS, FIELD_SEPARATOR, GROUP_DEFAULT_FIELDS, GROUP_FIELDS, USER_FIELDS,
    USER_STANDARD_FIELDS,
};
pub use groups::{Groups, DEFAULT_REQUESTS_COUNT};
pub use storage::{Storage, MAX_KEY_LENGTH};
pub use users::{Users, DEFAULT_NEARBY_TIMEOUT};

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use serde_json::Value;

    use crate::clients::{ApiResponse, MethodCall, MethodExecutor};
    use crate::error::VkError;

    /// Records every call and answers with `1`.
    #[derive(Default)]
    pub(crate) struct RecordingExecutor {
        calls: RefCell<Vec<MethodCall>>,
    }

    impl RecordingExecutor {
        pub(crate) fn last_call(&self) -> MethodCall {
            self.calls
                .borrow()
                .last()
                .cloned()
                .expect("no call was recorded")
        }

        /// Wire value of `key` in the last call.
        pub(crate) fn param(&self, key: &str) -> String {
            self.last_call()
                .parameters()
                .get(key)
                .unwrap_or_else(|| panic!("parameter '{key}' was not sent"))
                .to_wire()
        }
    }

    impl MethodExecutor for RecordingExecutor {
        fn execute(&self, call: MethodCall) -> Result<ApiResponse, VkError> {
            self.calls.borrow_mut().push(call);
            Ok(ApiResponse::Structured(Value::from(1)))
        }
    }
}
