//! `groups.*` methods.
//!
//! Every call requires [`PermissionMask::GROUPS`]. Until
//! [`Client::authenticate`](crate::Client::authenticate) has loaded the mask,
//! calls fail with
//! [`AuthorizationError::PermissionsNotLoaded`](crate::auth::AuthorizationError::PermissionsNotLoaded).

use chrono::Utc;
use serde_json::Value;

use super::fields::{
    id_list, in_range_or, sanitized_list, BanReason, GroupFilter, GroupKind, GroupType,
    GROUP_FIELDS,
};
use crate::auth::PermissionMask;
use crate::clients::{ApiResponse, MethodCall, MethodExecutor, Params};
use crate::error::VkError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Default page size for [`Groups::get_requests`].
pub const DEFAULT_REQUESTS_COUNT: u32 = 20;

/// Community methods.
///
/// # Example
///
/// ```rust,no_run
/// use vk_api::api::{GroupFilter, GROUP_DEFAULT_FIELDS};
/// # fn run(client: &mut vk_api::Client) -> Result<(), vk_api::VkError> {
/// client.authenticate()?;
/// let mine = client
///     .groups()
///     .get(1, true, Some(GroupFilter::Admin), GROUP_DEFAULT_FIELDS)?;
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Groups<'a, E: MethodExecutor + ?Sized> {
    executor: &'a E,
}

/// Midnight (UTC) seven days from now, as a Unix timestamp.
fn one_week_from_today() -> i64 {
    let now = Utc::now().timestamp();
    now - now.rem_euclid(SECONDS_PER_DAY) + 7 * SECONDS_PER_DAY
}

impl<'a, E: MethodExecutor + ?Sized> Groups<'a, E> {
    /// Wraps an executor.
    #[must_use]
    pub const fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    fn call(&self, method: &str, params: Params) -> Result<Value, VkError> {
        self.executor
            .execute(
                MethodCall::new(format!("groups.{method}"))
                    .params(params)
                    .requires(PermissionMask::GROUPS),
            )
            .map(ApiResponse::into_value)
    }

    fn group_and_user(&self, method: &str, group_id: i64, user_id: i64) -> Result<Value, VkError> {
        self.call(
            method,
            Params::new()
                .with("group_id", group_id)
                .with("user_id", user_id),
        )
    }

    /// `groups.isMember`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn is_member(&self, group_id: i64, user_id: i64, extended: bool) -> Result<Value, VkError> {
        self.call(
            "isMember",
            Params::new()
                .with("group_id", group_id)
                .with("user_id", user_id)
                .with("extended", extended),
        )
    }

    /// `groups.getById`. A single ID is sent as `group_id`, several as
    /// `group_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn get_by_id<I: ToString>(&self, group_ids: &[I], fields: &[&str]) -> Result<Value, VkError> {
        let params = match group_ids {
            [single] => Params::new().with("group_id", single.to_string()),
            many => Params::new().with("group_ids", id_list(many)),
        };
        self.call(
            "getById",
            params.with("fields", sanitized_list(fields, GROUP_FIELDS)),
        )
    }

    /// `groups.get`: communities the user belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn get(
        &self,
        user_id: i64,
        extended: bool,
        filter: Option<GroupFilter>,
        fields: &[&str],
    ) -> Result<Value, VkError> {
        self.call(
            "get",
            Params::new()
                .with("user_id", user_id)
                .with("extended", extended)
                .with("fields", sanitized_list(fields, GROUP_FIELDS))
                .with_opt("filter", filter.map(GroupFilter::as_str)),
        )
    }

    /// `groups.getMembers`.
    ///
    /// Pass [`USER_STANDARD_FIELDS`](super::USER_STANDARD_FIELDS) for the
    /// usual profile fields.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn get_members(&self, group_id: i64, fields: &[&str]) -> Result<Value, VkError> {
        self.call(
            "getMembers",
            Params::new()
                .with("group_id", group_id)
                .with("fields", id_list(fields)),
        )
    }

    /// `groups.join`. `not_sure` only applies to events.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn join(&self, group_id: i64, not_sure: Option<bool>) -> Result<Value, VkError> {
        self.call(
            "join",
            Params::new()
                .with("group_id", group_id)
                .with_opt("not_sure", not_sure),
        )
    }

    /// `groups.leave`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn leave(&self, group_id: i64) -> Result<Value, VkError> {
        self.call("leave", Params::new().with("group_id", group_id))
    }

    /// `groups.search`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn search(&self, query: &str, group_type: Option<GroupType>) -> Result<Value, VkError> {
        self.call(
            "search",
            Params::new()
                .with("q", query)
                .with_opt("type", group_type.map(GroupType::as_str)),
        )
    }

    /// `groups.getInvites`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn get_invites(&self, extended: bool) -> Result<Value, VkError> {
        self.call("getInvites", Params::new().with("extended", extended))
    }

    /// `groups.getInvitedUsers`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn get_invited_users(&self, group_id: i64, fields: &[&str]) -> Result<Value, VkError> {
        self.call(
            "getInvitedUsers",
            Params::new()
                .with("group_id", group_id)
                .with("fields", id_list(fields)),
        )
    }

    /// `groups.banUser`.
    ///
    /// Without `end_date` the ban lasts until midnight UTC one week from
    /// today.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn ban_user(
        &self,
        group_id: i64,
        user_id: i64,
        reason: BanReason,
        comment: &str,
        end_date: Option<i64>,
        comment_visible: bool,
    ) -> Result<Value, VkError> {
        self.call(
            "banUser",
            Params::new()
                .with("group_id", group_id)
                .with("user_id", user_id)
                .with("reason", reason.code())
                .with("comment", comment)
                .with("end_date", end_date.unwrap_or_else(one_week_from_today))
                .with("comment_visible", comment_visible),
        )
    }

    /// `groups.unbanUser`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn unban_user(&self, group_id: i64, user_id: i64) -> Result<Value, VkError> {
        self.group_and_user("unbanUser", group_id, user_id)
    }

    /// `groups.getBanned`. Needs moderator rights in the community.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn get_banned(&self, group_id: i64) -> Result<Value, VkError> {
        self.call("getBanned", Params::new().with("group_id", group_id))
    }

    /// `groups.create`.
    ///
    /// Public pages are created without a description. A `subtype` outside
    /// `1..=4` becomes `2`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn create(
        &self,
        title: &str,
        description: &str,
        kind: GroupKind,
        subtype: Option<i64>,
    ) -> Result<Value, VkError> {
        let description = (kind != GroupKind::Public).then_some(description);
        self.call(
            "create",
            Params::new()
                .with("title", title)
                .with("type", kind.as_str())
                .with_opt("description", description)
                .with_opt("subtype", subtype.map(|s| in_range_or(s, 1, 4, 2))),
        )
    }

    /// `groups.edit`.
    ///
    /// `access` outside `0..=2` becomes `1`; `subject` outside `1..=42`
    /// becomes `26`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    #[allow(clippy::too_many_arguments)]
    pub fn edit(
        &self,
        group_id: i64,
        title: &str,
        description: &str,
        screen_name: &str,
        access: i64,
        website: &str,
        subject: i64,
    ) -> Result<Value, VkError> {
        self.call(
            "edit",
            Params::new()
                .with("group_id", group_id)
                .with("title", title)
                .with("description", description)
                .with("screen_name", screen_name)
                .with("access", in_range_or(access, 0, 2, 1))
                .with("website", website)
                .with("subject", in_range_or(subject, 1, 42, 26)),
        )
    }

    /// `groups.getSettings`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn get_settings(&self, group_id: i64) -> Result<Value, VkError> {
        self.call("getSettings", Params::new().with("group_id", group_id))
    }

    /// `groups.getRequests`: pending join requests.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn get_requests(&self, group_id: i64, fields: &[&str], count: u32) -> Result<Value, VkError> {
        self.call(
            "getRequests",
            Params::new()
                .with("group_id", group_id)
                .with("fields", id_list(fields))
                .with("count", count),
        )
    }

    /// `groups.invite`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn invite(&self, group_id: i64, user_id: i64) -> Result<Value, VkError> {
        self.group_and_user("invite", group_id, user_id)
    }

    /// `groups.removeUser`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn remove_user(&self, group_id: i64, user_id: i64) -> Result<Value, VkError> {
        self.group_and_user("removeUser", group_id, user_id)
    }

    /// `groups.approveRequest`.
    ///
    /// # Errors
    ///
    /// Returns [`VkError`] if the call is refused or fails.
    pub fn approve_request(&self, group_id: i64, user_id: i64) -> Result<Value, VkError> {
        self.group_and_user("approveRequest", group_id, user_id)
    }
}
