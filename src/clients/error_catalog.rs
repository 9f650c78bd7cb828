//! Static catalog of VK API error codes.
//!
//! [`ErrorCatalog::lookup`] maps a numeric code to a human-readable title and
//! a remediation hint. Codes missing from the table resolve to the entry for
//! code `1`.

/// Title and remediation hint for one error code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorDescription {
    /// Short title.
    pub title: &'static str,
    /// What the caller can do about it. May be empty.
    pub description: &'static str,
}

const fn entry(title: &'static str, description: &'static str) -> ErrorDescription {
    ErrorDescription { title, description }
}

/// Code used when a lookup misses.
pub const UNKNOWN_ERROR_CODE: i64 = 1;

static ENTRIES: &[(i64, ErrorDescription)] = &[
    (1, entry("Unknown error occurred", "Try again later.")),
    (2, entry(
        "Application is disabled. Enable your application or use test mode",
        "You need to switch on the app in Settings (https://vk.com/editapp?id={Your API_ID}) or use the test mode (test_mode=1).",
    )),
    (3, entry(
        "Unknown method passed",
        "Check the method name: http://vk.com/dev/methods",
    )),
    (4, entry(
        "Incorrect signature",
        "Check if the signature has been formed correctly: https://vk.com/dev/api_nohttps",
    )),
    (5, entry(
        "User authorization failed",
        "Make sure that you use a correct authorization type. To work with the methods without a secure prefix you need to authorize a user with one of these ways: http://vk.com/dev/auth_sites, http://vk.com/dev/auth_mobile.",
    )),
    (6, entry(
        "Too many requests per second",
        "Decrease the request frequency or use the execute method. More details on frequency limits here: http://vk.com/dev/api_requests",
    )),
    (7, entry(
        "Permission to perform this action is denied",
        "Make sure that your have received required permissions during the authorization. You can do it with the account.getAppPermissions method.",
    )),
    (8, entry(
        "Invalid request",
        "Check the request syntax and used parameters list (it can be found on a method description page).",
    )),
    (9, entry(
        "Flood control",
        "You need to decrease the count of identical requests. For more efficient work you may use execute or JSONP.",
    )),
    (10, entry("Internal server error", "Try again later.")),
    (11, entry(
        "In test mode application should be disabled or user should be authorized",
        "Switch the app off in Settings: https://vk.com/editapp?id={Your API_ID}.",
    )),
    (14, entry(
        "Captcha needed",
        "Work with this error is explained in detail on a separate page: https://vk.com/dev/need_confirmation",
    )),
    (15, entry(
        "Access denied",
        "Make sure that you use correct identifiers and the content is available for the user in the full version of the site.",
    )),
    (16, entry(
        "HTTP authorization failed",
        "To avoid this error check if a user has the 'Use secure connection' option enabled with the account.getInfo method.",
    )),
    (17, entry(
        "Validation required",
        "Make sure that you don't use a token received with http://vk.com/dev/auth_mobile for a request from the server. It's restricted. The validation process is described on a separate page: https://vk.com/dev/need_confirmation",
    )),
    (20, entry(
        "Permission to perform this action is denied for non-standalone applications",
        "If you see this error despite your app has the Standalone type, make sure that you use redirect_uri=https://oauth.vk.com/blank.html. Details here: http://vk.com/dev/auth_mobile.",
    )),
    (21, entry(
        "Permission to perform this action is allowed only for Standalone and OpenAPI applications",
        "",
    )),
    (23, entry(
        "This method was disabled",
        "All the methods available now are listed here: http://vk.com/dev/methods",
    )),
    (24, entry(
        "Confirmation required",
        "Confirmation process is described on a separate page: https://vk.com/dev/need_confirmation",
    )),
    (100, entry(
        "One of the parameters specified was missing or invalid",
        "Check the required parameters list and their format on a method description page.",
    )),
    (101, entry(
        "Invalid application API ID",
        "Find the app in the administrated list in settings: http://vk.com/apps?act=settings And set the correct API_ID in the request.",
    )),
    (103, entry("Out of limits", "Out of limits")),
    (104, entry("Not found", "Not found")),
    (113, entry(
        "Invalid user id",
        "Make sure that you use a correct id. You can get an id using a screen name with the utils.resolveScreenName method",
    )),
    (150, entry(
        "Invalid timestamp",
        "You may get a correct value with the utils.getServerTime method.",
    )),
    (200, entry(
        "Access to album denied",
        "Make sure you use correct ids (owner_id is always positive for users, negative for communities) and the current user has access to the requested content in the full version of the site.",
    )),
    (201, entry(
        "Access to audio denied",
        "Make sure you use correct ids (owner_id is always positive for users, negative for communities) and the current user has access to the requested content in the full version of the site.",
    )),
    (203, entry(
        "Access to group denied",
        "Make sure that the current user is a member or admin of the community (for closed and private groups and events).",
    )),
    (300, entry(
        "This album is full",
        "You need to delete the odd objects from the album or use another album.",
    )),
    (500, entry(
        "Permission denied. You must enable votes processing in application settings",
        "Check the app settings: http://vk.com/editapp?id={Your API_ID}&section=payments",
    )),
    (600, entry(
        "Permission denied. You have no access to operations specified with given object(s)",
        "",
    )),
    (603, entry("Some ads error occurred", "")),
    (1260, entry(
        "Invalid screen name",
        "This screen name is already in use or invalid",
    )),
];

/// Lookup over the fixed error table.
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorCatalog;

impl ErrorCatalog {
    /// Returns the entry for `code`, or the entry for code `1` if unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vk_api::ErrorCatalog;
    ///
    /// assert_eq!(ErrorCatalog::lookup(6).title, "Too many requests per second");
    /// assert_eq!(ErrorCatalog::lookup(9999), ErrorCatalog::lookup(1));
    /// ```
    #[must_use]
    pub fn lookup(code: i64) -> ErrorDescription {
        Self::get(code)
            .or_else(|| Self::get(UNKNOWN_ERROR_CODE))
            .unwrap_or(entry("Unknown error occurred", "Try again later."))
    }

    /// Returns the entry for `code` without falling back.
    #[must_use]
    pub fn get(code: i64) -> Option<ErrorDescription> {
        ENTRIES
            .binary_search_by_key(&code, |(c, _)| *c)
            .ok()
            .map(|index| ENTRIES[index].1)
    }

    /// Returns every known code in ascending order.
    pub fn codes() -> impl Iterator<Item = i64> {
        ENTRIES.iter().map(|(code, _)| *code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        let codes: Vec<i64> = ErrorCatalog::codes().collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_known_codes_resolve() {
        assert_eq!(ErrorCatalog::lookup(5).title, "User authorization failed");
        assert_eq!(ErrorCatalog::lookup(9).title, "Flood control");
        assert_eq!(
            ErrorCatalog::lookup(1260).description,
            "This screen name is already in use or invalid"
        );
    }

    #[test]
    fn test_unknown_code_falls_back_to_code_one() {
        assert_eq!(ErrorCatalog::lookup(9999), ErrorCatalog::lookup(1));
        assert_eq!(ErrorCatalog::lookup(-3), ErrorCatalog::lookup(1));
        assert!(ErrorCatalog::get(9999).is_none());
    }

    #[test]
    fn test_titles_have_no_trailing_whitespace_or_markup() {
        for code in ErrorCatalog::codes() {
            let entry = ErrorCatalog::lookup(code);
            assert_eq!(entry.title, entry.title.trim(), "code {code}");
            assert!(!entry.description.contains("<a"), "code {code}");
        }
    }
}
