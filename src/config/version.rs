//! VK API version definitions.
//!
//! This module provides the [`ApiVersion`] type for pinning requests to a
//! specific version of the VK API via the `v` parameter.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// VK API version in `MAJOR.MINOR` form (e.g. `5.131`).
///
/// When no version is configured the `v` parameter is omitted and the server
/// applies its own default.
///
/// # Example
///
/// ```rust
/// use vk_api::ApiVersion;
///
/// let version: ApiVersion = "5.131".parse().unwrap();
/// assert_eq!(version.major(), 5);
/// assert_eq!(version.minor(), 131);
/// assert_eq!(version.to_string(), "5.131");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    major: u16,
    minor: u16,
}

impl ApiVersion {
    /// Creates a version from its components.
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Returns the major component.
    #[must_use]
    pub const fn major(&self) -> u16 {
        self.major
    }

    /// Returns the minor component.
    #[must_use]
    pub const fn minor(&self) -> u16 {
        self.minor
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidApiVersion {
            version: s.to_string(),
        };

        let (major, minor) = s.trim().split_once('.').ok_or_else(invalid)?;
        if major.is_empty()
            || minor.is_empty()
            || !major.chars().all(|c| c.is_ascii_digit())
            || !minor.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}
