//! Application permission handling for the VK API.
//!
//! This module provides the [`PermissionMask`] bit-set and the [`check`]
//! gate that every dispatched method call passes through.

use crate::auth::AuthorizationError;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// A set of VK application permissions.
///
/// The value mirrors the integer returned by `account.getAppPermissions` and
/// accepted by the `scope` parameter of the authorization URL. Each named
/// constant is a distinct power of two.
///
/// # Serialization
///
/// Serializes as the raw integer.
///
/// # Example
///
/// ```rust
/// use vk_api::PermissionMask;
///
/// let mask = PermissionMask::FRIENDS | PermissionMask::GROUPS;
/// assert!(mask.intersects(PermissionMask::GROUPS));
/// assert!(!mask.intersects(PermissionMask::PHOTOS));
/// assert_eq!(mask.to_string(), "friends,groups");
///
/// let parsed: PermissionMask = "friends,groups".parse().unwrap();
/// assert_eq!(parsed, mask);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMask(u32);

impl PermissionMask {
    /// User allowed the application to send notifications.
    pub const NOTIFY: Self = Self(1);
    /// Access to friends.
    pub const FRIENDS: Self = Self(2);
    /// Access to photos.
    pub const PHOTOS: Self = Self(4);
    /// Access to audio.
    pub const AUDIO: Self = Self(8);
    /// Access to video.
    pub const VIDEO: Self = Self(16);
    /// Access to offers.
    pub const OFFERS: Self = Self(32);
    /// Access to questions.
    pub const QUESTIONS: Self = Self(64);
    /// Access to wiki pages.
    pub const PAGES: Self = Self(128);
    /// Application link in the left menu.
    pub const LINK: Self = Self(256);
    /// Access to the user status.
    pub const STATUS: Self = Self(1024);
    /// Access to notes.
    pub const NOTES: Self = Self(2048);
    /// Access to messages.
    pub const MESSAGES: Self = Self(4096);
    /// Access to the wall.
    pub const WALL: Self = Self(8192);
    /// Access to the advertising API.
    pub const ADS: Self = Self(32768);
    /// Access to documents.
    pub const DOCS: Self = Self(131_072);
    /// Access to communities.
    pub const GROUPS: Self = Self(262_144);
    /// Access to notifications about answers.
    pub const NOTIFICATIONS: Self = Self(524_288);
    /// Access to statistics.
    pub const STATS: Self = Self(1_048_576);
    /// Access to the email address.
    pub const EMAIL: Self = Self(4_194_304);

    /// Every named permission with its scope name, ordered by bit value.
    pub const NAMED: &'static [(&'static str, Self)] = &[
        ("notify", Self::NOTIFY),
        ("friends", Self::FRIENDS),
        ("photos", Self::PHOTOS),
        ("audio", Self::AUDIO),
        ("video", Self::VIDEO),
        ("offers", Self::OFFERS),
        ("questions", Self::QUESTIONS),
        ("pages", Self::PAGES),
        ("link", Self::LINK),
        ("status", Self::STATUS),
        ("notes", Self::NOTES),
        ("messages", Self::MESSAGES),
        ("wall", Self::WALL),
        ("ads", Self::ADS),
        ("docs", Self::DOCS),
        ("groups", Self::GROUPS),
        ("notifications", Self::NOTIFICATIONS),
        ("stats", Self::STATS),
        ("email", Self::EMAIL),
    ];

    /// Creates an empty mask.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a mask from raw bits, keeping unknown bits as-is.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if `self & other` is non-zero.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns an iterator over the scope names of the named bits in this mask.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .iter()
            .filter(move |(_, bit)| self.contains(*bit))
            .map(|(name, _)| *name)
    }
}

impl BitOr for PermissionMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PermissionMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PermissionMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for PermissionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        write!(f, "{}", names.join(","))
    }
}

impl FromStr for PermissionMask {
    type Err = ConfigError;

    /// Parses either a raw integer (`"262146"`) or a comma-separated list of
    /// scope names (`"friends, groups"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(bits) = s.parse::<u32>() {
            return Ok(Self(bits));
        }

        let mut mask = Self::empty();
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let bit = Self::NAMED
                .iter()
                .find(|(known, _)| *known == name)
                .map(|(_, bit)| *bit)
                .ok_or_else(|| ConfigError::InvalidPermission {
                    name: name.to_string(),
                })?;
            mask |= bit;
        }
        Ok(mask)
    }
}

impl From<u32> for PermissionMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

/// Gates a method call on the bound token and the permission mask.
///
/// * `mask` - the client's mask, `None` while it has not been loaded
/// * `required` - the permission the call needs, if any
/// * `authorized` - whether an access token is bound
///
/// # Errors
///
/// - [`AuthorizationError::PermissionsNotLoaded`] if `required` is set but the
///   mask has not been loaded
/// - [`AuthorizationError::InsufficientPermissions`] if `mask & required` is zero
/// - [`AuthorizationError::NotAuthorized`] if no token is bound
///
/// # Example
///
/// ```rust
/// use vk_api::auth::{check, AuthorizationError};
/// use vk_api::PermissionMask;
///
/// let mask = Some(PermissionMask::from_bits(0b0010));
/// assert!(check(mask, Some(PermissionMask::from_bits(0b0010)), true).is_ok());
/// assert!(matches!(
///     check(Some(PermissionMask::from_bits(0b0001)), Some(PermissionMask::from_bits(0b0010)), true),
///     Err(AuthorizationError::InsufficientPermissions { .. })
/// ));
/// ```
pub fn check(
    mask: Option<PermissionMask>,
    required: Option<PermissionMask>,
    authorized: bool,
) -> Result<(), AuthorizationError> {
    if let Some(required) = required {
        let mask = mask.ok_or(AuthorizationError::PermissionsNotLoaded)?;
        if !mask.intersects(required) {
            return Err(AuthorizationError::InsufficientPermissions { required, granted: mask });
        }
    }

    if !authorized {
        return Err(AuthorizationError::NotAuthorized);
    }

    Ok(())
}
