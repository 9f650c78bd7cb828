//! Allow-lists and closed value sets used by the resource wrappers.
//!
//! Caller-supplied field and filter names pass through [`sanitize`], which
//! silently drops names missing from the allow-list and keeps the order of
//! the rest.

/// Fields returned for a user when the caller does not ask for others.
pub const USER_STANDARD_FIELDS: &[&str] = &["sex", "online", "country", "city", "bdate"];

/// Every profile field `users.*` methods accept.
pub const USER_FIELDS: &[&str] = &[
    "photo_id",
    "verified",
    "sex",
    "bdate",
    "city",
    "country",
    "home_town",
    "has_photo",
    "photo_50",
    "photo_100",
    "photo_200_orig",
    "photo_200",
    "photo_400_orig",
    "photo_max",
    "photo_max_orig",
    "online",
    "lists",
    "domain",
    "has_mobile",
    "contacts",
    "site",
    "education",
    "universities",
    "schools",
    "status",
    "last_seen",
    "followers_count",
    "common_count",
    "occupation",
    "nickname",
    "relatives",
    "relation",
    "personal",
    "connections",
    "exports",
    "wall_comments",
    "activities",
    "interests",
    "music",
    "movies",
    "tv",
    "books",
    "games",
    "about",
    "quotes",
    "can_post",
    "can_see_all_posts",
    "can_see_audio",
    "can_write_private_message",
    "can_send_friend_request",
    "is_favorite",
    "is_hidden_from_feed",
    "timezone",
    "screen_name",
    "maiden_name",
    "crop_photo",
    "is_friend",
    "friend_status",
    "career",
    "military",
    "blacklisted",
    "blacklisted_by_me",
];

/// Fields returned for a community when the caller does not ask for others.
pub const GROUP_DEFAULT_FIELDS: &[&str] = &["description", "members_count", "status", "contacts"];

/// Every community field `groups.*` methods accept.
pub const GROUP_FIELDS: &[&str] = &[
    "group_id",
    "name",
    "screen_name",
    "is_closed",
    "is_admin",
    "admin_level",
    "is_member",
    "type",
    "photo",
    "photo_medium",
    "photo_big",
    "city",
    "country",
    "place",
    "description",
    "wiki_page",
    "members_count",
    "counters",
    "start_date",
    "end_date",
    "can_post",
    "can_see_all_posts",
    "activity",
    "status",
    "contacts",
];

/// Counters requested by `account.getCounters` by default.
pub const DEFAULT_COUNTER_FILTERS: &[&str] = &["friends", "messages", "groups"];

/// Every counter `account.getCounters` accepts.
pub const COUNTER_FILTERS: &[&str] = &[
    "friends", "messages", "photos", "videos", "notes", "gifts", "events", "groups", "sdk",
];

/// Separator used when a wrapper flattens a list into one parameter.
pub const FIELD_SEPARATOR: &str = ",";

/// Keeps the requested names present in `allowed`, in request order.
///
/// # Example
///
/// ```rust
/// use vk_api::api::{sanitize, USER_FIELDS};
///
/// let fields = sanitize(&["city", "favourite_colour", "sex"], USER_FIELDS);
/// assert_eq!(fields, vec!["city", "sex"]);
/// ```
#[must_use]
pub fn sanitize<'a>(requested: &[&'a str], allowed: &[&str]) -> Vec<&'a str> {
    requested
        .iter()
        .copied()
        .filter(|name| allowed.contains(name))
        .collect()
}

/// Sanitizes `requested` and joins the result with [`FIELD_SEPARATOR`].
pub(crate) fn sanitized_list(requested: &[&str], allowed: &[&str]) -> String {
    sanitize(requested, allowed).join(FIELD_SEPARATOR)
}

/// Joins identifiers with [`FIELD_SEPARATOR`].
pub(crate) fn id_list<I: ToString>(ids: &[I]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Returns `value` if it lies in `min..=max`, otherwise `default`.
pub(crate) fn in_range_or<T: PartialOrd>(value: T, min: T, max: T, default: T) -> T {
    if value < min || value > max {
        default
    } else {
        value
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Parses a wire value, returning `None` if unknown.
            #[must_use]
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<&str> for $name {
            /// Unknown values fall back to the default.
            fn from(value: &str) -> Self {
                Self::parse(value).unwrap_or_default()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Grammatical case for user names.
    NameCase, default = Nominative {
        /// `nom`
        Nominative => "nom",
        /// `gen`
        Genitive => "gen",
        /// `dat`
        Dative => "dat",
        /// `acc`
        Accusative => "acc",
        /// `ins`
        Instrumental => "ins",
        /// `abl`
        Prepositional => "abl",
    }
}

string_enum! {
    /// Filter for `groups.get`.
    GroupFilter, default = Groups {
        /// Communities the user administers.
        Admin => "admin",
        /// Communities the user edits.
        Editor => "editor",
        /// Communities the user moderates.
        Moder => "moder",
        /// Groups only.
        Groups => "groups",
        /// Public pages only.
        Publics => "publics",
        /// Events only.
        Events => "events",
    }
}

string_enum! {
    /// Community type filter for `groups.search`.
    GroupType, default = Group {
        /// Groups.
        Group => "group",
        /// Public pages.
        Page => "page",
        /// Events.
        Event => "event",
    }
}

string_enum! {
    /// Kind of community created by `groups.create`.
    GroupKind, default = Group {
        /// A group.
        Group => "group",
        /// An event.
        Event => "event",
        /// A public page; created without a description.
        Public => "public",
    }
}

/// Reason attached to `groups.banUser`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BanReason {
    /// Other.
    #[default]
    Other,
    /// Spam.
    Spam,
    /// Verbal abuse.
    VerbalAbuse,
    /// Strong language.
    StrongLanguage,
    /// Irrelevant messages.
    IrrelevantMessages,
}

impl BanReason {
    /// Returns the numeric wire value.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Other => 0,
            Self::Spam => 1,
            Self::VerbalAbuse => 2,
            Self::StrongLanguage => 3,
            Self::IrrelevantMessages => 4,
        }
    }

    /// Maps a numeric code, falling back to [`BanReason::Other`] outside `0..=4`.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Spam,
            2 => Self::VerbalAbuse,
            3 => Self::StrongLanguage,
            4 => Self::IrrelevantMessages,
            _ => Self::Other,
        }
    }
}
