//! Method parameters.
//!
//! [`Params`] is an ordered map from parameter name to [`ParamValue`]. Keys
//! are unique and always iterate in byte-wise ascending order, which is the
//! order the signature is computed in.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Separator placed between the items of a list value.
pub const LIST_SEPARATOR: &str = ", ";

/// A single parameter value: a scalar or an ordered list of scalars.
///
/// # Example
///
/// ```rust
/// use vk_api::ParamValue;
///
/// assert_eq!(ParamValue::from(42).to_string(), "42");
/// assert_eq!(ParamValue::from(vec!["sex", "city"]).to_string(), "sex, city");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// A single value.
    Scalar(String),
    /// A sequence, joined with [`LIST_SEPARATOR`] on the wire.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns the text that is both signed and sent.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::List(items) => items.join(LIST_SEPARATOR),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Scalar(if value { "1" } else { "0" }.to_string())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(items: &[&str]) -> Self {
        Self::List(items.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<Vec<i64>> for ParamValue {
    fn from(items: Vec<i64>) -> Self {
        Self::List(items.iter().map(ToString::to_string).collect())
    }
}

/// A set of named method parameters.
///
/// # Example
///
/// ```rust
/// use vk_api::Params;
///
/// let params = Params::new()
///     .with("user_ids", "1")
///     .with("fields", vec!["sex", "city"]);
///
/// let keys: Vec<&str> = params.keys().collect();
/// assert_eq!(keys, vec!["fields", "user_ids"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter and returns the set, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter only when `value` is `Some`.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Inserts a parameter, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Inserts a parameter only if the key is absent.
    pub fn insert_if_absent(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.0
            .entry(key.to_string())
            .or_insert_with(|| value.into());
    }

    /// Removes a parameter.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in ascending byte order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Flattens the set into `(key, wire value)` pairs for a query string or
    /// form body.
    #[must_use]
    pub fn to_wire_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.to_wire()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
