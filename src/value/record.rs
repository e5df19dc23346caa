//! Shared, immutable string-keyed records.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;

use super::{Value, ValueError};
use crate::cursor::Prop;
use crate::identical::Identical;

/// An immutable, reference-counted map from string keys to [`Value`]s.
///
/// Cloning a `Record` shares the same entries, so clones are
/// [`Identical`]. Every "update" ([`with`](Record::with),
/// [`without`](Record::without)) builds a shallow copy: the new record owns a
/// fresh map whose values are shared with the original.
///
/// Equality (`==`) is structural; use [`Identical`] or
/// [`ptr_eq`](Record::ptr_eq) to ask whether two records are the same
/// allocation.
///
/// # Example
///
/// ```
/// use peekpoke::identical::Identical;
/// use peekpoke::record;
///
/// let original = record! { "a" => 1 };
/// let updated = original.with("b", 2);
///
/// assert_eq!(original, record! { "a" => 1 });
/// assert_eq!(updated, record! { "a" => 1, "b" => 2 });
/// assert!(!updated.identical(&original));
/// ```
#[derive(Clone, Default)]
pub struct Record {
    entries: Arc<BTreeMap<String, Value>>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns a shallow copy with `key` set to `value`.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut entries = (*self.entries).clone();
        entries.insert(key.into(), value.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Returns a shallow copy without `key`, or `self` when `key` is absent.
    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        if !self.contains_key(key) {
            return self.clone();
        }
        let mut entries = (*self.entries).clone();
        entries.remove(key);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over values in key order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns `true` if both records share the same entries allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl Identical for Record {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.entries == other.entries
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("{}");
        }
        formatter.write_str("{ ")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        formatter.write_str(" }")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: Arc::new(
                iter.into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Value> for Record {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Record(record) => Ok(record),
            other => Err(ValueError::type_mismatch("record", &other)),
        }
    }
}

impl<K: AsRef<str>> Prop<K> for Record {
    type Value = Value;

    fn peek_prop(&self, key: &K) -> Option<Value> {
        self.get(key.as_ref()).cloned()
    }

    fn poke_prop(self, key: &K, value: Option<Value>) -> Self {
        match value {
            Some(value) => self.with(key.as_ref(), value),
            None => self.without(key.as_ref()),
        }
    }
}

/// Builds a [`Record`] from `key => value` pairs.
///
/// Keys are anything `String: From<_>`; values anything `Value: From<_>`,
/// including nested `record!` invocations.
///
/// # Example
///
/// ```
/// use peekpoke::record;
/// use peekpoke::value::Value;
///
/// let parent = record! { "foo" => record! { "a" => 1, "bar" => 3 }, "b" => 5 };
/// assert_eq!(parent.get("b"), Some(&Value::from(5)));
/// assert_eq!(record! {}.len(), 0);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::value::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::value::Record as ::std::iter::FromIterator<(
            ::std::string::String,
            $crate::value::Value,
        )>>::from_iter([
            $((::std::string::String::from($key), $crate::value::Value::from($value))),+
        ])
    };
}
