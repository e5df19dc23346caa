//! Dynamically-typed structured values.
//!
//! [`Value`] is a small JSON-like value whose compound variants are shared
//! behind `Arc`. That gives it the identity semantics cursors rely on: a
//! record that was not touched by an update is the *same* record afterwards,
//! while a rebuilt record is a new allocation even when it looks equal.
//!
//! # Variants
//!
//! | Variant | Identity |
//! |---------|----------|
//! | `Null`, `Bool`, `Number`, `String` | by value |
//! | `Array`, `Record` | by allocation |
//!
//! # Example
//!
//! ```
//! use peekpoke::cursor::{Cursor, prop_cursor};
//! use peekpoke::identical::Identical;
//! use peekpoke::value::Value;
//! use peekpoke::record;
//!
//! let parent = Value::from(record! { "foo" => "foo", "bar" => "bar" });
//! let output = prop_cursor::<Value, _>("foo").update_identity()(parent.clone());
//!
//! assert!(output.identical(&parent));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::cursor::Prop;
use crate::identical::Identical;

mod error;
mod record;
#[cfg(feature = "serde")]
mod serde_support;

pub use error::ValueError;
pub use record::Record;

/// A dynamically-typed, immutable value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absence of a meaningful value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Integers are stored as `f64`.
    Number(f64),
    /// A shared string.
    String(Arc<str>),
    /// A shared list of values.
    Array(Arc<Vec<Value>>),
    /// A shared string-keyed record.
    Record(Record),
}

impl Value {
    /// Returns the name of this value's variant, as used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Record(_) => "record",
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the record, if this is one.
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the value under `key`; `None` when absent or when `self` is
    /// not a record.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_record().and_then(|record| record.get(key))
    }

    /// Returns a copy with `key` set to `value`.
    ///
    /// A non-record value is treated as an empty record, so the result is
    /// always a record.
    #[must_use]
    pub fn with(self, key: impl Into<String>, value: impl Into<Self>) -> Self {
        match self {
            Self::Record(record) => Self::Record(record.with(key, value)),
            _ => Self::Record(Record::new().with(key, value)),
        }
    }

    /// Like [`with`](Value::with), but `None` removes `key` instead.
    #[must_use]
    pub fn with_option(self, key: impl Into<String>, value: Option<Self>) -> Self {
        let key = key.into();
        self.poke_prop(&key, value)
    }
}

impl<K: AsRef<str>> Prop<K> for Value {
    type Value = Self;

    fn peek_prop(&self, key: &K) -> Option<Self> {
        self.get(key.as_ref()).cloned()
    }

    fn poke_prop(self, key: &K, value: Option<Self>) -> Self {
        match (self, value) {
            (Self::Record(record), value) => Self::Record(record.poke_prop(key, value)),
            (other, None) => other,
            (_, Some(value)) => Self::Record(Record::new().with(key.as_ref(), value)),
        }
    }
}

impl Identical for Value {
    #[allow(clippy::float_cmp)]
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => Arc::ptr_eq(left, right),
            (Self::Record(left), Self::Record(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl Identical<Record> for Value {
    fn identical(&self, other: &Record) -> bool {
        matches!(self, Self::Record(record) if record.ptr_eq(other))
    }
}

impl Identical<Option<Self>> for Value {
    fn identical(&self, other: &Option<Self>) -> bool {
        other.as_ref().is_some_and(|other| self.identical(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(text) => write!(formatter, "'{text}'"),
            Self::Array(items) => {
                if items.is_empty() {
                    return formatter.write_str("[]");
                }
                formatter.write_str("[ ")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str(" ]")
            }
            Self::Record(record) => write!(formatter, "{record}"),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<Arc<str>> for Value {
    fn from(text: Arc<str>) -> Self {
        Self::String(text)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(Arc::new(items))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<Value> for f64 {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_f64()
            .ok_or_else(|| ValueError::type_mismatch("number", &value))
    }
}

impl TryFrom<Value> for bool {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_bool()
            .ok_or_else(|| ValueError::type_mismatch("bool", &value))
    }
}

impl TryFrom<Value> for Arc<str> {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(text),
            other => Err(ValueError::type_mismatch("string", &other)),
        }
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync);
static_assertions::assert_impl_all!(Record: Send, Sync);
