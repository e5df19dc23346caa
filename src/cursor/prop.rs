//! Key-focused cursors over record-like values.
//!
//! [`Prop`] is the capability these cursors need: read the value under a key,
//! and build a copy of the parent with one key replaced. It is implemented
//! for [`Record`](crate::value::Record), [`Value`](crate::value::Value), the
//! std maps, `Option<T>` (an absent parent) and `Arc<T>` (copy-on-write).
//!
//! # Overview
//!
//! - [`peek_prop`] / [`poke_prop`]: the raw accessor pair as closures
//! - [`prop_cursor`]: a cursor on the value under a key
//! - [`into`]: a cursor that stores a value derived from the whole parent
//!   under a key
//!
//! # Absent values
//!
//! A missing key reads as `None`, and so does any key of a missing parent.
//! Poking `None` removes the key; poking `None` where nothing was stored
//! returns the parent as it was.
//!
//! # Example
//!
//! ```
//! use peekpoke::cursor::{Cursor, into, prop_cursor};
//! use peekpoke::value::{Record, Value};
//! use peekpoke::record;
//!
//! let total = into::<Record, _>("total").update(|parent: Record| {
//!     let a = parent.get("a").and_then(Value::as_f64).unwrap_or_default();
//!     let b = parent.get("b").and_then(Value::as_f64).unwrap_or_default();
//!     Value::from(a + b)
//! });
//!
//! assert_eq!(total(record! { "a" => 1, "b" => 2 }), record! { "a" => 1, "b" => 2, "total" => 3 });
//!
//! // a missing parent is an empty record as far as peeking goes
//! let name = prop_cursor::<Option<Record>, _>("name");
//! assert_eq!(name.peek(&None), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;
use std::sync::Arc;

use super::Cursor;
use crate::identical::Identical;

/// Get-by-key and non-destructive set-by-key.
///
/// # Laws
///
/// 1. **PokePeek**: `parent.poke_prop(k, v).peek_prop(k) == v`
/// 2. **Locality**: poking `k` leaves every other key as it was
/// 3. **Absent no-op**: if `parent.peek_prop(k)` is `None`, then
///    `parent.poke_prop(k, None)` is `parent`
pub trait Prop<K> {
    /// The type stored under a key.
    type Value: Clone;

    /// Returns a copy of the value stored under `key`, or `None`.
    fn peek_prop(&self, key: &K) -> Option<Self::Value>;

    /// Returns a copy of `self` with `key` set to `value`, or removed when
    /// `value` is `None`.
    #[must_use]
    fn poke_prop(self, key: &K, value: Option<Self::Value>) -> Self;
}

impl<K: Ord + Clone, V: Clone> Prop<K> for BTreeMap<K, V> {
    type Value = V;

    fn peek_prop(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn poke_prop(mut self, key: &K, value: Option<V>) -> Self {
        match value {
            Some(value) => {
                self.insert(key.clone(), value);
            }
            None => {
                self.remove(key);
            }
        }
        self
    }
}

impl<K, V, S> Prop<K> for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Value = V;

    fn peek_prop(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn poke_prop(mut self, key: &K, value: Option<V>) -> Self {
        match value {
            Some(value) => {
                self.insert(key.clone(), value);
            }
            None => {
                self.remove(key);
            }
        }
        self
    }
}

impl<K, T> Prop<K> for Option<T>
where
    T: Prop<K> + Default,
{
    type Value = T::Value;

    fn peek_prop(&self, key: &K) -> Option<T::Value> {
        self.as_ref().and_then(|parent| parent.peek_prop(key))
    }

    fn poke_prop(self, key: &K, value: Option<T::Value>) -> Self {
        match (self, value) {
            (None, None) => None,
            (parent, value) => Some(parent.unwrap_or_default().poke_prop(key, value)),
        }
    }
}

impl<K, T> Prop<K> for Arc<T>
where
    T: Prop<K> + Clone,
{
    type Value = T::Value;

    fn peek_prop(&self, key: &K) -> Option<T::Value> {
        (**self).peek_prop(key)
    }

    fn poke_prop(self, key: &K, value: Option<T::Value>) -> Self {
        if value.is_none() && self.peek_prop(key).is_none() {
            return self;
        }
        Arc::new(Arc::unwrap_or_clone(self).poke_prop(key, value))
    }
}

/// Returns a function reading `key` out of a parent.
///
/// # Example
///
/// ```
/// use peekpoke::cursor::peek_prop;
/// use std::collections::BTreeMap;
///
/// let peek_foo = peek_prop::<Option<BTreeMap<&str, i32>>, _>("foo");
/// assert_eq!(peek_foo(&Some(BTreeMap::from([("foo", 1)]))), Some(1));
/// assert_eq!(peek_foo(&None), None);
/// ```
pub fn peek_prop<P, K>(key: K) -> impl Fn(&P) -> Option<P::Value>
where
    P: Prop<K>,
{
    move |parent: &P| parent.peek_prop(&key)
}

/// Returns a function writing `key` into a copy of a parent.
///
/// # Example
///
/// ```
/// use peekpoke::cursor::poke_prop;
/// use std::collections::BTreeMap;
///
/// let poke_foo = poke_prop::<BTreeMap<&str, i32>, _>("foo");
/// let parent = BTreeMap::from([("b", 5)]);
/// assert_eq!(poke_foo(parent, Some(1)), BTreeMap::from([("foo", 1), ("b", 5)]));
/// ```
pub fn poke_prop<P, K>(key: K) -> impl Fn(P, Option<P::Value>) -> P
where
    P: Prop<K>,
{
    move |parent: P, value: Option<P::Value>| parent.poke_prop(&key, value)
}

/// A cursor on the value stored under one key of a record-like parent.
///
/// Both the child and the transformed child are `Option<P::Value>`: `None`
/// means "absent". Returning `None` from a transform removes the key.
///
/// # Type Parameters
///
/// - `P`: the parent type
/// - `K`: the key type
pub struct PropCursor<P, K> {
    key: K,
    _marker: PhantomData<fn(P) -> P>,
}

impl<P, K> PropCursor<P, K> {
    /// Creates a cursor on `key`.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// The key this cursor focuses on.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Creates a [`PropCursor`] on `key`.
///
/// # Example
///
/// ```
/// use peekpoke::cursor::{Cursor, prop_cursor};
/// use peekpoke::identical::Identical;
/// use peekpoke::value::{Record, Value};
/// use peekpoke::record;
///
/// let foo = prop_cursor::<Record, _>("foo");
///
/// let parent = record! { "foo" => 1, "b" => 5 };
/// let output = foo.modify(parent.clone(), |v| v.and_then(|v| v.as_f64()).map(|n| Value::from(n + 1.0)));
/// assert_eq!(output, record! { "foo" => 2, "b" => 5 });
/// assert!(!output.identical(&parent));
///
/// // identity transform: same parent back
/// let output = foo.modify(parent.clone(), |v| v);
/// assert!(output.identical(&parent));
/// ```
#[must_use]
pub const fn prop_cursor<P, K>(key: K) -> PropCursor<P, K> {
    PropCursor::new(key)
}

impl<P, K> Cursor<P> for PropCursor<P, K>
where
    P: Prop<K>,
    P::Value: Identical,
{
    type Child = Option<P::Value>;
    type Value = Option<P::Value>;
    type Output = P;

    fn peek(&self, parent: &P) -> Self::Child {
        parent.peek_prop(&self.key)
    }

    fn poke(&self, parent: P, value: Self::Value) -> P {
        parent.poke_prop(&self.key, value)
    }

    fn unchanged(&self, child: &Self::Child, value: &Self::Value) -> bool {
        value.identical(child)
    }
}

impl<P, K: Clone> Clone for PropCursor<P, K> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<P, K: std::fmt::Debug> std::fmt::Debug for PropCursor<P, K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PropCursor")
            .field("key", &self.key)
            .finish()
    }
}

/// A cursor whose child is the whole parent and whose poke stores the
/// transformed value under a key.
///
/// The transform receives a copy of the parent (an `Arc` clone for
/// [`Record`](crate::value::Record) and [`Value`](crate::value::Value), a full
/// clone for std maps) and computes the value to add.
pub struct IntoCursor<P, K> {
    key: K,
    _marker: PhantomData<fn(P) -> P>,
}

impl<P, K> IntoCursor<P, K> {
    /// Creates a cursor storing into `key`.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// The key the derived value is stored under.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Creates an [`IntoCursor`] storing into `key`.
///
/// # Example
///
/// ```
/// use peekpoke::cursor::{Cursor, into};
/// use std::collections::BTreeMap;
///
/// let derived = into::<BTreeMap<&str, i32>, _>("derived");
/// let output = derived.modify(BTreeMap::from([("a", 1), ("b", 2)]), |p| p["a"] + p["b"]);
/// assert_eq!(output, BTreeMap::from([("a", 1), ("b", 2), ("derived", 3)]));
/// ```
#[must_use]
pub const fn into<P, K>(key: K) -> IntoCursor<P, K> {
    IntoCursor::new(key)
}

impl<P, K> Cursor<P> for IntoCursor<P, K>
where
    P: Prop<K> + Clone,
    P::Value: Identical<P>,
{
    type Child = P;
    type Value = P::Value;
    type Output = P;

    fn peek(&self, parent: &P) -> P {
        parent.clone()
    }

    fn poke(&self, parent: P, value: P::Value) -> P {
        parent.poke_prop(&self.key, Some(value))
    }

    fn unchanged(&self, child: &P, value: &P::Value) -> bool {
        value.identical(child)
    }
}

impl<P, K: Clone> Clone for IntoCursor<P, K> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<P, K: std::fmt::Debug> std::fmt::Debug for IntoCursor<P, K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IntoCursor")
            .field("key", &self.key)
            .finish()
    }
}
