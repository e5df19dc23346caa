//! Strict identity comparison.
//!
//! [`Identical`] answers "is this the very same value?" rather than "does it
//! look the same?". Cursors use it to decide whether a transform changed
//! anything: an identical child means the parent is returned as-is.
//!
//! # Rules
//!
//! - Scalars, `str` and `String` compare by value (there is nothing else to
//!   compare). `NaN` is never identical to itself.
//! - Shared pointers (`Arc`, `Rc`, `&T`) compare by address, never by
//!   contents.
//! - `Option<T>` is identical when both are `None`, or both are `Some` and the
//!   payloads are identical.
//!
//! # Examples
//!
//! ```
//! use peekpoke::identical::Identical;
//! use std::sync::Arc;
//!
//! let shared = Arc::new(vec![1, 2, 3]);
//! let alias = Arc::clone(&shared);
//! let lookalike = Arc::new(vec![1, 2, 3]);
//!
//! assert!(shared.identical(&alias));
//! assert!(!shared.identical(&lookalike));
//! assert!(3.identical(&3));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// Strict identity between two values.
///
/// Implementations must never fall back to deep structural equality for
/// compound values: a freshly rebuilt structure is *not* identical to the one
/// it was copied from, even when every field matches.
pub trait Identical<Rhs: ?Sized = Self> {
    /// Returns `true` when `self` and `other` are the same value.
    fn identical(&self, other: &Rhs) -> bool;
}

macro_rules! identical_by_value {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Identical for $scalar {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

identical_by_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl<T: ?Sized> Identical for Arc<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identical for Rc<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identical for &T {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: Identical> Identical for Option<T> {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(left), Some(right)) => left.identical(right),
            _ => false,
        }
    }
}

// A value stored in a map can never be the map itself.
impl<K, V> Identical<BTreeMap<K, V>> for V {
    #[inline]
    fn identical(&self, _other: &BTreeMap<K, V>) -> bool {
        false
    }
}

impl<K, V, S> Identical<HashMap<K, V, S>> for V {
    #[inline]
    fn identical(&self, _other: &HashMap<K, V, S>) -> bool {
        false
    }
}
