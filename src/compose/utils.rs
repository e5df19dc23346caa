//! The identity combinator.

/// Returns the value unchanged.
///
/// `identity` is the unit of function composition and the default transform
/// of every cursor: an updater built from it never changes anything, so it
/// always hands back the parent it was given.
///
/// # Examples
///
/// ```
/// use peekpoke::compose::identity;
/// use peekpoke::cursor::{Cursor, prop_cursor};
/// use peekpoke::identical::Identical;
/// use peekpoke::record;
/// use peekpoke::value::Record;
///
/// let parent = record! { "foo" => "foo", "bar" => "bar" };
/// let updater = prop_cursor::<Record, _>("foo").update(identity);
///
/// assert!(updater(parent.clone()).identical(&parent));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
