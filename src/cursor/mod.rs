//! Cursors: focus on a child of an immutable parent, transform it, rebuild.
//!
//! A cursor is a `peek`/`poke` pair. `peek` extracts a child from a parent;
//! `poke` rebuilds an output from the parent and a new child. Supplying a
//! transform turns a cursor into an *updater*, a plain `Fn(P) -> O` that can
//! be dropped into `Iterator::map`, a stream combinator or a `compose!` chain.
//!
//! # The no-op short-circuit
//!
//! When the transform hands back a child [`Identical`] to the one it was
//! given, the updater returns the parent it received instead of calling
//! `poke`. Nothing is reallocated, and callers can detect "nothing changed"
//! with a pointer comparison on the output. Because every level of a composed
//! cursor applies the same rule, a no-op anywhere in a chain returns the
//! top-level parent untouched.
//!
//! # Available Cursors
//!
//! - [`FunctionCursor`]: built from arbitrary `peek` and `poke` closures
//! - [`PropCursor`]: focuses on one key of a record-like value
//! - [`IntoCursor`]: injects a value derived from the whole parent under a key
//! - [`ComposedCursor`]: two cursors chained to focus one level deeper
//!
//! # Example
//!
//! ```
//! use peekpoke::cursor::{Cursor, cursor};
//! use peekpoke::value::Value;
//! use peekpoke::record;
//!
//! // set cursor at .foo.bar
//! let foo_bar = cursor(
//!     |parent: &Value| parent.get("foo").and_then(|foo| foo.get("bar")).cloned(),
//!     |parent: Value, bar: Option<Value>| {
//!         let foo = parent.get("foo").cloned().unwrap_or_default();
//!         parent.with("foo", foo.with_option("bar", bar))
//!     },
//! );
//!
//! let double = foo_bar.update(|bar: Option<Value>| {
//!     bar.and_then(|bar| bar.as_f64()).map(|bar| Value::from(bar * 2.0))
//! });
//!
//! let output = double(Value::from(record! { "foo" => record! { "a" => 1, "bar" => 3 }, "b" => 5 }));
//! assert_eq!(
//!     output,
//!     Value::from(record! { "foo" => record! { "a" => 1, "bar" => 6 }, "b" => 5 })
//! );
//! ```

use std::marker::PhantomData;

use crate::identical::Identical;

mod prop;

pub use prop::{IntoCursor, Prop, PropCursor, into, peek_prop, poke_prop, prop_cursor};

/// A cursor focuses on a child of a parent of type `P`.
///
/// # Type Members
///
/// - `Child`: what [`peek`](Cursor::peek) extracts
/// - `Value`: what a transform produces and [`poke`](Cursor::poke) accepts
/// - `Output`: what `poke` returns. It must be constructible from the parent
///   itself, since the short-circuit returns the parent as the output.
///
/// Implementors provide `peek`, `poke` and the identity test used by the
/// short-circuit; the updater machinery comes for free.
pub trait Cursor<P> {
    /// The focused sub-part of the parent.
    type Child: Clone;

    /// The transformed child accepted by `poke`.
    type Value;

    /// The rebuilt value.
    type Output: From<P>;

    /// Extracts the child from `parent`.
    fn peek(&self, parent: &P) -> Self::Child;

    /// Rebuilds an output from `parent` and a new child `value`.
    fn poke(&self, parent: P, value: Self::Value) -> Self::Output;

    /// Returns `true` when `value` is the very same child as `child`.
    fn unchanged(&self, child: &Self::Child, value: &Self::Value) -> bool;

    /// Applies `transform` to the focused child of `parent`.
    ///
    /// Returns `parent` itself (converted into the output type) when the
    /// transform leaves the child unchanged, and `poke(parent, new_child)`
    /// otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use peekpoke::cursor::{Cursor, prop_cursor};
    /// use std::collections::BTreeMap;
    ///
    /// let foo = prop_cursor::<BTreeMap<&str, i32>, _>("foo");
    /// let output = foo.modify(BTreeMap::from([("foo", 1), ("b", 5)]), |v| v.map(|n| n + 1));
    /// assert_eq!(output, BTreeMap::from([("foo", 2), ("b", 5)]));
    /// ```
    fn modify<F>(&self, parent: P, transform: F) -> Self::Output
    where
        F: FnOnce(Self::Child) -> Self::Value,
    {
        let child = self.peek(&parent);
        let value = transform(child.clone());
        settle(self, parent, &child, value)
    }

    /// Like [`modify`](Cursor::modify), forwarding extra context to the
    /// transform.
    ///
    /// `args` is passed verbatim as the transform's second argument; use a
    /// tuple for several values.
    ///
    /// # Example
    ///
    /// ```
    /// use peekpoke::cursor::{Cursor, prop_cursor};
    /// use std::collections::BTreeMap;
    ///
    /// let foo = prop_cursor::<BTreeMap<&str, i32>, _>("foo");
    /// let output = foo.modify_with(BTreeMap::from([("foo", 3)]), (10, 2), |v, (add, times)| {
    ///     v.map(|n| (n + add) * times)
    /// });
    /// assert_eq!(output, BTreeMap::from([("foo", 26)]));
    /// ```
    fn modify_with<A, F>(&self, parent: P, args: A, transform: F) -> Self::Output
    where
        F: FnOnce(Self::Child, A) -> Self::Value,
    {
        let child = self.peek(&parent);
        let value = transform(child.clone(), args);
        settle(self, parent, &child, value)
    }

    /// Turns this cursor into an updater that applies `transform`.
    ///
    /// The updater is a plain function from parent to output and can be
    /// called any number of times.
    ///
    /// # Example
    ///
    /// ```
    /// use peekpoke::cursor::{Cursor, prop_cursor};
    /// use std::collections::BTreeMap;
    ///
    /// let increment = prop_cursor::<BTreeMap<&str, i32>, _>("foo").update(|v| v.map(|n| n + 1));
    ///
    /// let outputs: Vec<_> = vec![
    ///     BTreeMap::from([("foo", 1), ("b", 5)]),
    ///     BTreeMap::from([("foo", 7), ("b", 3)]),
    /// ]
    /// .into_iter()
    /// .map(increment)
    /// .collect();
    ///
    /// assert_eq!(outputs[0], BTreeMap::from([("foo", 2), ("b", 5)]));
    /// assert_eq!(outputs[1], BTreeMap::from([("foo", 8), ("b", 3)]));
    /// ```
    fn update<F>(self, transform: F) -> impl Fn(P) -> Self::Output
    where
        Self: Sized,
        F: Fn(Self::Child) -> Self::Value,
    {
        move |parent| self.modify(parent, &transform)
    }

    /// Turns this cursor into an updater whose transform takes extra context.
    fn update_with<A, F>(self, transform: F) -> impl Fn(P, A) -> Self::Output
    where
        Self: Sized,
        F: Fn(Self::Child, A) -> Self::Value,
    {
        move |parent, args| self.modify_with(parent, args, &transform)
    }

    /// Turns this cursor into an updater with the identity transform.
    ///
    /// The resulting updater always hands back the parent it was given,
    /// without peeking or poking. Unlike `update(identity)`, this holds even
    /// for children that are not [`Identical`] to themselves, such as `NaN`.
    fn update_identity(self) -> impl Fn(P) -> Self::Output
    where
        Self: Sized,
    {
        move |parent| {
            tracing::trace!("identity transform, returning parent");
            <Self::Output as From<P>>::from(parent)
        }
    }

    /// Chains `inner` below this cursor to focus one level deeper.
    ///
    /// `outer.compose(inner).update(f)` behaves exactly like
    /// `outer.update(inner.update(f))`.
    ///
    /// # Example
    ///
    /// ```
    /// use peekpoke::cursor::{Cursor, prop_cursor};
    /// use peekpoke::value::{Record, Value};
    /// use peekpoke::record;
    ///
    /// let foo_bar = prop_cursor::<Record, _>("foo").compose(prop_cursor::<Option<Value>, _>("bar"));
    /// let output = foo_bar.modify(record! { "foo" => record! { "bar" => 3 } }, |bar| {
    ///     bar.and_then(|bar| bar.as_f64()).map(|bar| Value::from(bar * 2.0))
    /// });
    /// assert_eq!(output, record! { "foo" => record! { "bar" => 6 } });
    /// ```
    fn compose<Inner>(self, inner: Inner) -> ComposedCursor<P, Self, Inner>
    where
        Self: Sized,
        Inner: Cursor<Self::Child, Output = Self::Value>,
    {
        ComposedCursor::new(self, inner)
    }
}

/// Short-circuits on an unchanged child, pokes otherwise.
fn settle<P, C>(cursor: &C, parent: P, child: &C::Child, value: C::Value) -> C::Output
where
    C: Cursor<P> + ?Sized,
{
    if cursor.unchanged(child, &value) {
        tracing::trace!("child unchanged, returning parent");
        C::Output::from(parent)
    } else {
        tracing::trace!("child changed, rebuilding parent");
        cursor.poke(parent, value)
    }
}

/// Returns `parent` unchanged, ignoring the new child.
///
/// This is the `poke` of a cursor built with
/// [`FunctionCursor::peek_only`].
#[inline]
pub fn passthrough<P, V>(parent: P, _value: V) -> P {
    parent
}

/// A cursor built from a `peek` and a `poke` function.
///
/// # Type Parameters
///
/// - `P`: parent type
/// - `C`: child type returned by `peek`
/// - `V`: new child type accepted by `poke`
/// - `O`: output type returned by `poke`
/// - `Pk`: the peek function type
/// - `Po`: the poke function type
///
/// # Example
///
/// ```
/// use peekpoke::cursor::{Cursor, FunctionCursor};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = FunctionCursor::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let moved = x.modify(Point { x: 1, y: 2 }, |x| x + 10);
/// assert_eq!(moved, Point { x: 11, y: 2 });
/// ```
pub struct FunctionCursor<P, C, V, O, Pk, Po>
where
    Pk: Fn(&P) -> C,
    Po: Fn(P, V) -> O,
{
    peek: Pk,
    poke: Po,
    _marker: PhantomData<fn(P, V) -> (C, O)>,
}

impl<P, C, V, O, Pk, Po> FunctionCursor<P, C, V, O, Pk, Po>
where
    Pk: Fn(&P) -> C,
    Po: Fn(P, V) -> O,
{
    /// Creates a cursor from `peek` and `poke`.
    #[must_use]
    pub const fn new(peek: Pk, poke: Po) -> Self {
        Self {
            peek,
            poke,
            _marker: PhantomData,
        }
    }
}

impl<P, C, Pk> FunctionCursor<P, C, C, P, Pk, fn(P, C) -> P>
where
    Pk: Fn(&P) -> C,
{
    /// Creates a cursor with a passthrough `poke`.
    ///
    /// Updaters built from it always return the parent unchanged, whatever
    /// the transform computes; they are useful for observing a child.
    ///
    /// # Example
    ///
    /// ```
    /// use peekpoke::cursor::{Cursor, FunctionCursor};
    ///
    /// let first = FunctionCursor::peek_only(|pair: &(i32, i32)| pair.0);
    /// assert_eq!(first.modify((1, 2), |n| n * 100), (1, 2));
    /// ```
    #[must_use]
    pub fn peek_only(peek: Pk) -> Self {
        Self::new(peek, passthrough::<P, C>)
    }
}

/// Creates a [`FunctionCursor`] from `peek` and `poke`.
///
/// `peek` must tolerate every parent the cursor will be handed; `poke` must
/// not mutate anything another holder of the parent can observe.
#[must_use]
pub const fn cursor<P, C, V, O, Pk, Po>(peek: Pk, poke: Po) -> FunctionCursor<P, C, V, O, Pk, Po>
where
    Pk: Fn(&P) -> C,
    Po: Fn(P, V) -> O,
{
    FunctionCursor::new(peek, poke)
}

impl<P, C, V, O, Pk, Po> Cursor<P> for FunctionCursor<P, C, V, O, Pk, Po>
where
    Pk: Fn(&P) -> C,
    Po: Fn(P, V) -> O,
    C: Clone,
    V: Identical<C>,
    O: From<P>,
{
    type Child = C;
    type Value = V;
    type Output = O;

    fn peek(&self, parent: &P) -> C {
        (self.peek)(parent)
    }

    fn poke(&self, parent: P, value: V) -> O {
        (self.poke)(parent, value)
    }

    fn unchanged(&self, child: &C, value: &V) -> bool {
        value.identical(child)
    }
}

impl<P, C, V, O, Pk, Po> Clone for FunctionCursor<P, C, V, O, Pk, Po>
where
    Pk: Fn(&P) -> C + Clone,
    Po: Fn(P, V) -> O + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.peek.clone(), self.poke.clone())
    }
}

impl<P, C, V, O, Pk, Po> std::fmt::Debug for FunctionCursor<P, C, V, O, Pk, Po>
where
    Pk: Fn(&P) -> C,
    Po: Fn(P, V) -> O,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionCursor")
            .finish_non_exhaustive()
    }
}

/// Two cursors chained: `outer` focuses a middle value of the parent, `inner`
/// focuses a child of that middle value.
///
/// Both levels short-circuit: when the inner rebuild yields a middle value
/// identical to the original one, the parent is returned as-is.
pub struct ComposedCursor<P, Outer, Inner> {
    outer: Outer,
    inner: Inner,
    _marker: PhantomData<fn(P) -> P>,
}

impl<P, Outer, Inner> ComposedCursor<P, Outer, Inner> {
    /// Creates a composed cursor from an outer and an inner cursor.
    #[must_use]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<P, Outer, Inner> Cursor<P> for ComposedCursor<P, Outer, Inner>
where
    Outer: Cursor<P>,
    Inner: Cursor<Outer::Child, Output = Outer::Value>,
{
    type Child = Inner::Child;
    type Value = Inner::Value;
    type Output = Outer::Output;

    fn peek(&self, parent: &P) -> Self::Child {
        self.inner.peek(&self.outer.peek(parent))
    }

    fn poke(&self, parent: P, value: Self::Value) -> Self::Output {
        let middle = self.outer.peek(&parent);
        let rebuilt = self.inner.poke(middle.clone(), value);
        settle(&self.outer, parent, &middle, rebuilt)
    }

    fn unchanged(&self, child: &Self::Child, value: &Self::Value) -> bool {
        self.inner.unchanged(child, value)
    }
}

impl<P, Outer: Clone, Inner: Clone> Clone for ComposedCursor<P, Outer, Inner> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<P, Outer: std::fmt::Debug, Inner: std::fmt::Debug> std::fmt::Debug
    for ComposedCursor<P, Outer, Inner>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedCursor")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Creates a cursor on a struct field.
///
/// `peek` clones the field, `poke` moves the struct and replaces the field.
///
/// # Syntax
///
/// ```text
/// field_cursor!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use peekpoke::cursor::Cursor;
/// use peekpoke::field_cursor;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = field_cursor!(Point, x);
/// assert_eq!(x.modify(Point { x: 10, y: 20 }, |x| x * 2), Point { x: 20, y: 20 });
/// ```
#[macro_export]
macro_rules! field_cursor {
    ($struct_type:ty, $field:ident) => {
        $crate::cursor::FunctionCursor::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
