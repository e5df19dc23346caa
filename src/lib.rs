//! # peekpoke
//!
//! Cursors for immutable data: focus on a part of a value, transform it, and
//! get back a new value with only that part changed.
//!
//! ## Overview
//!
//! A cursor pairs a `peek` (read a child out of a parent) with a `poke`
//! (rebuild the parent around a new child). Handing a cursor a transform
//! yields an *updater*, a plain `Fn(P) -> O` that fits anywhere a mapping
//! function does: `Iterator::map`, a stream combinator, a `compose!` chain.
//!
//! - **Cursors**: [`cursor`](cursor::cursor), [`prop_cursor`](cursor::prop_cursor),
//!   [`into`](cursor::into), and [`Cursor::compose`](cursor::Cursor::compose)
//!   for deeper paths
//! - **Accessors**: [`peek_prop`](cursor::peek_prop) and
//!   [`poke_prop`](cursor::poke_prop) over anything implementing
//!   [`Prop`](cursor::Prop)
//! - **Identity**: the [`Identical`](identical::Identical) trait behind the
//!   no-op short-circuit
//! - **Values**: [`Value`](value::Value) and [`Record`](value::Record), shared
//!   dynamically-typed data with pointer identity
//! - **Composition**: [`compose!`], [`pipe!`] and
//!   [`identity`](compose::identity)
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Cursors)]` for struct field cursors (default)
//! - `serde`: `Serialize`/`Deserialize` for `Value` and `Record`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use peekpoke::prelude::*;
//! use peekpoke::record;
//!
//! // cursor on .foo.bar, as two single-level cursors
//! let foo = prop_cursor::<Record, _>("foo");
//! let bar = prop_cursor::<Option<Value>, _>("bar");
//! let double = foo.update(bar.update(|v: Option<Value>| {
//!     v.and_then(|v| v.as_f64()).map(|v| Value::from(2.0 * v))
//! }));
//!
//! let outputs: Vec<Record> = vec![
//!     record! { "foo" => record! { "a" => 1, "bar" => 3 }, "b" => 5 },
//!     record! { "foo" => record! { "a" => 2, "bar" => 5 }, "b" => 7 },
//! ]
//! .into_iter()
//! .map(double)
//! .collect();
//!
//! assert_eq!(outputs[0].to_string(), "{ b: 5, foo: { a: 1, bar: 6 } }");
//! assert_eq!(outputs[1].to_string(), "{ b: 7, foo: { a: 2, bar: 10 } }");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use peekpoke::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::cursor::*;
    pub use crate::identical::*;
    pub use crate::value::*;

    #[cfg(feature = "derive")]
    pub use peekpoke_derive::Cursors;
}

pub mod compose;
pub mod cursor;
pub mod identical;
pub mod value;

#[cfg(feature = "derive")]
pub use peekpoke_derive::Cursors;

static_assertions::assert_impl_all!(
    cursor::PropCursor<value::Record, &'static str>: Send, Sync, Clone
);
static_assertions::assert_impl_all!(
    cursor::IntoCursor<value::Value, String>: Send, Sync, Clone
);
