//! Derive macro for peekpoke field cursors.
//!
//! # Example
//!
//! ```rust,ignore
//! use peekpoke::Cursors;
//! use peekpoke::cursor::Cursor;
//!
//! #[derive(Clone, Cursors)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_cursor()
//! // - Point::y_cursor()
//!
//! let point = Point { x: 10, y: 20 };
//! let moved = Point::x_cursor().modify(point, |x| x + 1);
//! assert_eq!(moved.x, 11);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod cursors;

use proc_macro::TokenStream;

/// Derive macro generating a cursor for every named field.
///
/// For each field `foo: T` the macro generates
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_cursor() -> FunctionCursor<Self, T, T, Self, fn(&Self) -> T, fn(Self, T) -> Self>;
/// }
/// ```
///
/// The cursor's peek clones the field and its poke moves the struct and
/// replaces the field, so every field type must implement `Clone`. Updaters
/// built from the cursor additionally need `T: Identical`.
///
/// # Requirements
///
/// - The struct must have named fields
///
/// # Generics
///
/// Generic structs are supported; call the method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Cursors)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let cursor = Container::<i32>::value_cursor();
/// ```
#[proc_macro_derive(Cursors)]
pub fn derive_cursors(input: TokenStream) -> TokenStream {
    cursors::derive_cursors_impl(input)
}
