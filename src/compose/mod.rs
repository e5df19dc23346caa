//! Function composition helpers.
//!
//! Cursors deliberately ship no path syntax: a cursor on `.foo.bar` is the
//! composition of a cursor on `.foo` with a cursor on `.bar`. The helpers in
//! this module are the plain function plumbing that composition needs.
//!
//! - [`compose!`]: compose functions right-to-left
//! - [`pipe!`]: apply functions to a value left-to-right
//! - [`identity`]: the unit of composition, and the default transform
//!
//! # Example
//!
//! ```
//! use peekpoke::compose;
//! use peekpoke::cursor::{Cursor, prop_cursor};
//! use peekpoke::value::{Record, Value};
//! use peekpoke::record;
//!
//! let increment = prop_cursor::<Record, _>("count")
//!     .update(|count: Option<Value>| count.and_then(|v| v.as_f64()).map(|n| Value::from(n + 1.0)));
//! let stamp = prop_cursor::<Record, _>("seen").update(|_| Some(Value::from(true)));
//!
//! // stamp after increment
//! let step = compose!(stamp, increment);
//! let output = step(record! { "count" => 1 });
//!
//! assert_eq!(output, record! { "count" => 2, "seen" => true });
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::identity;

pub use crate::compose;
pub use crate::pipe;
