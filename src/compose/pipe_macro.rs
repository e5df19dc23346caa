//! The `pipe!` macro.

/// Pipes a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, which reads in the same order as a
/// stream pipeline: the value flows through each updater in turn.
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(h, g, f)(x)`.
///
/// # Examples
///
/// ```
/// use peekpoke::pipe;
/// use peekpoke::cursor::{Cursor, into, prop_cursor};
/// use std::collections::BTreeMap;
///
/// type Totals = BTreeMap<&'static str, i32>;
///
/// let double_a = prop_cursor::<Totals, _>("a").update(|v: Option<i32>| v.map(|n| n * 2));
/// let sum = into::<Totals, _>("sum").update(|totals: Totals| totals.values().sum());
///
/// let output = pipe!(Totals::from([("a", 1), ("b", 2)]), double_a, sum);
/// assert_eq!(output, Totals::from([("a", 2), ("b", 2), ("sum", 4)]));
/// ```
#[macro_export]
macro_rules! pipe {
    ($parent:expr $(,)?) => {
        $parent
    };

    ($parent:expr, $first:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($first($parent) $(, $rest)*)
    };
}
