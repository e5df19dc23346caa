//! The `compose!` macro.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs first.
/// Every updater produced by a cursor is a plain `Fn(P) -> O`, so updaters
/// compose with this macro like any other function.
///
/// # Syntax
///
/// - `compose!(f)` - `f` itself
/// - `compose!(f, g)` - `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - any number of functions
///
/// # Examples
///
/// ```
/// use peekpoke::compose;
/// use peekpoke::cursor::{Cursor, prop_cursor};
/// use std::collections::BTreeMap;
///
/// type Scores = BTreeMap<&'static str, i32>;
///
/// let bump_home = prop_cursor::<Scores, _>("home").update(|v: Option<i32>| v.map(|n| n + 1));
/// let bump_away = prop_cursor::<Scores, _>("away").update(|v: Option<i32>| v.map(|n| n + 1));
///
/// let both = compose!(bump_away, bump_home);
/// let scores = both(Scores::from([("home", 1), ("away", 0)]));
///
/// assert_eq!(scores, Scores::from([("home", 2), ("away", 1)]));
/// ```
#[macro_export]
macro_rules! compose {
    ($last:expr $(,)?) => {
        $last
    };

    ($last:expr, $($earlier:expr),+ $(,)?) => {{
        let last = $last;
        let earlier = $crate::compose!($($earlier),+);
        move |parent| last(earlier(parent))
    }};
}
