//! Errors raised when converting out of a [`Value`](super::Value).

use super::Value;

/// A [`Value`] did not hold the variant a conversion asked for.
///
/// # Examples
///
/// ```rust
/// use peekpoke::value::{Record, Value, ValueError};
///
/// let error = Record::try_from(Value::from(1)).unwrap_err();
/// assert_eq!(error.to_string(), "expected record, found number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value was of another variant.
    TypeMismatch {
        /// The variant the conversion expected.
        expected: &'static str,
        /// The variant actually found.
        found: &'static str,
    },
}

impl ValueError {
    pub(crate) const fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.type_name(),
        }
    }
}

impl std::fmt::Display for ValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(formatter, "expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for ValueError {}
