//! Interop-encoding error types.

use std::error::Error;
use std::fmt;

/// Errors from the bounded-width interop encodings.
///
/// The packed formats use `u16` values for compatibility; anything that
/// does not fit is reported here instead of being silently narrowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WireError {
    /// A value does not fit the packed `u16` width.
    ValueOutOfRange {
        /// Which value overflowed ("count", "offset", "length", ...).
        field: &'static str,
        /// The value that did not fit.
        value: u64,
    },
    /// A packed list's length is inconsistent with its leading count.
    LengthMismatch {
        /// Elements implied by the leading count.
        expected: usize,
        /// Elements actually present.
        actual: usize,
    },
    /// A packed list is empty — even a hole-free pool encodes a count.
    MissingCount,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOutOfRange { field, value } => {
                write!(f, "{field} {value} does not fit the packed u16 width")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "packed list length mismatch: count implies {expected} elements, found {actual}"
                )
            }
            Self::MissingCount => write!(f, "packed list is missing its leading count"),
        }
    }
}

impl Error for WireError {}
