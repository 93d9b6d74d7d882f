//! Pool-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during pool operations.
///
/// Everything here is local and recoverable from the caller's
/// perspective except [`PoolError::StoreAllocationFailed`], which the
/// caller must treat as a hard failure of that `initialize` attempt
/// (the pool itself stays uninitialized and intact).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The pool has no backing store — `initialize` has not been
    /// called, or `shutdown` has been called since.
    Uninitialized,
    /// An allocation of zero bytes was requested.
    ZeroSizedRequest,
    /// No hole is large enough for the request. Recoverable; the
    /// caller may retry after freeing other allocations.
    CapacityExhausted {
        /// Number of words the request needed.
        requested_words: u64,
    },
    /// The backing store could not be acquired at `initialize` time.
    StoreAllocationFailed {
        /// Number of bytes the store would have occupied.
        requested_bytes: u64,
    },
    /// The pool configuration is unusable.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "pool is not initialized"),
            Self::ZeroSizedRequest => write!(f, "zero-sized allocation request"),
            Self::CapacityExhausted { requested_words } => {
                write!(f, "no hole can hold {requested_words} words")
            }
            Self::StoreAllocationFailed { requested_bytes } => {
                write!(f, "failed to acquire a {requested_bytes}-byte backing store")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid pool config: {reason}"),
        }
    }
}

impl Error for PoolError {}
