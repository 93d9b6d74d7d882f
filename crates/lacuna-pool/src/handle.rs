//! Opaque allocation handles.
//!
//! An [`AllocHandle`] is the identity of a live allocation. It wraps
//! the allocation's byte offset into the backing store, but the field
//! is private: only the pool can mint handles, and resolving one back
//! to bytes goes through the pool's allocation table, which checks
//! liveness. A handle that has been freed simply stops resolving.

use std::fmt;

/// Identity of an allocation within a [`crate::WordPool`].
///
/// Handles are `Copy` — callers may duplicate them freely. After a
/// free, every copy of the handle is dead; after the same offset is
/// handed out again by a later allocation, old copies alias the new
/// allocation, exactly as raw addresses would.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct AllocHandle {
    /// Byte offset of the allocation's first word in the backing store.
    byte_offset: u64,
}

impl AllocHandle {
    /// Mint a handle for the allocation starting at `byte_offset`.
    pub(crate) fn new(byte_offset: u64) -> Self {
        Self { byte_offset }
    }

    /// Byte offset of the allocation's first word in the backing store.
    pub fn byte_offset(&self) -> u64 {
        self.byte_offset
    }
}

impl fmt::Display for AllocHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AllocHandle(byte_offset={})", self.byte_offset)
    }
}
