//! Word-addressed memory pool engine for Lacuna.
//!
//! Provides [`WordPool`], a simulated allocator over a single owned
//! contiguous backing buffer. The pool tracks free space as a set of
//! [`lacuna_core::Hole`]s, delegates placement to a configured
//! [`lacuna_core::PlacementStrategy`], and coalesces adjacent holes on
//! every free.
//!
//! # Architecture
//!
//! ```text
//! WordPool
//! ├── Option<Vec<u8>>                 (backing store; None = uninitialized)
//! ├── SmallVec<Hole>                  (offset-ordered, non-contiguous)
//! ├── IndexMap<AllocHandle, u32>      (live allocations, words each)
//! └── Box<dyn PlacementStrategy>      (swappable placement policy)
//! ```
//!
//! Allocation identity is an opaque [`AllocHandle`], never a raw
//! pointer: a freed handle simply stops resolving, so use-after-free is
//! unrepresentable at the API level.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitmap;
pub mod config;
pub mod error;
pub mod handle;
pub mod pool;

pub use bitmap::OccupancyBitmap;
pub use config::PoolConfig;
pub use error::PoolError;
pub use handle::AllocHandle;
pub use pool::WordPool;
