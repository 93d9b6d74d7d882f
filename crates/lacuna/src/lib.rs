//! Lacuna: a word-addressed memory-pool simulator with pluggable
//! placement strategies.
//!
//! Lacuna models an allocator over a single contiguous backing buffer,
//! the kind of component used to teach or prototype allocator placement
//! policies without a real virtual-memory subsystem. Placement is a
//! swappable policy ([`prelude::BestFit`], [`prelude::WorstFit`], or
//! anything implementing [`prelude::PlacementStrategy`]); the pool owns
//! all bookkeeping — hole tracking, splitting, and coalescing.
//!
//! This is the top-level facade crate re-exporting the public API from
//! all Lacuna sub-crates. For most users, adding `lacuna` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lacuna::prelude::*;
//!
//! // 64 words of 8 bytes each, best-fit placement.
//! let mut pool = WordPool::new(PoolConfig::default(), Box::new(BestFit)).unwrap();
//! pool.initialize(64).unwrap();
//!
//! let a = pool.allocate(24).unwrap(); // 3 words at offset 0
//! let b = pool.allocate(100).unwrap(); // 13 words at offset 3
//! pool.free(a);
//!
//! assert_eq!(lacuna::dump::render_map(pool.holes()), "[0, 3] - [16, 48]");
//!
//! pool.free(b);
//! assert_eq!(pool.holes(), &[Hole::new(0, 64)]);
//! # let _ = pool.occupancy_bitmap().unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lacuna-core` | `Hole`, the `PlacementStrategy` contract |
//! | [`pool`] | `lacuna-pool` | `WordPool`, config, handles, errors, bitmap |
//! | [`strategies`] | `lacuna-strategies` | `BestFit`, `WorstFit`, `FnStrategy` |
//! | [`dump`] | `lacuna-dump` | map rendering, packed interop encodings |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the placement-strategy contract (`lacuna-core`).
pub use lacuna_core as types;

/// The pool engine: `WordPool`, config, handles, errors (`lacuna-pool`).
pub use lacuna_pool as pool;

/// Reference placement strategies (`lacuna-strategies`).
pub use lacuna_strategies as strategies;

/// Memory-map dumps and interop encodings (`lacuna-dump`).
pub use lacuna_dump as dump;

/// Common imports for typical Lacuna usage.
///
/// ```rust
/// use lacuna::prelude::*;
/// ```
pub mod prelude {
    // Core types and the strategy contract
    pub use lacuna_core::{Hole, PlacementStrategy};

    // Pool engine
    pub use lacuna_pool::{AllocHandle, OccupancyBitmap, PoolConfig, PoolError, WordPool};

    // Reference strategies
    pub use lacuna_strategies::{BestFit, FnStrategy, WorstFit};

    // Interop errors
    pub use lacuna_dump::WireError;
}
