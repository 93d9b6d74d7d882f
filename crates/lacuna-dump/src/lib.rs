//! Diagnostic collaborators for the Lacuna memory pool.
//!
//! Everything here consumes the pool's public introspection exports
//! (the hole list and the occupancy bitmap) and lives outside the
//! allocator core:
//!
//! - [`render_map`] / [`write_map`] — human-readable memory-map dumps
//!   of the form `[offset, length] - [offset, length] - ...`.
//! - [`pack_holes`] / [`unpack_holes`] — the legacy packed `u16`
//!   hole-list interop encoding, validated rather than truncating.
//! - [`pack_bitmap`] — the length-prefixed occupancy-bitmap export.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod map;
pub mod wire;

pub use error::WireError;
pub use map::{render_map, write_map, write_map_to_path};
pub use wire::{pack_bitmap, pack_holes, unpack_holes};
