//! Core types and traits for the Lacuna memory-pool simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Hole`] exchange type and the [`PlacementStrategy`] contract
//! that decouples placement policy from pool bookkeeping. The pool
//! engine lives in `lacuna-pool`; reference strategies live in
//! `lacuna-strategies`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hole;
pub mod strategy;

pub use hole::Hole;
pub use strategy::PlacementStrategy;
