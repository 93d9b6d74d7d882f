//! Reference implementations of the Lacuna placement-strategy contract.
//!
//! Each strategy is a pure, stateless selection function over the
//! pool's offset-ordered hole snapshot: [`BestFit`] minimizes leftover
//! space, [`WorstFit`] maximizes it, and [`FnStrategy`] adapts any
//! closure into a named strategy for custom policies.
//!
//! All strategies here are `O(holes)` per call and retain no state
//! between calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod best_fit;
pub mod custom;
pub mod worst_fit;

pub use best_fit::BestFit;
pub use custom::FnStrategy;
pub use worst_fit::WorstFit;
