//! The [`PlacementStrategy`] trait: the contract between a pool and its
//! placement policy.
//!
//! Strategies are pure selection functions. They see an immutable,
//! offset-ordered snapshot of the current hole set and answer with the
//! offset of the hole the allocation should be carved from. All
//! bookkeeping (splitting, coalescing, the allocation table) stays on
//! the pool side of the contract.

use crate::hole::Hole;

/// A placement policy choosing which hole satisfies an allocation.
///
/// # Contract
///
/// - `choose()` MUST be pure: no retained state between calls, no
///   mutation of the input (the shared-slice signature enforces the
///   latter).
/// - The returned offset MUST equal the `offset` of exactly one hole in
///   `holes` whose `length` is at least `requested_words`. `None` means
///   no hole is large enough.
/// - `holes` is ordered by offset and contains no overlapping or
///   contiguous entries.
///
/// A pool never trusts the result blindly: an offset that does not meet
/// the contract is discarded and the allocation fails as if no hole fit.
///
/// # Object safety
///
/// This trait is object-safe; pools store their policy as
/// `Box<dyn PlacementStrategy>`.
///
/// # Examples
///
/// A first-fit policy, the shortest conforming implementation:
///
/// ```
/// use lacuna_core::{Hole, PlacementStrategy};
///
/// struct FirstFit;
///
/// impl PlacementStrategy for FirstFit {
///     fn name(&self) -> &str {
///         "first_fit"
///     }
///
///     fn choose(&self, requested_words: u32, holes: &[Hole]) -> Option<u32> {
///         holes.iter().find(|h| h.fits(requested_words)).map(|h| h.offset)
///     }
/// }
///
/// let holes = [Hole::new(0, 1), Hole::new(4, 8)];
/// assert_eq!(FirstFit.choose(2, &holes), Some(4));
/// assert_eq!(FirstFit.choose(9, &holes), None);
/// ```
pub trait PlacementStrategy: Send + 'static {
    /// Human-readable name for diagnostics and error reporting.
    fn name(&self) -> &str;

    /// Choose the hole to carve `requested_words` words from.
    ///
    /// Returns the chosen hole's offset, or `None` if no hole in
    /// `holes` is large enough. `requested_words` is always positive
    /// when called by a pool.
    fn choose(&self, requested_words: u32, holes: &[Hole]) -> Option<u32>;
}
