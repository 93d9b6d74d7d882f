//! Closure adapter for custom placement policies.

use lacuna_core::{Hole, PlacementStrategy};

/// A named placement strategy backed by a closure.
///
/// Lets callers register an ad hoc policy without defining a type, the
/// runtime-swappable equivalent of handing the pool a function pointer:
///
/// ```
/// use lacuna_core::{Hole, PlacementStrategy};
/// use lacuna_strategies::FnStrategy;
///
/// // First-fit as a one-liner.
/// let first_fit = FnStrategy::new("first_fit", |words, holes: &[Hole]| {
///     holes.iter().find(|h| h.fits(words)).map(|h| h.offset)
/// });
///
/// let holes = [Hole::new(0, 1), Hole::new(4, 8)];
/// assert_eq!(first_fit.choose(2, &holes), Some(4));
/// ```
///
/// The closure must satisfy the same contract as any strategy: pure,
/// no retained state, and the returned offset names a qualifying hole
/// in the input.
pub struct FnStrategy {
    name: String,
    choose: Box<dyn Fn(u32, &[Hole]) -> Option<u32> + Send + 'static>,
}

impl FnStrategy {
    /// Wrap `choose` as a strategy reported under `name`.
    pub fn new<F>(name: impl Into<String>, choose: F) -> Self
    where
        F: Fn(u32, &[Hole]) -> Option<u32> + Send + 'static,
    {
        Self {
            name: name.into(),
            choose: Box::new(choose),
        }
    }
}

impl PlacementStrategy for FnStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(&self, requested_words: u32, holes: &[Hole]) -> Option<u32> {
        (self.choose)(requested_words, holes)
    }
}
