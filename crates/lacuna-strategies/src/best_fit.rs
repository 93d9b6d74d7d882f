//! Best-fit placement: smallest hole that still fits.

use lacuna_core::{Hole, PlacementStrategy};

/// Choose the qualifying hole with the minimum length.
///
/// Ties are broken by first occurrence in the input ordering — the
/// lowest offset, since the pool hands holes over offset-ordered.
/// Minimizes the leftover fragment each allocation leaves behind.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestFit;

impl PlacementStrategy for BestFit {
    fn name(&self) -> &str {
        "best_fit"
    }

    fn choose(&self, requested_words: u32, holes: &[Hole]) -> Option<u32> {
        let mut best: Option<&Hole> = None;
        for hole in holes.iter().filter(|h| h.fits(requested_words)) {
            match best {
                // Strictly smaller wins; equal keeps the earlier hole.
                Some(b) if hole.length < b.length => best = Some(hole),
                None => best = Some(hole),
                _ => {}
            }
        }
        best.map(|h| h.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_tightest_hole() {
        let holes = [Hole::new(0, 4), Hole::new(10, 2), Hole::new(20, 10)];
        assert_eq!(BestFit.choose(2, &holes), Some(10));
    }

    #[test]
    fn skips_holes_that_are_too_small() {
        let holes = [Hole::new(0, 4), Hole::new(10, 2), Hole::new(20, 10)];
        assert_eq!(BestFit.choose(5, &holes), Some(20));
    }

    #[test]
    fn ties_go_to_the_lowest_offset() {
        let holes = [Hole::new(0, 4), Hole::new(10, 4)];
        assert_eq!(BestFit.choose(2, &holes), Some(0));
    }

    #[test]
    fn exact_fit_beats_looser_holes() {
        let holes = [Hole::new(0, 8), Hole::new(12, 2)];
        assert_eq!(BestFit.choose(2, &holes), Some(12));
    }

    #[test]
    fn no_fit_when_every_hole_is_too_small() {
        let holes = [Hole::new(0, 4), Hole::new(10, 2)];
        assert_eq!(BestFit.choose(5, &holes), None);
    }

    #[test]
    fn no_fit_on_empty_hole_set() {
        assert_eq!(BestFit.choose(1, &[]), None);
    }
}
