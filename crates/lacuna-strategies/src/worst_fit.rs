//! Worst-fit placement: largest hole available.

use lacuna_core::{Hole, PlacementStrategy};

/// Choose the qualifying hole with the maximum length.
///
/// Ties are broken by first occurrence in the input ordering — the
/// lowest offset. Leaves the largest possible fragment behind, keeping
/// remaining holes usable for future large requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorstFit;

impl PlacementStrategy for WorstFit {
    fn name(&self) -> &str {
        "worst_fit"
    }

    fn choose(&self, requested_words: u32, holes: &[Hole]) -> Option<u32> {
        let mut worst: Option<&Hole> = None;
        for hole in holes.iter().filter(|h| h.fits(requested_words)) {
            match worst {
                // Strictly larger wins; equal keeps the earlier hole.
                Some(w) if hole.length > w.length => worst = Some(hole),
                None => worst = Some(hole),
                _ => {}
            }
        }
        worst.map(|h| h.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_largest_hole() {
        let holes = [Hole::new(0, 4), Hole::new(10, 2), Hole::new(20, 10)];
        assert_eq!(WorstFit.choose(2, &holes), Some(20));
    }

    #[test]
    fn ties_go_to_the_lowest_offset() {
        let holes = [Hole::new(0, 4), Hole::new(10, 4)];
        assert_eq!(WorstFit.choose(2, &holes), Some(0));
    }

    #[test]
    fn ignores_holes_that_cannot_fit() {
        // The largest hole overall is irrelevant if it cannot hold the
        // request; only qualifying holes compete.
        let holes = [Hole::new(0, 3), Hole::new(10, 2)];
        assert_eq!(WorstFit.choose(3, &holes), Some(0));
    }

    #[test]
    fn no_fit_when_every_hole_is_too_small() {
        let holes = [Hole::new(0, 4), Hole::new(10, 2)];
        assert_eq!(WorstFit.choose(5, &holes), None);
    }

    #[test]
    fn no_fit_on_empty_hole_set() {
        assert_eq!(WorstFit.choose(1, &[]), None);
    }
}
