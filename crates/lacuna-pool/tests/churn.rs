//! Integration test: pool bookkeeping under sustained alloc/free churn.
//!
//! Drives a pool through a long deterministic interleaving of
//! allocations and frees under both reference strategies and asserts
//! the conservation and no-contiguous-holes invariants at every step,
//! then replays the coalescing scenario end to end.

use lacuna_core::Hole;
use lacuna_pool::{AllocHandle, PoolConfig, WordPool};
use lacuna_strategies::{BestFit, WorstFit};

const TOTAL_WORDS: u32 = 128;
const WORD_SIZE: u32 = 4;

fn assert_invariants(pool: &WordPool) {
    for pair in pool.holes().windows(2) {
        assert!(
            pair[0].end() < u64::from(pair[1].offset),
            "holes {} and {} overlap or touch",
            pair[0],
            pair[1],
        );
    }
    assert_eq!(
        pool.free_words() + pool.used_words(),
        u64::from(pool.capacity_words()),
        "conservation violated",
    );
}

/// 1000 operations: sizes cycle through an uneven pattern, every third
/// live allocation is freed from the middle of the live set.
fn churn(pool: &mut WordPool) {
    let mut live: Vec<AllocHandle> = Vec::new();
    for i in 0u64..1000 {
        let size = (i * 7 % 61 + 1) as usize;
        if i % 3 == 2 && !live.is_empty() {
            let handle = live.remove(live.len() / 2);
            pool.free(handle);
        } else if let Ok(handle) = pool.allocate(size) {
            live.push(handle);
        }
        assert_invariants(pool);
    }
    for handle in live {
        pool.free(handle);
        assert_invariants(pool);
    }
    // Everything freed: the pool must have coalesced back to one hole.
    assert_eq!(pool.holes(), &[Hole::new(0, TOTAL_WORDS)]);
}

#[test]
fn best_fit_churn_preserves_invariants() {
    let mut pool = WordPool::new(PoolConfig::new(WORD_SIZE), Box::new(BestFit)).unwrap();
    pool.initialize(TOTAL_WORDS).unwrap();
    churn(&mut pool);
}

#[test]
fn worst_fit_churn_preserves_invariants() {
    let mut pool = WordPool::new(PoolConfig::new(WORD_SIZE), Box::new(WorstFit)).unwrap();
    pool.initialize(TOTAL_WORDS).unwrap();
    churn(&mut pool);
}

#[test]
fn strategy_swap_mid_churn_is_seamless() {
    let mut pool = WordPool::new(PoolConfig::new(WORD_SIZE), Box::new(BestFit)).unwrap();
    pool.initialize(TOTAL_WORDS).unwrap();

    let mut live = Vec::new();
    for i in 0u64..200 {
        if i == 100 {
            pool.set_strategy(Box::new(WorstFit));
        }
        let size = (i % 13 + 1) as usize * WORD_SIZE as usize;
        if i % 4 == 3 && !live.is_empty() {
            pool.free(live.remove(live.len() / 2));
        } else if let Ok(handle) = pool.allocate(size) {
            live.push(handle);
        }
        assert_invariants(&pool);
    }
}

#[test]
fn coalescing_end_to_end() {
    let mut pool = WordPool::new(PoolConfig::new(WORD_SIZE), Box::new(BestFit)).unwrap();
    pool.initialize(10).unwrap();

    let two_words = 2 * WORD_SIZE as usize;
    let a = pool.allocate(two_words).unwrap();
    let b = pool.allocate(two_words).unwrap();
    let c = pool.allocate(two_words).unwrap();
    assert_eq!(
        (a.byte_offset(), b.byte_offset(), c.byte_offset()),
        (0, 2 * u64::from(WORD_SIZE), 4 * u64::from(WORD_SIZE)),
    );

    // Middle block freed: its neighbours are live, so nothing merges.
    pool.free(b);
    assert_eq!(pool.holes(), &[Hole::new(2, 2), Hole::new(6, 4)]);

    // Freeing the outer blocks collapses everything into one hole.
    pool.free(a);
    pool.free(c);
    assert_eq!(pool.holes(), &[Hole::new(0, 10)]);
}
