//! The [`WordPool`] allocator engine.
//!
//! Owns the backing store, the hole set, and the allocation table, and
//! implements the initialize/allocate/free/shutdown protocol. Placement
//! is delegated to the configured [`PlacementStrategy`]; the pool does
//! all bookkeeping itself and never trusts the strategy's answer
//! without validating it against the current hole set.

use indexmap::IndexMap;
use smallvec::SmallVec;

use lacuna_core::{Hole, PlacementStrategy};

use crate::bitmap::OccupancyBitmap;
use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::AllocHandle;

/// Inline capacity of the hole set. Pools under churn rarely fragment
/// into more runs than this, so the set usually lives on the stack.
const HOLE_SET_INLINE: usize = 8;

/// A simulated word-addressed allocator over one contiguous buffer.
///
/// # Lifecycle
///
/// ```text
/// Uninitialized --initialize--> Ready --shutdown--> Uninitialized
/// ```
///
/// `Ready` self-loops on `allocate`/`free`/`set_strategy` and all
/// introspection calls; `initialize` on a `Ready` pool implicitly shuts
/// it down first. Allocation and free requests against an
/// `Uninitialized` pool fail (or no-op) without corrupting state.
///
/// # Invariants
///
/// In every reachable state: holes are offset-ordered, pairwise
/// non-overlapping, never contiguous, and
/// `Σ hole.length + Σ allocation.length == capacity_words()`.
///
/// Single-threaded by design: nothing here synchronizes. A caller that
/// needs cross-thread access must serialize it externally.
pub struct WordPool {
    config: PoolConfig,
    /// Backing store; `None` means the pool is uninitialized.
    store: Option<Vec<u8>>,
    /// Free runs, ordered by offset.
    holes: SmallVec<[Hole; HOLE_SET_INLINE]>,
    /// Live allocations: handle → length in words. Insertion-ordered
    /// for deterministic diagnostics.
    allocations: IndexMap<AllocHandle, u32>,
    strategy: Box<dyn PlacementStrategy>,
}

impl WordPool {
    /// Create an uninitialized pool with the given config and policy.
    pub fn new(
        config: PoolConfig,
        strategy: Box<dyn PlacementStrategy>,
    ) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self {
            config,
            store: None,
            holes: SmallVec::new(),
            allocations: IndexMap::new(),
            strategy,
        })
    }

    /// Acquire a zero-filled backing store of `size_in_words` words and
    /// reset to a single hole spanning the whole store.
    ///
    /// An already-initialized pool is shut down first, dropping every
    /// live allocation. Capacity 0 is legal and yields a pool that can
    /// satisfy no request. On store-acquisition failure the pool is
    /// left `Uninitialized`, never partially set up.
    pub fn initialize(&mut self, size_in_words: u32) -> Result<(), PoolError> {
        if self.store.is_some() {
            self.shutdown();
        }

        let requested_bytes = u64::from(size_in_words) * u64::from(self.config.word_size);
        let len = usize::try_from(requested_bytes)
            .map_err(|_| PoolError::StoreAllocationFailed { requested_bytes })?;
        let mut store = Vec::new();
        store
            .try_reserve_exact(len)
            .map_err(|_| PoolError::StoreAllocationFailed { requested_bytes })?;
        store.resize(len, 0);

        self.store = Some(store);
        self.holes.clear();
        if size_in_words > 0 {
            self.holes.push(Hole::new(0, size_in_words));
        }
        self.allocations.clear();
        Ok(())
    }

    /// Release the backing store and clear all bookkeeping.
    ///
    /// Idempotent; a no-op on an uninitialized pool.
    pub fn shutdown(&mut self) {
        self.store = None;
        self.holes.clear();
        self.allocations.clear();
    }

    /// Allocate `size_in_bytes` bytes, rounded up to whole words.
    ///
    /// The configured strategy picks the hole; the allocation is carved
    /// from the hole's low end. A failed allocation (no fit, zero-sized
    /// request, uninitialized pool) leaves the pool untouched and is
    /// never fatal.
    pub fn allocate(&mut self, size_in_bytes: usize) -> Result<AllocHandle, PoolError> {
        if self.store.is_none() {
            return Err(PoolError::Uninitialized);
        }
        if size_in_bytes == 0 {
            return Err(PoolError::ZeroSizedRequest);
        }

        let words_needed = (size_in_bytes as u64).div_ceil(u64::from(self.config.word_size));
        let Ok(words) = u32::try_from(words_needed) else {
            // Wider than any hole's length field can express, so no
            // hole can hold it.
            return Err(PoolError::CapacityExhausted {
                requested_words: words_needed,
            });
        };

        let Some(offset) = self.strategy.choose(words, &self.holes) else {
            return Err(PoolError::CapacityExhausted {
                requested_words: words_needed,
            });
        };

        let index = self
            .holes
            .iter()
            .position(|h| h.offset == offset)
            .filter(|&i| self.holes[i].fits(words));
        let Some(index) = index else {
            // Contract violation: the offset names no hole that can
            // hold the request. Applying it would corrupt the hole
            // set, so the call fails as if nothing fit.
            log::warn!(
                "strategy '{}' chose offset {offset}, which is not a hole of >= {words} words",
                self.strategy.name(),
            );
            return Err(PoolError::CapacityExhausted {
                requested_words: words_needed,
            });
        };

        if self.holes[index].length == words {
            self.holes.remove(index);
        } else {
            let hole = &mut self.holes[index];
            hole.offset += words;
            hole.length -= words;
        }

        let handle = AllocHandle::new(u64::from(offset) * u64::from(self.config.word_size));
        self.allocations.insert(handle, words);
        Ok(handle)
    }

    /// Free a live allocation, returning its range to the hole set and
    /// coalescing with any adjacent holes.
    ///
    /// A no-op (not an error) when the pool is uninitialized or the
    /// handle is not currently live — including handles that were
    /// already freed.
    pub fn free(&mut self, handle: AllocHandle) {
        if self.store.is_none() {
            return;
        }
        let Some(length) = self.allocations.shift_remove(&handle) else {
            return;
        };
        let offset = (handle.byte_offset() / u64::from(self.config.word_size)) as u32;
        self.holes.push(Hole::new(offset, length));
        self.coalesce();
    }

    /// Sort holes by offset and merge adjacent runs. One linear pass
    /// suffices because holes are pairwise non-overlapping.
    fn coalesce(&mut self) {
        self.holes.sort_unstable();
        let mut merged: SmallVec<[Hole; HOLE_SET_INLINE]> =
            SmallVec::with_capacity(self.holes.len());
        for hole in self.holes.drain(..) {
            match merged.last_mut() {
                Some(prev) if prev.end() == u64::from(hole.offset) => prev.length += hole.length,
                _ => merged.push(hole),
            }
        }
        self.holes = merged;
    }

    /// Replace the placement policy. Takes effect on the next
    /// `allocate`; existing allocations are unaffected.
    pub fn set_strategy(&mut self, strategy: Box<dyn PlacementStrategy>) {
        self.strategy = strategy;
    }

    /// Name of the currently configured placement policy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    // ── Introspection ───────────────────────────────────────────────

    /// The current hole set, ordered by offset.
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Derive the bit-per-word occupancy map, or `None` when the pool
    /// is uninitialized. Cost is proportional to the word count.
    pub fn occupancy_bitmap(&self) -> Option<OccupancyBitmap> {
        self.store.as_ref()?;
        Some(OccupancyBitmap::from_holes(self.capacity_words(), &self.holes))
    }

    /// Bytes per word.
    pub fn word_size(&self) -> u32 {
        self.config.word_size
    }

    /// Whether the pool currently owns a backing store.
    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// Total managed capacity in bytes; 0 when uninitialized.
    pub fn capacity_bytes(&self) -> usize {
        self.store.as_ref().map_or(0, Vec::len)
    }

    /// Total managed capacity in words; 0 when uninitialized.
    pub fn capacity_words(&self) -> u32 {
        (self.capacity_bytes() / self.config.word_size as usize) as u32
    }

    /// The backing store, or `None` when uninitialized.
    pub fn store(&self) -> Option<&[u8]> {
        self.store.as_deref()
    }

    /// Memory usage of the backing store in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity_bytes()
    }

    /// Total free words across all holes.
    pub fn free_words(&self) -> u64 {
        self.holes.iter().map(|h| u64::from(h.length)).sum()
    }

    /// Total allocated words across all live allocations.
    pub fn used_words(&self) -> u64 {
        self.allocations.values().map(|&w| u64::from(w)).sum()
    }

    /// Number of live allocations.
    pub fn allocation_count(&self) -> usize {
        self.allocations.len()
    }

    /// The byte range of a live allocation.
    ///
    /// Returns `None` for dead handles (freed, never issued, or issued
    /// before the last initialize/shutdown). The slice length is the
    /// allocation's word count times the word size.
    pub fn resolve(&self, handle: AllocHandle) -> Option<&[u8]> {
        let words = *self.allocations.get(&handle)?;
        let store = self.store.as_deref()?;
        let start = usize::try_from(handle.byte_offset()).ok()?;
        let len = words as usize * self.config.word_size as usize;
        store.get(start..start + len)
    }

    /// Mutable access to the byte range of a live allocation.
    ///
    /// Returns `None` for dead handles.
    pub fn resolve_mut(&mut self, handle: AllocHandle) -> Option<&mut [u8]> {
        let words = *self.allocations.get(&handle)?;
        let start = usize::try_from(handle.byte_offset()).ok()?;
        let len = words as usize * self.config.word_size as usize;
        let store = self.store.as_deref_mut()?;
        store.get_mut(start..start + len)
    }
}
