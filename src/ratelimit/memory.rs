//! In-process counter store implementation.

use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::error::Result;

use super::key::CounterKey;
use super::store::CounterStore;

/// A counter window entry: the count and its expiry deadline.
#[derive(Debug)]
struct WindowCell {
    count: u64,
    expires_at: Instant,
}

/// In-process counter store.
///
/// Suitable for single-instance deployments and tests. The expiry check,
/// reset, and increment all happen while holding the map's exclusive entry
/// guard, so concurrent callers sharing a key observe a single consistent
/// sequence of counts.
///
/// Expired cells are replaced lazily on the next increment of the same key
/// and swept out of the map by [`purge_expired`](Self::purge_expired), which
/// [`len`](Self::len) invokes before counting.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    cells: DashMap<CounterKey, WindowCell>,
}

impl MemoryCounterStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            cells: DashMap::new(),
        }
    }

    /// Drop cells whose window has already elapsed.
    ///
    /// Increments only replace the expired cell of their own key, so a
    /// workload spread over many distinct logical keys should call this
    /// periodically to keep the map bounded.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.cells.retain(|_, cell| now < cell.expires_at);
    }

    /// Get the number of live counter cells.
    pub fn len(&self) -> usize {
        self.purge_expired();
        self.cells.len()
    }

    /// Check whether the store holds no live cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all counters.
    ///
    /// This is primarily useful for testing.
    pub fn clear(&self) {
        self.cells.clear();
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment_with_window(&self, key: &CounterKey, window: Duration) -> Result<u64> {
        let now = Instant::now();

        let mut cell = self.cells.entry(key.clone()).or_insert_with(|| WindowCell {
            count: 0,
            expires_at: now + window,
        });

        if now >= cell.expires_at {
            // Previous window elapsed; this increment starts a fresh one
            cell.count = 0;
            cell.expires_at = now + window;
        }

        cell.count += 1;
        Ok(cell.count)
    }
}
