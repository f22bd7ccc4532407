//! Counter store trait for abstracting in-process and shared backends.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;

use super::key::CounterKey;

/// Trait for shared counter store implementations.
///
/// The store exclusively owns counter lifetime: counters are created
/// implicitly on first increment and reclaimed only by TTL expiry. Callers
/// hold no authoritative copy of any count between calls.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increment the counter for `key` and return the new count.
    ///
    /// On the first increment for a key (no counter, or the previous one
    /// expired) the result is 1 and the counter is set to expire `window`
    /// after this call; the value and its expiry become visible together,
    /// never one without the other. Later increments within the live window
    /// return previous + 1 and leave the expiry untouched, so the window
    /// does not slide.
    ///
    /// Fails with [`FloodgateError::StoreUnavailable`](crate::error::FloodgateError)
    /// when the backing store cannot be reached.
    async fn increment_with_window(&self, key: &CounterKey, window: Duration) -> Result<u64>;
}
