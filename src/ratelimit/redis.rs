//! Redis-backed counter store implementation.
//!
//! Counters live in Redis so that rate limit decisions are shared by every
//! service instance pointed at the same server. The increment and the
//! first-call expiry are performed by a single server-side script, which
//! keeps the operation atomic under concurrent callers and costs exactly
//! one round trip per check.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{Client, Script};
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::error::{FloodgateError, Result};

use super::key::CounterKey;
use super::store::CounterStore;

/// Increments the counter and arms its expiry on first creation.
///
/// `INCR` creates the key at 1 when absent, so a result of 1 means this call
/// opened a new window and must set the TTL. Both commands execute inside
/// one script invocation; no other client can observe the counter without
/// its expiry.
const INCREMENT_WITH_WINDOW: &str = r#"
local count = redis.call('INCR', KEYS[1])
if count == 1 then
    redis.call('PEXPIRE', KEYS[1], ARGV[1])
end
return count
"#;

/// Shared counter store backed by Redis.
///
/// Connections are multiplexed through `redis::aio::ConnectionManager`,
/// which reconnects automatically; a request that races a dropped
/// connection still surfaces as
/// [`FloodgateError::StoreUnavailable`] and is the caller's to retry.
pub struct RedisCounterStore {
    connection: ConnectionManager,
    script: Script,
}

impl fmt::Debug for RedisCounterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCounterStore").finish_non_exhaustive()
    }
}

impl RedisCounterStore {
    /// Connect to Redis.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g., "redis://127.0.0.1/")
    ///
    /// # Errors
    /// Returns [`FloodgateError::StoreUnavailable`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self> {
        let client =
            Client::open(url).map_err(|e| FloodgateError::StoreUnavailable(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| FloodgateError::StoreUnavailable(e.to_string()))?;

        debug!(url = %url, "Connected to Redis counter store");

        Ok(Self {
            connection,
            script: Script::new(INCREMENT_WITH_WINDOW),
        })
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment_with_window(&self, key: &CounterKey, window: Duration) -> Result<u64> {
        // ConnectionManager clones share one multiplexed connection
        let mut connection = self.connection.clone();

        let count: u64 = self
            .script
            .key(key.as_str())
            .arg(window.as_millis() as u64)
            .invoke_async(&mut connection)
            .await
            .map_err(|e| FloodgateError::StoreUnavailable(e.to_string()))?;

        Ok(count)
    }
}
