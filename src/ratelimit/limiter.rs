//! Core rate limiter implementation.

use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::RouteLimit;
use crate::error::{FloodgateError, Result};

use super::key::CounterKey;
use super::policy::PolicyResolver;
use super::store::CounterStore;

/// The outcome of one rate limit check.
///
/// Computed per call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Whether the request is within the limit
    pub allowed: bool,
    /// The count observed for this window, including this request
    pub current_count: u64,
    /// The limit the count was tested against
    pub limit: u32,
}

impl Decision {
    /// Get the remaining quota in the current window.
    pub fn remaining(&self) -> u64 {
        u64::from(self.limit).saturating_sub(self.current_count)
    }
}

/// The rate limiter that turns a policy lookup and one atomic counter
/// increment into an allow/deny decision.
///
/// Holds no counter state of its own: every check re-increments the
/// authoritative count in the shared store, so the same key is throttled
/// consistently across all instances sharing that store. Safe to share
/// across tasks behind an `Arc`.
pub struct RateLimiter {
    resolver: PolicyResolver,
    store: Arc<dyn CounterStore>,
    namespace: String,
}

impl RateLimiter {
    /// Create a rate limiter over the given store.
    pub fn new(resolver: PolicyResolver, store: Arc<dyn CounterStore>, namespace: String) -> Self {
        Self {
            resolver,
            store,
            namespace,
        }
    }

    /// Check the rate limit for a logical key within a window kind.
    ///
    /// A positive `override_limit` replaces the configured default for this
    /// call; `None` or `Some(0)` uses the default. The decision is boundary
    /// inclusive: the request that lands exactly on the limit is still
    /// allowed, only counts above it are denied.
    ///
    /// Exactly one store round trip per call. A
    /// [`FloodgateError::StoreUnavailable`] from the store propagates
    /// unchanged; whether to then fail open or closed is the caller's
    /// deployment policy (denying on store failure is the safe default).
    pub async fn check(
        &self,
        logical_key: &str,
        kind: &str,
        override_limit: Option<u32>,
    ) -> Result<Decision> {
        if logical_key.is_empty() {
            return Err(FloodgateError::InvalidKey);
        }

        let policy = self.resolver.resolve(kind, override_limit)?;
        let key = CounterKey::new(&self.namespace, policy.kind, logical_key);

        trace!(
            key = %key,
            limit = policy.limit,
            window = ?policy.window,
            "Checking rate limit"
        );

        let current_count = self.store.increment_with_window(&key, policy.window).await?;
        let allowed = current_count <= u64::from(policy.limit);

        if !allowed {
            debug!(
                key = %key,
                count = current_count,
                limit = policy.limit,
                "Rate limit exceeded"
            );
        }

        Ok(Decision {
            allowed,
            current_count,
            limit: policy.limit,
        })
    }

    /// Check the rate limit for a route's declared policy.
    ///
    /// Routes declare their window kind and optional override once in
    /// configuration; the request-handling layer extracts the logical key
    /// from the header the route names and passes both through unchanged.
    pub async fn check_route(&self, route: &RouteLimit, logical_key: &str) -> Result<Decision> {
        self.check(logical_key, &route.window, route.limit).await
    }
}
