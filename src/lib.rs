//! Floodgate - Fixed-Window Rate Limiting Core
//!
//! This crate implements the decision engine for request rate limiting:
//! resolving which policy (limit + window) applies to a call, and atomically
//! testing-and-incrementing a shared counter against that policy. Counters
//! live behind the [`ratelimit::CounterStore`] abstraction, so decisions stay
//! consistent across multiple service instances sharing a backend such as
//! Redis.
//!
//! The crate has no transport layer of its own; a request-handling layer
//! extracts the caller identity, declares per-route policy, and maps the
//! resulting [`ratelimit::Decision`] (or error) to a response.

pub mod config;
pub mod error;
pub mod ratelimit;
