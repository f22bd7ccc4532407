//! Rate limiting core.

pub mod key;
pub mod limiter;
pub mod memory;
pub mod policy;
pub mod redis;
pub mod store;
pub mod window;

pub use key::CounterKey;
pub use limiter::{Decision, RateLimiter};
pub use memory::MemoryCounterStore;
pub use policy::{Policy, PolicyResolver};
pub use redis::RedisCounterStore;
pub use store::CounterStore;
pub use window::WindowKind;
