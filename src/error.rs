//! Error types for the Floodgate crate.

use thiserror::Error;

/// Main error type for Floodgate operations.
#[derive(Error, Debug)]
pub enum FloodgateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller requested a window kind the resolver does not recognize.
    /// Never silently substituted with a default.
    #[error("Unknown rate limit window kind: {0}")]
    UnknownPolicyKind(String),

    /// An empty logical key was passed to a rate limit check. A programming
    /// error in the caller, surfaced immediately.
    #[error("Rate limit key must not be empty")]
    InvalidKey,

    /// The backing counter store could not be reached or timed out.
    /// Transient; callers may retry with backoff. Distinct from a deny
    /// decision so operators can tell throttling apart from infrastructure
    /// failure.
    #[error("Counter store unavailable: {0}")]
    StoreUnavailable(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Floodgate operations.
pub type Result<T> = std::result::Result<T, FloodgateError>;
