//! Policy resolution: mapping a window kind and optional override limit to
//! a concrete limit + window duration.

use std::time::Duration;

use crate::config::LimitDefaults;
use crate::error::{FloodgateError, Result};

use super::window::WindowKind;

/// A resolved rate limit policy.
///
/// Immutable once built; the window duration is fixed per kind and is never
/// overridden, only the limit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// The window kind this policy counts within
    pub kind: WindowKind,
    /// Maximum requests allowed in the window, always positive
    pub limit: u32,
    /// Duration of the window
    pub window: Duration,
}

/// Resolves requested window kinds and per-call override limits into
/// concrete policies.
///
/// Owns the table of configured default limits. Resolution is a pure
/// function of its inputs and that table.
#[derive(Debug, Clone)]
pub struct PolicyResolver {
    defaults: LimitDefaults,
}

impl PolicyResolver {
    /// Create a resolver from configured defaults.
    pub fn new(defaults: LimitDefaults) -> Self {
        Self { defaults }
    }

    /// Resolve a policy for the given window kind name.
    ///
    /// The kind must name one of the supported windows; anything else fails
    /// with [`FloodgateError::UnknownPolicyKind`](crate::error::FloodgateError).
    /// A positive `override_limit` replaces the configured default limit for
    /// this call only; `None` or `Some(0)` means the default applies. The
    /// window duration always comes from the kind.
    ///
    /// Every resolved policy carries a positive limit: a zero default (only
    /// reachable when the defaults table bypassed configuration validation)
    /// fails with a `Config` error rather than producing a policy that
    /// denies everything.
    pub fn resolve(&self, kind: &str, override_limit: Option<u32>) -> Result<Policy> {
        let kind: WindowKind = kind.parse()?;

        let limit = match override_limit {
            Some(limit) if limit > 0 => limit,
            _ => self.defaults.limit_for(kind),
        };

        if limit == 0 {
            return Err(FloodgateError::Config(format!(
                "no positive limit configured for {} window",
                kind
            )));
        }

        Ok(Policy {
            kind,
            limit,
            window: kind.duration(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FloodgateError;

    fn resolver() -> PolicyResolver {
        PolicyResolver::new(LimitDefaults {
            max_requests_per_second: 2,
            max_requests_per_day: 10,
            max_requests_per_week: 5,
        })
    }

    #[test]
    fn test_resolve_uses_configured_defaults() {
        let policy = resolver().resolve("second", None).unwrap();
        assert_eq!(policy.kind, WindowKind::Second);
        assert_eq!(policy.limit, 2);
        assert_eq!(policy.window, Duration::from_secs(1));

        let policy = resolver().resolve("day", None).unwrap();
        assert_eq!(policy.limit, 10);

        let policy = resolver().resolve("week", None).unwrap();
        assert_eq!(policy.limit, 5);
    }

    #[test]
    fn test_resolve_with_override() {
        let policy = resolver().resolve("second", Some(7)).unwrap();
        assert_eq!(policy.limit, 7);
        // Duration is never overridden
        assert_eq!(policy.window, Duration::from_secs(1));
    }

    #[test]
    fn test_zero_override_same_as_none() {
        let with_zero = resolver().resolve("day", Some(0)).unwrap();
        let with_none = resolver().resolve("day", None).unwrap();
        assert_eq!(with_zero, with_none);
    }

    #[test]
    fn test_zero_default_fails_instead_of_denying_everything() {
        let resolver = PolicyResolver::new(LimitDefaults {
            max_requests_per_second: 0,
            max_requests_per_day: 10,
            max_requests_per_week: 5,
        });

        let err = resolver.resolve("second", None).unwrap_err();
        assert!(matches!(err, FloodgateError::Config(_)));

        // A positive per-call override still resolves
        let policy = resolver.resolve("second", Some(3)).unwrap();
        assert_eq!(policy.limit, 3);

        // Other kinds keep their valid defaults
        let policy = resolver.resolve("day", None).unwrap();
        assert_eq!(policy.limit, 10);
    }

    #[test]
    fn test_resolve_unknown_kind_fails() {
        let err = resolver().resolve("hour", None).unwrap_err();
        assert!(matches!(err, FloodgateError::UnknownPolicyKind(ref s) if s == "hour"));

        // Unknown kinds never fall back to a default policy, even with an
        // override limit present
        let err = resolver().resolve("hour", Some(5)).unwrap_err();
        assert!(matches!(err, FloodgateError::UnknownPolicyKind(_)));
    }
}
