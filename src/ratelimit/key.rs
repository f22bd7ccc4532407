//! Counter key generation.

use std::fmt;

use super::window::WindowKind;

/// A key that uniquely identifies one shared counter.
///
/// Composed as `namespace:kind:logical_key`. The namespace and kind segments
/// come from fixed, colon-free vocabularies, so two distinct
/// `(logical_key, kind)` pairs can never produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CounterKey(String);

impl CounterKey {
    /// Build the counter key for a logical key within a window kind.
    pub fn new(namespace: &str, kind: WindowKind, logical_key: &str) -> Self {
        Self(format!("{}:{}:{}", namespace, kind, logical_key))
    }

    /// The key as a string slice, suitable for use as a store key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_composition() {
        let key = CounterKey::new("rate-limit", WindowKind::Second, "user123");
        assert_eq!(key.as_str(), "rate-limit:second:user123");
    }

    #[test]
    fn test_same_pair_same_key() {
        let a = CounterKey::new("rate-limit", WindowKind::Day, "192.168.1.1");
        let b = CounterKey::new("rate-limit", WindowKind::Day, "192.168.1.1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_pairs_distinct_keys() {
        let by_key = CounterKey::new("rate-limit", WindowKind::Day, "user-a");
        let other_key = CounterKey::new("rate-limit", WindowKind::Day, "user-b");
        assert_ne!(by_key, other_key);

        let by_kind = CounterKey::new("rate-limit", WindowKind::Week, "user-a");
        assert_ne!(by_key, by_kind);
    }
}
