//! Configuration management for Floodgate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{FloodgateError, Result};
use crate::ratelimit::WindowKind;

/// Main configuration for the rate limiting core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimiterConfig {
    /// Default limits per window kind
    #[serde(default)]
    pub defaults: LimitDefaults,

    /// Namespace prefix for counter keys in the shared store
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Per-route policy declarations, keyed by route name
    #[serde(default)]
    pub routes: HashMap<String, RouteLimit>,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            defaults: LimitDefaults::default(),
            namespace: default_namespace(),
            routes: HashMap::new(),
        }
    }
}

fn default_namespace() -> String {
    "rate-limit".to_string()
}

/// Default request limits for each window kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitDefaults {
    /// Maximum requests per second window
    #[serde(default = "default_per_second")]
    pub max_requests_per_second: u32,

    /// Maximum requests per day window
    #[serde(default = "default_per_day")]
    pub max_requests_per_day: u32,

    /// Maximum requests per week window
    #[serde(default = "default_per_week")]
    pub max_requests_per_week: u32,
}

impl Default for LimitDefaults {
    fn default() -> Self {
        Self {
            max_requests_per_second: default_per_second(),
            max_requests_per_day: default_per_day(),
            max_requests_per_week: default_per_week(),
        }
    }
}

fn default_per_second() -> u32 {
    2
}

fn default_per_day() -> u32 {
    10
}

fn default_per_week() -> u32 {
    5
}

impl LimitDefaults {
    /// Get the default limit for a window kind.
    pub fn limit_for(&self, kind: WindowKind) -> u32 {
        match kind {
            WindowKind::Second => self.max_requests_per_second,
            WindowKind::Day => self.max_requests_per_day,
            WindowKind::Week => self.max_requests_per_week,
        }
    }
}

/// Policy declaration attached to a single route at startup.
///
/// Replaces runtime annotation dispatch: the request-handling layer resolves
/// the route's `RouteLimit` once and passes its fields into the limiter
/// unchanged on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLimit {
    /// Name of the request header carrying the logical key (user id, IP,
    /// device id). Extracting and validating the header value is the
    /// request-handling layer's job.
    pub key_header: String,

    /// Window kind for this route ("second", "day", "week")
    pub window: String,

    /// Optional per-route limit override; the configured default for the
    /// window kind applies when absent or zero
    #[serde(default)]
    pub limit: Option<u32>,
}

impl LimiterConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: LimiterConfig =
            serde_yaml::from_str(yaml).map_err(|e| FloodgateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Every default limit must be positive, and every route must name a
    /// recognized window kind.
    pub fn validate(&self) -> Result<()> {
        if self.defaults.max_requests_per_second == 0
            || self.defaults.max_requests_per_day == 0
            || self.defaults.max_requests_per_week == 0
        {
            return Err(FloodgateError::Config(
                "default limits must be positive".to_string(),
            ));
        }

        for (name, route) in &self.routes {
            route.window.parse::<WindowKind>().map_err(|_| {
                FloodgateError::Config(format!(
                    "route '{}' names unknown window kind '{}'",
                    name, route.window
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = LimiterConfig::default();
        assert_eq!(config.defaults.max_requests_per_second, 2);
        assert_eq!(config.defaults.max_requests_per_day, 10);
        assert_eq!(config.defaults.max_requests_per_week, 5);
        assert_eq!(config.namespace, "rate-limit");
    }

    #[test]
    fn test_limit_for_kind() {
        let defaults = LimitDefaults::default();
        assert_eq!(defaults.limit_for(WindowKind::Second), 2);
        assert_eq!(defaults.limit_for(WindowKind::Day), 10);
        assert_eq!(defaults.limit_for(WindowKind::Week), 5);
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
defaults:
  max_requests_per_second: 5
  max_requests_per_day: 100
namespace: "myapp"
routes:
  create_post:
    key_header: "X-User-Id"
    window: "second"
    limit: 5
  create_account:
    key_header: "X-IP-Address"
    window: "day"
    limit: 3
  claim_reward:
    key_header: "X-Device-Id"
    window: "week"
"#;

        let config = LimiterConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.defaults.max_requests_per_second, 5);
        assert_eq!(config.defaults.max_requests_per_day, 100);
        assert_eq!(config.defaults.max_requests_per_week, 5);
        assert_eq!(config.namespace, "myapp");

        let route = config.routes.get("create_post").unwrap();
        assert_eq!(route.key_header, "X-User-Id");
        assert_eq!(route.window, "second");
        assert_eq!(route.limit, Some(5));

        let route = config.routes.get("claim_reward").unwrap();
        assert_eq!(route.limit, None);
    }

    #[test]
    fn test_zero_default_limit_rejected() {
        let yaml = r#"
defaults:
  max_requests_per_day: 0
"#;
        let result = LimiterConfig::from_yaml(yaml);
        assert!(matches!(result, Err(FloodgateError::Config(_))));
    }

    #[test]
    fn test_unknown_route_window_rejected() {
        let yaml = r#"
routes:
  create_post:
    key_header: "X-User-Id"
    window: "fortnight"
"#;
        let result = LimiterConfig::from_yaml(yaml);
        assert!(matches!(result, Err(FloodgateError::Config(_))));
    }
}
