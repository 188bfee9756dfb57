//! Simulator settings and request limits.

use chrono::{DateTime, Utc};
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

pub const DEFAULT_MAX_LOG_COUNT: u64 = 10_000;
pub const DEFAULT_MAX_TIME_SPREAD: u64 = 86_400;

/// Directory and limit settings shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct SimulatorOpts {
    /// Root directory of the schema catalog
    #[arg(long, global = true, default_value = "schemas", env = "LOG_SIM_SCHEMAS_DIR")]
    pub schemas_dir: PathBuf,

    /// Root directory of the template library
    #[arg(long, global = true, default_value = "templates", env = "LOG_SIM_TEMPLATES_DIR")]
    pub templates_dir: PathBuf,

    /// Maximum number of records per request
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_LOG_COUNT, env = "LOG_SIM_MAX_LOG_COUNT")]
    pub max_log_count: u64,

    /// Maximum time spread per request, in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TIME_SPREAD, env = "LOG_SIM_MAX_TIME_SPREAD")]
    pub max_time_spread: u64,
}

impl SimulatorOpts {
    pub fn limits(&self) -> GenerationLimits {
        GenerationLimits {
            max_log_count: self.max_log_count,
            max_time_spread: self.max_time_spread,
        }
    }
}

/// A request exceeded a configured ceiling.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LimitExceeded {
    #[error("Count exceeds maximum allowed ({max})")]
    Count { requested: u64, max: u64 },

    #[error("Time spread exceeds maximum allowed ({max} seconds)")]
    TimeSpread { requested: u64, max: u64 },
}

/// Ceilings checked before any generation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    pub max_log_count: u64,
    pub max_time_spread: u64,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_log_count: DEFAULT_MAX_LOG_COUNT,
            max_time_spread: DEFAULT_MAX_TIME_SPREAD,
        }
    }
}

impl GenerationLimits {
    pub fn check(&self, count: u64, spread_seconds: u64) -> Result<(), LimitExceeded> {
        if count > self.max_log_count {
            return Err(LimitExceeded::Count {
                requested: count,
                max: self.max_log_count,
            });
        }
        if spread_seconds > self.max_time_spread {
            return Err(LimitExceeded::TimeSpread {
                requested: spread_seconds,
                max: self.max_time_spread,
            });
        }
        Ok(())
    }
}

/// Parse a `path=value` override.
///
/// The value is read as JSON (`404`, `true`, `{"a":1}`); anything that is
/// not valid JSON is taken as a plain string.
pub fn parse_override(s: &str) -> Result<(String, Value), String> {
    let (path, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=VALUE, got '{s}'"))?;
    let path = path.trim();
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return Err(format!("invalid field path '{path}'"));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((path.to_string(), value))
}

/// Parse an RFC 3339 instant into UTC.
pub fn parse_base_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limits() {
        let limits = GenerationLimits::default();
        assert!(limits.check(10_000, 86_400).is_ok());
        assert_eq!(
            limits.check(10_001, 0),
            Err(LimitExceeded::Count {
                requested: 10_001,
                max: 10_000
            })
        );
        assert!(matches!(
            limits.check(1, 86_401),
            Err(LimitExceeded::TimeSpread { .. })
        ));
    }

    #[test]
    fn test_limit_messages() {
        let limits = GenerationLimits {
            max_log_count: 5,
            max_time_spread: 60,
        };
        assert_eq!(
            limits.check(6, 0).unwrap_err().to_string(),
            "Count exceeds maximum allowed (5)"
        );
        assert_eq!(
            limits.check(1, 61).unwrap_err().to_string(),
            "Time spread exceeds maximum allowed (60 seconds)"
        );
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("status=404").unwrap(),
            ("status".to_string(), json!(404))
        );
        assert_eq!(
            parse_override("actor.email=admin@example.com").unwrap(),
            ("actor.email".to_string(), json!("admin@example.com"))
        );
        assert_eq!(
            parse_override("tags=[\"a\",\"b\"]").unwrap(),
            ("tags".to_string(), json!(["a", "b"]))
        );
        assert_eq!(
            parse_override("note=a=b").unwrap(),
            ("note".to_string(), json!("a=b"))
        );
    }

    #[test]
    fn test_parse_override_rejects_bad_paths() {
        assert!(parse_override("novalue").is_err());
        assert!(parse_override("=1").is_err());
        assert!(parse_override("a..b=1").is_err());
    }

    #[test]
    fn test_parse_base_time() {
        let t = parse_base_time("2024-01-15T12:00:00+02:00").unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-15T10:00:00+00:00");
        assert!(parse_base_time("yesterday").is_err());
    }
}
