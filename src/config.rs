//! Env-var-backed configuration.
//!
//! All environment reads live here; other modules go through the structured
//! config instead of calling `std::env::var` directly.

use std::env;

pub const QGRAPHIC_QUIET: &str = "QGRAPHIC_QUIET";
pub const QGRAPHIC_LOG_LEVEL: &str = "QGRAPHIC_LOG_LEVEL";
pub const QGRAPHIC_LOG_JSON: &str = "QGRAPHIC_LOG_JSON";

/// Logging configuration, loaded once per process.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self {
            quiet: env_bool(QGRAPHIC_QUIET, false),
            log_level: env_or(QGRAPHIC_LOG_LEVEL, || {
                "qgraphic_launcher=info".to_string()
            }),
            log_json: env_bool(QGRAPHIC_LOG_JSON, false),
        })
    }
}

/// Read an environment variable, falling back to `default` when unset or empty.
pub fn env_or<F>(key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default)
}

/// Boolean environment variable: 0/false/no/off are false, anything else true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => parse_bool(&v),
        Err(_) => default,
    }
}

fn parse_bool(v: &str) -> bool {
    !matches!(
        v.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_truthy_and_falsy() {
        for v in ["1", "true", "yes", "on", "TRUE", " anything "] {
            assert!(parse_bool(v), "{v} should be truthy");
        }
        for v in ["0", "false", "no", "off", "OFF", " 0 "] {
            assert!(!parse_bool(v), "{v} should be falsy");
        }
    }
}
