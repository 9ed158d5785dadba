//! Dashboard Configuration
//!
//! The API base is always derived from the page location at startup. The
//! remaining knobs (retry policy, toast timeout, log level) have compiled-in
//! defaults and may be overridden by an inline JSON block in `index.html`:
//!
//! ```html
//! <script id="gekko-config" type="application/json">
//!   { "fetch_retries": 4, "log_level": "debug" }
//! </script>
//! ```

use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Base endpoint used when no browser location is available
pub const DEFAULT_API_BASE: &str = "http://localhost:8050";

/// Element id of the optional inline config block
pub const CONFIG_ELEMENT_ID: &str = "gekko-config";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Inline config block is not valid JSON for [`DashboardConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of range
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Dashboard runtime configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Root all resources are fetched from; never read from the inline block
    #[serde(skip, default = "default_api_base")]
    pub api_base: String,

    /// Extra attempts for retryable fetch failures
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: u32,

    #[serde(default = "default_retry_base_delay")]
    pub retry_base_delay_ms: u32,

    #[serde(default = "default_retry_max_delay")]
    pub retry_max_delay_ms: u32,

    /// How long an error toast stays on screen
    #[serde(default = "default_toast_timeout")]
    pub toast_timeout_ms: u32,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_fetch_retries() -> u32 {
    2
}

fn default_retry_base_delay() -> u32 {
    500
}

fn default_retry_max_delay() -> u32 {
    8000
}

fn default_toast_timeout() -> u32 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            fetch_retries: default_fetch_retries(),
            retry_base_delay_ms: default_retry_base_delay(),
            retry_max_delay_ms: default_retry_max_delay(),
            toast_timeout_ms: default_toast_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration for the running page.
    ///
    /// Reads the inline config block if the page has one, then derives the
    /// API base from `window.location`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match inline_config_text() {
            Some(text) => Self::from_json(&text)?,
            None => Self::default(),
        };
        config.api_base = location_api_base().unwrap_or_else(default_api_base);
        Ok(config)
    }

    /// Defaults plus the location-derived API base
    pub fn from_location() -> Self {
        Self {
            api_base: location_api_base().unwrap_or_else(default_api_base),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_base_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "retry_base_delay_ms must be greater than zero".to_string(),
            ));
        }
        if self.retry_max_delay_ms < self.retry_base_delay_ms {
            return Err(ConfigError::Validation(format!(
                "retry_max_delay_ms ({}) is below retry_base_delay_ms ({})",
                self.retry_max_delay_ms, self.retry_base_delay_ms
            )));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Validation(format!("unknown log level: {}", self.log_level)))
    }

    /// Full URL of a named resource under the API base
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), resource)
    }

    /// Back-off before retry number `attempt` (zero based), capped at
    /// `retry_max_delay_ms`
    pub fn retry_delay_ms(&self, attempt: u32) -> u32 {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.retry_base_delay_ms
            .saturating_mul(factor)
            .min(self.retry_max_delay_ms)
    }
}

/// Build the API base from a page hostname and port.
///
/// The protocol is always plain HTTP. An empty port means the scheme default.
pub fn api_base_from_parts(hostname: &str, port: &str) -> String {
    if port.is_empty() {
        format!("http://{}", hostname)
    } else {
        format!("http://{}:{}", hostname, port)
    }
}

fn location_api_base() -> Option<String> {
    let location = web_sys::window()?.location();
    let hostname = location.hostname().ok()?;
    if hostname.is_empty() {
        return None;
    }
    let port = location.port().unwrap_or_default();
    Some(api_base_from_parts(&hostname, &port))
}

fn inline_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_from_parts() {
        assert_eq!(api_base_from_parts("example.org", "8050"), "http://example.org:8050");
        assert_eq!(api_base_from_parts("example.org", ""), "http://example.org");
    }

    #[test]
    fn test_resource_url_trims_trailing_slash() {
        let config = DashboardConfig {
            api_base: "http://127.0.0.1:9000/".to_string(),
            ..DashboardConfig::default()
        };
        assert_eq!(config.resource_url("get_data"), "http://127.0.0.1:9000/get_data");
    }

    #[test]
    fn test_from_json_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_from_json_ignores_api_base() {
        let config =
            DashboardConfig::from_json(r#"{"api_base": "http://evil", "fetch_retries": 5}"#)
                .unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.fetch_retries, 5);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{"log_level": "loud"}"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{"retry_base_delay_ms": 1000, "retry_max_delay_ms": 10}"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_retry_delay_schedule() {
        let config = DashboardConfig::default();
        assert_eq!(config.retry_delay_ms(0), 500);
        assert_eq!(config.retry_delay_ms(1), 1000);
        assert_eq!(config.retry_delay_ms(3), 4000);
        assert_eq!(config.retry_delay_ms(4), 8000);
        assert_eq!(config.retry_delay_ms(10), 8000);
        assert_eq!(config.retry_delay_ms(40), 8000);
    }

    #[test]
    fn test_level() {
        let config = DashboardConfig {
            log_level: "debug".to_string(),
            ..DashboardConfig::default()
        };
        assert_eq!(config.level().unwrap(), log::Level::Debug);
    }
}
