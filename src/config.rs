//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally adjusted by the
//! command line, and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Prefix for generated short URLs (default: `http://localhost:8080`)
//! - `LINK_TTL_SECONDS` - Age after which entries are swept (default: 3600)
//! - `SWEEP_INTERVAL_SECONDS` - Time between sweeps (default: 3600)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export BASE_URL="https://s.example.com"
//! export LINK_TTL_SECONDS="86400"
//! ```

use anyhow::Result;
use chrono::TimeDelta;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Upper bound for TTL and sweep interval: 30 days.
const MAX_PERIOD_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    /// Entries older than this are removed by the next sweep.
    pub link_ttl_seconds: u64,
    pub sweep_interval_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let link_ttl_seconds = env::var("LINK_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let sweep_interval_seconds = env::var("SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Ok(Self {
            listen_addr,
            base_url,
            link_ttl_seconds,
            sweep_interval_seconds,
            log_level,
            log_format,
        })
    }

    /// Replaces the port of the listen address, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        let host = self
            .listen_addr
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or("0.0.0.0");

        self.listen_addr = format!("{}:{}", host, port);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a `host:port` socket address
    /// - `base_url` is not an `http://` or `https://` URL
    /// - the TTL or sweep interval is zero or longer than 30 days
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.link_ttl_seconds == 0 || self.link_ttl_seconds > MAX_PERIOD_SECONDS {
            anyhow::bail!(
                "LINK_TTL_SECONDS must be between 1 and {}, got {}",
                MAX_PERIOD_SECONDS,
                self.link_ttl_seconds
            );
        }

        if self.sweep_interval_seconds == 0 || self.sweep_interval_seconds > MAX_PERIOD_SECONDS {
            anyhow::bail!(
                "SWEEP_INTERVAL_SECONDS must be between 1 and {}, got {}",
                MAX_PERIOD_SECONDS,
                self.sweep_interval_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Entry time-to-live.
    pub fn link_ttl(&self) -> TimeDelta {
        // Bounded by validate(), so the cast cannot wrap.
        TimeDelta::seconds(self.link_ttl_seconds as i64)
    }

    /// Period of the sweep worker.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Link TTL: {}s", self.link_ttl_seconds);
        tracing::info!("  Sweep interval: {}s", self.sweep_interval_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            link_ttl_seconds: 3600,
            sweep_interval_seconds: 3600,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.base_url = "localhost:8080".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://s.example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_periods() {
        let mut config = valid_config();

        config.link_ttl_seconds = 0;
        assert!(config.validate().is_err());

        config.link_ttl_seconds = MAX_PERIOD_SECONDS + 1;
        assert!(config.validate().is_err());

        config.link_ttl_seconds = MAX_PERIOD_SECONDS;
        assert!(config.validate().is_ok());

        config.sweep_interval_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_port_keeps_host() {
        let config = valid_config().with_port(9000);
        assert_eq!(config.listen_addr, "0.0.0.0:9000");

        let mut config = valid_config();
        config.listen_addr = "127.0.0.1:3000".to_string();
        assert_eq!(config.with_port(4000).listen_addr, "127.0.0.1:4000");
    }

    #[test]
    fn test_durations() {
        let mut config = valid_config();
        config.link_ttl_seconds = 90;
        config.sweep_interval_seconds = 30;

        assert_eq!(config.link_ttl(), TimeDelta::seconds(90));
        assert_eq!(config.sweep_interval(), Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("LINK_TTL_SECONDS");
            env::remove_var("SWEEP_INTERVAL_SECONDS");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.link_ttl_seconds, 3600);
        assert_eq!(config.sweep_interval_seconds, 3600);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9999");
            env::set_var("BASE_URL", "https://s.example.com");
            env::set_var("LINK_TTL_SECONDS", "60");
            env::set_var("SWEEP_INTERVAL_SECONDS", "not-a-number");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9999");
        assert_eq!(config.base_url, "https://s.example.com");
        assert_eq!(config.link_ttl_seconds, 60);
        assert_eq!(config.sweep_interval_seconds, 3600);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("LINK_TTL_SECONDS");
            env::remove_var("SWEEP_INTERVAL_SECONDS");
        }
    }
}
