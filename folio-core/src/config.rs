//! Site configuration.

use std::path::PathBuf;
use std::time::Duration;

use mailrelay::RelayConfig;

use crate::timer::DEFAULT_REVEAL_INTERVAL;

/// Configuration for a portfolio session.
#[derive(Debug, Clone)]
pub struct FolioConfig {
    /// Delay between revealed dialogue characters.
    pub reveal_interval: Duration,

    /// Content file to load instead of the built-in portfolio.
    pub content_path: Option<PathBuf>,

    /// Directory for log files.
    pub log_dir: PathBuf,

    /// Log filter directive, `tracing_subscriber::EnvFilter` syntax.
    pub log_filter: String,

    /// Mail relay account. Without it the contact form reports itself
    /// as unavailable on submit.
    pub relay: Option<RelayConfig>,
}

impl FolioConfig {
    pub fn new() -> Self {
        Self {
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            content_path: None,
            log_dir: PathBuf::from("logs"),
            log_filter: "info".to_string(),
            relay: None,
        }
    }

    /// Fill unset values from the environment (`FOLIO_LOG`, `EMAILJS_*`).
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(filter) = std::env::var("FOLIO_LOG") {
            config.log_filter = filter;
        }
        config.relay = RelayConfig::from_env().ok();
        config
    }

    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_relay(mut self, relay: RelayConfig) -> Self {
        self.relay = Some(relay);
        self
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.reveal_interval, Duration::from_millis(40));
        assert!(config.content_path.is_none());
        assert!(config.relay.is_none());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_builder() {
        let config = FolioConfig::new()
            .with_reveal_interval(Duration::from_millis(10))
            .with_content_path("site.json")
            .with_relay(RelayConfig::new("s", "t", "p"));
        assert_eq!(config.reveal_interval, Duration::from_millis(10));
        assert_eq!(config.content_path, Some(PathBuf::from("site.json")));
        assert_eq!(config.relay.map(|r| r.service_id), Some("s".to_string()));
    }
}
