use crate::error::Result;
use crate::metrics::MetricValues;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for auditing pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Seconds allowed for fetching a single page
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Maximum number of pages fetched at once in a batch
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Extra regex patterns for URLs that must not be audited
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Measured performance values to classify and feed to the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricValues>,
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for page_timeout_secs
fn default_page_timeout_secs() -> u64 {
    30
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    4
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            page_timeout_secs: default_page_timeout_secs(),
            max_concurrency: default_max_concurrency(),
            exclude_patterns: Vec::new(),
            metrics: None,
        }
    }
}

impl AuditConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if set
    pub fn apply_env(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_takes_defaults() {
        let config = AuditConfig::from_json("{}").unwrap();
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.page_timeout_secs, 30);
        assert_eq!(config.max_concurrency, 4);
        assert!(config.exclude_patterns.is_empty());
        assert!(config.metrics.is_none());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "webdriver_url": "http://localhost:9515",
            "page_timeout_secs": 10,
            "max_concurrency": 2,
            "exclude_patterns": ["/private/"],
            "metrics": {"lcp_ms": 3100, "cls": 0.02, "fid_ms": 40}
        }"#;
        let config = AuditConfig::from_json(json).unwrap();
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert_eq!(config.max_concurrency, 2);
        assert_eq!(config.exclude_patterns, vec!["/private/"]);
        assert_eq!(config.metrics.unwrap().lcp_ms, 3100.0);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"page_timeout_secs": 5}}"#).unwrap();

        let config = AuditConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_timeout_secs, 5);
    }

    #[test]
    fn test_bad_json_is_a_config_error() {
        let err = AuditConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::error::AuditError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = AuditConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::error::AuditError::Io(_)));
    }
}
