use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Static assets never carry meta tags, so auditing them is pointless
pub const ASSET_PATTERN: &str =
    r"(?i)\.(jpg|jpeg|png|gif|webp|css|js|ico|svg|woff|woff2|ttf|eot|pdf|zip|mp4)$";

/// Configuration for deciding which target URLs may be audited
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetFilterConfig {
    /// URL schemes that can be fetched
    #[serde(default = "default_allowed_schemes")]
    pub allowed_schemes: Vec<String>,

    /// Regex patterns for URLs to reject (matched against the full URL)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

fn default_allowed_schemes() -> Vec<String> {
    vec!["http".to_string(), "https".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![ASSET_PATTERN.to_string()]
}

impl Default for TargetFilterConfig {
    fn default() -> Self {
        Self {
            allowed_schemes: default_allowed_schemes(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

/// Gate applied to every URL before it is fetched
#[derive(Debug)]
pub struct TargetFilter {
    config: TargetFilterConfig,
    exclude_regexes: Vec<Regex>,
}

impl Default for TargetFilter {
    fn default() -> Self {
        Self::new(TargetFilterConfig::default()).expect("Default regex patterns should be valid")
    }
}

impl TargetFilter {
    /// Create a new target filter from configuration
    pub fn new(config: TargetFilterConfig) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            config,
            exclude_regexes,
        })
    }

    /// Default filter plus extra exclude patterns
    pub fn with_extra_excludes(extra: &[String]) -> Result<Self, regex::Error> {
        let mut config = TargetFilterConfig::default();
        config.exclude_patterns.extend(extra.iter().cloned());
        Self::new(config)
    }

    /// Reason the URL may not be audited, or `None` if it may
    pub fn rejection(&self, url: &Url) -> Option<String> {
        if !self
            .config
            .allowed_schemes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(url.scheme()))
        {
            return Some(format!("unsupported scheme '{}'", url.scheme()));
        }

        // Match on scheme, host and path; query strings do not make an asset a page
        let mut bare = self.normalize(url);
        bare.set_query(None);
        for regex in &self.exclude_regexes {
            if regex.is_match(bare.as_str()) {
                return Some(format!("matches exclude pattern {}", regex.as_str()));
            }
        }

        None
    }

    /// Determine if a URL should be audited
    pub fn should_audit(&self, url: &Url) -> bool {
        self.rejection(url).is_none()
    }

    /// Create a normalized version of the URL (e.g., removing fragments)
    pub fn normalize(&self, url: &Url) -> Url {
        let mut normalized = url.clone();
        normalized.set_fragment(None);
        normalized
    }
}
