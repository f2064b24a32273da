use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors raised while fetching and auditing a page.
///
/// The recommendation engine itself never fails; these cover everything around it.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL rejected by target filter: {0}")]
    Filtered(String),

    #[error("no WebDriver server reachable (tried {0})")]
    WebDriverUnavailable(String),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("no content available for {0}")]
    NoContent(String),

    #[error("timed out after {secs}s fetching {url}")]
    Timeout { url: String, secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
