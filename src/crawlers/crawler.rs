use crate::error::{AuditError, Result};
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use url::Url;

/// Source of page HTML for the audit pipeline
pub trait PageFetcher: Send + Sync {
    /// Fetch the HTML of a page
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

/// Serves HTML that is already in memory, e.g. a local file or test fixtures
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    fallback: Option<String>,
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    /// Serve the same document for every URL
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            fallback: Some(html.into()),
            pages: HashMap::new(),
        }
    }

    /// Serve a document read from disk for every URL
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let html = std::fs::read_to_string(path)?;
        Ok(Self::new(html))
    }

    /// Serve a specific document for one URL
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }
}

impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.pages
            .get(url.as_str())
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| AuditError::NoContent(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_fetcher_prefers_specific_pages() {
        let fetcher = StaticFetcher::new("<html>fallback</html>")
            .with_page("https://a.example/", "<html>a</html>");

        let a = Url::parse("https://a.example/").unwrap();
        let b = Url::parse("https://b.example/").unwrap();
        assert_eq!(fetcher.fetch(&a).await.unwrap(), "<html>a</html>");
        assert_eq!(fetcher.fetch(&b).await.unwrap(), "<html>fallback</html>");
    }

    #[tokio::test]
    async fn test_unknown_page_without_fallback() {
        let fetcher = StaticFetcher::default().with_page("https://a.example/", "<html></html>");
        let other = Url::parse("https://other.example/").unwrap();

        let err = fetcher.fetch(&other).await.unwrap_err();
        assert!(matches!(err, AuditError::NoContent(_)));
    }

    #[tokio::test]
    async fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<title>On disk</title>").unwrap();

        let fetcher = StaticFetcher::from_file(&path).unwrap();
        let url = Url::parse("https://any.example/").unwrap();
        assert_eq!(fetcher.fetch(&url).await.unwrap(), "<title>On disk</title>");
    }
}
