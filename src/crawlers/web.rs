use crate::crawlers::crawler::PageFetcher;
use crate::error::{AuditError, Result};
use fantoccini::{Client, ClientBuilder};
use url::Url;

/// Well-known local WebDriver endpoints tried after the configured one
const FALLBACK_WEBDRIVER_URLS: &[&str] = &[
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Fetches fully rendered page source through a WebDriver server.
///
/// Every fetch opens its own browser session and closes it afterwards, so one
/// fetcher can be shared by many concurrent audits.
#[derive(Debug, Clone)]
pub struct WebDriverFetcher {
    webdriver_url: String,
}

impl WebDriverFetcher {
    pub fn new(webdriver_url: &str) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
        }
    }

    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    /// Connects to the configured WebDriver, then to the fallbacks
    async fn connect(&self) -> Result<Client> {
        match ClientBuilder::native().connect(&self.webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", self.webdriver_url);
                return Ok(client);
            }
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.webdriver_url,
                    e
                );
            }
        }

        for url in FALLBACK_WEBDRIVER_URLS {
            if *url == self.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(client);
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        let mut tried = vec![self.webdriver_url.as_str()];
        tried.extend(FALLBACK_WEBDRIVER_URLS.iter().filter(|u| **u != self.webdriver_url));
        Err(AuditError::WebDriverUnavailable(tried.join(", ")))
    }
}

impl PageFetcher for WebDriverFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let client = self.connect().await?;

        let source = async {
            client.goto(url.as_str()).await?;
            let html = client.source().await?;
            Ok::<_, AuditError>(html)
        }
        .await;

        // Close the session whether or not the page loaded
        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session for {}: {}", url, e);
        }

        match &source {
            Ok(html) => ::log::debug!("Fetched {} ({} bytes)", url, html.len()),
            Err(e) => ::log::error!("Failed to fetch {}: {}", url, e),
        }
        source
    }
}
