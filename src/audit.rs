use crate::crawlers::PageFetcher;
use crate::engine::RecommendationEngine;
use crate::error::{AuditError, Result};
use crate::filter::TargetFilter;
use crate::metrics::MetricValues;
use crate::parsers::extract_tags;
use crate::results::PageReport;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Semaphore, mpsc};
use url::Url;

const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Builder for auditing a single page
#[derive(Debug, Clone)]
pub struct Audit {
    url: String,
    metrics: Option<MetricValues>,
    timeout_secs: u64,
    exclude_patterns: Vec<String>,
}

impl Audit {
    /// Create a new audit for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            metrics: None,
            timeout_secs: DEFAULT_PAGE_TIMEOUT_SECS,
            exclude_patterns: Vec::new(),
        }
    }

    /// Supply measured performance values for the page
    pub fn with_metrics(mut self, metrics: Option<MetricValues>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the fetch timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Reject URLs matching any of these patterns in addition to the defaults
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Fetch the page, extract its tags and generate fixes
    pub async fn run<F: PageFetcher>(&self, fetcher: &F) -> Result<PageReport> {
        let parsed = Url::parse(&self.url).map_err(|source| AuditError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;

        let filter = TargetFilter::with_extra_excludes(&self.exclude_patterns)?;
        if let Some(reason) = filter.rejection(&parsed) {
            return Err(AuditError::Filtered(format!("{}: {}", self.url, reason)));
        }
        let target = filter.normalize(&parsed);

        ::log::info!("Auditing {}", target);
        let html = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            fetcher.fetch(&target),
        )
        .await
        .map_err(|_| AuditError::Timeout {
            url: self.url.clone(),
            secs: self.timeout_secs,
        })??;

        let tags = extract_tags(&html);
        let metrics = self.metrics.map(|m| m.classify());
        // The engine sees the URL exactly as the caller gave it
        let fixes = RecommendationEngine::new().generate(&tags, &self.url, metrics.as_ref());

        ::log::info!("{}: {} fixes recommended", self.url, fixes.len());
        Ok(PageReport::new(self.url.clone(), tags, metrics, fixes))
    }
}

/// Result of auditing one URL in a batch
#[derive(Debug)]
pub struct AuditOutcome {
    pub url: String,
    pub result: Result<PageReport>,
}

/// Builder for auditing many pages concurrently
pub struct Audits {
    urls: Vec<String>,
    max_concurrency: usize,
    page_timeout_secs: u64,
    metrics: Option<MetricValues>,
    exclude_patterns: Vec<String>,
}

impl Audits {
    /// Create a batch over the given URLs
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            page_timeout_secs: DEFAULT_PAGE_TIMEOUT_SECS,
            metrics: None,
            exclude_patterns: Vec::new(),
        }
    }

    /// Set the maximum number of pages fetched at once
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Set the per-page fetch timeout in seconds
    pub fn with_page_timeout(mut self, timeout_secs: u64) -> Self {
        self.page_timeout_secs = timeout_secs;
        self
    }

    /// Metrics applied to every page in the batch
    pub fn with_metrics(mut self, metrics: Option<MetricValues>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Start auditing and get a receiver that yields outcomes as pages finish.
    ///
    /// One outcome is sent per URL, failures included. The channel closes once every
    /// URL has been handled.
    pub fn generate<F>(self, fetcher: Arc<F>) -> mpsc::Receiver<AuditOutcome>
    where
        F: PageFetcher + 'static,
    {
        let (result_tx, result_rx) = mpsc::channel::<AuditOutcome>(self.urls.len().max(1));
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let total = self.urls.len();

        ::log::info!(
            "Auditing {} pages with concurrency {}",
            total,
            self.max_concurrency
        );

        for (i, url) in self.urls.into_iter().enumerate() {
            let audit = Audit::new(url.clone())
                .with_metrics(self.metrics)
                .with_timeout(self.page_timeout_secs)
                .with_exclude_patterns(self.exclude_patterns.clone());
            let fetcher = Arc::clone(&fetcher);
            let semaphore = Arc::clone(&semaphore);
            let result_tx = result_tx.clone();

            tokio::spawn(async move {
                let result = match semaphore.acquire().await {
                    Ok(_permit) => audit.run(fetcher.as_ref()).await,
                    Err(_) => return,
                };

                if let Err(e) = &result {
                    ::log::warn!("Audit {} of {} failed for {}: {}", i + 1, total, url, e);
                } else {
                    ::log::debug!("Audit {} of {} finished: {}", i + 1, total, url);
                }

                if result_tx.send(AuditOutcome { url, result }).await.is_err() {
                    ::log::debug!("Result receiver dropped, discarding outcome");
                }
            });
        }

        // Each task holds its own sender; the channel closes when the last one finishes
        drop(result_tx);
        result_rx
    }
}
