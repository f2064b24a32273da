use clap::{Parser, ValueEnum};
use seo_quickfix::MetricValues;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-quickfix")]
#[command(about = "Audits a page's meta tags and recommends paste-ready SEO fixes")]
#[command(version)]
pub struct Args {
    /// Page URLs to audit
    #[arg(required_unless_present = "list_rules")]
    pub urls: Vec<String>,

    /// Audit this local HTML file instead of fetching the page (single URL only)
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Measured Largest Contentful Paint in milliseconds
    #[arg(long)]
    pub lcp_ms: Option<f64>,

    /// Measured Cumulative Layout Shift
    #[arg(long)]
    pub cls: Option<f64>,

    /// Measured First Input Delay in milliseconds
    #[arg(long)]
    pub fid_ms: Option<f64>,

    /// Number of pages fetched at once
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-page fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print the rule ids in evaluation order and exit
    #[arg(long)]
    pub list_rules: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl Args {
    /// Metrics from the command line layered over configured ones.
    ///
    /// Signals not given anywhere default to their "good" bound.
    pub fn metric_values(&self, configured: Option<MetricValues>) -> Option<MetricValues> {
        if self.lcp_ms.is_none() && self.cls.is_none() && self.fid_ms.is_none() {
            return configured;
        }

        let mut values = configured.unwrap_or_default();
        if let Some(lcp_ms) = self.lcp_ms {
            values.lcp_ms = lcp_ms;
        }
        if let Some(cls) = self.cls {
            values.cls = cls;
        }
        if let Some(fid_ms) = self.fid_ms {
            values.fid_ms = fid_ms;
        }
        Some(values)
    }
}
