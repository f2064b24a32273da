use clap::Parser;
use seo_quickfix::config::AuditConfig;
use seo_quickfix::crawlers::{StaticFetcher, WebDriverFetcher};
use seo_quickfix::{Audit, Audits, PageReport, RecommendationEngine};
use std::process::ExitCode;
use std::sync::Arc;

mod args;
use args::{Args, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if args.list_rules {
        for id in RecommendationEngine::new().rule_ids() {
            println!("{}", id);
        }
        return ExitCode::SUCCESS;
    }

    let config = match &args.config {
        Some(path) => match AuditConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => AuditConfig::default(),
    }
    .apply_env();

    let metrics = args.metric_values(config.metrics);
    let timeout = args.timeout.unwrap_or(config.page_timeout_secs);
    let concurrency = args.concurrency.unwrap_or(config.max_concurrency);

    if let Some(path) = &args.html_file {
        let [url] = args.urls.as_slice() else {
            ::log::error!("--html-file audits exactly one URL, got {}", args.urls.len());
            return ExitCode::FAILURE;
        };

        let fetcher = match StaticFetcher::from_file(path) {
            Ok(fetcher) => fetcher,
            Err(e) => {
                ::log::error!("Failed to read {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        };

        let audit = Audit::new(url.as_str())
            .with_metrics(metrics)
            .with_timeout(timeout)
            .with_exclude_patterns(config.exclude_patterns.clone());
        return match audit.run(&fetcher).await {
            Ok(report) => {
                print_report(&report, args.format);
                ExitCode::SUCCESS
            }
            Err(e) => {
                ::log::error!("Audit of {} failed: {}", url, e);
                ExitCode::FAILURE
            }
        };
    }

    println!("Note: fetching pages requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using {}",
        config.webdriver_url
    );

    let fetcher = Arc::new(WebDriverFetcher::new(&config.webdriver_url));
    let mut rx = Audits::new(args.urls.clone())
        .with_max_concurrency(concurrency)
        .with_page_timeout(timeout)
        .with_metrics(metrics)
        .with_exclude_patterns(config.exclude_patterns.clone())
        .generate(fetcher);

    let start_time = std::time::Instant::now();
    let mut failures = 0;
    while let Some(outcome) = rx.recv().await {
        match outcome.result {
            Ok(report) => print_report(&report, args.format),
            Err(e) => {
                failures += 1;
                ::log::error!("Audit of {} failed: {}", outcome.url, e);
            }
        }
    }

    ::log::info!(
        "Audited {} pages in {:.2} seconds ({} failed)",
        args.urls.len(),
        start_time.elapsed().as_secs_f64(),
        failures
    );

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(report: &PageReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => ::log::error!("Failed to serialize report for {}: {}", report.url, e),
        },
        OutputFormat::Text => print!("{}", render_text(report)),
    }
}

fn render_text(report: &PageReport) -> String {
    let mut out = format!("{}  score {}/100\n", report.url, report.summary.score);
    if report.summary.all_good {
        out.push_str("  All core tags look good.\n");
    }
    for fix in &report.fixes {
        out.push_str(&format!(
            "  [{}] {}: {}\n",
            fix.impact.as_str(),
            fix.id,
            fix.title
        ));
        for line in fix.implementation.lines() {
            out.push_str(&format!("      {}\n", line));
        }
    }
    out
}
