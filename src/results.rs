use crate::engine::STRUCTURED_DATA_ID;
use crate::fixes::{FixRecord, Impact};
use crate::metrics::PerformanceMetrics;
use crate::tags::TagMap;
use serde::{Deserialize, Serialize};

/// Score deducted per outstanding fix, by impact
const HIGH_PENALTY: u32 = 15;
const MEDIUM_PENALTY: u32 = 8;
const LOW_PENALTY: u32 = 3;

/// Everything learned about one audited page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// URL of the page, as given by the caller
    pub url: String,

    /// Tags extracted from the page
    pub tags: TagMap,

    /// Classified performance signals, if any were supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<PerformanceMetrics>,

    /// Recommended fixes in priority order
    pub fixes: Vec<FixRecord>,

    pub summary: ReportSummary,
}

impl PageReport {
    /// Create a report and compute its summary
    pub fn new(
        url: String,
        tags: TagMap,
        metrics: Option<PerformanceMetrics>,
        fixes: Vec<FixRecord>,
    ) -> Self {
        let summary = ReportSummary::from_fixes(&fixes);
        Self {
            url,
            tags,
            metrics,
            fixes,
            summary,
        }
    }
}

/// Counts and score derived from a report's fixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,

    /// No fixes besides the standing structured-data suggestion
    pub all_good: bool,

    /// 0-100, higher is better
    pub score: u32,
}

impl ReportSummary {
    pub fn from_fixes(fixes: &[FixRecord]) -> Self {
        let actionable = fixes.iter().filter(|f| f.id != STRUCTURED_DATA_ID);

        let (mut high, mut medium, mut low) = (0usize, 0usize, 0usize);
        for fix in actionable {
            match fix.impact {
                Impact::High => high += 1,
                Impact::Medium => medium += 1,
                Impact::Low => low += 1,
            }
        }

        let penalty = high as u32 * HIGH_PENALTY
            + medium as u32 * MEDIUM_PENALTY
            + low as u32 * LOW_PENALTY;

        Self {
            high,
            medium,
            low,
            all_good: high + medium + low == 0,
            score: 100u32.saturating_sub(penalty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;

    #[test]
    fn test_fully_tagged_page_is_all_good() {
        let tags: TagMap = [
            ("title", "A perfectly sized page title"),
            ("description", "Short and sweet."),
            ("og:title", "t"),
            ("og:description", "d"),
            ("og:image", "i"),
            ("twitter:card", "summary"),
            ("twitter:title", "t"),
            ("canonical", "https://example.com/"),
        ]
        .into_iter()
        .collect();
        let fixes = generate(&tags, "https://example.com/", None);
        let summary = ReportSummary::from_fixes(&fixes);

        assert_eq!(fixes.len(), 1);
        assert!(summary.all_good);
        assert_eq!(summary.score, 100);
    }

    #[test]
    fn test_empty_page_score() {
        let fixes = generate(&TagMap::new(), "https://example.com", None);
        let summary = ReportSummary::from_fixes(&fixes);

        // title + description (high), og + canonical (medium), twitter (low)
        assert_eq!((summary.high, summary.medium, summary.low), (2, 2, 1));
        assert!(!summary.all_good);
        assert_eq!(summary.score, 100 - 30 - 16 - 3);
    }

    #[test]
    fn test_score_saturates_at_zero() {
        let fix = generate(&TagMap::new(), "https://example.com", None)
            .into_iter()
            .find(|f| f.id == "title-missing")
            .unwrap();
        let fixes = vec![fix; 10];
        assert_eq!(ReportSummary::from_fixes(&fixes).score, 0);
    }

    #[test]
    fn test_report_serializes_summary() {
        let fixes = generate(&TagMap::new(), "https://example.com", None);
        let report = PageReport::new("https://example.com".into(), TagMap::new(), None, fixes);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["fixes"].as_array().unwrap().len(), 6);
        assert_eq!(value["summary"]["all_good"], false);
        assert!(value.get("metrics").is_none());
    }
}
