//! Rule-based recommendation engine.
//!
//! Evaluates a fixed table of independent rules against a page's tags and optional
//! performance metrics. Every matching rule contributes one [`FixRecord`], in table order.

pub mod rules;

#[cfg(test)]
mod tests;

use crate::fixes::FixRecord;
use crate::metrics::PerformanceMetrics;
use crate::tags::TagMap;
use rules::{RULES, Snapshot};

/// Id of the fix that every evaluation emits
pub const STRUCTURED_DATA_ID: &str = "structured-data";

/// Stateless evaluator over the rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generate the ordered list of fixes for a page.
    ///
    /// Pure and total: missing signals simply match no rule. The structured-data
    /// suggestion is always present, so the result is never empty.
    pub fn generate(
        &self,
        tags: &TagMap,
        url: &str,
        metrics: Option<&PerformanceMetrics>,
    ) -> Vec<FixRecord> {
        let snapshot = Snapshot { tags, url, metrics };

        let fixes: Vec<FixRecord> = RULES
            .iter()
            .filter(|rule| (rule.applies)(&snapshot))
            .map(|rule| (rule.build)(&snapshot))
            .collect();

        ::log::debug!(
            "{} of {} rules fired for {}",
            fixes.len(),
            RULES.len(),
            url
        );
        fixes
    }

    /// Rule ids in evaluation order
    pub fn rule_ids(&self) -> Vec<&'static str> {
        RULES.iter().map(|rule| rule.id).collect()
    }
}

/// Convenience wrapper around [`RecommendationEngine::generate`]
pub fn generate(
    tags: &TagMap,
    url: &str,
    metrics: Option<&PerformanceMetrics>,
) -> Vec<FixRecord> {
    RecommendationEngine::new().generate(tags, url, metrics)
}
