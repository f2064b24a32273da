use serde::{Deserialize, Serialize};

/// Threshold classification of a Core Web Vitals signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricStatus {
    Good,
    NeedsImprovement,
    Poor,
}

impl MetricStatus {
    /// Classify a value against its "good" and "poor" bounds (both inclusive on the good side)
    pub fn classify(value: f64, good_max: f64, needs_improvement_max: f64) -> Self {
        if value <= good_max {
            MetricStatus::Good
        } else if value <= needs_improvement_max {
            MetricStatus::NeedsImprovement
        } else {
            MetricStatus::Poor
        }
    }

    pub fn is_good(self) -> bool {
        self == MetricStatus::Good
    }
}

/// A single measured signal and its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricReading {
    pub value: f64,
    pub status: MetricStatus,
}

/// Classified performance signals for a page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Largest Contentful Paint, milliseconds
    pub lcp: MetricReading,
    /// Cumulative Layout Shift, unitless
    pub cls: MetricReading,
    /// First Input Delay, milliseconds
    pub fid: MetricReading,
}

// Published Core Web Vitals bounds
pub const LCP_GOOD_MS: f64 = 2500.0;
pub const LCP_POOR_MS: f64 = 4000.0;
pub const CLS_GOOD: f64 = 0.1;
pub const CLS_POOR: f64 = 0.25;
pub const FID_GOOD_MS: f64 = 100.0;
pub const FID_POOR_MS: f64 = 300.0;

/// Raw measurements supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    #[serde(default = "default_lcp_ms")]
    pub lcp_ms: f64,
    #[serde(default = "default_cls")]
    pub cls: f64,
    #[serde(default = "default_fid_ms")]
    pub fid_ms: f64,
}

fn default_lcp_ms() -> f64 {
    LCP_GOOD_MS
}

fn default_cls() -> f64 {
    CLS_GOOD
}

fn default_fid_ms() -> f64 {
    FID_GOOD_MS
}

impl Default for MetricValues {
    /// Every signal sits exactly on its "good" bound
    fn default() -> Self {
        Self {
            lcp_ms: default_lcp_ms(),
            cls: default_cls(),
            fid_ms: default_fid_ms(),
        }
    }
}

impl MetricValues {
    /// Classify the raw values into performance metrics
    pub fn classify(&self) -> PerformanceMetrics {
        PerformanceMetrics {
            lcp: MetricReading {
                value: self.lcp_ms,
                status: MetricStatus::classify(self.lcp_ms, LCP_GOOD_MS, LCP_POOR_MS),
            },
            cls: MetricReading {
                value: self.cls,
                status: MetricStatus::classify(self.cls, CLS_GOOD, CLS_POOR),
            },
            fid: MetricReading {
                value: self.fid_ms,
                status: MetricStatus::classify(self.fid_ms, FID_GOOD_MS, FID_POOR_MS),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcp_boundaries() {
        let classify = |ms| MetricValues { lcp_ms: ms, ..Default::default() }.classify().lcp.status;

        assert_eq!(classify(1200.0), MetricStatus::Good);
        assert_eq!(classify(2500.0), MetricStatus::Good);
        assert_eq!(classify(2500.1), MetricStatus::NeedsImprovement);
        assert_eq!(classify(4000.0), MetricStatus::NeedsImprovement);
        assert_eq!(classify(4000.1), MetricStatus::Poor);
    }

    #[test]
    fn test_cls_and_fid_boundaries() {
        let metrics = MetricValues {
            lcp_ms: 1000.0,
            cls: 0.3,
            fid_ms: 150.0,
        }
        .classify();

        assert_eq!(metrics.cls.status, MetricStatus::Poor);
        assert_eq!(metrics.fid.status, MetricStatus::NeedsImprovement);
        assert_eq!(metrics.cls.value, 0.3);

        assert!(MetricValues::default().classify().cls.status.is_good());
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&MetricStatus::NeedsImprovement).unwrap();
        assert_eq!(json, r#""needs-improvement""#);
    }

    #[test]
    fn test_partial_values_take_good_defaults() {
        let values: MetricValues = serde_json::from_str(r#"{"cls": 0.2}"#).unwrap();
        assert_eq!(values.lcp_ms, LCP_GOOD_MS);
        assert_eq!(values.fid_ms, FID_GOOD_MS);
        assert_eq!(values.classify().cls.status, MetricStatus::NeedsImprovement);
    }
}
