// Re-export modules
pub mod audit;
pub mod config;
pub mod crawlers;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fixes;
pub mod metrics;
pub mod parsers;
pub mod results;
pub mod session;
pub mod tags;
pub mod utils;

// Re-export commonly used types for convenience
pub use audit::{Audit, AuditOutcome, Audits};
pub use engine::{RecommendationEngine, generate};
pub use error::AuditError;
pub use fixes::FixRecord;
pub use metrics::{MetricValues, PerformanceMetrics};
pub use results::PageReport;
pub use tags::TagMap;
