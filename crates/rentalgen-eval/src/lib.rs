//! Summary charts and integrity metrics for generated rental datasets.

pub mod errors;
pub mod report;
pub mod schema_metrics;
pub mod summary;

pub use errors::EvalError;
pub use report::render_report;
pub use schema_metrics::{
    CoverageMetrics, FkGraphMetrics, SchemaCounts, SchemaMetrics, collect_schema_metrics,
};
pub use summary::{
    AddressShare, AgeBucket, CollectionRows, DatasetSummary, IntegritySummary, RunSummary,
    ValueCounts, summarize, summarize_run,
};
