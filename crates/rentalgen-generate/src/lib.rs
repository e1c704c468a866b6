//! Synthetic rental dataset generation.
//!
//! Leaf collections (people, addresses, jobs) are drawn from a pluggable
//! [`TextSource`]; transactions then reference them by key. Datasets can be
//! written to and loaded from CSV with a matching `schema.sql`.

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod foreign;
pub mod generators;
pub mod model;
pub mod output;
pub mod source;

pub use engine::{
    GenerationEngine, GenerationResult, REPORT_FILE, RunContext, generate, generate_dataset,
};
pub use errors::GenerationError;
pub use faker_rs::{FakerSource, LocaleKey};
pub use generators::{generate_addresses, generate_jobs, generate_people, generate_transactions};
pub use model::{
    DatasetCounts, GenerateOptions, GenerationReport, PeopleOptions, RunStatus, TableReport,
};
pub use output::{load_dataset, write_dataset};
pub use source::{FreeText, TextSource, UniqueSource};
