use thiserror::Error;

use rentalgen_core::EntityKind;

use crate::faker_rs::LocaleKey;

/// Errors emitted by the generators and the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid count for {kind}: must be greater than zero")]
    InvalidCount { kind: EntityKind },
    #[error("invalid male ratio {0}: must be within [0, 1]")]
    InvalidRatio(f64),
    #[error("invalid age range: min_age {min} exceeds max_age {max}")]
    InvalidAgeRange { min: u8, max: u8 },
    #[error("cannot generate transactions: {0} pool is empty")]
    EmptyPool(EntityKind),
    #[error("text source failed: {0}")]
    Source(String),
    #[error("could not produce a unique {what} after {attempts} attempts")]
    UniqueExhausted { what: &'static str, attempts: u32 },
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
    #[error("name source produces {provided} names but {requested} was requested")]
    LocaleMismatch {
        requested: LocaleKey,
        provided: LocaleKey,
    },
    #[error("csv header mismatch in {file}: expected [{expected}], found [{found}]")]
    HeaderMismatch {
        file: String,
        expected: String,
        found: String,
    },
    #[error("{file} line {line}: {source}")]
    MalformedRow {
        file: String,
        line: u64,
        #[source]
        source: rentalgen_core::Error,
    },
    #[error(transparent)]
    Core(#[from] rentalgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
