use thiserror::Error;

/// Core error type shared across rentalgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A row does not carry one value per declared field.
    #[error("malformed {collection} row: expected {expected} field(s), found {found}")]
    RowLength {
        collection: &'static str,
        expected: usize,
        found: usize,
    },
    /// A positional value cannot be coerced to the field's type.
    #[error("malformed {collection} row: invalid {field} '{value}': {reason}")]
    InvalidField {
        collection: &'static str,
        field: &'static str,
        value: String,
        reason: String,
    },
    /// A bulk-loaded dataset does not match the declared entity layout.
    #[error("invalid dataset: {0}")]
    DatasetShape(String),
    /// The table catalog violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// Convenience alias for results returned by rentalgen crates.
pub type Result<T> = std::result::Result<T, Error>;
