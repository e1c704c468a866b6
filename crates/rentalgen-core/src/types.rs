use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// SQL column type used by the entity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnType {
    /// Variable-length text with a maximum length.
    Varchar { length: u16 },
    /// Fixed-length text.
    Char { length: u16 },
    TinyInt,
    Boolean,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Varchar { length } => write!(f, "VARCHAR({length})"),
            Self::Char { length } => write!(f, "CHAR({length})"),
            Self::TinyInt => f.write_str("TINYINT"),
            Self::Boolean => f.write_str("BOOLEAN"),
        }
    }
}
