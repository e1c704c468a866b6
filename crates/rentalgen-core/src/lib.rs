//! Core contracts for rentalgen.
//!
//! This crate defines the entity row contract, the four record variants, the
//! table schema model they declare, and the dataset aggregate that groups
//! them.

pub mod constraints;
pub mod dataset;
pub mod entities;
pub mod entity;
pub mod error;
pub mod graph;
pub mod schema;
pub mod types;
pub mod validation;

pub use constraints::{Constraint, ForeignKey, PrimaryKey};
pub use dataset::{DanglingReference, Dataset, RentalDataset};
pub use entities::{Address, Job, Person, Transaction, person_key, transaction_key};
pub use entity::{AnyEntity, Entity, EntityKind};
pub use error::{Error, Result};
pub use graph::{FkGraphReport, FkGraphSummary, build_fk_graph_report};
pub use schema::{Catalog, Column, Table};
pub use types::ColumnType;
pub use validation::validate_catalog;

/// Current contract version for catalog artifacts.
pub const SCHEMA_VERSION: &str = "0.1";
