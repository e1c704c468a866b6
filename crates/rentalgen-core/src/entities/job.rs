use crate::constraints::{Constraint, PrimaryKey};
use crate::entity::{AnyEntity, Entity, EntityKind, check_row_len};
use crate::error::Result;
use crate::schema::{Column, Table};
use crate::types::ColumnType;

const COLLECTION: &str = "jobs";
const FIELD_NAMES: &[&str] = &["job"];

/// A job title, keyed by itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Job {
    pub job: String,
}

impl Job {
    pub fn new(job: impl Into<String>) -> Self {
        Self { job: job.into() }
    }
}

impl Entity for Job {
    const KIND: EntityKind = EntityKind::Job;

    fn field_names() -> &'static [&'static str] {
        FIELD_NAMES
    }

    fn collection_name() -> &'static str {
        COLLECTION
    }

    fn table_schema() -> Table {
        Table {
            name: COLLECTION.to_string(),
            columns: vec![Column::required("job", ColumnType::Char { length: 4 })],
            constraints: vec![Constraint::PrimaryKey(PrimaryKey {
                columns: vec!["job".to_string()],
            })],
        }
    }

    fn key(&self) -> &str {
        &self.job
    }

    fn to_sequence(&self) -> Vec<String> {
        vec![self.job.clone()]
    }

    fn from_sequence<S: AsRef<str>>(seq: &[S]) -> Result<Self> {
        check_row_len(COLLECTION, FIELD_NAMES, seq)?;
        Ok(Self::new(seq[0].as_ref()))
    }

    fn into_any(self) -> AnyEntity {
        AnyEntity::Job(self)
    }

    fn from_any(entity: AnyEntity) -> std::result::Result<Self, AnyEntity> {
        match entity {
            AnyEntity::Job(job) => Ok(job),
            other => Err(other),
        }
    }
}
