use std::hash::{Hash, Hasher};

use crate::constraints::{Constraint, ForeignKey, PrimaryKey};
use crate::entities::{Address, Job, Person};
use crate::entity::{AnyEntity, Entity, EntityKind, check_row_len};
use crate::error::Result;
use crate::schema::{Column, Table};
use crate::types::ColumnType;

const COLLECTION: &str = "transactions";
const FIELD_NAMES: &[&str] = &["id", "job", "person", "address"];

/// Zero-padded sequential transaction key, e.g. `T-000007`.
pub fn transaction_key(index: usize) -> String {
    format!("T-{index:06}")
}

/// Links a person, an address and a job. Compared and hashed by `id` only.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: String,
    /// Key of a [`Job`].
    pub job: String,
    /// Key of a [`Person`].
    pub person: String,
    /// Key of an [`Address`].
    pub address: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        job: impl Into<String>,
        person: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            job: job.into(),
            person: person.into(),
            address: address.into(),
        }
    }

    /// Build a transaction referencing the given records by key.
    pub fn linking(id: impl Into<String>, job: &Job, person: &Person, address: &Address) -> Self {
        Self::new(id, job.key(), person.key(), address.key())
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Transaction {
    const KIND: EntityKind = EntityKind::Transaction;

    fn field_names() -> &'static [&'static str] {
        FIELD_NAMES
    }

    fn collection_name() -> &'static str {
        COLLECTION
    }

    fn table_schema() -> Table {
        Table {
            name: COLLECTION.to_string(),
            columns: vec![
                Column::required("id", ColumnType::Varchar { length: 8 }),
                Column::required("job", ColumnType::Char { length: 4 }),
                Column::required("person", ColumnType::Varchar { length: 8 }),
                Column::required("address", ColumnType::Varchar { length: 20 }),
            ],
            constraints: vec![
                Constraint::PrimaryKey(PrimaryKey {
                    columns: vec!["id".to_string()],
                }),
                Constraint::ForeignKey(ForeignKey::single("job", Job::collection_name(), "job")),
                Constraint::ForeignKey(ForeignKey::single(
                    "person",
                    Person::collection_name(),
                    "id",
                )),
                Constraint::ForeignKey(ForeignKey::single(
                    "address",
                    Address::collection_name(),
                    "address",
                )),
            ],
        }
    }

    fn key(&self) -> &str {
        &self.id
    }

    fn to_sequence(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.job.clone(),
            self.person.clone(),
            self.address.clone(),
        ]
    }

    fn from_sequence<S: AsRef<str>>(seq: &[S]) -> Result<Self> {
        check_row_len(COLLECTION, FIELD_NAMES, seq)?;
        Ok(Self::new(
            seq[0].as_ref(),
            seq[1].as_ref(),
            seq[2].as_ref(),
            seq[3].as_ref(),
        ))
    }

    fn into_any(self) -> AnyEntity {
        AnyEntity::Transaction(self)
    }

    fn from_any(entity: AnyEntity) -> std::result::Result<Self, AnyEntity> {
        match entity {
            AnyEntity::Transaction(transaction) => Ok(transaction),
            other => Err(other),
        }
    }
}
