use std::hash::{Hash, Hasher};

use crate::constraints::{Constraint, PrimaryKey};
use crate::entity::{
    AnyEntity, Entity, EntityKind, check_row_len, encode_flag, parse_flag, parse_u8,
};
use crate::error::Result;
use crate::schema::{Column, Table};
use crate::types::ColumnType;

const COLLECTION: &str = "people";
const FIELD_NAMES: &[&str] = &["id", "name", "age", "male"];

/// Zero-padded sequential person key, e.g. `P-000042`.
pub fn person_key(index: usize) -> String {
    format!("P-{index:06}")
}

/// A customer. Compared and hashed by `id` only.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub male: bool,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u8, male: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            male,
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Person {
    const KIND: EntityKind = EntityKind::Person;

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
                Column::nullable("name", ColumnType::Varchar { length: 50 }),
                Column::nullable("age", ColumnType::TinyInt),
                Column::nullable("male", ColumnType::Boolean),
            ],
            constraints: vec![Constraint::PrimaryKey(PrimaryKey {
                columns: vec!["id".to_string()],
            })],
        }
    }

    fn key(&self) -> &str {
        &self.id
    }

    fn to_sequence(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.age.to_string(),
            encode_flag(self.male),
        ]
    }

    fn from_sequence<S: AsRef<str>>(seq: &[S]) -> Result<Self> {
        check_row_len(COLLECTION, FIELD_NAMES, seq)?;
        Ok(Self {
            id: seq[0].as_ref().to_string(),
            name: seq[1].as_ref().to_string(),
            age: parse_u8(COLLECTION, "age", seq[2].as_ref())?,
            male: parse_flag(COLLECTION, "male", seq[3].as_ref())?,
        })
    }

    fn into_any(self) -> AnyEntity {
        AnyEntity::Person(self)
    }

    fn from_any(entity: AnyEntity) -> std::result::Result<Self, AnyEntity> {
        match entity {
            AnyEntity::Person(person) => Ok(person),
            other => Err(other),
        }
    }
}
