use crate::constraints::{Constraint, PrimaryKey};
use crate::entity::{AnyEntity, Entity, EntityKind, check_row_len};
use crate::error::Result;
use crate::schema::{Column, Table};
use crate::types::ColumnType;

const COLLECTION: &str = "address";
const FIELD_NAMES: &[&str] = &["address"];

/// A postal address; the full text is its own key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub address: String,
}

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Entity for Address {
    const KIND: EntityKind = EntityKind::Address;

    fn field_names() -> &'static [&'static str] {
        FIELD_NAMES
    }

    fn collection_name() -> &'static str {
        COLLECTION
    }

    fn table_schema() -> Table {
        Table {
            name: COLLECTION.to_string(),
            columns: vec![Column::required(
                "address",
                ColumnType::Varchar { length: 20 },
            )],
            constraints: vec![Constraint::PrimaryKey(PrimaryKey {
                columns: vec!["address".to_string()],
            })],
        }
    }

    fn key(&self) -> &str {
        &self.address
    }

    fn to_sequence(&self) -> Vec<String> {
        vec![self.address.clone()]
    }

    fn from_sequence<S: AsRef<str>>(seq: &[S]) -> Result<Self> {
        check_row_len(COLLECTION, FIELD_NAMES, seq)?;
        Ok(Self::new(seq[0].as_ref()))
    }

    fn into_any(self) -> AnyEntity {
        AnyEntity::Address(self)
    }

    fn from_any(entity: AnyEntity) -> std::result::Result<Self, AnyEntity> {
        match entity {
            AnyEntity::Address(address) => Ok(address),
            other => Err(other),
        }
    }
}
