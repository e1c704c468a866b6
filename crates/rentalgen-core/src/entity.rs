use std::fmt;
use std::hash::Hash;

use crate::entities::{Address, Job, Person, Transaction};
use crate::error::{Error, Result};
use crate::schema::Table;

/// Row-level contract shared by every record variant.
///
/// `field_names` fixes the row layout; `to_sequence` and `from_sequence`
/// convert between the typed record and its string-encoded row in that
/// layout. Equality and hashing only look at the identity-bearing key.
pub trait Entity: Clone + Eq + Hash + Sized {
    const KIND: EntityKind;

    fn field_names() -> &'static [&'static str];

    fn collection_name() -> &'static str;

    /// Typed table definition for this variant's collection.
    fn table_schema() -> Table;

    fn create_table() -> String {
        Self::table_schema().to_ddl()
    }

    /// Identity-bearing key value.
    fn key(&self) -> &str;

    fn to_sequence(&self) -> Vec<String>;

    fn from_sequence<S: AsRef<str>>(seq: &[S]) -> Result<Self>;

    fn into_any(self) -> AnyEntity;

    /// Recover the concrete variant, handing the value back on mismatch.
    fn from_any(entity: AnyEntity) -> std::result::Result<Self, AnyEntity>;
}

/// Closed set of record variants, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Person,
    Address,
    Job,
    Transaction,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Person,
        EntityKind::Address,
        EntityKind::Job,
        EntityKind::Transaction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Address => "Address",
            Self::Job => "Job",
            Self::Transaction => "Transaction",
        }
    }

    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Person => Person::field_names(),
            Self::Address => Address::field_names(),
            Self::Job => Job::field_names(),
            Self::Transaction => Transaction::field_names(),
        }
    }

    pub fn collection_name(self) -> &'static str {
        match self {
            Self::Person => Person::collection_name(),
            Self::Address => Address::collection_name(),
            Self::Job => Job::collection_name(),
            Self::Transaction => Transaction::collection_name(),
        }
    }

    pub fn table_schema(self) -> Table {
        match self {
            Self::Person => Person::table_schema(),
            Self::Address => Address::table_schema(),
            Self::Job => Job::table_schema(),
            Self::Transaction => Transaction::table_schema(),
        }
    }

    pub fn create_table(self) -> String {
        self.table_schema().to_ddl()
    }

    pub fn from_collection_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection_name() == name)
    }

    /// Reconstruct a row of this variant.
    pub fn from_sequence<S: AsRef<str>>(self, seq: &[S]) -> Result<AnyEntity> {
        Ok(match self {
            Self::Person => Person::from_sequence(seq)?.into_any(),
            Self::Address => Address::from_sequence(seq)?.into_any(),
            Self::Job => Job::from_sequence(seq)?.into_any(),
            Self::Transaction => Transaction::from_sequence(seq)?.into_any(),
        })
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any record variant, for heterogeneous row transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyEntity {
    Person(Person),
    Address(Address),
    Job(Job),
    Transaction(Transaction),
}

impl AnyEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Person(_) => EntityKind::Person,
            Self::Address(_) => EntityKind::Address,
            Self::Job(_) => EntityKind::Job,
            Self::Transaction(_) => EntityKind::Transaction,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Person(entity) => entity.key(),
            Self::Address(entity) => entity.key(),
            Self::Job(entity) => entity.key(),
            Self::Transaction(entity) => entity.key(),
        }
    }

    pub fn to_sequence(&self) -> Vec<String> {
        match self {
            Self::Person(entity) => entity.to_sequence(),
            Self::Address(entity) => entity.to_sequence(),
            Self::Job(entity) => entity.to_sequence(),
            Self::Transaction(entity) => entity.to_sequence(),
        }
    }
}

impl From<Person> for AnyEntity {
    fn from(value: Person) -> Self {
        Self::Person(value)
    }
}

impl From<Address> for AnyEntity {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<Job> for AnyEntity {
    fn from(value: Job) -> Self {
        Self::Job(value)
    }
}

impl From<Transaction> for AnyEntity {
    fn from(value: Transaction) -> Self {
        Self::Transaction(value)
    }
}

pub(crate) fn check_row_len<S>(
    collection: &'static str,
    field_names: &[&str],
    seq: &[S],
) -> Result<()> {
    if seq.len() == field_names.len() {
        Ok(())
    } else {
        Err(Error::RowLength {
            collection,
            expected: field_names.len(),
            found: seq.len(),
        })
    }
}

pub(crate) fn parse_u8(collection: &'static str, field: &'static str, value: &str) -> Result<u8> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|err| Error::InvalidField {
            collection,
            field,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

/// Booleans travel as `1`/`0`; `true`/`false` are accepted on import.
pub(crate) fn parse_flag(
    collection: &'static str,
    field: &'static str,
    value: &str,
) -> Result<bool> {
    match value.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other if other.eq_ignore_ascii_case("true") => Ok(true),
        other if other.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(Error::InvalidField {
            collection,
            field,
            value: value.to_string(),
            reason: "expected 1, 0, true or false".to_string(),
        }),
    }
}

pub(crate) fn encode_flag(value: bool) -> String {
    let flag = if value { "1" } else { "0" };
    flag.to_string()
}
