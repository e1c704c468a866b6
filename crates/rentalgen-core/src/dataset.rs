use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::entities::{Address, Job, Person, Transaction};
use crate::entity::{AnyEntity, Entity, EntityKind};
use crate::error::{Error, Result};
use crate::schema::Catalog;

/// Aggregate holding one list per entity variant in a fixed order.
pub trait Dataset: Sized {
    /// Variant order shared by `from_sequence`, `to_sequence` and `entities`.
    fn entity_types() -> &'static [EntityKind];

    /// Bulk-load from one list per variant, positioned as `entity_types()`.
    ///
    /// No referential check is performed.
    fn from_sequence(entities: Vec<Vec<AnyEntity>>) -> Result<Self>;

    fn entities(&self) -> BTreeMap<EntityKind, Vec<AnyEntity>>;

    fn to_sequence(&self) -> Vec<Vec<AnyEntity>> {
        let mut entities = self.entities();
        Self::entity_types()
            .iter()
            .map(|kind| entities.remove(kind).unwrap_or_default())
            .collect()
    }

    /// Table catalog for every collection, in entity order.
    fn catalog() -> Catalog {
        Catalog::new(
            Self::entity_types()
                .iter()
                .map(|kind| kind.table_schema())
                .collect(),
        )
    }
}

/// People, addresses, jobs and the transactions linking them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalDataset {
    pub people: Vec<Person>,
    pub addresses: Vec<Address>,
    pub jobs: Vec<Job>,
    pub transactions: Vec<Transaction>,
}

/// Transaction field whose value has no matching key in its target collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub transaction: String,
    pub field: &'static str,
    pub value: String,
}

impl RentalDataset {
    pub fn new(
        people: Vec<Person>,
        addresses: Vec<Address>,
        jobs: Vec<Job>,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            people,
            addresses,
            jobs,
            transactions,
        }
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Person => self.people.len(),
            EntityKind::Address => self.addresses.len(),
            EntityKind::Job => self.jobs.len(),
            EntityKind::Transaction => self.transactions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.into_iter().all(|kind| self.len(kind) == 0)
    }

    /// Transaction references that do not resolve to a record in this dataset.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let people: HashSet<&str> = self.people.iter().map(Entity::key).collect();
        let addresses: HashSet<&str> = self.addresses.iter().map(Entity::key).collect();
        let jobs: HashSet<&str> = self.jobs.iter().map(Entity::key).collect();

        let mut dangling = Vec::new();
        for transaction in &self.transactions {
            let checks = [
                ("job", transaction.job.as_str(), &jobs),
                ("person", transaction.person.as_str(), &people),
                ("address", transaction.address.as_str(), &addresses),
            ];
            for (field, value, keys) in checks {
                if !keys.contains(value) {
                    dangling.push(DanglingReference {
                        transaction: transaction.id.clone(),
                        field,
                        value: value.to_string(),
                    });
                }
            }
        }
        dangling
    }
}

impl Dataset for RentalDataset {
    fn entity_types() -> &'static [EntityKind] {
        &EntityKind::ALL
    }

    fn from_sequence(entities: Vec<Vec<AnyEntity>>) -> Result<Self> {
        let [people, addresses, jobs, transactions]: [Vec<AnyEntity>; 4] =
            entities.try_into().map_err(|lists: Vec<Vec<AnyEntity>>| {
                Error::DatasetShape(format!(
                    "expected {} entity lists, found {}",
                    EntityKind::ALL.len(),
                    lists.len()
                ))
            })?;

        Ok(Self {
            people: downcast(people)?,
            addresses: downcast(addresses)?,
            jobs: downcast(jobs)?,
            transactions: downcast(transactions)?,
        })
    }

    fn entities(&self) -> BTreeMap<EntityKind, Vec<AnyEntity>> {
        let mut entities = BTreeMap::new();
        entities.insert(EntityKind::Person, upcast(&self.people));
        entities.insert(EntityKind::Address, upcast(&self.addresses));
        entities.insert(EntityKind::Job, upcast(&self.jobs));
        entities.insert(EntityKind::Transaction, upcast(&self.transactions));
        entities
    }
}

fn upcast<E: Entity>(list: &[E]) -> Vec<AnyEntity> {
    list.iter().cloned().map(Entity::into_any).collect()
}

fn downcast<E: Entity>(list: Vec<AnyEntity>) -> Result<Vec<E>> {
    list.into_iter()
        .enumerate()
        .map(|(index, entity)| {
            E::from_any(entity).map_err(|other| {
                Error::DatasetShape(format!(
                    "{} list holds a {} at position {index}",
                    E::KIND,
                    other.kind()
                ))
            })
        })
        .collect()
}
