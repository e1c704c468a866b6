use rand::{Rng, RngCore};

use rentalgen_core::Entity;

use crate::errors::GenerationError;

/// Non-empty set of already-materialized parent records.
///
/// Children draw parents uniformly with replacement, so every reference a
/// child stores resolves to a record in the pool.
#[derive(Debug, Clone, Copy)]
pub struct ParentPool<'a, E> {
    records: &'a [E],
}

impl<'a, E: Entity> ParentPool<'a, E> {
    pub fn new(records: &'a [E]) -> Result<Self, GenerationError> {
        if records.is_empty() {
            return Err(GenerationError::EmptyPool(E::KIND));
        }
        Ok(Self { records })
    }

    pub fn pick(&self, rng: &mut dyn RngCore) -> &'a E {
        &self.records[rng.random_range(0..self.records.len())]
    }
}
