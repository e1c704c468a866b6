//! Per-collection generators.
//!
//! Leaf collections (people, addresses, jobs) only draw from a [`TextSource`];
//! transactions draw their references from already generated leaves.

use rand::{Rng, RngCore};

use rentalgen_core::{Address, EntityKind, Job, Person, Transaction, person_key, transaction_key};

use crate::errors::GenerationError;
use crate::foreign::ParentPool;
use crate::model::PeopleOptions;
use crate::source::{FreeText, TextSource, UniqueSource};

/// Generate `n` people with sequential keys `P-000000`, `P-000001`, ...
///
/// Each person is tagged male with probability `options.male_ratio` and gets
/// a uniform age in `[options.min_age, options.max_age]`. With
/// `options.unique` the names are distinct within this call. A source that
/// reports its name locale must match `options.locale`.
pub fn generate_people(
    n: usize,
    options: &PeopleOptions,
    source: &mut dyn TextSource,
    rng: &mut dyn RngCore,
) -> Result<Vec<Person>, GenerationError> {
    ensure_count(EntityKind::Person, n)?;
    options.validate()?;
    let requested = options.locale_key()?;
    if let Some(provided) = source.name_locale()
        && provided != requested
    {
        return Err(GenerationError::LocaleMismatch {
            requested,
            provided,
        });
    }

    let mut unique_source;
    let source: &mut dyn TextSource = if options.unique {
        unique_source = UniqueSource::new(source);
        &mut unique_source
    } else {
        source
    };

    let mut people = Vec::with_capacity(n);
    for index in 0..n {
        let male = rng.random_bool(options.male_ratio);
        let age = rng.random_range(options.min_age..=options.max_age);
        let name = source.name_for(male, rng)?;
        people.push(Person::new(person_key(index), name, age, male));
    }
    Ok(people)
}

/// Generate `n` addresses; repeated values are kept.
pub fn generate_addresses(
    n: usize,
    source: &mut dyn TextSource,
    rng: &mut dyn RngCore,
) -> Result<Vec<Address>, GenerationError> {
    ensure_count(EntityKind::Address, n)?;
    (0..n)
        .map(|_| source.free_text(FreeText::Address, rng).map(Address::new))
        .collect()
}

/// Generate `n` jobs; repeated values are kept.
pub fn generate_jobs(
    n: usize,
    source: &mut dyn TextSource,
    rng: &mut dyn RngCore,
) -> Result<Vec<Job>, GenerationError> {
    ensure_count(EntityKind::Job, n)?;
    (0..n)
        .map(|_| source.free_text(FreeText::Job, rng).map(Job::new))
        .collect()
}

/// Generate `n` transactions with sequential keys `T-000000`, ...
///
/// Every transaction samples one person, one address and one job uniformly
/// with replacement from the given collections.
pub fn generate_transactions(
    n: usize,
    people: &[Person],
    addresses: &[Address],
    jobs: &[Job],
    rng: &mut dyn RngCore,
) -> Result<Vec<Transaction>, GenerationError> {
    ensure_count(EntityKind::Transaction, n)?;
    let people = ParentPool::new(people)?;
    let addresses = ParentPool::new(addresses)?;
    let jobs = ParentPool::new(jobs)?;

    let mut transactions = Vec::with_capacity(n);
    for index in 0..n {
        let person = people.pick(rng);
        let address = addresses.pick(rng);
        let job = jobs.pick(rng);
        transactions.push(Transaction::linking(
            transaction_key(index),
            job,
            person,
            address,
        ));
    }
    Ok(transactions)
}

fn ensure_count(kind: EntityKind, n: usize) -> Result<(), GenerationError> {
    if n == 0 {
        Err(GenerationError::InvalidCount { kind })
    } else {
        Ok(())
    }
}
