use std::collections::HashSet;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rentalgen_core::{Address, Entity, EntityKind, Job, Person, Transaction};
use rentalgen_generate::{
    DatasetCounts, FakerSource, FreeText, GenerationError, LocaleKey, PeopleOptions, TextSource,
    generate_addresses, generate_dataset, generate_jobs, generate_people, generate_transactions,
};

/// Deterministic source: names are `Mr <n>`/`Ms <n>` from a repeating script,
/// free text cycles through `pool` values per kind.
struct ScriptedSource {
    names: Vec<&'static str>,
    pool: usize,
    calls: usize,
}

impl ScriptedSource {
    fn new(names: Vec<&'static str>, pool: usize) -> Self {
        Self {
            names,
            pool,
            calls: 0,
        }
    }
}

impl TextSource for ScriptedSource {
    fn name_for(&mut self, male: bool, _rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        let name = self.names[self.calls % self.names.len()];
        self.calls += 1;
        let title = if male { "Mr" } else { "Ms" };
        Ok(format!("{title} {name}"))
    }

    fn free_text(
        &mut self,
        kind: FreeText,
        _rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let value = format!("{} {}", kind.as_str(), self.calls % self.pool);
        self.calls += 1;
        Ok(value)
    }
}

struct FailingSource;

impl TextSource for FailingSource {
    fn name_for(&mut self, _male: bool, _rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        Err(GenerationError::Source("name service offline".to_string()))
    }

    fn free_text(
        &mut self,
        _kind: FreeText,
        _rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Source("text service offline".to_string()))
    }
}

fn source() -> ScriptedSource {
    ScriptedSource::new(vec!["Avery", "Blake", "Casey", "Drew"], 3)
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn people_require_positive_count() {
    let err = generate_people(0, &PeopleOptions::default(), &mut source(), &mut rng()).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::InvalidCount {
            kind: EntityKind::Person
        }
    ));
}

#[test]
fn people_reject_ratio_out_of_range() {
    let options = PeopleOptions {
        male_ratio: 1.5,
        ..PeopleOptions::default()
    };
    let err = generate_people(5, &options, &mut source(), &mut rng()).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidRatio(ratio) if ratio == 1.5));

    let options = PeopleOptions {
        male_ratio: f64::NAN,
        ..PeopleOptions::default()
    };
    assert!(generate_people(5, &options, &mut source(), &mut rng()).is_err());
}

#[test]
fn people_reject_inverted_age_range() {
    let options = PeopleOptions {
        min_age: 40,
        max_age: 30,
        ..PeopleOptions::default()
    };
    let err = generate_people(5, &options, &mut source(), &mut rng()).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::InvalidAgeRange { min: 40, max: 30 }
    ));
}

#[test]
fn people_reject_unknown_locale() {
    let options = PeopleOptions {
        locale: "xx_XX".to_string(),
        ..PeopleOptions::default()
    };
    let err = generate_people(3, &options, &mut FakerSource::new(LocaleKey::EnUs), &mut rng())
        .unwrap_err();
    assert!(matches!(err, GenerationError::UnsupportedLocale(ref locale) if locale == "xx_XX"));

    // scripted sources carry no locale, but the option is still checked
    assert!(generate_people(3, &options, &mut source(), &mut rng()).is_err());
}

#[test]
fn people_reject_source_with_other_locale() {
    let options = PeopleOptions {
        locale: "pt_BR".to_string(),
        ..PeopleOptions::default()
    };
    let err = generate_people(3, &options, &mut FakerSource::default(), &mut rng()).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::LocaleMismatch {
            requested: LocaleKey::PtBr,
            provided: LocaleKey::EnUs,
        }
    ));

    let unique = PeopleOptions {
        unique: true,
        ..options.clone()
    };
    assert!(generate_people(3, &unique, &mut FakerSource::default(), &mut rng()).is_err());

    let people =
        generate_people(3, &options, &mut FakerSource::new(LocaleKey::PtBr), &mut rng()).unwrap();
    assert_eq!(people.len(), 3);
}

#[test]
fn people_get_sequential_keys() {
    let people = generate_people(12, &PeopleOptions::default(), &mut source(), &mut rng()).unwrap();
    let ids: Vec<&str> = people.iter().map(|person| person.id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"P-000000"));
    assert_eq!(ids.last(), Some(&"P-000011"));
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 12);
}

#[test]
fn male_ratio_extremes_fix_the_sex_tag() {
    let all_male = PeopleOptions {
        male_ratio: 1.0,
        ..PeopleOptions::default()
    };
    let people = generate_people(20, &all_male, &mut source(), &mut rng()).unwrap();
    assert!(people.iter().all(|person| person.male));
    assert!(people.iter().all(|person| person.name.starts_with("Mr ")));

    let all_female = PeopleOptions {
        male_ratio: 0.0,
        ..PeopleOptions::default()
    };
    let people = generate_people(20, &all_female, &mut source(), &mut rng()).unwrap();
    assert!(people.iter().all(|person| !person.male));
    assert!(people.iter().all(|person| person.name.starts_with("Ms ")));
}

#[test]
fn ages_stay_within_inclusive_range() {
    let options = PeopleOptions {
        min_age: 18,
        max_age: 21,
        ..PeopleOptions::default()
    };
    let people = generate_people(200, &options, &mut source(), &mut rng()).unwrap();
    assert!(people.iter().all(|person| (18..=21).contains(&person.age)));
    let ages: HashSet<u8> = people.iter().map(|person| person.age).collect();
    assert!(ages.contains(&18) && ages.contains(&21));

    let fixed = PeopleOptions {
        min_age: 30,
        max_age: 30,
        ..PeopleOptions::default()
    };
    let people = generate_people(5, &fixed, &mut source(), &mut rng()).unwrap();
    assert!(people.iter().all(|person| person.age == 30));
}

#[test]
fn unique_flag_deduplicates_names() {
    let options = PeopleOptions {
        male_ratio: 1.0,
        unique: true,
        ..PeopleOptions::default()
    };
    let mut repeating = ScriptedSource::new(vec!["Avery", "Avery", "Blake", "Blake", "Casey"], 1);
    let people = generate_people(3, &options, &mut repeating, &mut rng()).unwrap();
    let names: Vec<&str> = people.iter().map(|person| person.name.as_str()).collect();
    assert_eq!(names, vec!["Mr Avery", "Mr Blake", "Mr Casey"]);

    let options = PeopleOptions {
        unique: false,
        ..options
    };
    let mut repeating = ScriptedSource::new(vec!["Avery"], 1);
    let people = generate_people(3, &options, &mut repeating, &mut rng()).unwrap();
    assert!(people.iter().all(|person| person.name == "Mr Avery"));
}

#[test]
fn unique_flag_fails_when_source_runs_dry() {
    let options = PeopleOptions {
        male_ratio: 1.0,
        unique: true,
        ..PeopleOptions::default()
    };
    let mut repeating = ScriptedSource::new(vec!["Avery"], 1);
    let err = generate_people(2, &options, &mut repeating, &mut rng()).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::UniqueExhausted { what: "name", .. }
    ));
}

#[test]
fn source_failures_propagate() {
    let err = generate_people(3, &PeopleOptions::default(), &mut FailingSource, &mut rng())
        .unwrap_err();
    assert!(matches!(err, GenerationError::Source(_)));
    assert!(generate_jobs(3, &mut FailingSource, &mut rng()).is_err());
}

#[test]
fn addresses_and_jobs_may_repeat() {
    let addresses = generate_addresses(10, &mut source(), &mut rng()).unwrap();
    assert_eq!(addresses.len(), 10);
    let distinct: HashSet<&Address> = addresses.iter().collect();
    assert!(distinct.len() <= 3);

    let jobs = generate_jobs(7, &mut source(), &mut rng()).unwrap();
    assert_eq!(jobs.len(), 7);
    assert_eq!(jobs[0], Job::new("job 0"));
    assert_eq!(jobs[3], Job::new("job 0"));
}

#[test]
fn leaf_generators_require_positive_count() {
    assert!(matches!(
        generate_addresses(0, &mut source(), &mut rng()),
        Err(GenerationError::InvalidCount {
            kind: EntityKind::Address
        })
    ));
    assert!(matches!(
        generate_jobs(0, &mut source(), &mut rng()),
        Err(GenerationError::InvalidCount {
            kind: EntityKind::Job
        })
    ));
}

#[test]
fn transactions_require_every_pool() {
    let mut rng = rng();
    let people = generate_people(2, &PeopleOptions::default(), &mut source(), &mut rng).unwrap();
    let addresses = generate_addresses(2, &mut source(), &mut rng).unwrap();
    let jobs = generate_jobs(2, &mut source(), &mut rng).unwrap();

    let err = generate_transactions(5, &[], &addresses, &jobs, &mut rng).unwrap_err();
    assert!(matches!(err, GenerationError::EmptyPool(EntityKind::Person)));
    let err = generate_transactions(5, &people, &[], &jobs, &mut rng).unwrap_err();
    assert!(matches!(err, GenerationError::EmptyPool(EntityKind::Address)));
    let err = generate_transactions(5, &people, &addresses, &[], &mut rng).unwrap_err();
    assert!(matches!(err, GenerationError::EmptyPool(EntityKind::Job)));
    let err = generate_transactions(0, &people, &addresses, &jobs, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::InvalidCount {
            kind: EntityKind::Transaction
        }
    ));
}

#[test]
fn small_dataset_matches_requested_shape() {
    let dataset = generate_dataset(
        &DatasetCounts::new(3, 2, 2, 5),
        &PeopleOptions::default(),
        &mut source(),
        &mut source(),
        11,
    )
    .unwrap();

    let person_ids: Vec<&str> = dataset.people.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(person_ids, vec!["P-000000", "P-000001", "P-000002"]);
    assert_eq!(dataset.addresses.len(), 2);
    assert_eq!(dataset.jobs.len(), 2);

    let transaction_ids: Vec<&str> = dataset.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        transaction_ids,
        vec!["T-000000", "T-000001", "T-000002", "T-000003", "T-000004"]
    );

    for transaction in &dataset.transactions {
        assert!(dataset.people.iter().any(|p| p.id == transaction.person));
        assert!(dataset.addresses.iter().any(|a| a.address == transaction.address));
        assert!(dataset.jobs.iter().any(|j| j.job == transaction.job));
    }
}

#[test]
fn larger_dataset_keeps_referential_integrity() {
    let dataset = generate_dataset(
        &DatasetCounts::new(40, 15, 8, 300),
        &PeopleOptions::default(),
        &mut source(),
        &mut source(),
        99,
    )
    .unwrap();

    assert_eq!(dataset.people.len(), 40);
    assert_eq!(dataset.transactions.len(), 300);
    assert!(dataset.dangling_references().is_empty());

    let ids: HashSet<&str> = dataset.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 300);

    // sampling is with replacement, so people are referenced repeatedly
    let referenced: HashSet<&str> = dataset
        .transactions
        .iter()
        .map(|t| t.person.as_str())
        .collect();
    assert!(referenced.len() < dataset.transactions.len());
}

#[test]
fn generated_records_round_trip_through_rows() {
    let dataset = generate_dataset(
        &DatasetCounts::new(25, 5, 5, 25),
        &PeopleOptions::default(),
        &mut source(),
        &mut source(),
        5,
    )
    .unwrap();

    for person in &dataset.people {
        let restored = Person::from_sequence(&person.to_sequence()).unwrap();
        assert_eq!(&restored, person);
        assert_eq!(restored.to_sequence(), person.to_sequence());
    }
    for transaction in &dataset.transactions {
        let restored = Transaction::from_sequence(&transaction.to_sequence()).unwrap();
        assert_eq!(restored.to_sequence(), transaction.to_sequence());
    }
    for address in &dataset.addresses {
        assert_eq!(&Address::from_sequence(&address.to_sequence()).unwrap(), address);
    }
}
