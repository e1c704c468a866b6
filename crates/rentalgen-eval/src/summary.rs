//! Chart data for a rental dataset.
//!
//! Every chart is plain data; rendering is left to [`crate::report`] or to
//! whatever consumes the JSON form.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use rentalgen_core::{AnyEntity, Dataset, Entity, EntityKind, RentalDataset, Transaction};
use rentalgen_generate::{GenerationReport, REPORT_FILE, load_dataset};

use crate::errors::EvalError;
use crate::schema_metrics::{SchemaMetrics, collect_schema_metrics};

/// Total versus distinct values of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCounts {
    pub field: String,
    pub total: u64,
    pub unique: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBucket {
    pub age: u8,
    pub people: u64,
}

/// Slice of the transactions-per-address pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressShare {
    pub address: String,
    pub transactions: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRows {
    pub collection: String,
    pub rows: u64,
}

/// Transaction references checked against the generated collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegritySummary {
    pub checked: u64,
    /// Dangling reference count per transaction field.
    pub dangling: BTreeMap<String, u64>,
    /// First few dangling references as `transaction.field=value`.
    pub examples: Vec<String>,
}

impl IntegritySummary {
    pub fn total_dangling(&self) -> u64 {
        self.dangling.values().sum()
    }
}

/// Every chart of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub collections: Vec<CollectionRows>,
    pub total_vs_unique: Vec<ValueCounts>,
    /// Total versus distinct primary key values per collection.
    pub primary_keys: Vec<ValueCounts>,
    pub people_per_age: Vec<AgeBucket>,
    pub transactions_per_address: Vec<AddressShare>,
    pub integrity: IntegritySummary,
}

/// Summary of a run directory written by the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Option<String>,
    pub seed: Option<u64>,
    pub dataset: DatasetSummary,
    pub schema: SchemaMetrics,
}

const MAX_INTEGRITY_EXAMPLES: usize = 10;

/// Compute every chart for `dataset`.
pub fn summarize(dataset: &RentalDataset) -> DatasetSummary {
    let collections = RentalDataset::entity_types()
        .iter()
        .map(|kind| CollectionRows {
            collection: kind.collection_name().to_string(),
            rows: dataset.len(*kind) as u64,
        })
        .collect();

    let total_vs_unique = vec![
        value_counts("Person.age", dataset.people.iter().map(|person| person.age)),
        value_counts("Job.job", dataset.jobs.iter().map(|job| job.job.as_str())),
    ];

    let mut entities = dataset.entities();
    let primary_keys = RentalDataset::entity_types()
        .iter()
        .map(|kind| {
            let rows = entities.remove(kind).unwrap_or_default();
            let field = format!("{}.{}", kind.collection_name(), kind.field_names()[0]);
            value_counts(&field, rows.iter().map(AnyEntity::key))
        })
        .collect();

    let mut ages: BTreeMap<u8, u64> = BTreeMap::new();
    for person in &dataset.people {
        *ages.entry(person.age).or_default() += 1;
    }
    let people_per_age = ages
        .into_iter()
        .map(|(age, people)| AgeBucket { age, people })
        .collect();

    let mut per_address: BTreeMap<&str, u64> = BTreeMap::new();
    for transaction in &dataset.transactions {
        *per_address.entry(transaction.address.as_str()).or_default() += 1;
    }
    let total = dataset.transactions.len() as f64;
    let transactions_per_address = per_address
        .into_iter()
        .map(|(address, transactions)| AddressShare {
            address: address.to_string(),
            transactions,
            percent: transactions as f64 * 100.0 / total,
        })
        .collect();

    DatasetSummary {
        collections,
        total_vs_unique,
        primary_keys,
        people_per_age,
        transactions_per_address,
        integrity: integrity(dataset),
    }
}

/// Load the dataset in `run_dir` and summarize it with its catalog metrics.
///
/// The generation report is optional; without it `run_id` and `seed` stay
/// empty.
pub fn summarize_run(run_dir: &Path) -> Result<RunSummary, EvalError> {
    if !run_dir.is_dir() {
        return Err(EvalError::MissingRun(run_dir.display().to_string()));
    }

    let dataset: RentalDataset = load_dataset(run_dir)?;
    let report_path = run_dir.join(REPORT_FILE);
    let report = if report_path.exists() {
        let contents = std::fs::read_to_string(&report_path)?;
        Some(serde_json::from_str::<GenerationReport>(&contents)?)
    } else {
        None
    };

    Ok(RunSummary {
        run_id: report.as_ref().map(|report| report.run_id.clone()),
        seed: report.as_ref().map(|report| report.seed),
        dataset: summarize(&dataset),
        schema: collect_schema_metrics(&RentalDataset::catalog()),
    })
}

fn value_counts<T, I>(field: &str, values: I) -> ValueCounts
where
    T: Eq + std::hash::Hash,
    I: IntoIterator<Item = T>,
{
    let mut total = 0u64;
    let mut seen = HashSet::new();
    for value in values {
        total += 1;
        seen.insert(value);
    }
    ValueCounts {
        field: field.to_string(),
        total,
        unique: seen.len() as u64,
    }
}

fn integrity(dataset: &RentalDataset) -> IntegritySummary {
    let table = Transaction::table_schema();
    let mut dangling: BTreeMap<String, u64> = table
        .foreign_keys()
        .flat_map(|fk| fk.columns.iter().cloned())
        .map(|field| (field, 0))
        .collect();
    let fields = dangling.len() as u64;

    let references = dataset.dangling_references();
    for reference in &references {
        *dangling.entry(reference.field.to_string()).or_default() += 1;
    }
    let examples = references
        .iter()
        .take(MAX_INTEGRITY_EXAMPLES)
        .map(|reference| {
            format!(
                "{}.{}={}",
                reference.transaction, reference.field, reference.value
            )
        })
        .collect();

    IntegritySummary {
        checked: dataset.len(EntityKind::Transaction) as u64 * fields,
        dangling,
        examples,
    }
}
