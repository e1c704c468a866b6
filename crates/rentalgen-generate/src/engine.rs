use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use rentalgen_core::{Address, Entity, Job, Person, RentalDataset, Transaction};

use crate::errors::GenerationError;
use crate::faker_rs::FakerSource;
use crate::generators::{generate_addresses, generate_jobs, generate_people, generate_transactions};
use crate::model::{DatasetCounts, GenerateOptions, GenerationReport, PeopleOptions, TableReport};
use crate::output::write_dataset;
use crate::source::TextSource;

/// Report file written next to the generated collections.
pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub run_dir: PathBuf,
    pub report: GenerationReport,
    pub dataset: RentalDataset,
}

/// Identity and directory of one generation run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub run_dir: PathBuf,
}

/// Entry point for generating rental datasets.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate a dataset in memory.
    pub fn generate(&self, counts: &DatasetCounts) -> Result<RentalDataset, GenerationError> {
        self.generate_seeded(counts, self.resolve_seed())
    }

    /// Create a fresh run directory under `out_dir`.
    pub fn prepare_run(&self) -> Result<RunContext, GenerationError> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__run_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;
        Ok(RunContext { run_id, run_dir })
    }

    /// Generate a dataset and write it, with `schema.sql` and a report, into a
    /// fresh run directory under `out_dir`.
    pub fn run(&self, counts: &DatasetCounts) -> Result<GenerationResult, GenerationError> {
        let context = self.prepare_run()?;
        self.run_in(&context, counts)
    }

    /// Like [`GenerationEngine::run`], inside a directory from
    /// [`GenerationEngine::prepare_run`].
    pub fn run_in(
        &self,
        context: &RunContext,
        counts: &DatasetCounts,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = context.run_id.clone();
        let run_dir = context.run_dir.clone();
        std::fs::create_dir_all(&run_dir)?;

        let seed = self.resolve_seed();
        let mut report = GenerationReport::new(run_id.clone(), seed);

        info!(
            run_id = %run_id,
            seed,
            people = counts.people,
            addresses = counts.addresses,
            jobs = counts.jobs,
            transactions = counts.transactions,
            "generation started"
        );

        let outcome = self.generate_seeded(counts, seed).and_then(|dataset| {
            let files = write_dataset(&run_dir, &dataset)?;
            Ok((dataset, files))
        });
        report.duration_ms = start.elapsed().as_millis() as u64;

        let report_path = run_dir.join(REPORT_FILE);
        let write_report = |report: &GenerationReport| -> Result<(), GenerationError> {
            std::fs::write(&report_path, serde_json::to_vec_pretty(report)?)?;
            Ok(())
        };

        match outcome {
            Ok((dataset, files)) => {
                report.tables = files
                    .collections
                    .iter()
                    .map(|file| TableReport {
                        collection: file.kind.collection_name().to_string(),
                        rows_requested: counts.requested(file.kind) as u64,
                        rows_generated: file.rows,
                        bytes_written: file.bytes,
                    })
                    .collect();
                report.bytes_written = files.bytes_written();
                write_report(&report)?;
                info!(
                    run_id = %run_id,
                    tables = report.tables.len(),
                    duration_ms = report.duration_ms,
                    bytes_written = report.bytes_written,
                    "generation completed"
                );
                Ok(GenerationResult {
                    run_dir,
                    report,
                    dataset,
                })
            }
            Err(err) => {
                report.record_failure(err.to_string());
                write_report(&report)?;
                warn!(run_id = %run_id, error = %err, "generation failed");
                Err(err)
            }
        }
    }

    fn resolve_seed(&self) -> u64 {
        self.options.seed.unwrap_or_else(rand::random)
    }

    fn generate_seeded(
        &self,
        counts: &DatasetCounts,
        seed: u64,
    ) -> Result<RentalDataset, GenerationError> {
        let mut names = FakerSource::new(self.options.people.locale_key()?);
        let mut text = FakerSource::default();
        generate_dataset(counts, &self.options.people, &mut names, &mut text, seed)
    }
}

/// Generate every collection, leaves before transactions.
///
/// Each collection draws from its own RNG derived from `seed` and the
/// collection name, so a seed fully determines the dataset for given sources.
pub fn generate_dataset(
    counts: &DatasetCounts,
    people_options: &PeopleOptions,
    names: &mut dyn TextSource,
    text: &mut dyn TextSource,
    seed: u64,
) -> Result<RentalDataset, GenerationError> {
    let mut rng = collection_rng(seed, Person::collection_name());
    let people = generate_people(counts.people, people_options, names, &mut rng)?;
    log_collection(Person::collection_name(), people.len());

    let mut rng = collection_rng(seed, Address::collection_name());
    let addresses = generate_addresses(counts.addresses, text, &mut rng)?;
    log_collection(Address::collection_name(), addresses.len());

    let mut rng = collection_rng(seed, Job::collection_name());
    let jobs = generate_jobs(counts.jobs, text, &mut rng)?;
    log_collection(Job::collection_name(), jobs.len());

    let mut rng = collection_rng(seed, Transaction::collection_name());
    let transactions =
        generate_transactions(counts.transactions, &people, &addresses, &jobs, &mut rng)?;
    log_collection(Transaction::collection_name(), transactions.len());

    Ok(RentalDataset::new(people, addresses, jobs, transactions))
}

/// Generate a dataset with default options and a fresh seed.
pub fn generate(
    count_of_customers: usize,
    count_of_addresses: usize,
    count_of_jobs: usize,
    count_of_transactions: usize,
) -> Result<RentalDataset, GenerationError> {
    let counts = DatasetCounts::new(
        count_of_customers,
        count_of_addresses,
        count_of_jobs,
        count_of_transactions,
    );
    GenerationEngine::new(GenerateOptions::default()).generate(&counts)
}

fn log_collection(collection: &str, rows: usize) {
    info!(collection, rows, "collection generated");
}

fn collection_rng(seed: u64, collection: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed, collection))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_seeds_differ_per_collection() {
        let people = hash_seed(42, "people");
        let jobs = hash_seed(42, "jobs");
        assert_ne!(people, jobs);
        assert_eq!(people, hash_seed(42, "people"));
        assert_ne!(people, hash_seed(43, "people"));
    }

    #[test]
    fn unsupported_locale_fails_before_generation() {
        let mut options = GenerateOptions::default();
        options.people.locale = "xx_XX".to_string();
        options.seed = Some(1);
        let err = GenerationEngine::new(options)
            .generate(&DatasetCounts::default())
            .unwrap_err();
        assert!(matches!(err, GenerationError::UnsupportedLocale(locale) if locale == "xx_XX"));
    }
}
