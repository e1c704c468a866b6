use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use rentalgen_core::EntityKind;

use crate::errors::GenerationError;
use crate::faker_rs::LocaleKey;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where run artifacts are written.
    pub out_dir: PathBuf,
    /// Run seed; a fresh random seed is drawn when absent.
    pub seed: Option<u64>,
    /// Person generation knobs.
    pub people: PeopleOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            seed: None,
            people: PeopleOptions::default(),
        }
    }
}

/// Knobs for the person generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeopleOptions {
    /// Probability that a generated person is tagged male.
    pub male_ratio: f64,
    /// Locale of the name source.
    pub locale: String,
    /// Require distinct names within one generator call.
    pub unique: bool,
    pub min_age: u8,
    pub max_age: u8,
}

impl Default for PeopleOptions {
    fn default() -> Self {
        Self {
            male_ratio: 0.5,
            locale: "en_US".to_string(),
            unique: false,
            min_age: 0,
            max_age: 100,
        }
    }
}

impl PeopleOptions {
    pub fn locale_key(&self) -> Result<LocaleKey, GenerationError> {
        LocaleKey::parse(&self.locale)
            .ok_or_else(|| GenerationError::UnsupportedLocale(self.locale.clone()))
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        self.locale_key()?;
        if !(0.0..=1.0).contains(&self.male_ratio) {
            return Err(GenerationError::InvalidRatio(self.male_ratio));
        }
        if self.min_age > self.max_age {
            return Err(GenerationError::InvalidAgeRange {
                min: self.min_age,
                max: self.max_age,
            });
        }
        Ok(())
    }
}

/// Requested number of records per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetCounts {
    pub people: usize,
    pub addresses: usize,
    pub jobs: usize,
    pub transactions: usize,
}

impl DatasetCounts {
    pub fn new(people: usize, addresses: usize, jobs: usize, transactions: usize) -> Self {
        Self {
            people,
            addresses,
            jobs,
            transactions,
        }
    }

    pub fn requested(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Person => self.people,
            EntityKind::Address => self.addresses,
            EntityKind::Job => self.jobs,
            EntityKind::Transaction => self.transactions,
        }
    }
}

impl Default for DatasetCounts {
    fn default() -> Self {
        Self::new(10, 5, 5, 20)
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Failed,
}

/// Summary of a generated collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub collection: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub bytes_written: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            status: RunStatus::Completed,
            error: None,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_failure(&mut self, message: String) {
        self.status = RunStatus::Failed;
        self.error = Some(message);
    }
}
