//! On-disk interchange: one CSV per collection plus `schema.sql`.

pub mod csv;
pub mod ddl;

use std::path::{Path, PathBuf};

use tracing::debug;

use rentalgen_core::{Dataset, EntityKind};

use crate::errors::GenerationError;

pub use self::csv::{read_collection_csv, write_collection_csv};
pub use self::ddl::render_schema_sql;

/// File holding the `CREATE TABLE` statements of a written dataset.
pub const SCHEMA_FILE: &str = "schema.sql";

/// CSV file name for a collection, e.g. `people.csv`.
pub fn collection_file_name(kind: EntityKind) -> String {
    format!("{}.csv", kind.collection_name())
}

/// A collection written to disk.
#[derive(Debug, Clone)]
pub struct CollectionFile {
    pub kind: EntityKind,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Files written for a dataset.
#[derive(Debug, Clone)]
pub struct DatasetFiles {
    pub collections: Vec<CollectionFile>,
    pub schema_path: PathBuf,
    pub schema_bytes: u64,
}

impl DatasetFiles {
    pub fn bytes_written(&self) -> u64 {
        self.collections
            .iter()
            .map(|file| file.bytes)
            .sum::<u64>()
            .saturating_add(self.schema_bytes)
    }
}

/// Write every collection of `dataset` into `dir`, in entity order, plus the
/// schema file.
pub fn write_dataset<D: Dataset>(
    dir: &Path,
    dataset: &D,
) -> Result<DatasetFiles, GenerationError> {
    std::fs::create_dir_all(dir)?;

    let mut entities = dataset.entities();
    let mut collections = Vec::with_capacity(D::entity_types().len());
    for kind in D::entity_types() {
        let rows = entities.remove(kind).unwrap_or_default();
        let path = dir.join(collection_file_name(*kind));
        let bytes = write_collection_csv(&path, *kind, &rows)?;
        debug!(
            collection = kind.collection_name(),
            rows = rows.len(),
            bytes,
            "collection written"
        );
        collections.push(CollectionFile {
            kind: *kind,
            path,
            rows: rows.len() as u64,
            bytes,
        });
    }

    let sql = render_schema_sql(&D::catalog())?;
    let schema_path = dir.join(SCHEMA_FILE);
    std::fs::write(&schema_path, sql.as_bytes())?;

    Ok(DatasetFiles {
        collections,
        schema_path,
        schema_bytes: sql.len() as u64,
    })
}

/// Load a dataset written by [`write_dataset`].
pub fn load_dataset<D: Dataset>(dir: &Path) -> Result<D, GenerationError> {
    let mut lists = Vec::with_capacity(D::entity_types().len());
    for kind in D::entity_types() {
        let path = dir.join(collection_file_name(*kind));
        let rows = read_collection_csv(&path, *kind)?;
        debug!(
            collection = kind.collection_name(),
            rows = rows.len(),
            "collection loaded"
        );
        lists.push(rows);
    }
    Ok(D::from_sequence(lists)?)
}
