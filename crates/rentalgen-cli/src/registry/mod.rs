pub mod logging;

use std::path::Path;

use thiserror::Error;

pub use logging::init_logging;

/// JSON log written into every `generate` run directory.
pub const RUN_LOG_FILE: &str = "run.log.jsonl";

/// Errors raised while recording run artifacts.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Write a text artifact, creating its parent directory when missing.
pub fn write_text(path: &Path, contents: &str) -> RegistryResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

