use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rentalgen_core::{AnyEntity, EntityKind};

use crate::errors::GenerationError;

/// Write one collection as CSV: a header of field names, then one row per
/// record in `to_sequence` order. Returns the number of bytes written.
pub fn write_collection_csv(
    path: &Path,
    kind: EntityKind,
    rows: &[AnyEntity],
) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(kind.field_names())?;
    for row in rows {
        writer.write_record(row.to_sequence())?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

/// Read one collection written by [`write_collection_csv`].
///
/// The header must match the variant's field names exactly; each row is
/// rebuilt through `from_sequence`.
pub fn read_collection_csv(
    path: &Path,
    kind: EntityKind,
) -> Result<Vec<AnyEntity>, GenerationError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header = reader.headers()?.clone();
    if !header.iter().eq(kind.field_names().iter().copied()) {
        return Err(GenerationError::HeaderMismatch {
            file: file_name,
            expected: kind.field_names().join(", "),
            found: header.iter().collect::<Vec<_>>().join(", "),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let fields: Vec<&str> = record.iter().collect();
        let entity = kind
            .from_sequence(&fields)
            .map_err(|source| GenerationError::MalformedRow {
                file: file_name.clone(),
                line,
                source,
            })?;
        rows.push(entity);
    }
    Ok(rows)
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
