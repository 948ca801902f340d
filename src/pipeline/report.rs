//! Report writer.
//!
//! Persists the exploded genre/profit table as CSV with the header
//! `id,genre,profit`, for the downstream reporting layer. Values with
//! embedded delimiters are quoted by the csv crate. An existing file at
//! the destination is overwritten without confirmation; callers guard
//! against accidental overwrite themselves.

use std::path::Path;

use super::types::GenreProfitRow;
use crate::error::{PipelineError, Result};

/// Writes the rows to `path` as CSV.
///
/// # Errors
///
/// [`PipelineError::Io`] when the destination cannot be created, e.g. a
/// missing or unwritable parent directory.
pub fn write_report(rows: &[GenreProfitRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|e| PipelineError::io(path, e))?;

    tracing::info!(rows = rows.len(), "wrote {}", path.display());
    Ok(())
}

/// Reads a genre/profit file back, the inverse of [`write_report`].
pub fn read_report(path: &Path) -> Result<Vec<GenreProfitRow>> {
    let file = std::fs::File::open(path).map_err(|e| PipelineError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
