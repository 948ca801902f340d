//! Genre explosion.
//!
//! A movie can carry several genres in one pipe-delimited field
//! ("Action|Adventure|Science Fiction"). Aggregating by genre needs one
//! row per genre, so each record is expanded into one
//! [`GenreProfitRow`] per token, carrying the record's `imdb_id` and
//! profit unchanged. Tokens are taken exactly as they appear: no
//! trimming, no deduplication, no case folding.

use super::types::{GenreProfitRow, MovieRecord};
use crate::error::{PipelineError, Result};

/// Expands every record into one row per genre token.
///
/// Output order is grouped by source-row order; within a record, tokens
/// keep the order they have in the original string. A `genres` value
/// without a pipe yields exactly one row.
///
/// # Errors
///
/// [`PipelineError::MissingValue`] if a record's `genres` is empty. The
/// sanitizer excludes that case in the composed pipeline, but the
/// contract holds when invoked standalone.
pub fn explode_genres(records: &[MovieRecord]) -> Result<Vec<GenreProfitRow>> {
    let mut rows = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        if record.genres.is_empty() {
            return Err(PipelineError::MissingValue {
                row,
                column: "genres",
            });
        }
        for genre in record.genres.split('|') {
            rows.push(GenreProfitRow {
                id: record.imdb_id.clone(),
                genre: genre.to_owned(),
                profit: record.profit_adj,
            });
        }
    }
    Ok(rows)
}
