//! Record sanitizer.
//!
//! Two filtering passes over the pruned table: drop every row with a
//! missing value in any remaining column, then drop exact full-row
//! duplicates keeping the first occurrence. The policy is conservative
//! correctness over completeness: a row with any gap is lost rather than
//! analysed on partial values.
//!
//! Both passes are total and idempotent, and the row count never grows.

use std::collections::HashSet;

use super::types::{CleanRecord, PrunedRecord};

/// Removes every row with a missing value in any column.
pub fn drop_nulls(rows: Vec<PrunedRecord>) -> Vec<PrunedRecord> {
    let before = rows.len();
    let rows: Vec<_> = rows.into_iter().filter(PrunedRecord::is_complete).collect();
    if rows.len() < before {
        tracing::debug!(dropped = before - rows.len(), "dropped rows with missing values");
    }
    rows
}

/// Removes rows that exactly duplicate an earlier row, comparing all
/// columns. Input order decides which occurrence survives.
pub fn drop_duplicates(rows: Vec<PrunedRecord>) -> Vec<PrunedRecord> {
    let before = rows.len();
    let mut seen = HashSet::with_capacity(rows.len());
    let rows: Vec<_> = rows
        .into_iter()
        .filter(|row| seen.insert(row.fingerprint()))
        .collect();
    if rows.len() < before {
        tracing::debug!(dropped = before - rows.len(), "dropped duplicate rows");
    }
    rows
}

/// Runs both passes and unwraps the survivors into [`CleanRecord`]s.
///
/// The conversion cannot lose rows: after [`drop_nulls`] every field is
/// present.
pub fn sanitize(rows: Vec<PrunedRecord>) -> Vec<CleanRecord> {
    drop_duplicates(drop_nulls(rows))
        .into_iter()
        .filter_map(PrunedRecord::into_complete)
        .collect()
}
