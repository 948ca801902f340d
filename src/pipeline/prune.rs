//! Column pruner.
//!
//! Drops the columns that play no part in the profit analysis: the
//! descriptive text fields and the monetary fields that are not adjusted
//! for inflation (`budget_adj`/`revenue_adj` are kept instead, so eras
//! compare fairly). The drop is total: a drop-listed column absent from
//! the input is reported and skipped, not an error, to tolerate schema
//! drift.

use std::collections::HashSet;

use super::types::{PrunedRecord, RawTable};

/// Columns removed before analysis, if present.
pub const DROPPED_COLUMNS: [&str; 8] = [
    "homepage",
    "tagline",
    "keywords",
    "overview",
    "release_date",
    "production_companies",
    "budget",
    "revenue",
];

/// Removes the drop-listed columns from every row.
///
/// Never fails. Logs each drop-listed column that was not present in the
/// input header.
pub fn prune(table: RawTable) -> Vec<PrunedRecord> {
    let present: HashSet<&str> = table.columns.iter().map(String::as_str).collect();
    for column in DROPPED_COLUMNS {
        if !present.contains(column) {
            tracing::warn!(column, "drop-listed column not present in input, skipping");
        }
    }

    table.rows.into_iter().map(PrunedRecord::from).collect()
}
