//! The cleaning-and-reshaping pipeline.
//!
//! Strictly sequential, one pass, whole table in memory:
//! load → prune → sanitize → derive profit → explode genres → write.
//! Every stage is a pure function over its predecessor's complete
//! output; [`run`] is the composition and aborts on the first error with
//! no partial output.

pub mod explode;
pub mod load;
pub mod profit;
pub mod prune;
pub mod report;
pub mod sanitize;
pub mod types;

pub use explode::explode_genres;
pub use load::load_records;
pub use profit::derive_profit;
pub use prune::{prune, DROPPED_COLUMNS};
pub use report::{read_report, write_report};
pub use sanitize::{drop_duplicates, drop_nulls, sanitize};
pub use types::{CleanRecord, GenreProfitRow, MovieRecord, PrunedRecord, RawRecord, RawTable};

use std::path::Path;

use crate::error::Result;

/// Row counts observed while running the full pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Rows parsed from the input file.
    pub loaded: usize,
    /// Rows surviving the null and duplicate drops.
    pub cleaned: usize,
    /// Genre rows written to the output file.
    pub exploded: usize,
}

/// Runs the whole pipeline from an input file to the genre/profit file.
pub fn run(input: &Path, output: &Path) -> Result<RunStats> {
    let table = load_records(input)?;
    let loaded = table.rows.len();

    let pruned = prune(table);
    let clean = sanitize(pruned);
    let cleaned = clean.len();
    tracing::info!(loaded, cleaned, "sanitized table");

    let movies = derive_profit(clean);
    let rows = explode_genres(&movies)?;
    write_report(&rows, output)?;

    Ok(RunStats {
        loaded,
        cleaned,
        exploded: rows.len(),
    })
}

/// Loads, cleans and derives in memory without writing anything; used by
/// the summary command and tests.
pub fn clean_movies(input: &Path) -> Result<Vec<MovieRecord>> {
    let table = load_records(input)?;
    Ok(derive_profit(sanitize(prune(table))))
}

#[cfg(test)]
mod tests;
