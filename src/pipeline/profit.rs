//! Profit deriver.
//!
//! Attaches `profit_adj = revenue_adj - budget_adj` to every surviving
//! record. Plain f64 subtraction, no rounding, no clamping: a negative
//! profit is a valid business outcome, not an error. Both operands are
//! statically numeric on [`CleanRecord`], so a type failure at this stage
//! cannot occur.

use super::types::{CleanRecord, MovieRecord};

/// Computes the adjusted profit for every record.
pub fn derive_profit(rows: Vec<CleanRecord>) -> Vec<MovieRecord> {
    rows.into_iter()
        .map(|r| MovieRecord {
            profit_adj: r.revenue_adj - r.budget_adj,
            id: r.id,
            imdb_id: r.imdb_id,
            popularity: r.popularity,
            original_title: r.original_title,
            cast: r.cast,
            director: r.director,
            runtime: r.runtime,
            genres: r.genres,
            vote_count: r.vote_count,
            vote_average: r.vote_average,
            release_year: r.release_year,
            budget_adj: r.budget_adj,
            revenue_adj: r.revenue_adj,
        })
        .collect()
}
