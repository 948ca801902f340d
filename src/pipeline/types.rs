//! Record types for each stage of the pipeline.
//!
//! The source schema is carried as explicit structs with named, typed
//! fields rather than string-keyed lookups, so schema drift fails at
//! construction instead of at some downstream access. Pre-sanitization
//! types are `Option`-typed (an empty cell reads as `None`); the
//! sanitizer converts to the all-required [`CleanRecord`], making the
//! "no field is null/empty" invariant part of the type.

use serde::{Deserialize, Serialize};

/// One row as loaded from the source file, all 21 original columns.
///
/// Every field is optional at this point: missing values are removed
/// later by the sanitizer, not rejected at load time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    pub id: Option<String>,
    pub imdb_id: Option<String>,
    pub popularity: Option<f64>,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
    pub original_title: Option<String>,
    pub cast: Option<String>,
    pub homepage: Option<String>,
    pub director: Option<String>,
    pub tagline: Option<String>,
    pub keywords: Option<String>,
    pub overview: Option<String>,
    pub runtime: Option<u32>,
    pub genres: Option<String>,
    pub production_companies: Option<String>,
    pub release_date: Option<String>,
    pub vote_count: Option<u32>,
    pub vote_average: Option<f64>,
    pub release_year: Option<i32>,
    pub budget_adj: Option<f64>,
    pub revenue_adj: Option<f64>,
}

/// The loaded table: the header actually present in the file plus the
/// parsed rows in input order.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<RawRecord>,
}

/// A record after the pruner has dropped the descriptive text columns
/// and the non-inflation-adjusted monetary columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrunedRecord {
    pub id: Option<String>,
    pub imdb_id: Option<String>,
    pub popularity: Option<f64>,
    pub original_title: Option<String>,
    pub cast: Option<String>,
    pub director: Option<String>,
    pub runtime: Option<u32>,
    pub genres: Option<String>,
    pub vote_count: Option<u32>,
    pub vote_average: Option<f64>,
    pub release_year: Option<i32>,
    pub budget_adj: Option<f64>,
    pub revenue_adj: Option<f64>,
}

impl From<RawRecord> for PrunedRecord {
    fn from(r: RawRecord) -> Self {
        Self {
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
        }
    }
}

impl PrunedRecord {
    /// True when every field is present.
    pub fn is_complete(&self) -> bool {
        self.id.is_some()
            && self.imdb_id.is_some()
            && self.popularity.is_some()
            && self.original_title.is_some()
            && self.cast.is_some()
            && self.director.is_some()
            && self.runtime.is_some()
            && self.genres.is_some()
            && self.vote_count.is_some()
            && self.vote_average.is_some()
            && self.release_year.is_some()
            && self.budget_adj.is_some()
            && self.revenue_adj.is_some()
    }

    /// Unwrap into a [`CleanRecord`], or `None` if any field is missing.
    pub fn into_complete(self) -> Option<CleanRecord> {
        Some(CleanRecord {
            id: self.id?,
            imdb_id: self.imdb_id?,
            popularity: self.popularity?,
            original_title: self.original_title?,
            cast: self.cast?,
            director: self.director?,
            runtime: self.runtime?,
            genres: self.genres?,
            vote_count: self.vote_count?,
            vote_average: self.vote_average?,
            release_year: self.release_year?,
            budget_adj: self.budget_adj?,
            revenue_adj: self.revenue_adj?,
        })
    }

    /// Exact full-row identity for duplicate detection.
    ///
    /// Floats are rendered with `Display`, which is shortest-roundtrip in
    /// Rust, so two fingerprints are equal iff the rows are bit-for-bit
    /// equal. `\u{1f}` separates fields, `\u{0}` marks a missing value;
    /// neither occurs in the data.
    pub fn fingerprint(&self) -> String {
        fn push<T: std::fmt::Display>(out: &mut String, v: &Option<T>) {
            match v {
                Some(v) => out.push_str(&v.to_string()),
                None => out.push('\u{0}'),
            }
            out.push('\u{1f}');
        }

        let mut out = String::new();
        push(&mut out, &self.id);
        push(&mut out, &self.imdb_id);
        push(&mut out, &self.popularity);
        push(&mut out, &self.original_title);
        push(&mut out, &self.cast);
        push(&mut out, &self.director);
        push(&mut out, &self.runtime);
        push(&mut out, &self.genres);
        push(&mut out, &self.vote_count);
        push(&mut out, &self.vote_average);
        push(&mut out, &self.release_year);
        push(&mut out, &self.budget_adj);
        push(&mut out, &self.revenue_adj);
        out
    }
}

/// A fully-populated record: the sanitizer's output.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub id: String,
    pub imdb_id: String,
    pub popularity: f64,
    pub original_title: String,
    pub cast: String,
    pub director: String,
    pub runtime: u32,
    pub genres: String,
    pub vote_count: u32,
    pub vote_average: f64,
    pub release_year: i32,
    pub budget_adj: f64,
    pub revenue_adj: f64,
}

/// A clean record with the derived profit attached. Immutable once the
/// profit deriver has produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: String,
    pub imdb_id: String,
    pub popularity: f64,
    pub original_title: String,
    pub cast: String,
    pub director: String,
    pub runtime: u32,
    pub genres: String,
    pub vote_count: u32,
    pub vote_average: f64,
    pub release_year: i32,
    pub budget_adj: f64,
    pub revenue_adj: f64,
    /// Derived: `revenue_adj - budget_adj`, exact f64 subtraction.
    pub profit_adj: f64,
}

/// One exploded `(movie, genre)` pair, the unit of the output file.
///
/// Owns its values by copy; the source [`MovieRecord`] may be discarded
/// after explosion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreProfitRow {
    /// The source record's `imdb_id`.
    pub id: String,
    /// A single genre token, exactly as it appeared in the list.
    pub genre: String,
    /// The source record's `profit_adj`, signed.
    pub profit: f64,
}
