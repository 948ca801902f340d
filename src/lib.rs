//! Cleaning and reshaping pipeline for the TMDb movie dataset.
//!
//! Turns the raw ~10k-row TMDb export into an analysis-ready genre/profit
//! table: irrelevant columns are dropped, incomplete and duplicate records
//! removed, an inflation-adjusted profit derived, and the pipe-delimited
//! genre lists exploded into one `(id, genre, profit)` row per genre.
//!
//! The stages are pure functions composed by [`pipeline::run`]:
//!
//! ```text
//! load -> prune -> sanitize -> derive_profit -> explode_genres -> write_report
//! ```
//!
//! [`summary`] computes the descriptive statistics behind the report's
//! five business questions from the cleaned table.

pub mod error;
pub mod logging;
pub mod pipeline;
pub mod summary;

pub use error::{PipelineError, Result};
