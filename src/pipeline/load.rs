//! Movie record loader.
//!
//! Parses the delimited source file into a [`RawTable`], preserving input
//! order and every original column. Column positions are resolved from the
//! header by name, so column order in the file does not matter. The 13
//! columns the analysis needs must be present; the drop-listed columns may
//! be absent (the pruner reports them).

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;

use super::types::{RawRecord, RawTable};
use crate::error::{PipelineError, Result};

/// Columns the pipeline reads after pruning. Missing any of these is a
/// structural error at load time.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "id",
    "imdb_id",
    "popularity",
    "original_title",
    "cast",
    "director",
    "runtime",
    "genres",
    "vote_count",
    "vote_average",
    "release_year",
    "budget_adj",
    "revenue_adj",
];

/// Header positions for one input file.
struct ColumnIndex {
    id: usize,
    imdb_id: usize,
    popularity: usize,
    budget: Option<usize>,
    revenue: Option<usize>,
    original_title: usize,
    cast: usize,
    homepage: Option<usize>,
    director: usize,
    tagline: Option<usize>,
    keywords: Option<usize>,
    overview: Option<usize>,
    runtime: usize,
    genres: usize,
    production_companies: Option<usize>,
    release_date: Option<usize>,
    vote_count: usize,
    vote_average: usize,
    release_year: usize,
    budget_adj: usize,
    revenue_adj: usize,
}

impl ColumnIndex {
    fn new(header: &StringRecord, path: &Path) -> Result<Self> {
        let positions: HashMap<&str, usize> = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();

        let require = |name: &'static str| -> Result<usize> {
            positions
                .get(name)
                .copied()
                .ok_or_else(|| PipelineError::format(path, format!("missing column '{name}'")))
        };
        let optional = |name: &str| positions.get(name).copied();

        Ok(Self {
            id: require("id")?,
            imdb_id: require("imdb_id")?,
            popularity: require("popularity")?,
            budget: optional("budget"),
            revenue: optional("revenue"),
            original_title: require("original_title")?,
            cast: require("cast")?,
            homepage: optional("homepage"),
            director: require("director")?,
            tagline: optional("tagline"),
            keywords: optional("keywords"),
            overview: optional("overview"),
            runtime: require("runtime")?,
            genres: require("genres")?,
            production_companies: optional("production_companies"),
            release_date: optional("release_date"),
            vote_count: require("vote_count")?,
            vote_average: require("vote_average")?,
            release_year: require("release_year")?,
            budget_adj: require("budget_adj")?,
            revenue_adj: require("revenue_adj")?,
        })
    }
}

/// Loads the source file into a [`RawTable`].
///
/// # Errors
///
/// - [`PipelineError::Io`] if the file cannot be opened.
/// - [`PipelineError::Format`] on a missing header, a ragged row, or a
///   required column absent from the header.
/// - [`PipelineError::Parse`] when a numeric column holds a non-empty
///   value that does not parse; the error names the row and column.
pub fn load_records(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).map_err(|e| PipelineError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let header = reader.headers()?.clone();
    if header.is_empty() || (header.len() == 1 && header.get(0) == Some("")) {
        return Err(PipelineError::format(path, "missing header row"));
    }
    let index = ColumnIndex::new(&header, path)?;

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| match e.kind() {
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => PipelineError::format(
                path,
                format!("row {row}: expected {expected_len} fields, got {len}"),
            ),
            _ => PipelineError::Csv(e),
        })?;
        rows.push(parse_record(&record, &index, row)?);
    }

    tracing::info!(rows = rows.len(), columns = header.len(), "loaded {}", path.display());

    Ok(RawTable {
        columns: header.iter().map(str::to_owned).collect(),
        rows,
    })
}

fn parse_record(record: &StringRecord, cols: &ColumnIndex, row: usize) -> Result<RawRecord> {
    Ok(RawRecord {
        id: text(record, Some(cols.id)),
        imdb_id: text(record, Some(cols.imdb_id)),
        popularity: float(record, Some(cols.popularity), row, "popularity")?,
        budget: float(record, cols.budget, row, "budget")?,
        revenue: float(record, cols.revenue, row, "revenue")?,
        original_title: text(record, Some(cols.original_title)),
        cast: text(record, Some(cols.cast)),
        homepage: text(record, cols.homepage),
        director: text(record, Some(cols.director)),
        tagline: text(record, cols.tagline),
        keywords: text(record, cols.keywords),
        overview: text(record, cols.overview),
        runtime: unsigned(record, Some(cols.runtime), row, "runtime")?,
        genres: text(record, Some(cols.genres)),
        production_companies: text(record, cols.production_companies),
        release_date: text(record, cols.release_date),
        vote_count: unsigned(record, Some(cols.vote_count), row, "vote_count")?,
        vote_average: float(record, Some(cols.vote_average), row, "vote_average")?,
        release_year: signed(record, Some(cols.release_year), row, "release_year")?,
        budget_adj: float(record, Some(cols.budget_adj), row, "budget_adj")?,
        revenue_adj: float(record, Some(cols.revenue_adj), row, "revenue_adj")?,
    })
}

/// An empty cell reads as `None`; an absent column reads as `None` for
/// every row.
fn cell<'a>(record: &'a StringRecord, index: Option<usize>) -> Option<&'a str> {
    let value = record.get(index?)?;
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn text(record: &StringRecord, index: Option<usize>) -> Option<String> {
    cell(record, index).map(str::to_owned)
}

fn float(
    record: &StringRecord,
    index: Option<usize>,
    row: usize,
    column: &'static str,
) -> Result<Option<f64>> {
    parse_numeric(record, index, row, column, "a number")
}

fn unsigned(
    record: &StringRecord,
    index: Option<usize>,
    row: usize,
    column: &'static str,
) -> Result<Option<u32>> {
    parse_numeric(record, index, row, column, "a non-negative integer")
}

fn signed(
    record: &StringRecord,
    index: Option<usize>,
    row: usize,
    column: &'static str,
) -> Result<Option<i32>> {
    parse_numeric(record, index, row, column, "an integer")
}

fn parse_numeric<T: std::str::FromStr>(
    record: &StringRecord,
    index: Option<usize>,
    row: usize,
    column: &'static str,
    expected: &'static str,
) -> Result<Option<T>> {
    match cell(record, index) {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| PipelineError::Parse {
            row,
            column,
            value: value.to_owned(),
            expected,
        }),
    }
}
