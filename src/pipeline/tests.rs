#![expect(clippy::unwrap_used)]

use super::*;
use crate::error::PipelineError;
use anyhow::Result;
use std::path::PathBuf;

const HEADER: &str =
    "id,imdb_id,popularity,original_title,cast,director,runtime,genres,vote_count,vote_average,release_year,budget_adj,revenue_adj";

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn pruned(imdb_id: &str, genres: &str) -> PrunedRecord {
    PrunedRecord {
        id: Some("1".to_owned()),
        imdb_id: Some(imdb_id.to_owned()),
        popularity: Some(2.5),
        original_title: Some("Test Movie".to_owned()),
        cast: Some("Alice|Bob".to_owned()),
        director: Some("Carol".to_owned()),
        runtime: Some(120),
        genres: Some(genres.to_owned()),
        vote_count: Some(100),
        vote_average: Some(7.5),
        release_year: Some(2010),
        budget_adj: Some(1_000_000.0),
        revenue_adj: Some(2_500_000.0),
    }
}

fn movie(imdb_id: &str, genres: &str, budget_adj: f64, revenue_adj: f64) -> MovieRecord {
    let mut record = pruned(imdb_id, genres);
    record.budget_adj = Some(budget_adj);
    record.revenue_adj = Some(revenue_adj);
    let clean = record.into_complete().unwrap();
    derive_profit(vec![clean]).pop().unwrap()
}

// ---- loader ----

#[test]
fn load_parses_typed_fields_in_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        &dir,
        "movies.csv",
        &format!(
            "{HEADER}\n\
             1,tt000123,2.5,First,Alice|Bob,Carol,120,Comedy|Romance,100,7.5,2010,1000000.0,2500000.0\n\
             2,tt000124,0.8,Second,Dave,Erin,95,Drama,40,6.1,1999,500000,250000\n"
        ),
    );

    let table = load_records(&path)?;
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.columns.len(), 13);

    let first = &table.rows[0];
    assert_eq!(first.imdb_id.as_deref(), Some("tt000123"));
    assert_eq!(first.runtime, Some(120));
    assert_eq!(first.vote_average, Some(7.5));
    assert_eq!(first.budget_adj, Some(1_000_000.0));

    let second = &table.rows[1];
    assert_eq!(second.imdb_id.as_deref(), Some("tt000124"));
    assert_eq!(second.release_year, Some(1999));
    Ok(())
}

#[test]
fn load_reads_empty_cells_as_none() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        &dir,
        "movies.csv",
        &format!("{HEADER}\n1,tt000123,2.5,First,,Carol,120,Comedy,100,7.5,2010,,2500000.0\n"),
    );

    let table = load_records(&path)?;
    let row = &table.rows[0];
    assert_eq!(row.cast, None);
    assert_eq!(row.budget_adj, None);
    assert_eq!(row.revenue_adj, Some(2_500_000.0));
    Ok(())
}

#[test]
fn load_fails_on_ragged_row() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        &dir,
        "movies.csv",
        &format!("{HEADER}\n1,tt000123,2.5,First\n"),
    );

    let err = load_records(&path).unwrap_err();
    match err {
        PipelineError::Format { reason, .. } => {
            assert!(reason.contains("row 0"), "reason was: {reason}");
            assert!(reason.contains("fields"), "reason was: {reason}");
        }
        other => panic!("expected Format error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn load_fails_on_unparseable_numeric_naming_row_and_column() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        &dir,
        "movies.csv",
        &format!(
            "{HEADER}\n\
             1,tt000123,2.5,First,Alice,Carol,120,Comedy,100,7.5,2010,1.0,2.0\n\
             2,tt000124,2.5,Second,Alice,Carol,ninety,Comedy,100,7.5,2010,1.0,2.0\n"
        ),
    );

    let err = load_records(&path).unwrap_err();
    match err {
        PipelineError::Parse { row, column, value, .. } => {
            assert_eq!(row, 1);
            assert_eq!(column, "runtime");
            assert_eq!(value, "ninety");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn load_fails_on_missing_required_column() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        &dir,
        "movies.csv",
        "id,imdb_id,popularity\n1,tt000123,2.5\n",
    );

    let err = load_records(&path).unwrap_err();
    assert!(
        err.to_string().contains("missing column"),
        "got: {err}"
    );
    Ok(())
}

#[test]
fn load_fails_on_empty_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(&dir, "movies.csv", "");

    let err = load_records(&path).unwrap_err();
    assert!(err.to_string().contains("missing header"), "got: {err}");
    Ok(())
}

#[test]
fn load_fails_on_missing_file() {
    let err = load_records(std::path::Path::new("/no/such/dir/movies.csv")).unwrap_err();
    assert!(matches!(err, PipelineError::Io { .. }));
}

// ---- pruner ----

#[test]
fn prune_tolerates_absent_drop_columns() {
    // Header without any of the drop-listed columns; pruning is a no-op
    // per missing column, never an error.
    let table = RawTable {
        columns: HEADER.split(',').map(str::to_owned).collect(),
        rows: vec![RawRecord {
            imdb_id: Some("tt000123".to_owned()),
            ..Default::default()
        }],
    };

    let rows = prune(table);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].imdb_id.as_deref(), Some("tt000123"));
}

#[test]
fn prune_keeps_analysis_fields() {
    let table = RawTable {
        columns: vec![],
        rows: vec![RawRecord {
            imdb_id: Some("tt000123".to_owned()),
            homepage: Some("http://example.com".to_owned()),
            tagline: Some("gone".to_owned()),
            budget: Some(1.0),
            revenue: Some(2.0),
            budget_adj: Some(3.0),
            revenue_adj: Some(4.0),
            ..Default::default()
        }],
    };

    let rows = prune(table);
    // The pruned type has no homepage/tagline/budget/revenue fields at
    // all; check the kept monetary columns survived.
    assert_eq!(rows[0].budget_adj, Some(3.0));
    assert_eq!(rows[0].revenue_adj, Some(4.0));
}

// ---- sanitizer ----

#[test]
fn drop_nulls_rejects_row_with_empty_budget_adj() {
    let mut incomplete = pruned("tt000124", "Drama");
    incomplete.budget_adj = None;
    let rows = vec![pruned("tt000123", "Comedy"), incomplete];

    let kept = drop_nulls(rows);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].imdb_id.as_deref(), Some("tt000123"));
}

#[test]
fn drop_duplicates_keeps_first_occurrence() {
    let rows = vec![
        pruned("tt000123", "Comedy"),
        pruned("tt000124", "Drama"),
        pruned("tt000123", "Comedy"),
    ];

    let kept = drop_duplicates(rows);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].imdb_id.as_deref(), Some("tt000123"));
    assert_eq!(kept[1].imdb_id.as_deref(), Some("tt000124"));
}

#[test]
fn duplicate_detection_is_full_row() {
    // Same imdb_id but a differing field is not a duplicate.
    let mut variant = pruned("tt000123", "Comedy");
    variant.vote_count = Some(101);
    let rows = vec![pruned("tt000123", "Comedy"), variant];

    assert_eq!(drop_duplicates(rows).len(), 2);
}

#[test]
fn sanitizer_passes_are_idempotent() {
    let mut incomplete = pruned("tt000125", "Drama");
    incomplete.director = None;
    let rows = vec![
        pruned("tt000123", "Comedy"),
        pruned("tt000123", "Comedy"),
        incomplete,
    ];

    let once = drop_duplicates(drop_nulls(rows));
    let twice = drop_duplicates(drop_nulls(once.clone()));
    assert_eq!(once, twice);
}

#[test]
fn sanitizer_never_grows_the_table() {
    let rows: Vec<PrunedRecord> = (0..10).map(|_| pruned("tt000123", "Comedy")).collect();
    let before = rows.len();
    let after = sanitize(rows);
    assert!(after.len() <= before);
    assert_eq!(after.len(), 1, "identical rows collapse to one");
}

// ---- profit deriver ----

#[test]
fn profit_is_exact_subtraction() {
    let clean = pruned("tt000123", "Comedy").into_complete().unwrap();
    let movies = derive_profit(vec![clean]);
    assert_eq!(movies[0].profit_adj, 2_500_000.0 - 1_000_000.0);
}

#[test]
fn negative_profit_is_preserved() {
    let movie = movie("tt000123", "Drama", 5_000_000.0, 1_000_000.0);
    assert_eq!(movie.profit_adj, -4_000_000.0);
}

// ---- genre explosion ----

#[test]
fn explode_count_equals_sum_of_tokens() -> Result<()> {
    let movies = vec![
        movie("tt1", "Action|Adventure|Science Fiction", 0.0, 1000.0),
        movie("tt2", "Drama", 0.0, 1.0),
        movie("tt3", "Comedy|Comedy", 0.0, 1.0), // repeated token is not deduplicated
    ];

    let rows = explode_genres(&movies)?;
    let expected: usize = movies.iter().map(|m| m.genres.split('|').count()).sum();
    assert_eq!(rows.len(), expected);
    assert_eq!(rows.len(), 6);
    Ok(())
}

#[test]
fn explode_without_pipe_yields_single_row() -> Result<()> {
    let movies = vec![movie("tt1", "Drama", 0.0, 10.0)];
    let rows = explode_genres(&movies)?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].genre, "Drama");
    Ok(())
}

#[test]
fn explode_preserves_token_order_and_profit() -> Result<()> {
    let movies = vec![movie("tt1", "Action|Adventure|Science Fiction", 0.0, 1000.0)];
    let rows = explode_genres(&movies)?;

    let genres: Vec<&str> = rows.iter().map(|r| r.genre.as_str()).collect();
    assert_eq!(genres, ["Action", "Adventure", "Science Fiction"]);
    assert!(rows.iter().all(|r| r.profit == 1000.0));
    Ok(())
}

#[test]
fn explode_fails_on_empty_genres_naming_row() {
    let mut bad = movie("tt2", "Drama", 0.0, 1.0);
    bad.genres = String::new();
    let movies = vec![movie("tt1", "Drama", 0.0, 1.0), bad];

    let err = explode_genres(&movies).unwrap_err();
    match err {
        PipelineError::MissingValue { row, column } => {
            assert_eq!(row, 1);
            assert_eq!(column, "genres");
        }
        other => panic!("expected MissingValue, got {other:?}"),
    }
}

#[test]
fn concrete_comedy_romance_scenario() -> Result<()> {
    let movie = movie("tt000123", "Comedy|Romance", 1_000_000.0, 2_500_000.0);
    assert_eq!(movie.profit_adj, 1_500_000.0);

    let rows = explode_genres(std::slice::from_ref(&movie))?;
    assert_eq!(
        rows,
        vec![
            GenreProfitRow {
                id: "tt000123".to_owned(),
                genre: "Comedy".to_owned(),
                profit: 1_500_000.0,
            },
            GenreProfitRow {
                id: "tt000123".to_owned(),
                genre: "Romance".to_owned(),
                profit: 1_500_000.0,
            },
        ]
    );
    Ok(())
}

// ---- report writer ----

#[test]
fn report_round_trips() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("genres_profit.csv");
    let rows = vec![
        GenreProfitRow {
            id: "tt000123".to_owned(),
            genre: "Comedy".to_owned(),
            profit: 1_500_000.0,
        },
        GenreProfitRow {
            id: "tt000124".to_owned(),
            genre: "Drama".to_owned(),
            profit: -42.5,
        },
    ];

    write_report(&rows, &path)?;
    assert_eq!(read_report(&path)?, rows);

    let text = std::fs::read_to_string(&path)?;
    assert!(text.starts_with("id,genre,profit\n"), "got: {text}");
    Ok(())
}

#[test]
fn report_quotes_embedded_delimiters() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("genres_profit.csv");
    let rows = vec![GenreProfitRow {
        id: "tt000123".to_owned(),
        genre: "Sci-Fi, sort of".to_owned(),
        profit: 1.0,
    }];

    write_report(&rows, &path)?;
    let text = std::fs::read_to_string(&path)?;
    assert!(text.contains("\"Sci-Fi, sort of\""), "got: {text}");
    assert_eq!(read_report(&path)?, rows);
    Ok(())
}

#[test]
fn report_fails_when_parent_directory_missing() {
    let err = write_report(&[], std::path::Path::new("/no/such/dir/out.csv")).unwrap_err();
    assert!(matches!(err, PipelineError::Io { .. }));
}

#[test]
fn report_overwrites_existing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("genres_profit.csv");
    std::fs::write(&path, "stale contents")?;

    let rows = vec![GenreProfitRow {
        id: "tt000123".to_owned(),
        genre: "Comedy".to_owned(),
        profit: 1.0,
    }];
    write_report(&rows, &path)?;

    assert_eq!(read_report(&path)?, rows);
    Ok(())
}
