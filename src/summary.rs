//! Descriptive statistics over the cleaned table.
//!
//! The numbers behind the report's five questions: which genres earn,
//! whether ratings track profit, typical runtime, typical budget, and
//! the release trend by year. Chart rendering stays out of this crate;
//! these functions only produce the aggregates.

use std::collections::{BTreeMap, HashMap};

use crate::pipeline::{GenreProfitRow, MovieRecord};

/// Mean adjusted profit for one genre.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreMeanProfit {
    pub genre: String,
    pub mean_profit: f64,
    /// Number of genre rows contributing. A movie with several genres
    /// counts once per genre, by design: splitting beats handpicking a
    /// single genre per film.
    pub movies: usize,
}

/// Mean profit per genre, sorted from most to least profitable.
/// Ties break on genre name so the output is deterministic.
pub fn mean_profit_by_genre(rows: &[GenreProfitRow]) -> Vec<GenreMeanProfit> {
    let mut acc: HashMap<&str, (f64, usize)> = HashMap::new();
    for row in rows {
        let entry = acc.entry(&row.genre).or_insert((0.0, 0));
        entry.0 += row.profit;
        entry.1 += 1;
    }

    let mut out: Vec<GenreMeanProfit> = acc
        .into_iter()
        .map(|(genre, (sum, count))| GenreMeanProfit {
            genre: genre.to_owned(),
            mean_profit: sum / count as f64,
            movies: count,
        })
        .collect();
    out.sort_by(|a, b| {
        b.mean_profit
            .total_cmp(&a.mean_profit)
            .then_with(|| a.genre.cmp(&b.genre))
    });
    out
}

/// Pearson correlation between the viewer rating and the adjusted
/// profit. `None` with fewer than two records or when either side has
/// zero variance.
pub fn rating_profit_correlation(movies: &[MovieRecord]) -> Option<f64> {
    pearson(
        movies.iter().map(|m| m.vote_average),
        movies.iter().map(|m| m.profit_adj),
        movies.len(),
    )
}

fn pearson(
    xs: impl Iterator<Item = f64>,
    ys: impl Iterator<Item = f64>,
    n: usize,
) -> Option<f64> {
    if n < 2 {
        return None;
    }
    let n_f = n as f64;

    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_yy, mut sum_xy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (x, y) in xs.zip(ys) {
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_yy += y * y;
        sum_xy += x * y;
    }

    let cov = sum_xy - sum_x * sum_y / n_f;
    let var_x = sum_xx - sum_x * sum_x / n_f;
    let var_y = sum_yy - sum_y * sum_y / n_f;
    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}

/// Bin edges for the runtime histogram, in minutes.
pub const RUNTIME_BIN_EDGES: [u32; 10] = [0, 40, 80, 120, 160, 200, 240, 280, 320, 360];

/// One histogram bucket, half-open `[lower, upper)`; the last bucket is
/// closed at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBin {
    pub lower: u32,
    pub upper: u32,
    pub count: usize,
}

/// Runtime counts over the fixed 40-minute bins. Runtimes above the last
/// edge are not counted.
pub fn runtime_distribution(movies: &[MovieRecord]) -> Vec<HistogramBin> {
    let mut bins: Vec<HistogramBin> = RUNTIME_BIN_EDGES
        .windows(2)
        .map(|w| HistogramBin {
            lower: w[0],
            upper: w[1],
            count: 0,
        })
        .collect();

    for movie in movies {
        let runtime = movie.runtime;
        for bin in &mut bins {
            let last = bin.upper == RUNTIME_BIN_EDGES[RUNTIME_BIN_EDGES.len() - 1];
            if runtime >= bin.lower && (runtime < bin.upper || (last && runtime == bin.upper)) {
                bin.count += 1;
                break;
            }
        }
    }
    bins
}

/// Basic spread of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Spread of the inflation-adjusted budget. `None` on an empty table.
pub fn budget_summary(movies: &[MovieRecord]) -> Option<NumericSummary> {
    if movies.is_empty() {
        return None;
    }

    let mut values: Vec<f64> = movies.iter().map(|m| m.budget_adj).collect();
    values.sort_by(f64::total_cmp);

    let min = values[0];
    let max = values[values.len() - 1];
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };

    Some(NumericSummary {
        min,
        max,
        mean,
        median,
    })
}

/// Number of releases per year, ascending by year.
pub fn releases_by_year(movies: &[MovieRecord]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for movie in movies {
        *counts.entry(movie.release_year).or_insert(0) += 1;
    }
    counts
}
