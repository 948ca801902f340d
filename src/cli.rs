use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tmdb_insights::pipeline;
use tmdb_insights::summary;

#[derive(Parser)]
#[command(
    name = "tmdb-insights",
    about = "Cleaning and reshaping pipeline for the TMDb movie dataset"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean the dataset and write the exploded genre/profit file
    Run {
        /// Path to the raw TMDb CSV export
        #[arg(short, long)]
        input: PathBuf,

        /// Destination for the genre/profit CSV (overwritten if present)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print descriptive statistics for the cleaned dataset
    Summary {
        /// Path to the raw TMDb CSV export
        #[arg(short, long)]
        input: PathBuf,

        /// Show only the N most profitable genres
        #[arg(long)]
        top: Option<usize>,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Run { input, output } => handle_run(&input, &output),
        Commands::Summary { input, top } => handle_summary(&input, top),
    }
}

fn handle_run(input: &std::path::Path, output: &std::path::Path) -> Result<()> {
    let stats = pipeline::run(input, output)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    println!(
        "{} rows loaded, {} after cleaning, {} genre rows written to {}",
        stats.loaded,
        stats.cleaned,
        stats.exploded,
        output.display()
    );
    Ok(())
}

fn handle_summary(input: &std::path::Path, top: Option<usize>) -> Result<()> {
    let movies = pipeline::clean_movies(input)
        .with_context(|| format!("Failed to process {}", input.display()))?;
    let genre_rows = pipeline::explode_genres(&movies)?;

    println!("Cleaned table: {} movies\n", movies.len());

    println!("Mean profit by genre (2010-adjusted USD):");
    let means = summary::mean_profit_by_genre(&genre_rows);
    let shown = top.unwrap_or(means.len());
    for entry in means.iter().take(shown) {
        println!(
            "  {:<20} {:>16.0}  ({} movies)",
            entry.genre, entry.mean_profit, entry.movies
        );
    }

    match summary::rating_profit_correlation(&movies) {
        Some(r) => println!("\nRating vs profit correlation: {r:.3}"),
        None => println!("\nRating vs profit correlation: undefined"),
    }

    println!("\nRuntime distribution (minutes):");
    for bin in summary::runtime_distribution(&movies) {
        println!("  {:>3}-{:<3} {:>6}", bin.lower, bin.upper, bin.count);
    }

    if let Some(budget) = summary::budget_summary(&movies) {
        println!(
            "\nBudget (2010-adjusted USD): min {:.0}, median {:.0}, mean {:.0}, max {:.0}",
            budget.min, budget.median, budget.mean, budget.max
        );
    }

    println!("\nReleases by year:");
    for (year, count) in summary::releases_by_year(&movies) {
        println!("  {year} {count:>5}");
    }

    Ok(())
}
