mod presenter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataFiles, Dataset, RatingScale};
use pipeline::RecommendationAggregator;
use presenter::PresenterConfig;
use similarity::{SimilarityEngine, DEFAULT_CRITIC_COUNT};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// CriticRecs - recommend unwatched movies from like-minded critics
#[derive(Parser)]
#[command(name = "critic-recs")]
#[command(about = "Recommends movies using the critics whose ratings are closest to yours", long_about = None)]
struct Cli {
    /// Directory holding the three data files
    #[arg(short, long, default_value = "data-tiny")]
    data_dir: PathBuf,

    /// Movie catalog file name (ISO-8859-1 CSV)
    #[arg(long, default_value = "tinyIMDB.csv")]
    movies: String,

    /// Critic ratings file name
    #[arg(long, default_value = "tinyratings.csv")]
    critics: String,

    /// Personal ratings file name
    #[arg(long, default_value = "tinyp.csv")]
    person: String,

    /// Lowest legal rating (0 is a real rating, distinct from a blank cell)
    #[arg(long, default_value_t = 0.0)]
    rating_min: f64,

    /// Highest legal rating
    #[arg(long, default_value_t = 10.0)]
    rating_max: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the closest critics and the recommended movies (default)
    Recommend {
        /// Print the recommendations as JSON instead of a listing
        #[arg(long)]
        json: bool,

        /// Columns added to the longest title when aligning the listing
        #[arg(long, default_value_t = 5)]
        title_padding: usize,
    },

    /// Rank every critic by distance to the person
    Critics {
        /// Number of critics to mark as selected
        #[arg(long, default_value_t = DEFAULT_CRITIC_COUNT)]
        count: usize,

        /// Print the ranking as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the listing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let files = DataFiles::new(&cli.data_dir, cli.movies, cli.critics, cli.person);
    let scale = RatingScale::new(cli.rating_min, cli.rating_max);

    let start = Instant::now();
    let dataset = Dataset::load_from_files(&files, scale)
        .with_context(|| format!("Failed to load dataset from {}", cli.data_dir.display()))?;
    info!("Loaded dataset in {:?}", start.elapsed());

    match cli.command.unwrap_or(Commands::Recommend {
        json: false,
        title_padding: PresenterConfig::default().title_padding,
    }) {
        Commands::Recommend {
            json,
            title_padding,
        } => handle_recommend(&dataset, json, PresenterConfig { title_padding })?,
        Commands::Critics { count, json } => handle_critics(&dataset, count, json)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(dataset: &Dataset, json: bool, config: PresenterConfig) -> Result<()> {
    let selected = SimilarityEngine::new()
        .select_closest_critics(&dataset.critics, &dataset.person)
        .context("Failed to select closest critics")?;

    let records = RecommendationAggregator::new()
        .recommend(&dataset.critics, &selected, &dataset.person, &dataset.catalog)
        .context("Failed to build recommendations")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("\nThe following critics had reviews closest to the person's:");
    println!("{}", presenter::format_critics(&selected).green());
    println!();

    println!(
        "{}",
        format!("Recommendations for {}:", dataset.person.name()).bold().blue()
    );
    if records.is_empty() {
        println!("No recommendations.");
    }
    for line in presenter::format_recommendations(&records, config) {
        println!("{}", line);
    }
    Ok(())
}

/// Handle the 'critics' command
fn handle_critics(dataset: &Dataset, count: usize, json: bool) -> Result<()> {
    let engine = SimilarityEngine::new().with_critic_count(count);
    // Fail the same way 'recommend' would for too few critics
    engine
        .select_closest_critics(&dataset.critics, &dataset.person)
        .context("Failed to select closest critics")?;

    let ranked = engine.rank(&dataset.critics, &dataset.person);
    if json {
        println!("{}", presenter::ranking_json(&ranked)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Critics ranked by distance to {}:", dataset.person.name()).bold().blue()
    );
    for line in presenter::format_ranking(&ranked, count) {
        println!("{}", line);
    }
    Ok(())
}
