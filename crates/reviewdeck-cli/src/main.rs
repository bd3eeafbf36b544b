//! Reviewdeck CLI: review-sentiment analysis, store rankings, and
//! training-data inspection.

mod display;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use reviewdeck_ai::{PipelineError, SentimentPipeline};
use reviewdeck_core::{TrainingError, TrainingSet};
use reviewdeck_play::{PlayClient, RankingFetcher, default_watchlist};

#[derive(Parser)]
#[command(
    name = "reviewdeck",
    version,
    about = "App-review sentiment analysis and store-ranking dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify review text, one review per line (argument or stdin).
    Analyze {
        /// Review text; reads stdin when omitted.
        text: Option<String>,

        /// Directory containing vectorizer.json and model.json.
        #[arg(long, env = "REVIEWDECK_MODEL_DIR", default_value = "models/sentiment")]
        model_dir: PathBuf,
    },

    /// Rank the watched apps by their current store rating.
    Rankings {
        /// Base URL of the app-directory API.
        #[arg(long, env = "REVIEWDECK_DIRECTORY_URL")]
        directory_url: String,

        #[arg(long, default_value = "id")]
        lang: String,

        #[arg(long, default_value = "id")]
        country: String,

        /// Ranking cache lifetime in seconds.
        #[arg(long, default_value_t = 3600)]
        ttl_secs: u64,
    },

    /// Show the training dataset and its sentiment distribution.
    Training {
        #[arg(
            long,
            env = "REVIEWDECK_TRAINING_CSV",
            default_value = "data/training_reviews.csv"
        )]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { text, model_dir } => analyze(text, &model_dir),
        Command::Rankings {
            directory_url,
            lang,
            country,
            ttl_secs,
        } => rankings(directory_url, lang, country, ttl_secs).await,
        Command::Training { file } => training(&file),
    }
}

fn analyze(text: Option<String>, model_dir: &Path) -> anyhow::Result<()> {
    // Artifact failure is fatal for this subcommand only; the other views
    // never touch the model.
    let pipeline = SentimentPipeline::load(model_dir).with_context(|| {
        format!(
            "loading sentiment artifacts from {} (set --model-dir or REVIEWDECK_MODEL_DIR)",
            model_dir.display()
        )
    })?;

    let input = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading review text from stdin")?;
            buffer
        }
    };

    match pipeline.classify_batch(&input) {
        Ok(result) => {
            display::print_analysis(&result);
            Ok(())
        }
        Err(PipelineError::EmptyInput) => {
            eprintln!("No review text given. Enter at least one non-empty line.");
            Ok(())
        }
        Err(e) => Err(e).context("classifying reviews"),
    }
}

async fn rankings(
    directory_url: String,
    lang: String,
    country: String,
    ttl_secs: u64,
) -> anyhow::Result<()> {
    let client = PlayClient::new(directory_url, lang, country);
    let fetcher = RankingFetcher::new(client, default_watchlist())
        .with_ttl(Duration::from_secs(ttl_secs));

    let snapshot = fetcher.rankings().await;
    if snapshot.apps.is_empty() {
        println!("Ranking data is currently unavailable: no watched app could be fetched.");
    } else {
        display::print_rankings(&snapshot);
    }
    Ok(())
}

fn training(file: &Path) -> anyhow::Result<()> {
    match TrainingSet::load(file) {
        Ok(set) => {
            display::print_training(&set);
            Ok(())
        }
        // Display-level problems get a message, not a failure.
        Err(e @ (TrainingError::FileNotFound(_) | TrainingError::MissingColumn(_))) => {
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e).context("reading training data"),
    }
}
