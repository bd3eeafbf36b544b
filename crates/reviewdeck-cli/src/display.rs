//! Terminal rendering for the three views: per-review sentiment table,
//! ranked-app table, and training-data histogram.

use reviewdeck_ai::BatchResult;
use reviewdeck_core::TrainingSet;
use reviewdeck_play::RankingSnapshot;

const BAR_WIDTH: usize = 40;
const MAX_SAMPLE_ROWS: usize = 10;
const MAX_REVIEW_CHARS: usize = 70;

/// Print one line per classified review plus the aggregate summary.
pub fn print_analysis(result: &BatchResult) {
    println!("{:<10} review", "sentiment");
    for prediction in &result.predictions {
        println!("{:<10} {}", prediction.label, truncate(&prediction.text));
    }
    println!();
    println!("Result: {}", result.counts.summary());
}

/// Print the ranked-app table with its fetch timestamp.
pub fn print_rankings(snapshot: &RankingSnapshot) {
    println!(
        "Store rankings (fetched {})",
        snapshot.fetched_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "{:<5} {:<28} {:>6} {:>10} {:>14} {}",
        "rank", "title", "score", "ratings", "installs", "developer"
    );
    for app in &snapshot.apps {
        let record = &app.record;
        println!(
            "{:<5} {:<28} {:>6} {:>10} {:>14} {}",
            app.rank,
            record.title,
            record
                .score
                .map(|s| format!("{s:.1}"))
                .unwrap_or_default(),
            record
                .ratings
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
            record.installs.as_deref().unwrap_or("-"),
            record.developer.as_deref().unwrap_or("-"),
        );
    }
}

/// Print dataset size, a sample of rows, and the label histogram.
pub fn print_training(set: &TrainingSet) {
    println!("Training dataset: {} rows", set.len());
    println!();

    let show = set.rows().len().min(MAX_SAMPLE_ROWS);
    println!("{:<10} review", "sentiment");
    for row in &set.rows()[..show] {
        println!("{:<10} {}", row.sentiment, truncate(&row.review));
    }
    if set.len() > show {
        println!("... and {} more", set.len() - show);
    }
    println!();

    println!("Sentiment distribution");
    let distribution = set.distribution();
    let max = distribution.first().map(|(_, count)| *count).unwrap_or(0);
    for (label, count) in &distribution {
        let width = if max == 0 {
            0
        } else {
            (count * BAR_WIDTH / max).max(1)
        };
        println!("  {:<10} {:>5}  {}", label, count, "#".repeat(width));
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_REVIEW_CHARS {
        let cut: String = text.chars().take(MAX_REVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
