//! Training-dataset loading for the display view.
//!
//! The model ships with the CSV it was trained on; the dashboard only reads
//! it back for inspection (row table + sentiment histogram). Errors here are
//! display-level: they must never disturb classification or ranking.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Header of the free-text review column.
pub const REVIEW_COLUMN: &str = "ulasan";
/// Header of the sentiment label column.
pub const SENTIMENT_COLUMN: &str = "sentimen";

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("training data file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("reading training data: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing training data: {0}")]
    Csv(#[from] csv::Error),

    #[error("training data is missing the '{0}' column")]
    MissingColumn(&'static str),
}

/// One labelled review from the training CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRow {
    pub review: String,
    pub sentiment: String,
}

/// The loaded training dataset.
#[derive(Debug)]
pub struct TrainingSet {
    rows: Vec<TrainingRow>,
}

impl TrainingSet {
    /// Load the training CSV from disk.
    pub fn load(path: &Path) -> Result<Self, TrainingError> {
        if !path.exists() {
            return Err(TrainingError::FileNotFound(path.to_path_buf()));
        }
        let set = Self::from_reader(File::open(path)?)?;
        info!(rows = set.len(), path = %path.display(), "loaded training data");
        Ok(set)
    }

    /// Parse CSV content with a header row. Requires the `ulasan` and
    /// `sentimen` columns; other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TrainingError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let review_idx = headers
            .iter()
            .position(|h| h == REVIEW_COLUMN)
            .ok_or(TrainingError::MissingColumn(REVIEW_COLUMN))?;
        let sentiment_idx = headers
            .iter()
            .position(|h| h == SENTIMENT_COLUMN)
            .ok_or(TrainingError::MissingColumn(SENTIMENT_COLUMN))?;

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let review = record.get(review_idx).unwrap_or_default();
            let sentiment = record.get(sentiment_idx).unwrap_or_default();
            rows.push(TrainingRow {
                review: review.to_string(),
                sentiment: sentiment.to_string(),
            });
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[TrainingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Label counts, descending by count, ties broken alphabetically.
    pub fn distribution(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in &self.rows {
            *counts.entry(row.sentiment.as_str()).or_insert(0) += 1;
        }

        let mut distribution: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        distribution
    }
}
