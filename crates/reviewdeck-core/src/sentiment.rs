//! Sentiment labels and batch tallies.
//!
//! The classifier artifact emits integer class indices. The 0/1/2 encoding
//! is fixed at training time; anything outside it maps to [`SentimentLabel::Unknown`]
//! rather than falling through to a default string.

use std::fmt;

use serde::Serialize;

/// Sentiment class for a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
    /// The classifier produced an index outside the trained encoding.
    Unknown,
}

impl SentimentLabel {
    /// Map a raw class index to a label. Total: every `i64` has a result.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Self::Negative,
            1 => Self::Neutral,
            2 => Self::Positive,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-label tally across a batch of classified reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
    pub unknown: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.negative + self.neutral + self.positive + self.unknown
    }

    /// One-line summary like `3 positive, 1 negative`, skipping zero counts.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        for (count, label) in [
            (self.positive, SentimentLabel::Positive),
            (self.neutral, SentimentLabel::Neutral),
            (self.negative, SentimentLabel::Negative),
            (self.unknown, SentimentLabel::Unknown),
        ] {
            if count > 0 {
                parts.push(format!("{count} {label}"));
            }
        }
        if parts.is_empty() {
            "no reviews".to_string()
        } else {
            parts.join(", ")
        }
    }
}
