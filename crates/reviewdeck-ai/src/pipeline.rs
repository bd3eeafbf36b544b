//! The classification pipeline: normalize → vectorize → predict → label.

use std::path::Path;

use reviewdeck_core::{SentimentCounts, SentimentLabel};
use thiserror::Error;
use tracing::debug;

use crate::artifacts::{ArtifactError, ArtifactPair};
use crate::normalizer::Normalizer;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input text is empty")]
    EmptyInput,

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// One classified review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub text: String,
    pub label: SentimentLabel,
}

/// Batch output: one prediction per input line, in input order, plus the
/// aggregate tally.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub predictions: Vec<Prediction>,
    pub counts: SentimentCounts,
}

/// Sentiment classification over the pre-trained artifact pair.
///
/// Inference is a pure read of the loaded artifacts: identical input yields
/// an identical label for the lifetime of the process.
pub struct SentimentPipeline {
    normalizer: Normalizer,
    artifacts: ArtifactPair,
}

impl SentimentPipeline {
    /// Load the pipeline from a model directory containing
    /// `vectorizer.json` and `model.json`. Failure here disables the
    /// classification feature for the whole session.
    pub fn load(model_dir: &Path) -> Result<Self, ArtifactError> {
        let artifacts = ArtifactPair::load(
            &model_dir.join("vectorizer.json"),
            &model_dir.join("model.json"),
        )?;
        Ok(Self::new(Normalizer::new(), artifacts))
    }

    pub fn new(normalizer: Normalizer, artifacts: ArtifactPair) -> Self {
        Self {
            normalizer,
            artifacts,
        }
    }

    /// Classify a single review. Whitespace-only input is rejected before
    /// any artifact call.
    pub fn classify(&self, text: &str) -> Result<Prediction, PipelineError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let normalized = self.normalizer.normalize(text);
        let index = self.artifacts.predict_text(&normalized)?;
        let label = SentimentLabel::from_index(index);
        debug!(%label, index, "classified review");

        Ok(Prediction {
            text: text.to_string(),
            label,
        })
    }

    /// Classify each non-blank line of a multi-line input independently,
    /// preserving input order, and tally labels across the batch.
    pub fn classify_batch(&self, input: &str) -> Result<BatchResult, PipelineError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let mut predictions = Vec::with_capacity(lines.len());
        let mut counts = SentimentCounts::default();
        for line in lines {
            let prediction = self.classify(line)?;
            counts.record(prediction.label);
            predictions.push(prediction);
        }

        Ok(BatchResult {
            predictions,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{LinearClassifier, Vectorizer};
    use std::collections::HashMap;

    /// Tiny hand-built pair: "good"/"love" drive Positive, "bad"/"lost"
    /// drive Negative, "okay" drives Neutral.
    fn pipeline() -> SentimentPipeline {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("good".to_string(), 0);
        vocabulary.insert("love".to_string(), 0);
        vocabulary.insert("bad".to_string(), 1);
        vocabulary.insert("lost".to_string(), 1);
        vocabulary.insert("okay".to_string(), 2);

        let vectorizer = Vectorizer {
            vocabulary,
            idf: vec![1.0, 1.0, 1.0],
        };
        let classifier = LinearClassifier {
            weights: vec![
                vec![0.0, 1.0, 0.0], // class 0: negative
                vec![0.0, 0.0, 1.0], // class 1: neutral
                vec![1.0, 0.0, 0.0], // class 2: positive
            ],
            intercepts: vec![0.0, 0.0, 0.0],
        };
        SentimentPipeline::new(
            Normalizer::new(),
            ArtifactPair::new_unchecked(vectorizer, classifier),
        )
    }

    #[test]
    fn classifies_single_review() {
        let p = pipeline();
        let prediction = p.classify("I love this good app").unwrap();
        assert_eq!(prediction.label, SentimentLabel::Positive);
        assert_eq!(prediction.text, "I love this good app");
    }

    #[test]
    fn deterministic_for_identical_input() {
        let p = pipeline();
        let a = p.classify("lost my money, bad service").unwrap();
        let b = p.classify("lost my money, bad service").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_input() {
        let p = pipeline();
        assert!(matches!(p.classify(""), Err(PipelineError::EmptyInput)));
        assert!(matches!(
            p.classify("   \t "),
            Err(PipelineError::EmptyInput)
        ));
    }

    #[test]
    fn batch_preserves_input_order() {
        let p = pipeline();
        let result = p.classify_batch("good service\nlost my money").unwrap();
        assert_eq!(result.predictions.len(), 2);
        assert_eq!(result.predictions[0].text, "good service");
        assert_eq!(result.predictions[0].label, SentimentLabel::Positive);
        assert_eq!(result.predictions[1].text, "lost my money");
        assert_eq!(result.predictions[1].label, SentimentLabel::Negative);
    }

    #[test]
    fn batch_discards_blank_lines_and_counts() {
        let p = pipeline();
        let result = p
            .classify_batch("good app\n\n   \nlove it\nbad update\n")
            .unwrap();
        assert_eq!(result.predictions.len(), 3);
        assert_eq!(result.counts.positive, 2);
        assert_eq!(result.counts.negative, 1);
        assert_eq!(result.counts.total(), 3);
    }

    #[test]
    fn batch_of_only_blank_lines_is_empty_input() {
        let p = pipeline();
        assert!(matches!(
            p.classify_batch("\n \n\t\n"),
            Err(PipelineError::EmptyInput)
        ));
    }

    #[test]
    fn out_of_vocabulary_maps_through_label_enum() {
        // All-zero features → argmax picks class 0 → Negative, not a panic.
        let p = pipeline();
        let prediction = p.classify("entirely unseen words").unwrap();
        assert_eq!(prediction.label, SentimentLabel::Negative);
    }

    #[test]
    fn unexpected_class_index_maps_to_unknown() {
        // A 4-class model can emit index 3, outside the trained encoding.
        let mut vocabulary = HashMap::new();
        vocabulary.insert("weird".to_string(), 0);
        let vectorizer = Vectorizer {
            vocabulary,
            idf: vec![1.0],
        };
        let classifier = LinearClassifier {
            weights: vec![vec![-1.0], vec![-1.0], vec![-1.0], vec![1.0]],
            intercepts: vec![0.0, 0.0, 0.0, 0.0],
        };
        let p = SentimentPipeline::new(
            Normalizer::new(),
            ArtifactPair::new_unchecked(vectorizer, classifier),
        );

        let prediction = p.classify("weird").unwrap();
        assert_eq!(prediction.label, SentimentLabel::Unknown);
    }
}
