//! Inference layer: review-text normalization and classification against the
//! pre-trained vectorizer/classifier artifact pair.

mod artifacts;
mod normalizer;
mod pipeline;

pub use artifacts::{ArtifactError, ArtifactPair, LinearClassifier, Vectorizer};
pub use normalizer::Normalizer;
pub use pipeline::{BatchResult, PipelineError, Prediction, SentimentPipeline};
