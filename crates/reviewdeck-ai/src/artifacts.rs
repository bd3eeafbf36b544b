//! Pre-trained model artifacts: tf-idf vectorizer and linear classifier.
//!
//! Both are exported at training time as JSON (`vectorizer.json`,
//! `model.json`) and loaded read-only at startup. The two are trained as a
//! pair; the load path enforces that their dimensions agree so a swapped
//! artifact fails immediately instead of producing garbage predictions.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact file not found: {0}")]
    NotFound(PathBuf),

    #[error("reading artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing artifact {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("artifact {path} is inconsistent: {reason}")]
    Inconsistent { path: PathBuf, reason: String },

    #[error(
        "vectorizer produces {vectorizer}-dimensional vectors but the classifier expects {classifier}"
    )]
    DimensionMismatch { vectorizer: usize, classifier: usize },
}

/// Tf-idf vectorizer fitted on normalized review text.
///
/// `vocabulary` maps a term to its feature column; `idf` holds one inverse
/// document frequency per column. Out-of-vocabulary terms contribute
/// nothing, matching inference over a frozen vocabulary.
#[derive(Debug, Deserialize)]
pub struct Vectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
}

impl Vectorizer {
    /// Feature-vector dimensionality.
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Transform normalized text into a tf-idf feature vector
    /// (term counts × idf, L2-normalized).
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut features = vec![0.0f32; self.dim()];
        for token in text.split_whitespace() {
            if let Some(&column) = self.vocabulary.get(token)
                && column < features.len()
            {
                features[column] += 1.0;
            }
        }

        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        normalize(&mut features);
        features
    }
}

/// One-vs-rest linear classifier (SVM weights exported at training time).
///
/// One weight row and intercept per class; the predicted class index is the
/// argmax of the decision values. A single-row model is a binary classifier
/// predicting class 1 on a positive decision value.
#[derive(Debug, Deserialize)]
pub struct LinearClassifier {
    pub weights: Vec<Vec<f32>>,
    pub intercepts: Vec<f32>,
}

impl LinearClassifier {
    /// Expected feature-vector dimensionality.
    pub fn dim(&self) -> usize {
        self.weights.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn num_classes(&self) -> usize {
        if self.weights.len() == 1 { 2 } else { self.weights.len() }
    }

    /// Predict a class index for a feature vector. A vector of the wrong
    /// dimension is a surfaced error, never silently truncated or padded.
    pub fn predict(&self, features: &[f32]) -> Result<i64, ArtifactError> {
        if features.len() != self.dim() {
            return Err(ArtifactError::DimensionMismatch {
                vectorizer: features.len(),
                classifier: self.dim(),
            });
        }

        if self.weights.len() == 1 {
            let decision = dot(&self.weights[0], features) + self.intercepts[0];
            return Ok(if decision > 0.0 { 1 } else { 0 });
        }

        let mut best_class = 0i64;
        let mut best_decision = f32::NEG_INFINITY;
        for (class, (row, intercept)) in self.weights.iter().zip(&self.intercepts).enumerate() {
            let decision = dot(row, features) + intercept;
            if decision > best_decision {
                best_decision = decision;
                best_class = class as i64;
            }
        }
        Ok(best_class)
    }

    fn validate(&self, path: &Path) -> Result<(), ArtifactError> {
        if self.weights.is_empty() {
            return Err(ArtifactError::Inconsistent {
                path: path.to_path_buf(),
                reason: "no weight rows".to_string(),
            });
        }
        if self.intercepts.len() != self.weights.len() {
            return Err(ArtifactError::Inconsistent {
                path: path.to_path_buf(),
                reason: format!(
                    "{} weight rows but {} intercepts",
                    self.weights.len(),
                    self.intercepts.len()
                ),
            });
        }
        let dim = self.dim();
        if self.weights.iter().any(|row| row.len() != dim) {
            return Err(ArtifactError::Inconsistent {
                path: path.to_path_buf(),
                reason: "weight rows have differing lengths".to_string(),
            });
        }
        Ok(())
    }
}

/// The vectorizer/classifier pair, loaded together and dimension-checked.
#[derive(Debug)]
pub struct ArtifactPair {
    vectorizer: Vectorizer,
    classifier: LinearClassifier,
}

impl ArtifactPair {
    /// Load both artifacts and verify they were trained together
    /// (vectorizer output dimension == classifier input dimension).
    pub fn load(vectorizer_path: &Path, model_path: &Path) -> Result<Self, ArtifactError> {
        let vectorizer: Vectorizer = load_json(vectorizer_path)?;
        let classifier: LinearClassifier = load_json(model_path)?;
        classifier.validate(model_path)?;

        if vectorizer.dim() != classifier.dim() {
            return Err(ArtifactError::DimensionMismatch {
                vectorizer: vectorizer.dim(),
                classifier: classifier.dim(),
            });
        }

        info!(
            dim = vectorizer.dim(),
            classes = classifier.num_classes(),
            vocabulary = vectorizer.vocabulary.len(),
            "loaded sentiment artifacts"
        );
        Ok(Self::new_unchecked(vectorizer, classifier))
    }

    /// Pair pre-built artifacts without the dimension check. Callers must
    /// guarantee the pairing themselves; [`ArtifactPair::load`] is the
    /// normal entry point.
    pub fn new_unchecked(vectorizer: Vectorizer, classifier: LinearClassifier) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    pub fn dim(&self) -> usize {
        self.vectorizer.dim()
    }

    /// Vectorize normalized text and predict its class index.
    pub fn predict_text(&self, normalized: &str) -> Result<i64, ArtifactError> {
        let features = self.vectorizer.transform(normalized);
        self.classifier.predict(&features)
    }
}

fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// L2-normalize a vector in place.
fn normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
