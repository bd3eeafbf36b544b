//! Review-text normalization ahead of vectorization.
//!
//! The stopword set and stemmer are built once and shared by reference; the
//! vectorizer artifact was fitted on text cleaned exactly this way, so the
//! step order (lowercase, strip, stopwords, stem) must not change.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};

/// Common words carrying little sentiment signal, removed before stemming.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further",
    "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "me", "more", "most", "my", "myself", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Normalizes raw review text into the form the vectorizer was trained on.
pub struct Normalizer {
    stopwords: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl Normalizer {
    /// Default normalizer: English Snowball stemmer plus the built-in
    /// stopword list.
    pub fn new() -> Self {
        Self::with_algorithm(Algorithm::English)
    }

    /// Normalizer for a specific Snowball algorithm. One language per
    /// process; the stopword list is shared across algorithms.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
            stemmer: Stemmer::create(algorithm),
        }
    }

    /// Clean review text: lowercase, keep ASCII letters and whitespace only,
    /// drop stopwords, stem the rest. Returns an empty string when nothing
    /// survives.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_lowercase_letters_and_spaces() {
        let normalizer = Normalizer::new();
        let inputs = [
            "Great App!!! 10/10 would recommend 👍",
            "LOST my money... $500 GONE",
            "",
            "12345 !!! ???",
        ];
        for input in inputs {
            let out = normalizer.normalize(input);
            assert!(
                out.chars().all(|c| c.is_ascii_lowercase() || c == ' '),
                "unexpected character in {out:?}"
            );
        }
    }

    #[test]
    fn strips_digits_and_punctuation() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("crash3d! again?!"), "crashd");
    }

    #[test]
    fn removes_stopwords() {
        let normalizer = Normalizer::new();
        let out = normalizer.normalize("this is the best app");
        assert!(!out.contains("this"));
        assert!(!out.contains("the"));
        assert!(out.contains("best"));
    }

    #[test]
    fn stems_tokens() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("running quickly"), "run quick");
    }

    #[test]
    fn all_content_removed_yields_empty() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("it is the of and 123 !!!"), "");
    }

    #[test]
    fn deterministic() {
        let normalizer = Normalizer::new();
        let text = "Transfers keep FAILING, money stuck for days...";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }
}
