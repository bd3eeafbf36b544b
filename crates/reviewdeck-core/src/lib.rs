pub mod ranking;
pub mod sentiment;
pub mod training;

pub use ranking::{AppRecord, RankedApp, rank_apps};
pub use sentiment::{SentimentCounts, SentimentLabel};
pub use training::{TrainingError, TrainingSet};
