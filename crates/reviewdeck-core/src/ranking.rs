//! Ranking aggregation for fetched app-directory records.
//!
//! Records missing a store score are excluded before ranking. The remainder
//! sort by score descending, then rating count descending; exact ties keep
//! fetch order (stable sort). Rank is the 1-based position in that order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// App metadata as returned by the directory. Fields the directory may omit
/// are optional; a record without a score never enters the ranked table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    pub app_id: String,
    pub title: String,
    pub score: Option<f64>,
    pub ratings: Option<u64>,
    pub installs: Option<String>,
    pub developer: Option<String>,
}

/// An [`AppRecord`] with its final 1-based rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedApp {
    pub rank: usize,
    pub record: AppRecord,
}

/// Rank fetched records: drop score-less entries, sort by score then rating
/// count (both descending), assign 1-based ranks.
pub fn rank_apps(records: Vec<AppRecord>) -> Vec<RankedApp> {
    let mut scored: Vec<AppRecord> = records
        .into_iter()
        .filter(|r| r.score.is_some())
        .collect();

    scored.sort_by(|a, b| {
        // score.is_some() guaranteed by the filter above.
        let by_score = b
            .score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal);
        by_score.then_with(|| b.ratings.unwrap_or(0).cmp(&a.ratings.unwrap_or(0)))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedApp {
            rank: i + 1,
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(app_id: &str, score: Option<f64>, ratings: Option<u64>) -> AppRecord {
        AppRecord {
            app_id: app_id.to_string(),
            title: app_id.to_uppercase(),
            score,
            ratings,
            installs: Some("1,000,000+".to_string()),
            developer: Some("dev".to_string()),
        }
    }

    #[test]
    fn sorts_by_score_then_ratings() {
        let ranked = rank_apps(vec![
            record("a", Some(4.5), Some(100)),
            record("b", Some(4.8), Some(50)),
            record("c", Some(4.8), Some(200)),
        ]);

        let order: Vec<&str> = ranked.iter().map(|r| r.record.app_id.as_str()).collect();
        assert_eq!(order, ["c", "b", "a"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn excludes_records_without_score() {
        let ranked = rank_apps(vec![
            record("a", Some(4.0), Some(10)),
            record("b", None, Some(9_999_999)),
        ]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].record.app_id, "a");
    }

    #[test]
    fn exact_ties_keep_fetch_order() {
        let ranked = rank_apps(vec![
            record("first", Some(4.2), Some(10)),
            record("second", Some(4.2), Some(10)),
        ]);
        let order: Vec<&str> = ranked.iter().map(|r| r.record.app_id.as_str()).collect();
        assert_eq!(order, ["first", "second"]);
    }

    #[test]
    fn missing_ratings_sort_last_within_score_tie() {
        let ranked = rank_apps(vec![
            record("no_ratings", Some(4.2), None),
            record("rated", Some(4.2), Some(1)),
        ]);
        let order: Vec<&str> = ranked.iter().map(|r| r.record.app_id.as_str()).collect();
        assert_eq!(order, ["rated", "no_ratings"]);
    }

    #[test]
    fn empty_input_empty_table() {
        assert!(rank_apps(vec![]).is_empty());
    }

    #[test]
    fn all_scoreless_empty_table() {
        let ranked = rank_apps(vec![record("a", None, None), record("b", None, Some(5))]);
        assert!(ranked.is_empty());
    }
}
