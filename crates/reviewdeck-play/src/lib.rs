//! App-directory access: per-app metadata queries and the cached ranking
//! fetch that feeds the rankings view.

mod client;
mod rankings;

pub use client::{PlayClient, PlayError};
pub use rankings::{
    AppListing, AppSource, DEFAULT_TTL, RankingFetcher, RankingSnapshot, default_watchlist,
};
