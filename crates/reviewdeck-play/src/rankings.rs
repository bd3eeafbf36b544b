//! Ranked-app fetching over a fixed watchlist, with a single-entry TTL cache.
//!
//! Apps are queried sequentially; one failed query drops that app from the
//! table and never aborts the fetch. An all-failed fetch yields an empty
//! table, which callers render as "unavailable" rather than an error.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reviewdeck_core::{AppRecord, RankedApp, rank_apps};
use tracing::{info, warn};

use crate::client::{PlayClient, PlayError};

/// How long a fetched ranking table stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Anything that can answer a per-app metadata query. [`PlayClient`] in
/// production; an in-memory fake in tests.
#[async_trait]
pub trait AppSource: Send + Sync {
    async fn app_details(&self, app_id: &str) -> Result<AppRecord, PlayError>;
}

#[async_trait]
impl AppSource for PlayClient {
    async fn app_details(&self, app_id: &str) -> Result<AppRecord, PlayError> {
        PlayClient::app_details(self, app_id).await
    }
}

/// One watched app: display name plus store identifier.
#[derive(Debug, Clone)]
pub struct AppListing {
    pub name: String,
    pub store_id: String,
}

impl AppListing {
    pub fn new(name: &str, store_id: &str) -> Self {
        Self {
            name: name.to_string(),
            store_id: store_id.to_string(),
        }
    }
}

/// The fixed set of digital-banking apps the dashboard tracks.
pub fn default_watchlist() -> Vec<AppListing> {
    vec![
        AppListing::new("Jenius (BTPN)", "com.btpn.dc"),
        AppListing::new("blu by BCA Digital", "com.bcadigital.blu"),
        AppListing::new("SeaBank", "id.co.bankbkemobile.digitalbank"),
        AppListing::new("NeoBank", "com.bnc.finance"),
        AppListing::new("Bank Jago", "com.jago.digitalBanking"),
    ]
}

/// A ranked table plus the wall-clock time it was fetched, so a cached
/// table can be labelled with its age.
#[derive(Debug, Clone)]
pub struct RankingSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub apps: Vec<RankedApp>,
}

struct CachedSnapshot {
    stored_at: Instant,
    snapshot: RankingSnapshot,
}

/// Fetches and ranks the watchlist, caching the result for [`DEFAULT_TTL`].
///
/// Expiry is the only eviction: there is no invalidation API, and staleness
/// inside the window is accepted by design. The mutex guards the single
/// cache slot and is never held across an await; overlapping refreshes on
/// expiry may duplicate work but stay correct.
pub struct RankingFetcher<S> {
    source: S,
    watchlist: Vec<AppListing>,
    ttl: Duration,
    cache: Mutex<Option<CachedSnapshot>>,
}

impl<S: AppSource> RankingFetcher<S> {
    pub fn new(source: S, watchlist: Vec<AppListing>) -> Self {
        Self {
            source,
            watchlist,
            ttl: DEFAULT_TTL,
            cache: Mutex::new(None),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Return the ranked table, fetching from the directory only when the
    /// cached copy has expired. An empty `apps` list means the directory
    /// yielded no data for any watched app.
    pub async fn rankings(&self) -> RankingSnapshot {
        if let Some(cached) = self.fresh_cached() {
            return cached;
        }

        let snapshot = self.fetch_all().await;
        let mut slot = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(CachedSnapshot {
            stored_at: Instant::now(),
            snapshot: snapshot.clone(),
        });
        snapshot
    }

    fn fresh_cached(&self) -> Option<RankingSnapshot> {
        let slot = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        slot.as_ref()
            .filter(|cached| cached.stored_at.elapsed() < self.ttl)
            .map(|cached| cached.snapshot.clone())
    }

    async fn fetch_all(&self) -> RankingSnapshot {
        let mut records: Vec<AppRecord> = Vec::with_capacity(self.watchlist.len());
        for app in &self.watchlist {
            match self.source.app_details(&app.store_id).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(app = %app.name, store_id = %app.store_id, error = %e,
                        "skipping app after failed fetch");
                }
            }
        }

        let apps = rank_apps(records);
        info!(
            ranked = apps.len(),
            watched = self.watchlist.len(),
            "ranking fetch complete"
        );
        RankingSnapshot {
            fetched_at: Utc::now(),
            apps,
        }
    }
}
